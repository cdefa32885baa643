//! Photo library - lists the prepared photo set and uploads it as textures
//!
//! The ingestion step writes photos into one directory with names that sort in
//! capture order; this module only lists and loads them.

use std::path::{Path, PathBuf};

use nannou::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File extensions accepted as photos (lowercase)
const PHOTO_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("photo directory {} does not exist", .0.display())]
    MissingDir(PathBuf),

    #[error("photo directory {} contains no images", .0.display())]
    Empty(PathBuf),

    #[error("failed to read photo directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to load {}: {}", .path.display(), .message)]
    Load { path: PathBuf, message: String },
}

/// A photo ready to draw
pub struct Photo {
    pub name: String,
    pub texture: wgpu::Texture,
}

/// Whether `path` has a photo extension (case-insensitive)
pub fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            PHOTO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// List the photos directly inside `dir`, sorted by file name.
pub fn scan_photo_dir(dir: &Path) -> Result<Vec<PathBuf>, PhotoError> {
    if !dir.is_dir() {
        return Err(PhotoError::MissingDir(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_photo(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    if paths.is_empty() {
        return Err(PhotoError::Empty(dir.to_path_buf()));
    }
    debug!(count = paths.len(), dir = %dir.display(), "scanned photo directory");
    Ok(paths)
}

fn load_photo(app: &App, path: &Path) -> Result<Photo, PhotoError> {
    let texture = wgpu::Texture::from_path(app, path).map_err(|e| PhotoError::Load {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Photo { name, texture })
}

/// Upload every listed photo. Photos that fail to decode are skipped.
pub fn load_photos(app: &App, paths: &[PathBuf]) -> Vec<Photo> {
    let photos: Vec<Photo> = paths
        .iter()
        .filter_map(|path| match load_photo(app, path) {
            Ok(photo) => Some(photo),
            Err(e) => {
                warn!("{}", e);
                None
            }
        })
        .collect();
    info!(loaded = photos.len(), listed = paths.len(), "photos loaded");
    photos
}

/// Largest rect with the texture's aspect ratio that fits inside `bounds`
pub fn fit_rect(texture_size: [u32; 2], bounds: Rect) -> Rect {
    let [w, h] = texture_size;
    if w == 0 || h == 0 {
        return bounds;
    }
    let scale = (bounds.w() / w as f32).min(bounds.h() / h as f32);
    Rect::from_x_y_w_h(bounds.x(), bounds.y(), w as f32 * scale, h as f32 * scale)
}
