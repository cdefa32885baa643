//! Photo Clock
//!
//! A clock hand that leafs through a photo set: drag the hand around the face
//! or hold an arrow key, and every pass through twelve o'clock steps to the
//! next (or previous) photo.

mod controls;
mod drawing;
mod photos;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use clock_engine::{
    ClockState, FixedStep, InputEvent, MotionParams, PhotoSequence, RampMode, Session,
};
use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::controls::{grabs_face, pointer_offset, KeyboardState};
use crate::drawing::{
    colors, draw_clock_face, draw_hand, draw_help_text, draw_photo, draw_placeholder, Layout,
};
use crate::photos::Photo;
use crate::ui::{draw_status_panel, StatusView};

const CLOCK_NAME: &str = "photo_clock";

fn main() {
    nannou::app(model).update(update).run();
}

/// Command line options; anything given here overrides the saved config
#[derive(Debug, Parser)]
#[command(name = "photo-clock", about = "Leaf through photos by turning a clock hand")]
struct Cli {
    /// Directory holding the prepared photo set
    #[arg(short, long, value_name = "DIR")]
    photos: Option<PathBuf>,

    /// Config file to use instead of the per-user one
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Photo to show first (0-based)
    #[arg(long, value_name = "N")]
    start_index: Option<usize>,

    /// Use the discrete speed ladder for held keys
    #[arg(long)]
    ladder: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Persisted configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    photos_dir: Option<PathBuf>,
    window_width: u32,
    window_height: u32,
    /// Pivot position as a fraction of the window, from the top-left corner
    pivot_x: f32,
    pivot_y: f32,
    face_radius: f32,
    initial_hand_angle: f64,
    start_index: usize,
    /// Clock ticks per second
    tick_rate: f64,
    motion: MotionParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photos_dir: None,
            window_width: 640,
            window_height: 1000,
            pivot_x: 0.5,
            pivot_y: 0.75,
            face_radius: 150.0,
            // Hand pointing at twelve
            initial_hand_angle: 90.0,
            start_index: 0,
            tick_rate: 60.0,
            motion: MotionParams::default(),
        }
    }
}

impl Config {
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.photos {
            self.photos_dir = Some(dir.clone());
        }
        if let Some(index) = cli.start_index {
            self.start_index = index;
        }
        if cli.ladder {
            self.motion.ramp_mode = RampMode::Ladder;
        }
    }
}

/// Application state
struct Model {
    /// Clock engine, input queue and pacing
    session: Session,
    /// Photo textures in display order
    photos: Vec<Photo>,
    /// Held arrow keys
    keyboard: KeyboardState,
    /// Active configuration, file values with command line overrides
    config: Config,
    /// Configuration as read from disk; the only copy ever written back
    saved: Config,
    /// Explicit config file from the command line
    config_file: Option<PathBuf>,
    /// Shown in place of the photo when none can be displayed
    status_message: Option<String>,
    /// egui integration
    egui: Egui,
}

impl Model {
    fn layout(&self, window_rect: Rect) -> Layout {
        Layout::calculate(
            window_rect,
            (self.config.pivot_x, self.config.pivot_y),
            self.config.face_radius,
        )
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "photo_clock={level},clock_engine={level},wgpu=warn,winit=warn"
        ))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => clock_engine::load_config_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => clock_engine::load_config(CLOCK_NAME).context("loading saved config")?,
    };
    Ok(loaded.unwrap_or_default())
}

fn save_config(config_file: Option<&Path>, config: &Config) {
    let result = match config_file {
        Some(path) => clock_engine::save_config_to(path, config),
        None => clock_engine::save_config(CLOCK_NAME, config),
    };
    if let Err(e) = result {
        warn!("Failed to save config: {}", e);
    }
}

/// Record a ramp mode change on the on-disk config and write it out
fn save_ramp_mode(saved: &mut Config, config_file: Option<&Path>, ramp_mode: RampMode) {
    saved.motion.ramp_mode = ramp_mode;
    save_config(config_file, saved);
}

/// Load the photo set; on failure returns no photos and a message to show
fn open_photos(app: &App, dir: Option<&Path>) -> (Vec<Photo>, Option<String>) {
    let Some(dir) = dir else {
        return (
            Vec::new(),
            Some("No photo directory configured (use --photos)".to_string()),
        );
    };

    match photos::scan_photo_dir(dir) {
        Ok(paths) => {
            let loaded = photos::load_photos(app, &paths);
            let message = loaded
                .is_empty()
                .then(|| format!("No photos in {} could be loaded", dir.display()));
            (loaded, message)
        }
        Err(e) => {
            error!("{}", e);
            (Vec::new(), Some(e.to_string()))
        }
    }
}

fn model(app: &App) -> Model {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let saved = load_config(&cli).unwrap_or_else(|e| {
        warn!("{:#}; using defaults", e);
        Config::default()
    });
    let mut config = saved.clone();
    config.apply_cli(&cli);

    let window_id = app
        .new_window()
        .title("Photo Clock")
        .size(config.window_width, config.window_height)
        .view(view)
        .key_pressed(key_pressed)
        .key_released(key_released)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .raw_event(raw_window_event)
        .build()
        .unwrap_or_else(|e| {
            error!("Failed to create window: {:?}", e);
            std::process::exit(1);
        });

    let Some(window) = app.window(window_id) else {
        error!("Window closed during startup");
        std::process::exit(1);
    };
    let egui = Egui::from_window(&window);

    let (photos, status_message) = open_photos(app, config.photos_dir.as_deref());

    let state = ClockState::new(config.initial_hand_angle, config.start_index, photos.len());
    let session = Session::new(
        state,
        config.motion.clone(),
        FixedStep::from_rate(config.tick_rate),
    );
    info!(
        photos = photos.len(),
        start = state.photo_index,
        ramp = %config.motion.ramp_mode,
        "photo clock ready"
    );

    Model {
        session,
        photos,
        keyboard: KeyboardState::default(),
        config,
        saved,
        config_file: cli.config,
        status_message,
        egui,
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    let photo_count = model.photos.photo_count();
    let shown = model.session.state().photo_index;

    model.session.pump(update.since_last, photo_count);
    let state = *model.session.state();

    if state.photo_index != shown {
        if let Some(photo) = model.photos.photo(state.photo_index) {
            debug!(index = state.photo_index, name = %photo.name, "showing photo");
        }
    }

    if !model.session.is_running() {
        info!("Quit requested");
        app.quit();
        return;
    }

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let mut ramp_mode = model.session.params().ramp_mode;
    let status = StatusView {
        state: &state,
        photo_count,
        photo_name: model
            .photos
            .photo(state.photo_index)
            .map(|photo| photo.name.as_str()),
    };
    let ramp_changed = draw_status_panel(&ctx, &status, &mut ramp_mode);

    drop(ctx);

    if ramp_changed {
        info!(ramp = %ramp_mode, "key ramp changed");
        let mut params = model.session.params().clone();
        params.ramp_mode = ramp_mode;
        model.session.set_params(params);
        model.config.motion.ramp_mode = ramp_mode;
        save_ramp_mode(&mut model.saved, model.config_file.as_deref(), ramp_mode);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    // Clear background
    draw.background().color(colors::BACKGROUND);

    let layout = model.layout(window_rect);
    let state = model.session.state();

    match model.photos.photo(state.photo_index) {
        Some(photo) => draw_photo(&draw, photo, &layout),
        None => draw_placeholder(
            &draw,
            model.status_message.as_deref().unwrap_or("No photos"),
            &layout,
        ),
    }

    draw_clock_face(&draw, &layout);
    draw_hand(&draw, &layout, state.hand_angle);
    draw_help_text(&draw, window_rect);

    // Render to frame
    if let Err(e) = draw.to_frame(app, &frame) {
        error!("Failed to render frame: {:?}", e);
    }

    // Render egui on top
    if let Err(e) = model.egui.draw_to_frame(&frame) {
        error!("Failed to render egui: {:?}", e);
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    if key == Key::Escape {
        model.session.push(InputEvent::QuitRequested);
        return;
    }
    let shift = app.keys.mods.shift();
    if let Some(event) = model.keyboard.pressed(key, shift) {
        model.session.push(event);
    }
}

fn key_released(app: &App, model: &mut Model, key: Key) {
    let shift = app.keys.mods.shift();
    if let Some(event) = model.keyboard.released(key, shift) {
        model.session.push(event);
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let layout = model.layout(app.window_rect());
    let (x, y) = pointer_offset(pos, layout.pivot);
    model.session.push(InputEvent::PointerMoved { x, y });
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let pos = app.mouse.position();
    let layout = model.layout(app.window_rect());

    // Only presses on or near the face grab the hand
    if grabs_face(pos, layout.pivot, layout.radius) {
        let (x, y) = pointer_offset(pos, layout.pivot);
        model.session.push(InputEvent::PointerMoved { x, y });
        model.session.push(InputEvent::PointerDown);
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.session.push(InputEvent::PointerUp);
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);

    // Key and button releases are lost while unfocused
    if let nannou::winit::event::WindowEvent::Focused(false) = event {
        model.session.push(InputEvent::PointerUp);
        if let Some(release) = model.keyboard.release_all() {
            model.session.push(release);
        }
    }
}
