//! Drawing module - clock face, hand and photo rendering
//!
//! Renders the photo clock visual elements using nannou's Draw API.

use nannou::prelude::*;

use crate::photos::{fit_rect, Photo};

/// Color palette for the photo clock
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 150,
        green: 150,
        blue: 150,
        standard: std::marker::PhantomData,
    };
    pub const FACE: Srgb<u8> = Srgb {
        red: 0,
        green: 0,
        blue: 0,
        standard: std::marker::PhantomData,
    };
    pub const TWELVE_MARK: Srgb<u8> = Srgb {
        red: 200,
        green: 40,
        blue: 40,
        standard: std::marker::PhantomData,
    };
    pub const PLACEHOLDER: Srgb<u8> = Srgb {
        red: 120,
        green: 120,
        blue: 120,
        standard: std::marker::PhantomData,
    };
    pub const TEXT: Srgb<u8> = Srgb {
        red: 30,
        green: 30,
        blue: 30,
        standard: std::marker::PhantomData,
    };
}

/// Stroke width shared by the face outline and the hand
pub const LINE_WIDTH: f32 = 8.0;

/// Photo panel above, clock face below
pub struct Layout {
    pub photo_panel: Rect,
    pub pivot: Point2,
    pub radius: f32,
}

impl Layout {
    /// `pivot_frac` places the pivot as a fraction of the window measured from
    /// the top-left corner, the way screen coordinates run.
    pub fn calculate(window_rect: Rect, pivot_frac: (f32, f32), radius: f32) -> Self {
        let pivot = pt2(
            window_rect.left() + window_rect.w() * pivot_frac.0,
            window_rect.top() - window_rect.h() * pivot_frac.1,
        );

        let padding = 20.0;
        let face_top = pivot.y + radius + LINE_WIDTH;
        let panel_h = (window_rect.top() - face_top - 2.0 * padding).max(0.0);
        let photo_panel = Rect::from_x_y_w_h(
            window_rect.x(),
            window_rect.top() - padding - panel_h / 2.0,
            window_rect.w() - 2.0 * padding,
            panel_h,
        );

        Layout {
            photo_panel,
            pivot,
            radius,
        }
    }
}

/// Draw the face outline, pivot and twelve o'clock mark
pub fn draw_clock_face(draw: &Draw, layout: &Layout) {
    draw.ellipse()
        .xy(layout.pivot)
        .radius(layout.radius)
        .no_fill()
        .stroke(colors::FACE)
        .stroke_weight(LINE_WIDTH);

    draw.ellipse()
        .xy(layout.pivot)
        .radius(LINE_WIDTH)
        .color(colors::FACE);

    // Twelve o'clock is where photos change
    let top = layout.pivot + vec2(0.0, layout.radius);
    draw.line()
        .start(top - vec2(0.0, LINE_WIDTH * 2.0))
        .end(top + vec2(0.0, LINE_WIDTH))
        .color(colors::TWELVE_MARK)
        .weight(LINE_WIDTH / 2.0);
}

/// Draw the hand at `hand_angle` degrees, counter-clockwise from +x
pub fn draw_hand(draw: &Draw, layout: &Layout, hand_angle: f64) {
    let theta = (hand_angle as f32).to_radians();
    let dir = vec2(theta.cos(), theta.sin());
    let tip = layout.pivot + dir * layout.radius * 0.85;
    let tail = layout.pivot - dir * layout.radius * 0.15;

    draw.line()
        .start(tail)
        .end(tip)
        .color(colors::FACE)
        .weight(LINE_WIDTH)
        .caps_round();
}

/// Draw the current photo, letterboxed into the photo panel
pub fn draw_photo(draw: &Draw, photo: &Photo, layout: &Layout) {
    let rect = fit_rect(photo.texture.size(), layout.photo_panel);
    draw.texture(&photo.texture).xy(rect.xy()).wh(rect.wh());
}

/// Draw an empty frame when there is nothing to show
pub fn draw_placeholder(draw: &Draw, message: &str, layout: &Layout) {
    let panel = layout.photo_panel;
    draw.rect()
        .xy(panel.xy())
        .wh(panel.wh())
        .no_fill()
        .stroke(colors::PLACEHOLDER)
        .stroke_weight(2.0);

    draw.text(message)
        .xy(panel.xy())
        .color(colors::TEXT)
        .font_size(16)
        .w(panel.w() - 20.0);
}

/// Draw keyboard help along the bottom edge
pub fn draw_help_text(draw: &Draw, window_rect: Rect) {
    let help_lines = [
        "Drag the hand past twelve to change photo",
        "→/↑: Forward  |  ←/↓: Rewind  |  Shift: Faster (ladder)",
        "Esc: Quit",
    ];

    let base_y = window_rect.bottom() + 20.0;

    for (i, line) in help_lines.iter().enumerate() {
        draw.text(line)
            .x_y(0.0, base_y + (help_lines.len() - 1 - i) as f32 * 16.0)
            .color(srgba(30u8, 30u8, 30u8, 160u8))
            .font_size(11)
            .w(window_rect.w());
    }
}
