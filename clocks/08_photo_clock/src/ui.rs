//! UI module - egui status panel
//!
//! Shows where the hand is in the photo set and lets the keyboard ramp be
//! switched between the continuous and ladder modes.

use clock_engine::{ClockState, RampMode};
use nannou_egui::egui;

/// Snapshot of what the panel displays
pub struct StatusView<'a> {
    pub state: &'a ClockState,
    pub photo_count: usize,
    pub photo_name: Option<&'a str>,
}

/// Draw the status panel; returns true if the ramp mode changed
pub fn draw_status_panel(ctx: &egui::Context, view: &StatusView<'_>, ramp_mode: &mut RampMode) -> bool {
    let mut changed = false;
    let state = view.state;

    egui::Window::new("Status")
        .collapsible(true)
        .resizable(false)
        .default_width(220.0)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -60.0])
        .show(ctx, |ui| {
            if view.photo_count == 0 {
                ui.label("No photos loaded");
            } else {
                ui.label(format!(
                    "Photo {} of {}",
                    state.photo_index + 1,
                    view.photo_count
                ));
                if let Some(name) = view.photo_name {
                    ui.label(name);
                }
            }

            ui.separator();

            ui.label(format!("Mode: {}", state.mode.label()));
            ui.label(format!("Hand: {:.1}°", state.hand_angle));
            ui.label(format!("Velocity: {:+.2}", state.velocity));
            ui.label(format!("Revolutions: {}", state.revolutions));

            ui.separator();

            egui::ComboBox::from_label("Key ramp")
                .selected_text(ramp_mode.to_string())
                .show_ui(ui, |ui| {
                    for mode in [RampMode::Continuous, RampMode::Ladder] {
                        if ui
                            .selectable_value(ramp_mode, mode, mode.to_string())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
        });

    changed
}
