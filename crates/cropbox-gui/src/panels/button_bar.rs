use cropbox_core::consts::PANEL_HEIGHT;
use cropbox_core::input::Action;

use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::bottom("button_bar")
        .exact_height(PANEL_HEIGHT as f32)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label("Coordinates:");

                // Read-only: rebuilt from the session every frame.
                let mut text = app.session.coordinate_text();
                ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .interactive(false)
                        .desired_width(220.0),
                );

                // Modal notices lock the buttons as well as the canvas.
                let enabled = app.accepts_input();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(enabled, egui::Button::new("Copy Coordinates"))
                        .clicked()
                    {
                        app.trigger(ctx, Action::CopyCoordinates);
                    }
                    if ui
                        .add_enabled(enabled && !app.is_saving, egui::Button::new("Save Selection"))
                        .clicked()
                    {
                        app.trigger(ctx, Action::SaveSelection);
                    }
                });
            });
        });
}
