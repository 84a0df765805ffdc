use cropbox_core::input::{Action, InputEvent, PointerButton};
use cropbox_core::overlay::SelectionOverlay;

use crate::app::CropperApp;
use crate::panels::{to_display, to_screen};

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let display = app.session.transform().display_size();
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(display.width as f32, display.height as f32),
                egui::Sense::click_and_drag(),
            );

            if app.accepts_input() {
                for event in collect_input(ui, rect) {
                    app.dispatch(ctx, event);
                }
                if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)) {
                    app.trigger(ctx, Action::CancelSelection);
                }
            }

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, egui::Color32::from_gray(240));

            let overlay = app.session.overlay();
            painter.image(
                app.texture.id(),
                to_screen(overlay.image, rect.min),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            if let Some(ref selection) = overlay.selection {
                draw_selection(&painter, selection, rect.min);
            }
        });
}

/// Translate this frame's pointer activity into session events.
fn collect_input(ui: &egui::Ui, rect: egui::Rect) -> Vec<InputEvent> {
    ui.input(|i| {
        let mut events = Vec::new();
        let Some(screen_pos) = i.pointer.latest_pos() else {
            return events;
        };
        let pos = to_display(screen_pos, rect.min);
        let on_canvas = rect.contains(screen_pos);

        for (egui_button, button) in [
            (egui::PointerButton::Primary, PointerButton::Primary),
            (egui::PointerButton::Secondary, PointerButton::Secondary),
        ] {
            if on_canvas && i.pointer.button_pressed(egui_button) {
                events.push(InputEvent::Press { button, pos });
            }
        }

        if i.pointer.delta() != egui::Vec2::ZERO {
            events.push(InputEvent::Move { pos });
        }

        // Releases are forwarded even off the canvas so drags always end.
        for (egui_button, button) in [
            (egui::PointerButton::Primary, PointerButton::Primary),
            (egui::PointerButton::Secondary, PointerButton::Secondary),
        ] {
            if i.pointer.button_released(egui_button) {
                events.push(InputEvent::Release { button, pos });
            }
        }

        if on_canvas && i.pointer.button_double_clicked(egui::PointerButton::Primary) {
            events.push(InputEvent::DoubleClick {
                button: PointerButton::Primary,
                pos,
            });
        }

        let scroll = i.raw_scroll_delta.y;
        if on_canvas && scroll != 0.0 {
            events.push(InputEvent::Wheel {
                delta: f64::from(scroll),
                pos,
            });
        }

        events
    })
}

fn draw_selection(painter: &egui::Painter, selection: &SelectionOverlay, origin: egui::Pos2) {
    let mask_color = egui::Color32::from_rgba_unmultiplied(51, 51, 51, 128);
    for mask in selection.masks {
        painter.rect_filled(to_screen(mask, origin), 0.0, mask_color);
    }

    painter.rect_stroke(
        to_screen(selection.outline, origin),
        0.0,
        egui::Stroke::new(2.0, egui::Color32::RED),
        egui::epaint::StrokeKind::Middle,
    );

    for (_, handle) in selection.handles {
        let r = to_screen(handle, origin);
        painter.rect_filled(r, 0.0, egui::Color32::WHITE);
        painter.rect_stroke(
            r,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::BLACK),
            egui::epaint::StrokeKind::Inside,
        );
    }
}
