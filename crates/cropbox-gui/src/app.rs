use std::sync::mpsc;

use cropbox_core::input::{Action, InputEvent, Outcome};
use cropbox_core::io::crop::OriginalCoords;
use cropbox_core::session::CropSession;
use tracing::{info, warn};

use crate::clipboard::SystemClipboard;
use crate::convert::image_to_color_image;
use crate::messages::WorkerResult;
use crate::panels;
use crate::worker;

/// A modal message shown over the dialog until dismissed.
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

pub struct CropperApp {
    pub session: CropSession,
    pub texture: egui::TextureHandle,
    pub notice: Option<Notice>,
    pub is_saving: bool,
    result_tx: mpsc::Sender<WorkerResult>,
    result_rx: mpsc::Receiver<WorkerResult>,
    clipboard: SystemClipboard,
}

impl CropperApp {
    pub fn new(ctx: &egui::Context, session: CropSession) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let max_side = ctx.input(|i| i.max_texture_side);
        let texture = ctx.load_texture(
            "source",
            image_to_color_image(&session.source(), max_side),
            egui::TextureOptions::LINEAR,
        );

        Self {
            session,
            texture,
            notice: None,
            is_saving: false,
            result_tx,
            result_rx,
            clipboard: SystemClipboard::default(),
        }
    }

    /// False while a notice is open; the canvas and buttons ignore input then.
    pub fn accepts_input(&self) -> bool {
        self.notice.is_none()
    }

    /// Feed one event to the session and act on the outcome.
    pub fn dispatch(&mut self, ctx: &egui::Context, event: InputEvent) {
        let outcome = self.session.handle_input(event);
        self.handle_outcome(ctx, outcome);
    }

    pub fn trigger(&mut self, ctx: &egui::Context, action: Action) {
        self.dispatch(ctx, InputEvent::Button(action));
    }

    fn handle_outcome(&mut self, ctx: &egui::Context, outcome: Outcome) {
        match outcome {
            Outcome::Unchanged => {}
            Outcome::Redraw => ctx.request_repaint(),
            Outcome::Save(coords) => self.start_export(ctx, coords),
            Outcome::Copy(text) => self.copy_coordinates(&text),
            Outcome::EmptySelection(Action::SaveSelection) => {
                self.show_notice("Warning", "No region selected".into());
            }
            Outcome::EmptySelection(_) => {
                self.show_notice("Info", "No region selected".into());
            }
        }
    }

    fn start_export(&mut self, ctx: &egui::Context, coords: OriginalCoords) {
        if self.is_saving {
            return;
        }
        self.is_saving = true;
        worker::spawn_export(self.session.source(), coords, self.result_tx.clone(), ctx.clone());
    }

    fn copy_coordinates(&mut self, text: &str) {
        match self.clipboard.copy(text) {
            Ok(()) => {
                info!(coords = text, "Coordinates copied");
                self.show_notice("Done", format!("Coordinates copied to clipboard\n{text}"));
            }
            Err(e) => {
                warn!("{e}");
                self.show_notice("Error", e.to_string());
            }
        }
    }

    fn show_notice(&mut self, title: &'static str, message: String) {
        self.notice = Some(Notice { title, message });
    }

    /// Drain all pending results from the export thread.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.is_saving = false;
            match result {
                WorkerResult::Saved { path } => {
                    self.show_notice("Done", format!("Image saved to\n{}", path.display()));
                }
                WorkerResult::SaveCancelled => {}
                WorkerResult::Error { message } => {
                    warn!("Export failed: {message}");
                    self.show_notice("Error", message);
                }
            }
        }
    }

    fn show_notice_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut close = false;
        egui::Window::new(notice.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(&notice.message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            });

        if close || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.notice = None;
        }
    }
}

impl eframe::App for CropperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::button_bar::show(ctx, self);
        panels::canvas::show(ctx, self);

        self.show_notice_window(ctx);
    }
}
