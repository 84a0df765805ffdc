use std::sync::mpsc;
use std::sync::Arc;

use cropbox_core::io::crop::{save_crop, OriginalCoords};
use image::DynamicImage;
use tracing::{error, info};

use crate::messages::WorkerResult;

/// Ask for a destination and write the crop, off the UI thread.
pub fn spawn_export(
    image: Arc<DynamicImage>,
    coords: OriginalCoords,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let tx = result_tx.clone();
    let thread_ctx = ctx.clone();
    let spawned = std::thread::Builder::new()
        .name("cropbox-export".into())
        .spawn(move || {
            let result = match pick_target() {
                Some(path) => match save_crop(&image, &coords, &path) {
                    Ok(path) => {
                        info!(path = %path.display(), %coords, "Selection exported");
                        WorkerResult::Saved { path }
                    }
                    Err(e) => WorkerResult::Error {
                        message: e.to_string(),
                    },
                },
                None => WorkerResult::SaveCancelled,
            };
            send(&tx, &thread_ctx, result);
        });

    if let Err(e) = spawned {
        error!("Failed to spawn export thread: {e}");
        send(
            &result_tx,
            &ctx,
            WorkerResult::Error {
                message: format!("Failed to start export: {e}"),
            },
        );
    }
}

fn pick_target() -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg"])
        .add_filter("All files", &["*"])
        .set_file_name("cropped.png")
        .save_file()
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}
