mod app;
mod clipboard;
mod convert;
mod messages;
mod panels;
mod worker;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cropbox_core::consts::{PANEL_HEIGHT, SOURCE_EXTENSIONS, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use cropbox_core::error::CropboxError;
use cropbox_core::session::CropSession;
use cropbox_core::settings::{Settings, ViewportSettings};
use tracing::{error, warn};

#[derive(Parser)]
#[command(name = "cropbox-gui", about = "Crop a region out of an image")]
#[command(version)]
struct Args {
    /// Image to open (a file picker is shown when omitted)
    image: Option<PathBuf>,

    /// Display area width in pixels
    #[arg(long, default_value_t = VIEWPORT_WIDTH)]
    viewport_width: f64,

    /// Display area height in pixels
    #[arg(long, default_value_t = VIEWPORT_HEIGHT)]
    viewport_height: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let settings = Settings {
        viewport: ViewportSettings {
            width: args.viewport_width,
            height: args.viewport_height,
            ..ViewportSettings::default()
        },
        ..Settings::default()
    };

    let Some(path) = args.image.or_else(pick_source) else {
        warn!("No image selected");
        show_message(rfd::MessageLevel::Warning, "Warning", "No image selected");
        return Ok(());
    };

    let session = match CropSession::open(&path, &settings) {
        Ok(session) => session,
        Err(e) => {
            let message = open_failure_message(&path, &e);
            error!("{message}");
            show_message(rfd::MessageLevel::Error, "Error", &message);
            return Err(e).with_context(|| format!("Failed to open {}", path.display()));
        }
    };

    eframe::run_native(
        "Cropbox",
        native_options(&settings),
        Box::new(|cc| Ok(Box::new(app::CropperApp::new(&cc.egui_ctx, session)))),
    )
    .map_err(|e| anyhow!("{e}"))
}

/// Fixed-size window centred on screen, sized to the display area plus the button bar.
fn native_options(settings: &Settings) -> eframe::NativeOptions {
    let window_size = [
        settings.viewport.width as f32,
        (settings.viewport.height + PANEL_HEIGHT) as f32,
    ];
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_title("Image Cropper"),
        centered: true,
        ..Default::default()
    }
}

fn open_failure_message(path: &Path, err: &CropboxError) -> String {
    format!("Could not open {}\n{err}", path.display())
}

/// Blocking native message box, used before the main window exists.
fn show_message(level: rfd::MessageLevel, title: &str, description: &str) {
    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn pick_source() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select image")
        .add_filter("Image files", SOURCE_EXTENSIONS)
        .pick_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centred_and_fixed() {
        let options = native_options(&Settings::default());
        assert!(options.centered);
        assert_eq!(options.viewport.resizable, Some(false));
        let size = options.viewport.inner_size.unwrap();
        assert_eq!(size, egui::vec2(VIEWPORT_WIDTH as f32, (VIEWPORT_HEIGHT + PANEL_HEIGHT) as f32));
    }

    #[test]
    fn open_failure_names_the_file() {
        let err = CropboxError::InvalidDimensions { width: 0, height: 0 };
        let message = open_failure_message(Path::new("/tmp/empty.png"), &err);
        assert!(message.starts_with("Could not open /tmp/empty.png\n"));
        assert!(message.ends_with(&err.to_string()));
    }
}
