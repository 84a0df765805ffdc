pub mod config;
pub mod crop;
pub mod info;

use clap::Args;
use cropbox_core::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use cropbox_core::settings::{Settings, ViewportSettings};

/// Display area used to compute the dialog's fit scale.
#[derive(Args)]
pub struct ViewportArgs {
    /// Display area width in pixels
    #[arg(long, default_value_t = VIEWPORT_WIDTH)]
    pub viewport_width: f64,

    /// Display area height in pixels
    #[arg(long, default_value_t = VIEWPORT_HEIGHT)]
    pub viewport_height: f64,
}

impl ViewportArgs {
    pub fn to_settings(&self) -> Settings {
        Settings {
            viewport: ViewportSettings {
                width: self.viewport_width,
                height: self.viewport_height,
                ..ViewportSettings::default()
            },
            ..Settings::default()
        }
    }
}
