use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::Style;
use cropbox_core::io::image_io::{image_size, load_image};
use cropbox_core::viewport::ViewportTransform;

use super::ViewportArgs;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,

    #[command(flatten)]
    pub viewport: ViewportArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = load_image(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let settings = args.viewport.to_settings();
    let transform = ViewportTransform::fit(image_size(&img), &settings.viewport)?;
    let scaled = transform.scaled_size();

    let label = Style::new().dim();
    let value = Style::new().bold();

    println!("{} {}", label.apply_to("File:       "), args.file.display());
    println!(
        "{} {}",
        label.apply_to("Dimensions: "),
        value.apply_to(format!("{}x{}", img.width(), img.height()))
    );
    println!("{} {:?}", label.apply_to("Color type: "), img.color());
    println!(
        "{} {:.4} ({}x{} in a {}x{} display area)",
        label.apply_to("Fit scale:  "),
        transform.scale(),
        scaled.width,
        scaled.height,
        settings.viewport.width,
        settings.viewport.height
    );
    println!(
        "{} {:.4} .. {:.1}",
        label.apply_to("Zoom range: "),
        transform.min_allowed_scale(),
        transform.max_scale()
    );

    Ok(())
}
