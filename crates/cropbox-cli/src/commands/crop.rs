use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cropbox_core::consts::DEFAULT_EXPORT_EXTENSION;
use cropbox_core::io::crop::{save_crop, OriginalCoords};
use cropbox_core::io::image_io::load_image;
use tracing::info;

#[derive(Args)]
pub struct CropArgs {
    /// Input image
    pub file: PathBuf,

    /// Region in original pixels: "x1,y1,x2,y2" or "(x1, y1, x2, y2)"
    #[arg(short, long)]
    pub region: OriginalCoords,

    /// Output image; format follows the extension (auto-generated if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let img = load_image(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| crop_output_path(&args.file, &args.region));

    info!(region = %args.region, "Cropping");
    let written = save_crop(&img, &args.region, &output_path)
        .with_context(|| format!("Failed to save {}", output_path.display()))?;

    println!(
        "Saved {}x{} crop to {}",
        args.region.width(),
        args.region.height(),
        written.display()
    );
    Ok(())
}

fn crop_output_path(source: &Path, region: &OriginalCoords) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!(
        "{stem}_crop{}x{}.{DEFAULT_EXPORT_EXTENSION}",
        region.width(),
        region.height()
    ))
}
