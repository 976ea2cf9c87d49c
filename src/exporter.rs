use crate::error::Result;
use image::DynamicImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "png";

/// Append `.png` when the chosen path carries no extension
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Resize to `size`×`size` and write to `output_path`, replacing any existing
/// file. The encoder is picked from the file extension.
pub fn save_resized_image(
    output_path: &Path,
    image: &DynamicImage,
    size: u32,
    filter: FilterType,
) -> Result<()> {
    let output_path = with_default_extension(output_path);
    let resized = image.resize_exact(size, size, filter);
    resized.save(&output_path)?;

    log::info!(
        "Image exported successfully to: {} ({size}×{size})",
        output_path.display()
    );
    Ok(())
}
