use crate::error::Result;
use egui::{ColorImage, TextureHandle};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgb, RgbImage};
use std::path::Path;

/// GPU side of the preview, tagged with the image revision it was built from
#[derive(Clone)]
pub struct ImageData {
    pub texture: TextureHandle,
    pub revision: u64,
}

impl ImageData {
    pub fn from_image(
        image: &DynamicImage,
        revision: u64,
        ctx: &egui::Context,
    ) -> ImageData {
        let texture = ctx.load_texture(
            "preview",
            to_color_image(image),
            egui::TextureOptions::LINEAR,
        );
        ImageData { texture, revision }
    }
}

pub fn to_color_image(image: &DynamicImage) -> ColorImage {
    let rgba_img = image.to_rgba8();
    let size = [rgba_img.width() as usize, rgba_img.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba_img.as_raw())
}

/// Decode an image file, sniffing the format from its content so missing or
/// wrong extensions still load
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img)
}

/// Decode an image file and squash it to a `size`×`size` preview
pub fn load_preview(path: &Path, size: u32, filter: FilterType) -> Result<DynamicImage> {
    let img = open_image(path)?;
    log::debug!(
        "Loaded {} ({}×{}), resizing to {size}×{size}",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img.resize_exact(size, size, filter))
}

/// White square shown before anything is loaded or generated
pub fn blank_preview(size: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(size, size, Rgb([255, 255, 255])))
}
