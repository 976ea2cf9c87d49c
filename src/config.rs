use std::ops::RangeInclusive;

use image::Rgb;
use image::imageops::FilterType;

pub const DEFAULT_FG_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const DEFAULT_BG_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const DEFAULT_IMAGE_SIZE: u32 = 300;
pub const RESAMPLING: FilterType = FilterType::Lanczos3;

/// Startup defaults. Nothing here is read from disk or the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
    /// Square edge of every image shown in the window
    pub preview_size: u32,
    pub resampling: FilterType,
    pub export_size_range: RangeInclusive<u32>,
    pub export_size_step: u32,
    pub initial_export_size: u32,
    pub qr_box_size: u32,
    pub qr_border: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FG_COLOR,
            background: DEFAULT_BG_COLOR,
            preview_size: DEFAULT_IMAGE_SIZE,
            resampling: RESAMPLING,
            export_size_range: 200..=2000,
            export_size_step: 50, // 36 steps over the range
            initial_export_size: 300,
            qr_box_size: 20,
            qr_border: 2,
        }
    }
}

impl AppConfig {
    pub fn clamp_export_size(&self, value: u32) -> u32 {
        value.clamp(
            *self.export_size_range.start(),
            *self.export_size_range.end(),
        )
    }
}
