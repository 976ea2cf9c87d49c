//! QR code encoder

use crate::config::AppConfig;
use crate::error::Result;
use image::{Rgb, RgbImage};
use qrcode::{Color, EcLevel, QrCode};

/// Renders text as a QR bitmap
#[derive(Clone, Debug)]
pub struct QrEncoder {
    ecc_level: EcLevel,
    /// Edge of one module in pixels
    box_size: u32,
    /// Quiet zone width in modules
    border: u32,
    foreground: Rgb<u8>,
    background: Rgb<u8>,
}

impl QrEncoder {
    /// Low error correction, 20px modules, 2 module border, black on white
    pub fn new() -> Self {
        Self {
            ecc_level: EcLevel::L,
            box_size: 20,
            border: 2,
            foreground: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_module_size(config.qr_box_size, config.qr_border)
            .with_colors(config.foreground, config.background)
    }

    pub fn with_module_size(mut self, box_size: u32, border: u32) -> Self {
        self.box_size = box_size.max(1);
        self.border = border;
        self
    }

    pub fn with_colors(mut self, foreground: Rgb<u8>, background: Rgb<u8>) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Encode a string, picking the smallest QR version the data fits in
    pub fn encode_string(&self, data: &str) -> Result<RgbImage> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ecc_level)?;
        let modules = code.width() as u32;
        let colors = code.to_colors();

        log::debug!(
            "Encoded QR: version={:?}, modules={modules}, bytes={}",
            code.version(),
            data.len()
        );

        let size = (modules + 2 * self.border) * self.box_size;
        let image = RgbImage::from_fn(size, size, |x, y| {
            let mx = x / self.box_size;
            let my = y / self.box_size;
            if mx < self.border
                || my < self.border
                || mx >= modules + self.border
                || my >= modules + self.border
            {
                return self.background;
            }
            let index = ((my - self.border) * modules + (mx - self.border)) as usize;
            match colors[index] {
                Color::Dark => self.foreground,
                Color::Light => self.background,
            }
        });

        Ok(image)
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
