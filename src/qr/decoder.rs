//! QR code decoder using rqrr

use crate::error::Result;
use crate::types::image::open_image;
use image::{DynamicImage, GrayImage};
use std::path::Path;

/// QR code decoder
#[derive(Clone, Debug, Default)]
pub struct QrDecoder {}

impl QrDecoder {
    pub fn new() -> Self {
        Self {}
    }

    /// Open an image file and decode the first QR symbol found in it.
    ///
    /// A file that cannot be opened is an error; a file without a readable
    /// symbol decodes to `None`.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<Option<String>> {
        let img = open_image(path.as_ref())?;
        Ok(self.decode(&img))
    }

    /// Decode a QR code from an image
    pub fn decode(&self, img: &DynamicImage) -> Option<String> {
        self.decode_gray(img.to_luma8())
    }

    pub fn decode_gray(&self, img: GrayImage) -> Option<String> {
        let mut prepared = rqrr::PreparedImage::prepare(img);
        let grids = prepared.detect_grids();

        if grids.is_empty() {
            log::debug!("No QR grid detected");
            return None;
        }

        for grid in grids {
            match grid.decode() {
                Ok((meta, content)) => {
                    log::debug!(
                        "Decoded QR: version={:?}, ecc_level={:?}, length={}",
                        meta.version,
                        meta.ecc_level,
                        content.len()
                    );
                    return Some(content);
                }
                Err(e) => {
                    log::warn!("Failed to decode one QR grid: {e:?}");
                }
            }
        }

        None
    }
}
