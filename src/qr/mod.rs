//! QR code encoding and decoding
//!
//! Encoding renders text into a coloured bitmap with explicit module and
//! border sizing. Decoding scans a bitmap (or an image file) with `rqrr` and
//! returns the text of the first symbol that decodes.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::QrEncoder;
