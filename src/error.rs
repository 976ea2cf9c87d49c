//! Error types for QR code generator operations

use thiserror::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Text box was empty (or whitespace only) on generate
    #[error("There is no text to convert to QR Code!")]
    NoText,

    /// Save requested before anything was loaded or generated
    #[error("There is no QR Code image to convert to text!")]
    NoImage,

    /// Data did not fit in any QR version
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_messages() {
        assert_eq!(
            Error::NoText.to_string(),
            "There is no text to convert to QR Code!"
        );
        assert_eq!(
            Error::NoImage.to_string(),
            "There is no QR Code image to convert to text!"
        );
    }

    #[test]
    fn test_qr_error_conversion() {
        let err = Error::from(qrcode::types::QrError::DataTooLong);
        assert!(matches!(err, Error::QrEncode(_)));
        assert!(err.to_string().starts_with("Failed to encode QR code"));
    }
}
