//! Error types for cardlink operations

use thiserror::Error;

/// Result type alias using cardlink's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cardlink operations
#[derive(Error, Debug)]
pub enum Error {
    /// The view has no mounted QR visual to export from
    #[error("QR source not found: {0}")]
    SourceNotFound(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR symbol found in image
    #[error("No QR symbol found in image")]
    NoQrSymbolFound,

    /// SVG markup could not be parsed back into a raster surface
    #[error("SVG markup error: {0}")]
    SvgParse(String),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Exported artifact did not decode to the expected payload
    #[error("Export verification failed: {0}")]
    Verify(String),

    /// Clipboard access failed or was denied by the platform
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(format!("JSON error: {}", e))
    }
}
