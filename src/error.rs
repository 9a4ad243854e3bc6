//! Error types for the hdr-sticker crate.

use std::path::PathBuf;

/// Errors that can occur while rendering a sticker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input path does not reference an existing regular file.
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A tone-mapping factor was zero or negative.
    #[error("invalid parameter: {name} must be positive (got {value})")]
    InvalidParameter {
        /// Parameter name as exposed on the command line.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Base and overlay images do not share the same dimensions.
    #[error(
        "dimension mismatch: base is {base_width}x{base_height}, \
         overlay is {overlay_width}x{overlay_height}"
    )]
    DimensionMismatch {
        /// Base image width in pixels.
        base_width: u32,
        /// Base image height in pixels.
        base_height: u32,
        /// Overlay image width in pixels.
        overlay_width: u32,
        /// Overlay image height in pixels.
        overlay_height: u32,
    },

    /// An error occurred during image processing (decode, resize, encode).
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let missing = Error::MissingFile(PathBuf::from("/tmp/base.png"));
        assert!(missing.to_string().contains("/tmp/base.png"));

        let invalid = Error::InvalidParameter {
            name: "hdr-boost",
            value: -1.5,
        };
        let msg = invalid.to_string();
        assert!(msg.contains("hdr-boost"));
        assert!(msg.contains("-1.5"));

        let mismatch = Error::DimensionMismatch {
            base_width: 300,
            base_height: 300,
            overlay_width: 200,
            overlay_height: 100,
        };
        let msg = mismatch.to_string();
        assert!(msg.contains("300x300"));
        assert!(msg.contains("200x100"));

        let io_err = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io_err.to_string().contains("gone"));
    }
}
