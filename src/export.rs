//! PNG export with an embedded ICC color profile.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{Error, Result};

/// Read an ICC profile as a raw byte blob.
///
/// The profile's internal structure is never parsed or validated; it is
/// attached to the output verbatim and only describes how the pixel data
/// is meant to be interpreted.
///
/// # Errors
///
/// Returns [`Error::MissingFile`] if `path` is not an existing regular
/// file, or [`Error::Io`] if it cannot be read.
pub fn read_icc_profile(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}

/// Write an RGBA image as a losslessly max-compressed PNG carrying `icc`
/// in its color-profile chunk.
///
/// The pixel data is not re-encoded against the profile.
///
/// # Errors
///
/// Returns [`Error::Io`] if `path` cannot be created, or [`Error::Image`]
/// if encoding fails.
pub fn write_png(image: &RgbaImage, icc: &[u8], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    encoder
        .set_icc_profile(icc.to_vec())
        .map_err(|e| Error::Image(image::ImageError::Unsupported(e)))?;
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}
