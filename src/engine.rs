//! Core sticker rendering pipeline.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::compose;
use crate::error::{Error, Result};
use crate::export;
use crate::mask::AlphaMask;

/// Options controlling sticker rendering.
///
/// An immutable configuration snapshot passed into the pipeline; the engine
/// validates it once at construction.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Brightness boost applied to highlight pixels in linear light.
    /// Must be positive; 2.0–4.0 is the useful range before highlights
    /// clip to white.
    pub hdr_boost: f32,
    /// Darkening applied to background RGB in encoded space.
    /// Must be positive; 0.5–0.7 keeps the background near the white
    /// point of SDR-only displays.
    pub sdr_darken: f32,
    /// Overlay alpha above which a pixel belongs to the highlight region.
    pub alpha_threshold: u8,
    /// Maximum output side length in pixels; larger results are downscaled.
    pub max_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hdr_boost: 2.5,
            sdr_darken: 0.6,
            alpha_threshold: 50,
            max_size: 240,
        }
    }
}

/// Summary of a completed render.
#[derive(Debug)]
pub struct RenderSummary {
    /// Path the sticker PNG was written to.
    pub output: PathBuf,
    /// Final image width in pixels.
    pub width: u32,
    /// Final image height in pixels.
    pub height: u32,
}

/// The sticker rendering engine holding validated options.
///
/// Create once with [`StickerEngine::new()`] and reuse for any number of
/// independent renders; the engine carries no mutable state.
#[derive(Debug)]
pub struct StickerEngine {
    options: RenderOptions,
}

impl StickerEngine {
    /// Create an engine from the given options.
    ///
    /// Factor validation happens here, before any image is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `hdr_boost` or `sdr_darken`
    /// is zero or negative.
    pub fn new(options: RenderOptions) -> Result<Self> {
        if options.hdr_boost <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "hdr-boost",
                value: options.hdr_boost,
            });
        }
        if options.sdr_darken <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "sdr-darken",
                value: options.sdr_darken,
            });
        }
        Ok(Self { options })
    }

    /// The validated options this engine renders with.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Run the in-memory pipeline: mask, highlight, darken, composite,
    /// shrink.
    ///
    /// `base` is consumed because its background is darkened in place
    /// before compositing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `base` and `overlay` do not
    /// share the same dimensions.
    pub fn render(&self, mut base: RgbaImage, overlay: &RgbaImage) -> Result<RgbaImage> {
        if base.dimensions() != overlay.dimensions() {
            return Err(Error::DimensionMismatch {
                base_width: base.width(),
                base_height: base.height(),
                overlay_width: overlay.width(),
                overlay_height: overlay.height(),
            });
        }

        let mask = AlphaMask::from_overlay(overlay, self.options.alpha_threshold);
        let highlight = compose::highlight_layer(overlay, &mask, self.options.hdr_boost);
        compose::darken_background(&mut base, &mask, self.options.sdr_darken);
        let composited = compose::composite_over(&base, &highlight);

        Ok(shrink_to_fit(composited, self.options.max_size))
    }

    /// Render a sticker from files: load both images, read the ICC
    /// profile, run the pipeline, and write the tagged PNG.
    ///
    /// All three input paths are checked for existence before anything is
    /// decoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFile`] if any input path does not exist,
    /// [`Error::Image`] if an input fails to decode or the output fails to
    /// encode, [`Error::DimensionMismatch`] if the images disagree in
    /// size, and [`Error::Io`] on profile or output I/O failure.
    pub fn render_file(
        &self,
        base_path: &Path,
        overlay_path: &Path,
        icc_path: &Path,
        output_path: &Path,
    ) -> Result<RenderSummary> {
        for path in [base_path, overlay_path, icc_path] {
            if !path.is_file() {
                return Err(Error::MissingFile(path.to_path_buf()));
            }
        }

        let base = load_rgba(base_path)?;
        let overlay = load_rgba(overlay_path)?;
        let icc = export::read_icc_profile(icc_path)?;

        let rendered = self.render(base, &overlay)?;
        export::write_png(&rendered, &icc, output_path)?;

        Ok(RenderSummary {
            output: output_path.to_path_buf(),
            width: rendered.width(),
            height: rendered.height(),
        })
    }
}

/// Load an image as 8-bit RGBA.
///
/// Images without an alpha channel gain a fully opaque one; no other
/// conversion or resizing happens here.
///
/// # Errors
///
/// Returns [`Error::MissingFile`] if `path` is not an existing regular
/// file, or [`Error::Image`] if the file is not a parseable raster image.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.is_file() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    Ok(image::open(path)?.to_rgba8())
}

/// Downscale `image` so neither side exceeds `max_size`, preserving aspect
/// ratio. Never upscales; images already within bounds pass through
/// unchanged.
#[must_use]
pub fn shrink_to_fit(image: RgbaImage, max_size: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let scale = (f64::from(max_size) / f64::from(width))
        .min(f64::from(max_size) / f64::from(height))
        .min(1.0);

    if scale >= 1.0 {
        return image;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (new_width, new_height) = (
        ((f64::from(width) * scale) as u32).max(1),
        ((f64::from(height) * scale) as u32).max(1),
    );
    imageops::resize(&image, new_width, new_height, FilterType::Lanczos3)
}
