//! Tone-map an SDR photo plus an HDR-intent overlay into a chat sticker.
//!
//! Chat platforms with limited HDR support can still fake an HDR look: the
//! overlay's alpha channel marks the region meant to glow, those pixels are
//! brightened in linear light, the rest of the base photo is darkened, and
//! the layers are alpha-composited back together. The result is downscaled
//! to sticker size and written as a PNG whose embedded ICC profile tells
//! capable viewers how to interpret the boosted values.
//!
//! # Quick Start
//!
//! ```no_run
//! use hdr_sticker::{RenderOptions, StickerEngine};
//!
//! let engine = StickerEngine::new(RenderOptions::default()).expect("valid options");
//! let summary = engine
//!     .render_file(
//!         "base.png".as_ref(),
//!         "overlay.png".as_ref(),
//!         "rec2100pq-experimental.icc".as_ref(),
//!         "sticker.png".as_ref(),
//!     )
//!     .expect("render failed");
//! println!(
//!     "wrote {} ({}x{})",
//!     summary.output.display(),
//!     summary.width,
//!     summary.height
//! );
//! ```
//!
//! # In-memory use
//!
//! The pipeline also runs on [`image::RgbaImage`] buffers directly:
//!
//! ```
//! use hdr_sticker::{RenderOptions, StickerEngine};
//! use image::{Rgba, RgbaImage};
//!
//! let base = RgbaImage::from_pixel(32, 32, Rgba([120, 120, 120, 255]));
//! let overlay = RgbaImage::new(32, 32); // fully transparent: nothing glows
//!
//! let engine = StickerEngine::new(RenderOptions::default())?;
//! let sticker = engine.render(base, &overlay)?;
//! assert_eq!(sticker.dimensions(), (32, 32));
//! # Ok::<(), hdr_sticker::Error>(())
//! ```

#![deny(missing_docs)]

pub mod compose;
mod engine;
pub mod error;
pub mod export;
pub mod mask;
pub mod tone;

pub use engine::{load_rgba, shrink_to_fit, RenderOptions, RenderSummary, StickerEngine};
pub use error::{Error, Result};
