//! The ghost transform
//!
//! Replaces every pixel's color with a uniform fill color and derives the
//! output alpha from the source pixel's brightness: dark pixels become
//! opaque, light pixels transparent. Used to recolor silhouette-like
//! images while preserving their luminance as a transparency mask.
//!
//! # Per-pixel formula
//!
//! For a source pixel (r, g, b, _) and fill color (fr, fg, fb):
//!
//! ```text
//! output = (fr, fg, fb, 255 - (r + g + b) / 3)
//! ```
//!
//! The brightness average uses integer division, truncating toward zero.
//! A black source pixel yields alpha 255 (fully opaque), a white one
//! alpha 0 (fully transparent). The source alpha channel is ignored.
//!
//! # Examples
//!
//! ```
//! use ghoster_color::{FillColor, ghost};
//! use ghoster_core::Raster;
//!
//! let src = Raster::new(100, 100).unwrap();
//! let out = ghost(&src, FillColor::new(255, 0, 0));
//! // Zeroed (black) input: fully opaque red everywhere
//! assert_eq!(out.rgba_at(0, 0), Some((255, 0, 0, 255)));
//! ```

use crate::{ColorResult, FillColor};
use ghoster_core::{Error, Raster, RasterMut, channel};
use rayon::prelude::*;

/// Ghost a single pixel.
///
/// Returns the fill color with alpha set to the inverted brightness of
/// the source channels.
#[inline]
pub fn ghost_pixel(fill: FillColor, r: u8, g: u8, b: u8) -> [u8; 4] {
    [
        fill.red,
        fill.green,
        fill.blue,
        255 - channel::brightness(r, g, b),
    ]
}

/// Ghost a span of RGBA pixels from `src` into `dst`.
///
/// Both slices must hold the same whole number of pixels.
fn ghost_span(src: &[u8], dst: &mut [u8], fill: FillColor) {
    let src_px = src.chunks_exact(channel::BYTES_PER_PIXEL);
    let dst_px = dst.chunks_exact_mut(channel::BYTES_PER_PIXEL);
    for (s, d) in src_px.zip(dst_px) {
        let px = ghost_pixel(
            fill,
            s[channel::RED],
            s[channel::GREEN],
            s[channel::BLUE],
        );
        d.copy_from_slice(&px);
    }
}

/// Ghost a raster into a newly allocated destination.
///
/// The output has identical dimensions; every pixel is the fill color
/// with alpha derived from the source pixel's brightness. The result is
/// a deterministic pure function of `(src, fill)`; the source is never
/// modified.
pub fn ghost(src: &Raster, fill: FillColor) -> Raster {
    // A fresh template is uniquely owned
    let mut out = src.create_template().try_into_mut().unwrap();
    ghost_span(src.data(), out.data_mut(), fill);
    out.into()
}

/// Ghost a raster into a caller-owned destination buffer.
///
/// # Errors
///
/// Returns [`Error::IncompatibleSizes`] if the destination dimensions do
/// not match the source. The destination is not written on failure.
pub fn ghost_into(src: &Raster, dst: &mut RasterMut, fill: FillColor) -> ColorResult<()> {
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(Error::IncompatibleSizes(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }
    ghost_span(src.data(), dst.data_mut(), fill);
    Ok(())
}

/// Ghost a raster, processing rows in parallel.
///
/// Each output pixel depends only on the matching source pixel and the
/// read-only fill color, so rows are partitioned across worker threads
/// with no synchronization beyond the final join. Output is bitwise
/// identical to [`ghost`].
pub fn ghost_parallel(src: &Raster, fill: FillColor) -> Raster {
    let mut out = src.create_template().try_into_mut().unwrap();
    let stride = src.row_bytes();
    out.data_mut()
        .par_chunks_mut(stride)
        .zip(src.data().par_chunks(stride))
        .for_each(|(dst_row, src_row)| ghost_span(src_row, dst_row, fill));
    out.into()
}

/// Stateful ghost transformer.
///
/// Owns the current [`FillColor`] (default black) and applies the ghost
/// transform to source rasters. The transform derives its dimensions
/// from the input buffer on every call, so consecutive calls with
/// different-sized rasters are fully independent.
///
/// Changing the fill color does not re-transform anything; callers
/// invoke [`Ghoster::transform`] again when a new result is wanted.
/// Configuration takes `&mut self`, so it cannot race an in-flight
/// transform on the same instance.
///
/// # Examples
///
/// ```
/// use ghoster_color::Ghoster;
/// use ghoster_core::Raster;
///
/// let mut ghoster = Ghoster::new();
/// ghoster.set_fill_color("#4e21ed").unwrap();
///
/// let src = Raster::new(32, 32).unwrap();
/// let out = ghoster.transform(&src);
/// assert_eq!(out.rgba_at(0, 0), Some((0x4e, 0x21, 0xed, 255)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ghoster {
    fill: FillColor,
}

impl Ghoster {
    /// Create a transformer with the default black fill.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer with the given fill color.
    pub fn with_fill(fill: FillColor) -> Self {
        Self { fill }
    }

    /// Parse and store a new fill color from a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColorError::InvalidColorFormat`] for malformed
    /// input; the previously stored color is left unchanged.
    pub fn set_fill_color(&mut self, hex: &str) -> ColorResult<()> {
        self.fill = hex.parse()?;
        Ok(())
    }

    /// Store a new fill color directly.
    pub fn set_fill(&mut self, fill: FillColor) {
        self.fill = fill;
    }

    /// Get the currently configured fill color.
    pub fn fill_color(&self) -> FillColor {
        self.fill
    }

    /// Ghost `src` into a newly allocated raster of the same dimensions.
    pub fn transform(&self, src: &Raster) -> Raster {
        ghost(src, self.fill)
    }

    /// Ghost `src` into a caller-owned destination buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the destination dimensions
    /// do not match the source.
    pub fn transform_into(&self, src: &Raster, dst: &mut RasterMut) -> ColorResult<()> {
        ghost_into(src, dst, self.fill)
    }

    /// Row-parallel variant of [`Ghoster::transform`].
    pub fn transform_parallel(&self, src: &Raster) -> Raster {
        ghost_parallel(src, self.fill)
    }
}
