//! Raster - The main image container
//!
//! The `Raster` structure is the fundamental image type in ghoster.
//! It holds 8-bit RGBA pixel data in a flat byte buffer.
//!
//! # Pixel layout
//!
//! - Image data is stored row-major, top-to-bottom
//! - Each pixel occupies 4 consecutive bytes in R, G, B, A order
//! - The buffer length is always exactly `width * height * 4`
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

use crate::channel;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (RGBA bytes, row-major)
    data: Vec<u8>,
}

/// Raster - Main image container
///
/// `Raster` is the fundamental image type in ghoster. It uses reference
/// counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use ghoster_core::Raster;
///
/// // Create a new zeroed RGBA image
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.data().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions.
    ///
    /// The image data is initialized to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data = vec![0u8; Self::byte_len(width, height)];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a raster that takes ownership of an existing pixel buffer.
    ///
    /// The buffer must hold exactly `width * height * 4` bytes of RGBA
    /// data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DimensionMismatch`] if the buffer length does not match
    /// the declared dimensions.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = Self::byte_len(width, height);
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Compute the buffer length in bytes for the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the result would not fit in `usize`.
    #[inline]
    fn byte_len(width: u32, height: u32) -> usize {
        u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|px| px.checked_mul(channel::BYTES_PER_PIXEL as u64))
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or_else(|| panic!("image too large: {width}x{height}"))
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes per row.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.inner.width as usize * channel::BYTES_PER_PIXEL
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the bytes of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_bytes();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get the RGBA values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn rgba_at(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        let pos = pixel_offset(self.inner.width, x, y);
        let d = &self.inner.data;
        Some((
            d[pos + channel::RED],
            d[pos + channel::GREEN],
            d[pos + channel::BLUE],
            d[pos + channel::ALPHA],
        ))
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a new zeroed raster with the same dimensions as this one.
    pub fn create_template(&self) -> Self {
        let data = vec![0u8; self.inner.data.len()];
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data,
            }),
        }
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Byte offset of the pixel at (x, y) for the given row width.
#[inline]
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * channel::BYTES_PER_PIXEL
}

/// Mutable raster
///
/// Allows modification of image data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes per row.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.inner.width as usize * channel::BYTES_PER_PIXEL
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to the bytes of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.row_bytes();
        let start = y as usize * stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Get the RGBA values at (x, y).
    pub fn rgba_at(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        let pos = pixel_offset(self.inner.width, x, y);
        let d = &self.inner.data;
        Some((
            d[pos + channel::RED],
            d[pos + channel::GREEN],
            d[pos + channel::BLUE],
            d[pos + channel::ALPHA],
        ))
    }

    /// Set the RGBA values at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if x >= self.inner.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.inner.width as usize,
            });
        }
        if y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.inner.height as usize,
            });
        }
        let pos = pixel_offset(self.inner.width, x, y);
        let d = &mut self.inner.data;
        d[pos + channel::RED] = r;
        d[pos + channel::GREEN] = g;
        d[pos + channel::BLUE] = b;
        d[pos + channel::ALPHA] = a;
        Ok(())
    }

    /// Set every pixel to the given RGBA value.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.inner.data.chunks_exact_mut(channel::BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Clear all pixels to transparent black.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
