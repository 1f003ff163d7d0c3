//! Ghoster Core - Basic data structures for the ghoster image library
//!
//! This crate provides the fundamental data structures used throughout
//! the ghoster workspace:
//!
//! - [`Raster`] / [`RasterMut`] - The RGBA image container (immutable / mutable)
//! - [`Error`] / [`Result`] - The core error type
//! - [`channel`] - Channel byte offsets and brightness helpers

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterMut};

/// Channel byte offsets and helper functions for RGBA pixels.
///
/// # Pixel format
///
/// Each pixel is 4 consecutive bytes in R, G, B, A order.
pub mod channel {
    /// Red channel (byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Bytes per RGBA pixel
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Brightness of a pixel: the unweighted mean of its R, G, and B
    /// channels, truncated to an integer.
    #[inline]
    pub fn brightness(r: u8, g: u8, b: u8) -> u8 {
        ((r as u32 + g as u32 + b as u32) / 3) as u8
    }

}
