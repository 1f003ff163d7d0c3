//! ghoster-test - Shared test support for the ghoster workspace
//!
//! Deterministic raster constructors used by integration tests across
//! the workspace crates.
//!
//! # Usage
//!
//! ```
//! use ghoster_test::gradient_raster;
//!
//! let raster = gradient_raster(256, 4);
//! assert_eq!(raster.rgba_at(0, 0), Some((0, 0, 0, 255)));
//! ```

use ghoster_core::{Raster, RasterMut};

/// Create a raster with every pixel set to the given RGBA value.
pub fn uniform_raster(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
    let mut rm = raster_mut(width, height);
    rm.fill(rgba);
    rm.into()
}

/// Create an opaque gray gradient running 0..255 across the width.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let mut rm = raster_mut(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x as u64 * 255) / (width as u64 - 1).max(1)) as u8;
            rm.set_rgba(x, y, v, v, v, 255).unwrap();
        }
    }
    rm.into()
}

/// Create a checkerboard alternating between two RGBA values.
pub fn checkerboard_raster(width: u32, height: u32, a: [u8; 4], b: [u8; 4]) -> Raster {
    let mut rm = raster_mut(width, height);
    for y in 0..height {
        for x in 0..width {
            let c = if (x + y) % 2 == 0 { a } else { b };
            rm.set_rgba(x, y, c[0], c[1], c[2], c[3]).unwrap();
        }
    }
    rm.into()
}

fn raster_mut(width: u32, height: u32) -> RasterMut {
    Raster::new(width, height)
        .expect("test raster dimensions must be non-zero")
        .try_into_mut()
        .expect("freshly created raster is uniquely owned")
}
