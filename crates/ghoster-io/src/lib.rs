//! Ghoster I/O - Image loading and saving for the ghoster library
//!
//! Realizes the boundary contract of the core: the image source delivers
//! a 4-channel 8-bit RGBA [`Raster`](ghoster_core::Raster) (any other
//! encoding is converted during decode), and the output sink accepts one.
//!
//! Currently PNG is the supported on-disk format.

pub mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};

use ghoster_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened, or a decode
/// error for malformed image data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write an image to a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created, or an encode
/// error if the encoder rejects the stream.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))
}
