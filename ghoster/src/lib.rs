//! Ghoster - Recolor silhouette images with brightness-derived transparency
//!
//! Ghoster converts a grayscale-ish raster into an image with a uniform
//! foreground color and per-pixel alpha taken from the source brightness:
//! dark pixels become opaque, light pixels transparent. Useful for simple
//! "ghosting" effects, where a silhouette is recolored while its luminance
//! survives as a transparency mask.
//!
//! # Example
//!
//! ```
//! use ghoster::{Ghoster, Raster};
//!
//! let mut ghoster = Ghoster::new();
//! ghoster.set_fill_color("#4e21ed").unwrap();
//!
//! // A black source pixel becomes a fully opaque fill-colored one
//! let src = Raster::new(16, 16).unwrap();
//! let out = ghoster.transform(&src);
//! assert_eq!(out.rgba_at(0, 0), Some((0x4e, 0x21, 0xed, 255)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ghoster_core::*;

// Re-export the transform surface
pub use ghoster_color::{ColorError, ColorResult, FillColor, Ghoster};

// Re-export domain crates as modules to avoid name conflicts
pub use ghoster_color as color;
pub use ghoster_io as io;
