//! Ghoster Color - The fill-color ghosting transform
//!
//! This crate provides the ghost transform and its configuration:
//!
//! - **Fill color** ([`fill`]): the uniform foreground color, parsed from
//!   `#RRGGBB` hex strings
//! - **Ghosting** ([`ghost`](mod@ghost)): pixel-level and image-level
//!   transforms deriving alpha from source brightness, with a row-parallel
//!   variant, and the stateful [`Ghoster`] transformer

pub mod error;
pub mod fill;
pub mod ghost;

// Re-export core types
pub use ghoster_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export fill color
pub use fill::FillColor;

// Re-export ghosting functions
pub use ghost::{
    // Types
    Ghoster,
    // Image-level functions
    ghost,
    ghost_into,
    ghost_parallel,
    // Pixel-level functions
    ghost_pixel,
};
