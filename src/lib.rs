//! Generates small colored status dot images for use as chat emojis.
//!
//! The default palette gives one 128x128 transparent PNG per service state:
//! green (available), red (unavailable) and orange (degraded).

pub mod dot_gen;
pub mod error;
pub mod inspect;
pub mod manifest;
pub mod palette;

pub use dot_gen::{generate, generate_dots, save, Canvas, GenerateOptions};
pub use error::{DotError, DotResult};
pub use palette::{DotColor, Palette, PaletteEntry, Status};
