// ABOUTME: Pure color and palette data types with no cross-crate dependencies
// ABOUTME: Foundation layer for the contrast, tone and validation engine

pub mod color;
pub mod error;
pub mod palette;
pub mod scale;

// Re-export commonly used types
pub use color::Color;
pub use error::{InvalidShadeKey, PaletteError, ParseError};
pub use palette::{Palette, PaletteOverrides, ScaleId, SemanticPalette, SemanticRole};
pub use scale::{ColorScale, ShadeKey};
