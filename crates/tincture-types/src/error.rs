// ABOUTME: Error types for color parsing and palette construction
// ABOUTME: Structural problems surface here, before any validation runs

use crate::palette::SemanticRole;
use crate::scale::ShadeKey;

/// Errors produced while parsing color-related input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid hex color `{input}`: expected `#` followed by 6 hex digits")]
    InvalidFormat { input: String },

    #[error("opacity {0} is outside the range 0.0..=1.0")]
    InvalidAlpha(f64),

    #[error("unrecognized gradient direction `{0}`")]
    InvalidDirection(String),
}

impl ParseError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        ParseError::InvalidFormat {
            input: input.to_string(),
        }
    }
}

/// Structural palette errors, raised when a palette is built
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaletteError {
    #[error("palette is missing the `{0}` scale")]
    MissingScale(String),

    #[error("scale `{scale}` is missing shade {shade}")]
    MissingShade { scale: String, shade: ShadeKey },

    #[error("scale `{scale}` has unknown shade key `{key}`")]
    UnknownShade { scale: String, key: String },

    #[error("scale `{scale}` lists shade {shade} more than once")]
    DuplicateShade { scale: String, shade: ShadeKey },

    #[error("semantic palette is missing the `{0}` role")]
    MissingRole(SemanticRole),

    #[error("unknown semantic role `{0}`")]
    UnknownRole(String),

    #[error("invalid color at {scale}.{key}: {source}")]
    InvalidColor {
        scale: String,
        key: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to deserialize palette: {0}")]
    Deserialize(String),
}

/// A number that does not name one of the eleven shade tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a shade key (expected one of 50, 100, ..., 900, 950)")]
pub struct InvalidShadeKey(pub u16);
