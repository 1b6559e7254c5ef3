// ABOUTME: Tincture color engine: luminance, contrast, tone checks and palette validation
// ABOUTME: Layer 2 crate that operates on the value types from tincture-types

pub mod config;
pub mod contrast;
pub mod defaults;
pub mod derive;
pub mod luminance;
pub mod tone;
pub mod validator;

#[cfg(test)]
mod properties_tests;

pub use config::{ConfigError, EngineConfig, ToneConfig, ValidationRules};
pub use contrast::{
    ContrastRatios, ContrastResult, TextTone, WcagLevel, accessible_text_color, check_contrast,
    contrast_ratio, meets_aa, meets_aaa, meets_level, text_tone_for_background,
};
pub use defaults::default_palette;
pub use derive::{
    ColorVariants, DEFAULT_GRADIENT_DIRECTION, Degrees, GradientDirection, LinearGradient, Rgba,
    color_variants, create_gradient, primary_gradient, secondary_gradient, surface_gradient,
    with_opacity,
};
pub use luminance::relative_luminance;
pub use tone::{DEFAULT_DARK_AREA_THRESHOLD, ToneClassifier, is_pure_black};
pub use validator::{
    DARK_AREA_EXEMPT_SHADE, IssueKind, IssueLocator, PaletteValidator, ValidationIssue,
    ValidationReport,
};

// Value types callers need alongside the engine
pub use tincture_types::{
    Color, ColorScale, Palette, PaletteError, PaletteOverrides, ParseError, ScaleId,
    SemanticPalette, SemanticRole, ShadeKey,
};
