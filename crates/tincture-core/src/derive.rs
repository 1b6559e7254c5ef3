// ABOUTME: Derived color artifacts: alpha variants and two-stop linear gradients
// ABOUTME: Pure constructors; nothing here is rendered, only described

use serde::Serialize;
use std::fmt;
use tincture_types::{Color, Palette, ParseError, ShadeKey};

/// Direction used by the built-in gradient presets
pub const DEFAULT_GRADIENT_DIRECTION: GradientDirection = GradientDirection::Angle(Degrees(135.0));

/// A color with an attached alpha in `[0, 1]`, built by [`with_opacity`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    color: Color,
    alpha: f64,
}

impl Rgba {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.color.channels();
        write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

/// Attach an alpha to `color`; the channels are untouched.
///
/// Alpha outside `[0, 1]` (or NaN) is an error rather than being clamped.
pub fn with_opacity(color: Color, alpha: f64) -> Result<Rgba, ParseError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ParseError::InvalidAlpha(alpha));
    }
    Ok(Rgba { color, alpha })
}

/// Interaction-state variants of one base color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorVariants {
    pub default: Color,
    pub hover: Rgba,
    pub active: Rgba,
    pub disabled: Rgba,
    pub subtle: Rgba,
    pub muted: Rgba,
}

impl ColorVariants {
    pub const HOVER_ALPHA: f64 = 0.8;
    pub const ACTIVE_ALPHA: f64 = 0.9;
    pub const DISABLED_ALPHA: f64 = 0.5;
    pub const SUBTLE_ALPHA: f64 = 0.1;
    pub const MUTED_ALPHA: f64 = 0.6;
}

pub fn color_variants(base: Color) -> ColorVariants {
    let tint = |alpha| Rgba { color: base, alpha };
    ColorVariants {
        default: base,
        hover: tint(ColorVariants::HOVER_ALPHA),
        active: tint(ColorVariants::ACTIVE_ALPHA),
        disabled: tint(ColorVariants::DISABLED_ALPHA),
        subtle: tint(ColorVariants::SUBTLE_ALPHA),
        muted: tint(ColorVariants::MUTED_ALPHA),
    }
}

/// A finite angle in degrees, obtained from [`GradientDirection::angle`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degrees(f64);

impl Degrees {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Direction of a linear gradient: an angle in degrees or a side/corner keyword
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientDirection {
    Angle(Degrees),
    ToTop,
    ToBottom,
    ToLeft,
    ToRight,
    ToTopLeft,
    ToTopRight,
    ToBottomLeft,
    ToBottomRight,
}

impl GradientDirection {
    const KEYWORDS: [(&'static str, GradientDirection); 8] = [
        ("to top", GradientDirection::ToTop),
        ("to bottom", GradientDirection::ToBottom),
        ("to left", GradientDirection::ToLeft),
        ("to right", GradientDirection::ToRight),
        ("to top left", GradientDirection::ToTopLeft),
        ("to top right", GradientDirection::ToTopRight),
        ("to bottom left", GradientDirection::ToBottomLeft),
        ("to bottom right", GradientDirection::ToBottomRight),
    ];

    /// An angle direction; the angle must be finite
    pub fn angle(degrees: f64) -> Result<Self, ParseError> {
        if degrees.is_finite() {
            Ok(GradientDirection::Angle(Degrees(degrees)))
        } else {
            Err(ParseError::InvalidDirection(degrees.to_string()))
        }
    }

    /// Parse `135deg` or a keyword such as `to bottom right`.
    ///
    /// Keywords are case-insensitive and tolerate extra whitespace. The
    /// reversed corner order (`to right bottom`) is not accepted.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDirection(input.to_string());
        let normalized = input
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        if let Some(degrees) = normalized.strip_suffix("deg") {
            let degrees: f64 = degrees.trim_end().parse().map_err(|_| invalid())?;
            return Self::angle(degrees).map_err(|_| invalid());
        }

        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == normalized)
            .map(|(_, direction)| *direction)
            .ok_or_else(invalid)
    }

    fn keyword(&self) -> Option<&'static str> {
        Self::KEYWORDS
            .iter()
            .find(|(_, direction)| direction == self)
            .map(|(keyword, _)| *keyword)
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientDirection::Angle(degrees) => write!(f, "{}deg", degrees.value()),
            other => f.write_str(other.keyword().unwrap_or_default()),
        }
    }
}

impl std::str::FromStr for GradientDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradientDirection::parse(s)
    }
}

impl Serialize for GradientDirection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Two-stop linear gradient descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearGradient {
    pub from: Color,
    pub to: Color,
    pub direction: GradientDirection,
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}, {}, {})",
            self.direction, self.from, self.to
        )
    }
}

pub fn create_gradient(from: Color, to: Color, direction: GradientDirection) -> LinearGradient {
    LinearGradient {
        from,
        to,
        direction,
    }
}

/// Primary 500 to primary 600
pub fn primary_gradient(palette: &Palette, direction: GradientDirection) -> LinearGradient {
    create_gradient(
        palette.primary.get(ShadeKey::S500),
        palette.primary.get(ShadeKey::S600),
        direction,
    )
}

/// Secondary 500 to secondary 600
pub fn secondary_gradient(palette: &Palette, direction: GradientDirection) -> LinearGradient {
    create_gradient(
        palette.secondary.get(ShadeKey::S500),
        palette.secondary.get(ShadeKey::S600),
        direction,
    )
}

/// Neutral 50 to neutral 100, for page and card surfaces
pub fn surface_gradient(palette: &Palette, direction: GradientDirection) -> LinearGradient {
    create_gradient(
        palette.neutral.get(ShadeKey::S50),
        palette.neutral.get(ShadeKey::S100),
        direction,
    )
}
