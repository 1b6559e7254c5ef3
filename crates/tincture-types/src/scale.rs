// ABOUTME: Shade keys and eleven-tier color scales
// ABOUTME: A scale always holds every shade, so lookups cannot fail

use crate::color::Color;
use crate::error::{InvalidShadeKey, PaletteError};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One of the eleven intensity tiers of a scale, lower is lighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl ShadeKey {
    /// All shade keys in ascending order
    pub const ALL: [ShadeKey; 11] = [
        ShadeKey::S50,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
        ShadeKey::S950,
    ];

    /// Shade used when a caller asks for "the" color of a scale
    pub const DEFAULT: ShadeKey = ShadeKey::S500;

    /// Numeric name of the shade (50, 100, ..., 950)
    pub const fn value(self) -> u16 {
        match self {
            ShadeKey::S50 => 50,
            ShadeKey::S100 => 100,
            ShadeKey::S200 => 200,
            ShadeKey::S300 => 300,
            ShadeKey::S400 => 400,
            ShadeKey::S500 => 500,
            ShadeKey::S600 => 600,
            ShadeKey::S700 => 700,
            ShadeKey::S800 => 800,
            ShadeKey::S900 => 900,
            ShadeKey::S950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        ShadeKey::ALL.into_iter().find(|shade| shade.value() == value)
    }

    /// Parse the canonical decimal form used as a map key, e.g. `"500"`.
    /// Signs, padding and whitespace are rejected.
    pub fn parse(key: &str) -> Option<Self> {
        ShadeKey::ALL
            .into_iter()
            .find(|shade| shade.value().to_string() == key)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Default for ShadeKey {
    fn default() -> Self {
        ShadeKey::DEFAULT
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u16> for ShadeKey {
    type Error = InvalidShadeKey;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ShadeKey::from_value(value).ok_or(InvalidShadeKey(value))
    }
}

impl From<ShadeKey> for u16 {
    fn from(shade: ShadeKey) -> Self {
        shade.value()
    }
}

/// Total mapping from every shade key to a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScale {
    shades: [Color; 11],
}

impl ColorScale {
    /// Build a scale from colors listed in ascending shade order
    pub const fn new(shades: [Color; 11]) -> Self {
        Self { shades }
    }

    /// Build a scale from packed `0xRRGGBB` literals in ascending shade order
    pub const fn from_hex_table(table: [u32; 11]) -> Self {
        let mut shades = [Color::BLACK; 11];
        let mut i = 0;
        while i < shades.len() {
            shades[i] = Color::from_hex_u32(table[i]);
            i += 1;
        }
        Self { shades }
    }

    /// Build a scale from `(shade key, hex)` string pairs.
    ///
    /// `scale` only labels errors. Every shade must be present exactly once
    /// and every value must be a valid hex color.
    pub fn from_hex_entries<'a, I>(scale: &str, entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut found: [Option<Color>; 11] = [None; 11];

        for (key, hex) in entries {
            let shade = ShadeKey::parse(key).ok_or_else(|| PaletteError::UnknownShade {
                scale: scale.to_string(),
                key: key.to_string(),
            })?;
            let color = Color::parse(hex).map_err(|source| PaletteError::InvalidColor {
                scale: scale.to_string(),
                key: key.to_string(),
                source,
            })?;
            let slot = &mut found[shade.index()];
            if slot.is_some() {
                return Err(PaletteError::DuplicateShade {
                    scale: scale.to_string(),
                    shade,
                });
            }
            *slot = Some(color);
        }

        let mut shades = [Color::BLACK; 11];
        for shade in ShadeKey::ALL {
            shades[shade.index()] = found[shade.index()].ok_or_else(|| {
                PaletteError::MissingShade {
                    scale: scale.to_string(),
                    shade,
                }
            })?;
        }

        Ok(Self { shades })
    }

    pub fn get(&self, shade: ShadeKey) -> Color {
        self.shades[shade.index()]
    }

    /// Copy of this scale with one shade replaced
    pub fn with_shade(&self, shade: ShadeKey, color: Color) -> Self {
        let mut shades = self.shades;
        shades[shade.index()] = color;
        Self { shades }
    }

    /// Shades in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, Color)> + '_ {
        ShadeKey::ALL.into_iter().zip(self.shades.iter().copied())
    }
}

impl Serialize for ColorScale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (shade, color) in self.iter() {
            map.serialize_entry(&shade.to_string(), &color)?;
        }
        map.end()
    }
}
