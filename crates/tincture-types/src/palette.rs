// ABOUTME: Palette aggregate of base scales and the semantic role map
// ABOUTME: Base scales and semantic scales are traversed through separate typed paths

use crate::color::Color;
use crate::error::PaletteError;
use crate::scale::{ColorScale, ShadeKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Purpose assigned to a semantic scale, independent of hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticRole {
    Success,
    Warning,
    Error,
    Info,
}

impl SemanticRole {
    pub const ALL: [SemanticRole; 4] = [
        SemanticRole::Success,
        SemanticRole::Warning,
        SemanticRole::Error,
        SemanticRole::Info,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SemanticRole::Success => "success",
            SemanticRole::Warning => "warning",
            SemanticRole::Error => "error",
            SemanticRole::Info => "info",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        SemanticRole::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scale per semantic role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SemanticPalette {
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,
}

impl SemanticPalette {
    pub fn get(&self, role: SemanticRole) -> &ColorScale {
        match role {
            SemanticRole::Success => &self.success,
            SemanticRole::Warning => &self.warning,
            SemanticRole::Error => &self.error,
            SemanticRole::Info => &self.info,
        }
    }

    /// Copy with the scale for `role` replaced
    pub fn with_role(&self, role: SemanticRole, scale: ColorScale) -> Self {
        let mut palette = *self;
        match role {
            SemanticRole::Success => palette.success = scale,
            SemanticRole::Warning => palette.warning = scale,
            SemanticRole::Error => palette.error = scale,
            SemanticRole::Info => palette.info = scale,
        }
        palette
    }

    /// Scales in role order: success, warning, error, info
    pub fn iter(&self) -> impl Iterator<Item = (SemanticRole, &ColorScale)> + '_ {
        SemanticRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

/// Identifies one of the seven scales in a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScaleId {
    Primary,
    Secondary,
    Neutral,
    Semantic(SemanticRole),
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleId::Primary => f.write_str("primary"),
            ScaleId::Secondary => f.write_str("secondary"),
            ScaleId::Neutral => f.write_str("neutral"),
            ScaleId::Semantic(role) => write!(f, "semantic.{role}"),
        }
    }
}

impl Serialize for ScaleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Complete palette: three base scales plus the semantic map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPalette")]
pub struct Palette {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub neutral: ColorScale,
    pub semantic: SemanticPalette,
}

/// Whole-scale replacements applied by [`Palette::with_overrides`]
#[derive(Debug, Clone, Default)]
pub struct PaletteOverrides {
    pub primary: Option<ColorScale>,
    pub secondary: Option<ColorScale>,
    pub neutral: Option<ColorScale>,
    pub semantic: Option<SemanticPalette>,
}

impl Palette {
    pub fn new(
        primary: ColorScale,
        secondary: ColorScale,
        neutral: ColorScale,
        semantic: SemanticPalette,
    ) -> Self {
        Self {
            primary,
            secondary,
            neutral,
            semantic,
        }
    }

    /// Parse a palette from TOML.
    ///
    /// ```toml
    /// [primary]
    /// 50 = "#EFF6FF"
    /// # ... every shade through 950
    ///
    /// [semantic.success]
    /// 50 = "#F0FDF4"
    /// # ...
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, PaletteError> {
        let raw: RawPalette =
            toml::from_str(input).map_err(|e| PaletteError::Deserialize(e.to_string()))?;
        Palette::try_from(raw)
    }

    /// Parse a palette from JSON with the same shape as the TOML form
    pub fn from_json_str(input: &str) -> Result<Self, PaletteError> {
        let raw: RawPalette =
            serde_json::from_str(input).map_err(|e| PaletteError::Deserialize(e.to_string()))?;
        Palette::try_from(raw)
    }

    pub fn scale(&self, id: ScaleId) -> &ColorScale {
        match id {
            ScaleId::Primary => &self.primary,
            ScaleId::Secondary => &self.secondary,
            ScaleId::Neutral => &self.neutral,
            ScaleId::Semantic(role) => self.semantic.get(role),
        }
    }

    pub fn color(&self, id: ScaleId, shade: ShadeKey) -> Color {
        self.scale(id).get(shade)
    }

    /// Base scales (primary, secondary, neutral) in traversal order
    pub fn base_scales(&self) -> [(ScaleId, &ColorScale); 3] {
        [
            (ScaleId::Primary, &self.primary),
            (ScaleId::Secondary, &self.secondary),
            (ScaleId::Neutral, &self.neutral),
        ]
    }

    /// Every scale: the base scales, then the semantic scales by role
    pub fn scales(&self) -> impl Iterator<Item = (ScaleId, &ColorScale)> + '_ {
        self.base_scales().into_iter().chain(
            self.semantic
                .iter()
                .map(|(role, scale)| (ScaleId::Semantic(role), scale)),
        )
    }

    /// Copy with whole scales replaced; unspecified scales are kept
    pub fn with_overrides(&self, overrides: PaletteOverrides) -> Self {
        Self {
            primary: overrides.primary.unwrap_or(self.primary),
            secondary: overrides.secondary.unwrap_or(self.secondary),
            neutral: overrides.neutral.unwrap_or(self.neutral),
            semantic: overrides.semantic.unwrap_or(self.semantic),
        }
    }

    /// Copy with a single shade replaced
    pub fn with_color(&self, id: ScaleId, shade: ShadeKey, color: Color) -> Self {
        let mut palette = *self;
        let scale = self.scale(id).with_shade(shade, color);
        match id {
            ScaleId::Primary => palette.primary = scale,
            ScaleId::Secondary => palette.secondary = scale,
            ScaleId::Neutral => palette.neutral = scale,
            ScaleId::Semantic(role) => palette.semantic = self.semantic.with_role(role, scale),
        }
        palette
    }
}

type RawScale = BTreeMap<String, String>;

/// Untyped deserialization target; structure is checked in `TryFrom`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPalette {
    primary: Option<RawScale>,
    secondary: Option<RawScale>,
    neutral: Option<RawScale>,
    #[serde(default)]
    semantic: BTreeMap<String, RawScale>,
}

fn build_scale(name: &str, raw: Option<&RawScale>) -> Result<ColorScale, PaletteError> {
    let raw = raw.ok_or_else(|| PaletteError::MissingScale(name.to_string()))?;
    ColorScale::from_hex_entries(name, raw.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

impl TryFrom<RawPalette> for Palette {
    type Error = PaletteError;

    fn try_from(raw: RawPalette) -> Result<Self, Self::Error> {
        if let Some(unknown) = raw.semantic.keys().find(|k| SemanticRole::parse(k).is_none()) {
            return Err(PaletteError::UnknownRole(unknown.clone()));
        }

        let semantic_scale = |role: SemanticRole| -> Result<ColorScale, PaletteError> {
            let scale = raw
                .semantic
                .get(role.name())
                .ok_or(PaletteError::MissingRole(role))?;
            build_scale(&ScaleId::Semantic(role).to_string(), Some(scale))
        };

        Ok(Palette {
            primary: build_scale("primary", raw.primary.as_ref())?,
            secondary: build_scale("secondary", raw.secondary.as_ref())?,
            neutral: build_scale("neutral", raw.neutral.as_ref())?,
            semantic: SemanticPalette {
                success: semantic_scale(SemanticRole::Success)?,
                warning: semantic_scale(SemanticRole::Warning)?,
                error: semantic_scale(SemanticRole::Error)?,
                info: semantic_scale(SemanticRole::Info)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_scale(seed: u32) -> ColorScale {
        let mut table = [0u32; 11];
        for (i, slot) in table.iter_mut().enumerate() {
            let v = 0xF0 - (i as u32) * 0x10 - seed;
            *slot = (v << 16) | (v << 8) | v;
        }
        ColorScale::from_hex_table(table)
    }

    fn sample() -> Palette {
        Palette::new(
            gray_scale(0),
            gray_scale(1),
            gray_scale(2),
            SemanticPalette {
                success: gray_scale(3),
                warning: gray_scale(4),
                error: gray_scale(5),
                info: gray_scale(6),
            },
        )
    }

    fn scale_toml(name: &str, scale: &ColorScale) -> String {
        let mut out = format!("[{name}]\n");
        for (shade, color) in scale.iter() {
            out.push_str(&format!("{shade} = \"{color}\"\n"));
        }
        out
    }

    fn sample_toml(skip: Option<&str>) -> String {
        let palette = sample();
        palette
            .scales()
            .map(|(id, scale)| (id.to_string(), scale))
            .filter(|(name, _)| Some(name.as_str()) != skip)
            .map(|(name, scale)| scale_toml(&name, scale))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_scales_traversal_order() {
        let palette = sample();
        let order: Vec<String> = palette.scales().map(|(id, _)| id.to_string()).collect();
        assert_eq!(
            order,
            vec![
                "primary",
                "secondary",
                "neutral",
                "semantic.success",
                "semantic.warning",
                "semantic.error",
                "semantic.info",
            ]
        );
    }

    #[test]
    fn test_color_lookup_by_scale_id() {
        let palette = sample();
        assert_eq!(
            palette.color(ScaleId::Semantic(SemanticRole::Error), ShadeKey::S50),
            palette.semantic.error.get(ShadeKey::S50)
        );
        assert_eq!(palette.color(ScaleId::Neutral, ShadeKey::DEFAULT).to_hex(), "#9E9E9E");
    }

    #[test]
    fn test_with_overrides_replaces_only_given_scales() {
        let palette = sample();
        let replacement = gray_scale(9);
        let updated = palette.with_overrides(PaletteOverrides {
            secondary: Some(replacement),
            ..Default::default()
        });

        assert_eq!(updated.secondary, replacement);
        assert_eq!(updated.primary, palette.primary);
        assert_eq!(updated.semantic, palette.semantic);
        assert_ne!(palette.secondary, replacement);
    }

    #[test]
    fn test_with_color_on_semantic_scale() {
        let palette = sample();
        let id = ScaleId::Semantic(SemanticRole::Info);
        let updated = palette.with_color(id, ShadeKey::S900, Color::BLACK);

        assert_eq!(updated.color(id, ShadeKey::S900), Color::BLACK);
        assert_eq!(updated.semantic.success, palette.semantic.success);
        assert_ne!(palette.color(id, ShadeKey::S900), Color::BLACK);
    }

    #[test]
    fn test_from_toml_round_trip() {
        let parsed = Palette::from_toml_str(&sample_toml(None)).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_from_json_matches_serialized_form() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(Palette::from_json_str(&json).unwrap(), sample());

        let via_serde: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(via_serde, sample());
    }

    #[test]
    fn test_missing_scale_and_role_fail_at_construction() {
        assert_eq!(
            Palette::from_toml_str(&sample_toml(Some("neutral"))),
            Err(PaletteError::MissingScale("neutral".to_string()))
        );
        assert_eq!(
            Palette::from_toml_str(&sample_toml(Some("semantic.warning"))),
            Err(PaletteError::MissingRole(SemanticRole::Warning))
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let mut input = sample_toml(None);
        input.push_str(&scale_toml("semantic.danger", &gray_scale(0)));
        assert_eq!(
            Palette::from_toml_str(&input),
            Err(PaletteError::UnknownRole("danger".to_string()))
        );
    }

    #[test]
    fn test_malformed_hex_names_its_location() {
        let input = sample_toml(None).replace("500 = \"#9F9F9F\"", "500 = \"#9F9F9\"");
        let err = Palette::from_toml_str(&input).unwrap_err();
        assert!(
            matches!(err, PaletteError::InvalidColor { ref scale, ref key, .. }
                if scale == "secondary" && key == "500"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_aliased_shade_keys_are_not_merged() {
        let input = sample_toml(None).replacen(
            "[primary]\n",
            "[primary]\n\"0500\" = \"#000000\"\n\"+100\" = \"#123456\"\n",
            1,
        );
        let err = Palette::from_toml_str(&input).unwrap_err();
        assert!(
            matches!(err, PaletteError::UnknownShade { ref scale, ref key }
                if scale == "primary" && (key == "0500" || key == "+100")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_toml_syntax_error() {
        assert!(matches!(
            Palette::from_toml_str("[primary"),
            Err(PaletteError::Deserialize(_))
        ));
    }
}
