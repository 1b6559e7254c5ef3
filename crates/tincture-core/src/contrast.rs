// ABOUTME: WCAG contrast ratio between two colors and the AA / AAA pass checks
// ABOUTME: Also picks light or dark text for a background from the neutral scale

use crate::luminance::relative_luminance;
use serde::Serialize;
use tincture_types::{Color, Palette, ShadeKey};

/// WCAG 2.1 contrast thresholds
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AAA_LARGE: f64 = 4.5;
    pub const AA_NORMAL: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;
}

/// WCAG conformance levels with a text contrast requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    /// WCAG 2.1 Level AA (the required level)
    AA,
    /// WCAG 2.1 Level AAA
    AAA,
}

impl WcagLevel {
    /// Minimum contrast ratio for normal or large text at this level
    pub const fn min_ratio(self, is_large_text: bool) -> f64 {
        match (self, is_large_text) {
            (WcagLevel::AA, false) => ContrastRatios::AA_NORMAL,
            (WcagLevel::AA, true) => ContrastRatios::AA_LARGE,
            (WcagLevel::AAA, false) => ContrastRatios::AAA_NORMAL,
            (WcagLevel::AAA, true) => ContrastRatios::AAA_LARGE,
        }
    }
}

/// Contrast between one foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aa_large: bool,
}

/// `(Lmax + 0.05) / (Lmin + 0.05)`, in `[1, 21]`; argument order does not matter
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_level(a: Color, b: Color, level: WcagLevel, is_large_text: bool) -> bool {
    contrast_ratio(a, b) >= level.min_ratio(is_large_text)
}

/// WCAG AA: 4.5:1 for normal text, 3:1 for large text
pub fn meets_aa(a: Color, b: Color, is_large_text: bool) -> bool {
    meets_level(a, b, WcagLevel::AA, is_large_text)
}

/// WCAG AAA: 7:1 for normal text, 4.5:1 for large text
pub fn meets_aaa(a: Color, b: Color, is_large_text: bool) -> bool {
    meets_level(a, b, WcagLevel::AAA, is_large_text)
}

/// Ratio plus both AA verdicts for a text/background pair
pub fn check_contrast(foreground: Color, background: Color) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    ContrastResult {
        ratio,
        meets_aa: ratio >= WcagLevel::AA.min_ratio(false),
        meets_aa_large: ratio >= WcagLevel::AA.min_ratio(true),
    }
}

/// Whether text on a background should be light or dark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    Light,
    Dark,
}

/// Light text when white contrasts more than black against `background`.
///
/// Ties resolve to dark text.
pub fn text_tone_for_background(background: Color) -> TextTone {
    if contrast_ratio(Color::WHITE, background) > contrast_ratio(Color::BLACK, background) {
        TextTone::Light
    } else {
        TextTone::Dark
    }
}

/// Text color from the palette's neutral scale: 50 on dark backgrounds, 900 on light ones
pub fn accessible_text_color(background: Color, palette: &Palette) -> Color {
    match text_tone_for_background(background) {
        TextTone::Light => palette.neutral.get(ShadeKey::S50),
        TextTone::Dark => palette.neutral.get(ShadeKey::S900),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_palette;
    use tincture_types::{ScaleId, SemanticRole};

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    #[test]
    fn test_black_on_white_is_21() {
        assert_eq!(contrast_ratio(Color::BLACK, Color::WHITE), 21.0);
        assert_eq!(contrast_ratio(Color::WHITE, Color::BLACK), 21.0);
    }

    #[test]
    fn test_identical_colors_are_1() {
        assert_eq!(contrast_ratio(hex("#3B82F6"), hex("#3b82f6")), 1.0);
    }

    #[test]
    fn test_aa_pass_white_black() {
        assert!(meets_aa(Color::WHITE, Color::BLACK, false));
        assert!(meets_aaa(Color::WHITE, Color::BLACK, false));
    }

    #[test]
    fn test_borderline_fail_below_large_text_bar() {
        let gray = hex("#B7B7B7");
        let ratio = contrast_ratio(gray, Color::WHITE);
        assert!((ratio - 2.0).abs() < 0.01, "ratio was {ratio}");
        assert!(!meets_aa(gray, Color::WHITE, false));
        assert!(!meets_aa(gray, Color::WHITE, true));
    }

    #[test]
    fn test_aa_threshold_edges() {
        // #767676 is the classic lightest gray passing 4.5:1 on white
        assert!(meets_aa(hex("#767676"), Color::WHITE, false));
        assert!(!meets_aa(hex("#777777"), Color::WHITE, false));

        // #949494 clears 3:1, #959595 falls just short
        assert!(meets_aa(hex("#949494"), Color::WHITE, true));
        assert!(!meets_aa(hex("#959595"), Color::WHITE, true));
    }

    #[test]
    fn test_wcag_level_thresholds() {
        assert_eq!(WcagLevel::AA.min_ratio(false), 4.5);
        assert_eq!(WcagLevel::AA.min_ratio(true), 3.0);
        assert_eq!(WcagLevel::AAA.min_ratio(false), 7.0);
        assert_eq!(WcagLevel::AAA.min_ratio(true), 4.5);
    }

    #[test]
    fn test_check_contrast_semantic_600_on_white() {
        let palette = default_palette();
        let shade = |role| palette.color(ScaleId::Semantic(role), ShadeKey::S600);

        let error = check_contrast(shade(SemanticRole::Error), Color::WHITE);
        assert!(error.meets_aa);
        assert!(error.meets_aa_large);

        // Warning 600 is only readable as large text
        let warning = check_contrast(shade(SemanticRole::Warning), Color::WHITE);
        assert!(warning.ratio > 3.0);
        assert!(!warning.meets_aa);
        assert!(warning.meets_aa_large);
    }

    #[test]
    fn test_text_tone_for_background() {
        assert_eq!(text_tone_for_background(Color::BLACK), TextTone::Light);
        assert_eq!(text_tone_for_background(Color::WHITE), TextTone::Dark);
        assert_eq!(text_tone_for_background(hex("#1E3A8A")), TextTone::Light);
        assert_eq!(text_tone_for_background(hex("#FBBF24")), TextTone::Dark);
    }

    #[test]
    fn test_accessible_text_color_uses_neutral_scale() {
        let palette = default_palette();
        let on_dark = accessible_text_color(hex("#1E3A8A"), palette);
        let on_light = accessible_text_color(hex("#EFF6FF"), palette);

        assert_eq!(on_dark, palette.neutral.get(ShadeKey::S50));
        assert_eq!(on_light, palette.neutral.get(ShadeKey::S900));
        assert!(meets_aa(on_dark, hex("#1E3A8A"), false));
        assert!(meets_aa(on_light, hex("#EFF6FF"), false));
    }
}
