// ABOUTME: Tone classification for colors unsuitable as large flat surfaces
// ABOUTME: Detects pure black and near-black colors below a luminance threshold

use crate::config::ToneConfig;
use crate::luminance::relative_luminance;
use tincture_types::Color;

/// Default luminance below which a color is too dark for large areas.
///
/// Sits between `#151515` (0.0075) and `#161616` (0.0080), below the darkest
/// regular shade of the built-in neutral scale (`#1C1917`, 0.0100).
pub const DEFAULT_DARK_AREA_THRESHOLD: f64 = 0.008;

pub fn is_pure_black(color: Color) -> bool {
    color.channels() == (0, 0, 0)
}

/// Classifies colors against a configurable darkness threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneClassifier {
    dark_area_threshold: f64,
}

impl ToneClassifier {
    pub fn new() -> Self {
        Self::from_config(&ToneConfig::default())
    }

    pub fn from_config(config: &ToneConfig) -> Self {
        Self {
            dark_area_threshold: config.dark_area_threshold,
        }
    }

    pub fn dark_area_threshold(&self) -> f64 {
        self.dark_area_threshold
    }

    pub fn is_pure_black(&self, color: Color) -> bool {
        is_pure_black(color)
    }

    /// True when relative luminance is strictly below the threshold.
    /// Pure black always qualifies.
    pub fn is_too_dark_for_large_areas(&self, color: Color) -> bool {
        is_pure_black(color) || relative_luminance(color) < self.dark_area_threshold
    }
}

impl Default for ToneClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    #[test]
    fn test_pure_black() {
        assert!(is_pure_black(hex("#000000")));
        assert!(!is_pure_black(hex("#010101")));
        assert!(!is_pure_black(hex("#000001")));
    }

    #[test]
    fn test_near_black_grays_are_too_dark() {
        let classifier = ToneClassifier::new();
        assert!(classifier.is_too_dark_for_large_areas(Color::BLACK));
        assert!(classifier.is_too_dark_for_large_areas(hex("#010101")));
        assert!(classifier.is_too_dark_for_large_areas(hex("#111111")));
        assert!(classifier.is_too_dark_for_large_areas(hex("#151515")));
    }

    #[test]
    fn test_dark_but_usable_colors_pass() {
        let classifier = ToneClassifier::new();
        assert!(!classifier.is_too_dark_for_large_areas(hex("#161616")));
        assert!(!classifier.is_too_dark_for_large_areas(hex("#1C1917")));
        assert!(!classifier.is_too_dark_for_large_areas(hex("#1E3A8A")));
        assert!(!classifier.is_too_dark_for_large_areas(hex("#78716C")));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let strict = ToneClassifier::from_config(&ToneConfig {
            dark_area_threshold: 0.02,
        });
        assert_eq!(strict.dark_area_threshold(), 0.02);
        assert!(strict.is_too_dark_for_large_areas(hex("#1C1917")));

        let off = ToneClassifier::from_config(&ToneConfig {
            dark_area_threshold: 0.0,
        });
        assert!(!off.is_too_dark_for_large_areas(hex("#010101")));
        assert!(off.is_too_dark_for_large_areas(Color::BLACK));
    }
}
