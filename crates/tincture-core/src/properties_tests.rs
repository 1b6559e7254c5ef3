// ABOUTME: Property tests for luminance and contrast math
// ABOUTME: Symmetry, bounds and threshold ordering over arbitrary colors

#[cfg(test)]
mod tests {
    use crate::contrast::{contrast_ratio, meets_aa, meets_aaa};
    use crate::luminance::relative_luminance;
    use crate::tone::ToneClassifier;
    use proptest::prelude::*;
    use tincture_types::Color;

    fn any_color() -> impl Strategy<Value = Color> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::from_rgb(r, g, b))
    }

    proptest! {
        #[test]
        fn luminance_is_in_unit_range(c in any_color()) {
            let l = relative_luminance(c);
            prop_assert!((0.0..=1.0).contains(&l));
        }

        #[test]
        fn contrast_is_symmetric(a in any_color(), b in any_color()) {
            prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }

        #[test]
        fn contrast_is_bounded(a in any_color(), b in any_color()) {
            let ratio = contrast_ratio(a, b);
            prop_assert!(ratio >= 1.0);
            prop_assert!(ratio <= 21.0 + 1e-9);
        }

        #[test]
        fn self_contrast_is_one(c in any_color()) {
            prop_assert_eq!(contrast_ratio(c, c), 1.0);
        }

        #[test]
        fn unit_contrast_means_equal_luminance(a in any_color(), b in any_color()) {
            if contrast_ratio(a, b) == 1.0 {
                prop_assert_eq!(relative_luminance(a), relative_luminance(b));
            } else {
                prop_assert!(relative_luminance(a) != relative_luminance(b));
            }
        }

        #[test]
        fn unit_contrast_between_equal_grays_only(v in any::<u8>(), w in any::<u8>()) {
            let (a, b) = (Color::from_rgb(v, v, v), Color::from_rgb(w, w, w));
            prop_assert_eq!(contrast_ratio(a, b) == 1.0, v == w);
        }

        #[test]
        fn stricter_checks_imply_looser_ones(a in any_color(), b in any_color()) {
            if meets_aa(a, b, false) {
                prop_assert!(meets_aa(a, b, true));
            }
            if meets_aaa(a, b, false) {
                prop_assert!(meets_aa(a, b, false));
                prop_assert!(meets_aaa(a, b, true));
            }
        }

        #[test]
        fn black_and_white_bound_every_color(c in any_color()) {
            let best = contrast_ratio(c, Color::WHITE).max(contrast_ratio(c, Color::BLACK));
            // Every color reaches at least ~4.58:1 against one of the extremes
            prop_assert!(best >= 4.5);
        }

        #[test]
        fn darkness_follows_luminance(a in any_color(), b in any_color()) {
            let classifier = ToneClassifier::new();
            if relative_luminance(a) <= relative_luminance(b) && classifier.is_too_dark_for_large_areas(b) {
                prop_assert!(classifier.is_too_dark_for_large_areas(a));
            }
        }
    }
}
