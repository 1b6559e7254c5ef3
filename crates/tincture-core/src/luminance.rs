// ABOUTME: WCAG 2.1 relative luminance for sRGB colors
// ABOUTME: Channel linearization is tabulated once since there are only 256 inputs

use std::sync::OnceLock;
use tincture_types::Color;

/// Normalized channel value at or below which sRGB is linear (WCAG 2.1 constant)
pub const LINEAR_THRESHOLD: f64 = 0.03928;

pub const RED_WEIGHT: f64 = 0.2126;
pub const GREEN_WEIGHT: f64 = 0.7152;
pub const BLUE_WEIGHT: f64 = 0.0722;

static LINEAR_CHANNELS: OnceLock<[f64; 256]> = OnceLock::new();

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Gamma-expanded value of one 8-bit sRGB channel
pub fn channel_to_linear(channel: u8) -> f64 {
    let table = LINEAR_CHANNELS.get_or_init(|| {
        let mut table = [0.0; 256];
        for (value, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
            *slot = linearize(value);
        }
        table
    });
    table[usize::from(channel)]
}

/// Relative luminance in `[0, 1]`: `0.2126 R + 0.7152 G + 0.0722 B` over linear channels
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.channels();
    RED_WEIGHT * channel_to_linear(r)
        + GREEN_WEIGHT * channel_to_linear(g)
        + BLUE_WEIGHT * channel_to_linear(b)
}
