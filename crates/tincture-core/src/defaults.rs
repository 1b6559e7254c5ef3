// ABOUTME: Built-in design-token palette shared by every caller
// ABOUTME: Built once from static hex tables and never mutated afterwards

use std::sync::OnceLock;
use tincture_types::{ColorScale, Palette, SemanticPalette};

// Shades 50 through 950, lightest first
const PRIMARY: [u32; 11] = [
    0xEFF6FF, 0xDBEAFE, 0xBFDBFE, 0x93C5FD, 0x60A5FA, 0x3B82F6, 0x2563EB, 0x1D4ED8, 0x1E40AF,
    0x1E3A8A, 0x172554,
];
const SECONDARY: [u32; 11] = [
    0xFAF5FF, 0xF3E8FF, 0xE9D5FF, 0xD8B4FE, 0xC084FC, 0xA855F7, 0x9333EA, 0x7C3AED, 0x6B21A8,
    0x581C87, 0x3B0764,
];
const NEUTRAL: [u32; 11] = [
    0xFAFAF9, 0xF5F5F4, 0xE7E5E4, 0xD6D3D1, 0xA8A29E, 0x78716C, 0x57534E, 0x44403C, 0x292524,
    0x1C1917, 0x0C0A09,
];
const SUCCESS: [u32; 11] = [
    0xF0FDF4, 0xDCFCE7, 0xBBF7D0, 0x86EFAC, 0x4ADE80, 0x22C55E, 0x16A34A, 0x15803D, 0x166534,
    0x14532D, 0x052E16,
];
const WARNING: [u32; 11] = [
    0xFFFBEB, 0xFEF3C7, 0xFDE68A, 0xFCD34D, 0xFBBF24, 0xF59E0B, 0xD97706, 0xB45309, 0x92400E,
    0x78350F, 0x451A03,
];
const ERROR: [u32; 11] = [
    0xFEF2F2, 0xFEE2E2, 0xFECACA, 0xFCA5A5, 0xF87171, 0xEF4444, 0xDC2626, 0xB91C1C, 0x991B1B,
    0x7F1D1D, 0x450A0A,
];
const INFO: [u32; 11] = [
    0xF0F9FF, 0xE0F2FE, 0xBAE6FD, 0x7DD3FC, 0x38BDF8, 0x0EA5E9, 0x0284C7, 0x0369A1, 0x075985,
    0x0C4A6E, 0x082F49,
];

static DEFAULT_PALETTE: OnceLock<Palette> = OnceLock::new();

/// The built-in palette. Derive variants with [`Palette::with_overrides`]
/// or [`Palette::with_color`]; this instance is shared.
pub fn default_palette() -> &'static Palette {
    DEFAULT_PALETTE.get_or_init(|| {
        Palette::new(
            ColorScale::from_hex_table(PRIMARY),
            ColorScale::from_hex_table(SECONDARY),
            ColorScale::from_hex_table(NEUTRAL),
            SemanticPalette {
                success: ColorScale::from_hex_table(SUCCESS),
                warning: ColorScale::from_hex_table(WARNING),
                error: ColorScale::from_hex_table(ERROR),
                info: ColorScale::from_hex_table(INFO),
            },
        )
    })
}
