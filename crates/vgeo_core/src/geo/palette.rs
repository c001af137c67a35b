//! Color resolution for GEO color tokens.
//!
//! A color token is either a decimal palette index into the fixed
//! 16-entry Videoscape base color table, or a packed `RRGGBB` hex
//! value. Each token is resolved independently: decimal is tried
//! first, hex only when the decimal parse yields zero.

use glam::Vec4;

use super::cursor::{parse_u32, parse_u32_hex, skip_spaces};

/// The 16 Videoscape base colors, RGBA in 0-1.
pub const COLOR_TABLE: [Vec4; 16] = [
    Vec4::new(0.0, 0.0, 0.0, 1.0),    // 0 black
    Vec4::new(0.0, 0.0, 0.67, 1.0),   // 1 blue
    Vec4::new(0.0, 0.67, 0.0, 1.0),   // 2 green
    Vec4::new(0.0, 0.67, 0.67, 1.0),  // 3 cyan
    Vec4::new(0.67, 0.0, 0.0, 1.0),   // 4 red
    Vec4::new(0.67, 0.0, 0.67, 1.0),  // 5 magenta
    Vec4::new(0.67, 0.33, 0.0, 1.0),  // 6 brown
    Vec4::new(0.67, 0.67, 0.67, 1.0), // 7 light grey
    Vec4::new(0.33, 0.33, 0.33, 1.0), // 8 dark grey
    Vec4::new(0.33, 0.33, 1.0, 1.0),  // 9 light blue
    Vec4::new(0.33, 1.0, 0.33, 1.0),  // 10 light green
    Vec4::new(0.33, 1.0, 1.0, 1.0),   // 11 light cyan
    Vec4::new(1.0, 0.33, 0.33, 1.0),  // 12 light red
    Vec4::new(1.0, 0.33, 1.0, 1.0),   // 13 light magenta
    Vec4::new(1.0, 1.0, 0.33, 1.0),   // 14 yellow
    Vec4::new(1.0, 1.0, 1.0, 1.0),    // 15 white
];

/// Resolve a raw color token to an RGBA color.
///
/// A nonzero decimal value selects a palette entry through its lower
/// nibble; bits `0x30` carry a surface-effect field and `0xC0` a
/// hi-bit marker, both diagnostic only. A zero decimal value falls
/// back to a hex reparse of the same token, decoded as `0x00RRGGBB`.
///
/// Returns `None` when both interpretations yield zero; the caller
/// leaves the element's color unset and the import continues.
pub fn resolve_color(token: &str) -> Option<Vec4> {
    let s = skip_spaces(token);

    let (dec, _) = parse_u32(s);
    if dec != 0 {
        return Some(lookup_palette(dec));
    }

    let (hex, _) = parse_u32_hex(s);
    if hex != 0 {
        return Some(Vec4::new(
            ((hex & 0x00ff_0000) >> 16) as f32 / 255.0,
            ((hex & 0x0000_ff00) >> 8) as f32 / 255.0,
            (hex & 0x0000_00ff) as f32 / 255.0,
            1.0,
        ));
    }

    log::error!("GEO: color read failed at {:?}", s);
    None
}

/// Look up a palette entry from a raw decimal color value.
fn lookup_palette(value: u32) -> Vec4 {
    let index = (value & 0x0f) as usize;

    if value & 0xf0 != 0 {
        log::debug!(
            "GEO: material required: {}, surface effect: {}, hi-bit: {}",
            value,
            (value & 0x30) >> 4,
            value & 0xc0
        );
    }

    COLOR_TABLE[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_index() {
        assert_eq!(resolve_color("7"), Some(COLOR_TABLE[7]));
        assert_eq!(resolve_color("  15"), Some(COLOR_TABLE[15]));
    }

    #[test]
    fn test_palette_wraps_lower_nibble() {
        // 0x17 = surface effect bits on top of palette entry 7
        assert_eq!(resolve_color("23"), Some(COLOR_TABLE[7]));
    }

    #[test]
    fn test_hex_rgb() {
        let red = resolve_color("FF0000").unwrap();
        assert_eq!(red, Vec4::new(1.0, 0.0, 0.0, 1.0));

        let teal = resolve_color("008080").unwrap();
        assert!((teal.y - 128.0 / 255.0).abs() < 1e-6);
        assert!((teal.z - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(teal.w, 1.0);
    }

    #[test]
    fn test_decimal_wins_over_hex() {
        // "12" parses as decimal 12, not hex 0x12
        assert_eq!(resolve_color("12"), Some(COLOR_TABLE[12]));
    }

    #[test]
    fn test_garbage_token_is_none() {
        assert_eq!(resolve_color("zzz"), None);
        assert_eq!(resolve_color(""), None);
        // both decimal and hex parse to zero
        assert_eq!(resolve_color("0"), None);
        assert_eq!(resolve_color("000000"), None);
    }

    #[test]
    fn test_every_decimal_token_resolves() {
        // lower nibble selects the entry regardless of the upper bits
        for value in [1u32, 9, 16, 0x37, 0xC5, 0xFF, 0xFFFF] {
            let color = resolve_color(&value.to_string()).unwrap();
            assert_eq!(color, COLOR_TABLE[(value & 0x0f) as usize]);
        }
    }
}
