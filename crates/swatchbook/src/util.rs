//! Colour and text helpers for terminal presentation.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// An sRGB colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns `true` if text drawn on this colour should be dark.
    ///
    /// Uses the Rec. 601 luma approximation.
    pub fn is_light(self) -> bool {
        let luma = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        luma >= 128_000
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
///
/// Returns `None` for anything else, including named colours and
/// `rgb(...)` notation.
///
/// ```rust
/// use swatchbook::util::parse_hex_color;
///
/// let blue = parse_hex_color("#1369e9").unwrap();
/// assert_eq!(blue.rgb(), (0x13, 0x69, 0xe9));
/// assert_eq!(parse_hex_color("#fff").unwrap().rgb(), (255, 255, 255));
/// assert!(parse_hex_color("{blue.500}").is_none());
/// ```
pub fn parse_hex_color(value: &str) -> Option<Rgba> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => Some(Rgba {
            r: nibble(0)?,
            g: nibble(1)?,
            b: nibble(2)?,
            a: if hex.len() == 4 { nibble(3)? } else { 255 },
        }),
        6 | 8 => Some(Rgba {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: if hex.len() == 8 { byte(6)? } else { 255 },
        }),
        _ => None,
    }
}

/// Maps an RGB triplet to the nearest index of the ANSI 256-colour palette.
///
/// Greys use the 24-step ramp; everything else the 6x6x6 cube.
///
/// ```rust
/// use swatchbook::util::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r as u16 - 8) * 24 / 247) as u8,
        };
    }

    let step = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * step(r) + 6 * step(g) + step(b)
}

/// Cuts `text` to at most `max_width` terminal columns, ending in `…` when
/// anything was removed. Wide characters count as two columns.
///
/// ```rust
/// use swatchbook::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("--base-blue-500", 20), "--base-blue-500");
/// assert_eq!(truncate_to_width("--base-blue-500", 8), "--base-…");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }

    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_lengths() {
        assert_eq!(
            parse_hex_color("#1369e9"),
            Some(Rgba { r: 0x13, g: 0x69, b: 0xe9, a: 255 })
        );
        assert_eq!(
            parse_hex_color("#1369e980"),
            Some(Rgba { r: 0x13, g: 0x69, b: 0xe9, a: 0x80 })
        );
        assert_eq!(
            parse_hex_color("#f0a"),
            Some(Rgba { r: 255, g: 0, b: 170, a: 255 })
        );
        assert_eq!(parse_hex_color("#f0a8").map(|c| c.a), Some(0x88));
    }

    #[test]
    fn test_parse_hex_rejects() {
        assert_eq!(parse_hex_color("1369e9"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#ggg"), None);
        assert_eq!(parse_hex_color("#ü12"), None);
        assert_eq!(parse_hex_color("transparent"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_is_light() {
        assert!(parse_hex_color("#ffffff").unwrap().is_light());
        assert!(!parse_hex_color("#1369e9").unwrap().is_light());
    }

    #[test]
    fn test_rgb_to_ansi256_greys() {
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert!((232..=255).contains(&rgb_to_ansi256((128, 128, 128))));
    }

    #[test]
    fn test_rgb_to_ansi256_cube() {
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("", 4), "");
        assert_eq!(truncate_to_width("16px", 4), "16px");
        assert_eq!(truncate_to_width("123456", 5), "1234…");
        assert_eq!(truncate_to_width("Hello", 0), "…");
    }

    #[test]
    fn test_truncate_wide_characters() {
        assert_eq!(truncate_to_width("色色色", 4), "色…");
    }
}
