// SPDX-License-Identifier: MIT
//
// CSS hex color literals.
//
// The table stores colors exactly as they appear in CSS output, so the
// only parsing needed is validation: every literal must be a well-formed
// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
//
// Public so hosts can decode table literals into channels (contrast
// checks, non-CSS renderers) without a color crate of their own.

use std::fmt;

/// An 8-bit sRGB color with alpha, decoded from a hex literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a CSS hex color literal.
///
/// The leading `#` is required, as it is in CSS.
///
/// Returns `None` if the string is not a valid hex color.
///
/// ```
/// use radix_colors::{parse_hex, scale, Mode, Rgba};
///
/// let red9 = scale("red").and_then(|s| s.shade(Mode::Light, 9)).unwrap();
/// assert_eq!(parse_hex(red9), Some(Rgba::new(0xe5, 0x48, 0x4d, 0xff)));
/// assert!(parse_hex("e5484d").is_none());
/// ```
#[must_use]
pub fn parse_hex(s: &str) -> Option<Rgba> {
    let s = s.strip_prefix('#')?;
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgba::new(r << 4 | r, g << 4 | g, b << 4 | b, u8::MAX))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(Rgba::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgba::new(r, g, b, u8::MAX))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Rgba::new(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}
