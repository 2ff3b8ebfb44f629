//! Hex colors and WCAG contrast.

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses exactly six hex digits with an optional leading `#`.
    ///
    /// Any other shape (short form, alpha channel, stray characters) yields
    /// `None` rather than a fallback color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        match hex::decode(digits).ok()?.as_slice() {
            &[r, g, b] => Some(Self { r, g, b }),
            _ => None,
        }
    }

    /// Relative luminance in `[0, 1]` as defined by WCAG 2.
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA` (the `#` is optional) into RGBA channels.
///
/// Six digits imply an opaque color.
pub fn parse_rgba(hex: &str) -> Option<[u8; 4]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 && digits.len() != 8 {
        return None;
    }
    match hex::decode(digits).ok()?.as_slice() {
        &[r, g, b] => Some([r, g, b, 0xff]),
        &[r, g, b, a] => Some([r, g, b, a]),
        _ => None,
    }
}

fn linearize(channel: u8) -> f64 {
    let s = f64::from(channel) / 255.0;
    if s <= 0.03928 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

fn ratio(lum1: f64, lum2: f64) -> f64 {
    (lum1.max(lum2) + 0.05) / (lum1.min(lum2) + 0.05)
}

/// Contrast ratio between two colors, from 1.0 (identical) to 21.0
/// (black on white).
pub fn contrast(color1: Rgb, color2: Rgb) -> f64 {
    ratio(color1.relative_luminance(), color2.relative_luminance())
}

/// Legacy contrast where both luminance terms come from `color1`, so the
/// result is always 1.0.
///
/// Only useful for reproducing older reports computed this way.
pub fn contrast_first_color_only(color1: Rgb, _color2: Rgb) -> f64 {
    let lum = color1.relative_luminance();
    ratio(lum, lum)
}
