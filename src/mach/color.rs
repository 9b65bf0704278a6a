//! RGB565 colors and the named `TFT_` constants.

use super::Val;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Marks an argument token as a named color constant.
pub const COLOR_PREFIX: &str = "TFT_";

/// An 8-bit-per-channel color ready for a [`Painter`](super::Painter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expands 5/6/5 packed fields, scaling each to 0..=255 with rounding.
    pub fn from_rgb565(c: u16) -> Self {
        fn scale(field: u16, max: u16) -> u8 {
            (f64::from(field) * 255.0 / f64::from(max)).round() as u8
        }
        Self {
            r: scale((c >> 11) & 0x1F, 0x1F),
            g: scale((c >> 5) & 0x3F, 0x3F),
            b: scale(c & 0x1F, 0x1F),
        }
    }

    /// Resolves an argument to a color. Never fails: unknown names and
    /// text fall back to white.
    pub fn resolve(val: &Val) -> Self {
        match val {
            Val::Color(name) => match lookup(name) {
                Some(c) => Self::from_rgb565(c),
                None => Self::WHITE,
            },
            Val::Number(n) => Self::from_rgb565(number_to_rgb565(*n)),
            Val::Text(_) => Self::WHITE,
        }
    }
}

// Keeps the low 16 bits of the integer part, the way a sketch would pass
// an int to a uint16_t parameter.
fn number_to_rgb565(n: f64) -> u16 {
    if !n.is_finite() {
        return 0;
    }
    (n.trunc() as i64 & 0xFFFF) as u16
}

lazy_static! {
    static ref NAMED_COLORS: HashMap<&'static str, u16> = [
        ("TFT_BLACK", 0x0000),
        ("TFT_NAVY", 0x000F),
        ("TFT_DARKGREEN", 0x03E0),
        ("TFT_DARKCYAN", 0x03EF),
        ("TFT_MAROON", 0x7800),
        ("TFT_PURPLE", 0x780F),
        ("TFT_OLIVE", 0x7BE0),
        ("TFT_LIGHTGRAY", 0xC618),
        ("TFT_LIGHTGREY", 0xC618),
        ("TFT_DARKGRAY", 0x7BEF),
        ("TFT_DARKGREY", 0x7BEF),
        ("TFT_BLUE", 0x001F),
        ("TFT_GREEN", 0x07E0),
        ("TFT_CYAN", 0x07FF),
        ("TFT_RED", 0xF800),
        ("TFT_MAGENTA", 0xF81F),
        ("TFT_YELLOW", 0xFFE0),
        ("TFT_WHITE", 0xFFFF),
        ("TFT_ORANGE", 0xFD20),
        ("TFT_GREENYELLOW", 0xAFE5),
        ("TFT_PINK", 0xF81F),
        ("TFT_BROWN", 0x9A60),
        ("TFT_GOLD", 0xFEA0),
        ("TFT_SILVER", 0xC618),
        ("TFT_SKYBLUE", 0x867D),
        ("TFT_VIOLET", 0x915C),
        ("TFT_GRAY", 0x8410),
        ("TFT_GREY", 0x8410),
    ]
    .iter()
    .cloned()
    .collect();
}

/// Looks up a full constant name such as `TFT_RED`.
pub fn lookup(name: &str) -> Option<u16> {
    NAMED_COLORS.get(name).copied()
}
