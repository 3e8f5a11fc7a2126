//! RGBA color used by every glyph in the figure model.
//!
//! Colors are written in configuration as names (`"magenta"`) or hex
//! (`"#ff00ff"`, `"#ff00ff80"`), so the type round-trips through strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Named colors understood by [`Color::from_str`].
const NAMED: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("grey", Color::GREY),
    ("gray", Color::GREY),
    ("green", Color::GREEN),
    ("magenta", Color::MAGENTA),
    ("red", Color::RED),
    ("blue", Color::BLUE),
    ("navy", Color::NAVY),
    ("yellow", Color::YELLOW),
    ("orange", Color::ORANGE),
    ("brown", Color::BROWN),
    ("tan", Color::TAN),
    ("lightblue", Color::LIGHT_BLUE),
];

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with the alpha channel replaced by `alpha` in `[0, 1]`.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Name of this color if it is one of the named constants (alpha ignored).
    pub fn name(self) -> Option<&'static str> {
        let opaque = Self { a: 255, ..self };
        NAMED
            .iter()
            .find(|(_, c)| *c == opaque)
            .map(|(n, _)| *n)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREY: Color = Color::rgb(128, 128, 128);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const TAN: Color = Color::rgb(210, 180, 140);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
}

impl Default for Color {
    fn default() -> Self {
        Self::GREY
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized color '{0}' (expected a color name or #rrggbb[aa])")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError(s.to_string()));
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, c)| *c)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(Color::new(byte(0)?, byte(2)?, byte(4)?, a))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self.a) {
            (Some(name), 255) => f.write_str(name),
            (_, 255) => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            _ => write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Magenta".parse::<Color>().unwrap(), Color::MAGENTA);
        assert_eq!("gray".parse::<Color>().unwrap(), Color::GREY);
    }

    #[test]
    fn parses_hex_with_and_without_alpha() {
        assert_eq!("#000080".parse::<Color>().unwrap(), Color::NAVY);
        assert_eq!(
            "#ff000033".parse::<Color>().unwrap(),
            Color::new(255, 0, 0, 0x33)
        );
        assert!("#12345".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn display_prefers_names() {
        assert_eq!(Color::NAVY.to_string(), "navy");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
        assert_eq!(Color::RED.with_alpha(0.2).to_string(), "#ff000033");
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::RED.with_alpha(2.0).a, 255);
        assert_eq!(Color::RED.with_alpha(-1.0).a, 0);
    }
}
