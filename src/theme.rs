//! Colors and the Catppuccin Mocha palette.
//!
//! Every widget and layout references colors through [`Mocha`], so the
//! palette is the single source of truth for the look of the bar and the
//! window borders.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error from parsing a hex color.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid color {0:?}: expected #rrggbb")]
pub struct ColorError(String);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError(s.to_string()))
        };
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

/// Named colors of the Catppuccin Mocha flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mocha {
    Rosewater,
    Flamingo,
    Pink,
    Mauve,
    Red,
    Maroon,
    Peach,
    Yellow,
    Green,
    Teal,
    Sky,
    Sapphire,
    Blue,
    Lavender,
    Text,
    Subtext1,
    Subtext0,
    Overlay2,
    Overlay1,
    Overlay0,
    Surface2,
    Surface1,
    Surface0,
    Base,
    Mantle,
    Crust,
}

impl Mocha {
    pub const ALL: [Mocha; 26] = [
        Mocha::Rosewater,
        Mocha::Flamingo,
        Mocha::Pink,
        Mocha::Mauve,
        Mocha::Red,
        Mocha::Maroon,
        Mocha::Peach,
        Mocha::Yellow,
        Mocha::Green,
        Mocha::Teal,
        Mocha::Sky,
        Mocha::Sapphire,
        Mocha::Blue,
        Mocha::Lavender,
        Mocha::Text,
        Mocha::Subtext1,
        Mocha::Subtext0,
        Mocha::Overlay2,
        Mocha::Overlay1,
        Mocha::Overlay0,
        Mocha::Surface2,
        Mocha::Surface1,
        Mocha::Surface0,
        Mocha::Base,
        Mocha::Mantle,
        Mocha::Crust,
    ];

    pub const fn color(self) -> Color {
        match self {
            Mocha::Rosewater => Color::rgb(0xf5, 0xe0, 0xdc),
            Mocha::Flamingo => Color::rgb(0xf2, 0xcd, 0xcd),
            Mocha::Pink => Color::rgb(0xf5, 0xc2, 0xe7),
            Mocha::Mauve => Color::rgb(0xcb, 0xa6, 0xf7),
            Mocha::Red => Color::rgb(0xf3, 0x8b, 0xa8),
            Mocha::Maroon => Color::rgb(0xeb, 0xa0, 0xac),
            Mocha::Peach => Color::rgb(0xfa, 0xb3, 0x87),
            Mocha::Yellow => Color::rgb(0xf9, 0xe2, 0xaf),
            Mocha::Green => Color::rgb(0xa6, 0xe3, 0xa1),
            Mocha::Teal => Color::rgb(0x94, 0xe2, 0xd5),
            Mocha::Sky => Color::rgb(0x89, 0xdc, 0xeb),
            Mocha::Sapphire => Color::rgb(0x74, 0xc7, 0xec),
            Mocha::Blue => Color::rgb(0x89, 0xb4, 0xfa),
            Mocha::Lavender => Color::rgb(0xb4, 0xbe, 0xfe),
            Mocha::Text => Color::rgb(0xcd, 0xd6, 0xf4),
            Mocha::Subtext1 => Color::rgb(0xba, 0xc2, 0xde),
            Mocha::Subtext0 => Color::rgb(0xa6, 0xad, 0xc8),
            Mocha::Overlay2 => Color::rgb(0x93, 0x99, 0xb2),
            Mocha::Overlay1 => Color::rgb(0x7f, 0x84, 0x9c),
            Mocha::Overlay0 => Color::rgb(0x6c, 0x70, 0x86),
            Mocha::Surface2 => Color::rgb(0x58, 0x5b, 0x70),
            Mocha::Surface1 => Color::rgb(0x45, 0x47, 0x5a),
            Mocha::Surface0 => Color::rgb(0x31, 0x32, 0x44),
            Mocha::Base => Color::rgb(0x1e, 0x1e, 0x2e),
            Mocha::Mantle => Color::rgb(0x18, 0x18, 0x25),
            Mocha::Crust => Color::rgb(0x11, 0x11, 0x1b),
        }
    }
}

impl fmt::Display for Mocha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Flat name → color mapping exported alongside the other tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Theme {
    colors: BTreeMap<String, Color>,
}

impl Theme {
    /// The full Mocha palette.
    pub fn mocha() -> Self {
        Self {
            colors: Mocha::ALL
                .iter()
                .map(|c| (c.to_string(), c.color()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let c: Color = "#94E2d5".parse().unwrap();
        assert_eq!(c, Mocha::Teal.color());
        assert_eq!(c.to_string(), "#94e2d5");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!("94e2d5".parse::<Color>().is_err());
        assert!("#94e2d".parse::<Color>().is_err());
        assert!("#94e2zz".parse::<Color>().is_err());
        assert!("#94e2d5ff".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn color_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Mocha::Base.color()).unwrap();
        assert_eq!(json, r##""#1e1e2e""##);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mocha::Base.color());
        assert!(serde_json::from_str::<Color>(r#""red""#).is_err());
    }

    #[test]
    fn theme_covers_whole_palette() {
        let json = serde_json::to_value(Theme::mocha()).unwrap();
        let colors = json.as_object().unwrap();
        assert_eq!(colors.len(), 26);
        assert_eq!(colors["Mantle"], "#181825");
        assert_eq!(colors["Crust"], "#11111b");
        assert!(!colors.contains_key("Chartreuse"));
    }
}
