use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_FONT_SIZE: u16 = 8;
pub const MAX_FONT_SIZE: u16 = 72;
pub const DEFAULT_FONT_SIZE: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

pub const FONT_FAMILIES: &[FontFamily] =
    &[FontFamily::SansSerif, FontFamily::Serif, FontFamily::Monospace];

impl FontFamily {
    pub fn label(self) -> &'static str {
        match self {
            FontFamily::SansSerif => "Sans Serif",
            FontFamily::Serif => "Serif",
            FontFamily::Monospace => "Monospace",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

pub const FONT_WEIGHTS: &[FontWeight] = &[FontWeight::Normal, FontWeight::Bold];

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Normal => f.write_str("Regular"),
            FontWeight::Bold => f.write_str("Bold"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

pub const FONT_STYLES: &[FontStyle] = &[FontStyle::Normal, FontStyle::Italic];

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontStyle::Normal => f.write_str("Upright"),
            FontStyle::Italic => f.write_str("Italic"),
        }
    }
}

/// Family, size and style of the scrolling text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontDescriptor {
    #[serde(default)]
    pub family: FontFamily,
    #[serde(default = "default_font_size")]
    pub size: u16,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub style: FontStyle,
}

fn default_font_size() -> u16 {
    DEFAULT_FONT_SIZE
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            size: DEFAULT_FONT_SIZE,
            weight: FontWeight::default(),
            style: FontStyle::default(),
        }
    }
}

impl FontDescriptor {
    /// Returns a copy with the size pulled into the supported range.
    pub fn clamped(mut self) -> Self {
        self.size = self.size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)?;
        if self.weight == FontWeight::Bold {
            f.write_str(" bold")?;
        }
        if self.style == FontStyle::Italic {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}

/// 24-bit text color, written as `#RRGGBB` in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::new(231, 231, 231)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{0}`, expected #RRGGBB")]
pub struct ParseRgbError(pub String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseRgbError(value.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseRgbError(value.to_string()))
        };

        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_parses_with_and_without_hash() {
        assert_eq!("#FF8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("0a0B0c".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102FF");
    }

    #[test]
    fn rgb_rejects_malformed_values() {
        assert!("#FFF".parse::<Rgb>().is_err());
        assert!("#GG0000".parse::<Rgb>().is_err());
        assert!("#ÄÄ0000".parse::<Rgb>().is_err());
        assert!("#+F+F+F".parse::<Rgb>().is_err());
        assert!("+1+2+3".parse::<Rgb>().is_err());
    }

    #[test]
    fn font_size_is_clamped() {
        let tiny = FontDescriptor {
            size: 2,
            ..FontDescriptor::default()
        };
        assert_eq!(tiny.clamped().size, MIN_FONT_SIZE);

        let huge = FontDescriptor {
            size: 400,
            ..FontDescriptor::default()
        };
        assert_eq!(huge.clamped().size, MAX_FONT_SIZE);
    }
}
