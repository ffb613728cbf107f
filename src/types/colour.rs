//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BrickError, Result};

/// An opaque 24-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#RRGGBB` hex string (the `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BrickError::Format {
                input: s.to_string(),
                help: Some("Use a 6-digit hex colour such as #FF0000".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2], s)?;
        let g = parse_hex_byte(&hex[2..4], s)?;
        let b = parse_hex_byte(&hex[4..6], s)?;
        Ok(Self::rgb(r, g, b))
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Convert to an RGB array (for image output).
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Multiply each channel by `factor`, clamping to 255.
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<[u8; 3]> for Colour {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl FromStr for Colour {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Colour-like input accepted at the API boundary.
///
/// Raw triples are kept wide so out-of-range channels are reported instead of
/// wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourInput {
    Raw([i64; 3]),
    Hex(String),
}

impl ColourInput {
    /// Validate and normalise to a [`Colour`].
    pub fn to_colour(&self) -> Result<Colour> {
        match self {
            ColourInput::Raw(channels) => {
                let mut out = [0u8; 3];
                for (slot, &value) in out.iter_mut().zip(channels) {
                    *slot = u8::try_from(value).map_err(|_| BrickError::Format {
                        input: format!("({}, {}, {})", channels[0], channels[1], channels[2]),
                        help: Some("Each channel must be between 0 and 255".to_string()),
                    })?;
                }
                Ok(Colour::from(out))
            }
            ColourInput::Hex(hex) => Colour::from_hex(hex),
        }
    }
}

impl From<Colour> for ColourInput {
    fn from(c: Colour) -> Self {
        ColourInput::Raw([c.r as i64, c.g as i64, c.b as i64])
    }
}

impl From<&str> for ColourInput {
    fn from(s: &str) -> Self {
        ColourInput::Hex(s.to_string())
    }
}

impl From<(u8, u8, u8)> for ColourInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColourInput::Raw([r as i64, g as i64, b as i64])
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str, input: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| BrickError::Format {
        input: input.to_string(),
        help: Some(format!("'{}' is not a hex byte", s)),
    })
}
