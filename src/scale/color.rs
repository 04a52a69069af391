use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{FathomError, FathomResult};

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Fill used for features without a value.
pub const NO_DATA: Rgb = Rgb {
    r: 0xF0,
    g: 0xF8,
    b: 0xFF,
};

impl Rgb {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn parse_hex(s: &str) -> FathomResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(FathomError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> FathomResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| FathomError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation in sRGB with clamped `t`, rounded to the nearest byte.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn ch(a: u8, b: u8, t: f64) -> u8 {
            crate::foundation::math::lerp(f64::from(a), f64::from(b), t)
                .round()
                .clamp(0.0, 255.0) as u8
        }
        Self {
            r: ch(self.r, other.r, t),
            g: ch(self.g, other.g, t),
            b: ch(self.b, other.b, t),
        }
    }

    /// RGBA8 with full alpha.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
