use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGB color of a body.
///
/// Serialized as a `#rrggbb` hex string in scene JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
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

    /// Parse `#rrggbb` (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{}' must start with '#'", hex))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("color '{}' is not of the form #rrggbb", hex));
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|e| e.to_string())?;
        Ok(Self::from_packed(packed))
    }

    /// `0x00RRGGBB`
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lowercase `#rrggbb`, the form canvas `fillStyle` accepts.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise average, rounded down.
    pub fn mix(self, other: Rgb) -> Rgb {
        #[inline]
        fn avg(a: u8, b: u8) -> u8 {
            ((a as u16 + b as u16) / 2) as u8
        }
        Rgb {
            r: avg(self.r, other.r),
            g: avg(self.g, other.g),
            b: avg(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}
