//! Star fill color and its hex string form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Returned when a string is not a 6-digit hex RGB color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color {0:?}, expected 6 hex digits with optional leading '#'")]
pub struct InvalidColor(pub String);

/// An 8-bit-per-channel RGB color.
///
/// Serialized as a `"#rrggbb"` string so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `"rrggbb"` or `"#rrggbb"`. Surrounding whitespace is ignored.
    pub fn from_hex(input: &str) -> Result<Self, InvalidColor> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColor(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| InvalidColor(input.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("FF8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("  #0a0B0c "), Ok(Rgb::new(10, 11, 12)));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for bad in ["", "#", "#fff", "#ff80001", "zzzzzz", "#+f+f+f", "ff 800"] {
            assert!(
                Rgb::from_hex(bad).is_err(),
                "Expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_hex_output_is_lowercase() {
        assert_eq!(Rgb::new(171, 205, 239).to_hex(), "#abcdef");
    }

    #[test]
    fn test_ron_uses_hex_string() {
        let ron_str = ron::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(ron_str, "\"#010203\"");
        let parsed: Rgb = ron::from_str("\"#a0b0c0\"").unwrap();
        assert_eq!(parsed, Rgb::new(0xa0, 0xb0, 0xc0));
    }

    #[test]
    fn test_ron_rejects_bad_color() {
        let result: Result<Rgb, _> = ron::from_str("\"blue\"");
        assert!(result.is_err());
    }
}
