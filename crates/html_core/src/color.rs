use std::fmt;

use crate::error::CommandError;

/// A `#rrggbb` color as understood by `foreColor` / `hiliteColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::from_rgb(0, 0, 0);
    pub const WHITE: HexColor = HexColor::from_rgb(0xff, 0xff, 0xff);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xrrggbb`.
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Accepts `#rgb` and `#rrggbb`, with or without the leading `#`.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let invalid = || CommandError::InvalidColor(input.to_string());
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let expand = |ix: usize| channel(&digits[ix..ix + 1].repeat(2));
                Ok(Self::from_rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::from_rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_expands() {
        assert_eq!(HexColor::parse("#F0a").unwrap().to_string(), "#ff00aa");
    }

    #[test]
    fn missing_hash_is_accepted() {
        assert_eq!(HexColor::parse("102030").unwrap(), HexColor::from_rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn packs_channels() {
        assert_eq!(HexColor::from_rgb(0x12, 0x34, 0x56).to_u32(), 0x123456);
        assert_eq!(HexColor::WHITE.to_u32(), 0xffffff);
    }

    #[test]
    fn rejects_garbage() {
        assert!(HexColor::parse("").is_err());
        assert!(HexColor::parse("#12345").is_err());
        assert!(HexColor::parse("red").is_err());
        assert!(HexColor::parse("#ggg").is_err());
    }
}
