use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit-per-channel sRGB color.
///
/// There is no alpha: translucency only exists in widget chrome, never in the
/// gradient model.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One of the three channels of a [`Color`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `(r << 16) | (g << 8) | b`.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Inverse of [`packed`](Self::packed). Bits above the low 24 are ignored.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    #[inline]
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Returns a copy with one channel replaced.
    #[inline]
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (alpha discarded), case-insensitive.
    /// The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if (hex.len() != 6 && hex.len() != 8) || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (byte(0), byte(2), byte(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Color { r, g, b }),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

/// A string that is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: expected #rrggbb", self.0)
    }
}

impl std::error::Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(Color::new(255, 107, 7).to_hex(), "#ff6b07");
        assert_eq!(Color::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn parse_accepts_case_and_alpha() {
        assert_eq!(Color::from_hex("#4ECDC4"), Ok(Color::new(0x4e, 0xcd, 0xc4)));
        assert_eq!(Color::from_hex("4ecdc4"), Ok(Color::new(0x4e, 0xcd, 0xc4)));
        assert_eq!(Color::from_hex("#45b7d1ff"), Ok(Color::new(0x45, 0xb7, 0xd1)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::from_hex("#xyzxyz").is_err());
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn packed_layout() {
        let c = Color::new(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x123456);
        assert_eq!(Color::from_packed(0x123456), c);
        assert_eq!(Color::from_packed(0xFF00_00FF), Color::new(0, 0, 0xFF));
    }

    #[test]
    fn with_channel_replaces_one_channel() {
        let c = Color::new(10, 20, 30).with_channel(Channel::Green, 200);
        assert_eq!(c, Color::new(10, 200, 30));
        assert_eq!(c.channel(Channel::Blue), 30);
    }
}
