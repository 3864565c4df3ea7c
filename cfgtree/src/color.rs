//! Hex encoding of colors stored as entry values.
//!
//! Colors carry 16-bit channels in memory but are stored as six hex digits
//! (`RRGGBB`, no prefix). Narrowing uses `channel * 255 / 65535` and
//! widening `channel * 65535 / 255`, both truncating, so a round trip is
//! lossy in a fixed and reproducible way:
//!
//! ```
//! use cfgtree::Rgb;
//!
//! let grey = Rgb::new(32768, 32768, 32768);
//! assert_eq!(grey.to_string(), "7f7f7f");
//! assert_eq!("7f7f7f".parse::<Rgb>().unwrap(), Rgb::new(32639, 32639, 32639));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const CHANNEL_MAX: u32 = 65535;
const BYTE_MAX: u32 = 255;
const MAX_DIGITS: usize = 6;

/// A color with 16-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel, 0 to 65535.
    pub red: u16,
    /// Green channel, 0 to 65535.
    pub green: u16,
    /// Blue channel, 0 to 65535.
    pub blue: u16,
}

impl Rgb {
    /// Creates a color from 16-bit channels.
    #[must_use]
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Packs the channels into a 24-bit `0xRRGGBB` integer.
    #[must_use]
    pub fn to_packed(self) -> u32 {
        (narrow(self.red) << 16) | (narrow(self.green) << 8) | narrow(self.blue)
    }

    /// Expands a 24-bit `0xRRGGBB` integer. Bits above 24 are ignored.
    #[must_use]
    pub fn from_packed(packed: u32) -> Self {
        Self {
            red: widen((packed >> 16) & 0xff),
            green: widen((packed >> 8) & 0xff),
            blue: widen(packed & 0xff),
        }
    }
}

fn narrow(channel: u16) -> u32 {
    u32::from(channel) * BYTE_MAX / CHANNEL_MAX
}

fn widen(byte: u32) -> u16 {
    u16::try_from(byte * CHANNEL_MAX / BYTE_MAX).unwrap_or(u16::MAX)
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.to_packed())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let invalid = |reason: &str| Error::InvalidColor {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if digits.is_empty() {
            return Err(invalid("empty value"));
        }
        if digits.len() > MAX_DIGITS {
            return Err(invalid("more than six hex digits"));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("not a hex number"));
        }

        let packed = u32::from_str_radix(digits, 16).map_err(|e| invalid(&e.to_string()))?;
        Ok(Self::from_packed(packed))
    }
}
