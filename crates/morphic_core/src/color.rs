//! Color types and utilities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MorphicError, Result};

/// Magnitude used to push a foreground away from its background
pub const FOREGROUND_MODULATOR: f64 = 0.8;

/// Packed values strictly above this threshold count as light (`256^3 / 2`)
const LIGHT_THRESHOLD: u32 = 0x80_0000;

/// 24-bit RGB color
///
/// Serialized as a lowercase `#rrggbb` string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a packed hex value (0xRRGGBB)
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Channels packed as a 24-bit integer
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lighten (positive) or darken (negative) every channel independently
    ///
    /// `magnitude` is clamped to [-1, 1]. Positive values move each channel
    /// toward 255 by that fraction of the remaining distance, negative values
    /// scale it toward 0. Each channel is rounded on its own.
    pub fn adjust_lightness(self, magnitude: f64) -> Self {
        if magnitude == 0.0 {
            return self;
        }
        let magnitude = magnitude.clamp(-1.0, 1.0);
        let channel = |v: u8| -> u8 {
            let v = f64::from(v);
            let adjusted = if magnitude > 0.0 {
                (v + (255.0 - v) * magnitude).min(255.0)
            } else {
                v + v * magnitude
            };
            adjusted.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    /// Crude lightness test on the packed integer value
    ///
    /// True iff the packed value is strictly greater than `256^3 / 2`, which
    /// in practice is decided almost entirely by the red channel.
    pub fn is_light(self) -> bool {
        self.packed() > LIGHT_THRESHOLD
    }
}

/// Foreground color that stays readable on `background`
pub fn readable_foreground(background: Rgb) -> Rgb {
    if background.is_light() {
        background.adjust_lightness(-FOREGROUND_MODULATOR)
    } else {
        background.adjust_lightness(FOREGROUND_MODULATOR)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = MorphicError;

    /// Parse `#rgb` or `#rrggbb` (either case)
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| MorphicError::invalid_color(s, "expected a leading '#'"))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MorphicError::invalid_color(s, "contains non-hex characters"));
        }
        match digits.len() {
            3 => {
                let nibble = |i: usize| -> Result<u8> {
                    let v = u8::from_str_radix(&digits[i..=i], 16).map_err(|_| {
                        MorphicError::invalid_color(s, "contains non-hex characters")
                    })?;
                    Ok(v * 17)
                };
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => {
                let hex = u32::from_str_radix(digits, 16)
                    .map_err(|_| MorphicError::invalid_color(s, "contains non-hex characters"))?;
                Ok(Self::from_hex(hex))
            }
            _ => Err(MorphicError::invalid_color(s, "expected 3 or 6 hex digits")),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = MorphicError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_and_format() {
        let color: Rgb = "#59A680".parse().unwrap();
        assert_eq!(color, Rgb::new(0x59, 0xa6, 0x80));
        assert_eq!(color.to_string(), "#59a680");
    }

    #[test]
    fn test_parse_shorthand() {
        let color: Rgb = "#fa0".parse().unwrap();
        assert_eq!(color, Rgb::new(0xff, 0xaa, 0x00));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["59a680", "#59a68", "#59a6800", "#59g680", "", "#"] {
            let err = input.parse::<Rgb>().unwrap_err();
            assert!(
                matches!(err, MorphicError::InvalidColor { input: ref i, .. } if i == input),
                "input {input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_adjust_extremes() {
        let color = Rgb::new(12, 130, 250);
        assert_eq!(color.adjust_lightness(1.0), Rgb::WHITE);
        assert_eq!(color.adjust_lightness(-1.0), Rgb::BLACK);
        assert_eq!(color.adjust_lightness(3.0), Rgb::WHITE);
    }

    #[test]
    fn test_adjust_rounds_each_channel() {
        // 0x59 = 89: 89 + 166 * 0.8 = 221.8 -> 222
        // 0xa6 = 166: 166 + 89 * 0.8 = 237.2 -> 237
        // 0x80 = 128: 128 + 127 * 0.8 = 229.6 -> 230
        let color = Rgb::from_hex(0x59a680);
        assert_eq!(color.adjust_lightness(0.8), Rgb::new(222, 237, 230));
        // 89 * 0.2 = 17.8 -> 18, 166 * 0.2 = 33.2 -> 33, 128 * 0.2 = 25.6 -> 26
        assert_eq!(color.adjust_lightness(-0.8), Rgb::new(18, 33, 26));
    }

    #[test]
    fn test_is_light_threshold() {
        assert!(!Rgb::from_hex(0x80_0000).is_light());
        assert!(Rgb::from_hex(0x80_0001).is_light());
        assert!(!Rgb::from_hex(0x7f_ffff).is_light());
        assert!(!Rgb::from_hex(0x59a680).is_light());
    }

    #[test]
    fn test_readable_foreground() {
        let dark = Rgb::from_hex(0x202020);
        assert_eq!(readable_foreground(dark), dark.adjust_lightness(0.8));
        let light = Rgb::from_hex(0xf0f0f0);
        assert_eq!(readable_foreground(light), light.adjust_lightness(-0.8));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::from_hex(0x38c3b9)).unwrap();
        assert_eq!(json, "\"#38c3b9\"");
        let back: Rgb = serde_json::from_str("\"#38C3B9\"").unwrap();
        assert_eq!(back, Rgb::from_hex(0x38c3b9));
        assert!(serde_json::from_str::<Rgb>("\"teal\"").is_err());
    }

    proptest! {
        #[test]
        fn adjust_by_zero_is_identity(hex in 0u32..=0xFF_FFFF) {
            let color = Rgb::from_hex(hex);
            prop_assert_eq!(color.adjust_lightness(0.0), color);
        }

        #[test]
        fn adjust_moves_every_channel_monotonically(hex in 0u32..=0xFF_FFFF, m in 0.0f64..=1.0) {
            let color = Rgb::from_hex(hex);
            let lighter = color.adjust_lightness(m);
            let darker = color.adjust_lightness(-m);
            let channels = color
                .to_array()
                .into_iter()
                .zip(lighter.to_array())
                .zip(darker.to_array());
            for ((c, l), d) in channels {
                prop_assert!(l >= c);
                prop_assert!(d <= c);
            }
        }
    }
}
