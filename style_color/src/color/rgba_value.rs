// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Explicit RGBA color representation.
//!
//! The textual form is `#aarrggbb`: alpha comes first, as in spreadsheet style sheets.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use crate::{HexColorFormatError, try_parse_argb_str, try_parse_hex_color};

/// Represents a color as four bytes: red, green, blue and alpha.
///
/// An alpha of 255 is fully opaque. There is no way for a component to be missing.
///
/// The value is immutable. To change a component build a new value and replace the old
/// one, eg: through [`Color::rgb_mut`].
///
/// ```compile_fail
/// let mut value = style_color::RgbaValue::from_u8(1, 2, 3);
/// value.alpha = 0;
/// ```
///
/// [`Color::rgb_mut`]: crate::Color::rgb_mut
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbaValue {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl From<(u8, u8, u8)> for RgbaValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<(u8, u8, u8, u8)> for RgbaValue {
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self::from_u8_with_alpha(red, green, blue, alpha)
    }
}

/// Opaque black.
impl Default for RgbaValue {
    fn default() -> Self { Self::from_u8(0, 0, 0) }
}

impl RgbaValue {
    /// Alpha used when none is given.
    pub const OPAQUE: u8 = 255;

    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_u8_with_alpha(red, green, blue, Self::OPAQUE)
    }

    #[must_use]
    pub const fn from_u8_with_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses `#rrggbb` or `#aarrggbb`, case insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorFormatError`] if the input is not a valid hex color.
    pub fn try_from_hex_color(input: &str) -> Result<RgbaValue, HexColorFormatError> {
        try_parse_hex_color(input)
    }

    /// Parses the style sheet attribute form, `rrggbb` or `aarrggbb` with no `#`.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorFormatError`] if the input is not 6 or 8 hex digits.
    pub fn try_from_argb_str(input: &str) -> Result<RgbaValue, HexColorFormatError> {
        try_parse_argb_str(input)
    }

    /// # Panics
    ///
    /// This function will panic if the input string is not a valid hex color format.
    #[must_use]
    pub fn from_hex(input: &str) -> RgbaValue {
        match try_parse_hex_color(input) {
            Ok(color) => color,
            Err(error) => {
                panic!("Invalid hex color format: {error}")
            }
        }
    }

    /// Always the 9 character `#aarrggbb` form with lowercase digits, even when the
    /// value was parsed from `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [red, green, blue, alpha] = self.rgba();
        format!("#{alpha:02x}{red:02x}{green:02x}{blue:02x}")
    }

    /// The style sheet attribute form: 8 uppercase digits, no `#` (eg: `FFFF0000`).
    #[must_use]
    pub fn to_argb_string(&self) -> String {
        let [red, green, blue, alpha] = self.rgba();
        format!("{alpha:02X}{red:02X}{green:02X}{blue:02X}")
    }

    #[must_use]
    pub const fn red(&self) -> u8 { self.red }

    #[must_use]
    pub const fn green(&self) -> u8 { self.green }

    #[must_use]
    pub const fn blue(&self) -> u8 { self.blue }

    #[must_use]
    pub const fn alpha(&self) -> u8 { self.alpha }

    /// Red, green and blue, in that order.
    #[must_use]
    pub const fn rgb(&self) -> [u8; 3] { [self.red, self.green, self.blue] }

    /// Red, green, blue and alpha, in that order.
    #[must_use]
    pub const fn rgba(&self) -> [u8; 4] { [self.red, self.green, self.blue, self.alpha] }
}

impl Display for RgbaValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbaValue {
    type Err = HexColorFormatError;

    fn from_str(input: &str) -> Result<Self, Self::Err> { Self::try_from_hex_color(input) }
}

impl TryFrom<&str> for RgbaValue {
    type Error = HexColorFormatError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::try_from_hex_color(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_new() {
        let value = RgbaValue::from_u8(1, 2, 3);
        assert_eq2!(value.rgba(), [1, 2, 3, 255]);
        assert_eq2!(value.rgb(), [1, 2, 3]);
    }

    #[test_case(0, 0, 0, 0)]
    #[test_case(1, 2, 3, 4)]
    #[test_case(255, 128, 0, 255)]
    #[test_case(255, 255, 255, 255)]
    fn test_components(red: u8, green: u8, blue: u8, alpha: u8) {
        let value = RgbaValue::from_u8_with_alpha(red, green, blue, alpha);
        assert_eq2!(value.red(), red);
        assert_eq2!(value.green(), green);
        assert_eq2!(value.blue(), blue);
        assert_eq2!(value.alpha(), alpha);
        assert_eq2!(value.rgba(), [red, green, blue, alpha]);
        assert_eq2!(value, RgbaValue::from((red, green, blue, alpha)));
    }

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbaValue::try_from_hex_color("#ff0000").unwrap();
            assert_eq2!(value.rgba(), [255, 0, 0, 255]);
        }

        // Invalid.
        {
            let value = RgbaValue::try_from_hex_color("#ff000");
            assert!(value.is_err());
        }
    }

    #[test_case("#ff8000", "#ffff8000")]
    #[test_case("#FF8000", "#ffff8000")]
    #[test_case("#80ff8000", "#80ff8000")]
    #[test_case("#00000000", "#00000000")]
    fn test_to_hex_normalizes(input: &str, expected: &str) {
        let value = RgbaValue::try_from_hex_color(input).unwrap();
        let hex = value.to_hex();
        assert_eq2!(hex.as_str(), expected);
        assert_eq2!(RgbaValue::try_from_hex_color(&hex).unwrap(), value);
    }

    #[test]
    fn test_hex_reparse_over_all_bytes() {
        for byte in 0..=u8::MAX {
            let value = RgbaValue::from_u8_with_alpha(byte, byte ^ 0x5a, !byte, byte / 2);
            assert_eq2!(RgbaValue::try_from_hex_color(&value.to_hex()), Ok(value));
            assert_eq2!(RgbaValue::try_from_argb_str(&value.to_argb_string()), Ok(value));
        }
    }

    #[test]
    fn test_argb_string() {
        assert_eq2!(RgbaValue::from_u8(255, 0, 0).to_argb_string(), "FFFF0000");
        assert_eq2!(
            RgbaValue::from_u8_with_alpha(0xcc, 0xcc, 0, 0x80).to_argb_string(),
            "80CCCC00"
        );
    }

    #[test]
    fn test_from_str_and_display() {
        let value: RgbaValue = "#0a0b0c".parse().unwrap();
        assert_eq2!(value.to_string(), "#ff0a0b0c");
        assert!("0a0b0c".parse::<RgbaValue>().is_err());
        assert_eq2!(RgbaValue::try_from("#0a0b0c"), Ok(value));
    }

    #[test]
    #[should_panic(expected = "Invalid hex color format")]
    fn test_from_hex_panics() { let _ = RgbaValue::from_hex("#gggggg"); }

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq2!(RgbaValue::default().to_hex(), "#ff000000");
    }
}
