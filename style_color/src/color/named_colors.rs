// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::{Color, ColorSpec, RgbaValue};

/// Creates a [`Color`] instance using various convenient syntaxes.
///
/// # Usage
///
/// ```rust
/// use style_color::style_color;
///
/// // Named colors.
/// let red = style_color!(red);
/// let dark_yellow = style_color!(darkyellow);
///
/// // RGB values, with an optional alpha.
/// let custom = style_color!(255, 128, 0);
/// let translucent = style_color!(255, 128, 0, 128);
///
/// // Palette and theme references.
/// let indexed = style_color!(indexed 64);
/// let theme = style_color!(theme 1);
///
/// // Hex colors (note: will panic on invalid format).
/// let hex = style_color!(hex "#ff8000");
/// ```
///
/// # Panics
///
/// The `hex` variant will panic if the provided hex color string is not in a valid
/// format. Valid formats are `#rrggbb` and `#aarrggbb`. Examples of invalid formats that
/// will panic:
/// - `#ff000` (5 digits instead of 6)
/// - `"gggggg"` (missing # prefix)
/// - `#zzzzzz` (invalid hex characters)
///
/// For fallible hex color parsing, use [`RgbaValue::try_from_hex_color`] instead.
///
/// [`Color`]: crate::Color
/// [`RgbaValue::try_from_hex_color`]: crate::RgbaValue::try_from_hex_color
#[macro_export]
macro_rules! style_color {
    (black) => {
        $crate::Color::black()
    };

    (white) => {
        $crate::Color::white()
    };

    (red) => {
        $crate::Color::red()
    };

    (darkred) => {
        $crate::Color::darkred()
    };

    (blue) => {
        $crate::Color::blue()
    };

    (darkblue) => {
        $crate::Color::darkblue()
    };

    (green) => {
        $crate::Color::green()
    };

    (darkgreen) => {
        $crate::Color::darkgreen()
    };

    (yellow) => {
        $crate::Color::yellow()
    };

    (darkyellow) => {
        $crate::Color::darkyellow()
    };

    (
        hex $arg_hex : expr
    ) => {
        $crate::Color::from($crate::RgbaValue::from_hex($arg_hex))
    };

    (
        indexed $arg_index : expr
    ) => {
        $crate::Color::from($crate::IndexedColor::new($arg_index))
    };

    (
        theme $arg_index : expr
    ) => {
        $crate::Color::from($crate::ThemeColor::new($arg_index))
    };

    (
        $arg_r : expr,
        $arg_g : expr,
        $arg_b : expr,
        $arg_a : expr
        $(,)? /* optional trailing comma */
    ) => {
        $crate::Color::from($crate::RgbaValue::from_u8_with_alpha(
            $arg_r, $arg_g, $arg_b, $arg_a,
        ))
    };

    (
        $arg_r : expr,
        $arg_g : expr,
        $arg_b : expr
        $(,)? /* optional trailing comma */
    ) => {
        $crate::Color::from($crate::RgbaValue::from_u8($arg_r, $arg_g, $arg_b))
    };
}

/// The named colors. Each one is an opaque rgb [`Color`].
#[derive(Debug, Display, EnumCount, EnumIter, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum NamedColor {
    Black,
    White,
    Red,
    DarkRed,
    Blue,
    DarkBlue,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
}

impl NamedColor {
    #[must_use]
    pub const fn rgba_value(self) -> RgbaValue {
        match self {
            NamedColor::Black => RgbaValue::from_u8(0x00, 0x00, 0x00),
            NamedColor::White => RgbaValue::from_u8(0xff, 0xff, 0xff),
            NamedColor::Red => RgbaValue::from_u8(0xff, 0x00, 0x00),
            NamedColor::DarkRed => RgbaValue::from_u8(0x8b, 0x00, 0x00),
            NamedColor::Blue => RgbaValue::from_u8(0x00, 0x00, 0xff),
            NamedColor::DarkBlue => RgbaValue::from_u8(0x00, 0x00, 0x8b),
            NamedColor::Green => RgbaValue::from_u8(0x00, 0xff, 0x00),
            NamedColor::DarkGreen => RgbaValue::from_u8(0x00, 0x8b, 0x00),
            NamedColor::Yellow => RgbaValue::from_u8(0xff, 0xff, 0x00),
            NamedColor::DarkYellow => RgbaValue::from_u8(0xcc, 0xcc, 0x00),
        }
    }

    /// A fresh value on every call.
    #[must_use]
    pub const fn color(self) -> Color { Color::new(ColorSpec::Rgb(self.rgba_value())) }
}

impl From<NamedColor> for Color {
    fn from(named_color: NamedColor) -> Self { named_color.color() }
}

/// Named constant factories.
impl Color {
    /// `#ff000000`
    #[must_use]
    pub const fn black() -> Self { NamedColor::Black.color() }

    /// `#ffffffff`
    #[must_use]
    pub const fn white() -> Self { NamedColor::White.color() }

    /// `#ffff0000`
    #[must_use]
    pub const fn red() -> Self { NamedColor::Red.color() }

    /// `#ff8b0000`
    #[must_use]
    pub const fn darkred() -> Self { NamedColor::DarkRed.color() }

    /// `#ff0000ff`
    #[must_use]
    pub const fn blue() -> Self { NamedColor::Blue.color() }

    /// `#ff00008b`
    #[must_use]
    pub const fn darkblue() -> Self { NamedColor::DarkBlue.color() }

    /// `#ff00ff00`
    #[must_use]
    pub const fn green() -> Self { NamedColor::Green.color() }

    /// `#ff008b00`
    #[must_use]
    pub const fn darkgreen() -> Self { NamedColor::DarkGreen.color() }

    /// `#ffffff00`
    #[must_use]
    pub const fn yellow() -> Self { NamedColor::Yellow.color() }

    /// `#ffcccc00`
    #[must_use]
    pub const fn darkyellow() -> Self { NamedColor::DarkYellow.color() }
}
