// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::hash::{Hash, Hasher};

use crate::{ColorType, IndexedColor, InvalidAttributeError, RgbaValue, ThemeColor,
            decl_macros::DEBUG_STYLE_COLOR, hash_combine};

/// The payload of a [`Color`]. Exactly one is live at a time, and switching to another
/// one means building a new [`Color`].
///
/// Match on this (via [`Color::spec`]) to handle every variant without going through
/// the fallible accessors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ColorSpec {
    /// Index into the workbook palette (`indexedColors`).
    Indexed(IndexedColor),
    /// Index into the theme palette.
    Theme(ThemeColor),
    /// Explicit value.
    Rgb(RgbaValue),
}

impl ColorSpec {
    #[must_use]
    pub const fn color_type(&self) -> ColorType {
        match self {
            ColorSpec::Indexed(_) => ColorType::Indexed,
            ColorSpec::Theme(_) => ColorType::Theme,
            ColorSpec::Rgb(_) => ColorType::Rgb,
        }
    }
}

/// A color used by a style attribute (fill, font, border, ...).
///
/// A [`Color`] holds one [`ColorSpec`] payload, an optional tint and an auto flag.
/// - The tint is a lighten / darken factor. It is only stored here, the code that
///   resolves the color to a displayed value decides what it does.
/// - The auto flag tells the rendering environment to pick the color itself. It is
///   independent of the payload.
///
/// Two colors are equal when their payloads (variant included), auto flags and tints
/// (presence included) are equal. So `theme(1)` is never equal to `indexed(1)`. Tints
/// are compared by bit pattern after folding `-0.0` into `0.0`, so the two zeros are
/// equal and a `NaN` tint is equal to itself. That keeps [`Eq`] and [`Hash`] lawful.
///
/// [`Color::default()`] is palette index 0 (`indexed(0)`), no tint, not auto. Style
/// sheet readers rely on that value for an "unset" color.
///
/// Please use the macro [`crate::style_color`!] for the named colors and for quick
/// construction.
#[derive(Clone, Copy)]
pub struct Color {
    spec: ColorSpec,
    tint: Option<f64>,
    auto: bool,
}

impl Default for Color {
    fn default() -> Self { Self::new(ColorSpec::Indexed(IndexedColor::new(0))) }
}

impl Color {
    /// No tint, not auto.
    #[must_use]
    pub const fn new(spec: ColorSpec) -> Self {
        Self {
            spec,
            tint: None,
            auto: false,
        }
    }

    #[must_use]
    pub const fn color_type(&self) -> ColorType { self.spec.color_type() }

    #[must_use]
    pub const fn spec(&self) -> &ColorSpec { &self.spec }

    /// # Errors
    ///
    /// Returns [`InvalidAttributeError::TypeMismatch`] if this is not an rgb color.
    pub fn rgb(&self) -> Result<&RgbaValue, InvalidAttributeError> {
        let actual = self.color_type();
        match &self.spec {
            ColorSpec::Rgb(it) => Ok(it),
            _ => Err(type_mismatch(ColorType::Rgb, actual)),
        }
    }

    /// # Errors
    ///
    /// Returns [`InvalidAttributeError::TypeMismatch`] if this is not an rgb color.
    pub fn rgb_mut(&mut self) -> Result<&mut RgbaValue, InvalidAttributeError> {
        let actual = self.color_type();
        match &mut self.spec {
            ColorSpec::Rgb(it) => Ok(it),
            _ => Err(type_mismatch(ColorType::Rgb, actual)),
        }
    }

    /// # Errors
    ///
    /// Returns [`InvalidAttributeError::TypeMismatch`] if this is not an indexed color.
    pub fn indexed(&self) -> Result<&IndexedColor, InvalidAttributeError> {
        let actual = self.color_type();
        match &self.spec {
            ColorSpec::Indexed(it) => Ok(it),
            _ => Err(type_mismatch(ColorType::Indexed, actual)),
        }
    }

    /// # Errors
    ///
    /// Returns [`InvalidAttributeError::TypeMismatch`] if this is not an indexed color.
    pub fn indexed_mut(&mut self) -> Result<&mut IndexedColor, InvalidAttributeError> {
        let actual = self.color_type();
        match &mut self.spec {
            ColorSpec::Indexed(it) => Ok(it),
            _ => Err(type_mismatch(ColorType::Indexed, actual)),
        }
    }

    /// # Errors
    ///
    /// Returns [`InvalidAttributeError::TypeMismatch`] if this is not a theme color.
    pub fn theme(&self) -> Result<&ThemeColor, InvalidAttributeError> {
        let actual = self.color_type();
        match &self.spec {
            ColorSpec::Theme(it) => Ok(it),
            _ => Err(type_mismatch(ColorType::Theme, actual)),
        }
    }

    /// # Errors
    ///
    /// Returns [`InvalidAttributeError::TypeMismatch`] if this is not a theme color.
    pub fn theme_mut(&mut self) -> Result<&mut ThemeColor, InvalidAttributeError> {
        let actual = self.color_type();
        match &mut self.spec {
            ColorSpec::Theme(it) => Ok(it),
            _ => Err(type_mismatch(ColorType::Theme, actual)),
        }
    }

    #[must_use]
    pub const fn has_tint(&self) -> bool { self.tint.is_some() }

    /// # Errors
    ///
    /// Returns [`InvalidAttributeError::TintNotSet`] if no tint was set. Check
    /// [`Color::has_tint`] first.
    pub fn tint(&self) -> Result<f64, InvalidAttributeError> {
        self.tint.ok_or_else(|| {
            DEBUG_STYLE_COLOR.then(|| {
                tracing::warn!(message = "🎨 Tint read from a color without tint");
            });
            InvalidAttributeError::TintNotSet
        })
    }

    /// Sets or overwrites the tint. The value is stored as is.
    pub fn set_tint(&mut self, tint: f64) { self.tint = Some(tint); }

    pub fn clear_tint(&mut self) { self.tint = None; }

    #[must_use]
    pub fn with_tint(mut self, tint: f64) -> Self {
        self.set_tint(tint);
        self
    }

    #[must_use]
    pub const fn is_auto(&self) -> bool { self.auto }

    pub fn set_auto(&mut self, auto: bool) { self.auto = auto; }

    #[must_use]
    pub fn with_auto(mut self, auto: bool) -> Self {
        self.set_auto(auto);
        self
    }

    /// Stable hash of this color. The fields are folded with [`hash_combine`] in this
    /// order:
    /// 1. the variant tag ([`ColorType::tag`]),
    /// 2. the auto flag,
    /// 3. the tint bits, only when a tint is set,
    /// 4. the payload: the index, or red, green, blue, alpha.
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        let mut seed = 0;
        hash_combine(&mut seed, &self.color_type().tag());
        hash_combine(&mut seed, &self.auto);
        if let Some(tint) = self.tint {
            hash_combine(&mut seed, &tint_bits(tint));
        }
        match self.spec {
            ColorSpec::Indexed(indexed) => hash_combine(&mut seed, &indexed.index()),
            ColorSpec::Theme(theme) => hash_combine(&mut seed, &theme.index()),
            ColorSpec::Rgb(rgba) => {
                for component in rgba.rgba() {
                    hash_combine(&mut seed, &component);
                }
            }
        }
        seed
    }
}

/// Key used to compare and hash a tint. Both zeros map to the bits of `0.0`.
fn tint_bits(tint: f64) -> u64 {
    if tint == 0.0 { 0.0_f64.to_bits() } else { tint.to_bits() }
}

fn type_mismatch(expected: ColorType, actual: ColorType) -> InvalidAttributeError {
    DEBUG_STYLE_COLOR.then(|| {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "🎨 Color accessor called on the wrong variant",
            expected = %expected,
            actual = %actual,
        );
    });
    InvalidAttributeError::TypeMismatch { expected, actual }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.auto == other.auto
            && self.tint.map(tint_bits) == other.tint.map(tint_bits)
            && self.spec == other.spec
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) { state.write_u64(self.hash_value()); }
}

mod convenience_conversions {
    use super::{Color, ColorSpec, IndexedColor, RgbaValue, ThemeColor};

    impl From<ColorSpec> for Color {
        fn from(spec: ColorSpec) -> Self { Color::new(spec) }
    }

    impl From<RgbaValue> for Color {
        fn from(rgba_value: RgbaValue) -> Self { Color::new(ColorSpec::Rgb(rgba_value)) }
    }

    impl From<IndexedColor> for Color {
        fn from(indexed: IndexedColor) -> Self { Color::new(ColorSpec::Indexed(indexed)) }
    }

    impl From<ThemeColor> for Color {
        fn from(theme: ThemeColor) -> Self { Color::new(ColorSpec::Theme(theme)) }
    }
}

mod impl_debug {
    use super::{Color, ColorSpec};
    use std::fmt::{Debug, Formatter, Result};

    impl Debug for Color {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self.spec {
                ColorSpec::Rgb(rgba) => write!(f, "rgb({})", rgba.to_hex())?,
                ColorSpec::Indexed(indexed) => write!(f, "indexed({})", indexed.index())?,
                ColorSpec::Theme(theme) => write!(f, "theme({})", theme.index())?,
            }
            if let Some(tint) = self.tint {
                write!(f, " tint={tint}")?;
            }
            if self.auto {
                write!(f, " auto")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn test_default_is_indexed_zero() {
        let color = Color::default();
        assert_eq2!(color.color_type(), ColorType::Indexed);
        assert_eq2!(color.indexed().unwrap().index(), 0);
        assert!(!color.has_tint());
        assert!(!color.is_auto());
    }

    #[test]
    fn test_non_rgb_colors() {
        let mut indexed = Color::from(IndexedColor::new(1));
        assert!(!indexed.is_auto());
        assert_eq2!(indexed.indexed().unwrap().index(), 1);
        indexed.indexed_mut().unwrap().set_index(2);
        assert_eq2!(indexed.indexed().unwrap().index(), 2);
        assert!(indexed.theme().is_err());
        assert!(indexed.rgb().is_err());

        let mut theme = Color::from(ThemeColor::new(3));
        assert!(!theme.is_auto());
        assert_eq2!(theme.theme().unwrap().index(), 3);
        theme.theme_mut().unwrap().set_index(4);
        assert_eq2!(theme.theme().unwrap().index(), 4);
        assert!(theme.indexed().is_err());
        assert!(theme.rgb().is_err());
    }

    #[test_case(Color::from(IndexedColor::new(1)), ColorType::Indexed)]
    #[test_case(Color::from(ThemeColor::new(1)), ColorType::Theme)]
    #[test_case(Color::from(RgbaValue::from_u8(1, 1, 1)), ColorType::Rgb)]
    fn test_accessors_check_variant(color: Color, actual: ColorType) {
        let mut color = color;
        let expect_mismatch = |expected: ColorType| {
            Err::<(), _>(InvalidAttributeError::TypeMismatch { expected, actual })
        };

        let rgb = color.rgb().map(|_| ());
        let indexed = color.indexed().map(|_| ());
        let theme = color.theme().map(|_| ());
        for (expected, result) in [
            (ColorType::Rgb, rgb),
            (ColorType::Indexed, indexed),
            (ColorType::Theme, theme),
        ] {
            if expected == actual {
                assert!(result.is_ok());
            } else {
                assert_eq2!(result, expect_mismatch(expected));
            }
        }

        assert_eq2!(color.rgb_mut().is_ok(), actual == ColorType::Rgb);
        assert_eq2!(color.indexed_mut().is_ok(), actual == ColorType::Indexed);
        assert_eq2!(color.theme_mut().is_ok(), actual == ColorType::Theme);
    }

    #[test]
    fn test_rgb_mut_replaces_value() {
        let mut color = Color::from(RgbaValue::from_u8(0, 0, 0));
        *color.rgb_mut().unwrap() = RgbaValue::from_u8_with_alpha(1, 2, 3, 4);
        assert_eq2!(color.rgb().unwrap().rgba(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_tint() {
        let mut color = Color::default();
        assert!(!color.has_tint());
        assert_eq2!(color.tint(), Err(InvalidAttributeError::TintNotSet));

        color.set_tint(0.5);
        assert!(color.has_tint());
        assert_eq2!(color.tint(), Ok(0.5));

        color.set_tint(-0.25);
        assert_eq2!(color.tint(), Ok(-0.25));

        color.clear_tint();
        assert!(!color.has_tint());
    }

    #[test]
    fn test_auto_is_independent_of_variant() {
        let color = Color::from(ThemeColor::new(1)).with_auto(true);
        assert!(color.is_auto());
        assert_eq2!(color.color_type(), ColorType::Theme);
        assert_ne!(color, Color::from(ThemeColor::new(1)));
    }

    #[test]
    fn test_variant_dominates_equality() {
        let theme = Color::from(ThemeColor::new(1));
        let indexed = Color::from(IndexedColor::new(1));
        assert_ne!(theme, indexed);
        assert_ne!(theme.hash_value(), indexed.hash_value());
    }

    #[test]
    fn test_tint_presence_matters() {
        let plain = Color::from(IndexedColor::new(8));
        let tinted = plain.with_tint(0.0);
        assert_ne!(plain, tinted);
        assert_eq2!(tinted, Color::from(IndexedColor::new(8)).with_tint(0.0));
    }

    #[test]
    fn test_nan_tint_is_reflexive() {
        let color = Color::default().with_tint(f64::NAN);
        assert_eq2!(color, color);
        assert_eq2!(color.hash_value(), color.hash_value());
    }

    #[test_case(0.0, -0.0 ; "positive then negative zero")]
    #[test_case(-0.0, 0.0 ; "negative then positive zero")]
    #[test_case(-0.0, -0.0 ; "both negative zero")]
    fn test_signed_zero_tints_are_equal(lhs: f64, rhs: f64) {
        let lhs = Color::from(ThemeColor::new(2)).with_tint(lhs);
        let rhs = Color::from(ThemeColor::new(2)).with_tint(rhs);
        assert_eq2!(lhs, rhs);
        assert_eq2!(lhs.hash_value(), rhs.hash_value());
        let set: HashSet<Color> = [lhs, rhs].into_iter().collect();
        assert_eq2!(set.len(), 1);
    }

    #[test]
    fn test_equal_colors_hash_equal() {
        let pairs = [
            (
                Color::from(RgbaValue::from_u8(255, 0, 0)),
                Color::from(RgbaValue::from_hex("#ff0000")),
            ),
            (
                Color::from(IndexedColor::new(64)).with_auto(true),
                Color::from(IndexedColor::new(64)).with_auto(true),
            ),
            (
                Color::from(ThemeColor::new(4)).with_tint(0.399_975_585_192_419_2),
                Color::from(ThemeColor::new(4)).with_tint(0.399_975_585_192_419_2),
            ),
        ];
        for (lhs, rhs) in pairs {
            assert_eq2!(lhs, rhs);
            assert_eq2!(lhs.hash_value(), rhs.hash_value());
        }
    }

    #[test]
    fn test_alpha_changes_hash() {
        let opaque = Color::from(RgbaValue::from_u8_with_alpha(10, 20, 30, 255));
        let translucent = Color::from(RgbaValue::from_u8_with_alpha(10, 20, 30, 254));
        assert_ne!(opaque, translucent);
        assert_ne!(opaque.hash_value(), translucent.hash_value());
    }

    #[test]
    fn test_usable_in_hash_set() {
        let mut set = HashSet::new();
        set.insert(Color::from(RgbaValue::from_u8(255, 0, 0)));
        set.insert(Color::from(RgbaValue::from_u8(0, 0, 255)));
        set.insert(Color::from(RgbaValue::from_u8(255, 0, 0)));
        assert_eq2!(set.len(), 2);
        assert!(set.contains(&Color::from(RgbaValue::from_u8(0, 0, 255))));
        assert!(!set.contains(&Color::from(RgbaValue::from_u8(0, 255, 0))));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Color::from(IndexedColor::new(5));
        let mut copy = original;
        copy.set_tint(0.1);
        copy.indexed_mut().unwrap().set_index(6);
        assert!(!original.has_tint());
        assert_eq2!(original.indexed().unwrap().index(), 5);
    }

    #[test]
    fn test_debug() {
        assert_eq2!(
            format!("{:?}", Color::from(RgbaValue::from_u8(255, 0, 0))),
            "rgb(#ffff0000)"
        );
        assert_eq2!(
            format!("{:?}", Color::from(ThemeColor::new(1)).with_tint(0.5).with_auto(true)),
            "theme(1) tint=0.5 auto"
        );
        assert_eq2!(format!("{:?}", Color::default()), "indexed(0)");
    }
}
