// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `style_color`
//!
//! The color value attached to spreadsheet styling attributes (fill, font, border).
//!
//! A [`Color`] holds exactly one of three payloads:
//! - [`IndexedColor`]: an index into the workbook level palette.
//! - [`ThemeColor`]: an index into the theme palette.
//! - [`RgbaValue`]: an explicit red, green, blue, alpha value.
//!
//! On top of the payload every color carries an optional tint (a lighten / darken factor
//! that the consumer applies when it resolves the color) and an auto flag (let the
//! rendering environment pick the color).
//!
//! Resolving an indexed or theme color into a displayed RGB value needs the palette and
//! theme tables of a workbook. Those live outside of this crate.
//!
//! # Hex strings
//!
//! The only textual contract is the hex form of an [`RgbaValue`]:
//! - `#rrggbb` or `#aarrggbb` is accepted (case insensitive). When alpha is omitted it
//!   defaults to `ff` (fully opaque).
//! - [`RgbaValue::to_hex`] always emits the 9 character `#aarrggbb` form.
//!
//! ```
//! use style_color::{Color, ColorType, RgbaValue};
//!
//! let value = RgbaValue::try_from_hex_color("#FF8000").unwrap();
//! assert_eq!(value.to_hex(), "#ffff8000");
//!
//! let mut color = Color::from(value);
//! assert_eq!(color.color_type(), ColorType::Rgb);
//! assert!(color.indexed().is_err());
//!
//! color.set_tint(-0.25);
//! assert_eq!(color.tint().unwrap(), -0.25);
//! ```
//!
//! # Errors
//!
//! There are two error kinds and they are never merged:
//! - [`HexColorFormatError`]: the caller handed in a malformed hex string. Recoverable.
//! - [`InvalidAttributeError`]: a payload accessor was called on the wrong variant, or
//!   the tint was read when none is set. This is a contract violation. Check
//!   [`Color::color_type`] or [`Color::has_tint`] first.
//!
//! [`Color`]: crate::Color
//! [`IndexedColor`]: crate::IndexedColor
//! [`ThemeColor`]: crate::ThemeColor
//! [`RgbaValue`]: crate::RgbaValue
//! [`RgbaValue::to_hex`]: crate::RgbaValue::to_hex
//! [`HexColorFormatError`]: crate::HexColorFormatError
//! [`InvalidAttributeError`]: crate::InvalidAttributeError
//! [`Color::color_type`]: crate::Color::color_type
//! [`Color::has_tint`]: crate::Color::has_tint

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod color;
pub mod decl_macros;

// Re-export.
pub use color::*;
