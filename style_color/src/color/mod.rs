// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types used by cell styles.
//!
//! This module provides:
//! - **Payload types**: [`RgbaValue`] (explicit color), [`IndexedColor`] (workbook
//!   palette index) and [`ThemeColor`] (theme palette index)
//! - **Wrapper type**: [`Color`], the tagged union over the three payloads plus tint and
//!   auto flag
//! - **Named colors**: [`NamedColor`] and the [`style_color!`] macro
//! - **Hashing**: [`hash_combine`], used by [`Color::hash_value`]
//! - **Errors**: [`HexColorFormatError`] and [`InvalidAttributeError`]
//!
//! [`style_color!`]: crate::style_color

// Attach.
mod color_error;
mod color_hash;
mod color_type;
mod color_variant;
mod hex_color_parser;
mod indexed_color;
mod named_colors;
mod rgba_value;
mod theme_color;

// Re-export.
pub use color_error::*;
pub use color_hash::*;
pub use color_type::*;
pub use color_variant::*;
pub use hex_color_parser::*;
pub use indexed_color::*;
pub use named_colors::*;
pub use rgba_value::*;
pub use theme_color::*;
