// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced by the color types.
//!
//! | Error                      | Cause                                          | Recoverable? |
//! | :------------------------- | :--------------------------------------------- | :----------- |
//! | [`HexColorFormatError`]    | Malformed hex string handed in by the caller    | Yes          |
//! | [`InvalidAttributeError`]  | Accessor called on the wrong variant, or no tint | No (bug)     |
//!
//! Both implement [`miette::Diagnostic`], so they can be bubbled up through a
//! [`miette::Result`]. [`StyleColorError`] wraps both when a single error type is more
//! convenient, without losing which kind it was.

use crate::ColorType;

/// Returned by the hex parsers when the input does not match `#[aa]rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum HexColorFormatError {
    #[error("hex color '{input}' does not start with '#'")]
    #[diagnostic(
        code(style_color::hex::missing_hash_prefix),
        help("Write the color as #rrggbb or #aarrggbb")
    )]
    MissingHashPrefix { input: String },

    #[error("hex color '{input}' has {digits} digits, expected 6 (rrggbb) or 8 (aarrggbb)")]
    #[diagnostic(code(style_color::hex::invalid_length))]
    InvalidLength { input: String, digits: usize },

    #[error("hex color '{input}' contains a character that is not a hex digit")]
    #[diagnostic(
        code(style_color::hex::invalid_digit),
        help("Only 0-9, a-f and A-F are allowed after the '#'")
    )]
    InvalidHexDigit { input: String },
}

/// Returned when a [`Color`] accessor is used against its current state.
///
/// This is a contract violation. Check [`Color::color_type`] or [`Color::has_tint`]
/// before calling the accessor instead of handling this error routinely.
///
/// [`Color`]: crate::Color
/// [`Color::color_type`]: crate::Color::color_type
/// [`Color::has_tint`]: crate::Color::has_tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum InvalidAttributeError {
    #[error("color is not of type {expected}, it is of type {actual}")]
    #[diagnostic(
        code(style_color::color::type_mismatch),
        help("Check `Color::color_type()` before calling a payload accessor")
    )]
    TypeMismatch {
        expected: ColorType,
        actual: ColorType,
    },

    #[error("color has no tint")]
    #[diagnostic(
        code(style_color::color::tint_not_set),
        help("Check `Color::has_tint()` before calling `Color::tint()`")
    )]
    TintNotSet,
}

/// Either of the two error kinds, for callers that want a single `?` target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum StyleColorError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] HexColorFormatError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidAttribute(#[from] InvalidAttributeError),
}
