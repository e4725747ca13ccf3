// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbaValue`].
//!
//! Accepted forms are `#rrggbb` and `#aarrggbb` (alpha first, case insensitive). When
//! the alpha pair is missing the color is fully opaque. Style sheets store the same
//! digits without the leading `#` (eg: `FFFF0000`), which [`try_parse_argb_str`]
//! accepts.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res}};

use crate::{HexColorFormatError, RgbaValue, decl_macros::DEBUG_STYLE_COLOR};

/// Parse function that generates an [`RgbaValue`] from a `#[aa]rrggbb` string. The whole
/// input must be consumed, so the remainder of a successful parse is always empty.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not a valid hex color. Use
/// [`try_parse_hex_color`] to get a [`HexColorFormatError`] that says why.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbaValue> {
    let (input, _) = tag("#").parse(input)?;
    parse_hex_digits(input)
}

/// Same as [`parse_hex_color`] minus the leading `#`.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not 6 or 8 hex digits.
pub fn parse_hex_digits(input: &str) -> IResult<&str, RgbaValue> {
    alt((
        all_consuming((
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
        ))
        .map(|(alpha, red, green, blue)| {
            RgbaValue::from_u8_with_alpha(red, green, blue, alpha)
        }),
        all_consuming((
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
        ))
        .map(|(red, green, blue)| RgbaValue::from_u8(red, green, blue)),
    ))
    .parse(input)
}

/// Parses `#rrggbb` or `#aarrggbb`.
///
/// # Errors
///
/// Returns [`HexColorFormatError`] when the `#` is missing, when the number of digits is
/// neither 6 nor 8, or when a digit is not hex.
pub fn try_parse_hex_color(input: &str) -> Result<RgbaValue, HexColorFormatError> {
    let result = match input.strip_prefix('#') {
        None => Err(HexColorFormatError::MissingHashPrefix {
            input: input.to_string(),
        }),
        Some(digits) => match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(helper_fns::classify_rejected(input, digits)),
        },
    };
    helper_fns::log_rejected(&result);
    result
}

/// Parses the style sheet form: `rrggbb` or `aarrggbb` without the leading `#`.
///
/// # Errors
///
/// Returns [`HexColorFormatError`] when the number of digits is neither 6 nor 8, or when
/// a digit is not hex.
pub fn try_parse_argb_str(input: &str) -> Result<RgbaValue, HexColorFormatError> {
    let result = match parse_hex_digits(input) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(helper_fns::classify_rejected(input, input)),
    };
    helper_fns::log_rejected(&result);
    result
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{DEBUG_STYLE_COLOR, HexColorFormatError, IResult, Parser, RgbaValue,
                map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }

    /// Only called once the parser rejected `digits`, so if every character is a hex
    /// digit the count must be wrong.
    pub fn classify_rejected(input: &str, digits: &str) -> HexColorFormatError {
        if digits.chars().all(match_is_hex_digit) {
            HexColorFormatError::InvalidLength {
                input: input.to_string(),
                digits: digits.chars().count(),
            }
        } else {
            HexColorFormatError::InvalidHexDigit {
                input: input.to_string(),
            }
        }
    }

    pub fn log_rejected(result: &Result<RgbaValue, HexColorFormatError>) {
        if let Err(error) = result {
            DEBUG_STYLE_COLOR.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🎨 Rejected hex color",
                    error = %error,
                );
            });
        }
    }
}
