// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a
//! [`RgbColor`] struct. The hex color string can be in the following formats:
//! `#RRGGBB` or `RRGGBB` (upper or lower case), eg: `#FF0000` or `ff0000` for
//! red. The entire input must be consumed; trailing characters are a parse
//! error.

use std::num::ParseIntError;

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res, opt}};

use crate::RgbColor;

/// Parse function that generates an [`RgbColor`] struct from a valid hex color
/// string.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not exactly 6 hex digits after the
/// optional leading `#`.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (input, _) = opt(tag("#")).parse(input)?;
    let (input, (red, green, blue)) = all_consuming((
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    ))
    .parse(input)?;
    Ok((input, RgbColor { red, green, blue }))
}

/// Helper functions to match and parse hex digits. These are not [Parser]
/// implementations.
mod helper_fns {
    use super::*;

    /// This function is used by [`map_res`] and it returns a [Result], not
    /// [IResult].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns
    /// `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_valid_color() {
        let result = parse_hex_color("#2F14DF");

        let Ok((remainder, color)) = result else {
            panic!();
        };
        assert_eq!(remainder, "");
        assert_eq!(color, RgbColor::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_valid_color_no_hashtag() {
        let result = parse_hex_color("2f14df");

        let Ok((_, color)) = result else {
            panic!();
        };
        assert_eq!(color, RgbColor::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_invalid_color() {
        let result = parse_hex_color("🔅#2F14DF");
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_trailing_input() {
        let result = parse_hex_color("#2F14DF🔅");
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_short_input() {
        let result = parse_hex_color("#ff000");
        assert!(result.is_err());
    }
}
