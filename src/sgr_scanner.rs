// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scanning of already-formatted strings: recover the 24-bit colors embedded
//! in a string, and strip SGR formatting from one.
//!
//! The scanners never fail on arbitrary input. Any substring that does not
//! match the expected escape pattern is treated as literal text: [`scan_colors`]
//! and [`scan_segments`] skip it, [`strip_formatting`] passes it through
//! unchanged, in order.

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::{tag, take_while, take_while_m_n},
          combinator::{all_consuming, map_res, recognize, value},
          multi::many1};

use crate::{CmykColor,
            HslColor,
            HsvColor,
            Layer,
            RgbColor,
            color::sizing::HexString,
            convert::{DEFAULT_DECIMAL_PLACES,
                      rgb_to_cmyk,
                      rgb_to_hex,
                      rgb_to_hsl,
                      rgb_to_hsv}};

/// Which representation [`scan_colors`] / [`scan_segments`] report each found
/// color in. Non-RGB targets are converted with
/// [`DEFAULT_DECIMAL_PLACES`] rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Rgb,
    /// RGB with each channel as a unit float (divided by 255).
    RgbUnit,
    Hex,
    Hsl,
    Hsv,
    Cmyk,
}

/// One color recovered from a formatted string, in the requested
/// representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScannedValue {
    Rgb(RgbColor),
    RgbUnit(f64, f64, f64),
    Hex(HexString),
    Hsl(HslColor),
    Hsv(HsvColor),
    Cmyk(CmykColor),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoundColor {
    pub value: ScannedValue,
    /// `38` codes report [`Layer::Foreground`], `48` codes
    /// [`Layer::Background`].
    pub layer: Layer,
}

/// A segment reported by [`scan_segments`]. Plain text between escape
/// sequences is never reported.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanSegment {
    Color(FoundColor),
    /// The reset sequence `ESC[0m`, reported as a sentinel, not a color.
    Reset,
}

/// Every 24-bit color escape in `text`, in left-to-right order of appearance.
/// Reset sequences and plain text are skipped.
#[must_use]
pub fn scan_colors(text: &str, target: ColorTarget) -> Vec<FoundColor> {
    scan_segments(text, target)
        .into_iter()
        .filter_map(|segment| match segment {
            ScanSegment::Color(found) => Some(found),
            ScanSegment::Reset => None,
        })
        .collect()
}

/// Like [`scan_colors`], but additionally reports every reset sequence as
/// [`ScanSegment::Reset`].
#[must_use]
pub fn scan_segments(text: &str, target: ColorTarget) -> Vec<ScanSegment> {
    let mut acc = vec![];
    let mut rest = text;

    while !rest.is_empty() {
        if let Ok((remainder, (layer, rgb))) = parser::parse_color_code(rest) {
            acc.push(ScanSegment::Color(FoundColor {
                value: convert_to_target(rgb, target),
                layer,
            }));
            rest = remainder;
            continue;
        }

        if let Ok((remainder, ())) = parser::parse_reset_code(rest) {
            acc.push(ScanSegment::Reset);
            rest = remainder;
            continue;
        }

        // Not a recognized escape at this position. Skip one char of literal
        // text (which includes unrecognized SGR codes like `ESC[1m`).
        match rest.chars().next() {
            Some(ch) => rest = &rest[ch.len_utf8()..],
            None => break,
        }
    }

    tracing::trace!(
        segment_count = acc.len(),
        input_len = text.len(),
        "scanned formatted string"
    );

    acc
}

/// Removes every substring matching `ESC[<digits/semicolons>m` (any SGR code,
/// not only color), leaving plain text untouched, order-preserving.
#[must_use]
pub fn strip_formatting(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        if let Ok((remainder, _)) = parser::parse_any_sgr_code(rest) {
            rest = remainder;
            continue;
        }
        match rest.chars().next() {
            Some(ch) => {
                acc.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
            None => break,
        }
    }

    acc
}

fn convert_to_target(rgb: RgbColor, target: ColorTarget) -> ScannedValue {
    match target {
        ColorTarget::Rgb => ScannedValue::Rgb(rgb),
        ColorTarget::RgbUnit => {
            let (red, green, blue) = rgb.to_unit();
            ScannedValue::RgbUnit(red, green, blue)
        }
        ColorTarget::Hex => ScannedValue::Hex(rgb_to_hex(rgb, false)),
        ColorTarget::Hsl => ScannedValue::Hsl(rgb_to_hsl(rgb, DEFAULT_DECIMAL_PLACES)),
        ColorTarget::Hsv => ScannedValue::Hsv(rgb_to_hsv(rgb, DEFAULT_DECIMAL_PLACES)),
        ColorTarget::Cmyk => {
            ScannedValue::Cmyk(rgb_to_cmyk(rgb, DEFAULT_DECIMAL_PLACES))
        }
    }
}

/// The nom parsers shared by the scanners and [`crate::FormatCode`]
/// validation.
pub(crate) mod parser {
    use super::*;
    use crate::ansi_escape_codes::sgr_code_impl::{CSI, SGR};

    /// Matches one 24-bit color escape: `ESC[(38|48);2;R;G;Bm` where R, G, B
    /// are decimal `u8` values with no leading zeros required.
    pub fn parse_color_code(input: &str) -> IResult<&str, (Layer, RgbColor)> {
        let (input, _) = tag(CSI).parse(input)?;
        let (input, layer) = alt((
            value(Layer::Foreground, tag("38;2;")),
            value(Layer::Background, tag("48;2;")),
        ))
        .parse(input)?;
        let (input, red) = parse_dec_u8(input)?;
        let (input, _) = tag(";").parse(input)?;
        let (input, green) = parse_dec_u8(input)?;
        let (input, _) = tag(";").parse(input)?;
        let (input, blue) = parse_dec_u8(input)?;
        let (input, _) = tag(SGR).parse(input)?;
        Ok((input, (layer, RgbColor { red, green, blue })))
    }

    /// Matches exactly the reset sequence `ESC[0m`.
    pub fn parse_reset_code(input: &str) -> IResult<&str, ()> {
        value((), (tag(CSI), tag("0"), tag(SGR))).parse(input)
    }

    /// Matches any SGR sequence: `ESC[` followed by digits/semicolons (possibly
    /// none) and a final `m`.
    pub fn parse_any_sgr_code(input: &str) -> IResult<&str, &str> {
        recognize((tag(CSI), take_while(is_sgr_param_char), tag(SGR))).parse(input)
    }

    /// `true` when the whole input is one or more SGR sequences and nothing
    /// else. This is what makes a string acceptable as a formatting code.
    pub fn is_format_code(input: &str) -> bool {
        all_consuming(many1(parse_any_sgr_code))
            .parse(input)
            .is_ok()
    }

    /// The whole input as exactly one 24-bit color escape, or nothing.
    pub fn parse_exact_color_code(input: &str) -> Option<(Layer, RgbColor)> {
        all_consuming(parse_color_code)
            .parse(input)
            .ok()
            .map(|(_, found)| found)
    }

    fn is_sgr_param_char(c: char) -> bool { c.is_ascii_digit() || c == ';' }

    fn parse_dec_u8(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(1, 3, |c: char| c.is_ascii_digit()),
            str::parse::<u8>,
        )
        .parse(input)
    }
}
