// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bidirectional conversions among RGB, hex, HSL, HSV, and CMYK.
//!
//! All functions here are pure and total over their (already validated) typed
//! inputs; the only fallible entry points are the `hex_to_*` functions, which
//! parse untrusted strings. The formulas are the standard colorimetric
//! max/min/delta and chroma/sextant algorithms.
//!
//! Two edge cases are handled explicitly rather than left to produce NaN:
//! - HSL saturation divides by `1 - |2L - 1|`, which is zero at pure black and
//!   pure white. Both extremes force `delta == 0`, so saturation is defined as
//!   0 there.
//! - CMYK divides by `1 - K`, which is zero at pure black. C/M/Y are defined
//!   as 0 there.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV>
//! - <https://www.rapidtables.com/convert/color/>

use std::fmt::Write as _;

use crate::{CmykColor,
            ColorizeError,
            ColorizeResult,
            HslColor,
            HsvColor,
            RgbColor,
            color::sizing::HexString,
            hex_color_parser::parse_hex_color};

/// Rounding applied to every output component of the `*_to_hsl`, `*_to_hsv`,
/// and `*_to_cmyk` conversions unless the caller passes its own
/// `decimal_places`.
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// Round `value` to `decimal_places` fractional digits. Applied to output
/// components only, never to intermediate math.
fn round_to(value: f64, decimal_places: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(decimal_places));
    (value * factor).round() / factor
}

/// Truecolor channel from a unit-interval component. The cast saturates, so
/// float epsilon slightly above 1.0 cannot wrap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_channel(value: f64) -> u8 { (value * 255.0).round() as u8 }

/// Shared hue computation for the RGB → HSL/HSV conversions. Returns degrees
/// in `[0, 360)`.
fn calc_hue(r_prime: f64, g_prime: f64, b_prime: f64, max: f64, delta: f64) -> f64 {
    let mut hue = if delta == 0.0 {
        0.0
    } else if max == r_prime {
        ((g_prime - b_prime) / delta).rem_euclid(6.0)
    } else if max == g_prime {
        ((b_prime - r_prime) / delta) + 2.0
    } else {
        ((r_prime - g_prime) / delta) + 4.0
    } * 60.0;

    if hue < 0.0 {
        hue += 360.0;
    }

    hue
}

/// Arranges the chroma and middle component into (R', G', B') order based on
/// which 60 degree sextant the hue falls in. The final arm is the catch-all
/// for `h_prime == 6.0` (a hue of exactly 360 degrees).
fn arrange_by_sextant(h_prime: f64, chroma: f64, middle: f64) -> (f64, f64, f64) {
    if (0.0..1.0).contains(&h_prime) {
        (chroma, middle, 0.0)
    } else if (1.0..2.0).contains(&h_prime) {
        (middle, chroma, 0.0)
    } else if (2.0..3.0).contains(&h_prime) {
        (0.0, chroma, middle)
    } else if (3.0..4.0).contains(&h_prime) {
        (0.0, middle, chroma)
    } else if (4.0..5.0).contains(&h_prime) {
        (middle, 0.0, chroma)
    } else {
        (chroma, 0.0, middle)
    }
}

// RGB to everything else.

/// Each channel truncated to 2 lowercase hex digits, zero-padded. The `#`
/// prefix is only emitted when `include_hashtag` is set.
#[must_use]
pub fn rgb_to_hex(arg_color: impl Into<RgbColor>, include_hashtag: bool) -> HexString {
    let RgbColor { red, green, blue } = arg_color.into();
    let mut acc = HexString::new();
    if include_hashtag {
        _ = write!(acc, "#{red:02x}{green:02x}{blue:02x}");
    } else {
        _ = write!(acc, "{red:02x}{green:02x}{blue:02x}");
    }
    acc
}

#[must_use]
pub fn rgb_to_hsl(arg_color: impl Into<RgbColor>, decimal_places: u8) -> HslColor {
    let (r_prime, g_prime, b_prime) = arg_color.into().to_unit();

    let max = r_prime.max(g_prime).max(b_prime);
    let min = r_prime.min(g_prime).min(b_prime);
    let delta = max - min;

    let lightness = (max + min) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };
    let hue = calc_hue(r_prime, g_prime, b_prime, max, delta);

    HslColor {
        hue: round_to(hue, decimal_places),
        saturation: round_to(saturation * 100.0, decimal_places),
        lightness: round_to(lightness * 100.0, decimal_places),
    }
}

#[must_use]
pub fn rgb_to_hsv(arg_color: impl Into<RgbColor>, decimal_places: u8) -> HsvColor {
    let (r_prime, g_prime, b_prime) = arg_color.into().to_unit();

    let max = r_prime.max(g_prime).max(b_prime);
    let min = r_prime.min(g_prime).min(b_prime);
    let delta = max - min;

    let value = max;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    let hue = calc_hue(r_prime, g_prime, b_prime, max, delta);

    HsvColor {
        hue: round_to(hue, decimal_places),
        saturation: round_to(saturation * 100.0, decimal_places),
        value: round_to(value * 100.0, decimal_places),
    }
}

#[must_use]
pub fn rgb_to_cmyk(arg_color: impl Into<RgbColor>, decimal_places: u8) -> CmykColor {
    let (r_prime, g_prime, b_prime) = arg_color.into().to_unit();

    let black = 1.0 - r_prime.max(g_prime).max(b_prime);
    // Pure black has undefined C/M/Y. Defined here as 0, not NaN.
    let (cyan, magenta, yellow) = if black == 1.0 {
        (0.0, 0.0, 0.0)
    } else {
        (
            (1.0 - r_prime - black) / (1.0 - black),
            (1.0 - g_prime - black) / (1.0 - black),
            (1.0 - b_prime - black) / (1.0 - black),
        )
    };

    CmykColor {
        cyan: round_to(cyan * 100.0, decimal_places),
        magenta: round_to(magenta * 100.0, decimal_places),
        yellow: round_to(yellow * 100.0, decimal_places),
        black: round_to(black * 100.0, decimal_places),
    }
}

// Hex to everything else.

/// Parse each 2-digit group as a base-16 integer. Accepts an optional leading
/// `#` and upper or lower case digits.
///
/// # Errors
///
/// Returns [`ColorizeError::InvalidHexColor`] if the input is not exactly 6
/// hex digits after the optional prefix.
pub fn hex_to_rgb(input: &str) -> ColorizeResult<RgbColor> {
    match parse_hex_color(input) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(ColorizeError::InvalidHexColor {
            input: input.to_string(),
        }),
    }
}

/// # Errors
///
/// Returns [`ColorizeError::InvalidHexColor`] if the input does not parse.
pub fn hex_to_hsl(input: &str, decimal_places: u8) -> ColorizeResult<HslColor> {
    Ok(rgb_to_hsl(hex_to_rgb(input)?, decimal_places))
}

/// # Errors
///
/// Returns [`ColorizeError::InvalidHexColor`] if the input does not parse.
pub fn hex_to_hsv(input: &str, decimal_places: u8) -> ColorizeResult<HsvColor> {
    Ok(rgb_to_hsv(hex_to_rgb(input)?, decimal_places))
}

/// # Errors
///
/// Returns [`ColorizeError::InvalidHexColor`] if the input does not parse.
pub fn hex_to_cmyk(input: &str, decimal_places: u8) -> ColorizeResult<CmykColor> {
    Ok(rgb_to_cmyk(hex_to_rgb(input)?, decimal_places))
}

// HSL to everything else.

#[must_use]
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h_prime = hsl.hue / 60.0;
    let s_prime = hsl.saturation / 100.0;
    let l_prime = hsl.lightness / 100.0;

    let chroma = s_prime * (1.0 - (2.0 * l_prime - 1.0).abs());
    let middle = chroma * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());
    let adjustment = l_prime - chroma / 2.0;

    let (r_prime, g_prime, b_prime) = arrange_by_sextant(h_prime, chroma, middle);

    RgbColor {
        red: unit_to_channel(r_prime + adjustment),
        green: unit_to_channel(g_prime + adjustment),
        blue: unit_to_channel(b_prime + adjustment),
    }
}

#[must_use]
pub fn hsl_to_hex(hsl: HslColor, include_hashtag: bool) -> HexString {
    rgb_to_hex(hsl_to_rgb(hsl), include_hashtag)
}

/// Direct HSL → HSV formula (no round trip through RGB).
#[must_use]
pub fn hsl_to_hsv(hsl: HslColor, decimal_places: u8) -> HsvColor {
    let s_prime = hsl.saturation / 100.0;
    let l_prime = hsl.lightness / 100.0;

    let value = l_prime + s_prime * l_prime.min(1.0 - l_prime);
    let saturation = if value == 0.0 {
        0.0
    } else {
        2.0 * (1.0 - l_prime / value)
    };

    HsvColor {
        hue: round_to(hsl.hue, decimal_places),
        saturation: round_to(saturation * 100.0, decimal_places),
        value: round_to(value * 100.0, decimal_places),
    }
}

#[must_use]
pub fn hsl_to_cmyk(hsl: HslColor, decimal_places: u8) -> CmykColor {
    rgb_to_cmyk(hsl_to_rgb(hsl), decimal_places)
}

// HSV to everything else.

#[must_use]
pub fn hsv_to_rgb(hsv: HsvColor) -> RgbColor {
    let h_prime = hsv.hue / 60.0;
    let s_prime = hsv.saturation / 100.0;
    let v_prime = hsv.value / 100.0;

    let chroma = v_prime * s_prime;
    let middle = chroma * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());
    let adjustment = v_prime - chroma;

    let (r_prime, g_prime, b_prime) = arrange_by_sextant(h_prime, chroma, middle);

    RgbColor {
        red: unit_to_channel(r_prime + adjustment),
        green: unit_to_channel(g_prime + adjustment),
        blue: unit_to_channel(b_prime + adjustment),
    }
}

#[must_use]
pub fn hsv_to_hex(hsv: HsvColor, include_hashtag: bool) -> HexString {
    rgb_to_hex(hsv_to_rgb(hsv), include_hashtag)
}

/// Direct HSV → HSL formula (no round trip through RGB).
#[must_use]
pub fn hsv_to_hsl(hsv: HsvColor, decimal_places: u8) -> HslColor {
    let s_prime = hsv.saturation / 100.0;
    let v_prime = hsv.value / 100.0;

    let lightness = v_prime * (1.0 - s_prime / 2.0);
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (v_prime - lightness) / lightness.min(1.0 - lightness)
    };

    HslColor {
        hue: round_to(hsv.hue, decimal_places),
        saturation: round_to(saturation * 100.0, decimal_places),
        lightness: round_to(lightness * 100.0, decimal_places),
    }
}

#[must_use]
pub fn hsv_to_cmyk(hsv: HsvColor, decimal_places: u8) -> CmykColor {
    rgb_to_cmyk(hsv_to_rgb(hsv), decimal_places)
}

// CMYK to everything else.

#[must_use]
pub fn cmyk_to_rgb(cmyk: CmykColor) -> RgbColor {
    let c_prime = cmyk.cyan / 100.0;
    let m_prime = cmyk.magenta / 100.0;
    let y_prime = cmyk.yellow / 100.0;
    let k_prime = cmyk.black / 100.0;

    RgbColor {
        red: unit_to_channel((1.0 - c_prime) * (1.0 - k_prime)),
        green: unit_to_channel((1.0 - m_prime) * (1.0 - k_prime)),
        blue: unit_to_channel((1.0 - y_prime) * (1.0 - k_prime)),
    }
}

#[must_use]
pub fn cmyk_to_hex(cmyk: CmykColor, include_hashtag: bool) -> HexString {
    rgb_to_hex(cmyk_to_rgb(cmyk), include_hashtag)
}

#[must_use]
pub fn cmyk_to_hsl(cmyk: CmykColor, decimal_places: u8) -> HslColor {
    rgb_to_hsl(cmyk_to_rgb(cmyk), decimal_places)
}

#[must_use]
pub fn cmyk_to_hsv(cmyk: CmykColor, decimal_places: u8) -> HsvColor {
    rgb_to_hsv(cmyk_to_rgb(cmyk), decimal_places)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::ErrorKind;

    fn assert_rgb_within_one(lhs: RgbColor, rhs: RgbColor) {
        let diff = |a: u8, b: u8| (i16::from(a) - i16::from(b)).abs();
        assert!(
            diff(lhs.red, rhs.red) <= 1
                && diff(lhs.green, rhs.green) <= 1
                && diff(lhs.blue, rhs.blue) <= 1,
            "expected {lhs:?} within +/-1 per channel of {rhs:?}"
        );
    }

    #[test_case(RgbColor::from_u8(255, 128, 0), "ff8000")]
    #[test_case(RgbColor::from_u8(0, 0, 0), "000000")]
    #[test_case(RgbColor::from_u8(255, 255, 255), "ffffff")]
    #[test_case(RgbColor::from_u8(47, 20, 223), "2f14df")]
    fn test_rgb_to_hex(color: RgbColor, expected: &str) {
        assert_eq!(rgb_to_hex(color, false).as_str(), expected);
        assert_eq!(
            rgb_to_hex(color, true).as_str(),
            format!("#{expected}").as_str()
        );
    }

    #[test]
    fn test_hex_to_rgb() {
        let value = hex_to_rgb("#FF8000").unwrap();
        assert_eq!(value, RgbColor::from_u8(255, 128, 0));
    }

    #[test_case("ff800"; "five digits")]
    #[test_case("#gg0000"; "not hex digits")]
    #[test_case("#ff8000ff"; "eight digits")]
    #[test_case(""; "empty")]
    fn test_hex_to_rgb_rejects_malformed(input: &str) {
        let result = hex_to_rgb(input);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test_case(RgbColor::from_u8(255, 128, 0))]
    #[test_case(RgbColor::from_u8(12, 34, 56))]
    #[test_case(RgbColor::from_u8(1, 2, 3))]
    #[test_case(RgbColor::from_u8(128, 128, 128))]
    #[test_case(RgbColor::from_u8(0, 255, 0))]
    fn test_hex_round_trip(color: RgbColor) {
        let hex = rgb_to_hex(color, false);
        assert_eq!(hex_to_rgb(hex.as_str()).unwrap(), color);
    }

    #[test_case(RgbColor::from_u8(255, 128, 0))]
    #[test_case(RgbColor::from_u8(12, 34, 56))]
    #[test_case(RgbColor::from_u8(0, 0, 0))]
    #[test_case(RgbColor::from_u8(255, 255, 255))]
    #[test_case(RgbColor::from_u8(200, 1, 1))]
    fn test_hsl_round_trip(color: RgbColor) {
        let hsl = rgb_to_hsl(color, DEFAULT_DECIMAL_PLACES);
        assert_rgb_within_one(hsl_to_rgb(hsl), color);
    }

    #[test_case(RgbColor::from_u8(255, 128, 0))]
    #[test_case(RgbColor::from_u8(12, 34, 56))]
    #[test_case(RgbColor::from_u8(94, 103, 111))]
    #[test_case(RgbColor::from_u8(255, 255, 255))]
    fn test_hsv_round_trip(color: RgbColor) {
        let hsv = rgb_to_hsv(color, DEFAULT_DECIMAL_PLACES);
        assert_rgb_within_one(hsv_to_rgb(hsv), color);
    }

    #[test_case(RgbColor::from_u8(255, 128, 0))]
    #[test_case(RgbColor::from_u8(20, 244, 0))]
    #[test_case(RgbColor::from_u8(0, 0, 0))]
    #[test_case(RgbColor::from_u8(171, 204, 242))]
    fn test_cmyk_round_trip(color: RgbColor) {
        let cmyk = rgb_to_cmyk(color, DEFAULT_DECIMAL_PLACES);
        assert_rgb_within_one(cmyk_to_rgb(cmyk), color);
    }

    #[test]
    fn test_hsl_boundaries() {
        let black = rgb_to_hsl(RgbColor::from_u8(0, 0, 0), 2);
        assert_eq!(black.to_tuple(), (0.0, 0.0, 0.0));

        let white = rgb_to_hsl(RgbColor::from_u8(255, 255, 255), 2);
        assert_eq!(white.to_tuple(), (0.0, 0.0, 100.0));
    }

    #[test]
    fn test_cmyk_pure_black_has_no_nan() {
        let black = rgb_to_cmyk(RgbColor::from_u8(0, 0, 0), 2);
        assert_eq!(black.to_tuple(), (0.0, 0.0, 0.0, 100.0));
    }

    /// Scenario from the wire-format contract: `#FF8000` through RGB, HSV, and
    /// back from CMYK.
    #[test]
    fn test_orange_scenario() {
        let rgb = hex_to_rgb("#FF8000").unwrap();
        assert_eq!(rgb, RgbColor::from_u8(255, 128, 0));

        let hsv = rgb_to_hsv(rgb, 2);
        assert_eq!(hsv.to_tuple(), (30.12, 100.0, 100.0));

        let cmyk = CmykColor::try_new(0.0, 50.0, 100.0, 0.0).unwrap();
        assert_eq!(cmyk_to_rgb(cmyk), RgbColor::from_u8(255, 128, 0));
    }

    #[test]
    fn test_decimal_places_parameter() {
        let rgb = RgbColor::from_u8(255, 128, 0);
        let hsv = rgb_to_hsv(rgb, 0);
        assert_eq!(hsv.to_tuple(), (30.0, 100.0, 100.0));

        let hsv = rgb_to_hsv(rgb, 4);
        assert_eq!(hsv.hue, 30.1176);
    }

    #[test]
    fn test_hsl_hsv_direct_formulas() {
        let green = HslColor::try_new(120.0, 100.0, 50.0).unwrap();
        let hsv = hsl_to_hsv(green, 2);
        assert_eq!(hsv.to_tuple(), (120.0, 100.0, 100.0));

        let back = hsv_to_hsl(hsv, 2);
        assert_eq!(back.to_tuple(), (120.0, 100.0, 50.0));
    }

    #[test]
    fn test_hsl_to_hsv_black_is_zero_saturation() {
        let black = HslColor::try_new(0.0, 0.0, 0.0).unwrap();
        let hsv = hsl_to_hsv(black, 2);
        assert_eq!(hsv.to_tuple(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hue_sextant_coverage() {
        // One probe per 60 degree sextant, plus the 360 == 0 catch-all.
        let probe = |hue: f64| hsl_to_rgb(HslColor::try_new(hue, 100.0, 50.0).unwrap());
        assert_eq!(probe(0.0), RgbColor::from_u8(255, 0, 0));
        assert_eq!(probe(60.0), RgbColor::from_u8(255, 255, 0));
        assert_eq!(probe(120.0), RgbColor::from_u8(0, 255, 0));
        assert_eq!(probe(180.0), RgbColor::from_u8(0, 255, 255));
        assert_eq!(probe(240.0), RgbColor::from_u8(0, 0, 255));
        assert_eq!(probe(300.0), RgbColor::from_u8(255, 0, 255));
        assert_eq!(probe(360.0), RgbColor::from_u8(255, 0, 0));
    }

    #[test]
    fn test_composed_conversions_agree_with_rgb_path() {
        let hex = "#46821e";
        let via_rgb = rgb_to_cmyk(hex_to_rgb(hex).unwrap(), 2);
        let direct = hex_to_cmyk(hex, 2).unwrap();
        assert_eq!(via_rgb, direct);

        let hsl = hex_to_hsl(hex, 2).unwrap();
        assert_eq!(hsl_to_hex(hsl, true).as_str(), "#46821e");
    }
}
