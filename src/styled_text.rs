// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Composition of formatted strings: formatting codes as a prefix, the text,
//! and exactly one trailing reset.
//!
//! The main struct to consider is [`StyledText`]. It has two fields:
//! - `text` - the text to format.
//! - `codes` - a list of [`FormatCode`] to apply to the text, owned in a stack
//!   allocated buffer (which spills to the heap if it grows beyond
//!   [`sizing::MAX_FORMAT_CODES`]).
//!
//! The free functions are the everyday API: [`compose`] for arbitrary code
//! lists, and the `colorize_by_*` family for the common one-foreground /
//! one-background case in each supported color space.

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use crate::{CmykColor,
            ColorizeResult,
            FormatCode,
            HslColor,
            HsvColor,
            Layer,
            RgbColor,
            SgrCode,
            convert::{cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb}};

pub mod sizing {
    use super::{FormatCode, SmallVec};

    /// Codes are: one foreground color, one background color, and a handful
    /// of attributes (bold, italic, underline, etc.).
    pub const MAX_FORMAT_CODES: usize = 8;
    pub type InlineVecFormatCodes = SmallVec<[FormatCode; MAX_FORMAT_CODES]>;
}

use sizing::InlineVecFormatCodes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<'a> {
    pub text: &'a str,
    pub codes: InlineVecFormatCodes,
}

mod styled_text_impl {
    use super::*;

    impl StyledText<'_> {
        pub fn println(&self) { println!("{self}"); }
    }

    impl Display for StyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for code in &self.codes {
                write!(f, "{code}")?;
            }
            write!(f, "{}", self.text)?;
            write!(f, "{}", SgrCode::Reset)?;
            Ok(())
        }
    }
}

/// Concatenates all the given codes as a prefix, appends `text`, and appends
/// the reset sequence once.
#[must_use]
pub fn compose(text: &str, codes: &[FormatCode]) -> String {
    StyledText {
        text,
        codes: codes.iter().cloned().collect(),
    }
    .to_string()
}

/// Colorize with up to one foreground and one background RGB color. The
/// foreground code is emitted first.
#[must_use]
pub fn colorize_by_rgb(
    text: &str,
    fg: Option<RgbColor>,
    bg: Option<RgbColor>,
) -> String {
    let mut codes = InlineVecFormatCodes::new();
    if let Some(color) = fg {
        codes.push(FormatCode::from_color(color, Layer::Foreground));
    }
    if let Some(color) = bg {
        codes.push(FormatCode::from_color(color, Layer::Background));
    }
    StyledText { text, codes }.to_string()
}

/// Like [`colorize_by_rgb`], with hex string inputs.
///
/// # Errors
///
/// Returns [`crate::ColorizeError::InvalidHexColor`] if either input fails to
/// parse. Both inputs are validated before any output is built.
pub fn colorize_by_hex(
    text: &str,
    fg: Option<&str>,
    bg: Option<&str>,
) -> ColorizeResult<String> {
    let fg = fg.map(hex_to_rgb).transpose()?;
    let bg = bg.map(hex_to_rgb).transpose()?;
    Ok(colorize_by_rgb(text, fg, bg))
}

#[must_use]
pub fn colorize_by_hsl(
    text: &str,
    fg: Option<HslColor>,
    bg: Option<HslColor>,
) -> String {
    colorize_by_rgb(text, fg.map(hsl_to_rgb), bg.map(hsl_to_rgb))
}

#[must_use]
pub fn colorize_by_hsv(
    text: &str,
    fg: Option<HsvColor>,
    bg: Option<HsvColor>,
) -> String {
    colorize_by_rgb(text, fg.map(hsv_to_rgb), bg.map(hsv_to_rgb))
}

#[must_use]
pub fn colorize_by_cmyk(
    text: &str,
    fg: Option<CmykColor>,
    bg: Option<CmykColor>,
) -> String {
    colorize_by_rgb(text, fg.map(cmyk_to_rgb), bg.map(cmyk_to_rgb))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;
    use crate::{ColorTarget, ScannedValue, scan_colors};

    #[test]
    fn test_styled_text_display() {
        let styled = StyledText {
            text: "Hello",
            codes: smallvec![
                FormatCode::from_sgr(SgrCode::Bold),
                FormatCode::from_color((0, 0, 0), Layer::Foreground),
            ],
        };
        assert_eq!(styled.to_string(), "\x1b[1m\x1b[38;2;0;0;0mHello\x1b[0m");
    }

    #[test]
    fn test_compose_appends_single_reset() {
        let code = FormatCode::from_color((220, 20, 60), Layer::Foreground);
        let out = compose("x", &[code]);
        assert_eq!(out, "\x1b[38;2;220;20;60mx\x1b[0m");
    }

    #[test]
    fn test_compose_with_no_codes_still_resets() {
        assert_eq!(compose("x", &[]), "x\x1b[0m");
    }

    #[test]
    fn test_colorize_by_rgb_orders_fg_before_bg() {
        let out = colorize_by_rgb(
            "hi",
            Some(RgbColor::from_u8(255, 0, 0)),
            Some(RgbColor::from_u8(0, 0, 255)),
        );
        assert_eq!(out, "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255mhi\x1b[0m");
    }

    #[test]
    fn test_colorize_by_rgb_fg_only() {
        let out = colorize_by_rgb("hi", Some(RgbColor::from_u8(1, 2, 3)), None);
        assert_eq!(out, "\x1b[38;2;1;2;3mhi\x1b[0m");
    }

    #[test]
    fn test_colorize_by_hex() {
        let out = colorize_by_hex("hi", Some("#ff8000"), None).unwrap();
        assert_eq!(out, "\x1b[38;2;255;128;0mhi\x1b[0m");
    }

    #[test]
    fn test_colorize_by_hex_fails_before_building() {
        let result = colorize_by_hex("hi", Some("#ff8000"), Some("nope"));
        assert!(result.is_err());
    }

    #[test]
    fn test_colorize_by_hsl() {
        let red = HslColor::try_new(0.0, 100.0, 50.0).unwrap();
        let out = colorize_by_hsl("hi", Some(red), None);
        assert_eq!(out, "\x1b[38;2;255;0;0mhi\x1b[0m");
    }

    /// Scan is the inverse of compose: one encoded color comes back out, with
    /// its layer.
    #[test]
    fn test_scan_compose_inverse() {
        let color = RgbColor::from_u8(12, 34, 56);
        for layer in [Layer::Foreground, Layer::Background] {
            let composed = compose("x", &[FormatCode::from_color(color, layer)]);
            let found = scan_colors(&composed, ColorTarget::Rgb);
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].value, ScannedValue::Rgb(color));
            assert_eq!(found[0].layer, layer);
        }
    }
}
