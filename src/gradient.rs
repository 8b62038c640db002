// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Left-to-right color gradients across a string.
//!
//! Every character (grapheme cluster) is individually prefixed with a color
//! escape that linearly interpolates between the anchor colors, and the whole
//! string is terminated with exactly one reset - never one per character.
//!
//! Intermediate channels are truncated toward zero, not rounded. The ramp
//! therefore steps down in stairs, and on certain lengths/colors the final
//! character lands one shy of the exact right-anchor value. The truncation is
//! part of the output contract and is pinned by tests.

use std::fmt::Write as _;

use unicode_segmentation::UnicodeSegmentation;

use crate::{ColorizeError,
            ColorizeResult,
            FormatCode,
            Layer,
            RgbColor,
            SgrCode,
            convert::hex_to_rgb};

/// The accepted input forms for a gradient anchor, normalized to RGB once at
/// the top of each gradient call.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorColor {
    Rgb(RgbColor),
    /// A hex string, with optional leading `#`.
    Hex(String),
    /// A predefined color code; must wrap a single 24-bit color escape.
    Code(FormatCode),
}

impl From<RgbColor> for AnchorColor {
    fn from(color: RgbColor) -> Self { AnchorColor::Rgb(color) }
}

impl From<(u8, u8, u8)> for AnchorColor {
    fn from(channels: (u8, u8, u8)) -> Self { AnchorColor::Rgb(channels.into()) }
}

impl From<&str> for AnchorColor {
    fn from(hex: &str) -> Self { AnchorColor::Hex(hex.to_string()) }
}

impl From<FormatCode> for AnchorColor {
    fn from(code: FormatCode) -> Self { AnchorColor::Code(code) }
}

impl From<&FormatCode> for AnchorColor {
    fn from(code: &FormatCode) -> Self { AnchorColor::Code(code.clone()) }
}

impl AnchorColor {
    /// # Errors
    ///
    /// Returns [`ColorizeError::InvalidHexColor`] for a malformed hex anchor,
    /// or [`ColorizeError::NotAColorCode`] for a code anchor that carries no
    /// 24-bit color.
    pub fn resolve(&self) -> ColorizeResult<RgbColor> {
        match self {
            AnchorColor::Rgb(color) => Ok(*color),
            AnchorColor::Hex(hex) => hex_to_rgb(hex),
            AnchorColor::Code(code) => code.to_rgb(),
        }
    }
}

/// Applies a two-anchor gradient to the text and appends one reset.
///
/// NOTE: applying a gradient to already-formatted text will mangle it; run
/// [`crate::strip_formatting`] first.
///
/// # Errors
///
/// Returns [`ColorizeError::GradientTextTooShort`] if the text has fewer than
/// 2 characters, or an anchor resolution error (see [`AnchorColor::resolve`]).
pub fn gradient(
    text: &str,
    arg_left: impl Into<AnchorColor>,
    arg_right: impl Into<AnchorColor>,
    layer: Layer,
) -> ColorizeResult<String> {
    let segments = text.graphemes(true).collect::<Vec<&str>>();
    let len = segments.len();
    if len < 2 {
        return Err(ColorizeError::GradientTextTooShort { len });
    }

    let left = arg_left.into().resolve()?;
    let right = arg_right.into().resolve()?;

    tracing::debug!(?left, ?right, len, "rendering two-anchor gradient");

    #[allow(clippy::cast_precision_loss)]
    let steps = channel_steps(left, right, (len - 1) as f64);

    let mut acc = String::new();
    for (index, segment) in segments.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let color = color_at(left, steps, index as f64);
        _ = write!(acc, "{}{segment}", layer.to_sgr(color));
    }
    _ = write!(acc, "{}", SgrCode::Reset);

    Ok(acc)
}

/// Applies a gradient across N >= 2 anchors. The text is divided into N-1
/// equal-length spans (float division); each consecutive anchor pair colors
/// `trunc(span)` characters with per-channel steps of `(right - left)/span`.
/// Leftover trailing characters from the span truncation are appended
/// unformatted - a known rough edge of the format.
///
/// # Errors
///
/// Returns [`ColorizeError::GradientTextTooShort`] /
/// [`ColorizeError::TooFewAnchors`] on bad input sizes, or an anchor
/// resolution error (see [`AnchorColor::resolve`]).
pub fn gradient_multi(
    text: &str,
    anchors: &[AnchorColor],
    layer: Layer,
) -> ColorizeResult<String> {
    let segments = text.graphemes(true).collect::<Vec<&str>>();
    let len = segments.len();
    if len < 2 {
        return Err(ColorizeError::GradientTextTooShort { len });
    }
    if anchors.len() < 2 {
        return Err(ColorizeError::TooFewAnchors {
            count: anchors.len(),
        });
    }

    // Resolve every anchor before emitting anything.
    let resolved = anchors
        .iter()
        .map(AnchorColor::resolve)
        .collect::<ColorizeResult<Vec<RgbColor>>>()?;

    tracing::debug!(
        anchor_count = resolved.len(),
        len,
        "rendering multi-anchor gradient"
    );

    #[allow(clippy::cast_precision_loss)]
    let span = len as f64 / (resolved.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let chunk = span as usize;

    let mut acc = String::new();
    let mut emitted = 0;
    'pairs: for (pair_index, pair) in resolved.windows(2).enumerate() {
        let steps = channel_steps(pair[0], pair[1], span);
        for offset in 0..chunk {
            let index = pair_index * chunk + offset;
            if index >= len {
                break 'pairs;
            }
            #[allow(clippy::cast_precision_loss)]
            let color = color_at(pair[0], steps, offset as f64);
            _ = write!(acc, "{}{}", layer.to_sgr(color), segments[index]);
            emitted += 1;
        }
    }

    for segment in &segments[emitted..] {
        acc.push_str(segment);
    }
    _ = write!(acc, "{}", SgrCode::Reset);

    Ok(acc)
}

/// Per-channel linear step between two anchors over `divisor` increments.
fn channel_steps(left: RgbColor, right: RgbColor, divisor: f64) -> [f64; 3] {
    [
        (f64::from(right.red) - f64::from(left.red)) / divisor,
        (f64::from(right.green) - f64::from(left.green)) / divisor,
        (f64::from(right.blue) - f64::from(left.blue)) / divisor,
    ]
}

/// The interpolated color at `index` steps from `left`. Channels truncate
/// toward zero (see the module docs for the resulting bias).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn color_at(left: RgbColor, steps: [f64; 3], index: f64) -> RgbColor {
    RgbColor {
        red: (f64::from(left.red) + steps[0] * index) as u8,
        green: (f64::from(left.green) + steps[1] * index) as u8,
        blue: (f64::from(left.blue) + steps[2] * index) as u8,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{ColorTarget,
                ErrorKind,
                ScannedValue,
                scan_colors,
                strip_formatting};

    #[test]
    fn test_two_char_gradient_is_deterministic() {
        let out = gradient(
            "ab",
            RgbColor::from_u8(0, 0, 0),
            RgbColor::from_u8(255, 255, 255),
            Layer::Foreground,
        )
        .unwrap();
        assert_eq!(out, "\x1b[38;2;0;0;0ma\x1b[38;2;255;255;255mb\x1b[0m");
    }

    #[test]
    fn test_gradient_resets_exactly_once_at_the_end() {
        let out = gradient("hello", (200, 1, 1), (0, 0, 255), Layer::Foreground).unwrap();
        assert_eq!(out.matches("\x1b[0m").count(), 1);
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_gradient_background_layer() {
        let out = gradient("ab", (0, 0, 0), (2, 2, 2), Layer::Background).unwrap();
        assert_eq!(out, "\x1b[48;2;0;0;0ma\x1b[48;2;2;2;2mb\x1b[0m");
    }

    /// Intermediate channels truncate: at index 1 the exact value is 2.5 per
    /// channel, which lands on 2, not 3.
    #[test]
    fn test_gradient_truncates_intermediate_channels() {
        let out = gradient("abc", (0, 0, 0), (5, 5, 5), Layer::Foreground).unwrap();
        let found = scan_colors(&out, ColorTarget::Rgb);
        let channels = found
            .iter()
            .map(|entry| match entry.value {
                ScannedValue::Rgb(rgb) => rgb.red,
                _ => unreachable!(),
            })
            .collect::<Vec<u8>>();
        assert_eq!(channels, vec![0, 2, 5]);
    }

    #[test]
    fn test_gradient_descending_channels() {
        let out = gradient("abc", (5, 5, 5), (0, 0, 0), Layer::Foreground).unwrap();
        let found = scan_colors(&out, ColorTarget::Rgb);
        let channels = found
            .iter()
            .map(|entry| match entry.value {
                ScannedValue::Rgb(rgb) => rgb.red,
                _ => unreachable!(),
            })
            .collect::<Vec<u8>>();
        assert_eq!(channels, vec![5, 2, 0]);
    }

    #[test_case(""; "empty")]
    #[test_case("a"; "single char")]
    fn test_gradient_rejects_short_text(text: &str) {
        let result = gradient(text, (0, 0, 0), (1, 1, 1), Layer::Foreground);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_gradient_accepts_hex_and_code_anchors() {
        let left = FormatCode::from_color((0, 0, 0), Layer::Foreground);
        let out = gradient("ab", &left, "#ffffff", Layer::Foreground).unwrap();
        assert_eq!(out, "\x1b[38;2;0;0;0ma\x1b[38;2;255;255;255mb\x1b[0m");
    }

    #[test]
    fn test_gradient_rejects_malformed_hex_anchor() {
        let result = gradient("ab", "zzz", "#ffffff", Layer::Foreground);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_gradient_rejects_style_code_anchor() {
        let bold = FormatCode::from_sgr(crate::SgrCode::Bold);
        let result = gradient("ab", &bold, "#ffffff", Layer::Foreground);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_gradient_strip_recovers_text() {
        let out = gradient("hello world", (20, 244, 0), (0, 0, 255), Layer::Foreground)
            .unwrap();
        assert_eq!(strip_formatting(&out), "hello world");
    }

    #[test]
    fn test_multi_anchor_even_spans() {
        let anchors = [
            AnchorColor::from((0, 0, 0)),
            AnchorColor::from((100, 100, 100)),
            AnchorColor::from((200, 200, 200)),
        ];
        let out = gradient_multi("abcdefghij", &anchors, Layer::Foreground).unwrap();
        let found = scan_colors(&out, ColorTarget::Rgb);
        let channels = found
            .iter()
            .map(|entry| match entry.value {
                ScannedValue::Rgb(rgb) => rgb.red,
                _ => unreachable!(),
            })
            .collect::<Vec<u8>>();
        // span = 10/2 = 5; each pair covers 5 chars with step 20.
        assert_eq!(channels, vec![0, 20, 40, 60, 80, 100, 120, 140, 160, 180]);
        assert_eq!(strip_formatting(&out), "abcdefghij");
    }

    /// span = 11/2 = 5.5, truncated to 5 per pair: 10 formatted characters and
    /// one leftover appended unformatted before the reset.
    #[test]
    fn test_multi_anchor_leftover_is_unformatted() {
        let anchors = [
            AnchorColor::from((0, 0, 0)),
            AnchorColor::from((100, 100, 100)),
            AnchorColor::from((200, 200, 200)),
        ];
        let out = gradient_multi("abcdefghijk", &anchors, Layer::Foreground).unwrap();
        assert_eq!(scan_colors(&out, ColorTarget::Rgb).len(), 10);
        assert!(out.ends_with("k\x1b[0m"));
        assert_eq!(strip_formatting(&out), "abcdefghijk");
    }

    #[test]
    fn test_multi_anchor_rejects_single_anchor() {
        let anchors = [AnchorColor::from((0, 0, 0))];
        let result = gradient_multi("abcdef", &anchors, Layer::Foreground);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_multi_anchor_with_two_anchors_uses_span_steps() {
        // Two anchors: span = 6/1 = 6, so steps divide by 6 (not 5 as in the
        // two-anchor function). The last char gets 5 * 10 = 50, not 60.
        let anchors = [AnchorColor::from((0, 0, 0)), AnchorColor::from((60, 60, 60))];
        let out = gradient_multi("abcdef", &anchors, Layer::Foreground).unwrap();
        let found = scan_colors(&out, ColorTarget::Rgb);
        let channels = found
            .iter()
            .map(|entry| match entry.value {
                ScannedValue::Rgb(rgb) => rgb.red,
                _ => unreachable!(),
            })
            .collect::<Vec<u8>>();
        assert_eq!(channels, vec![0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_gradient_counts_graphemes_not_bytes() {
        // Two grapheme clusters, many bytes.
        let out = gradient("🎨🦀", (0, 0, 0), (255, 255, 255), Layer::Foreground);
        let out = out.unwrap();
        assert_eq!(scan_colors(&out, ColorTarget::Rgb).len(), 2);
        assert_eq!(strip_formatting(&out), "🎨🦀");
    }
}
