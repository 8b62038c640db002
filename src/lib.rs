// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_colorize
//!
//! Terminal text-styling toolkit. This crate:
//! - Converts between color representations: RGB, hex, HSL, HSV, CMYK (the
//!   [`convert`] module).
//! - Builds ANSI SGR escape sequences for 24-bit foreground/background color
//!   and text attributes like bold and underline ([`SgrCode`],
//!   [`FormatCode`], [`compose`], the `colorize_by_*` functions).
//! - Scans already-formatted strings and recovers the colors embedded in them
//!   ([`scan_colors`]), and strips formatting ([`strip_formatting`]).
//! - Renders left-to-right color gradients across a string ([`gradient()`],
//!   [`gradient_multi`]).
//! - Ships the predefined CSS-style color and style name tables
//!   ([`NamedColor`], [`NamedStyle`]).
//!
//! Only 24-bit (`ESC[38;2;R;G;Bm` / `ESC[48;2;R;G;Bm`) color codes are
//! emitted; there is no terminal capability detection and no palette
//! downgrade. Output is written for terminals that support truecolor.
//!
//! # Example usage
//!
//! ```rust
//! use r3bl_colorize::*;
//!
//! // Convert between color spaces.
//! let rgb = hex_to_rgb("#ff8000").unwrap();
//! assert_eq!(rgb, RgbColor::from_u8(255, 128, 0));
//! let hsv = rgb_to_hsv(rgb, 2);
//! assert_eq!(hsv.to_tuple(), (30.12, 100.0, 100.0));
//!
//! // Compose a styled string: codes prefix, one trailing reset.
//! let styled = compose(
//!     "hello",
//!     &[NamedStyle::Bold.code(), fg_code(NamedColor::Crimson)],
//! );
//! assert_eq!(styled, "\x1b[1m\x1b[38;2;220;20;60mhello\x1b[0m");
//!
//! // Scan it back.
//! let found = scan_colors(&styled, ColorTarget::Rgb);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].layer, Layer::Foreground);
//!
//! // Strip the formatting.
//! assert_eq!(strip_formatting(&styled), "hello");
//!
//! // Render a gradient.
//! let ramp = gradient("ab", (0, 0, 0), (255, 255, 255), Layer::Foreground).unwrap();
//! assert_eq!(ramp, "\x1b[38;2;0;0;0ma\x1b[38;2;255;255;255mb\x1b[0m");
//! ```
//!
//! # Concurrency
//!
//! Everything here is synchronous, in-memory, CPU-only work. There is no
//! shared state, so any conversion or encode function can be called from
//! multiple threads without synchronization. The one type with interior
//! history, [`FormatCode`], mutates only through `&mut self`.

// Attach.
pub mod ansi_escape_codes;
pub mod color;
pub mod convert;
pub mod error;
pub mod format_code;
pub mod gradient;
pub mod hex_color_parser;
pub mod named_colors;
pub mod named_styles;
pub mod sgr_scanner;
pub mod styled_text;

// Re-export.
pub use ansi_escape_codes::{Layer, SgrCode};
pub use color::{CmykColor, HslColor, HsvColor, RgbColor};
pub use convert::*;
pub use error::{ColorizeError, ColorizeResult, ErrorKind};
pub use format_code::FormatCode;
pub use gradient::{AnchorColor, gradient, gradient_multi};
pub use hex_color_parser::parse_hex_color;
pub use named_colors::{DEFAULT_SAMPLE_MESSAGE,
                       NamedColor,
                       bg_code,
                       compare_color_samples,
                       fg_code,
                       is_color_name,
                       lookup_color,
                       print_color_sample};
pub use named_styles::{NamedStyle, is_style_name, lookup_style, print_style_sample};
pub use sgr_scanner::{ColorTarget,
                      FoundColor,
                      ScanSegment,
                      ScannedValue,
                      scan_colors,
                      scan_segments,
                      strip_formatting};
pub use styled_text::{StyledText,
                      colorize_by_cmyk,
                      colorize_by_hex,
                      colorize_by_hsl,
                      colorize_by_hsv,
                      colorize_by_rgb,
                      compose};
