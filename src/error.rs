// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the crate.
//!
//! Every fallible operation returns [`ColorizeResult`]. There are only two
//! failure categories, surfaced via [`ColorizeError::kind()`]:
//! - [`ErrorKind::InvalidType`] - the argument is the wrong kind of value (e.g.
//!   a string that is not an SGR formatting code where one is expected).
//! - [`ErrorKind::OutOfRange`] - the argument is the right kind of value but
//!   outside its valid domain (e.g. a unit float channel of `1.2`, a malformed
//!   hex string, gradient text shorter than 2 characters).
//!
//! Errors are raised at the point of first detection, before any output is
//! built. No function in this crate returns a half-built string.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`core::result::Result`] and
/// [`ColorizeError`] throughout the crate.
pub type ColorizeResult<T> = core::result::Result<T, ColorizeError>;

/// The two failure categories that run through the crate. See the
/// [module docs](self) for what distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong kind of value.
    InvalidType,
    /// Right kind of value, outside its valid domain (includes format errors).
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ColorizeError {
    /// A float color channel is outside its valid domain.
    #[error("{channel} channel must be within {min}..={max} (got {value})")]
    #[diagnostic(code(r3bl_colorize::channel_out_of_range))]
    ChannelOutOfRange {
        /// Which channel failed validation (`"red"`, `"hue"`, `"cyan"`, ...).
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The input does not parse as a hex color.
    #[error("invalid hex color {input:?}")]
    #[diagnostic(
        code(r3bl_colorize::invalid_hex_color),
        help("expected exactly 6 hex digits with an optional leading '#', eg: \"ff8000\" or \"#1E90FF\"")
    )]
    InvalidHexColor { input: String },

    /// The input string is not built entirely out of SGR escape sequences, so
    /// it cannot be used as a formatting code.
    #[error("not an SGR formatting code: {code:?}")]
    #[diagnostic(
        code(r3bl_colorize::invalid_format_code),
        help("a formatting code is one or more `ESC[...m` sequences and nothing else")
    )]
    InvalidFormatCode { code: String },

    /// A [`FormatCode`] operation needed a 24-bit color code, but the wrapped
    /// sequence carries none.
    ///
    /// [`FormatCode`]: crate::FormatCode
    #[error("format code {code:?} does not carry a 24-bit color")]
    #[diagnostic(code(r3bl_colorize::not_a_color_code))]
    NotAColorCode { code: String },

    /// Gradient text is too short to interpolate across.
    #[error("gradient text must be at least 2 characters long (got {len})")]
    #[diagnostic(code(r3bl_colorize::gradient_text_too_short))]
    GradientTextTooShort { len: usize },

    /// A multi-anchor gradient needs at least two anchor colors.
    #[error("gradient needs at least 2 anchor colors (got {count})")]
    #[diagnostic(code(r3bl_colorize::too_few_anchors))]
    TooFewAnchors { count: usize },
}

impl ColorizeError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColorizeError::InvalidFormatCode { .. } => ErrorKind::InvalidType,
            ColorizeError::ChannelOutOfRange { .. }
            | ColorizeError::InvalidHexColor { .. }
            | ColorizeError::NotAColorCode { .. }
            | ColorizeError::GradientTextTooShort { .. }
            | ColorizeError::TooFewAnchors { .. } => ErrorKind::OutOfRange,
        }
    }
}
