// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`FormatCode`] wraps one validated ANSI formatting string (one or more SGR
//! sequences) together with a single step of mutation history.
//!
//! The wrapper exists so the predefined color and style tables can hand out
//! values that:
//! - render themselves (via [`Display`]),
//! - concatenate with strings and with each other to build composite
//!   formatting prefixes (via [`Add`]),
//! - can report the RGB / hex color they carry,
//! - support in-place brightness adjustment with "revert one step" and
//!   "revert to original".
//!
//! The only mutating operations are [`FormatCode::adjust_brightness`] and the
//! two revert methods, and they touch nothing but the instance's own fields.
//! Everything else in the crate is referentially transparent.

use std::fmt::{Display, Formatter, Result};
use std::ops::Add;

use smallstr::SmallString;

use crate::{ColorizeError,
            ColorizeResult,
            Layer,
            RgbColor,
            SgrCode,
            color::sizing::HexString,
            convert::rgb_to_hex,
            sgr_scanner::parser};

pub mod sizing {
    use super::SmallString;

    /// A single 24-bit color escape is at most 19 bytes
    /// (`ESC[38;2;255;255;255m`); composite codes spill to the heap.
    pub const CODE_STORAGE_SIZE: usize = 24;
    pub type InlineCodeString = SmallString<[u8; CODE_STORAGE_SIZE]>;
}

use sizing::InlineCodeString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCode {
    current: InlineCodeString,
    previous: InlineCodeString,
    original: InlineCodeString,
}

impl FormatCode {
    /// Wrap a raw escape string. The input must consist entirely of SGR
    /// sequences (`ESC[...m`), otherwise it is not a formatting value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorizeError::InvalidFormatCode`] (a type error) if the
    /// input is anything other than SGR sequences.
    pub fn new(arg_code: impl AsRef<str>) -> ColorizeResult<Self> {
        let code = arg_code.as_ref();
        if parser::is_format_code(code) {
            Ok(Self::from_validated(code.into()))
        } else {
            Err(ColorizeError::InvalidFormatCode {
                code: code.to_string(),
            })
        }
    }

    #[must_use]
    pub fn from_sgr(code: SgrCode) -> Self {
        Self::from_validated(code.to_string().into())
    }

    /// The encode operation: a 24-bit color escape for `arg_color` on the
    /// given layer.
    #[must_use]
    pub fn from_color(arg_color: impl Into<RgbColor>, layer: Layer) -> Self {
        Self::from_validated(layer.to_sgr(arg_color).to_string().into())
    }

    /// Construction from a string already known to be valid SGR sequences.
    fn from_validated(code: InlineCodeString) -> Self {
        Self {
            current: code.clone(),
            previous: code.clone(),
            original: code,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.current }

    #[must_use]
    pub fn previous_value(&self) -> &str { &self.previous }

    #[must_use]
    pub fn original_value(&self) -> &str { &self.original }

    /// Reverts the previous change made to this instance. Calling it twice
    /// re-applies the change (the two fields swap).
    pub fn revert_change(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }

    /// Reverts to the value captured at construction. The value being
    /// replaced is recorded as the previous value.
    pub fn revert_to_original(&mut self) {
        self.previous = std::mem::replace(&mut self.current, self.original.clone());
    }

    /// The RGB triple of the wrapped code. Only defined when the whole wrapped
    /// value is exactly one 24-bit color escape.
    ///
    /// # Errors
    ///
    /// Returns [`ColorizeError::NotAColorCode`] otherwise (eg: for style
    /// codes, or composite codes built by concatenation).
    pub fn to_rgb(&self) -> ColorizeResult<RgbColor> {
        match parser::parse_exact_color_code(&self.current) {
            Some((_, rgb)) => Ok(rgb),
            None => Err(ColorizeError::NotAColorCode {
                code: self.current.to_string(),
            }),
        }
    }

    /// The hex form of [`Self::to_rgb`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorizeError::NotAColorCode`] when the wrapped value is not
    /// a single color escape.
    pub fn to_hex(&self, include_hashtag: bool) -> ColorizeResult<HexString> {
        Ok(rgb_to_hex(self.to_rgb()?, include_hashtag))
    }

    /// Adjust the brightness of the wrapped color by a percentage. Positive
    /// increases, negative decreases. Each channel is scaled by
    /// `1 + percentage/100`, truncated, and clamped to `0..=255` (the one
    /// place in the crate where clamping happens). The replaced value is
    /// recorded so [`Self::revert_change`] can undo this.
    ///
    /// # Errors
    ///
    /// Returns [`ColorizeError::NotAColorCode`] when the wrapped value is not
    /// a single color escape.
    pub fn adjust_brightness(&mut self, percentage: f64) -> ColorizeResult<()> {
        let Some((layer, rgb)) = parser::parse_exact_color_code(&self.current) else {
            return Err(ColorizeError::NotAColorCode {
                code: self.current.to_string(),
            });
        };

        let factor = 1.0 + (percentage / 100.0);
        let scale = |channel: u8| -> u8 {
            // Truncate toward zero, then clamp into the channel range.
            #[allow(clippy::cast_possible_truncation)]
            let adjusted = (f64::from(channel) * factor) as i64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                adjusted.clamp(0, 255) as u8
            }
        };

        let adjusted = RgbColor {
            red: scale(rgb.red),
            green: scale(rgb.green),
            blue: scale(rgb.blue),
        };

        self.previous = std::mem::replace(
            &mut self.current,
            layer.to_sgr(adjusted).to_string().into(),
        );

        Ok(())
    }
}

impl Display for FormatCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.current) }
}

/// Concatenating two codes yields a composite code with a fresh history (the
/// composite is its own original).
impl Add<&FormatCode> for &FormatCode {
    type Output = FormatCode;

    fn add(self, rhs: &FormatCode) -> FormatCode {
        let mut combined = self.current.clone();
        combined.push_str(&rhs.current);
        FormatCode::from_validated(combined)
    }
}

impl Add<&str> for &FormatCode {
    type Output = String;

    fn add(self, rhs: &str) -> String { format!("{}{rhs}", self.current) }
}

impl Add<&FormatCode> for &str {
    type Output = String;

    fn add(self, rhs: &FormatCode) -> String { format!("{self}{}", rhs.current) }
}
