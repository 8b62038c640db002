// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The predefined text styling names and their SGR codes.
//!
//! NOTE: support varies between terminal emulators. The widely supported set
//! is bold, italic, underline, swap, hide, and strikethrough; blink, the
//! alternative fonts, fraktur, frame, encircle, and overline are rarely
//! implemented.
//!
//! Some escape codes are shared by more than one name for readability: ending
//! bold also ends faint (code 22), ending italic also ends fraktur (code 23),
//! and ending frame also ends encircle (code 54).

use std::str::FromStr;

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::{FormatCode, SgrCode};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyle {
    // Main codes.
    Bold,
    Italic,
    Underline,
    /// Swaps the foreground and background colors.
    Swap,
    /// Prevents the text from being visible, but it still takes up space.
    Hide,
    Strikethrough,

    // Rarely supported codes.
    Faint,
    SlowBlink,
    RapidBlink,
    DoubleUnderline,
    Frame,
    Encircle,
    Overline,
    Fraktur,

    // Alternative fonts.
    Font1,
    Font2,
    Font3,
    Font4,
    Font5,
    Font6,
    Font7,
    Font8,
    Font9,

    // End formats.
    /// Removes the bold or faint effect.
    EndBold,
    /// Removes the bold or faint effect.
    EndFaint,
    /// Removes the italic effect, or fraktur.
    EndItalic,
    /// Removes the italic effect, or fraktur.
    EndFraktur,
    EndUnderline,
    EndBlink,
    EndSwap,
    /// Re-enables text visibility.
    Unhide,
    EndStrikethrough,
    EndFrame,
    EndEncircle,
    EndOverline,
}

impl NamedStyle {
    #[must_use]
    #[rustfmt::skip]
    pub const fn sgr(self) -> SgrCode {
        match self {
            NamedStyle::Bold             => SgrCode::Bold,
            NamedStyle::Italic           => SgrCode::Italic,
            NamedStyle::Underline        => SgrCode::Underline,
            NamedStyle::Swap             => SgrCode::Invert,
            NamedStyle::Hide             => SgrCode::Hidden,
            NamedStyle::Strikethrough    => SgrCode::Strikethrough,
            NamedStyle::Faint            => SgrCode::Dim,
            NamedStyle::SlowBlink        => SgrCode::SlowBlink,
            NamedStyle::RapidBlink       => SgrCode::RapidBlink,
            NamedStyle::DoubleUnderline  => SgrCode::DoubleUnderline,
            NamedStyle::Frame            => SgrCode::Frame,
            NamedStyle::Encircle         => SgrCode::Encircle,
            NamedStyle::Overline         => SgrCode::Overline,
            NamedStyle::Fraktur          => SgrCode::Fraktur,
            NamedStyle::Font1            => SgrCode::Font1,
            NamedStyle::Font2            => SgrCode::Font2,
            NamedStyle::Font3            => SgrCode::Font3,
            NamedStyle::Font4            => SgrCode::Font4,
            NamedStyle::Font5            => SgrCode::Font5,
            NamedStyle::Font6            => SgrCode::Font6,
            NamedStyle::Font7            => SgrCode::Font7,
            NamedStyle::Font8            => SgrCode::Font8,
            NamedStyle::Font9            => SgrCode::Font9,
            NamedStyle::EndBold          => SgrCode::ResetBoldDim,
            NamedStyle::EndFaint         => SgrCode::ResetBoldDim,
            NamedStyle::EndItalic        => SgrCode::ResetItalic,
            NamedStyle::EndFraktur       => SgrCode::ResetItalic,
            NamedStyle::EndUnderline     => SgrCode::ResetUnderline,
            NamedStyle::EndBlink         => SgrCode::ResetBlink,
            NamedStyle::EndSwap          => SgrCode::ResetInvert,
            NamedStyle::Unhide           => SgrCode::ResetHidden,
            NamedStyle::EndStrikethrough => SgrCode::ResetStrikethrough,
            NamedStyle::EndFrame         => SgrCode::ResetFrameEncircle,
            NamedStyle::EndEncircle      => SgrCode::ResetFrameEncircle,
            NamedStyle::EndOverline      => SgrCode::ResetOverline,
        }
    }

    #[must_use]
    pub fn code(self) -> FormatCode { FormatCode::from_sgr(self.sgr()) }
}

/// Finds a style by name, with the same normalization as
/// [`crate::lookup_color`].
#[must_use]
pub fn lookup_style(name: &str) -> Option<NamedStyle> {
    let normalized = name.trim().replace([' ', '-'], "_").to_uppercase();
    NamedStyle::from_str(&normalized).ok()
}

#[must_use]
pub fn is_style_name(name: &str) -> bool { lookup_style(name).is_some() }

/// Prints one line to stdout showing the style applied to the message.
pub fn print_style_sample(style: NamedStyle, msg: &str) {
    let message = msg.replace("{name}", &style.to_string());
    println!("{}{message}{}", style.code(), SgrCode::Reset);
}
