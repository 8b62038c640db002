// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) escape sequence generation.
//!
//! [`SgrCode`] is the closed set of escape sequences this crate emits. Its
//! [`Display`] impl renders the byte-exact wire form that terminals expect:
//! - `ESC[Nm` for text attributes and reset.
//! - `ESC[38;2;R;G;Bm` / `ESC[48;2;R;G;Bm` for 24-bit foreground / background
//!   color. No 16/256-color palette codes are produced.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result};

use crate::RgbColor;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Hidden,
    Strikethrough,
    Font1,
    Font2,
    Font3,
    Font4,
    Font5,
    Font6,
    Font7,
    Font8,
    Font9,
    Fraktur,
    DoubleUnderline,
    /// Ends both bold and dim.
    ResetBoldDim,
    /// Ends both italic and fraktur.
    ResetItalic,
    ResetUnderline,
    ResetBlink,
    ResetInvert,
    ResetHidden,
    ResetStrikethrough,
    Frame,
    Encircle,
    Overline,
    /// Ends both frame and encircle.
    ResetFrameEncircle,
    ResetOverline,
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

/// Whether a color applies to the text itself or the cell behind it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// The [`SgrCode`] that paints `arg_color` on this layer.
    #[must_use]
    pub fn to_sgr(self, arg_color: impl Into<RgbColor>) -> SgrCode {
        let RgbColor { red, green, blue } = arg_color.into();
        match self {
            Layer::Foreground => SgrCode::ForegroundRGB(red, green, blue),
            Layer::Background => SgrCode::BackgroundRGB(red, green, blue),
        }
    }
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                  => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                   => write!(f, "{CSI}1{SGR}"),
                SgrCode::Dim                    => write!(f, "{CSI}2{SGR}"),
                SgrCode::Italic                 => write!(f, "{CSI}3{SGR}"),
                SgrCode::Underline              => write!(f, "{CSI}4{SGR}"),
                SgrCode::SlowBlink              => write!(f, "{CSI}5{SGR}"),
                SgrCode::RapidBlink             => write!(f, "{CSI}6{SGR}"),
                SgrCode::Invert                 => write!(f, "{CSI}7{SGR}"),
                SgrCode::Hidden                 => write!(f, "{CSI}8{SGR}"),
                SgrCode::Strikethrough          => write!(f, "{CSI}9{SGR}"),
                SgrCode::Font1                  => write!(f, "{CSI}11{SGR}"),
                SgrCode::Font2                  => write!(f, "{CSI}12{SGR}"),
                SgrCode::Font3                  => write!(f, "{CSI}13{SGR}"),
                SgrCode::Font4                  => write!(f, "{CSI}14{SGR}"),
                SgrCode::Font5                  => write!(f, "{CSI}15{SGR}"),
                SgrCode::Font6                  => write!(f, "{CSI}16{SGR}"),
                SgrCode::Font7                  => write!(f, "{CSI}17{SGR}"),
                SgrCode::Font8                  => write!(f, "{CSI}18{SGR}"),
                SgrCode::Font9                  => write!(f, "{CSI}19{SGR}"),
                SgrCode::Fraktur                => write!(f, "{CSI}20{SGR}"),
                SgrCode::DoubleUnderline        => write!(f, "{CSI}21{SGR}"),
                SgrCode::ResetBoldDim           => write!(f, "{CSI}22{SGR}"),
                SgrCode::ResetItalic            => write!(f, "{CSI}23{SGR}"),
                SgrCode::ResetUnderline         => write!(f, "{CSI}24{SGR}"),
                SgrCode::ResetBlink             => write!(f, "{CSI}25{SGR}"),
                SgrCode::ResetInvert            => write!(f, "{CSI}27{SGR}"),
                SgrCode::ResetHidden            => write!(f, "{CSI}28{SGR}"),
                SgrCode::ResetStrikethrough     => write!(f, "{CSI}29{SGR}"),
                SgrCode::Frame                  => write!(f, "{CSI}51{SGR}"),
                SgrCode::Encircle               => write!(f, "{CSI}52{SGR}"),
                SgrCode::Overline               => write!(f, "{CSI}53{SGR}"),
                SgrCode::ResetFrameEncircle     => write!(f, "{CSI}54{SGR}"),
                SgrCode::ResetOverline          => write!(f, "{CSI}55{SGR}"),
                SgrCode::ForegroundRGB(r, g, b) => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b) => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}
