// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The predefined CSS-style color names and their fixed RGB triples.
//!
//! One closed enum serves both layers: [`fg_code`] / [`bg_code`] derive the
//! escape code for the requested layer at call time. Name lookup round-trips
//! through strum in `SCREAMING_SNAKE_CASE`, and [`lookup_color`] additionally
//! accepts spaces and dashes as word separators in any case (so
//! `"steel blue"`, `"Steel-Blue"`, and `"STEEL_BLUE"` all find
//! [`NamedColor::SteelBlue`]).
//!
//! More info: <https://www.w3.org/TR/css-color-4/#named-colors>

use std::str::FromStr;

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::{AnchorColor, FormatCode, Layer, RgbColor, SgrCode};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedColor {
    // Reds.
    Maroon,
    DarkRed,
    Brown,
    Firebrick,
    Crimson,
    Red,
    Tomato,
    Coral,
    IndianRed,
    LightCoral,
    DarkSalmon,
    Salmon,
    LightSalmon,

    // Oranges.
    OrangeRed,
    DarkOrange,
    Orange,

    // Yellows.
    Gold,
    DarkGoldenRod,
    GoldenRod,
    PaleGoldenRod,
    DarkKhaki,
    Khaki,
    Olive,
    Yellow,

    // Greens.
    YellowGreen,
    DarkOliveGreen,
    OliveDrab,
    LawnGreen,
    Chartreuse,
    GreenYellow,
    DarkGreen,
    Green,
    ForestGreen,
    Lime,
    LimeGreen,
    LightGreen,
    PaleGreen,
    DarkSeaGreen,
    MediumSpringGreen,
    SpringGreen,
    SeaGreen,
    MediumSeaGreen,
    MintCream,
    Honeydew,

    // Blues.
    MediumAquaMarine,
    LightSeaGreen,
    DarkSlateGray,
    Teal,
    DarkCyan,
    Aqua,
    Cyan,
    LightCyan,
    DarkTurquoise,
    Turquoise,
    MediumTurquoise,
    PaleTurquoise,
    AquaMarine,
    PowderBlue,
    CadetBlue,
    SteelBlue,
    CornFlowerBlue,
    DeepSkyBlue,
    DodgerBlue,
    LightBlue,
    SkyBlue,
    LightSkyBlue,
    MidnightBlue,
    Navy,
    DarkBlue,
    MediumBlue,
    Blue,
    RoyalBlue,
    LightSteelBlue,
    AliceBlue,
    Azure,

    // Purples.
    BlueViolet,
    Indigo,
    DarkSlateBlue,
    SlateBlue,
    MediumSlateBlue,
    MediumPurple,
    DarkMagenta,
    DarkViolet,
    DarkOrchid,
    MediumOrchid,
    Purple,
    Lavender,

    // Pinks.
    Thistle,
    Plum,
    Violet,
    Magenta,
    Fuchsia,
    Orchid,
    MediumVioletRed,
    PaleVioletRed,
    DeepPink,
    HotPink,
    LightPink,
    Pink,

    // Whites.
    AntiqueWhite,
    Beige,
    Bisque,
    BlanchedAlmond,
    Wheat,
    CornSilk,
    LemonChiffon,
    LightGoldenRodYellow,
    LightYellow,
    FloralWhite,
    GhostWhite,
    Ivory,
    Snow,
    White,
    WhiteSmoke,

    // Browns.
    SaddleBrown,
    Sienna,
    Chocolate,
    Peru,
    SandyBrown,
    BurlyWood,
    Tan,
    RosyBrown,
    Moccasin,
    NavajoWhite,
    PeachPuff,
    MistyRose,
    LavenderBlush,
    Linen,
    OldLace,
    PapayaWhip,
    SeaShell,

    // Grays.
    SlateGray,
    LightSlateGray,
    Gainsboro,
    LightGray,
    Silver,
    DarkGray,
    Gray,
    DimGray,
    Black,
}

impl NamedColor {
    /// The fixed RGB triple behind the name.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rgb(self) -> RgbColor {
        let (red, green, blue) = match self {
            // Reds.
            NamedColor::Maroon               => (128, 0, 0),
            NamedColor::DarkRed              => (139, 0, 0),
            NamedColor::Brown                => (165, 42, 42),
            NamedColor::Firebrick            => (178, 34, 34),
            NamedColor::Crimson              => (220, 20, 60),
            NamedColor::Red                  => (255, 0, 0),
            NamedColor::Tomato               => (255, 99, 71),
            NamedColor::Coral                => (255, 127, 80),
            NamedColor::IndianRed            => (205, 92, 92),
            NamedColor::LightCoral           => (240, 128, 128),
            NamedColor::DarkSalmon           => (233, 150, 122),
            NamedColor::Salmon               => (250, 128, 114),
            NamedColor::LightSalmon          => (255, 160, 122),

            // Oranges.
            NamedColor::OrangeRed            => (255, 69, 0),
            NamedColor::DarkOrange           => (255, 140, 0),
            NamedColor::Orange               => (255, 165, 0),

            // Yellows.
            NamedColor::Gold                 => (255, 215, 0),
            NamedColor::DarkGoldenRod        => (184, 134, 11),
            NamedColor::GoldenRod            => (218, 165, 32),
            NamedColor::PaleGoldenRod        => (238, 232, 170),
            NamedColor::DarkKhaki            => (189, 183, 107),
            NamedColor::Khaki                => (240, 230, 140),
            NamedColor::Olive                => (128, 128, 0),
            NamedColor::Yellow               => (255, 255, 0),

            // Greens.
            NamedColor::YellowGreen          => (154, 205, 50),
            NamedColor::DarkOliveGreen       => (85, 107, 47),
            NamedColor::OliveDrab            => (107, 142, 35),
            NamedColor::LawnGreen            => (124, 252, 0),
            NamedColor::Chartreuse           => (127, 255, 0),
            NamedColor::GreenYellow          => (173, 255, 47),
            NamedColor::DarkGreen            => (0, 100, 0),
            NamedColor::Green                => (0, 128, 0),
            NamedColor::ForestGreen          => (34, 139, 34),
            NamedColor::Lime                 => (0, 255, 0),
            NamedColor::LimeGreen            => (50, 205, 50),
            NamedColor::LightGreen           => (144, 238, 144),
            NamedColor::PaleGreen            => (152, 251, 152),
            NamedColor::DarkSeaGreen         => (143, 188, 143),
            NamedColor::MediumSpringGreen    => (0, 250, 154),
            NamedColor::SpringGreen          => (0, 255, 127),
            NamedColor::SeaGreen             => (46, 139, 87),
            NamedColor::MediumSeaGreen       => (60, 179, 113),
            NamedColor::MintCream            => (245, 255, 250),
            NamedColor::Honeydew             => (240, 255, 240),

            // Blues.
            NamedColor::MediumAquaMarine     => (102, 205, 170),
            NamedColor::LightSeaGreen        => (32, 178, 170),
            NamedColor::DarkSlateGray        => (47, 79, 79),
            NamedColor::Teal                 => (0, 128, 128),
            NamedColor::DarkCyan             => (0, 139, 139),
            NamedColor::Aqua                 => (0, 255, 255),
            NamedColor::Cyan                 => (0, 255, 255),
            NamedColor::LightCyan            => (224, 255, 255),
            NamedColor::DarkTurquoise        => (0, 206, 209),
            NamedColor::Turquoise            => (64, 224, 208),
            NamedColor::MediumTurquoise      => (72, 209, 204),
            NamedColor::PaleTurquoise        => (175, 238, 238),
            NamedColor::AquaMarine           => (127, 255, 212),
            NamedColor::PowderBlue           => (176, 224, 230),
            NamedColor::CadetBlue            => (95, 158, 160),
            NamedColor::SteelBlue            => (70, 130, 180),
            NamedColor::CornFlowerBlue       => (100, 149, 237),
            NamedColor::DeepSkyBlue          => (0, 191, 255),
            NamedColor::DodgerBlue           => (30, 144, 255),
            NamedColor::LightBlue            => (173, 216, 230),
            NamedColor::SkyBlue              => (135, 206, 235),
            NamedColor::LightSkyBlue         => (135, 206, 250),
            NamedColor::MidnightBlue         => (25, 25, 112),
            NamedColor::Navy                 => (0, 0, 128),
            NamedColor::DarkBlue             => (0, 0, 139),
            NamedColor::MediumBlue           => (0, 0, 205),
            NamedColor::Blue                 => (0, 0, 255),
            NamedColor::RoyalBlue            => (65, 105, 225),
            NamedColor::LightSteelBlue       => (176, 196, 222),
            NamedColor::AliceBlue            => (240, 248, 255),
            NamedColor::Azure                => (240, 255, 255),

            // Purples.
            NamedColor::BlueViolet           => (138, 43, 226),
            NamedColor::Indigo               => (75, 0, 130),
            NamedColor::DarkSlateBlue        => (72, 61, 139),
            NamedColor::SlateBlue            => (106, 90, 205),
            NamedColor::MediumSlateBlue      => (123, 104, 238),
            NamedColor::MediumPurple         => (147, 112, 219),
            NamedColor::DarkMagenta          => (139, 0, 139),
            NamedColor::DarkViolet           => (148, 0, 211),
            NamedColor::DarkOrchid           => (153, 50, 204),
            NamedColor::MediumOrchid         => (186, 85, 211),
            NamedColor::Purple               => (128, 0, 128),
            NamedColor::Lavender             => (230, 230, 250),

            // Pinks.
            NamedColor::Thistle              => (216, 191, 216),
            NamedColor::Plum                 => (221, 160, 221),
            NamedColor::Violet               => (238, 130, 238),
            NamedColor::Magenta              => (255, 0, 255),
            NamedColor::Fuchsia              => (255, 0, 255),
            NamedColor::Orchid               => (218, 112, 214),
            NamedColor::MediumVioletRed      => (199, 21, 133),
            NamedColor::PaleVioletRed        => (219, 112, 147),
            NamedColor::DeepPink             => (255, 20, 147),
            NamedColor::HotPink              => (255, 105, 180),
            NamedColor::LightPink            => (255, 182, 193),
            NamedColor::Pink                 => (255, 192, 203),

            // Whites.
            NamedColor::AntiqueWhite         => (250, 235, 215),
            NamedColor::Beige                => (245, 245, 220),
            NamedColor::Bisque               => (255, 228, 196),
            NamedColor::BlanchedAlmond       => (255, 235, 205),
            NamedColor::Wheat                => (245, 222, 179),
            NamedColor::CornSilk             => (255, 248, 220),
            NamedColor::LemonChiffon         => (255, 250, 205),
            NamedColor::LightGoldenRodYellow => (250, 250, 210),
            NamedColor::LightYellow          => (255, 255, 224),
            NamedColor::FloralWhite          => (255, 250, 240),
            NamedColor::GhostWhite           => (248, 248, 255),
            NamedColor::Ivory                => (255, 255, 240),
            NamedColor::Snow                 => (255, 250, 250),
            NamedColor::White                => (255, 255, 255),
            NamedColor::WhiteSmoke           => (245, 245, 245),

            // Browns.
            NamedColor::SaddleBrown          => (139, 69, 19),
            NamedColor::Sienna               => (160, 82, 45),
            NamedColor::Chocolate            => (210, 105, 30),
            NamedColor::Peru                 => (205, 133, 63),
            NamedColor::SandyBrown           => (244, 164, 96),
            NamedColor::BurlyWood            => (222, 184, 135),
            NamedColor::Tan                  => (210, 180, 140),
            NamedColor::RosyBrown            => (188, 143, 143),
            NamedColor::Moccasin             => (255, 228, 181),
            NamedColor::NavajoWhite          => (255, 222, 173),
            NamedColor::PeachPuff            => (255, 218, 185),
            NamedColor::MistyRose            => (255, 228, 225),
            NamedColor::LavenderBlush        => (255, 240, 245),
            NamedColor::Linen                => (250, 240, 230),
            NamedColor::OldLace              => (253, 245, 230),
            NamedColor::PapayaWhip           => (255, 239, 213),
            NamedColor::SeaShell             => (255, 245, 238),

            // Grays.
            NamedColor::SlateGray            => (112, 128, 144),
            NamedColor::LightSlateGray       => (119, 136, 153),
            NamedColor::Gainsboro            => (220, 220, 220),
            NamedColor::LightGray            => (211, 211, 211),
            NamedColor::Silver               => (192, 192, 192),
            NamedColor::DarkGray             => (169, 169, 169),
            NamedColor::Gray                 => (128, 128, 128),
            NamedColor::DimGray              => (105, 105, 105),
            NamedColor::Black                => (0, 0, 0),
        };
        RgbColor { red, green, blue }
    }
}

impl From<NamedColor> for RgbColor {
    fn from(color: NamedColor) -> Self { color.rgb() }
}

impl From<NamedColor> for AnchorColor {
    fn from(color: NamedColor) -> Self { AnchorColor::Rgb(color.rgb()) }
}

/// The foreground escape code for a named color, derived at call time.
#[must_use]
pub fn fg_code(color: NamedColor) -> FormatCode {
    FormatCode::from_color(color.rgb(), Layer::Foreground)
}

/// The background escape code for a named color, derived at call time.
#[must_use]
pub fn bg_code(color: NamedColor) -> FormatCode {
    FormatCode::from_color(color.rgb(), Layer::Background)
}

/// Finds a color by name. Spaces and dashes are treated as word separators,
/// and case does not matter.
#[must_use]
pub fn lookup_color(name: &str) -> Option<NamedColor> {
    let normalized = name.trim().replace([' ', '-'], "_").to_uppercase();
    NamedColor::from_str(&normalized).ok()
}

#[must_use]
pub fn is_color_name(name: &str) -> bool { lookup_color(name).is_some() }

/// Default message template for the sample printers. `{name}` is replaced
/// with the color/style name.
pub const DEFAULT_SAMPLE_MESSAGE: &str = "This text is {name}.";

/// Prints one line to stdout showing the color on the given layer.
pub fn print_color_sample(color: NamedColor, layer: Layer, msg: &str) {
    let code = FormatCode::from_color(color.rgb(), layer);
    let message = msg.replace("{name}", &color.to_string());
    println!("{code}{message}{}", SgrCode::Reset);
}

/// Prints a sample line per color so they can be compared side by side.
pub fn compare_color_samples(colors: &[NamedColor], layer: Layer, msg: &str) {
    for color in colors {
        print_color_sample(*color, layer, msg);
    }
}
