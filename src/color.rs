use eframe::egui::Color32;
use palette::{named, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Renderer-neutral 8-bit RGB colour, convertible to egui and plotters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Srgb<u8>> for Rgb8 {
    fn from(c: Srgb<u8>) -> Self {
        Rgb8 {
            r: c.red,
            g: c.green,
            b: c.blue,
        }
    }
}

impl From<Rgb8> for Color32 {
    fn from(c: Rgb8) -> Self {
        Color32::from_rgb(c.r, c.g, c.b)
    }
}

impl From<Rgb8> for plotters::style::RGBColor {
    fn from(c: Rgb8) -> Self {
        plotters::style::RGBColor(c.r, c.g, c.b)
    }
}

/// Fixed colours of the grouped efflux series, in legend order.
pub const SERIES_COLORS: [Srgb<u8>; 4] = [
    named::BLUE,
    named::RED,
    named::LIGHTSEAGREEN,
    named::LIGHTSALMON,
];

/// Base bar colour of single-series charts.
pub const BASE_COLOR: Srgb<u8> = named::BLUE;

/// Colour of flagged categories.
pub const HIGHLIGHT_COLOR: Srgb<u8> = named::DEEPPINK;

/// Colour of series `index`, or `None` past the fixed colours.
pub fn series_color(index: usize) -> Option<Rgb8> {
    SERIES_COLORS.get(index).copied().map(Rgb8::from)
}
