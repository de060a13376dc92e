use clap::ValueEnum;

use super::constants::{GLYPH_COLOR, THEME_COLOR, THEME_SHADE};

/// A filled circle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub color: [u8; 3],
}

/// Visual variant of the generated icons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IconStyle {
    /// Large glyph on a theme-coloured badge, RGBA output
    #[default]
    Badge,
    /// Smaller glyph over a darker leaf disc, RGB output
    Leaf,
}

impl IconStyle {
    pub fn background(self) -> [u8; 3] {
        THEME_COLOR
    }

    /// Whether the PNG keeps an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, IconStyle::Badge)
    }

    /// Disc drawn over the background before the glyph.
    pub fn disc(self, size: u32) -> Disc {
        match self {
            IconStyle::Badge => {
                let margin = size / 8;
                Disc {
                    cx: size as f32 / 2.0,
                    cy: size as f32 / 2.0,
                    radius: (size - 2 * margin) as f32 / 2.0,
                    color: THEME_COLOR,
                }
            }
            IconStyle::Leaf => {
                let center = (size / 2) as f32;
                Disc {
                    cx: center,
                    cy: center,
                    radius: ((size / 3) / 2) as f32,
                    color: THEME_SHADE,
                }
            }
        }
    }

    /// Disc drawn in place of the glyph when no font can render it.
    pub fn fallback(self, size: u32) -> Disc {
        let center = (size / 2) as f32;
        let radius = match self {
            IconStyle::Badge => size / 4,
            IconStyle::Leaf => 10u32.min(size / 2),
        };
        Disc {
            cx: center,
            cy: center,
            radius: radius as f32,
            color: GLYPH_COLOR,
        }
    }

    pub fn glyph_size(self, size: u32) -> f32 {
        match self {
            IconStyle::Badge => (size / 2) as f32,
            IconStyle::Leaf => (size / 3) as f32,
        }
    }

    /// Distance the glyph centre sits above the canvas centre.
    pub fn glyph_raise(self, size: u32) -> f32 {
        match self {
            IconStyle::Badge => (size / 10) as f32,
            IconStyle::Leaf => 0.0,
        }
    }
}
