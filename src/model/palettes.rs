//! Static color palette catalog and palette application
//!
//! Applying a palette overwrites only the color fields of a configuration;
//! shape and geometry fields are left untouched. The replacement is a whole
//! new config value, never a partial in-place write.

use crate::model::config::{Color, PatternConfig};

/// A coordinated set of colors applicable to any pattern kind
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    /// Display name of the palette
    pub name: &'static str,
    /// Short description of the palette's character
    pub description: &'static str,
    /// Main pattern color (shape, dot, or tint)
    pub primary: Color,
    /// Supporting color shown in palette swatches
    pub secondary: Color,
    /// Accent color for dot interleaving
    pub accent: Color,
    /// Background fill color
    pub background: Color,
}

impl ColorPalette {
    /// Apply the palette's colors to a configuration
    ///
    /// Geometric patterns take the primary as shape color; dot patterns take
    /// the primary as dot color and gain the accent; noise textures take the
    /// primary as tint. All kinds take the palette background.
    pub fn apply(&self, config: &PatternConfig) -> PatternConfig {
        match config {
            PatternConfig::Geometric(c) => {
                let mut updated = c.clone();
                updated.shape_color = self.primary;
                updated.background_color = self.background;
                PatternConfig::Geometric(updated)
            }
            PatternConfig::Dots(c) => {
                let mut updated = c.clone();
                updated.dot_color = self.primary;
                updated.accent_color = Some(self.accent);
                updated.background_color = self.background;
                PatternConfig::Dots(updated)
            }
            PatternConfig::Noise(c) => {
                let mut updated = c.clone();
                updated.color_tint = self.primary;
                updated.background_color = self.background;
                PatternConfig::Noise(updated)
            }
        }
    }
}

/// The static palette catalog
pub const COLOR_PALETTES: [ColorPalette; 10] = [
    ColorPalette {
        name: "Ocean Breeze",
        description: "Cool, professional blues",
        primary: Color::new(0x25, 0x63, 0xeb),
        secondary: Color::new(0x06, 0xb6, 0xd4),
        accent: Color::new(0x08, 0x91, 0xb2),
        background: Color::new(0xf0, 0xf9, 0xff),
    },
    ColorPalette {
        name: "Sunset Glow",
        description: "Warm, energetic tones",
        primary: Color::new(0xf5, 0x9e, 0x0b),
        secondary: Color::new(0xef, 0x44, 0x44),
        accent: Color::new(0xec, 0x48, 0x99),
        background: Color::new(0xff, 0xf7, 0xed),
    },
    ColorPalette {
        name: "Forest Depth",
        description: "Natural, calming greens",
        primary: Color::new(0x10, 0xb9, 0x81),
        secondary: Color::new(0x05, 0x96, 0x69),
        accent: Color::new(0x14, 0xb8, 0xa6),
        background: Color::new(0xf0, 0xfd, 0xf4),
    },
    ColorPalette {
        name: "Royal Purple",
        description: "Elegant, luxurious purples",
        primary: Color::new(0x8b, 0x5c, 0xf6),
        secondary: Color::new(0xa8, 0x55, 0xf7),
        accent: Color::new(0xc0, 0x84, 0xfc),
        background: Color::new(0xfa, 0xf5, 0xff),
    },
    ColorPalette {
        name: "Monochrome",
        description: "Timeless grayscale",
        primary: Color::new(0x1f, 0x29, 0x37),
        secondary: Color::new(0x4b, 0x55, 0x63),
        accent: Color::new(0x6b, 0x72, 0x80),
        background: Color::new(0xf9, 0xfa, 0xfb),
    },
    ColorPalette {
        name: "Cherry Blossom",
        description: "Soft, romantic pinks",
        primary: Color::new(0xec, 0x48, 0x99),
        secondary: Color::new(0xf4, 0x72, 0xb6),
        accent: Color::new(0xfb, 0xcf, 0xe8),
        background: Color::new(0xfd, 0xf2, 0xf8),
    },
    ColorPalette {
        name: "Midnight",
        description: "Dark, sophisticated blues",
        primary: Color::new(0x1e, 0x40, 0xaf),
        secondary: Color::new(0x31, 0x2e, 0x81),
        accent: Color::new(0x4f, 0x46, 0xe5),
        background: Color::new(0x1e, 0x29, 0x3b),
    },
    ColorPalette {
        name: "Citrus Pop",
        description: "Vibrant, playful yellows",
        primary: Color::new(0xfa, 0xcc, 0x15),
        secondary: Color::new(0x84, 0xcc, 0x16),
        accent: Color::new(0xf9, 0x73, 0x16),
        background: Color::new(0xfe, 0xfc, 0xe8),
    },
    ColorPalette {
        name: "Coral Reef",
        description: "Tropical, warm corals",
        primary: Color::new(0xf4, 0x3f, 0x5e),
        secondary: Color::new(0xfb, 0x92, 0x3c),
        accent: Color::new(0xfd, 0xba, 0x74),
        background: Color::new(0xff, 0xf1, 0xf2),
    },
    ColorPalette {
        name: "Arctic Ice",
        description: "Cool, crisp cyans",
        primary: Color::new(0x67, 0xe8, 0xf9),
        secondary: Color::new(0xa5, 0xf3, 0xfc),
        accent: Color::new(0x22, 0xd3, 0xee),
        background: Color::new(0xec, 0xfe, 0xff),
    },
];

/// Find a palette by name, case-insensitively
pub fn find_palette(name: &str) -> Option<&'static ColorPalette> {
    COLOR_PALETTES
        .iter()
        .find(|palette| palette.name.eq_ignore_ascii_case(name))
}
