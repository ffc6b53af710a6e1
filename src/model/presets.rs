//! Read-only preset catalogs and per-kind default configurations
//!
//! Three catalogs of five presets each, one per pattern family. Catalog
//! entries are never mutated at runtime; applying a preset copies its config.

use crate::model::config::{
    Color, DotsConfig, DotsStyle, GeometricConfig, NoiseConfig, PatternConfig, PatternKind,
    ShapeKind,
};

/// A named, immutable pattern configuration catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct PatternPreset {
    /// Display name of the preset
    pub name: &'static str,
    /// The configuration applied when the preset is selected
    pub config: PatternConfig,
}

/// Starting configuration for geometric patterns
pub const DEFAULT_GEOMETRIC: GeometricConfig = GeometricConfig {
    shape: ShapeKind::Circle,
    size: 40.0,
    spacing: 20.0,
    rotation: 0.0,
    shape_color: Color::new(0x3b, 0x82, 0xf6),
    background_color: Color::new(0xff, 0xff, 0xff),
    size_variation: None,
    color_variation: None,
    opacity: None,
};

/// Starting configuration for dot patterns
pub const DEFAULT_DOTS: DotsConfig = DotsConfig {
    dot_size: 20.0,
    density: 0.5,
    size_variation: 30.0,
    style: DotsStyle::Grid,
    dot_color: Color::new(0x8b, 0x5c, 0xf6),
    accent_color: None,
    background_color: Color::new(0xff, 0xff, 0xff),
};

/// Starting configuration for noise textures
pub const DEFAULT_NOISE: NoiseConfig = NoiseConfig {
    intensity: 50.0,
    scale: 3,
    color_tint: Color::new(0x63, 0x66, 0xf1),
    background_color: Color::new(0xf5, 0xf5, 0xf5),
};

/// The default configuration for a pattern family
pub const fn default_config(kind: PatternKind) -> PatternConfig {
    match kind {
        PatternKind::Geometric => PatternConfig::Geometric(DEFAULT_GEOMETRIC),
        PatternKind::Dots => PatternConfig::Dots(DEFAULT_DOTS),
        PatternKind::Noise => PatternConfig::Noise(DEFAULT_NOISE),
    }
}

/// Geometric pattern presets
pub const GEOMETRIC_PRESETS: [PatternPreset; 5] = [
    PatternPreset {
        name: "Classic Dots",
        config: PatternConfig::Geometric(GeometricConfig {
            shape: ShapeKind::Circle,
            size: 30.0,
            spacing: 25.0,
            rotation: 0.0,
            shape_color: Color::new(0x3b, 0x82, 0xf6),
            background_color: Color::new(0xff, 0xff, 0xff),
            size_variation: None,
            color_variation: None,
            opacity: None,
        }),
    },
    PatternPreset {
        name: "Rotated Squares",
        config: PatternConfig::Geometric(GeometricConfig {
            shape: ShapeKind::Square,
            size: 35.0,
            spacing: 20.0,
            rotation: 45.0,
            shape_color: Color::new(0x10, 0xb9, 0x81),
            background_color: Color::new(0xf0, 0xfd, 0xf4),
            size_variation: None,
            color_variation: None,
            opacity: None,
        }),
    },
    PatternPreset {
        name: "Triangle Grid",
        config: PatternConfig::Geometric(GeometricConfig {
            shape: ShapeKind::Triangle,
            size: 40.0,
            spacing: 15.0,
            rotation: 0.0,
            shape_color: Color::new(0xf5, 0x9e, 0x0b),
            background_color: Color::new(0xff, 0xfb, 0xeb),
            size_variation: None,
            color_variation: None,
            opacity: None,
        }),
    },
    PatternPreset {
        name: "Dense Circles",
        config: PatternConfig::Geometric(GeometricConfig {
            shape: ShapeKind::Circle,
            size: 25.0,
            spacing: 10.0,
            rotation: 0.0,
            shape_color: Color::new(0xec, 0x48, 0x99),
            background_color: Color::new(0xfd, 0xf2, 0xf8),
            size_variation: None,
            color_variation: None,
            opacity: None,
        }),
    },
    PatternPreset {
        name: "Bold Squares",
        config: PatternConfig::Geometric(GeometricConfig {
            shape: ShapeKind::Square,
            size: 50.0,
            spacing: 30.0,
            rotation: 0.0,
            shape_color: Color::new(0x1f, 0x29, 0x37),
            background_color: Color::new(0xf9, 0xfa, 0xfb),
            size_variation: None,
            color_variation: None,
            opacity: None,
        }),
    },
];

/// Dot pattern presets
pub const DOTS_PRESETS: [PatternPreset; 5] = [
    PatternPreset {
        name: "Uniform Grid",
        config: PatternConfig::Dots(DotsConfig {
            dot_size: 18.0,
            density: 0.4,
            size_variation: 0.0,
            style: DotsStyle::Grid,
            dot_color: Color::new(0x8b, 0x5c, 0xf6),
            accent_color: None,
            background_color: Color::new(0xff, 0xff, 0xff),
        }),
    },
    PatternPreset {
        name: "Scattered",
        config: PatternConfig::Dots(DotsConfig {
            dot_size: 25.0,
            density: 0.3,
            size_variation: 50.0,
            style: DotsStyle::Random,
            dot_color: Color::new(0x06, 0xb6, 0xd4),
            accent_color: None,
            background_color: Color::new(0xf0, 0xfd, 0xfa),
        }),
    },
    PatternPreset {
        name: "Varied Grid",
        config: PatternConfig::Dots(DotsConfig {
            dot_size: 20.0,
            density: 0.5,
            size_variation: 40.0,
            style: DotsStyle::Grid,
            dot_color: Color::new(0xf5, 0x9e, 0x0b),
            accent_color: Some(Color::new(0xef, 0x44, 0x44)),
            background_color: Color::new(0xff, 0xfb, 0xeb),
        }),
    },
    PatternPreset {
        name: "Dense Random",
        config: PatternConfig::Dots(DotsConfig {
            dot_size: 15.0,
            density: 0.7,
            size_variation: 60.0,
            style: DotsStyle::Random,
            dot_color: Color::new(0x63, 0x66, 0xf1),
            accent_color: None,
            background_color: Color::new(0xee, 0xf2, 0xff),
        }),
    },
    PatternPreset {
        name: "Polka Dots",
        config: PatternConfig::Dots(DotsConfig {
            dot_size: 30.0,
            density: 0.35,
            size_variation: 10.0,
            style: DotsStyle::Grid,
            dot_color: Color::new(0xec, 0x48, 0x99),
            accent_color: None,
            background_color: Color::new(0xff, 0xff, 0xff),
        }),
    },
];

/// Noise texture presets
pub const NOISE_PRESETS: [PatternPreset; 5] = [
    PatternPreset {
        name: "Subtle Grain",
        config: PatternConfig::Noise(NoiseConfig {
            intensity: 30.0,
            scale: 2,
            color_tint: Color::new(0x94, 0xa3, 0xb8),
            background_color: Color::new(0xf8, 0xfa, 0xfc),
        }),
    },
    PatternPreset {
        name: "Heavy Texture",
        config: PatternConfig::Noise(NoiseConfig {
            intensity: 70.0,
            scale: 4,
            color_tint: Color::new(0x47, 0x55, 0x69),
            background_color: Color::new(0xe2, 0xe8, 0xf0),
        }),
    },
    PatternPreset {
        name: "Blue Tint",
        config: PatternConfig::Noise(NoiseConfig {
            intensity: 45.0,
            scale: 3,
            color_tint: Color::new(0x3b, 0x82, 0xf6),
            background_color: Color::new(0xef, 0xf6, 0xff),
        }),
    },
    PatternPreset {
        name: "Warm Noise",
        config: PatternConfig::Noise(NoiseConfig {
            intensity: 55.0,
            scale: 5,
            color_tint: Color::new(0xf5, 0x9e, 0x0b),
            background_color: Color::new(0xfe, 0xf3, 0xc7),
        }),
    },
    PatternPreset {
        name: "Fine Grain",
        config: PatternConfig::Noise(NoiseConfig {
            intensity: 40.0,
            scale: 1,
            color_tint: Color::new(0x64, 0x74, 0x8b),
            background_color: Color::new(0xff, 0xff, 0xff),
        }),
    },
];

/// Iterate over every preset in every catalog
pub fn all_presets() -> impl Iterator<Item = &'static PatternPreset> {
    GEOMETRIC_PRESETS
        .iter()
        .chain(DOTS_PRESETS.iter())
        .chain(NOISE_PRESETS.iter())
}

/// The preset catalog for one pattern family
pub const fn catalog(kind: PatternKind) -> &'static [PatternPreset; 5] {
    match kind {
        PatternKind::Geometric => &GEOMETRIC_PRESETS,
        PatternKind::Dots => &DOTS_PRESETS,
        PatternKind::Noise => &NOISE_PRESETS,
    }
}

/// Find a preset by name across all catalogs, case-insensitively
pub fn find_preset(name: &str) -> Option<&'static PatternPreset> {
    all_presets().find(|preset| preset.name.eq_ignore_ascii_case(name))
}
