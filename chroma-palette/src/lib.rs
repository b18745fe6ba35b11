//! Golden-palette reference data and the harmonious palette synthesizer
//! built on top of `chroma-core`'s color model and difference layers.

pub mod golden;
pub mod rules;
pub mod synth;
pub mod tone;

pub use golden::{GoldenPalette, TONE_NAMES, TONE_NAMES_10};
pub use rules::{create_color_palettes_by_rule, Rule};
pub use synth::{
    create_color_palette, create_dark_palette, create_light_palette, create_palette,
    ComputedPalette,
};
pub use tone::{get_color_tone, get_palette_tone, ColorOrTone};
