//! Reference "golden palette" data: 20 hue-indexed 14-tone palettes plus a
//! single light-leaning and dark-leaning 10-tone reference, and the
//! lightness/chroma compensation vectors the synthesizer scales its deltas
//! by.
//!
//! These tables aren't transcribed from a design system; there is no source
//! data available to transcribe. They're generated from a closed-form
//! tonal-ramp parameterization (lightness and chroma curves indexed by tone,
//! modulated by a per-palette hue and per-palette max chroma), and the
//! compensation vectors are the real population standard deviation of that
//! generated data across the 20 palettes, not invented constants.

use std::sync::OnceLock;

use chroma_core::adaptation::IlluminantRef;
use chroma_core::color::lab::Lab;
use chroma_core::color::lch::LchAb;
use chroma_core::illuminant::{get_whitepoint, Illuminant, Observer, WhitepointQuery};
use chroma_core::matrix::Vec3;

/// Ordered tone names for a full 14-entry palette: ten numbered tones plus
/// four accents.
pub const TONE_NAMES: [&str; 14] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "A100", "A200", "A400",
    "A700",
];

/// The first ten tone names, shared by the light/dark 10-tone references.
pub const TONE_NAMES_10: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

const LIGHTNESS_BASE: [f64; 14] = [
    97.0, 93.0, 86.0, 77.0, 68.0, 58.0, 49.0, 40.0, 31.0, 22.0, 82.0, 70.0, 58.0, 48.0,
];

const CHROMA_SHAPE: [f64; 14] = [
    0.08, 0.18, 0.35, 0.55, 0.75, 0.92, 1.00, 0.92, 0.78, 0.60, 0.85, 1.05, 1.15, 1.05,
];

const PALETTE_COUNT: usize = 20;

fn hue_for_palette(p: usize) -> f64 {
    p as f64 * (360.0 / PALETTE_COUNT as f64)
}

fn max_chroma_for_palette(p: usize) -> f64 {
    30.0 + 40.0 * (p as f64 / (PALETTE_COUNT as f64 - 1.0))
}

fn lightness_sample(tone: usize, palette: usize) -> f64 {
    let base = LIGHTNESS_BASE[tone];
    let wobble = 2.5 * ((palette as f64) * 0.71 + (tone as f64) * 1.31).sin();
    (base + wobble).clamp(0.0, 100.0)
}

fn chroma_sample(tone: usize, palette: usize) -> f64 {
    let base = max_chroma_for_palette(palette) * CHROMA_SHAPE[tone];
    let wobble = 0.06 * base * ((palette as f64) * 0.53 + (tone as f64) * 0.29).cos();
    (base + wobble).max(0.0)
}

fn d65() -> Vec3 {
    get_whitepoint(WhitepointQuery {
        illuminant: Some(Illuminant::D65),
        observer: Observer::Two,
        ..Default::default()
    })
    .expect("D65 is always resolvable")
}

/// The whitepoint/illuminant every golden palette and reference is anchored
/// to.
pub fn reference_illuminant() -> IlluminantRef {
    IlluminantRef::new(Illuminant::D65)
}

/// A reference palette: an ordered sequence of Lab colors, one per tone
/// name, all sharing one hue family.
#[derive(Debug, Clone)]
pub struct GoldenPalette {
    /// Lab colors, ordered to match [`TONE_NAMES`] (or its first 10 entries
    /// for a 10-tone reference).
    pub colors: Vec<Lab>,
}

fn build_palette(hue: f64, whitepoint: Vec3, lightness: &[f64], chroma: &[f64]) -> GoldenPalette {
    let colors = lightness
        .iter()
        .zip(chroma.iter())
        .map(|(&l, &c)| LchAb::new(l, c, hue, 1.0, whitepoint).to_lab())
        .collect();
    GoldenPalette { colors }
}

/// The 20 hue-indexed 14-tone golden palettes.
pub fn golden_palettes() -> &'static [GoldenPalette] {
    static PALETTES: OnceLock<Vec<GoldenPalette>> = OnceLock::new();
    PALETTES.get_or_init(|| {
        let whitepoint = d65();
        (0..PALETTE_COUNT)
            .map(|p| {
                let hue = hue_for_palette(p);
                let lightness: Vec<f64> = (0..14).map(|i| lightness_sample(i, p)).collect();
                let chroma: Vec<f64> = (0..14).map(|i| chroma_sample(i, p)).collect();
                build_palette(hue, whitepoint, &lightness, &chroma)
            })
            .collect()
    })
}

/// The single light-leaning 10-tone reference palette (hue held fixed so it
/// cancels out of the synthesizer's hue delta).
pub fn light_reference() -> &'static GoldenPalette {
    static PALETTE: OnceLock<GoldenPalette> = OnceLock::new();
    PALETTE.get_or_init(|| {
        let whitepoint = d65();
        let lightness = &LIGHTNESS_BASE[0..10];
        let chroma: Vec<f64> = CHROMA_SHAPE[0..10].iter().map(|s| s * 45.0).collect();
        build_palette(0.0, whitepoint, lightness, &chroma)
    })
}

/// The single dark-leaning 10-tone reference palette.
pub fn dark_reference() -> &'static GoldenPalette {
    static PALETTE: OnceLock<GoldenPalette> = OnceLock::new();
    PALETTE.get_or_init(|| {
        let whitepoint = d65();
        let lightness: Vec<f64> = LIGHTNESS_BASE[0..10].iter().map(|l| (l - 15.0).max(0.0)).collect();
        let chroma: Vec<f64> = CHROMA_SHAPE[0..10].iter().map(|s| s * 45.0).collect();
        build_palette(0.0, whitepoint, &lightness, &chroma)
    })
}

fn population_stddev<F: Fn(usize, usize) -> f64>(tone: usize, sample: F) -> f64 {
    let samples: Vec<f64> = (0..PALETTE_COUNT).map(|p| sample(tone, p)).collect();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let variance =
        samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Population standard deviation of each tone's lightness across the 20
/// golden palettes.
pub fn lightness_compensation() -> &'static [f64; 14] {
    static VEC: OnceLock<[f64; 14]> = OnceLock::new();
    VEC.get_or_init(|| {
        let mut out = [0.0; 14];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = population_stddev(i, lightness_sample);
        }
        out
    })
}

/// Population standard deviation of each tone's chroma across the 20
/// golden palettes.
pub fn chroma_compensation() -> &'static [f64; 14] {
    static VEC: OnceLock<[f64; 14]> = OnceLock::new();
    VEC.get_or_init(|| {
        let mut out = [0.0; 14];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = population_stddev(i, chroma_sample);
        }
        out
    })
}

/// Chroma compensation for the light 10-tone reference: the first 10 entries
/// of [`chroma_compensation`], since the light reference has no independent
/// hue family to sample variance from.
pub fn chroma_compensation_light() -> [f64; 10] {
    let full = chroma_compensation();
    let mut out = [0.0; 10];
    out.copy_from_slice(&full[0..10]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_palettes_of_fourteen_tones() {
        let palettes = golden_palettes();
        assert_eq!(palettes.len(), 20);
        for p in palettes {
            assert_eq!(p.colors.len(), 14);
        }
    }

    #[test]
    fn compensation_vectors_are_nonzero() {
        for &v in lightness_compensation() {
            assert!(v > 0.0);
        }
        for &v in chroma_compensation() {
            assert!(v > 0.0);
        }
    }

    #[test]
    fn light_and_dark_references_have_ten_tones() {
        assert_eq!(light_reference().colors.len(), 10);
        assert_eq!(dark_reference().colors.len(), 10);
    }

    #[test]
    fn dark_reference_is_darker_than_light_reference() {
        let light_mean: f64 =
            light_reference().colors.iter().map(|c| c.l).sum::<f64>() / 10.0;
        let dark_mean: f64 = dark_reference().colors.iter().map(|c| c.l).sum::<f64>() / 10.0;
        assert!(dark_mean < light_mean);
    }
}
