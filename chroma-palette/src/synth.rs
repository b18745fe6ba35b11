//! The palette synthesizer: given a seed color, reshapes the nearest golden
//! palette's tonal ramp around the seed in LCH(ab) space.

use chroma_core::color::lab::Lab;
use chroma_core::color::lch::LchAb;
use chroma_core::color::rgb::Rgb;
use chroma_core::difference::delta_e_2000;
use chroma_core::error::Error;
use chroma_core::numeric::wrap_degrees;
use chroma_core::space::SRGB;

use crate::golden::{reference_illuminant, GoldenPalette};

const LIGHTNESS_STEP: f64 = 1.7;
const MID_CHROMA_THRESHOLD: f64 = 30.0;
/// Tone index for the "500" slot, used to decide `midChromaFlag`.
const MID_CHROMA_TONE_INDEX: usize = 5;
const CHROMA_COMPENSATION_CAP: f64 = 1.25;

/// A synthesized palette: the seed's tone index and one RGB color per tone.
#[derive(Debug, Clone)]
pub struct ComputedPalette {
    /// Index into `colors` where the original seed color was placed
    /// unchanged.
    pub base_color_index: usize,
    /// One RGB color per tone, same length and order as the reference
    /// palette's tones.
    pub colors: Vec<Rgb>,
}

fn lab_to_rgb(lab: &Lab, alpha: f64) -> Result<Rgb, Error> {
    let xyz = lab.to_xyz();
    let rgb_vec = SRGB.to_rgb(xyz.as_vec3(), Some(reference_illuminant()))?;
    Ok(Rgb {
        r: rgb_vec.0[0],
        g: rgb_vec.0[1],
        b: rgb_vec.0[2],
        alpha,
        space: &SRGB,
    })
}

/// Finds `(paletteIndex, colorIndex)` minimizing ΔE2000 against `seed`,
/// breaking ties by first-encountered order.
fn nearest(palettes: &[GoldenPalette], seed: &Lab) -> (usize, usize) {
    let mut best = (0usize, 0usize);
    let mut best_delta = f64::INFINITY;
    for (pi, palette) in palettes.iter().enumerate() {
        for (ci, color) in palette.colors.iter().enumerate() {
            let delta = delta_e_2000(color, seed);
            if delta < best_delta {
                best_delta = delta;
                best = (pi, ci);
            }
        }
    }
    best
}

/// Runs the palette synthesis algorithm: parses `seed_hex`, finds the
/// nearest color across `palettes`, and reshapes that palette's tonal ramp
/// around the seed.
///
/// `lightness_compensation` and `chroma_compensation` must be at least as
/// long as each palette's `colors`.
pub fn create_palette(
    seed_hex: &str,
    palettes: &[GoldenPalette],
    lightness_compensation: &[f64],
    chroma_compensation: &[f64],
) -> Result<ComputedPalette, Error> {
    let seed_rgb = Rgb::from_hex(seed_hex)?;
    let seed_xyz = seed_rgb.to_xyz(Some(reference_illuminant()))?;
    let seed_lab = seed_xyz.to_lab();
    let seed_lch = seed_lab.to_lch();

    let (palette_index, i0) = nearest(palettes, &seed_lab);
    let palette = &palettes[palette_index];
    let n = palette.colors.len();

    let anchor = palette.colors[i0].to_lch();
    let delta_l = anchor.l - seed_lch.l;
    let delta_c = anchor.c - seed_lch.c;
    let delta_h = anchor.h - seed_lch.h;

    let mid_chroma_flag = palette
        .colors
        .get(MID_CHROMA_TONE_INDEX)
        .map(|c| c.to_lch().c < MID_CHROMA_THRESHOLD)
        .unwrap_or(false);

    let mut colors = vec![None; n];
    let mut max_lightness = 100.0_f64;

    for i in 0..n {
        if n == 14 && i == 10 {
            max_lightness = 100.0;
        }

        if i == i0 {
            colors[i] = Some(seed_rgb);
            max_lightness = (seed_lch.l - LIGHTNESS_STEP).max(0.0);
            continue;
        }

        let p = palette.colors[i].to_lch();

        let hue_p = wrap_degrees(p.h - delta_h);

        let lc_ratio = lightness_compensation[i] / lightness_compensation[i0];
        let lightness_p = (p.l - lc_ratio * delta_l).min(max_lightness).clamp(0.0, 100.0);

        let chroma_p = if mid_chroma_flag {
            p.c - delta_c
        } else {
            let cc_ratio = (chroma_compensation[i] / chroma_compensation[i0]).min(CHROMA_COMPENSATION_CAP);
            p.c - delta_c * cc_ratio
        }
        .max(0.0);

        let reference_alpha = palette.colors[i].alpha;
        let lab = LchAb::new(lightness_p, chroma_p, hue_p, reference_alpha, seed_lab.whitepoint).to_lab();
        colors[i] = Some(lab_to_rgb(&lab, reference_alpha)?);

        max_lightness = (lightness_p - LIGHTNESS_STEP).max(0.0);
    }

    Ok(ComputedPalette {
        base_color_index: i0,
        colors: colors.into_iter().map(|c| c.expect("every tone index visited")).collect(),
    })
}

/// `createColorPalette`: full 14-tone palette against the 20 golden
/// references.
pub fn create_color_palette(seed_hex: &str) -> Result<ComputedPalette, Error> {
    create_palette(
        seed_hex,
        crate::golden::golden_palettes(),
        crate::golden::lightness_compensation(),
        crate::golden::chroma_compensation(),
    )
}

/// `createLightPalette`: 10-tone palette against the single light reference.
pub fn create_light_palette(seed_hex: &str) -> Result<ComputedPalette, Error> {
    let reference = std::slice::from_ref(crate::golden::light_reference());
    let lc = &crate::golden::lightness_compensation()[0..10];
    let cc = crate::golden::chroma_compensation_light();
    create_palette(seed_hex, reference, lc, &cc)
}

/// `createDarkPalette`: 10-tone palette against the single dark reference.
pub fn create_dark_palette(seed_hex: &str) -> Result<ComputedPalette, Error> {
    let reference = std::slice::from_ref(crate::golden::dark_reference());
    let lc = &crate::golden::lightness_compensation()[0..10];
    let cc = &crate::golden::chroma_compensation()[0..10];
    create_palette(seed_hex, reference, lc, cc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_color_is_preserved_unchanged() {
        let result = create_color_palette("#3366CC").unwrap();
        let seed = Rgb::from_hex("#3366CC").unwrap();
        let base = result.colors[result.base_color_index];
        assert_eq!(base.to_values(), seed.to_values());
    }

    #[test]
    fn full_palette_has_fourteen_tones() {
        let result = create_color_palette("#3366CC").unwrap();
        assert_eq!(result.colors.len(), 14);
    }

    #[test]
    fn light_palette_has_ten_tones() {
        let result = create_light_palette("#3366CC").unwrap();
        assert_eq!(result.colors.len(), 10);
    }

    #[test]
    fn dark_palette_has_ten_tones() {
        let result = create_dark_palette("#3366CC").unwrap();
        assert_eq!(result.colors.len(), 10);
    }

    #[test]
    fn invalid_seed_hex_fails() {
        assert!(create_color_palette("#ZZZZZZ").is_err());
    }
}
