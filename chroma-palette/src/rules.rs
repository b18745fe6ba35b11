//! Harmony rules: hue-rotated sequences of full palettes built from one
//! seed color.

use chroma_core::color::rgb::Rgb;
use chroma_core::error::Error;

use crate::synth::{create_color_palette, ComputedPalette};

/// A named harmony rule, mapping to a set of hue offsets (in degrees) added
/// to the seed's hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// No additional hues.
    Mono,
    /// One palette at `+180`.
    Complementary,
    /// Two palettes at `+150` and `-150`.
    SplitComplementary,
    /// Two palettes at `+30` and `-30`.
    Analogous,
    /// Two palettes at `+120` and `-120`.
    Triadic,
    /// Three palettes at `+90`, `+180`, `+270`.
    Tetradic,
}

impl Rule {
    /// Parses a rule name, case-sensitively matching the external names used
    /// by the picker UI. Returns `None` for unknown names, in which case the
    /// caller should fall back to [`Rule::Mono`] (the base palette alone).
    pub fn from_name(name: &str) -> Option<Rule> {
        match name {
            "mono" => Some(Rule::Mono),
            "complementary" => Some(Rule::Complementary),
            "splitComplementary" => Some(Rule::SplitComplementary),
            "analogous" => Some(Rule::Analogous),
            "triadic" => Some(Rule::Triadic),
            "tetradic" => Some(Rule::Tetradic),
            _ => None,
        }
    }

    /// The hue offsets (degrees) this rule adds to the seed's hue, in order.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Rule::Mono => &[],
            Rule::Complementary => &[180.0],
            Rule::SplitComplementary => &[150.0, -150.0],
            Rule::Analogous => &[30.0, -30.0],
            Rule::Triadic => &[120.0, -120.0],
            Rule::Tetradic => &[90.0, 180.0, 270.0],
        }
    }
}

/// Produces the base palette first, then one palette per hue offset, each
/// built from the seed rotated in HSL by that offset. An unrecognized
/// `rule_name` yields the base palette alone.
pub fn create_color_palettes_by_rule(
    seed_hex: &str,
    rule_name: &str,
) -> Result<Vec<ComputedPalette>, Error> {
    let rule = Rule::from_name(rule_name).unwrap_or(Rule::Mono);

    let mut palettes = vec![create_color_palette(seed_hex)?];

    if !rule.offsets().is_empty() {
        let seed = Rgb::from_hex(seed_hex)?;
        for &offset in rule.offsets() {
            let rotated = seed.rotate_hue(offset);
            palettes.push(create_color_palette(&rotated.to_hex())?);
        }
    }

    Ok(palettes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_yields_a_single_palette() {
        let palettes = create_color_palettes_by_rule("#3366CC", "mono").unwrap();
        assert_eq!(palettes.len(), 1);
    }

    #[test]
    fn complementary_yields_two_palettes() {
        let palettes = create_color_palettes_by_rule("#3366CC", "complementary").unwrap();
        assert_eq!(palettes.len(), 2);
    }

    #[test]
    fn tetradic_yields_four_palettes() {
        let palettes = create_color_palettes_by_rule("#3366CC", "tetradic").unwrap();
        assert_eq!(palettes.len(), 4);
    }

    #[test]
    fn unknown_rule_falls_back_to_base_palette() {
        let palettes = create_color_palettes_by_rule("#3366CC", "not-a-rule").unwrap();
        assert_eq!(palettes.len(), 1);
    }

    #[test]
    fn rule_names_round_trip() {
        assert_eq!(Rule::from_name("splitComplementary"), Some(Rule::SplitComplementary));
        assert_eq!(Rule::from_name("nonsense"), None);
    }

    #[test]
    fn tetradic_worked_example_preserves_seed_in_first_palette() {
        let palettes = create_color_palettes_by_rule("#2b949e", "tetradic").unwrap();
        assert_eq!(palettes.len(), 4);
        for palette in &palettes {
            assert_eq!(palette.colors.len(), 14);
        }
        let first = &palettes[0];
        assert_eq!(
            first.colors[first.base_color_index].to_hex(),
            "#2B949E"
        );
    }
}
