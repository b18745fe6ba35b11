//! The `ColorPalette` facade exposed to the picker UI: tone classification
//! and rule-based palette synthesis in one surface.

use chroma_core::color::rgb::Rgb;
use chroma_core::color::util::{is_light, DEFAULT_MIN_CONTRAST};
use chroma_core::error::Error;

use crate::golden::TONE_NAMES;
use crate::rules::create_color_palettes_by_rule;
use crate::synth::ComputedPalette;

/// Either a concrete color or an already-resolved tone name, accepted by
/// [`get_color_tone`].
pub enum ColorOrTone {
    /// A color to classify.
    Color(Rgb),
    /// A tone name to pass through and validate.
    Named(String),
}

/// `ColorPalette.getColorTone`: classifies `input` as `"light"` or
/// `"dark"`. Given an already-named tone, validates and passes it through.
pub fn get_color_tone(input: ColorOrTone) -> Result<&'static str, Error> {
    match input {
        ColorOrTone::Color(rgb) => {
            if is_light(&rgb, DEFAULT_MIN_CONTRAST) {
                Ok("light")
            } else {
                Ok("dark")
            }
        }
        ColorOrTone::Named(name) => match name.as_str() {
            "light" => Ok("light"),
            "dark" => Ok("dark"),
            other => Err(Error::InputDomain(format!(
                "'{other}' is not a valid tone name"
            ))),
        },
    }
}

/// `ColorPalette.getPaletteTone`: the tone name at `index` in the 14-entry
/// list (`50, 100, ..., A700`).
pub fn get_palette_tone(index: usize) -> Result<&'static str, Error> {
    TONE_NAMES
        .get(index)
        .copied()
        .ok_or_else(|| Error::InputDomain(format!("palette tone index {index} out of range")))
}

/// `ColorPalette.createColorPalettesByRule`.
pub fn create_color_palettes_by_rule_facade(
    seed_hex: &str,
    rule_name: &str,
) -> Result<Vec<ComputedPalette>, Error> {
    create_color_palettes_by_rule(seed_hex, rule_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_white_as_light() {
        let white = Rgb::from_u8(255, 255, 255, 1.0);
        assert_eq!(get_color_tone(ColorOrTone::Color(white)).unwrap(), "light");
    }

    #[test]
    fn classifies_black_as_dark() {
        let black = Rgb::from_u8(0, 0, 0, 1.0);
        assert_eq!(get_color_tone(ColorOrTone::Color(black)).unwrap(), "dark");
    }

    #[test]
    fn passes_through_named_tone() {
        assert_eq!(
            get_color_tone(ColorOrTone::Named("dark".into())).unwrap(),
            "dark"
        );
    }

    #[test]
    fn rejects_unknown_named_tone() {
        assert!(get_color_tone(ColorOrTone::Named("purple".into())).is_err());
    }

    #[test]
    fn palette_tone_by_index() {
        assert_eq!(get_palette_tone(0).unwrap(), "50");
        assert_eq!(get_palette_tone(13).unwrap(), "A700");
        assert!(get_palette_tone(14).is_err());
    }
}
