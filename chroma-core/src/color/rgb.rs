//! sRGB-family RGB color, hex/CSS text forms, and conversions into the
//! other polar color models.

use crate::adaptation::IlluminantRef;
use crate::color::hsi::Hsi;
use crate::color::hsl::Hsl;
use crate::color::hsv::Hsv;
use crate::color::hwb::Hwb;
use crate::color::lab::Lab;
use crate::color::lch::{LchAb, LchUv};
use crate::color::luv::Luv;
use crate::color::xyz::Xyz;
use crate::error::Error;
use crate::matrix::Vec3;
use crate::numeric::{clamp, hex_to_dec, wrap_degrees};
use crate::space::{self, RgbSpace, SRGB};

/// sRGB-family color. Components are normalized to `[0, 1]`.
#[derive(Clone, Copy)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
    /// The working space this color's components are gamma-encoded under.
    pub space: &'static RgbSpace,
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rgb")
            .field("r", &self.r)
            .field("g", &self.g)
            .field("b", &self.b)
            .field("alpha", &self.alpha)
            .field("space", &self.space.name)
            .finish()
    }
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r
            && self.g == other.g
            && self.b == other.b
            && self.alpha == other.alpha
            && self.space.name == other.space.name
    }
}

impl Rgb {
    /// Constructs an RGB color in `space`, rejecting any channel `> 1.0`.
    pub fn new(r: f64, g: f64, b: f64, alpha: f64, space: &'static RgbSpace) -> Result<Rgb, Error> {
        for (name, v) in [("r", r), ("g", g), ("b", b)] {
            if v > 1.0 {
                return Err(Error::InputDomain(format!(
                    "RGB channel '{name}' = {v} exceeds 1.0"
                )));
            }
        }
        Ok(Rgb {
            r,
            g,
            b,
            alpha,
            space,
        })
    }

    /// Constructs an sRGB color from 8-bit integer channels.
    pub fn from_u8(r: u8, g: u8, b: u8, alpha: f64) -> Rgb {
        Rgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            alpha,
            space: &SRGB,
        }
    }

    /// Returns `(r, g, b, alpha)` quantized to 8-bit integer channels, alpha
    /// left as a float.
    pub fn to_values(&self) -> (u8, u8, u8, f64) {
        let to_u8 = |v: f64| (clamp(v, 0.0, 1.0) * 255.0).round() as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b), self.alpha)
    }

    /// Parses a `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` hex string into an
    /// sRGB color. Three/four-digit forms expand each digit by duplication.
    pub fn from_hex(s: &str) -> Result<Rgb, Error> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InputDomain(format!(
                "'{s}' is not a valid hex color"
            )));
        }

        let expand = |pair: &str| -> Result<u8, Error> {
            hex_to_dec(pair).ok_or_else(|| Error::InputDomain(format!("'{s}' is not a valid hex color")))
        };

        let (r, g, b, a) = match digits.len() {
            3 => {
                let dup = |c: char| format!("{c}{c}");
                (
                    expand(&dup(digits.as_bytes()[0] as char))?,
                    expand(&dup(digits.as_bytes()[1] as char))?,
                    expand(&dup(digits.as_bytes()[2] as char))?,
                    255u8,
                )
            }
            4 => {
                let dup = |c: char| format!("{c}{c}");
                (
                    expand(&dup(digits.as_bytes()[0] as char))?,
                    expand(&dup(digits.as_bytes()[1] as char))?,
                    expand(&dup(digits.as_bytes()[2] as char))?,
                    expand(&dup(digits.as_bytes()[3] as char))?,
                )
            }
            6 => (
                expand(&digits[0..2])?,
                expand(&digits[2..4])?,
                expand(&digits[4..6])?,
                255u8,
            ),
            8 => (
                expand(&digits[0..2])?,
                expand(&digits[2..4])?,
                expand(&digits[4..6])?,
                expand(&digits[6..8])?,
            ),
            _ => {
                return Err(Error::InputDomain(format!(
                    "'{s}' has an invalid hex color length"
                )))
            }
        };

        Ok(Rgb::from_u8(r, g, b, a as f64 / 255.0))
    }

    /// Renders as uppercase hex, omitting the alpha pair when `alpha == 1`.
    pub fn to_hex(&self) -> String {
        let (r, g, b, alpha) = self.to_values();
        if alpha >= 1.0 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            let a = (clamp(alpha, 0.0, 1.0) * 255.0).round() as u8;
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Renders as a CSS `rgba(r, g, b, a)` function.
    pub fn to_css(&self) -> String {
        let (r, g, b, alpha) = self.to_values();
        format!("rgba({r}, {g}, {b}, {alpha})")
    }

    fn triplet(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// Converts to HSV.
    pub fn to_hsv(&self) -> Hsv {
        let (r, g, b) = self.triplet();
        Hsv::from_rgb_triplet(r, g, b, self.alpha)
    }

    /// Converts to HSL.
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.triplet();
        Hsl::from_rgb_triplet(r, g, b, self.alpha)
    }

    /// Converts to HSI.
    pub fn to_hsi(&self) -> Hsi {
        let (r, g, b) = self.triplet();
        Hsi::from_rgb_triplet(r, g, b, self.alpha)
    }

    /// Converts to HWB.
    pub fn to_hwb(&self) -> Hwb {
        let (r, g, b) = self.triplet();
        Hwb::from_rgb_triplet(r, g, b, self.alpha)
    }

    /// Converts to Lab via this color's working space, under D65.
    pub fn to_lab(&self) -> Result<Lab, Error> {
        Ok(self.to_xyz(None)?.to_lab())
    }

    /// Converts to the polar LCH(ab) representation via Lab.
    pub fn to_lchab(&self) -> Result<LchAb, Error> {
        Ok(self.to_lab()?.to_lch())
    }

    /// Converts to Luv via this color's working space, under D65.
    pub fn to_luv(&self) -> Result<Luv, Error> {
        Ok(Luv::from_xyz(&self.to_xyz(None)?))
    }

    /// Converts to the polar LCH(uv) representation via Luv.
    pub fn to_lchuv(&self) -> Result<LchUv, Error> {
        Ok(self.to_luv()?.to_lch())
    }

    /// Renders as a CSS `hsla(h, s%, l%, a)` function.
    pub fn to_css_hsl(&self) -> String {
        self.to_hsl().to_css()
    }

    /// Converts from HSV, in `space`.
    pub fn from_hsv(hsv: &Hsv, space: &'static RgbSpace) -> Rgb {
        let (r, g, b) = hsv.to_rgb_triplet();
        Rgb {
            r,
            g,
            b,
            alpha: hsv.alpha,
            space,
        }
    }

    /// Converts from HSL, in `space`.
    pub fn from_hsl(hsl: &Hsl, space: &'static RgbSpace) -> Rgb {
        let (r, g, b) = hsl.to_rgb_triplet();
        Rgb {
            r,
            g,
            b,
            alpha: hsl.alpha,
            space,
        }
    }

    /// Converts from HSI, in `space`.
    pub fn from_hsi(hsi: &Hsi, space: &'static RgbSpace) -> Rgb {
        let (r, g, b) = hsi.to_rgb_triplet();
        Rgb {
            r,
            g,
            b,
            alpha: hsi.alpha,
            space,
        }
    }

    /// Converts from HWB, in `space`.
    pub fn from_hwb(hwb: &Hwb, space: &'static RgbSpace) -> Rgb {
        let (r, g, b) = hwb.to_rgb_triplet();
        Rgb {
            r,
            g,
            b,
            alpha: hwb.alpha,
            space,
        }
    }

    /// Constructs an sRGB color from hue in degrees and percent-valued
    /// saturation/value, the form the picker UI hands across the boundary.
    pub fn from_hsv_percent(h: f64, s_pct: f64, v_pct: f64, alpha: f64) -> Rgb {
        let hsv = Hsv::new(h, s_pct / 100.0, v_pct / 100.0, alpha);
        Rgb::from_hsv(&hsv, &SRGB)
    }

    /// Constructs an sRGB color from hue in degrees and percent-valued
    /// saturation/lightness, the form the picker UI hands across the
    /// boundary.
    pub fn from_hsl_percent(h: f64, s_pct: f64, l_pct: f64, alpha: f64) -> Rgb {
        let hsl = Hsl::new(h, s_pct / 100.0, l_pct / 100.0, alpha);
        Rgb::from_hsl(&hsl, &SRGB)
    }

    /// Converts to XYZ through this color's working space, optionally
    /// chromatically adapting into `dst_illuminant`.
    pub fn to_xyz(&self, dst_illuminant: Option<IlluminantRef>) -> Result<Xyz, Error> {
        let xyz = self
            .space
            .to_xyz(Vec3([self.r, self.g, self.b]), dst_illuminant)?;
        let whitepoint_illuminant = dst_illuminant.unwrap_or(self.space.illuminant);
        let whitepoint = crate::illuminant::get_whitepoint(crate::illuminant::WhitepointQuery {
            illuminant: Some(whitepoint_illuminant.illuminant),
            observer: whitepoint_illuminant.observer,
            ..Default::default()
        })?;
        Ok(Xyz::new(xyz.0[0], xyz.0[1], xyz.0[2], self.alpha, whitepoint))
    }

    /// Reinterprets this color's channels under `dst` space (same
    /// chromatic adaptation method as [`RgbSpace::to_rgb_space`]).
    pub fn to_rgb_space(&self, dst: &'static RgbSpace, method: &str) -> Result<Rgb, Error> {
        if dst.name == self.space.name {
            return Ok(*self);
        }
        let linear = Vec3([
            (self.space.transfer.to_linear)(self.r),
            (self.space.transfer.to_linear)(self.g),
            (self.space.transfer.to_linear)(self.b),
        ]);
        let converted = self.space.to_rgb_space(linear, dst, method)?;
        let gamma = Vec3([
            (dst.transfer.to_gamma)(converted.0[0]),
            (dst.transfer.to_gamma)(converted.0[1]),
            (dst.transfer.to_gamma)(converted.0[2]),
        ]);
        Ok(Rgb {
            r: clamp(gamma.0[0], 0.0, 1.0),
            g: clamp(gamma.0[1], 0.0, 1.0),
            b: clamp(gamma.0[2], 0.0, 1.0),
            alpha: self.alpha,
            space: dst,
        })
    }

    /// Rotates hue by `degrees` through HSL, preserving saturation and
    /// lightness.
    pub fn rotate_hue(&self, degrees: f64) -> Rgb {
        let hsl = self.to_hsl();
        let rotated = Hsl::new(wrap_degrees(hsl.h + degrees), hsl.s, hsl.l, hsl.alpha);
        Rgb::from_hsl(&rotated, self.space)
    }

    /// Looks up a registered space by name and reinterprets this color's hex
    /// form under that space (no chromatic adaptation).
    pub fn with_space(&self, name: &str) -> Result<Rgb, Error> {
        let target = space::space(name)?;
        Ok(Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
            alpha: self.alpha,
            space: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_six_digit() {
        let rgb = Rgb::from_hex("#1A2B3C").unwrap();
        assert_eq!(rgb.to_hex(), "#1A2B3C");
    }

    #[test]
    fn hex_expands_three_digit() {
        let rgb = Rgb::from_hex("#ABC").unwrap();
        assert_eq!(rgb.to_hex(), "#AABBCC");
    }

    #[test]
    fn hex_with_alpha_round_trips() {
        let rgb = Rgb::from_hex("#FF0000E6").unwrap();
        let hex = rgb.to_hex();
        assert_eq!(hex, "#FF0000E6");
    }

    #[test]
    fn opaque_hex_drops_alpha_pair() {
        let rgb = Rgb::from_hex("#FF0000FF").unwrap();
        assert_eq!(rgb.to_hex(), "#FF0000");
    }

    #[test]
    fn invalid_hex_fails() {
        assert!(Rgb::from_hex("#ZZZ").is_err());
        assert!(Rgb::from_hex("#12345").is_err());
    }

    #[test]
    fn to_css_formats_rgba() {
        let rgb = Rgb::from_u8(255, 0, 0, 0.9);
        assert_eq!(rgb.to_css(), "rgba(255, 0, 0, 0.9)");
    }

    #[test]
    fn rejects_component_over_one() {
        assert!(Rgb::new(1.1, 0.0, 0.0, 1.0, &SRGB).is_err());
    }

    #[test]
    fn hsv_round_trip() {
        let rgb = Rgb::from_u8(10, 200, 50, 1.0);
        let hsv = rgb.to_hsv();
        let back = Rgb::from_hsv(&hsv, &SRGB);
        assert!((back.r - rgb.r).abs() < 1e-9);
        assert!((back.g - rgb.g).abs() < 1e-9);
        assert!((back.b - rgb.b).abs() < 1e-9);
    }

    #[test]
    fn aa88ee_matches_worked_xyz() {
        let rgb = Rgb::from_hex("#aa88ee").unwrap();
        let xyz = rgb.to_xyz(None).unwrap();
        assert!((xyz.x - 0.408106).abs() < 1e-5);
        assert!((xyz.y - 0.323270).abs() < 1e-5);
        assert!((xyz.z - 0.849620).abs() < 1e-5);
    }

    #[test]
    fn to_css_hsl_matches_worked_example() {
        let rgb = Rgb::new(0.2, 0.3, 0.5, 1.0, &SRGB).unwrap();
        assert_eq!(rgb.to_css_hsl(), "hsla(220, 43%, 35%, 1)");
    }

    #[test]
    fn percent_hsv_matches_fractional() {
        let a = Rgb::from_hsv_percent(210.0, 50.0, 80.0, 1.0);
        let b = Rgb::from_hsv(&Hsv::new(210.0, 0.5, 0.8, 1.0), &SRGB);
        assert_eq!(a, b);
    }

    #[test]
    fn to_lab_to_lchab_to_luv_succeed() {
        let rgb = Rgb::from_hex("#FFFFFF").unwrap();
        let lab = rgb.to_lab().unwrap();
        assert!((lab.l - 100.0).abs() < 1e-4);
        let lch = rgb.to_lchab().unwrap();
        assert!(lch.c.abs() < 1e-4);
        let luv = rgb.to_luv().unwrap();
        assert!((luv.l - 100.0).abs() < 1e-4);
    }
}
