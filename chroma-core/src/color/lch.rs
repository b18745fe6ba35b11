//! Polar forms of Lab and Luv: LCH(ab) and LCH(uv).

use crate::color::lab::Lab;
use crate::color::luv::Luv;
use crate::matrix::Vec3;
use crate::numeric::wrap_degrees;

/// Polar form of CIE L*a*b*: lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchAb {
    /// Lightness, shared with Lab.
    pub l: f64,
    /// Chroma, `c >= 0`.
    pub c: f64,
    /// Hue angle in degrees, `h in [0, 360)`.
    pub h: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
    /// Reference whitepoint tristimulus.
    pub whitepoint: Vec3,
}

impl LchAb {
    /// Constructs an LCH(ab) color.
    pub fn new(l: f64, c: f64, h: f64, alpha: f64, whitepoint: Vec3) -> Self {
        LchAb {
            l,
            c,
            h: wrap_degrees(h),
            alpha,
            whitepoint,
        }
    }

    /// Converts back to Cartesian Lab.
    pub fn to_lab(&self) -> Lab {
        let rad = self.h.to_radians();
        Lab::new(
            self.l,
            self.c * rad.cos(),
            self.c * rad.sin(),
            self.alpha,
            self.whitepoint,
        )
    }

    /// Rotates the hue by `degrees`, wrapping into `[0, 360)`.
    pub fn rotate_hue(&self, degrees: f64) -> LchAb {
        LchAb::new(self.l, self.c, self.h + degrees, self.alpha, self.whitepoint)
    }
}

/// Polar form of CIE L*u*v*: lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchUv {
    /// Lightness, shared with Luv.
    pub l: f64,
    /// Chroma, `c >= 0`.
    pub c: f64,
    /// Hue angle in degrees, `h in [0, 360)`.
    pub h: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
    /// Reference whitepoint tristimulus.
    pub whitepoint: Vec3,
}

impl LchUv {
    /// Constructs an LCH(uv) color.
    pub fn new(l: f64, c: f64, h: f64, alpha: f64, whitepoint: Vec3) -> Self {
        LchUv {
            l,
            c,
            h: wrap_degrees(h),
            alpha,
            whitepoint,
        }
    }

    /// Converts back to Cartesian Luv.
    pub fn to_luv(&self) -> Luv {
        let rad = self.h.to_radians();
        Luv::new(
            self.l,
            self.c * rad.cos(),
            self.c * rad.sin(),
            self.alpha,
            self.whitepoint,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lab_lch_round_trip() {
        let lab = Lab::new(
            60.0,
            20.0,
            -30.0,
            1.0,
            crate::color::xyz::Xyz::new_d65(0.0, 0.0, 0.0, 1.0).whitepoint,
        );
        let lch = lab.to_lch();
        let back = lch.to_lab();
        assert!((back.a - lab.a).abs() < 1e-9);
        assert!((back.b - lab.b).abs() < 1e-9);
    }

    #[test]
    fn hue_wraps_on_rotation() {
        let lch = LchAb::new(
            50.0,
            10.0,
            350.0,
            1.0,
            crate::color::xyz::Xyz::new_d65(0.0, 0.0, 0.0, 1.0).whitepoint,
        );
        let rotated = lch.rotate_hue(20.0);
        assert!((rotated.h - 10.0).abs() < 1e-9);
    }
}
