//! CIE L*a*b* and its polar form LCH(ab).

use crate::color::lch::LchAb;
use crate::color::xyz::Xyz;
use crate::matrix::Vec3;
use crate::numeric::wrap_degrees;

/// CIE L*a*b*. `L` may exceed 100 for HDR content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Perceptual lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
    /// Reference whitepoint tristimulus.
    pub whitepoint: Vec3,
}

impl Lab {
    /// Constructs a Lab color.
    pub fn new(l: f64, a: f64, b: f64, alpha: f64, whitepoint: Vec3) -> Self {
        Lab {
            l,
            a,
            b,
            alpha,
            whitepoint,
        }
    }

    /// Converts to XYZ, inverting the CIE 2004 piecewise cube-root mapping.
    pub fn to_xyz(&self) -> Xyz {
        const EPSILON: f64 = 216.0 / 24389.0;
        const KAPPA: f64 = 24389.0 / 27.0;

        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let fx3 = fx * fx * fx;
        let fz3 = fz * fz * fz;

        let xr = if fx3 > EPSILON {
            fx3
        } else {
            (116.0 * fx - 16.0) / KAPPA
        };
        let yr = if self.l > KAPPA * EPSILON {
            ((self.l + 16.0) / 116.0).powi(3)
        } else {
            self.l / KAPPA
        };
        let zr = if fz3 > EPSILON {
            fz3
        } else {
            (116.0 * fz - 16.0) / KAPPA
        };

        let wp = self.whitepoint.0;
        Xyz::new(
            xr * wp[0],
            yr * wp[1],
            zr * wp[2],
            self.alpha,
            self.whitepoint,
        )
    }

    /// Converts to the polar LCH(ab) representation.
    pub fn to_lch(&self) -> LchAb {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let h = wrap_degrees(self.b.atan2(self.a).to_degrees());
        LchAb::new(self.l, c, h, self.alpha, self.whitepoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb::Rgb;

    #[test]
    fn white_rgb_is_lab_100_0_0() {
        let rgb = Rgb::from_hex("#FFF").unwrap();
        let lab = rgb.to_xyz(None).unwrap().to_lab();
        assert!((lab.l - 100.0).abs() < 1e-4);
        assert!(lab.a.abs() < 1e-4);
        assert!(lab.b.abs() < 1e-4);
    }

    #[test]
    fn lab_xyz_round_trip() {
        let lab = Lab::new(
            53.2,
            40.1,
            -12.3,
            1.0,
            crate::color::xyz::Xyz::new_d65(0.0, 0.0, 0.0, 1.0).whitepoint,
        );
        let back = lab.to_xyz().to_lab();
        assert!((back.l - lab.l).abs() < 1e-6);
        assert!((back.a - lab.a).abs() < 1e-6);
        assert!((back.b - lab.b).abs() < 1e-6);
    }
}
