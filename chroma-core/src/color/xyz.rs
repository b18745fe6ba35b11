//! CIE XYZ tristimulus values, the hub of the color model conversion DAG.

use crate::color::lab::Lab;
use crate::color::yxy::Yxy;
use crate::illuminant::{Illuminant, Observer, WhitepointQuery};
use crate::matrix::Vec3;

/// CIE XYZ tristimulus, normalized so the reference white has `Y = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus value.
    pub x: f64,
    /// Y tristimulus value (luminance).
    pub y: f64,
    /// Z tristimulus value.
    pub z: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
    /// Reference whitepoint tristimulus this color is anchored to.
    pub whitepoint: Vec3,
}

impl Xyz {
    /// Constructs an XYZ color under the given whitepoint.
    pub fn new(x: f64, y: f64, z: f64, alpha: f64, whitepoint: Vec3) -> Self {
        Xyz {
            x,
            y,
            z,
            alpha,
            whitepoint,
        }
    }

    /// Constructs an XYZ color under the D65 whitepoint (2-degree observer),
    /// the common default for sRGB-anchored work.
    pub fn new_d65(x: f64, y: f64, z: f64, alpha: f64) -> Self {
        let wp = crate::illuminant::get_whitepoint(WhitepointQuery {
            illuminant: Some(Illuminant::D65),
            observer: Observer::Two,
            ..Default::default()
        })
        .expect("D65 is always resolvable");
        Xyz::new(x, y, z, alpha, wp)
    }

    /// As a raw tristimulus [`Vec3`] (drops alpha and whitepoint).
    pub fn as_vec3(&self) -> Vec3 {
        Vec3([self.x, self.y, self.z])
    }

    /// Converts to [`Yxy`] chromaticity coordinates.
    pub fn to_yxy(&self) -> Yxy {
        let sum = self.x + self.y + self.z;
        let (x, y) = if sum == 0.0 {
            let wp = self.whitepoint.0;
            let wsum = wp[0] + wp[1] + wp[2];
            (wp[0] / wsum, wp[1] / wsum)
        } else {
            (self.x / sum, self.y / sum)
        };
        Yxy::new(self.y, x, y, self.alpha, self.whitepoint)
    }

    /// Converts to [`Lab`] using the CIE 2004 constants (`kappa = 24389/27`,
    /// `epsilon = 216/24389`).
    pub fn to_lab(&self) -> Lab {
        const EPSILON: f64 = 216.0 / 24389.0;
        const KAPPA: f64 = 24389.0 / 27.0;

        let f = |t: f64| -> f64 {
            if t > EPSILON {
                t.cbrt()
            } else {
                (KAPPA * t + 16.0) / 116.0
            }
        };

        let wp = self.whitepoint.0;
        let fx = f(self.x / wp[0]);
        let fy = f(self.y / wp[1]);
        let fz = f(self.z / wp[2]);

        Lab::new(
            116.0 * fy - 16.0,
            500.0 * (fx - fy),
            200.0 * (fy - fz),
            self.alpha,
            self.whitepoint,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn yxy_round_trip() {
        let xyz = Xyz::new_d65(0.4, 0.3, 0.2, 1.0);
        let yxy = xyz.to_yxy();
        let back = yxy.to_xyz();
        assert_relative_eq!(back.x, xyz.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, xyz.y, epsilon = 1e-9);
        assert_relative_eq!(back.z, xyz.z, epsilon = 1e-9);
    }

    #[test]
    fn white_is_lab_100_0_0() {
        let wp = Xyz::new_d65(0.0, 0.0, 0.0, 1.0).whitepoint;
        let white = Xyz::new(wp.0[0], wp.0[1], wp.0[2], 1.0, wp);
        let lab = white.to_lab();
        assert!((lab.l - 100.0).abs() < 1e-9);
        assert!(lab.a.abs() < 1e-9);
        assert!(lab.b.abs() < 1e-9);
    }
}
