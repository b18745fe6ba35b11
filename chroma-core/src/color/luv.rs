//! CIE L*u*v*.

use crate::color::lch::LchUv;
use crate::color::xyz::Xyz;
use crate::matrix::Vec3;
use crate::numeric::wrap_degrees;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

fn uv_prime(xyz: (f64, f64, f64)) -> (f64, f64) {
    let (x, y, z) = xyz;
    let denom = x + 15.0 * y + 3.0 * z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

/// CIE L*u*v*. `L` may exceed 100 for HDR content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    /// Perceptual lightness, shared definition with Lab.
    pub l: f64,
    /// u* coordinate.
    pub u: f64,
    /// v* coordinate.
    pub v: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
    /// Reference whitepoint tristimulus.
    pub whitepoint: Vec3,
}

impl Luv {
    /// Constructs a Luv color.
    pub fn new(l: f64, u: f64, v: f64, alpha: f64, whitepoint: Vec3) -> Self {
        Luv {
            l,
            u,
            v,
            alpha,
            whitepoint,
        }
    }

    /// Converts XYZ to Luv via `u'`, `v'` derived from
    /// `(4X)/(X+15Y+3Z)` and `(9Y)/(X+15Y+3Z)`.
    pub fn from_xyz(xyz: &Xyz) -> Luv {
        let (u_p, v_p) = uv_prime((xyz.x, xyz.y, xyz.z));
        let wp = xyz.whitepoint.0;
        let (un_p, vn_p) = uv_prime((wp[0], wp[1], wp[2]));

        let yr = xyz.y / wp[1];
        let l = if yr > EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            KAPPA * yr
        };

        Luv::new(
            l,
            13.0 * l * (u_p - un_p),
            13.0 * l * (v_p - vn_p),
            xyz.alpha,
            xyz.whitepoint,
        )
    }

    /// Converts back to XYZ.
    pub fn to_xyz(&self) -> Xyz {
        if self.l == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0, self.alpha, self.whitepoint);
        }
        let wp = self.whitepoint.0;
        let (un_p, vn_p) = uv_prime((wp[0], wp[1], wp[2]));

        let u_p = self.u / (13.0 * self.l) + un_p;
        let v_p = self.v / (13.0 * self.l) + vn_p;

        let y = if self.l > 8.0 {
            wp[1] * ((self.l + 16.0) / 116.0).powi(3)
        } else {
            wp[1] * self.l / KAPPA
        };

        let x = y * 9.0 * u_p / (4.0 * v_p);
        let z = y * (12.0 - 3.0 * u_p - 20.0 * v_p) / (4.0 * v_p);

        Xyz::new(x, y, z, self.alpha, self.whitepoint)
    }

    /// Converts to the polar LCH(uv) representation.
    pub fn to_lch(&self) -> LchUv {
        let c = (self.u * self.u + self.v * self.v).sqrt();
        let h = wrap_degrees(self.v.atan2(self.u).to_degrees());
        LchUv::new(self.l, c, h, self.alpha, self.whitepoint)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::color::xyz::Xyz;

    #[test]
    fn luv_xyz_round_trip() {
        let xyz = Xyz::new_d65(0.41239, 0.21264, 0.01933, 1.0);
        let luv = Luv::from_xyz(&xyz);
        let back = luv.to_xyz();
        assert_relative_eq!(back.x, xyz.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, xyz.y, epsilon = 1e-6);
        assert_relative_eq!(back.z, xyz.z, epsilon = 1e-6);
    }
}
