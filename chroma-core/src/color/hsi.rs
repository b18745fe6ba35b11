//! HSI (hue, saturation, intensity).

use crate::color::hsv::hue_from_rgb;
use crate::numeric::wrap_degrees;

/// HSI color. Hue in degrees `[0, 360)`, saturation/intensity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsi {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Intensity, the unweighted mean of the RGB components.
    pub i: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
}

impl Hsi {
    /// Constructs an HSI color, wrapping hue into `[0, 360)`.
    pub fn new(h: f64, s: f64, i: f64, alpha: f64) -> Self {
        Hsi {
            h: wrap_degrees(h),
            s,
            i,
            alpha,
        }
    }

    pub(crate) fn from_rgb_triplet(r: f64, g: f64, b: f64, alpha: f64) -> Hsi {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = hue_from_rgb(r, g, b, max, delta);
        let i = (r + g + b) / 3.0;
        let s = if i == 0.0 { 0.0 } else { 1.0 - min / i };

        Hsi::new(h, s, i, alpha)
    }

    pub(crate) fn to_rgb_triplet(&self) -> (f64, f64, f64) {
        let h = self.h.rem_euclid(360.0);
        let h_prime = h / 60.0;
        let z = 1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs();
        let c = (3.0 * self.i * self.s) / (1.0 + z);
        let x = c * z;

        let (r1, g1, b1) = match h_prime as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = self.i * (1.0 - self.s);
        (r1 + m, g1 + m, b1 + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_has_zero_saturation() {
        let hsi = Hsi::from_rgb_triplet(0.5, 0.5, 0.5, 1.0);
        assert_eq!(hsi.s, 0.0);
    }

    #[test]
    fn round_trips_red() {
        let hsi = Hsi::from_rgb_triplet(1.0, 0.0, 0.0, 1.0);
        let (r, g, b) = hsi.to_rgb_triplet();
        assert!((r - 1.0).abs() < 1e-9);
        assert!(g.abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }
}
