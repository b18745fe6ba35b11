//! HWB (hue, whiteness, blackness).
//!
//! Built directly on the hue wheel rather than round-tripping through HSV:
//! `C' = (1 - w - b) * C + w` applied to the pure-hue RGB triple, where `C`
//! is each channel of the fully saturated, full-value color at that hue.

use crate::color::hsv::{hue_from_rgb, sector};
use crate::numeric::wrap_degrees;

/// HWB color. Hue in degrees `[0, 360)`, whiteness/blackness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hwb {
    /// Hue in degrees.
    pub h: f64,
    /// Whiteness.
    pub w: f64,
    /// Blackness.
    pub b: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
}

impl Hwb {
    /// Constructs an HWB color, wrapping hue into `[0, 360)` and normalizing
    /// `w + b > 1` down to the `w + b == 1` gray edge.
    pub fn new(h: f64, w: f64, b: f64, alpha: f64) -> Self {
        let (w, b) = if w + b > 1.0 {
            let sum = w + b;
            (w / sum, b / sum)
        } else {
            (w, b)
        };
        Hwb {
            h: wrap_degrees(h),
            w,
            b,
            alpha,
        }
    }

    pub(crate) fn from_rgb_triplet(r: f64, g: f64, b: f64, alpha: f64) -> Hwb {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = hue_from_rgb(r, g, b, max, delta);
        Hwb::new(h, min, 1.0 - max, alpha)
    }

    pub(crate) fn to_rgb_triplet(&self) -> (f64, f64, f64) {
        if self.w + self.b >= 1.0 {
            let gray = self.w / (self.w + self.b);
            return (gray, gray, gray);
        }

        let h_prime = self.h / 60.0;
        let x = 1.0 - (h_prime % 2.0 - 1.0).abs();
        let (r1, g1, b1) = sector(h_prime, 1.0, x);

        let scale = 1.0 - self.w - self.b;
        (
            scale * r1 + self.w,
            scale * g1 + self.w,
            scale * b1 + self.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_red_has_zero_whiteness_and_blackness() {
        let hwb = Hwb::from_rgb_triplet(1.0, 0.0, 0.0, 1.0);
        assert!(hwb.w.abs() < 1e-9);
        assert!(hwb.b.abs() < 1e-9);
    }

    #[test]
    fn round_trips_red() {
        let hwb = Hwb::from_rgb_triplet(1.0, 0.0, 0.0, 1.0);
        let (r, g, b) = hwb.to_rgb_triplet();
        assert!((r - 1.0).abs() < 1e-9);
        assert!(g.abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }

    #[test]
    fn oversaturated_whiteness_plus_blackness_collapses_to_gray() {
        let hwb = Hwb::new(0.0, 0.7, 0.6, 1.0);
        assert!((hwb.w + hwb.b - 1.0).abs() < 1e-9);
        let (r, g, b) = hwb.to_rgb_triplet();
        assert!((r - g).abs() < 1e-9);
        assert!((g - b).abs() < 1e-9);
    }
}
