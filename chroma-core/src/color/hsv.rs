//! HSV (hue, saturation, value).

use crate::numeric::wrap_degrees;

/// HSV color. Hue in degrees `[0, 360)`, saturation/value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value (brightness).
    pub v: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
}

impl Hsv {
    /// Constructs an HSV color, wrapping hue into `[0, 360)`.
    pub fn new(h: f64, s: f64, v: f64, alpha: f64) -> Self {
        Hsv {
            h: wrap_degrees(h),
            s,
            v,
            alpha,
        }
    }

    pub(crate) fn from_rgb_triplet(r: f64, g: f64, b: f64, alpha: f64) -> Hsv {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = hue_from_rgb(r, g, b, max, delta);
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv::new(h, s, max, alpha)
    }

    pub(crate) fn to_rgb_triplet(&self) -> (f64, f64, f64) {
        let c = self.v * self.s;
        let h_prime = self.h / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let m = self.v - c;
        let (r1, g1, b1) = sector(h_prime, c, x);
        (r1 + m, g1 + m, b1 + m)
    }
}

/// Standard RGB->hue formula, shared by HSV, HSL and HWB (hue depends only
/// on the chroma direction of the RGB triple, not on which polar model the
/// caller wants).
pub(crate) fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };
    wrap_degrees(h)
}

/// Maps a chroma/secondary-chroma pair onto the correct RGB sector for the
/// six 60-degree wedges of the hue wheel. Shared by HSV and HSL.
pub(crate) fn sector(h_prime: f64, c: f64, x: f64) -> (f64, f64, f64) {
    match h_prime.rem_euclid(6.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        let hsv = Hsv::from_rgb_triplet(0.5, 0.5, 0.5, 1.0);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
    }

    #[test]
    fn round_trips_red() {
        let hsv = Hsv::from_rgb_triplet(1.0, 0.0, 0.0, 1.0);
        let (r, g, b) = hsv.to_rgb_triplet();
        assert!((r - 1.0).abs() < 1e-9);
        assert!(g.abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }
}
