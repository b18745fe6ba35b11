//! HSL (hue, saturation, lightness).

use crate::color::hsv::{hue_from_rgb, sector};
use crate::numeric::wrap_degrees;

/// HSL color. Hue in degrees `[0, 360)`, saturation/lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
}

impl Hsl {
    /// Constructs an HSL color, wrapping hue into `[0, 360)`.
    pub fn new(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Hsl {
            h: wrap_degrees(h),
            s,
            l,
            alpha,
        }
    }

    pub(crate) fn from_rgb_triplet(r: f64, g: f64, b: f64, alpha: f64) -> Hsl {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = hue_from_rgb(r, g, b, max, delta);
        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl::new(h, s, l, alpha)
    }

    pub(crate) fn to_rgb_triplet(&self) -> (f64, f64, f64) {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let h_prime = self.h / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let m = self.l - c / 2.0;
        let (r1, g1, b1) = sector(h_prime, c, x);
        (r1 + m, g1 + m, b1 + m)
    }

    /// Renders as a CSS `hsla(h, s%, l%, a)` function, hue rounded to the
    /// nearest degree and saturation/lightness to the nearest percent.
    pub fn to_css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.h.round() as i64,
            (self.s * 100.0).round() as i64,
            (self.l * 100.0).round() as i64,
            self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_has_zero_saturation() {
        let hsl = Hsl::from_rgb_triplet(0.5, 0.5, 0.5, 1.0);
        assert_eq!(hsl.s, 0.0);
    }

    #[test]
    fn round_trips_red() {
        let hsl = Hsl::from_rgb_triplet(1.0, 0.0, 0.0, 1.0);
        let (r, g, b) = hsl.to_rgb_triplet();
        assert!((r - 1.0).abs() < 1e-9);
        assert!(g.abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }

    #[test]
    fn white_is_full_lightness() {
        let hsl = Hsl::from_rgb_triplet(1.0, 1.0, 1.0, 1.0);
        assert!((hsl.l - 1.0).abs() < 1e-9);
        assert_eq!(hsl.s, 0.0);
    }

    #[test]
    fn to_css_matches_worked_example() {
        let hsl = Hsl::from_rgb_triplet(0.2, 0.3, 0.5, 1.0);
        assert_eq!(hsl.to_css(), "hsla(220, 43%, 35%, 1)");
    }
}
