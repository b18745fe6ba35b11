//! Color difference (Delta E) formulas: CIE76, CIE94, CIEDE2000 and CMC
//! l:c, all operating on [`Lab`].

use crate::color::lab::Lab;
use crate::numeric::wrap_degrees;

/// CIE76: plain Euclidean distance in Lab space.
pub fn delta_e_1976(a: &Lab, b: &Lab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Application profile for CIE94, fixing its `K1`/`K2` weighting constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Application {
    /// `kL = 1`, `K1 = 0.045`, `K2 = 0.015`.
    GraphicArts,
    /// `kL = 2`, `K1 = 0.048`, `K2 = 0.014`.
    Textiles,
}

impl Application {
    fn constants(self) -> (f64, f64, f64) {
        match self {
            Application::GraphicArts => (1.0, 0.045, 0.015),
            Application::Textiles => (2.0, 0.048, 0.014),
        }
    }
}

/// CIE94 color difference.
pub fn delta_e_1994(a: &Lab, b: &Lab, application: Application) -> f64 {
    let (kl, k1, k2) = application.constants();
    let (kc, kh) = (1.0, 1.0);

    let c1 = (a.a * a.a + a.b * a.b).sqrt();
    let c2 = (b.a * b.a + b.b * b.b).sqrt();

    let dl = a.l - b.l;
    let dc = c1 - c2;
    let da = a.a - b.a;
    let db = a.b - b.b;
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sl = 1.0;
    let sc = 1.0 + k1 * c1;
    let sh = 1.0 + k2 * c1;

    let term_l = dl / (kl * sl);
    let term_c = dc / (kc * sc);
    let term_h_sq = dh_sq / (kh * sh).powi(2);

    (term_l * term_l + term_c * term_c + term_h_sq).sqrt()
}

/// CIEDE2000 color difference (Sharma's corrected formulation), the most
/// perceptually uniform of the Delta E family.
pub fn delta_e_2000(a: &Lab, b: &Lab) -> f64 {
    const KL: f64 = 1.0;
    const KC: f64 = 1.0;
    const KH: f64 = 1.0;

    let c1 = (a.a * a.a + a.b * a.b).sqrt();
    let c2 = (b.a * b.a + b.b * b.b).sqrt();
    let c_bar = (c1 + c2) / 2.0;

    let c_bar7 = c_bar.powi(7);
    const POW25_7: f64 = 6103515625.0; // 25^7
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = a.a * (1.0 + g);
    let a2p = b.a * (1.0 + g);

    let c1p = (a1p * a1p + a.b * a.b).sqrt();
    let c2p = (a2p * a2p + b.b * b.b).sqrt();

    let hp = |ap: f64, bp: f64| -> f64 {
        if ap == 0.0 && bp == 0.0 {
            0.0
        } else {
            wrap_degrees(bp.atan2(ap).to_degrees())
        }
    };
    let h1p = hp(a1p, a.b);
    let h2p = hp(a2p, b.b);

    let dlp = b.l - a.l;
    let dcp = c2p - c1p;

    // Both chromas vanishingly small: hue is undefined for either color, so
    // fold the whole hue term away rather than averaging noise.
    let low_chroma = c1p < 1e-4 && c2p < 1e-4;

    let dhp = if low_chroma {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let dhp_term = 2.0 * (c1p * c2p).sqrt() * (dhp.to_radians() / 2.0).sin();

    let l_bar_p = (a.l + b.l) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;

    let h_bar_p = if low_chroma {
        h1p + h2p
    } else {
        let sum = h1p + h2p;
        let diff = (h1p - h2p).abs();
        if diff <= 180.0 {
            sum / 2.0
        } else if sum < 360.0 {
            (sum + 360.0) / 2.0
        } else {
            (sum - 360.0) / 2.0
        }
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

    let d_theta = 30.0 * (-(((h_bar_p - 275.0) / 25.0).powi(2))).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let rc = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * d_theta.to_radians()).sin();

    let sl = 1.0 + (0.015 * (l_bar_p - 50.0).powi(2)) / (20.0 + (l_bar_p - 50.0).powi(2)).sqrt();
    let sc = 1.0 + 0.045 * c_bar_p;
    let sh = 1.0 + 0.015 * c_bar_p * t;

    let term_l = dlp / (KL * sl);
    let term_c = dcp / (KC * sc);
    let term_h = dhp_term / (KH * sh);

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h).sqrt()
}

/// CMC l:c color difference (defaults `l = 2`, `c = 1`).
pub fn delta_e_cmc(a: &Lab, b: &Lab, l: f64, c: f64) -> f64 {
    let c1 = (a.a * a.a + a.b * a.b).sqrt();
    let c2 = (b.a * b.a + b.b * b.b).sqrt();

    let dl = a.l - b.l;
    let dc = c1 - c2;
    let da = a.a - b.a;
    let db = a.b - b.b;
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sl = if a.l < 16.0 {
        0.511
    } else {
        (0.040975 * a.l) / (1.0 + 0.01765 * a.l)
    };
    let sc = (0.0638 * c1) / (1.0 + 0.0131 * c1) + 0.638;

    let h1 = wrap_degrees(a.b.atan2(a.a).to_degrees());
    let f = (c1.powi(4) / (c1.powi(4) + 1900.0)).sqrt();
    let t = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };
    let sh = sc * (f * t + 1.0 - f);

    let term_l = dl / (l * sl);
    let term_c = dc / (c * sc);
    let term_h_sq = dh_sq / (sh * sh);

    (term_l * term_l + term_c * term_c + term_h_sq).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Vec3;

    fn lab(l: f64, a: f64, b: f64) -> Lab {
        Lab::new(l, a, b, 1.0, Vec3([0.95047, 1.0, 1.08883]))
    }

    #[test]
    fn identical_colors_have_zero_difference() {
        let c = lab(50.0, 10.0, -10.0);
        assert_eq!(delta_e_1976(&c, &c), 0.0);
        assert_eq!(delta_e_2000(&c, &c), 0.0);
    }

    #[test]
    fn ciede2000_matches_known_test_vector() {
        let a = lab(100.0, 0.0, 10.0);
        let b = lab(100.0, 0.1, -127.5);
        let got = delta_e_2000(&a, &b);
        assert!((got - 41.69699725982907).abs() < 1e-8, "got {got}");
    }

    #[test]
    fn cie94_defaults_match_cie76_for_identical_chroma() {
        let c = lab(60.0, 5.0, 5.0);
        assert_eq!(delta_e_1994(&c, &c, Application::GraphicArts), 0.0);
    }

    #[test]
    fn cmc_is_symmetric_only_via_chroma_of_the_first_color() {
        let a = lab(50.0, 20.0, 0.0);
        let b = lab(55.0, 22.0, 2.0);
        let forward = delta_e_cmc(&a, &b, 2.0, 1.0);
        assert!(forward > 0.0);
    }
}
