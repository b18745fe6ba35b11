//! Standard illuminant tables (CIE 1931 2-degree and CIE 1964 10-degree
//! supplementary observer) and whitepoint resolution.
//!
//! Tristimulus values follow ASTM E308; chromaticity coordinates follow the
//! CIE-published xy tables. Both are compile-time constants.

use std::fmt;

use crate::error::Error;
use crate::matrix::Vec3;

/// A standard CIE observer angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observer {
    /// CIE 1931 2-degree standard observer.
    Two,
    /// CIE 1964 10-degree supplementary observer.
    Ten,
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observer::Two => write!(f, "2\u{b0}"),
            Observer::Ten => write!(f, "10\u{b0}"),
        }
    }
}

/// A named standard illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Illuminant {
    A,
    B,
    C,
    D50,
    D55,
    D65,
    D75,
    E,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Illuminant::*;
        let s = match self {
            A => "A",
            B => "B",
            C => "C",
            D50 => "D50",
            D55 => "D55",
            D65 => "D65",
            D75 => "D75",
            E => "E",
            F1 => "F1",
            F2 => "F2",
            F3 => "F3",
            F4 => "F4",
            F5 => "F5",
            F6 => "F6",
            F7 => "F7",
            F8 => "F8",
            F9 => "F9",
            F10 => "F10",
            F11 => "F11",
            F12 => "F12",
        };
        s.fmt(f)
    }
}

impl Illuminant {
    const ALL: [Illuminant; 20] = {
        use Illuminant::*;
        [
            A, B, C, D50, D55, D65, D75, E, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
        ]
    };

    fn index(self) -> usize {
        Self::ALL.iter().position(|&i| i == self).unwrap()
    }
}

/// Resolution policy for turning an illuminant name into a whitepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitepointMethod {
    /// Direct table lookup of the ASTM E308 tristimulus values.
    AstmE308,
    /// Convert the xy chromaticity coordinates (looked up or supplied) to
    /// XYZ via IEC 61966-2-1.
    #[default]
    Iec61966,
}

/// Query describing how to resolve a whitepoint: by illuminant name, by
/// explicit xy chromaticity, or both (xy wins when both resolve via
/// `Iec61966`).
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitepointQuery {
    /// Illuminant name, required unless `xy` is supplied.
    pub illuminant: Option<Illuminant>,
    /// Observer angle; defaults to the 2-degree standard observer.
    pub observer: Observer,
    /// Explicit xy chromaticity coordinates, bypassing the table lookup.
    pub xy: Option<(f64, f64)>,
    /// Resolution policy.
    pub method: WhitepointMethod,
}

impl Default for Observer {
    fn default() -> Self {
        Observer::Two
    }
}

// xy chromaticity, CIE 2-degree observer, indexed as `Illuminant::ALL`.
#[rustfmt::skip]
const XY_2DEG: [(f64, f64); 20] = [
    (0.44757, 0.40745), // A
    (0.34842, 0.35161), // B
    (0.31006, 0.31616), // C
    (0.34567, 0.35850), // D50
    (0.33242, 0.34743), // D55
    (0.31270, 0.32900), // D65
    (0.29902, 0.31485), // D75
    (0.33333, 0.33333), // E
    (0.31310, 0.33727), // F1
    (0.37208, 0.37529), // F2
    (0.40910, 0.39430), // F3
    (0.44018, 0.40329), // F4
    (0.31379, 0.34531), // F5
    (0.37790, 0.38835), // F6
    (0.31292, 0.32933), // F7
    (0.34588, 0.35875), // F8
    (0.37417, 0.37281), // F9
    (0.34609, 0.35986), // F10
    (0.38052, 0.37713), // F11
    (0.43695, 0.40441), // F12
];

// xy chromaticity, CIE 10-degree observer, indexed as `Illuminant::ALL`.
#[rustfmt::skip]
const XY_10DEG: [(f64, f64); 20] = [
    (0.45117, 0.40594), // A
    (0.34980, 0.35270), // B
    (0.31039, 0.31905), // C
    (0.34773, 0.35952), // D50
    (0.33411, 0.34877), // D55
    (0.31382, 0.33100), // D65
    (0.29968, 0.31740), // D75
    (0.33333, 0.33333), // E
    (0.31811, 0.33559), // F1
    (0.37925, 0.36733), // F2
    (0.41761, 0.38324), // F3
    (0.44920, 0.39074), // F4
    (0.31975, 0.34246), // F5
    (0.38660, 0.37847), // F6
    (0.31569, 0.32960), // F7
    (0.34902, 0.35939), // F8
    (0.37829, 0.37045), // F9
    (0.35090, 0.35444), // F10
    (0.38541, 0.37123), // F11
    (0.44256, 0.39717), // F12
];

// ASTM E308 tristimulus, CIE 2-degree observer, Y normalized to 1.
#[rustfmt::skip]
const XYZ_2DEG: [(f64, f64, f64); 20] = [
    (1.09850, 1.0, 0.35585), // A
    (0.990927, 1.0, 0.85313), // B
    (0.98074, 1.0, 1.18232), // C
    (0.96422, 1.0, 0.82521), // D50
    (0.95682, 1.0, 0.92149), // D55
    (0.95047, 1.0, 1.08883), // D65
    (0.94972, 1.0, 1.22638), // D75
    (1.0, 1.0, 1.0), // E
    (0.92834, 1.0, 1.03665), // F1
    (0.99187, 1.0, 0.67395), // F2
    (1.03754, 1.0, 0.49861), // F3
    (1.09147, 1.0, 0.38813), // F4
    (0.90872, 1.0, 0.98723), // F5
    (0.97309, 1.0, 0.60191), // F6
    (0.95044, 1.0, 1.08755), // F7
    (0.96413, 1.0, 0.82333), // F8
    (1.00365, 1.0, 0.67868), // F9
    (0.96174, 1.0, 0.81712), // F10
    (1.00966, 1.0, 0.64370), // F11
    (1.08046, 1.0, 0.39228), // F12
];

// ASTM E308 tristimulus, CIE 10-degree observer, Y normalized to 1.
#[rustfmt::skip]
const XYZ_10DEG: [(f64, f64, f64); 20] = [
    (1.11144, 1.0, 0.35200), // A
    (0.99178, 1.0, 0.843493), // B
    (0.97285, 1.0, 1.16145), // C
    (0.96720, 1.0, 0.81427), // D50
    (0.95799, 1.0, 0.90926), // D55
    (0.94811, 1.0, 1.07304), // D65
    (0.94416, 1.0, 1.20641), // D75
    (1.0, 1.0, 1.0), // E
    (0.94791, 1.0, 1.03191), // F1
    (1.03280, 1.0, 0.69026), // F2
    (1.08968, 1.0, 0.51965), // F3
    (1.14961, 1.0, 0.40963), // F4
    (0.93369, 1.0, 0.98636), // F5
    (1.02148, 1.0, 0.62074), // F6
    (0.95792, 1.0, 1.07687), // F7
    (0.97115, 1.0, 0.81135), // F8
    (1.02116, 1.0, 0.67826), // F9
    (0.99001, 1.0, 0.83134), // F10
    (1.03866, 1.0, 0.65627), // F11
    (1.11428, 1.0, 0.40353), // F12
];

fn xy_table(observer: Observer) -> &'static [(f64, f64); 20] {
    match observer {
        Observer::Two => &XY_2DEG,
        Observer::Ten => &XY_10DEG,
    }
}

fn xyz_table(observer: Observer) -> &'static [(f64, f64, f64); 20] {
    match observer {
        Observer::Two => &XYZ_2DEG,
        Observer::Ten => &XYZ_10DEG,
    }
}

/// Looks up the xy chromaticity of `illuminant` under `observer`.
pub fn chromaticity(illuminant: Illuminant, observer: Observer) -> (f64, f64) {
    xy_table(observer)[illuminant.index()]
}

/// Converts xy chromaticity to XYZ tristimulus normalized to `Y = 1`, via
/// `X = x/y`, `Y = 1`, `Z = (1 - x - y)/y`.
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    Vec3([x / y, 1.0, (1.0 - x - y) / y])
}

/// Resolves a whitepoint according to `query`. Fails with
/// [`Error::InputDomain`] if the illuminant is unknown for the observer, or
/// if neither `illuminant` nor `xy` is supplied.
pub fn get_whitepoint(query: WhitepointQuery) -> Result<Vec3, Error> {
    match query.method {
        WhitepointMethod::AstmE308 => {
            let illuminant = query.illuminant.ok_or_else(|| {
                Error::InputDomain("ASTM E308 lookup requires an illuminant name".into())
            })?;
            let (x, y, z) = xyz_table(query.observer)[illuminant.index()];
            log::trace!(
                "resolved ASTM E308 whitepoint for {illuminant} @ {}",
                query.observer
            );
            Ok(Vec3([x, y, z]))
        }
        WhitepointMethod::Iec61966 => {
            if let Some((x, y)) = query.xy {
                return Ok(xy_to_xyz(x, y));
            }
            let illuminant = query.illuminant.ok_or_else(|| {
                Error::InputDomain("whitepoint query needs an illuminant or explicit xy".into())
            })?;
            let (x, y) = chromaticity(illuminant, query.observer);
            log::trace!(
                "resolved IEC 61966-2-1 whitepoint for {illuminant} @ {}",
                query.observer
            );
            Ok(xy_to_xyz(x, y))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d65_whitepoint_is_y_normalized() {
        let wp = get_whitepoint(WhitepointQuery {
            illuminant: Some(Illuminant::D65),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(wp.0[1], 1.0);
        assert!((wp.0[0] - 0.95047).abs() < 1e-3);
    }

    #[test]
    fn astm_e308_lookup_matches_table() {
        let wp = get_whitepoint(WhitepointQuery {
            illuminant: Some(Illuminant::D50),
            method: WhitepointMethod::AstmE308,
            ..Default::default()
        })
        .unwrap();
        assert!((wp.0[0] - 0.96422).abs() < 1e-6);
        assert!((wp.0[2] - 0.82521).abs() < 1e-6);
    }

    #[test]
    fn explicit_xy_bypasses_table() {
        let wp = get_whitepoint(WhitepointQuery {
            xy: Some((0.3457, 0.3585)),
            ..Default::default()
        })
        .unwrap();
        assert!((wp.0[0] - 0.3457 / 0.3585).abs() < 1e-9);
    }

    #[test]
    fn missing_illuminant_and_xy_fails() {
        assert!(get_whitepoint(WhitepointQuery::default()).is_err());
    }

    #[test]
    fn ten_degree_table_differs_from_two_degree() {
        let (x2, _) = chromaticity(Illuminant::D65, Observer::Two);
        let (x10, _) = chromaticity(Illuminant::D65, Observer::Ten);
        assert_ne!(x2, x10);
    }
}
