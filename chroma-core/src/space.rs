//! Named RGB working spaces: primaries, reference whitepoint, transfer
//! functions (EOTF/OETF), and the lazily-derived RGB<->XYZ matrices.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::adaptation::{adapt, get_matrix, IlluminantRef};
use crate::error::Error;
use crate::illuminant::{xy_to_xyz, Illuminant, Observer};
use crate::matrix::{Matrix3, Vec3};
use crate::numeric::clamp;

/// One EOTF/OETF pair. Both directions must be odd extensions across zero:
/// `sign(v) * f(|v|)` when the underlying formula is only defined for
/// non-negative inputs.
#[derive(Clone, Copy)]
pub struct TransferFunction {
    /// Electro-optical transfer function: gamma-encoded -> linear.
    pub to_linear: fn(f64) -> f64,
    /// Opto-electronic transfer function: linear -> gamma-encoded.
    pub to_gamma: fn(f64) -> f64,
}

fn odd(v: f64, f: impl Fn(f64) -> f64) -> f64 {
    v.signum() * f(v.abs())
}

const SRGB_TRANSFER: TransferFunction = TransferFunction {
    to_linear: |v| {
        odd(v, |a| {
            if a <= 0.04045 {
                a / 12.92
            } else {
                ((a + 0.055) / 1.055).powf(2.4)
            }
        })
    },
    to_gamma: |v| {
        odd(v, |a| {
            if a <= 0.0031308 {
                a * 12.92
            } else {
                1.055 * a.powf(1.0 / 2.4) - 0.055
            }
        })
    },
};

const REC2020_ALPHA: f64 = 1.09929682680944;
const REC2020_BETA: f64 = 0.018053968510807;

const REC2020_TRANSFER: TransferFunction = TransferFunction {
    to_linear: |v| {
        odd(v, |a| {
            if a < 4.5 * REC2020_BETA {
                a / 4.5
            } else {
                ((a + REC2020_ALPHA - 1.0) / REC2020_ALPHA).powf(1.0 / 0.45)
            }
        })
    },
    to_gamma: |v| {
        odd(v, |a| {
            if a < REC2020_BETA {
                4.5 * a
            } else {
                REC2020_ALPHA * a.powf(0.45) - (REC2020_ALPHA - 1.0)
            }
        })
    },
};

const REC709_ALPHA: f64 = 1.099;
const REC709_BETA: f64 = 0.018;

const REC709_TRANSFER: TransferFunction = TransferFunction {
    to_linear: |v| {
        odd(v, |a| {
            if a < 4.5 * REC709_BETA {
                a / 4.5
            } else {
                ((a + REC709_ALPHA - 1.0) / REC709_ALPHA).powf(1.0 / 0.45)
            }
        })
    },
    to_gamma: |v| {
        odd(v, |a| {
            if a < REC709_BETA {
                4.5 * a
            } else {
                REC709_ALPHA * a.powf(0.45) - (REC709_ALPHA - 1.0)
            }
        })
    },
};

const PROPHOTO_ET: f64 = 1.0 / 512.0;

const PROPHOTO_TRANSFER: TransferFunction = TransferFunction {
    to_linear: |v| {
        odd(v, |a| {
            if a < 16.0 * PROPHOTO_ET {
                a / 16.0
            } else {
                a.powf(1.8)
            }
        })
    },
    to_gamma: |v| {
        odd(v, |a| {
            if a < PROPHOTO_ET {
                16.0 * a
            } else {
                a.powf(1.0 / 1.8)
            }
        })
    },
};

const CIE_RGB_TRANSFER: TransferFunction = TransferFunction {
    to_linear: |v| odd(v, |a| a.powf(2.2)),
    to_gamma: |v| odd(v, |a| a.powf(1.0 / 2.2)),
};

const ADOBE_RGB_TRANSFER: TransferFunction = TransferFunction {
    to_linear: |v| odd(v, |a| a.powf(563.0 / 256.0)),
    to_gamma: |v| odd(v, |a| a.powf(256.0 / 563.0)),
};

/// Adobe Wide Gamut RGB also uses a pure power-law gamma of 2.2.
const WIDE_GAMUT_TRANSFER: TransferFunction = CIE_RGB_TRANSFER;

#[derive(Clone, Copy)]
struct RawMatrices {
    to_xyz: Matrix3,
    to_rgb: Matrix3,
}

/// A named RGB working space: primary chromaticities, reference whitepoint,
/// transfer functions, and a lazily-derived, memoized RGB<->XYZ matrix pair.
pub struct RgbSpace {
    /// The space's registry name (`"srgb"`, `"display-p3"`, ...).
    pub name: &'static str,
    /// The xy chromaticity of the red, green and blue primaries.
    pub primaries_xy: [(f64, f64); 3],
    /// The reference whitepoint illuminant this space is defined against.
    pub illuminant: IlluminantRef,
    /// EOTF/OETF pair.
    pub transfer: TransferFunction,
    matrices: OnceLock<Option<RawMatrices>>,
}

impl RgbSpace {
    const fn new(
        name: &'static str,
        primaries_xy: [(f64, f64); 3],
        illuminant: Illuminant,
        transfer: TransferFunction,
    ) -> Self {
        RgbSpace {
            name,
            primaries_xy,
            illuminant: IlluminantRef {
                illuminant,
                observer: Observer::Two,
            },
            transfer,
            matrices: OnceLock::new(),
        }
    }

    fn whitepoint(&self) -> Result<Vec3, Error> {
        crate::illuminant::get_whitepoint(crate::illuminant::WhitepointQuery {
            illuminant: Some(self.illuminant.illuminant),
            observer: self.illuminant.observer,
            ..Default::default()
        })
    }

    fn compute_matrices(&self) -> Option<RawMatrices> {
        let primaries: Vec<Vec3> = self
            .primaries_xy
            .iter()
            .map(|&(x, y)| xy_to_xyz(x, y))
            .collect();
        let primary_matrix = Matrix3([
            [primaries[0].0[0], primaries[1].0[0], primaries[2].0[0]],
            [primaries[0].0[1], primaries[1].0[1], primaries[2].0[1]],
            [primaries[0].0[2], primaries[1].0[2], primaries[2].0[2]],
        ]);
        let whitepoint = self.whitepoint().ok()?;
        let s = primary_matrix.invert().ok()?.linear_transform(whitepoint);
        let to_xyz = Matrix3([
            [
                s.0[0] * primary_matrix.0[0][0],
                s.0[1] * primary_matrix.0[0][1],
                s.0[2] * primary_matrix.0[0][2],
            ],
            [
                s.0[0] * primary_matrix.0[1][0],
                s.0[1] * primary_matrix.0[1][1],
                s.0[2] * primary_matrix.0[1][2],
            ],
            [
                s.0[0] * primary_matrix.0[2][0],
                s.0[1] * primary_matrix.0[2][1],
                s.0[2] * primary_matrix.0[2][2],
            ],
        ]);
        let to_rgb = to_xyz.invert().ok()?;
        log::trace!("derived RGB<->XYZ matrices for '{}'", self.name);
        Some(RawMatrices { to_xyz, to_rgb })
    }

    fn raw(&self) -> Result<RawMatrices, Error> {
        self.matrices
            .get_or_init(|| self.compute_matrices())
            .ok_or_else(|| Error::Singular {
                threshold: crate::matrix::SINGULAR_THRESHOLD,
                context: format!("RgbSpace '{}' primary matrix", self.name),
            })
    }

    /// Returns the lazily-derived `(toXyz, toRgb)` matrix pair. `digits >= 4`
    /// rounds the result elementwise via [`crate::numeric::round_float`];
    /// `digits == -1` disables rounding.
    pub fn get_transform_matrix(&self, digits: i32) -> Result<(Matrix3, Matrix3), Error> {
        let raw = self.raw()?;
        if digits >= 4 {
            Ok((raw.to_xyz.round(digits), raw.to_rgb.round(digits)))
        } else {
            Ok((raw.to_xyz, raw.to_rgb))
        }
    }

    /// Converts an XYZ tristimulus (optionally under `src_illuminant`, which
    /// is chromatically adapted to this space's whitepoint first via
    /// Bradford) into this space's gamma-encoded RGB, clamped to `[0, 1]`
    /// per channel.
    pub fn to_rgb(&self, xyz: Vec3, src_illuminant: Option<IlluminantRef>) -> Result<Vec3, Error> {
        let (_, to_rgb) = self.get_transform_matrix(8)?;
        let xyz = match src_illuminant {
            Some(src) if src != self.illuminant => adapt(xyz, src, self.illuminant, "bradford")?,
            _ => xyz,
        };
        let linear = to_rgb.linear_transform(xyz);
        let gamma = Vec3([
            (self.transfer.to_gamma)(linear.0[0]),
            (self.transfer.to_gamma)(linear.0[1]),
            (self.transfer.to_gamma)(linear.0[2]),
        ]);
        Ok(Vec3([
            clamp(gamma.0[0], 0.0, 1.0),
            clamp(gamma.0[1], 0.0, 1.0),
            clamp(gamma.0[2], 0.0, 1.0),
        ]))
    }

    /// Converts gamma-encoded RGB in this space into XYZ, without clamping,
    /// optionally adapting the result to `dst_illuminant`.
    pub fn to_xyz(&self, rgb: Vec3, dst_illuminant: Option<IlluminantRef>) -> Result<Vec3, Error> {
        let (to_xyz, _) = self.get_transform_matrix(8)?;
        let linear = Vec3([
            (self.transfer.to_linear)(rgb.0[0]),
            (self.transfer.to_linear)(rgb.0[1]),
            (self.transfer.to_linear)(rgb.0[2]),
        ]);
        let xyz = to_xyz.linear_transform(linear);
        match dst_illuminant {
            Some(dst) if dst != self.illuminant => adapt(xyz, self.illuminant, dst, "bradford"),
            _ => Ok(xyz),
        }
    }

    /// Composes `outputToRgb . adapt(src.whitepoint, dst.whitepoint) .
    /// inputToXyz` and applies it to `rgb`. Gamma handling is the caller's
    /// responsibility: `rgb` and the result are both in whatever domain
    /// (linear or gamma-encoded) the caller passed in.
    pub fn to_rgb_space(&self, rgb: Vec3, dst: &RgbSpace, method: &str) -> Result<Vec3, Error> {
        let (to_xyz, _) = self.get_transform_matrix(8)?;
        let (_, dst_to_rgb) = dst.get_transform_matrix(8)?;
        let xyz = to_xyz.linear_transform(rgb);
        let adapted = if self.illuminant != dst.illuminant {
            get_matrix(self.illuminant, dst.illuminant, method)?.linear_transform(xyz)
        } else {
            xyz
        };
        Ok(dst_to_rgb.linear_transform(adapted))
    }
}

fn registry() -> &'static RwLock<HashMap<&'static str, &'static RgbSpace>> {
    static REGISTRY: OnceLock<RwLock<HashMap<&'static str, &'static RgbSpace>>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::new();
        for space in [
            &SRGB, &ADOBE_RGB_1998, &CIE_RGB, &DISPLAY_P3, &REC2020, &PROPHOTO, &WIDE_GAMUT,
            &REC709,
        ] {
            map.insert(space.name, space);
        }
        RwLock::new(map)
    })
}

/// sRGB (IEC 61966-2-1), whitepoint D65.
pub static SRGB: RgbSpace = RgbSpace::new(
    "srgb",
    [(0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600)],
    Illuminant::D65,
    SRGB_TRANSFER,
);

/// Adobe RGB (1998), whitepoint D65.
pub static ADOBE_RGB_1998: RgbSpace = RgbSpace::new(
    "adobe-rgb-1998",
    [(0.6400, 0.3300), (0.2100, 0.7100), (0.1500, 0.0600)],
    Illuminant::D65,
    ADOBE_RGB_TRANSFER,
);

/// CIE RGB, whitepoint E (equal energy).
pub static CIE_RGB: RgbSpace = RgbSpace::new(
    "cie-rgb",
    [(0.7347, 0.2653), (0.2738, 0.7174), (0.1666, 0.0089)],
    Illuminant::E,
    CIE_RGB_TRANSFER,
);

/// Display P3, whitepoint D65, sRGB transfer function.
pub static DISPLAY_P3: RgbSpace = RgbSpace::new(
    "display-p3",
    [(0.6800, 0.3200), (0.2650, 0.6900), (0.1500, 0.0600)],
    Illuminant::D65,
    SRGB_TRANSFER,
);

/// Rec. 2020, whitepoint D65.
pub static REC2020: RgbSpace = RgbSpace::new(
    "rec2020",
    [(0.7080, 0.2920), (0.1700, 0.7970), (0.1310, 0.0460)],
    Illuminant::D65,
    REC2020_TRANSFER,
);

/// ProPhoto RGB, whitepoint D50.
pub static PROPHOTO: RgbSpace = RgbSpace::new(
    "prophoto",
    [(0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001)],
    Illuminant::D50,
    PROPHOTO_TRANSFER,
);

/// Adobe Wide Gamut RGB, whitepoint D50.
pub static WIDE_GAMUT: RgbSpace = RgbSpace::new(
    "wide-gamut",
    [(0.7347, 0.2653), (0.1152, 0.8264), (0.1566, 0.0177)],
    Illuminant::D50,
    WIDE_GAMUT_TRANSFER,
);

/// Rec. 709, whitepoint D65. Shares sRGB's primaries but uses the BT.709
/// broadcast transfer function rather than sRGB's, which the distilled
/// spec's seven-space list omits; added to match the "eight named spaces"
/// the overview text itself calls for (see DESIGN.md OQ-2).
pub static REC709: RgbSpace = RgbSpace::new(
    "rec709",
    [(0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600)],
    Illuminant::D65,
    REC709_TRANSFER,
);

/// Looks up a registered RGB working space by name.
pub fn space(name: &str) -> Result<&'static RgbSpace, Error> {
    registry()
        .read()
        .expect("rgb space registry poisoned")
        .get(name)
        .copied()
        .ok_or_else(|| Error::InputDomain(format!("unknown RGB space '{name}'")))
}

/// Registers a new RGB working space. Fails with [`Error::Precondition`] if
/// `space.name` is already registered.
pub fn register_space(space: &'static RgbSpace) -> Result<(), Error> {
    let mut map = registry().write().expect("rgb space registry poisoned");
    if map.contains_key(space.name) {
        return Err(Error::Precondition(format!(
            "RGB space '{}' is already registered",
            space.name
        )));
    }
    map.insert(space.name, space);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_round_trips_transfer_function() {
        for v in [0.0, 0.001, 0.04045, 0.5, 1.0] {
            let linear = (SRGB.transfer.to_linear)(v);
            let back = (SRGB.transfer.to_gamma)(linear);
            assert!((back - v).abs() < 1e-9, "v={v} back={back}");
        }
    }

    #[test]
    fn transfer_functions_are_odd() {
        for v in [0.2, 0.6, 0.9] {
            assert!(((SRGB.transfer.to_linear)(-v) + (SRGB.transfer.to_linear)(v)).abs() < 1e-12);
            assert!(((REC2020_TRANSFER.to_gamma)(-v) + (REC2020_TRANSFER.to_gamma)(v)).abs() < 1e-12);
        }
    }

    #[test]
    fn srgb_round_trip_through_xyz() {
        let rgb = Vec3([0.2, 0.3, 0.5]);
        let xyz = SRGB.to_xyz(rgb, None).unwrap();
        let back = SRGB.to_rgb(xyz, None).unwrap();
        for i in 0..3 {
            assert!((back.0[i] - rgb.0[i]).abs() < 1e-8);
        }
    }

    #[test]
    fn unknown_space_fails() {
        assert!(space("no-such-space").is_err());
    }

    #[test]
    fn registering_duplicate_space_fails() {
        assert!(register_space(&SRGB).is_err());
    }
}
