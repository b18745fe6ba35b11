//! Matrix algebra, standard illuminants, chromatic adaptation, named RGB
//! working spaces, the color model layer (RGB and its relatives, the CIE
//! models) and color difference formulas.

pub mod adaptation;
pub mod color;
pub mod difference;
pub mod error;
pub mod illuminant;
pub mod matrix;
pub mod numeric;
pub mod space;

pub use color::{Hsi, Hsl, Hsv, Hwb, Lab, LchAb, LchUv, Luv, Rgb, Xyz, Yxy};
pub use error::{Error, Result};
