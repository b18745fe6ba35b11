//! The color model layer: RGB and its hue-based siblings (HSV, HSL, HSI,
//! HWB), the CIE models (XYZ, Yxy, Lab, Luv and their polar LCH forms), and
//! shared utilities (hex/CSS text forms, alpha compositing, contrast).

pub mod hsi;
pub mod hsl;
pub mod hsv;
pub mod hwb;
pub mod lab;
pub mod lch;
pub mod luv;
pub mod rgb;
pub mod util;
pub mod xyz;
pub mod yxy;

pub use hsi::Hsi;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hwb::Hwb;
pub use lab::Lab;
pub use lch::{LchAb, LchUv};
pub use luv::Luv;
pub use rgb::Rgb;
pub use xyz::Xyz;
pub use yxy::Yxy;
