//! Color space conversions used for perceptual interpolation.
//!
//! Colors are interpolated in HCL (the polar form of CIE L*u*v* under a D65
//! white point) rather than in RGB, and hue angles are unwrapped across the
//! control points before interpolation.

pub mod hcl;
pub mod unwrap;

pub use hcl::{hcl_to_rgb, rgb_to_hcl, Hcl};
pub use unwrap::unwrap_hues;
