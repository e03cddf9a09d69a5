//! One-dimensional interpolation against control-point breakpoints.
//!
//! Colorization samples each color channel with piecewise-linear
//! interpolation and flat extrapolation; palettization buckets values
//! between breakpoints.

pub mod common;
pub mod linear;

pub use common::digitize;
pub use linear::LinearInterpolator;
