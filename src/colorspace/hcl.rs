//! RGB <-> HCL conversion.
//!
//! RGB components are gamma-encoded sRGB, nominally in `[0, 1]`. HCL is CIE
//! LCh(uv) under a D65 white point: hue in degrees, chroma and luminance on
//! the CIE scale where luminance runs from 0 (black) to 100 (white).
//! Conversions are unclamped in both directions, so out-of-gamut colors keep
//! their components.

use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{Lchuv, Srgb};

/// A color in Hue-Chroma-Luminance coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hcl {
    /// Hue angle in degrees, `[0, 360)`
    pub hue: f64,
    /// Chroma, 0 for neutral grays
    pub chroma: f64,
    /// Luminance, 0 to 100
    pub luminance: f64,
}

/// Convert a gamma-encoded sRGB color to HCL
pub fn rgb_to_hcl(r: f64, g: f64, b: f64) -> Hcl {
    let lch = Lchuv::<D65, f64>::from_color_unclamped(Srgb::new(r, g, b));
    Hcl {
        hue: lch.hue.into_positive_degrees(),
        chroma: lch.chroma,
        luminance: lch.l,
    }
}

/// Convert HCL back to gamma-encoded sRGB.
///
/// The hue may lie outside `[0, 360)`; out-of-gamut results are not clipped.
pub fn hcl_to_rgb(hue: f64, chroma: f64, luminance: f64) -> [f64; 3] {
    let rgb = Srgb::<f64>::from_color_unclamped(Lchuv::<D65, f64>::new(luminance, chroma, hue));
    [rgb.red, rgb.green, rgb.blue]
}
