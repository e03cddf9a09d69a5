//! Colorbar and palettebar ramps.
//!
//! A bar is a `height x length` array whose rows all sweep the colormap's
//! value domain from left to right, run through the matching engine.

use ndarray::Array2;

use crate::array::MaskedArray;
use crate::colormaps::Colormap;
use crate::error::{HclmapError, Result};

/// Channels of a colorbar spanning `[min, max]` of the colormap's values
pub fn colorbar(height: usize, length: usize, colormap: &Colormap) -> Result<MaskedArray<f64>> {
    let (min, max) = colormap.range();
    let ramp = sweep(height, length, min, max - min)?;
    colormap.colorize(&ramp)
}

/// Palette indices of a palettebar spanning `[min, max + 1]` of the colormap's values
pub fn palettebar(
    height: usize,
    length: usize,
    colormap: &Colormap,
) -> Result<(MaskedArray<usize>, Array2<f64>)> {
    let (min, max) = colormap.range();
    let ramp = sweep(height, length, min, max + 1.0 - min)?;
    colormap.palettize(&ramp)
}

fn sweep(height: usize, length: usize, start: f64, span: f64) -> Result<MaskedArray<f64>> {
    if height == 0 {
        return Err(HclmapError::InvalidParameter {
            param: "height".to_string(),
            message: "Bar height must be at least 1".to_string(),
        });
    }
    if length < 2 {
        return Err(HclmapError::InvalidParameter {
            param: "length".to_string(),
            message: "Bar length must be at least 2".to_string(),
        });
    }

    let last = (length - 1) as f64;
    let ramp = Array2::from_shape_fn((height, length), |(_, col)| {
        span * col as f64 / last + start
    });
    Ok(MaskedArray::from(ramp))
}
