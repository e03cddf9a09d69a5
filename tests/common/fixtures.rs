//! Colormaps and arrays shared by the integration tests.

#![allow(dead_code)]

use hclmap::{Colormap, MaskedArray};
use ndarray::{arr1, ArrayD};

/// Black at 0, white at 1
pub fn grayscale() -> Colormap {
    Colormap::from_points([(0.0, [0.0, 0.0, 0.0]), (1.0, [1.0, 1.0, 1.0])]).unwrap()
}

/// Three RGBA control points over `[-1, 1]`
pub fn translucent() -> Colormap {
    Colormap::from_points([
        (-1.0, [0.8, 0.1, 0.1, 0.0]),
        (0.0, [0.9, 0.9, 0.9, 0.5]),
        (1.0, [0.1, 0.1, 0.8, 1.0]),
    ])
    .unwrap()
}

/// A 1-D array with no mask
pub fn values(data: &[f64]) -> MaskedArray<f64> {
    MaskedArray::from(arr1(data))
}

/// A 1-D array with the given elements flagged invalid
pub fn masked_values(data: &[f64], mask: &[bool]) -> MaskedArray<f64> {
    MaskedArray::with_mask(arr1(data).into_dyn(), arr1(mask)).unwrap()
}

/// Channel `c` of a colorized 1-D input, as a vector
pub fn channel(colors: &MaskedArray<f64>, c: usize) -> Vec<f64> {
    let data: &ArrayD<f64> = colors.data();
    data.index_axis(ndarray::Axis(0), c).iter().copied().collect()
}

/// RGB triple at position `i` of a colorized 1-D input
pub fn rgb_at(colors: &MaskedArray<f64>, i: usize) -> [f64; 3] {
    let data = colors.data();
    [data[[0, i]], data[[1, i]], data[[2, i]]]
}
