//! Discrete palettization into bucket indices.

use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::debug;

use crate::array::MaskedArray;
use crate::error::{HclmapError, Result};
use crate::execution::{Direct, ExecutionStrategy};
use crate::interpolation::common::clamp_index;
use crate::interpolation::digitize;

/// Map every element of `data` to the index of the greatest value in
/// `values` that is less than or equal to it.
///
/// Elements below `values[0]` get index 0 and elements at or above the last
/// value get the last index. The color table is returned unchanged beside the
/// index array for a renderer to look up.
pub fn palettize(
    data: &MaskedArray<f64>,
    colors: ArrayView2<f64>,
    values: ArrayView1<f64>,
) -> Result<(MaskedArray<usize>, Array2<f64>)> {
    palettize_with(&Direct, data, colors, values)
}

/// [`palettize`] using an explicit execution strategy
pub fn palettize_with<S: ExecutionStrategy>(
    strategy: &S,
    data: &MaskedArray<f64>,
    colors: ArrayView2<f64>,
    values: ArrayView1<f64>,
) -> Result<(MaskedArray<usize>, Array2<f64>)> {
    if values.is_empty() {
        return Err(HclmapError::InvalidParameter {
            param: "values".to_string(),
            message: "At least one control value is required".to_string(),
        });
    }

    debug!(
        strategy = strategy.name(),
        shape = ?data.shape(),
        buckets = values.len(),
        "Palettizing array"
    );

    let breakpoints = values.to_vec();
    let indices = strategy.execute(data, false, |block| Ok(bucket_indices(block, &breakpoints)))?;
    Ok((indices, colors.to_owned()))
}

/// Digitize one block against `values` extended with a sentinel above both
/// the block and the table maxima, then shift into `[0, values.len() - 1]`.
fn bucket_indices(block: &MaskedArray<f64>, values: &[f64]) -> MaskedArray<usize> {
    let data_max = block
        .data()
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    let values_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut bins = values.to_vec();
    bins.push(data_max.max(values_max) + 1.0);

    let indices = block
        .data()
        .mapv(|x| clamp_index(digitize(x, &bins) as i64 - 1, values.len()));
    MaskedArray::from_parts(indices, block.mask().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::Blocked;
    use ndarray::{arr1, arr2, Array2};

    #[test]
    fn test_half_open_buckets() {
        let colors = arr2(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        let values = arr1(&[0.0, 1.0]);
        let data = MaskedArray::from(arr1(&[-1.0, 0.0, 0.5, 1.0, 2.0]));

        let (indices, table) = palettize(&data, colors.view(), values.view()).unwrap();
        assert_eq!(indices.data().iter().copied().collect::<Vec<_>>(), vec![0, 0, 0, 1, 1]);
        assert_eq!(table, colors);
    }

    #[test]
    fn test_interior_buckets() {
        let colors = Array2::<f64>::zeros((4, 3));
        let values = arr1(&[0.0, 10.0, 20.0, 30.0]);
        let data = MaskedArray::from(arr1(&[5.0, 10.0, 19.999, 25.0, 30.0, 1e9]));

        let (indices, _) = palettize(&data, colors.view(), values.view()).unwrap();
        assert_eq!(
            indices.data().iter().copied().collect::<Vec<_>>(),
            vec![0, 1, 1, 2, 3, 3]
        );
    }

    #[test]
    fn test_shape_and_mask_preserved() {
        let colors = Array2::<f64>::zeros((3, 4));
        let values = arr1(&[0.0, 1.0, 2.0]);
        let data = arr2(&[[0.5, 1.5], [2.5, -3.0]]).into_dyn();
        let mask = arr2(&[[false, true], [false, false]]);
        let input = MaskedArray::with_mask(data, mask).unwrap();

        let (indices, _) = palettize(&input, colors.view(), values.view()).unwrap();
        assert_eq!(indices.shape(), &[2, 2]);
        assert!(indices.is_masked(&[0, 1]));
        assert!(!indices.is_masked(&[1, 1]));
        assert_eq!(indices.data()[[1, 0]], 2);
        assert_eq!(indices.data()[[1, 1]], 0);
    }

    #[test]
    fn test_nan_maps_to_last_bucket() {
        let colors = Array2::<f64>::zeros((2, 3));
        let values = arr1(&[0.0, 1.0]);
        let data = MaskedArray::from(arr1(&[f64::NAN, 0.2]));
        let (indices, _) = palettize(&data, colors.view(), values.view()).unwrap();
        assert_eq!(indices.data().iter().copied().collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_empty_values_rejected() {
        let colors = Array2::<f64>::zeros((0, 3));
        let values = ndarray::Array1::<f64>::zeros(0);
        let data = MaskedArray::from(arr1(&[1.0]));
        assert!(palettize(&data, colors.view(), values.view()).is_err());
    }

    #[test]
    fn test_blocked_matches_direct() {
        let colors = Array2::<f64>::zeros((5, 3));
        let values = arr1(&[0.0, 2.0, 4.0, 6.0, 8.0]);
        let data = Array2::from_shape_fn((11, 3), |(i, j)| (i * 3 + j) as f64 / 3.0 - 1.0);
        let input = MaskedArray::from(data);

        let direct = palettize(&input, colors.view(), values.view()).unwrap();
        let blocked =
            palettize_with(&Blocked::new(4), &input, colors.view(), values.view()).unwrap();
        assert_eq!(direct, blocked);
    }
}
