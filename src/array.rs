//! Masked n-dimensional arrays.
//!
//! Every array handed to the colorization and palettization engines pairs its
//! data with an optional validity overlay. `true` in the overlay marks an
//! element as invalid; an absent overlay means every element is valid.

use ndarray::{Array, ArrayD, Axis, Dimension, IxDyn};

use crate::error::{HclmapError, Result};

/// An owned array with an optional mask of invalid elements
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray<A> {
    data: ArrayD<A>,
    mask: Option<ArrayD<bool>>,
}

impl<A> MaskedArray<A> {
    /// Wrap `data` without a mask
    pub fn new(data: ArrayD<A>) -> Self {
        Self { data, mask: None }
    }

    /// Wrap `data` with a mask broadcastable to its shape.
    ///
    /// The stored mask is materialized at the data shape.
    pub fn with_mask<D: Dimension>(data: ArrayD<A>, mask: Array<bool, D>) -> Result<Self> {
        let mask = mask.into_dyn();
        let mask = if mask.shape() == data.shape() {
            mask
        } else {
            mask.broadcast(data.raw_dim())
                .ok_or_else(|| HclmapError::InvalidParameter {
                    param: "mask".to_string(),
                    message: format!(
                        "Mask of shape {:?} cannot be broadcast to data shape {:?}",
                        mask.shape(),
                        data.shape()
                    ),
                })?
                .to_owned()
        };
        Ok(Self {
            data,
            mask: Some(mask),
        })
    }

    /// Assemble from parts whose shapes are already known to agree
    pub(crate) fn from_parts(data: ArrayD<A>, mask: Option<ArrayD<bool>>) -> Self {
        debug_assert!(mask.as_ref().map_or(true, |m| m.shape() == data.shape()));
        Self { data, mask }
    }

    /// The underlying data, including values under the mask
    pub fn data(&self) -> &ArrayD<A> {
        &self.data
    }

    /// The mask, if the array carries one
    pub fn mask(&self) -> Option<&ArrayD<bool>> {
        self.mask.as_ref()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the element at `index` is flagged invalid
    pub fn is_masked(&self, index: &[usize]) -> bool {
        self.mask
            .as_ref()
            .and_then(|m| m.get(index).copied())
            .unwrap_or(false)
    }

    /// Number of elements flagged invalid
    pub fn masked_count(&self) -> usize {
        self.mask
            .as_ref()
            .map_or(0, |m| m.iter().filter(|&&v| v).count())
    }

    pub fn into_parts(self) -> (ArrayD<A>, Option<ArrayD<bool>>) {
        (self.data, self.mask)
    }
}

impl<A: Clone> MaskedArray<A> {
    /// Copy of rows `start..end` along the first axis, mask included
    pub(crate) fn slice_rows(&self, start: usize, end: usize) -> Self {
        let rows = ndarray::Slice::from(start..end);
        Self {
            data: self.data.slice_axis(Axis(0), rows).to_owned(),
            mask: self
                .mask
                .as_ref()
                .map(|m| m.slice_axis(Axis(0), rows).to_owned()),
        }
    }
}

/// Repeat `mask` along a new leading axis of length `channels`
pub(crate) fn stack_mask(mask: &ArrayD<bool>, channels: usize) -> ArrayD<bool> {
    let mut shape = Vec::with_capacity(mask.ndim() + 1);
    shape.push(channels);
    shape.extend_from_slice(mask.shape());
    let expanded = mask.view().insert_axis(Axis(0));
    // Broadcasting a length-1 leading axis always succeeds.
    match expanded.broadcast(IxDyn(&shape)) {
        Some(view) => view.to_owned(),
        None => ArrayD::from_elem(IxDyn(&shape), false),
    }
}

impl<A, D: Dimension> From<Array<A, D>> for MaskedArray<A> {
    fn from(data: Array<A, D>) -> Self {
        Self::new(data.into_dyn())
    }
}
