//! The colormap entity.
//!
//! A [`Colormap`] is an ordered set of control points, each pairing a data
//! value with an RGB or RGBA color. `reverse` and `set_range` mutate the
//! receiver in place; `to_rgb`, `to_rgba` and concatenation leave it alone
//! and hand back another colormap.

use std::borrow::Cow;
use std::ops::Add;

use ndarray::{concatenate, s, Array1, Array2, ArrayView1, Axis};
use serde::Serialize;
use tracing::{debug, warn};

use crate::array::MaskedArray;
use crate::engine::{colorize_with, palettize_with};
use crate::error::{HclmapError, Result};
use crate::execution::{Direct, ExecutionStrategy};

/// Numeric types accepted as color components.
///
/// Components are stored as `f64`; integer components are cast with a warning
/// since colors are expected as fractions in `[0, 1]`.
pub trait ColorComponent: Copy {
    /// Whether the type is a floating-point type
    const IS_FLOAT: bool;

    fn to_f64(self) -> f64;
}

macro_rules! impl_color_component {
    ($($t:ty => $float:expr),* $(,)?) => {
        $(
            impl ColorComponent for $t {
                const IS_FLOAT: bool = $float;

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_color_component!(f32 => true, f64 => true, u8 => false, u16 => false, i32 => false, i64 => false);

/// One row of an exported color table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorTableEntry {
    /// Control value
    pub value: f64,
    /// Color scaled to `0..=255`
    pub color: Vec<u8>,
}

/// Control points mapping data values to colors
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    values: Array1<f64>,
    colors: Array2<f64>,
}

impl Colormap {
    /// Build a colormap from `(value, color)` pairs.
    ///
    /// Every color must have 3 (RGB) or 4 (RGBA) components.
    ///
    /// ```
    /// use hclmap::Colormap;
    ///
    /// let cmap = Colormap::from_points([
    ///     (-75.0, [1.0, 1.0, 0.0]),
    ///     (-40.0, [0.0, 1.0, 1.0]),
    ///     (30.0, [0.0, 0.0, 0.0]),
    /// ])
    /// .unwrap();
    /// assert_eq!(cmap.len(), 3);
    /// ```
    pub fn from_points<T, const N: usize, I>(points: I) -> Result<Self>
    where
        T: ColorComponent,
        I: IntoIterator<Item = (f64, [T; N])>,
    {
        let mut values = Vec::new();
        let mut flat = Vec::new();
        for (value, color) in points {
            values.push(value);
            flat.extend(color);
        }
        let rows = values.len();
        let colors = Array2::from_shape_vec((rows, N), flat)?;
        Self::from_arrays(Array1::from(values), colors)
    }

    /// Build a colormap from parallel arrays of values and colors
    pub fn from_arrays<T: ColorComponent>(values: Array1<f64>, colors: Array2<T>) -> Result<Self> {
        if !T::IS_FLOAT {
            warn!(
                component_type = std::any::type_name::<T>(),
                "Colormap colors should be floating point numbers between 0 and 1"
            );
        }
        Self::validated(values, colors.mapv(T::to_f64))
    }

    /// Build a colormap from rows of arbitrary width, as read from JSON
    pub fn from_rows(values: Vec<f64>, colors: &[Vec<f64>]) -> Result<Self> {
        let width = colors.first().map_or(3, Vec::len);
        if let Some(row) = colors.iter().find(|row| row.len() != width) {
            return Err(HclmapError::InvalidColors {
                message: format!(
                    "Colors must be RGB or RGBA. Got rows of {} and {} components",
                    width,
                    row.len()
                ),
            });
        }
        let flat: Vec<f64> = colors.iter().flatten().copied().collect();
        let colors = Array2::from_shape_vec((colors.len(), width), flat)?;
        Self::from_arrays(Array1::from(values), colors)
    }

    /// Build a colormap from known-good static data
    pub(crate) fn from_table(points: &[(f64, [f64; 3])]) -> Self {
        let values = points.iter().map(|(v, _)| *v).collect::<Array1<f64>>();
        let colors = Array2::from_shape_fn((points.len(), 3), |(i, j)| points[i].1[j]);
        Self { values, colors }
    }

    fn validated(values: Array1<f64>, colors: Array2<f64>) -> Result<Self> {
        if colors.ncols() != 3 && colors.ncols() != 4 {
            return Err(HclmapError::InvalidColors {
                message: format!(
                    "Colormap 'colors' must be RGB or RGBA. Got unexpected shape: {:?}",
                    colors.shape()
                ),
            });
        }
        if values.len() != colors.nrows() {
            return Err(HclmapError::LengthMismatch {
                values: values.len(),
                colors: colors.nrows(),
            });
        }
        if values.is_empty() {
            return Err(HclmapError::InvalidParameter {
                param: "values".to_string(),
                message: "A colormap needs at least one control point".to_string(),
            });
        }
        check_increasing(values.view())?;
        Ok(Self { values, colors })
    }

    /// Control values, strictly ascending
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Color table, one row per control value
    pub fn colors(&self) -> &Array2<f64> {
        &self.colors
    }

    /// Color of the `index`-th control point
    pub fn color(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.len()).then(|| self.colors.row(index))
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 3 for RGB, 4 for RGBA
    pub fn channels(&self) -> usize {
        self.colors.ncols()
    }

    pub fn is_rgba(&self) -> bool {
        self.channels() == 4
    }

    /// Smallest and largest control value
    pub fn range(&self) -> (f64, f64) {
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    /// Colorize `data` with this colormap
    pub fn colorize(&self, data: &MaskedArray<f64>) -> Result<MaskedArray<f64>> {
        self.colorize_with(&Direct, data)
    }

    pub fn colorize_with<S: ExecutionStrategy>(
        &self,
        strategy: &S,
        data: &MaskedArray<f64>,
    ) -> Result<MaskedArray<f64>> {
        colorize_with(strategy, data, self.colors.view(), self.values.view())
    }

    /// Palettize `data` with this colormap
    pub fn palettize(&self, data: &MaskedArray<f64>) -> Result<(MaskedArray<usize>, Array2<f64>)> {
        self.palettize_with(&Direct, data)
    }

    pub fn palettize_with<S: ExecutionStrategy>(
        &self,
        strategy: &S,
        data: &MaskedArray<f64>,
    ) -> Result<(MaskedArray<usize>, Array2<f64>)> {
        palettize_with(strategy, data, self.colors.view(), self.values.view())
    }

    /// This colormap with RGB colors.
    ///
    /// An RGB colormap is returned borrowed; otherwise the alpha channel is
    /// dropped in a new colormap with the same values.
    pub fn to_rgb(&self) -> Cow<'_, Colormap> {
        if self.channels() == 3 {
            return Cow::Borrowed(self);
        }
        Cow::Owned(Self {
            values: self.values.clone(),
            colors: self.colors.slice(s![.., ..3]).to_owned(),
        })
    }

    /// This colormap with RGBA colors.
    ///
    /// An RGBA colormap is returned borrowed; otherwise every color gets a
    /// fully opaque alpha of 1.0 in a new colormap.
    pub fn to_rgba(&self) -> Cow<'_, Colormap> {
        if self.channels() == 4 {
            return Cow::Borrowed(self);
        }
        let mut colors = Array2::ones((self.len(), 4));
        colors.slice_mut(s![.., ..3]).assign(&self.colors);
        Cow::Owned(Self {
            values: self.values.clone(),
            colors,
        })
    }

    /// Append `other` after this colormap.
    ///
    /// Mixed RGB/RGBA operands are both promoted to RGBA. The merged values
    /// must be strictly increasing, so `other` has to start above this
    /// colormap's last value.
    pub fn concat(&self, other: &Colormap) -> Result<Colormap> {
        let (first, second) = if self.channels() == other.channels() {
            (Cow::Borrowed(self), Cow::Borrowed(other))
        } else {
            (self.to_rgba(), other.to_rgba())
        };

        let values = concatenate(Axis(0), &[first.values.view(), second.values.view()])?;
        check_increasing(values.view()).map_err(|_| HclmapError::NotIncreasing {
            message: "Merged colormap 'values' are not monotonically increasing".to_string(),
        })?;
        let colors = concatenate(Axis(0), &[first.colors.view(), second.colors.view()])?;

        debug!(
            control_points = values.len(),
            channels = colors.ncols(),
            "Concatenated colormaps"
        );
        Ok(Self { values, colors })
    }

    /// Reverse the order of the colors in place, keeping the values
    pub fn reverse(&mut self) {
        self.colors = self.colors.slice(s![..;-1, ..]).to_owned();
    }

    /// Rescale the values in place onto `[min_val, max_val]`.
    ///
    /// Bounds given in descending order are swapped. Interior values keep
    /// their relative spacing.
    pub fn set_range(&mut self, min_val: f64, max_val: f64) -> Result<()> {
        let (min_val, max_val) = if min_val > max_val {
            (max_val, min_val)
        } else {
            (min_val, max_val)
        };

        if self.len() == 1 {
            if min_val.is_nan() {
                return Err(invalid_range(min_val, max_val));
            }
            self.values[0] = min_val;
            return Ok(());
        }
        if !(min_val < max_val) || !min_val.is_finite() || !max_val.is_finite() {
            return Err(invalid_range(min_val, max_val));
        }

        let (old_min, old_max) = self.range();
        let scale = (max_val - min_val) / (old_max - old_min);
        self.values.mapv_inplace(|v| (v - old_min) * scale + min_val);

        // Pin the ends so they land exactly on the requested bounds.
        let last = self.len() - 1;
        self.values[0] = min_val;
        self.values[last] = max_val;
        Ok(())
    }

    /// Color table keyed by control value, with every component scaled to
    /// `0..=255` using the minimum and maximum over the whole table
    pub fn export_color_table(&self) -> Vec<ColorTableEntry> {
        let min = self.colors.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.colors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        let scale = |c: f64| -> u8 {
            if span > 0.0 {
                ((c - min) / span * 255.0).round().clamp(0.0, 255.0) as u8
            } else {
                0
            }
        };

        self.values
            .iter()
            .zip(self.colors.rows())
            .map(|(&value, color)| ColorTableEntry {
                value,
                color: color.iter().map(|&c| scale(c)).collect(),
            })
            .collect()
    }
}

impl Add<&Colormap> for &Colormap {
    type Output = Result<Colormap>;

    fn add(self, other: &Colormap) -> Self::Output {
        self.concat(other)
    }
}

impl Add for Colormap {
    type Output = Result<Colormap>;

    fn add(self, other: Colormap) -> Self::Output {
        self.concat(&other)
    }
}

fn check_increasing(values: ArrayView1<f64>) -> Result<()> {
    for (i, pair) in values.windows(2).into_iter().enumerate() {
        if !(pair[0] < pair[1]) {
            return Err(HclmapError::NotIncreasing {
                message: format!(
                    "value {} at position {} is not greater than {}",
                    pair[1],
                    i + 1,
                    pair[0]
                ),
            });
        }
    }
    Ok(())
}

fn invalid_range(min_val: f64, max_val: f64) -> HclmapError {
    HclmapError::InvalidParameter {
        param: "range".to_string(),
        message: format!("Cannot rescale colormap onto [{}, {}]", min_val, max_val),
    }
}
