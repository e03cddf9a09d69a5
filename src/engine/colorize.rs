//! Continuous colorization in HCL space.

use ndarray::{Array, ArrayView1, ArrayView2, IxDyn};
use tracing::debug;

use crate::array::{stack_mask, MaskedArray};
use crate::colorspace::{hcl_to_rgb, rgb_to_hcl, unwrap_hues};
use crate::error::{HclmapError, Result};
use crate::execution::{Direct, ExecutionStrategy};
use crate::interpolation::LinearInterpolator;

/// Colorize `data` against the ramp given by `colors` at `values`.
///
/// Returns a stack of channel arrays: the leading axis holds 3 channels for
/// an RGB table or 4 for RGBA, the remaining axes match `data`. Masked input
/// elements are masked in every output channel.
pub fn colorize(
    data: &MaskedArray<f64>,
    colors: ArrayView2<f64>,
    values: ArrayView1<f64>,
) -> Result<MaskedArray<f64>> {
    colorize_with(&Direct, data, colors, values)
}

/// [`colorize`] using an explicit execution strategy
pub fn colorize_with<S: ExecutionStrategy>(
    strategy: &S,
    data: &MaskedArray<f64>,
    colors: ArrayView2<f64>,
    values: ArrayView1<f64>,
) -> Result<MaskedArray<f64>> {
    let ramp = HclRamp::new(colors, values)?;
    debug!(
        strategy = strategy.name(),
        shape = ?data.shape(),
        channels = ramp.channels(),
        control_points = values.len(),
        "Colorizing array"
    );
    strategy.execute(data, true, |block| ramp.apply(block))
}

/// Per-channel interpolators prepared from one color table
struct HclRamp {
    hue: LinearInterpolator,
    chroma: LinearInterpolator,
    luminance: LinearInterpolator,
    alpha: Option<LinearInterpolator>,
}

impl HclRamp {
    fn new(colors: ArrayView2<f64>, values: ArrayView1<f64>) -> Result<Self> {
        let channels = colors.ncols();
        if channels != 3 && channels != 4 {
            return Err(HclmapError::InvalidColors {
                message: format!(
                    "Colors must be RGB or RGBA. Got unexpected shape: {:?}",
                    colors.shape()
                ),
            });
        }

        let breakpoints = values.to_vec();
        let hcl: Vec<_> = colors
            .rows()
            .into_iter()
            .map(|c| rgb_to_hcl(c[0], c[1], c[2]))
            .collect();
        let hues = unwrap_hues(&hcl.iter().map(|c| c.hue).collect::<Vec<_>>());

        let alpha = if channels == 4 {
            Some(LinearInterpolator::new(
                breakpoints.clone(),
                colors.column(3).to_vec(),
            )?)
        } else {
            None
        };

        Ok(Self {
            hue: LinearInterpolator::new(breakpoints.clone(), hues)?,
            chroma: LinearInterpolator::new(
                breakpoints.clone(),
                hcl.iter().map(|c| c.chroma).collect(),
            )?,
            luminance: LinearInterpolator::new(
                breakpoints,
                hcl.iter().map(|c| c.luminance).collect(),
            )?,
            alpha,
        })
    }

    fn channels(&self) -> usize {
        if self.alpha.is_some() {
            4
        } else {
            3
        }
    }

    fn apply(&self, block: &MaskedArray<f64>) -> Result<MaskedArray<f64>> {
        let n = block.len();
        let channels = self.channels();
        let mut planes: Vec<Vec<f64>> = (0..channels).map(|_| Vec::with_capacity(n)).collect();

        for &x in block.data().iter() {
            let rgb = hcl_to_rgb(
                self.hue.interpolate(x),
                self.chroma.interpolate(x),
                self.luminance.interpolate(x),
            );
            for (plane, component) in planes.iter_mut().zip(rgb) {
                plane.push(component);
            }
            if let Some(alpha) = &self.alpha {
                planes[3].push(alpha.interpolate(x));
            }
        }

        let mut shape = Vec::with_capacity(block.ndim() + 1);
        shape.push(channels);
        shape.extend_from_slice(block.shape());
        let data = Array::from_shape_vec(IxDyn(&shape), planes.concat())?;
        let mask = block.mask().map(|m| stack_mask(m, channels));

        Ok(MaskedArray::from_parts(data, mask))
    }
}
