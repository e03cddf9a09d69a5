//! Piecewise-linear interpolation with flat extrapolation.

use super::common::{linear_weight, segment};
use crate::error::{HclmapError, Result};

/// Piecewise-linear curve through `(breakpoint, sample)` pairs.
///
/// Queries below the first breakpoint return the first sample, queries above
/// the last return the last sample. NaN queries return NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    breakpoints: Vec<f64>,
    samples: Vec<f64>,
}

impl LinearInterpolator {
    /// Build a curve; `breakpoints` must be ascending and as long as `samples`
    pub fn new(breakpoints: Vec<f64>, samples: Vec<f64>) -> Result<Self> {
        if breakpoints.len() != samples.len() {
            return Err(HclmapError::LengthMismatch {
                values: breakpoints.len(),
                colors: samples.len(),
            });
        }
        if breakpoints.is_empty() {
            return Err(HclmapError::InvalidParameter {
                param: "breakpoints".to_string(),
                message: "At least one breakpoint is required".to_string(),
            });
        }
        Ok(Self {
            breakpoints,
            samples,
        })
    }

    /// Evaluate the curve at `x`
    pub fn interpolate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let last = self.breakpoints.len() - 1;
        if x <= self.breakpoints[0] {
            return self.samples[0];
        }
        if x >= self.breakpoints[last] {
            return self.samples[last];
        }
        match segment(x, &self.breakpoints) {
            Some((j, fraction)) => {
                let (w0, w1) = linear_weight(fraction);
                self.samples[j] * w0 + self.samples[j + 1] * w1
            }
            None => self.samples[last],
        }
    }
}
