//! Execution strategies for array kernels.
//!
//! Colorization and palettization are pure per-element computations, so an
//! array can be split into independent row blocks, processed in parallel and
//! stitched back together. The caller picks the strategy explicitly.

use ndarray::{concatenate, ArrayD, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::array::MaskedArray;
use crate::error::{HclmapError, Result};
use crate::logging::log_timed_operation;

/// Default number of rows per block for blocked execution
pub const DEFAULT_BLOCK_ROWS: usize = 256;

/// Strategy for applying a pure kernel to a masked array
pub trait ExecutionStrategy {
    /// Run `kernel` over `input` and return the assembled result.
    ///
    /// When `channel_axis` is set, the kernel's output carries a new leading
    /// channel axis in front of the input's own axes.
    fn execute<A, F>(
        &self,
        input: &MaskedArray<f64>,
        channel_axis: bool,
        kernel: F,
    ) -> Result<MaskedArray<A>>
    where
        A: Clone + Send,
        F: Fn(&MaskedArray<f64>) -> Result<MaskedArray<A>> + Sync + Send;

    /// Get the name of this strategy
    fn name(&self) -> &str;
}

/// Apply the kernel once to the whole array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direct;

impl ExecutionStrategy for Direct {
    fn execute<A, F>(
        &self,
        input: &MaskedArray<f64>,
        _channel_axis: bool,
        kernel: F,
    ) -> Result<MaskedArray<A>>
    where
        A: Clone + Send,
        F: Fn(&MaskedArray<f64>) -> Result<MaskedArray<A>> + Sync + Send,
    {
        kernel(input)
    }

    fn name(&self) -> &str {
        "direct"
    }
}

/// Split the first axis into row blocks and process them in parallel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blocked {
    /// Maximum number of rows per block
    pub block_rows: usize,
    /// Dedicated worker count; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl Blocked {
    pub fn new(block_rows: usize) -> Self {
        Self {
            block_rows,
            threads: None,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

impl Default for Blocked {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_ROWS)
    }
}

impl ExecutionStrategy for Blocked {
    fn execute<A, F>(
        &self,
        input: &MaskedArray<f64>,
        channel_axis: bool,
        kernel: F,
    ) -> Result<MaskedArray<A>>
    where
        A: Clone + Send,
        F: Fn(&MaskedArray<f64>) -> Result<MaskedArray<A>> + Sync + Send,
    {
        if self.block_rows == 0 {
            return Err(HclmapError::InvalidParameter {
                param: "block_rows".to_string(),
                message: "Block size must be at least one row".to_string(),
            });
        }

        if input.ndim() == 0 || input.shape()[0] <= self.block_rows {
            return kernel(input);
        }

        let rows = input.shape()[0];
        let blocks: Vec<MaskedArray<f64>> = (0..rows)
            .step_by(self.block_rows)
            .map(|start| input.slice_rows(start, (start + self.block_rows).min(rows)))
            .collect();

        debug!(
            strategy = self.name(),
            rows = rows,
            block_rows = self.block_rows,
            blocks = blocks.len(),
            "Dispatching blocks"
        );

        let run = || {
            blocks
                .par_iter()
                .map(|block| kernel(block))
                .collect::<Result<Vec<_>>>()
        };

        let results = log_timed_operation("blocked_execute", || match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| HclmapError::Execution {
                        message: format!("Failed to build thread pool: {}", e),
                    })?;
                pool.install(run)
            }
            None => run(),
        })?;

        let axis = if channel_axis { Axis(1) } else { Axis(0) };
        reassemble(results, axis)
    }

    fn name(&self) -> &str {
        "blocked"
    }
}

/// Concatenate block results along `axis`, merging their masks
fn reassemble<A: Clone>(parts: Vec<MaskedArray<A>>, axis: Axis) -> Result<MaskedArray<A>> {
    let views: Vec<_> = parts.iter().map(|p| p.data().view()).collect();
    let data = concatenate(axis, &views)?;

    let mask = if parts.iter().any(|p| p.mask().is_some()) {
        let filled: Vec<ArrayD<bool>> = parts
            .iter()
            .map(|p| {
                p.mask()
                    .cloned()
                    .unwrap_or_else(|| ArrayD::from_elem(p.data().raw_dim(), false))
            })
            .collect();
        let views: Vec<_> = filled.iter().map(|m| m.view()).collect();
        Some(concatenate(axis, &views)?)
    } else {
        None
    };

    Ok(MaskedArray::from_parts(data, mask))
}

/// Configurable choice between the two strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Direct,
    Blocked {
        block_rows: usize,
        threads: Option<usize>,
    },
}

impl ExecutionStrategy for ExecutionMode {
    fn execute<A, F>(
        &self,
        input: &MaskedArray<f64>,
        channel_axis: bool,
        kernel: F,
    ) -> Result<MaskedArray<A>>
    where
        A: Clone + Send,
        F: Fn(&MaskedArray<f64>) -> Result<MaskedArray<A>> + Sync + Send,
    {
        match *self {
            ExecutionMode::Direct => Direct.execute(input, channel_axis, kernel),
            ExecutionMode::Blocked {
                block_rows,
                threads,
            } => Blocked {
                block_rows,
                threads,
            }
            .execute(input, channel_axis, kernel),
        }
    }

    fn name(&self) -> &str {
        match self {
            ExecutionMode::Direct => "direct",
            ExecutionMode::Blocked { .. } => "blocked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, IxDyn};

    fn doubled(block: &MaskedArray<f64>) -> Result<MaskedArray<f64>> {
        let (data, mask) = block.clone().into_parts();
        Ok(MaskedArray::from_parts(data.mapv(|v| v * 2.0), mask))
    }

    fn split_channels(block: &MaskedArray<f64>) -> Result<MaskedArray<f64>> {
        let mut shape = vec![2];
        shape.extend_from_slice(block.shape());
        let mut values = block.data().iter().copied().collect::<Vec<_>>();
        values.extend(block.data().iter().map(|v| -v));
        let data = Array::from_shape_vec(IxDyn(&shape), values)?;
        let mask = block.mask().map(|m| crate::array::stack_mask(m, 2));
        Ok(MaskedArray::from_parts(data, mask))
    }

    fn sample(rows: usize, cols: usize) -> MaskedArray<f64> {
        let data = Array::from_shape_fn(IxDyn(&[rows, cols]), |ix| (ix[0] * cols + ix[1]) as f64);
        let mask = data.mapv(|v| (v as usize) % 3 == 0);
        MaskedArray::with_mask(data, mask).unwrap()
    }

    #[test]
    fn test_blocked_matches_direct() {
        let input = sample(10, 4);
        let direct = Direct.execute(&input, false, doubled).unwrap();
        let blocked = Blocked::new(3).execute(&input, false, doubled).unwrap();
        assert_eq!(direct, blocked);
    }

    #[test]
    fn test_blocked_reassembles_along_channel_axis() {
        let input = sample(7, 3);
        let direct = Direct.execute(&input, true, split_channels).unwrap();
        let blocked = Blocked::new(2)
            .with_threads(2)
            .execute(&input, true, split_channels)
            .unwrap();
        assert_eq!(blocked.shape(), &[2, 7, 3]);
        assert_eq!(direct, blocked);
    }

    #[test]
    fn test_blocked_handles_small_and_scalar_inputs() {
        let input = sample(2, 2);
        let result = Blocked::new(16).execute(&input, false, doubled).unwrap();
        assert_eq!(result.shape(), &[2, 2]);

        let scalar = MaskedArray::new(ArrayD::from_elem(IxDyn(&[]), 1.5));
        let result = Blocked::new(1).execute(&scalar, false, doubled).unwrap();
        assert_eq!(result.data().first(), Some(&3.0));
    }

    #[test]
    fn test_zero_block_rows_is_rejected() {
        let input = sample(2, 2);
        let result = Blocked::new(0).execute(&input, false, doubled);
        assert!(matches!(result, Err(HclmapError::InvalidParameter { .. })));
    }

    #[test]
    fn test_kernel_errors_propagate() {
        let input = sample(6, 2);
        let result: Result<MaskedArray<f64>> =
            Blocked::new(2).execute(&input, false, |_| Err(HclmapError::Execution {
                message: "boom".to_string(),
            }));
        assert!(matches!(result, Err(HclmapError::Execution { .. })));
    }

    #[test]
    fn test_execution_mode_delegates() {
        let input = sample(5, 5);
        let mode = ExecutionMode::Blocked {
            block_rows: 2,
            threads: None,
        };
        assert_eq!(mode.name(), "blocked");
        assert_eq!(ExecutionMode::default().name(), "direct");
        assert_eq!(
            mode.execute(&input, false, doubled).unwrap(),
            Direct.execute(&input, false, doubled).unwrap()
        );
    }
}
