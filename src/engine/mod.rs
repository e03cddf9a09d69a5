//! Conversion engines.
//!
//! `colorize` maps data continuously onto a color ramp interpolated in HCL
//! space; `palettize` maps data onto discrete palette indices. Both run
//! through an [`ExecutionStrategy`](crate::execution::ExecutionStrategy) and
//! carry input masks onto their output.

pub mod bars;
pub mod colorize;
pub mod palettize;

pub use bars::{colorbar, palettebar};
pub use colorize::{colorize, colorize_with};
pub use palettize::{palettize, palettize_with};
