//! # hclmap
//!
//! Colormaps interpolated in Hue-Chroma-Luminance space.
//!
//! This library maps scalar arrays to colors using piecewise-linear colormaps
//! whose control points are given in sRGB but blended in CIE LCh(uv), and
//! buckets arrays into discrete palette indices.
//!
//! ## Key Features
//!
//! - **Perceptual blending**: Hue, chroma and luminance are interpolated independently, with hues unwrapped around the circle
//! - **Masked data**: Every input carries an optional validity mask that follows it to the output
//! - **Explicit execution**: Arrays are processed directly or in parallel row blocks
//! - **Predefined library**: Sequential, diverging and qualitative colormaps by name
//!
//! ## Architecture
//!
//! - **Colorspace**: RGB <-> HCL conversion and hue unwrapping
//! - **Interpolation**: Piecewise-linear interpolation and bin lookup
//! - **Engine**: Colorization, palettization and bar rendering
//! - **Colormaps**: The `Colormap` entity and the named library

pub mod array;
pub mod colormaps;
pub mod colorspace;
pub mod config;
pub mod engine;
pub mod error;
pub mod execution;
pub mod interpolation;
pub mod logging;

pub use array::MaskedArray;
pub use colormaps::{
    colormap_names, get_colormap, ColorComponent, ColorTableEntry, Colormap, ColormapDefinition,
};
pub use config::Config;
pub use engine::{colorbar, colorize, colorize_with, palettebar, palettize, palettize_with};
pub use error::{HclmapError, Result};
pub use execution::{Blocked, Direct, ExecutionMode, ExecutionStrategy};
pub use logging::{
    generate_operation_id, init_tracing, log_colormap_summary, log_error, log_operation_end,
    log_operation_start, log_timed_operation,
};
