//! Colormaps and the library of predefined color ramps.
//!
//! The predefined colormaps are built lazily on first use; lookups hand out
//! independent copies so callers can `reverse` or `set_range` them freely.

pub mod colormap;
pub mod definition;
pub mod diverging;
pub mod qualitative;
pub mod sequential;

pub use colormap::{ColorComponent, ColorTableEntry, Colormap};
pub use definition::ColormapDefinition;

use once_cell::sync::Lazy;

use crate::error::{HclmapError, Result};

/// Get a copy of a predefined colormap by name
pub fn get_colormap(name: &str) -> Result<Colormap> {
    let wanted = name.to_lowercase();
    library()
        .find(|(candidate, _)| *candidate == wanted)
        .map(|(_, cmap)| Colormap::clone(cmap))
        .ok_or_else(|| HclmapError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        })
}

/// Names of all predefined colormaps
pub fn colormap_names() -> Vec<&'static str> {
    library().map(|(name, _)| name).collect()
}

fn library() -> impl Iterator<Item = (&'static str, &'static Lazy<Colormap>)> {
    sequential::SEQUENTIAL
        .iter()
        .chain(diverging::DIVERGING)
        .chain(qualitative::QUALITATIVE)
        .copied()
}

/// Build a table from 8-bit RGB control colors
fn from_rgb8(points: &[(f64, [u8; 3])]) -> Colormap {
    let scaled: Vec<(f64, [f64; 3])> = points
        .iter()
        .map(|(value, [r, g, b])| {
            (
                *value,
                [*r as f64 / 255.0, *g as f64 / 255.0, *b as f64 / 255.0],
            )
        })
        .collect();
    Colormap::from_table(&scaled)
}
