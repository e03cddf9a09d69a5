//! Colormaps described in configuration files.

use serde::{Deserialize, Serialize};

use super::colormap::Colormap;
use crate::error::{HclmapError, Result};

/// A colormap as written in JSON.
///
/// Either `points` is given as `[value, [r, g, b(, a)]]` pairs, or `values`
/// and `colors` are given together as parallel lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColormapDefinition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<(f64, Vec<f64>)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Vec<f64>>>,
}

impl TryFrom<ColormapDefinition> for Colormap {
    type Error = HclmapError;

    fn try_from(definition: ColormapDefinition) -> Result<Self> {
        match (definition.values, definition.colors) {
            (Some(values), Some(colors)) => Colormap::from_rows(values, &colors),
            (None, None) => {
                let (values, colors): (Vec<f64>, Vec<Vec<f64>>) =
                    definition.points.into_iter().unzip();
                Colormap::from_rows(values, &colors)
            }
            _ => Err(HclmapError::Config {
                message: "Both 'colors' and 'values' must be provided.".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_definition() {
        let definition: ColormapDefinition = serde_json::from_str(
            r#"{"points": [[-75.0, [1.0, 1.0, 0.0]], [30.0, [0.0, 0.0, 0.0]]]}"#,
        )
        .unwrap();
        let cmap = Colormap::try_from(definition).unwrap();
        assert_eq!(cmap.len(), 2);
        assert_eq!(cmap.range(), (-75.0, 30.0));
    }

    #[test]
    fn test_arrays_definition() {
        let definition: ColormapDefinition = serde_json::from_str(
            r#"{"values": [0, 1], "colors": [[0, 0, 0, 1], [1, 1, 1, 0]]}"#,
        )
        .unwrap();
        let cmap = Colormap::try_from(definition).unwrap();
        assert!(cmap.is_rgba());
    }

    #[test]
    fn test_values_without_colors_is_config_error() {
        let definition = ColormapDefinition {
            values: Some(vec![0.0, 1.0]),
            ..Default::default()
        };
        assert!(matches!(
            Colormap::try_from(definition),
            Err(HclmapError::Config { .. })
        ));
    }

    #[test]
    fn test_empty_definition_is_rejected() {
        assert!(Colormap::try_from(ColormapDefinition::default()).is_err());
    }
}
