//! hclmap - colormaps interpolated in Hue-Chroma-Luminance space
//!
//! Resolves a colormap, optionally rescales or reverses it, and prints the
//! requested product as JSON on stdout.

use std::time::Instant;

use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::{error, info};

use hclmap::config::Args;
use hclmap::{
    colorbar, get_colormap, init_tracing, log_colormap_summary, log_error, log_operation_end,
    log_operation_start, palettebar, ColorTableEntry, Colormap, Config, ExecutionMode,
    HclmapError, MaskedArray, Result,
};

/// A masked array flattened for JSON output
#[derive(Debug, Serialize)]
struct ArrayReport<A> {
    shape: Vec<usize>,
    data: Vec<A>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mask: Option<Vec<bool>>,
}

impl<A: Clone> From<&MaskedArray<A>> for ArrayReport<A> {
    fn from(array: &MaskedArray<A>) -> Self {
        Self {
            shape: array.shape().to_vec(),
            data: array.data().iter().cloned().collect(),
            mask: array.mask().map(|m| m.iter().copied().collect()),
        }
    }
}

/// Everything the CLI can print
#[derive(Debug, Serialize)]
#[serde(tag = "output", rename_all = "lowercase")]
enum Report {
    Export {
        colormap: String,
        table: Vec<ColorTableEntry>,
    },
    Colorbar {
        colormap: String,
        image: ArrayReport<f64>,
    },
    Palettebar {
        colormap: String,
        indices: ArrayReport<usize>,
        palette: Vec<Vec<f64>>,
    },
    Colorize {
        colormap: String,
        channels: ArrayReport<f64>,
    },
    Palettize {
        colormap: String,
        indices: ArrayReport<usize>,
        palette: Vec<Vec<f64>>,
    },
}

fn main() {
    if let Err(e) = run() {
        log_error(&e, "hclmap");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Load configuration
    let (config, args) = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting hclmap v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let colormap = resolve_colormap(&config, &args.colormap)?;
    let strategy = config.execution.strategy()?;

    let start = Instant::now();
    log_operation_start(&config.render.output, &args.colormap);
    let result = render(&config, &args, &colormap, strategy);
    log_operation_end(&config.render.output, start, &result);

    let report = result?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Look up a colormap by name, config definitions first, and apply range and reversal
fn resolve_colormap(config: &Config, name: &str) -> Result<Colormap> {
    let mut colormap = match config.colormaps.get(name) {
        Some(definition) => Colormap::try_from(definition.clone())?,
        None => get_colormap(name)?,
    };

    if let (Some(min), Some(max)) = (config.render.min, config.render.max) {
        colormap.set_range(min, max)?;
    }
    if config.render.reverse {
        colormap.reverse();
    }

    log_colormap_summary(name, colormap.len(), colormap.channels(), colormap.range());
    Ok(colormap)
}

fn render(
    config: &Config,
    args: &Args,
    colormap: &Colormap,
    strategy: ExecutionMode,
) -> Result<Report> {
    let name = args.colormap.clone();
    let render = &config.render;

    let report = match render.output.as_str() {
        "export" => Report::Export {
            colormap: name,
            table: colormap.export_color_table(),
        },
        "colorbar" => Report::Colorbar {
            colormap: name,
            image: ArrayReport::from(&colorbar(render.height, render.length, colormap)?),
        },
        "palettebar" => {
            let (indices, palette) = palettebar(render.height, render.length, colormap)?;
            Report::Palettebar {
                colormap: name,
                indices: ArrayReport::from(&indices),
                palette: rows(&palette),
            }
        }
        "colorize" => {
            let data = input_values(args)?;
            let channels = colormap.colorize_with(&strategy, &data)?;
            Report::Colorize {
                colormap: name,
                channels: ArrayReport::from(&channels),
            }
        }
        "palettize" => {
            let data = input_values(args)?;
            let (indices, palette) = colormap.palettize_with(&strategy, &data)?;
            Report::Palettize {
                colormap: name,
                indices: ArrayReport::from(&indices),
                palette: rows(&palette),
            }
        }
        other => {
            return Err(HclmapError::Config {
                message: format!("Unsupported output: {}", other),
            })
        }
    };

    Ok(report)
}

/// Values passed with `--values`, NaN entries masked
fn input_values(args: &Args) -> Result<MaskedArray<f64>> {
    if args.values.is_empty() {
        return Err(HclmapError::InvalidParameter {
            param: "values".to_string(),
            message: "At least one data value is required".to_string(),
        });
    }
    let data = Array1::from(args.values.clone());
    let mask = data.mapv(f64::is_nan);
    MaskedArray::with_mask(data.into_dyn(), mask)
}

fn rows(palette: &Array2<f64>) -> Vec<Vec<f64>> {
    palette.rows().into_iter().map(|row| row.to_vec()).collect()
}
