//! Configuration management for hclmap.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::colormaps::ColormapDefinition;
use crate::error::{HclmapError, Result};
use crate::execution::{ExecutionMode, DEFAULT_BLOCK_ROWS};

/// Command-line arguments for hclmap
#[derive(Parser, Debug)]
#[command(name = "hclmap")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of a predefined colormap or one defined in the config file
    pub colormap: String,

    /// Path to JSON configuration file
    #[arg(short, long, env = "HCLMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// What to produce (export, colorbar, palettebar, colorize, palettize)
    #[arg(short, long, env = "HCLMAP_OUTPUT")]
    pub output: Option<String>,

    /// Rescale the colormap so its values start here
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Rescale the colormap so its values end here
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<f64>,

    /// Reverse the colormap's colors
    #[arg(short, long)]
    pub reverse: bool,

    /// Bar height in rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Bar length in columns
    #[arg(long)]
    pub length: Option<usize>,

    /// Comma-separated data values to colorize or palettize
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<f64>,

    /// Execution mode (direct, blocked)
    #[arg(short, long, env = "HCLMAP_MODE")]
    pub mode: Option<String>,

    /// Rows per block in blocked mode
    #[arg(long, env = "HCLMAP_BLOCK_ROWS")]
    pub block_rows: Option<usize>,

    /// Worker threads in blocked mode
    #[arg(short, long, env = "HCLMAP_THREADS")]
    pub threads: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "HCLMAP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Execution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Execution mode name
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Rows per block in blocked mode
    #[serde(default = "default_block_rows")]
    pub block_rows: usize,

    /// Worker threads in blocked mode (None = rayon's global pool)
    #[serde(default)]
    pub threads: Option<usize>,
}

impl ExecutionConfig {
    /// The execution strategy described by this configuration
    pub fn strategy(&self) -> Result<ExecutionMode> {
        match self.mode.as_str() {
            "direct" => Ok(ExecutionMode::Direct),
            "blocked" => Ok(ExecutionMode::Blocked {
                block_rows: self.block_rows,
                threads: self.threads,
            }),
            other => Err(HclmapError::Config {
                message: format!(
                    "Invalid execution mode: {}. Must be one of: direct, blocked",
                    other
                ),
            }),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output kind
    #[serde(default = "default_output")]
    pub output: String,

    /// Lower bound for rescaling the colormap
    #[serde(default)]
    pub min: Option<f64>,

    /// Upper bound for rescaling the colormap
    #[serde(default)]
    pub max: Option<f64>,

    /// Reverse the colormap's colors
    #[serde(default)]
    pub reverse: bool,

    /// Bar height in rows
    #[serde(default = "default_height")]
    pub height: usize,

    /// Bar length in columns
    #[serde(default = "default_length")]
    pub length: usize,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Execution configuration
    #[serde(default)]
    pub execution: ExecutionConfig,

    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Custom colormaps by name
    #[serde(default)]
    pub colormaps: BTreeMap<String, ColormapDefinition>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Args)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args))
    }

    /// Build the configuration for already-parsed arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(output) = &args.output {
            config.render.output = output.clone();
        }
        if args.min.is_some() {
            config.render.min = args.min;
        }
        if args.max.is_some() {
            config.render.max = args.max;
        }
        if args.reverse {
            config.render.reverse = true;
        }
        if let Some(height) = args.height {
            config.render.height = height;
        }
        if let Some(length) = args.length {
            config.render.length = length;
        }
        if let Some(mode) = &args.mode {
            config.execution.mode = mode.clone();
        }
        if let Some(block_rows) = args.block_rows {
            config.execution.block_rows = block_rows;
        }
        if args.threads.is_some() {
            config.execution.threads = args.threads;
        }
        if let Some(log_level) = &args.log_level {
            config.log_level = log_level.clone();
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.execution.mode = other.execution.mode;
        self.execution.block_rows = other.execution.block_rows;
        if other.execution.threads.is_some() {
            self.execution.threads = other.execution.threads;
        }
        self.render = other.render;
        self.colormaps.extend(other.colormaps);
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(HclmapError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // Validate execution mode
        self.execution.strategy()?;
        if self.execution.block_rows == 0 {
            return Err(HclmapError::Config {
                message: "Block rows must be at least 1".to_string(),
            });
        }
        if self.execution.threads == Some(0) {
            return Err(HclmapError::Config {
                message: "Thread count must be at least 1".to_string(),
            });
        }

        // Validate output kind
        match self.render.output.as_str() {
            "export" | "colorbar" | "palettebar" | "colorize" | "palettize" => {}
            _ => {
                return Err(HclmapError::Config {
                    message: format!(
                        "Invalid output: {}. Must be one of: export, colorbar, palettebar, colorize, palettize",
                        self.render.output
                    ),
                });
            }
        }

        // Validate bar dimensions
        if self.render.height == 0 || self.render.length < 2 {
            return Err(HclmapError::Config {
                message: format!(
                    "Invalid bar size {}x{}: height must be at least 1 and length at least 2",
                    self.render.height, self.render.length
                ),
            });
        }

        // Range bounds come as a pair
        if self.render.min.is_some() != self.render.max.is_some() {
            return Err(HclmapError::Config {
                message: "Both 'min' and 'max' must be provided to rescale a colormap".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            execution: ExecutionConfig::default(),
            render: RenderConfig::default(),
            colormaps: BTreeMap::new(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            block_rows: default_block_rows(),
            threads: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            min: None,
            max: None,
            reverse: false,
            height: default_height(),
            length: default_length(),
        }
    }
}

// Default value functions for serde
fn default_mode() -> String {
    "direct".to_string()
}

fn default_block_rows() -> usize {
    DEFAULT_BLOCK_ROWS
}

fn default_output() -> String {
    "export".to_string()
}

fn default_height() -> usize {
    1
}

fn default_length() -> usize {
    16
}

fn default_log_level() -> String {
    "warn".to_string()
}
