// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::SceneConfig;
use crate::errors::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "polyscene")]
#[command(about = "Bouncing polygon scene", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of polygons to spawn
    #[arg(long)]
    pub polygons: Option<usize>,

    /// Vertices per polygon (at least 3)
    #[arg(long)]
    pub edges: Option<usize>,

    /// Milliseconds between motion updates
    #[arg(long = "interval-ms")]
    pub interval_ms: Option<u64>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Initial zoom, 0.5 to 2.0
    #[arg(long)]
    pub zoom: Option<f32>,

    /// Seed for reproducible scenes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run without a window, painting into an offscreen canvas
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Headless run length
    #[arg(long = "run-for-ms", default_value_t = 1000)]
    pub run_for_ms: u64,

    /// Start from a saved scene instead of random polygons
    #[arg(long = "load-snapshot")]
    pub load_snapshot: Option<PathBuf>,

    /// Save the scene here on exit
    #[arg(long = "save-snapshot")]
    pub save_snapshot: Option<PathBuf>,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied, validated
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        if let Some(polygons) = self.polygons {
            config.polygons = polygons;
        }
        if let Some(edges) = self.edges {
            config.edges = edges;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.tick_interval_ms = interval_ms;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(zoom) = self.zoom {
            config.zoom = zoom;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
