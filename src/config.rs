use std::fs;
use std::path::Path;
use std::time::Duration;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::core::MIN_EDGES;
use crate::errors::{Result, SceneError};
use crate::math::Bounds;

pub const DEFAULT_POLYGONS: usize = 5;
pub const DEFAULT_EDGES: usize = 5;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 40;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Largest canvas side, wgpu's default `max_texture_dimension_2d`
pub const MAX_DIMENSION: u32 = 8192;

/// Zoom factors the host accepts
pub const ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.5..=2.0;

/// Everything needed to build and drive a scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub polygons: usize,
    pub edges: usize,
    pub tick_interval_ms: u64,
    pub width: u32,
    pub height: u32,
    pub zoom: f32,
    /// Fixed seed for reproducible scenes
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            polygons: DEFAULT_POLYGONS,
            edges: DEFAULT_EDGES,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: 1.0,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Read a JSON config; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = serde_json::from_str(&fs::read_to_string(path)?)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.edges < MIN_EDGES {
            return Err(SceneError::InvalidEdgeCount(self.edges));
        }
        if self.tick_interval_ms == 0 {
            return Err(SceneError::InvalidConfig("tick interval must be at least 1ms".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidConfig(format!(
                "drawable area {}x{} is empty",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(SceneError::InvalidConfig(format!(
                "drawable area {}x{} exceeds {}x{}",
                self.width, self.height, MAX_DIMENSION, MAX_DIMENSION
            )));
        }
        if !ZOOM_RANGE.contains(&self.zoom) {
            return Err(SceneError::InvalidConfig(format!(
                "zoom {} outside {:?}",
                self.zoom, ZOOM_RANGE
            )));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Initial drawable region anchored at the origin
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width as f32, self.height as f32)
    }

    /// Seeded generator when a seed is set, otherwise a fresh random one
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(rand::random))
    }
}
