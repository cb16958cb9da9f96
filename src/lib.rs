pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod errors;
pub mod math;
pub mod panel;
pub mod scene;
pub mod traits;
pub mod window;

pub use config::SceneConfig;
pub use errors::{Result, SceneError};
pub use scene::Scene;
