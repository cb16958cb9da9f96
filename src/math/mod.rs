mod bounds;
mod color;
mod transform;

pub use bounds::Bounds;
pub use color::{hsv_to_rgb, Color};
pub use transform::{length_scale, scale_about, scale_about_transform};

/// Position in scene coordinates
pub type Point2D = glam::Vec2;

/// Per-tick displacement
pub type Velocity2D = glam::Vec2;
