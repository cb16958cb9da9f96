pub mod canvas;
pub mod controls;
pub mod group;
pub mod polygon;
pub mod recording;
pub mod repaint;
pub mod snapshot;
pub mod tick_driver;
pub mod transformed;
pub mod vertex;

pub use canvas::Canvas;
pub use controls::{Slider, TapButton, Toggle};
pub use group::{Group, NodeId};
pub use polygon::{Polygon, PolygonData, PolygonStyle, MIN_EDGES};
pub use recording::{PathOp, RecordingContext};
pub use repaint::RepaintFlag;
pub use snapshot::{NodeSnapshot, SceneSnapshot};
pub use tick_driver::{DriverState, TickDriver, UpdateFn};
pub use transformed::TransformedContext;
pub use vertex::MovingVertex;
