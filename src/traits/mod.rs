pub mod draw_context;
pub mod host;
pub mod scene_node;

pub use draw_context::*;
pub use host::*;
pub use scene_node::*;
