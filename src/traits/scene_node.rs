use crate::core::snapshot::NodeSnapshot;
use crate::math::Bounds;

use super::draw_context::DrawContext;

/// Drawable element of the scene tree
pub trait SceneNode: Send {
    /// Emit this node's paths into `ctx`
    fn paint(&self, ctx: &mut dyn DrawContext);

    /// Area covered by the node, `None` when it covers nothing
    fn bounds(&self) -> Option<Bounds>;

    /// Advance per-frame state, keeping motion inside `bounds`
    fn advance(&mut self, _bounds: &Bounds) {}

    /// Serializable form of the node, `None` for nodes that can't be persisted
    fn snapshot(&self) -> Option<NodeSnapshot> {
        None
    }

    /// Node name for debugging
    fn name(&self) -> &str {
        "Node"
    }
}
