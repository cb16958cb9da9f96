use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use crate::math::{scale_about_transform, Bounds};
use crate::traits::{DrawContext, SceneNode};

use super::snapshot::NodeSnapshot;
use super::transformed::TransformedContext;

/// Identifier handed out by [`Group::add`], unique within its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

/// Ordered container that owns its children
///
/// Children paint in insertion order (painter's algorithm) under the group's
/// transform; motion updates reach every child with the same bounds.
pub struct Group {
    children: Vec<(NodeId, Box<dyn SceneNode>)>,
    next_id: u64,
    transform: Affine2,
}

impl Group {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            next_id: 0,
            transform: Affine2::IDENTITY,
        }
    }

    /// Append `node` on top of the existing children
    pub fn add(&mut self, node: Box<dyn SceneNode>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.children.push((id, node));
        id
    }

    /// Detach a child and hand ownership back, `None` if `id` is unknown
    pub fn remove(&mut self, id: NodeId) -> Option<Box<dyn SceneNode>> {
        let index = self.children.iter().position(|(child, _)| *child == id)?;
        Some(self.children.remove(index).1)
    }

    /// Drop every child
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn get(&self, id: NodeId) -> Option<&dyn SceneNode> {
        self.children
            .iter()
            .find(|(child, _)| *child == id)
            .map(|(_, node)| node.as_ref())
    }

    /// Child ids in paint order
    pub fn ids(&self) -> Vec<NodeId> {
        self.children.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
    }

    /// Replace the transform with a uniform scale of `factor` about `center`
    pub fn scale_about(&mut self, center: Vec2, factor: f32) {
        self.transform = scale_about_transform(center, factor);
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneNode for Group {
    fn paint(&self, ctx: &mut dyn DrawContext) {
        if self.transform == Affine2::IDENTITY {
            for (_, child) in &self.children {
                child.paint(ctx);
            }
            return;
        }

        let mut ctx = TransformedContext::new(ctx, self.transform);
        for (_, child) in &self.children {
            child.paint(&mut ctx);
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        self.children
            .iter()
            .filter_map(|(_, child)| child.bounds())
            .reduce(|acc, b| acc.union(&b))
            .map(|b| b.transformed(&self.transform))
    }

    fn advance(&mut self, bounds: &Bounds) {
        for (_, child) in &mut self.children {
            child.advance(bounds);
        }
    }

    fn snapshot(&self) -> Option<NodeSnapshot> {
        Some(NodeSnapshot::Group {
            transform: self.transform,
            children: self
                .children
                .iter()
                .filter_map(|(_, child)| child.snapshot())
                .collect(),
        })
    }

    fn name(&self) -> &str {
        "Group"
    }
}
