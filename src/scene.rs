use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use glam::Vec2;
use log::info;
use rand::Rng;
use tokio::runtime::Handle;

use crate::core::{Group, NodeId, Polygon, SceneSnapshot, TickDriver};
use crate::errors::{Result, SceneError};
use crate::math::Bounds;
use crate::traits::{BoundsSource, DrawContext, RepaintSignal, SceneNode};

/// One animated scene: a root group, its drawable region and its own driver
///
/// Every access to the tree goes through the root lock, so ticks and
/// interaction callbacks are serialized. Share it as `Arc<Scene>`.
pub struct Scene {
    root: Arc<Mutex<Group>>,
    bounds: Arc<dyn BoundsSource>,
    driver: TickDriver,
}

fn lock(root: &Mutex<Group>) -> MutexGuard<'_, Group> {
    root.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Scene {
    /// Empty scene whose driver ticks on `runtime`
    pub fn new(runtime: Handle, bounds: Arc<dyn BoundsSource>, repaint: Arc<dyn RepaintSignal>) -> Self {
        let root = Arc::new(Mutex::new(Group::new()));

        let update = {
            let root = root.clone();
            let bounds = bounds.clone();
            Arc::new(move || {
                let region = bounds.bounds();
                lock(&root).advance(&region);
            })
        };

        Self {
            root,
            bounds,
            driver: TickDriver::new(runtime, update, repaint),
        }
    }

    /// Current drawable region
    pub fn bounds(&self) -> Bounds {
        self.bounds.bounds()
    }

    pub fn add(&self, node: Box<dyn SceneNode>) -> NodeId {
        lock(&self.root).add(node)
    }

    /// Add a random polygon of `edges` vertices inside the current bounds
    pub fn add_polygon<R: Rng>(&self, edges: usize, rng: &mut R) -> Result<NodeId> {
        let polygon = Polygon::random(&self.bounds(), edges, rng)?;
        Ok(self.add(Box::new(polygon)))
    }

    /// Add `count` random polygons, all or nothing
    pub fn populate<R: Rng>(&self, count: usize, edges: usize, rng: &mut R) -> Result<Vec<NodeId>> {
        let region = self.bounds();
        let polygons = (0..count)
            .map(|_| Polygon::random(&region, edges, &mut *rng))
            .collect::<Result<Vec<_>>>()?;

        let mut root = lock(&self.root);
        let ids = polygons
            .into_iter()
            .map(|polygon| root.add(Box::new(polygon)))
            .collect();
        info!("Populated scene with {} polygon(s) of {} edges", count, edges);
        Ok(ids)
    }

    pub fn remove(&self, id: NodeId) -> Option<Box<dyn SceneNode>> {
        lock(&self.root).remove(id)
    }

    pub fn clear(&self) {
        lock(&self.root).clear();
    }

    pub fn len(&self) -> usize {
        lock(&self.root).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.root).is_empty()
    }

    /// Run `f` with exclusive access to the root group
    pub fn with_root<T>(&self, f: impl FnOnce(&mut Group) -> T) -> T {
        f(&mut lock(&self.root))
    }

    /// One motion update outside the driver
    pub fn step(&self) {
        let region = self.bounds();
        lock(&self.root).advance(&region);
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        lock(&self.root).paint(ctx);
    }

    /// Replace the root transform with a scale of `factor` about `center`
    pub fn scale_about(&self, center: Vec2, factor: f32) {
        lock(&self.root).scale_about(center, factor);
    }

    /// Scale about the center of the current bounds
    pub fn zoom(&self, factor: f32) {
        self.scale_about(self.bounds().center(), factor);
    }

    pub fn start(&self, interval: Duration) {
        self.driver.start(interval);
    }

    pub fn stop(&self) {
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Start at `interval` when `animate`, stop otherwise
    pub fn set_animating(&self, animate: bool, interval: Duration) {
        if animate {
            self.start(interval);
        } else {
            self.stop();
        }
    }

    pub fn driver(&self) -> &TickDriver {
        &self.driver
    }

    /// Error that stopped the driver, if any
    pub fn take_error(&self) -> Option<SceneError> {
        self.driver.take_error()
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let root = lock(&self.root);
        let nodes = root
            .ids()
            .into_iter()
            .filter_map(|id| root.get(id).and_then(|node| node.snapshot()))
            .collect();
        SceneSnapshot { nodes }
    }

    /// Replace every node with the snapshot's, keeping the root transform
    pub fn restore(&self, snapshot: SceneSnapshot) -> Vec<NodeId> {
        let mut root = lock(&self.root);
        root.clear();
        let ids: Vec<NodeId> = snapshot
            .nodes
            .into_iter()
            .map(|node| root.add(node.into_node()))
            .collect();
        info!("Restored {} node(s)", ids.len());
        ids
    }
}
