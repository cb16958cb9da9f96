use std::sync::{Arc, PoisonError, RwLock};

use crate::errors::Result;
use crate::math::Bounds;

/// Notifies the host that the scene changed and a redraw should happen soon
///
/// Fire-and-forget: implementations must not wait for the redraw itself.
pub trait RepaintSignal: Send + Sync {
    fn request_repaint(&self) -> Result<()>;
}

/// Current drawable region, may change when the host resizes
pub trait BoundsSource: Send + Sync {
    fn bounds(&self) -> Bounds;
}

impl BoundsSource for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

/// Bounds shared between the host (writer) and the tick driver (reader)
#[derive(Clone, Debug)]
pub struct SharedBounds {
    inner: Arc<RwLock<Bounds>>,
}

impl SharedBounds {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bounds)),
        }
    }

    pub fn set(&self, bounds: Bounds) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = bounds;
    }
}

impl BoundsSource for SharedBounds {
    fn bounds(&self) -> Bounds {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_bounds_visible_through_clone() {
        let shared = SharedBounds::new(Bounds::from_size(800.0, 600.0));
        let reader = shared.clone();

        shared.set(Bounds::from_size(1024.0, 768.0));
        assert_eq!(reader.bounds(), Bounds::from_size(1024.0, 768.0));
    }

    #[test]
    fn test_fixed_bounds_source() {
        let bounds = Bounds::from_size(10.0, 10.0);
        assert_eq!(BoundsSource::bounds(&bounds), bounds);
    }
}
