use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::errors::Result;
use crate::traits::RepaintSignal;

/// Dirty flag a polling host checks once per frame
#[derive(Debug, Clone, Default)]
pub struct RepaintFlag {
    dirty: Arc<AtomicBool>,
    requests: Arc<AtomicU64>,
}

impl RepaintFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a repaint was requested since the last call
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Requests received over the flag's lifetime
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Acquire)
    }
}

impl RepaintSignal for RepaintFlag {
    fn request_repaint(&self) -> Result<()> {
        self.requests.fetch_add(1, Ordering::AcqRel);
        self.dirty.store(true, Ordering::Release);
        Ok(())
    }
}
