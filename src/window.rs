use std::sync::{Mutex, PoisonError};

use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoopProxy;

use crate::errors::{Result, SceneError};
use crate::math::Bounds;
use crate::traits::RepaintSignal;

/// Events the scene sends into the winit loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    Repaint,
    Quit,
}

/// Repaint signal delivered as a user event to the event loop thread
pub struct WindowRepaint {
    proxy: Mutex<EventLoopProxy<UserEvent>>,
}

impl WindowRepaint {
    pub fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }

    pub fn send(&self, event: UserEvent) -> Result<()> {
        self.proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send_event(event)
            .map_err(|_| SceneError::RepaintChannelClosed)
    }
}

impl RepaintSignal for WindowRepaint {
    fn request_repaint(&self) -> Result<()> {
        self.send(UserEvent::Repaint)
    }
}

/// Drawable region covering a window's client area
pub fn window_bounds(size: PhysicalSize<u32>) -> Bounds {
    Bounds::from_size(size.width.max(1) as f32, size.height.max(1) as f32)
}
