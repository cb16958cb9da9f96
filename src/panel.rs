use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::config::ZOOM_RANGE;
use crate::core::{Slider, TapButton, Toggle};
use crate::scene::Scene;

/// The three interaction controls bound to one scene
pub struct ControlPanel {
    pub animate: Toggle,
    pub zoom: Slider,
    pub quit: TapButton,
}

impl ControlPanel {
    /// Animate starts/stops the driver at `interval`, Zoom rescales the root
    /// about the bounds center, Quit stops the driver then calls `on_quit`
    pub fn for_scene(
        scene: Arc<Scene>,
        interval: Duration,
        zoom: f32,
        on_quit: impl FnMut() + Send + 'static,
    ) -> Self {
        let animate = {
            let scene = scene.clone();
            Toggle::new("Animate", scene.is_running(), move |on| {
                info!("Animation {}", if on { "on" } else { "off" });
                scene.set_animating(on, interval);
            })
        };

        let zoom = {
            let scene = scene.clone();
            Slider::new("Zoom", zoom, ZOOM_RANGE, move |factor| scene.zoom(factor))
        };

        let quit = {
            let mut on_quit = on_quit;
            TapButton::new("Quit", move || {
                scene.stop();
                on_quit();
            })
        };

        Self { animate, zoom, quit }
    }
}
