use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::{Handle, Runtime};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use polyscene::cli::Cli;
use polyscene::config::{SceneConfig, MAX_DIMENSION};
use polyscene::core::{Canvas, RepaintFlag, SceneSnapshot};
use polyscene::display::Display;
use polyscene::math::Color;
use polyscene::panel::ControlPanel;
use polyscene::scene::Scene;
use polyscene::traits::{BoundsSource, RepaintSignal, SharedBounds};
use polyscene::window::{window_bounds, UserEvent, WindowRepaint};

const BACKGROUND: Color = Color::rgb(0x20, 0x20, 0x24);

fn build_scene(
    runtime: Handle,
    bounds: Arc<dyn BoundsSource>,
    repaint: Arc<dyn RepaintSignal>,
    cli: &Cli,
    config: &SceneConfig,
) -> Result<Arc<Scene>> {
    let scene = Arc::new(Scene::new(runtime, bounds, repaint));

    match &cli.load_snapshot {
        Some(path) => {
            let snapshot = SceneSnapshot::load(path)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
            scene.restore(snapshot);
        }
        None => {
            let mut rng = config.rng();
            scene
                .populate(config.polygons, config.edges, &mut rng)
                .context("Failed to populate scene")?;
        }
    }

    scene.zoom(config.zoom);
    Ok(scene)
}

fn save_snapshot(scene: &Scene, cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.save_snapshot {
        scene
            .snapshot()
            .save(path)
            .with_context(|| format!("Failed to save snapshot {}", path.display()))?;
    }
    Ok(())
}

// === Headless ===

fn run_headless(runtime: &Runtime, cli: &Cli, config: &SceneConfig) -> Result<()> {
    let flag = RepaintFlag::new();
    let scene = build_scene(
        runtime.handle().clone(),
        Arc::new(config.bounds()),
        Arc::new(flag.clone()),
        cli,
        config,
    )?;
    let mut canvas = Canvas::new(config.width, config.height);
    let run_for = Duration::from_millis(cli.run_for_ms);

    scene.start(config.tick_interval());
    let frames = runtime.block_on(async {
        let deadline = tokio::time::Instant::now() + run_for;
        let mut frame_clock = tokio::time::interval(config.tick_interval());
        let mut frames = 0u64;

        while tokio::time::Instant::now() < deadline {
            frame_clock.tick().await;
            if flag.take() {
                canvas.clear(BACKGROUND);
                scene.paint(&mut canvas);
                frames += 1;
            }
        }
        frames
    });
    scene.stop();

    if let Some(e) = scene.take_error() {
        return Err(e).context("Tick driver stopped early");
    }

    info!(
        "Headless run finished: {} tick(s), {} repaint request(s), {} frame(s), {} node(s)",
        scene.driver().ticks(),
        flag.requests(),
        frames,
        scene.len()
    );
    save_snapshot(&scene, cli)
}

// === Windowed ===

fn draw_controls(ctx: &egui::Context, panel: &mut ControlPanel) {
    egui::Window::new("Controls")
        .resizable(false)
        .default_pos(egui::pos2(10.0, 10.0))
        .show(ctx, |ui| {
            let mut animate = panel.animate.value();
            if ui.checkbox(&mut animate, panel.animate.label()).changed() {
                panel.animate.set(animate);
            }

            let mut zoom = panel.zoom.value();
            let slider = egui::Slider::new(&mut zoom, panel.zoom.range()).text(panel.zoom.label());
            if ui.add(slider).changed() {
                panel.zoom.set(zoom);
            }

            if ui.button(panel.quit.label()).clicked() {
                panel.quit.tap();
            }
        });
}

struct App {
    cli: Cli,
    config: SceneConfig,
    scene: Arc<Scene>,
    bounds: SharedBounds,
    repaint: Arc<WindowRepaint>,
    canvas: Canvas,
    panel: Option<ControlPanel>,
    window: Option<Arc<Window>>,
    display: Option<Display>,
}

impl App {
    fn new(
        cli: Cli,
        config: SceneConfig,
        scene: Arc<Scene>,
        bounds: SharedBounds,
        repaint: Arc<WindowRepaint>,
    ) -> Self {
        let canvas = Canvas::new(config.width, config.height);
        Self {
            cli,
            config,
            scene,
            bounds,
            repaint,
            canvas,
            panel: None,
            window: None,
            display: None,
        }
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        let bounds = window_bounds(size);
        self.bounds.set(bounds);
        self.canvas.resize(
            (bounds.width() as u32).min(MAX_DIMENSION),
            (bounds.height() as u32).min(MAX_DIMENSION),
        );

        if let Some(display) = &mut self.display {
            display.resize(size.width, size.height);
        }
        // Keep zooming about the new center
        if let Some(panel) = &self.panel {
            self.scene.zoom(panel.zoom.value());
        }
    }

    fn redraw(&mut self) {
        if let Some(e) = self.scene.take_error() {
            warn!("Animation stopped: {}", e);
        }

        self.canvas.clear(BACKGROUND);
        self.scene.paint(&mut self.canvas);

        if let (Some(display), Some(panel)) = (&mut self.display, &mut self.panel) {
            if let Err(e) = display.render(&self.canvas, |ctx| draw_controls(ctx, panel)) {
                error!("Render error: {}", e);
            }
        }
    }
}

impl ApplicationHandler<UserEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Polyscene")
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.config.width,
                    self.config.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let display = match pollster::block_on(Display::new(window.clone())) {
            Ok(display) => display,
            Err(e) => {
                error!("Failed to initialize display: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.scene.start(self.config.tick_interval());

        let quit = self.repaint.clone();
        self.panel = Some(ControlPanel::for_scene(
            self.scene.clone(),
            self.config.tick_interval(),
            self.config.zoom,
            move || {
                if let Err(e) = quit.send(UserEvent::Quit) {
                    warn!("Quit request dropped: {}", e);
                }
            },
        ));

        let size = window.inner_size();
        self.window = Some(window);
        self.display = Some(display);
        self.resize(size);
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Repaint => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            UserEvent::Quit => event_loop.exit(),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(display), Some(window)) = (&mut self.display, &self.window) {
            let response = display.handle_event(&event);
            if response.repaint {
                window.request_redraw();
            }
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.scene.stop();
        if let Err(e) = save_snapshot(&self.scene, &self.cli) {
            error!("{:#}", e);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.scene_config().context("Invalid scene configuration")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .context("Failed to start tokio runtime")?;

    if cli.no_ui {
        return run_headless(&runtime, &cli, &config);
    }

    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let repaint = Arc::new(WindowRepaint::new(event_loop.create_proxy()));
    let bounds = SharedBounds::new(config.bounds());
    let scene = build_scene(
        runtime.handle().clone(),
        Arc::new(bounds.clone()),
        repaint.clone(),
        &cli,
        &config,
    )?;

    let mut app = App::new(cli, config, scene, bounds, repaint);
    info!("Polyscene - Controls: Animate, Zoom, Quit; Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
