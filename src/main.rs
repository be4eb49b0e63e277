use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use free_look::assets;
use free_look::camera::CameraState;
use free_look::cli::Cli;
use free_look::core::{FrameClock, WinitController};
use free_look::loaders::{self, MeshData};
use free_look::renderer::{FrameStatus, LineRenderer};
use free_look::scene;
use free_look::traits::{CameraController, ViewConsumer};
use free_look::types::LineVertex;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const WINDOW_TITLE: &str = "Free-Look Camera - First Person Shooter style controls";

struct App {
    cli: Cli,
    lines: Vec<LineVertex>,
    window: Option<Arc<Window>>,
    renderer: Option<LineRenderer>,
    camera: CameraState,
    controller: WinitController,
    clock: FrameClock,
    fps_elapsed: f32,
    fps_frame_mark: u64,
}

impl App {
    fn new(cli: Cli, lines: Vec<LineVertex>) -> Self {
        let camera = CameraState::from_config(&cli.camera_config());

        Self {
            cli,
            lines,
            window: None,
            renderer: None,
            camera,
            controller: WinitController::new(),
            clock: FrameClock::new(),
            fps_elapsed: 0.0,
            fps_frame_mark: 0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.fps_elapsed += delta;

        if self.fps_elapsed >= FPS_UPDATE_INTERVAL {
            log::debug!(
                "{:.1} fps, eye {:?}",
                self.clock.frames().saturating_sub(self.fps_frame_mark) as f32 / self.fps_elapsed,
                self.camera.position()
            );
            self.fps_elapsed = 0.0;
            self.fps_frame_mark = self.clock.frames();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        let sample = self.controller.sample();
        self.camera.update(&sample, delta);

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        renderer.set_view(self.camera.view_matrix());
        match renderer.render() {
            Ok(FrameStatus::Presented) => {}
            Ok(status) => log::debug!("Frame not presented: {:?}", status),
            Err(e) => {
                log::error!("Render error: {:#}", e);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(LineRenderer::new(window.clone(), &self.lines)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.controller.set_scale_factor(window.scale_factor());
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
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
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.controller.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Load the wireframe model. A missing default model only costs the
/// wireframe; a missing model that was asked for is an error.
fn load_model(cli: &Cli) -> Result<Option<MeshData>> {
    let (path, explicit) = cli.model_path();
    let fallback = cli.asset_dir.clone().or_else(assets::default_fallback_dir);

    match assets::resolve(&path, fallback.as_deref()) {
        Ok(resolved) => loaders::load_mesh(resolved).map(Some),
        Err(e) if !explicit => {
            log::warn!("{}; drawing axes only", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mesh = load_model(&cli)?;
    let lines = scene::build_scene(mesh.as_ref(), !cli.no_axes);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, lines);

    log::info!(
        "Controls: arrows/WASD move, Home/End or Space/Shift elevate, hold left mouse to look, Escape quits"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
