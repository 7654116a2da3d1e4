//! Primitive Physics Sandbox
//!
//! Fly around a ground plane, drop cubes, spheres and walls, and watch them
//! fall into a black hole.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use sandbox::config::AppConfig;
use sandbox::input::{InputAction, InputMapper};
use sandbox::sandbox::{Sandbox, WindowRequest};
use sandbox::systems::{RenderError, RenderSystem, UiFrame, WindowSystem};
use sandbox::ui::{self, HudInfo};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    sandbox: Sandbox,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,
    /// Mode label currently in the title bar
    title_mode: &'static str,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let sandbox = Sandbox::from_config(&config);
        log::info!(
            "Sandbox ready: limit {} objects, black hole {}",
            config.sandbox.max_objects,
            if config.black_hole.enabled { "on" } else { "off" }
        );

        Self {
            config,
            sandbox,
            window: None,
            render: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,
            title_mode: "",
        }
    }

    /// Put the current mode in the title bar if it changed
    fn refresh_title(&mut self) {
        let mode = self.sandbox.studio.strings().mode(self.sandbox.studio.edit_mode);
        if mode == self.title_mode {
            return;
        }
        if let Some(window) = &self.window {
            window.update_title(mode);
            self.title_mode = mode;
        }
    }

    fn apply_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match self.sandbox.handle_action(action) {
            Some(WindowRequest::Exit) => event_loop.exit(),
            Some(WindowRequest::ToggleFullscreen) => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            Some(WindowRequest::UpdateTitle) => self.refresh_title(),
            None => {}
        }
    }

    /// Run the UI for this frame and hand back what the renderer needs
    fn run_ui(&mut self, hud: &HudInfo) -> Option<egui::FullOutput> {
        let (window, egui_state) = (self.window.as_ref()?, self.egui_state.as_mut()?);
        let raw_input = egui_state.take_egui_input(window.window());

        let sandbox = &mut self.sandbox;
        let mut commands = Vec::new();
        let output = self.egui_ctx.run(raw_input, |ctx| {
            commands = ui::draw(ctx, &mut sandbox.studio, &sandbox.world, hud);
        });

        for command in commands {
            sandbox.handle_command(command);
        }
        Some(output)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = self.sandbox.update();
        if result.steps == 0 {
            log::trace!("Frame shorter than one physics step ({:.4}s)", result.dt);
        }

        let hud = HudInfo {
            camera_position: result.camera_position,
            show_coordinates: self.config.debug.show_hud,
        };
        let Some(output) = self.run_ui(&hud) else {
            return;
        };
        self.refresh_title();

        if let (Some(window), Some(egui_state)) = (&self.window, &mut self.egui_state) {
            egui_state.handle_platform_output(window.window(), output.platform_output);
        }

        let primitives = self.egui_ctx.tessellate(output.shapes, output.pixels_per_point);
        let ui_frame = UiFrame {
            primitives: &primitives,
            textures_delta: &output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        };

        if let Some(render) = &mut self.render {
            match render.render_frame(&self.sandbox.camera, &self.sandbox.world, &ui_frame) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        // Request next frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };
        let (width, height) = render.size();
        log::info!("Rendering at {}x{}", width, height);

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window.window(),
            Some(window.window().scale_factor() as f32),
            None,
            None,
        );

        self.window = Some(window);
        self.render = Some(render);
        self.egui_state = Some(egui_state);
        self.refresh_title();
        self.sandbox.pause();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // egui sees every event first so it can track focus and hover
        let consumed = match (&self.window, &mut self.egui_state) {
            (Some(window), Some(egui_state)) => egui_state.on_window_event(window.window(), &event).consumed,
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.sandbox.pause();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                let ui_wants_keyboard = self.egui_ctx.wants_keyboard_input();
                let ctx = self.sandbox.input_context(ui_wants_keyboard);
                if let Some(action) = InputMapper::map_keyboard(key, event.state, ctx) {
                    self.apply_action(event_loop, action);
                    return;
                }
                // Releases always reach the controller so keys never stick
                if !ui_wants_keyboard || event.state == ElementState::Released {
                    self.sandbox.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let over_ui = consumed || self.egui_ctx.wants_pointer_input();
                match button {
                    MouseButton::Right => {
                        if !over_ui || state == ElementState::Released {
                            self.sandbox.controller.process_mouse_button(button, state);
                        }
                    }
                    _ => {
                        let ctx = self.sandbox.input_context(over_ui);
                        if let Some(action) = InputMapper::map_mouse_button(button, state, ctx) {
                            self.apply_action(event_loop, action);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.sandbox.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => AppConfig::default().debug.log_level,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting {}", config.window.title);

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
