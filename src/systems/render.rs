//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Mesh, grid and egui passes
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;

use sandbox_core::{Material, World};
use sandbox_math::{GroundGrid, Vec3};
use sandbox_render::{
    context::{ContextError, RenderContext},
    pipeline::{GpuMesh, LinePipeline, MeshDraw, MeshPipeline, SceneUniforms},
    Camera3D, GridGeometry, MeshId, MeshLibrary, SceneGeometry,
};

use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Init(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Init(e) => write!(f, "GPU initialisation failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Init(e)
    }
}

/// Tessellated egui output for one frame
pub struct UiFrame<'a> {
    pub primitives: &'a [egui::ClippedPrimitive],
    pub textures_delta: &'a egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    mesh_pipeline: MeshPipeline,
    line_pipeline: LinePipeline,
    meshes: Vec<(MeshId, GpuMesh)>,
    egui_renderer: egui_wgpu::Renderer,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, render_config: RenderingConfig, vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let device = &context.device;

        let mut mesh_pipeline = MeshPipeline::new(device, context.config.format);
        mesh_pipeline.ensure_depth_texture(device, context.config.width, context.config.height);

        let library = MeshLibrary::new();
        let meshes = MeshId::ALL
            .iter()
            .map(|&id| (id, GpuMesh::from_shape(device, id.label(), library.mesh(id))))
            .collect();

        let mut line_pipeline = LinePipeline::new(device, context.config.format);
        let grid = GroundGrid::new(render_config.grid_size, render_config.grid_divisions);
        let grid_geometry = GridGeometry::new(&grid, render_config.grid_center_color, render_config.grid_color);
        line_pipeline.upload_lines(device, &grid_geometry.vertices);
        log::info!("Uploaded ground grid with {} lines", grid_geometry.line_count());

        let egui_renderer = egui_wgpu::Renderer::new(device, context.config.format, None, 1, false);

        Ok(Self {
            context,
            mesh_pipeline,
            line_pipeline,
            meshes,
            egui_renderer,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
        self.mesh_pipeline
            .ensure_depth_texture(&self.context.device, self.context.config.width, self.context.config.height);
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Uniforms for the current camera and lighting config
    fn scene_uniforms(&self, camera: &Camera3D) -> SceneUniforms {
        let cfg = &self.render_config;
        let sun = Vec3::from_array(cfg.sun_position).normalize_or(Vec3::Y);
        let material = Material::default();
        SceneUniforms {
            view_proj: camera.view_projection(self.context.aspect_ratio()).to_cols_array_2d(),
            camera_pos: camera.position.extend(1.0).to_array(),
            light_dir: sun.extend(cfg.sun_intensity).to_array(),
            params: [cfg.ambient_intensity, material.metalness, material.roughness, 0.0],
        }
    }

    /// Render a single frame: meshes, grid, then the UI on top
    pub fn render_frame(&mut self, camera: &Camera3D, world: &World, ui: &UiFrame<'_>) -> Result<(), RenderError> {
        let uniforms = self.scene_uniforms(camera);
        self.mesh_pipeline.update_uniforms(&self.context.queue, &uniforms);
        self.line_pipeline.update_uniforms(&self.context.queue, &uniforms);

        let geometry = SceneGeometry::from_world(world);
        self.mesh_pipeline
            .upload_instances(&self.context.device, &self.context.queue, &geometry.instances);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let draws: Vec<MeshDraw<'_>> = geometry
            .batches
            .iter()
            .filter_map(|batch| {
                self.meshes
                    .iter()
                    .find(|(id, _)| *id == batch.mesh)
                    .map(|(_, mesh)| MeshDraw {
                        mesh,
                        instances: batch.instances.clone(),
                    })
            })
            .collect();

        let bg = self.render_config.background_color.to_linear();
        self.mesh_pipeline.render(
            &mut encoder,
            &view,
            &draws,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: 1.0,
            },
        );

        if let Some(depth_view) = self.mesh_pipeline.depth_view() {
            self.line_pipeline.render(&mut encoder, &view, depth_view);
        }

        // UI pass
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.context.config.width, self.context.config.height],
            pixels_per_point: ui.pixels_per_point,
        };
        for (id, delta) in &ui.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.context.device, &self.context.queue, *id, delta);
        }
        let ui_commands = self.egui_renderer.update_buffers(
            &self.context.device,
            &self.context.queue,
            &mut encoder,
            ui.primitives,
            &screen,
        );
        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("UI Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui_renderer
                .render(&mut pass.forget_lifetime(), ui.primitives, &screen);
        }
        for id in &ui.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.context
            .queue
            .submit(ui_commands.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
