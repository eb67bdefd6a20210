use std::sync::Arc;

use tracing::{debug, info, warn};
use vinoria_engine::{PointSprite, Visualization};
use winit::window::Window;

use crate::gpu::{FrameBindings, FrameUniforms, GpuContext, RendererError};
use crate::particle_pipeline::{pack_instances, ParticleInstance, ParticlePipeline};
use crate::shell_pipeline::ShellPipeline;
use crate::surface_pipeline::{pack_vertices, SurfaceGpuVertex, SurfacePipeline};

use super::helpers::{classify_surface_error, log_first_frame, SurfaceRecovery};

/// Result of one [`RenderState::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// Nothing drawn: timeout or a reconfigure.
    Skipped,
}

/// GPU side of the host surface: context, the shell, surface and point
/// pipelines, and the per-frame scratch buffers.
pub struct RenderState {
    pub gpu: GpuContext,
    frame: FrameBindings,
    uniforms: FrameUniforms,
    shells: ShellPipeline,
    surface: SurfacePipeline,
    particles: ParticlePipeline,
    vertex_scratch: Vec<SurfaceGpuVertex>,
    instance_scratch: Vec<ParticleInstance>,
    sprite_scratch: Vec<PointSprite>,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state for `vis` drawn into `window`.
    pub async fn new(
        window: Arc<Window>,
        vis: &Visualization,
        transparent: bool,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, transparent).await?;
        let format = gpu.format();

        let frame = FrameBindings::new(&gpu.device);
        let shells = ShellPipeline::new(&gpu.device, &frame.layout, format, vis.surface().shell_mesh());
        let surface = SurfacePipeline::new(&gpu.device, &frame.layout, format, vis.surface().mesh());
        let particles = ParticlePipeline::new(&gpu.device, &frame.layout, format);
        let uniforms = FrameUniforms::from_visualization(
            vis,
            gpu.size.width,
            gpu.size.height,
            gpu.scale_factor as f32,
        );

        let clear_color = if gpu.is_transparent() {
            wgpu::Color::TRANSPARENT
        } else {
            wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            }
        };

        info!(
            vertices = vis.surface().mesh().vertices.len(),
            indices = surface.index_count(),
            "render state ready"
        );

        Ok(Self {
            gpu,
            frame,
            uniforms,
            shells,
            surface,
            particles,
            vertex_scratch: Vec::new(),
            instance_scratch: Vec::new(),
            sprite_scratch: Vec::new(),
            clear_color,
        })
    }

    /// Reconfigure for a new size. Zero-sized regions are left to the host's
    /// [`SurfaceLifecycle`](super::SurfaceLifecycle) and ignored here.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.gpu.resize(width, height);
        self.uniforms.update_viewport(width, height);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.gpu.scale_factor = scale_factor;
        self.uniforms.pixel_ratio = (scale_factor as f32).max(0.1);
    }

    /// Rebuild the surface index buffer after the engine rebuilt its mesh.
    pub fn reload_mesh(&mut self, vis: &Visualization) {
        self.surface.set_mesh(&self.gpu.device, vis.surface().mesh());
    }

    /// Upload the engine state from the last tick and draw one frame.
    ///
    /// `Lost`/`Outdated` surfaces are reconfigured and the frame skipped.
    /// Unrecoverable failures return [`RendererError::ContextLost`].
    pub fn render(&mut self, vis: &Visualization) -> Result<FrameOutcome, RendererError> {
        if self.gpu.is_device_lost() {
            return Err(RendererError::ContextLost("device lost".into()));
        }

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                return match classify_surface_error(&e) {
                    SurfaceRecovery::Reconfigure => {
                        warn!("Surface {e}, reconfiguring");
                        self.gpu.reconfigure();
                        Ok(FrameOutcome::Skipped)
                    }
                    SurfaceRecovery::Skip => {
                        debug!("Surface timeout, skipping frame");
                        Ok(FrameOutcome::Skipped)
                    }
                    SurfaceRecovery::Fatal(err) => {
                        tracing::error!("Failed to get surface texture: {e}");
                        Err(err)
                    }
                };
            }
        };

        self.upload(vis);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("vinoria frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("vinoria main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.shells.render(&mut pass, &self.frame.bind_group);
            self.surface.render(&mut pass, &self.frame.bind_group);
            self.particles.render(&mut pass, &self.frame.bind_group);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(FrameOutcome::Presented)
    }

    fn upload(&mut self, vis: &Visualization) {
        self.uniforms.update_scene(vis);
        self.frame.write(&self.gpu.queue, &self.uniforms);

        let surface = vis.surface();
        pack_vertices(
            surface.mesh(),
            surface.positions(),
            surface.displacement(),
            &mut self.vertex_scratch,
        );
        self.surface.upload(&self.gpu.queue, &self.vertex_scratch);
        self.shells.prepare(&self.gpu.queue, surface.shells());

        self.sprite_scratch.clear();
        vis.swarm().write_points(&mut self.sprite_scratch);
        pack_instances(&[self.sprite_scratch.as_slice(), vis.dressing()], &mut self.instance_scratch);
        self.particles
            .prepare(&self.gpu.device, &self.gpu.queue, &self.instance_scratch);
    }
}
