//! Per-frame uniform block shared by the surface and particle passes.
//!
//! `FrameUniforms` is uploaded once per frame to bind group 0. Both
//! `holo_surface.wgsl` and `particles.wgsl` declare the same `Frame` struct.

use vinoria_engine::Visualization;

use crate::matrix::{self as mat, Mat4};

/// Near and far clip planes.
pub const CLIP_NEAR: f32 = 0.1;
pub const CLIP_FAR: f32 = 100.0;

/// GPU-side uniform buffer matching the WGSL `Frame` struct.
///
/// Layout: 56 × f32 = 224 bytes, 16-byte aligned (wgpu requirement).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    /// Projection × view (column-major).
    pub view_proj: Mat4,
    /// Surface model matrix. Point sprites are already in world space.
    pub model: Mat4,
    /// Camera position in world space, w unused.
    pub camera_pos: [f32; 4],
    /// Palette base color, w unused.
    pub base_color: [f32; 4],
    /// Palette accent color, w unused.
    pub accent_color: [f32; 4],
    /// Smoothed (speaking, listening, thinking, activity).
    pub activity: [f32; 4],

    /// Elapsed time in seconds (wrapped by the engine clock).
    pub time: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Viewport width in pixels.
    pub screen_width: f32,
    /// Viewport height in pixels.
    pub screen_height: f32,

    /// Physical pixels per logical pixel.
    pub pixel_ratio: f32,
    /// Padding to reach 224 bytes (16-byte alignment).
    pub _padding: [f32; 3],
}

impl FrameUniforms {
    /// Build this frame's uniforms from the engine state after a tick.
    pub fn from_visualization(vis: &Visualization, width: u32, height: u32, pixel_ratio: f32) -> Self {
        let mut u = Self {
            view_proj: mat::IDENTITY,
            model: mat::IDENTITY,
            camera_pos: [0.0, 0.0, 0.0, 1.0],
            base_color: [0.0; 4],
            accent_color: [0.0; 4],
            activity: [0.0; 4],
            time: 0.0,
            aspect_ratio: 1.0,
            screen_width: 0.0,
            screen_height: 0.0,
            pixel_ratio: pixel_ratio.max(0.1),
            _padding: [0.0; 3],
        };
        u.update_viewport(width, height);
        u.update_scene(vis);
        u
    }

    /// Refresh time, camera, model, palette and activity.
    pub fn update_scene(&mut self, vis: &Visualization) {
        let t = vis.last_time().elapsed;
        let surface = vis.surface();
        let camera = surface.camera(t);

        let proj = mat::perspective(
            camera.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            CLIP_NEAR,
            CLIP_FAR,
        );
        let view = mat::look_at(camera.eye, camera.target, [0.0, 1.0, 0.0]);
        self.view_proj = mat::mul(&proj, &view);
        self.model = mat::model(surface.model_offset(), surface.model_euler());
        self.camera_pos = [camera.eye[0], camera.eye[1], camera.eye[2], 1.0];

        let palette = vis.palette();
        self.base_color = [palette.base[0], palette.base[1], palette.base[2], 1.0];
        self.accent_color = [palette.accent[0], palette.accent[1], palette.accent[2], 1.0];

        let state = vis.activity();
        self.activity = [state.speaking, state.listening, state.thinking, state.activity];
        self.time = t;
    }

    /// Update viewport dimensions and recompute aspect ratio.
    pub fn update_viewport(&mut self, width: u32, height: u32) {
        self.screen_width = width as f32;
        self.screen_height = height as f32;
        self.aspect_ratio = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
    }
}

/// Uniform buffer plus the bind group both pipelines share at group 0.
pub struct FrameBindings {
    pub buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl FrameBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<FrameUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

// =============================================================================
// Tests
// =============================================================================
