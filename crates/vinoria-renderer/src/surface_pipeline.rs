//! wgpu render pipeline for the holographic surface (orb sphere or rig).
//!
//! Topology and the index buffer are uploaded once. Displaced positions
//! and the per-vertex displacement scalar change every frame and are
//! rewritten into a dynamic vertex buffer.

use vinoria_engine::surface::SurfaceMesh;
use vinoria_engine::vector::Vec3;
use wgpu::util::DeviceExt;

/// A single surface vertex as seen by `holo_surface.wgsl`.
///
/// Layout: position(vec3) + normal(vec3) + uv(vec2) + displacement(f32) = 36 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceGpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub displacement: f32,
}

impl SurfaceGpuVertex {
    /// wgpu vertex buffer layout for `SurfaceGpuVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SurfaceGpuVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            // uv: vec2<f32> at offset 24
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 24,
                shader_location: 2,
            },
            // displacement: f32 at offset 32
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 32,
                shader_location: 3,
            },
        ],
    };
}

/// Combine the rest mesh with this frame's displaced positions.
///
/// Missing positions or displacement values fall back to the rest pose.
pub fn pack_vertices(
    mesh: &SurfaceMesh,
    positions: &[Vec3],
    displacement: &[f32],
    out: &mut Vec<SurfaceGpuVertex>,
) {
    out.clear();
    out.extend(mesh.vertices.iter().enumerate().map(|(i, v)| SurfaceGpuVertex {
        position: positions.get(i).copied().unwrap_or(v.position),
        normal: v.normal,
        uv: v.uv,
        displacement: displacement.get(i).copied().unwrap_or(0.0),
    }));
}

/// Additive blending: overlapping translucent layers brighten.
pub const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Manages the pipeline and buffers for surface rendering.
pub struct SurfacePipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl SurfacePipeline {
    /// Create the surface pipeline for `mesh`.
    ///
    /// - `frame_layout`: layout for bind group 0 (shared `FrameUniforms`)
    /// - `format`: swapchain format the pass renders into
    pub fn new(
        device: &wgpu::Device,
        frame_layout: &wgpu::BindGroupLayout,
        format: wgpu::TextureFormat,
        mesh: &SurfaceMesh,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("holo surface shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/holo_surface.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("holo surface pipeline layout"),
            bind_group_layouts: &[frame_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("holo surface pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SurfaceGpuVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // Both faces: the hologram is see-through.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (vertex_buffer, vertex_capacity) = Self::create_vertex_buffer(device, mesh.vertices.len());
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("holo surface indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_capacity,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    /// Replace the index buffer after the mesh was rebuilt.
    pub fn set_mesh(&mut self, device: &wgpu::Device, mesh: &SurfaceMesh) {
        self.index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("holo surface indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        self.index_count = mesh.indices.len() as u32;
        if mesh.vertices.len() > self.vertex_capacity {
            let (buffer, capacity) = Self::create_vertex_buffer(device, mesh.vertices.len());
            self.vertex_buffer = buffer;
            self.vertex_capacity = capacity;
        }
    }

    /// Upload this frame's vertices. Extra vertices beyond capacity are dropped.
    pub fn upload(&self, queue: &wgpu::Queue, vertices: &[SurfaceGpuVertex]) {
        let count = vertices.len().min(self.vertex_capacity);
        if count > 0 {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices[..count]));
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Draw the surface into an open pass.
    pub fn render<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        frame_bind_group: &'pass wgpu::BindGroup,
    ) {
        if self.index_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, frame_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    fn create_vertex_buffer(device: &wgpu::Device, count: usize) -> (wgpu::Buffer, usize) {
        let capacity = count.max(1);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("holo surface vertices"),
            size: (capacity * std::mem::size_of::<SurfaceGpuVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        (buffer, capacity)
    }
}

// =============================================================================
// Tests
// =============================================================================
