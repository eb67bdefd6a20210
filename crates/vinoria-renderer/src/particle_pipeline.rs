//! Instanced point-sprite pipeline for the particle swarm and set dressing.
//!
//! Each sprite is a camera-facing quad expanded in the vertex shader from
//! a shared unit quad. Sizes are in pixels, attenuated by distance.

use vinoria_engine::PointSprite;
use wgpu::util::DeviceExt;

use crate::surface_pipeline::ADDITIVE;

/// One point sprite instance.
///
/// Layout: position(vec3) + size(f32) + color(vec4) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    /// Pixel size at the reference camera distance.
    pub size: f32,
    /// RGBA, each component 0.0..=1.0.
    pub color: [f32; 4],
}

impl ParticleInstance {
    pub fn from_sprite(sprite: &PointSprite) -> Self {
        Self {
            position: sprite.position,
            size: sprite.size.max(0.0),
            color: [
                sprite.color[0],
                sprite.color[1],
                sprite.color[2],
                sprite.alpha.clamp(0.0, 1.0),
            ],
        }
    }
}

/// Pack any number of sprite lists into one instance array.
pub fn pack_instances(lists: &[&[PointSprite]], out: &mut Vec<ParticleInstance>) {
    out.clear();
    out.reserve(lists.iter().map(|l| l.len()).sum());
    for list in lists {
        out.extend(list.iter().map(ParticleInstance::from_sprite));
    }
}

/// Unit quad corner in `[-0.5, 0.5]²`.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
struct Corner {
    offset: [f32; 2],
}

const CORNERS: &[Corner] = &[
    Corner { offset: [-0.5, -0.5] },
    Corner { offset: [0.5, -0.5] },
    Corner { offset: [0.5, 0.5] },
    Corner { offset: [-0.5, 0.5] },
];

const CORNER_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

/// Initial instance capacity; grows on demand.
pub const INITIAL_CAPACITY: usize = 4096;

/// Renders point sprites via instanced drawing.
pub struct ParticlePipeline {
    pipeline: wgpu::RenderPipeline,
    corner_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    capacity: usize,
    instance_count: u32,
}

impl ParticlePipeline {
    pub fn new(
        device: &wgpu::Device,
        frame_layout: &wgpu::BindGroupLayout,
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/particles.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle pipeline layout"),
            bind_group_layouts: &[frame_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[
                    // Corner buffer (per-vertex)
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Corner>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        }],
                    },
                    // Instance buffer (per-instance)
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[
                            // position + size: vec4<f32>
                            wgpu::VertexAttribute {
                                offset: 0,
                                shader_location: 1,
                                format: wgpu::VertexFormat::Float32x4,
                            },
                            // color: vec4<f32>
                            wgpu::VertexAttribute {
                                offset: 16,
                                shader_location: 2,
                                format: wgpu::VertexFormat::Float32x4,
                            },
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let corner_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle corners"),
            contents: bytemuck::cast_slice(CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle indices"),
            contents: bytemuck::cast_slice(CORNER_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            corner_buffer,
            index_buffer,
            instance_buffer: Self::create_instance_buffer(device, INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            instance_count: 0,
        }
    }

    /// Upload instances, growing the buffer when needed.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[ParticleInstance],
    ) {
        if instances.len() > self.capacity {
            self.capacity = grown_capacity(self.capacity, instances.len());
            self.instance_buffer = Self::create_instance_buffer(device, self.capacity);
            tracing::debug!(capacity = self.capacity, "particle instance buffer grown");
        }
        self.instance_count = instances.len() as u32;
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    /// Draw all prepared sprites into the render pass.
    pub fn render<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        frame_bind_group: &'pass wgpu::BindGroup,
    ) {
        if self.instance_count == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, frame_bind_group, &[]);
        pass.set_vertex_buffer(0, self.corner_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..CORNER_INDICES.len() as u32, 0, 0..self.instance_count);
    }

    fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle instances"),
            size: (capacity * std::mem::size_of::<ParticleInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }
}

/// Next power of two that holds `needed`, never shrinking.
fn grown_capacity(current: usize, needed: usize) -> usize {
    needed.next_power_of_two().max(current)
}

// =============================================================================
// Tests
// =============================================================================
