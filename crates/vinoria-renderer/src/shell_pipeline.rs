//! wgpu pipeline for the orb's glow shells.
//!
//! One static unit-sphere mesh is drawn once per shell. Each shell has its
//! own small uniform block at bind group 1.

use vinoria_engine::surface::{ShellFrame, ShellKind, SurfaceMesh};
use wgpu::util::DeviceExt;

use crate::surface_pipeline::{pack_vertices, SurfaceGpuVertex, ADDITIVE};

/// GPU-side uniform block matching the WGSL `Shell` struct (32 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShellUniforms {
    /// rgb plus rim alpha.
    pub color: [f32; 4],
    /// radius, fresnel power, far-side-only flag, unused.
    pub shape: [f32; 4],
}

impl ShellUniforms {
    pub fn from_frame(shell: &ShellFrame) -> Self {
        Self {
            color: [shell.color[0], shell.color[1], shell.color[2], shell.rim_alpha],
            shape: [
                shell.radius,
                shell.fresnel_power,
                if shell.far_side_only { 1.0 } else { 0.0 },
                0.0,
            ],
        }
    }
}

struct ShellSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct ShellPipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    slots: Vec<ShellSlot>,
    active: usize,
}

impl ShellPipeline {
    pub fn new(
        device: &wgpu::Device,
        frame_layout: &wgpu::BindGroupLayout,
        format: wgpu::TextureFormat,
        mesh: &SurfaceMesh,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glow shell shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/glow_shell.wgsl").into()),
        });

        let shell_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glow shell bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<ShellUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glow shell pipeline layout"),
            bind_group_layouts: &[frame_layout, &shell_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glow shell pipeline"),
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
                // Near-side culling for the inner glow happens in the shader.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let mut vertices = Vec::new();
        pack_vertices(mesh, &[], &[], &mut vertices);
        if vertices.is_empty() {
            vertices.push(SurfaceGpuVertex::default());
        }
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glow shell vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices: &[u32] = if mesh.indices.is_empty() { &[0, 0, 0] } else { &mesh.indices };
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glow shell indices"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let slots = ShellKind::ALL
            .iter()
            .map(|_| {
                let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("glow shell uniforms"),
                    size: std::mem::size_of::<ShellUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("glow shell bind group"),
                    layout: &shell_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });
                ShellSlot { buffer, bind_group }
            })
            .collect();

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            slots,
            active: 0,
        }
    }

    /// Upload this tick's shells. Shells beyond the slot count are dropped.
    pub fn prepare(&mut self, queue: &wgpu::Queue, shells: &[ShellFrame]) {
        self.active = shells.len().min(self.slots.len());
        for (slot, shell) in self.slots.iter().zip(shells) {
            queue.write_buffer(
                &slot.buffer,
                0,
                bytemuck::bytes_of(&ShellUniforms::from_frame(shell)),
            );
        }
    }

    pub fn render<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        frame_bind_group: &'pass wgpu::BindGroup,
    ) {
        if self.active == 0 || self.index_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, frame_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        for slot in &self.slots[..self.active] {
            pass.set_bind_group(1, &slot.bind_group, &[]);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vinoria_engine::{ActivityState, Palette};

    #[test]
    fn shell_uniforms_are_32_bytes() {
        assert_eq!(std::mem::size_of::<ShellUniforms>(), 32);
    }

    #[test]
    fn uniforms_carry_shell_frame() {
        let shell = ShellFrame::new(
            ShellKind::InnerGlow,
            0.5,
            &ActivityState::default(),
            &Palette::default(),
        );
        let u = ShellUniforms::from_frame(&shell);
        assert_eq!(&u.color[..3], &shell.color[..]);
        assert_eq!(u.color[3], shell.rim_alpha);
        assert_eq!(u.shape[0], shell.radius);
        assert_eq!(u.shape[1], 4.5);
        assert_eq!(u.shape[2], 1.0);

        let outer = ShellFrame::new(
            ShellKind::Atmosphere,
            0.5,
            &ActivityState::default(),
            &Palette::default(),
        );
        assert_eq!(ShellUniforms::from_frame(&outer).shape[2], 0.0);
    }
}
