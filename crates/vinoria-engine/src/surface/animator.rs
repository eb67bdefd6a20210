//! Drives one surface variant per tick: displaces the mesh, eases the
//! model rotation toward the pointer, breathes the orb's glow shells, and
//! keeps the set dressing moving.

use tracing::debug;
use vinoria_config::schema::{MeshDetail, SurfaceVariant, VisualConfig};

use super::displacement::{displace, DisplacementParams};
use super::dressing::{
    write_hologram_rig_dressing, write_platform, OrbitalRings, RisingStream, Tendrils,
};
use super::mesh::{sphere, sphere_segments, SurfaceMesh};
use super::rig::{build_rig, HUMANOID, RIG_OFFSET};
use super::ripple::RippleField;
use super::shell::{ShellFrame, ShellKind};
use crate::frame::FrameContext;
use crate::noise_field::NoiseField;
use crate::points::PointSprite;
use crate::vector::{length, sub, Vec3};

pub const ORB_AMPLITUDE: f32 = 1.0;
pub const RIG_AMPLITUDE: f32 = 0.6;
pub const ORB_ROTATION_DAMPING: f32 = 0.015;
pub const RIG_ROTATION_DAMPING: f32 = 0.05;

/// Where the scene is viewed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
}

impl Camera {
    /// Orb camera with its slow sway, or the fixed hologram camera.
    pub fn for_variant(variant: SurfaceVariant, t: f32) -> Self {
        match variant {
            SurfaceVariant::Orb => Self {
                eye: [(t * 0.15).sin() * 0.02, 0.1 + (t * 0.12).cos() * 0.01, 5.0],
                target: [0.0; 3],
                fov_y_degrees: 45.0,
            },
            SurfaceVariant::Hologram => Self {
                eye: [0.0, 1.0, 4.0],
                target: [0.0, 1.0, 0.0],
                fov_y_degrees: 50.0,
            },
        }
    }
}

pub struct SurfaceAnimator {
    variant: SurfaceVariant,
    detail: MeshDetail,
    amplitude: f32,
    seed: u64,
    rest: SurfaceMesh,
    positions: Vec<Vec3>,
    displacement: Vec<f32>,
    noise: NoiseField,
    /// Model rotation about x and y.
    rotation: [f32; 2],
    click_ripples: bool,
    ripples: RippleField,
    orbital: OrbitalRings,
    tendrils: Option<Tendrils>,
    stream: Option<RisingStream>,
    /// Unit sphere shared by every glow shell.
    shell_mesh: SurfaceMesh,
    shells: Vec<ShellFrame>,
    peak_offset: f32,
}

impl SurfaceAnimator {
    pub fn new(visual: &VisualConfig) -> Self {
        let mut animator = Self {
            variant: visual.variant,
            detail: visual.mesh_detail,
            amplitude: match visual.variant {
                SurfaceVariant::Orb => ORB_AMPLITUDE,
                SurfaceVariant::Hologram => RIG_AMPLITUDE,
            },
            seed: visual.seed,
            rest: SurfaceMesh::default(),
            positions: Vec::new(),
            displacement: Vec::new(),
            noise: NoiseField::new(fold_seed(visual.seed)),
            rotation: [0.0; 2],
            click_ripples: visual.click_ripples,
            ripples: RippleField::default(),
            orbital: OrbitalRings::default(),
            tendrils: None,
            stream: None,
            shell_mesh: SurfaceMesh::default(),
            shells: Vec::new(),
            peak_offset: 0.0,
        };
        animator.reinit();
        animator
    }

    /// Rebuild the mesh and reset all animation state.
    pub fn reinit(&mut self) {
        self.rest = match self.variant {
            SurfaceVariant::Orb => {
                let (lat, lon) = sphere_segments(self.detail);
                sphere(1.0, lat, lon)
            }
            SurfaceVariant::Hologram => build_rig(&HUMANOID, self.detail),
        };
        self.positions = self.rest.vertices.iter().map(|v| v.position).collect();
        self.displacement = vec![0.0; self.rest.vertices.len()];
        self.rotation = [0.0; 2];
        self.ripples.clear();
        self.orbital = OrbitalRings::default();
        let (lat, lon) = sphere_segments(self.detail);
        self.shell_mesh = sphere(1.0, lat / 2, lon / 2);
        self.shells.clear();
        (self.tendrils, self.stream) = match self.variant {
            SurfaceVariant::Orb => (Some(Tendrils::new(self.seed)), None),
            SurfaceVariant::Hologram => (None, Some(RisingStream::new(self.seed))),
        };
        self.peak_offset = 0.0;
        debug!(
            variant = ?self.variant,
            vertices = self.rest.vertices.len(),
            triangles = self.rest.triangle_count(),
            "surface mesh built"
        );
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        let t = ctx.t();
        let params = DisplacementParams {
            t,
            state: *ctx.state,
            pointer: ctx.pointer,
            amplitude: self.amplitude,
        };

        let mut peak = 0.0f32;
        for ((vertex, pos), disp) in self
            .rest
            .vertices
            .iter()
            .zip(self.positions.iter_mut())
            .zip(self.displacement.iter_mut())
        {
            let (moved, terms) = displace(&self.noise, vertex.position, vertex.normal, &params);
            peak = peak.max(length(sub(moved, vertex.position)));
            *pos = moved;
            *disp = terms.shading();
        }
        self.peak_offset = peak;

        let [px, py] = ctx.pointer;
        let (target, damping) = match self.variant {
            SurfaceVariant::Orb => ([py * 0.08, px * 0.15], ORB_ROTATION_DAMPING),
            SurfaceVariant::Hologram => (
                [py * 0.1, px * 0.5 + (t * 0.3).sin() * 0.1],
                RIG_ROTATION_DAMPING,
            ),
        };
        for (r, goal) in self.rotation.iter_mut().zip(target) {
            *r += (goal - *r) * damping;
        }

        let frame_scale = ctx.time.frame_scale();
        self.ripples.update(t);
        self.orbital.update(ctx.state, frame_scale);
        self.shells.clear();
        if self.variant == SurfaceVariant::Orb {
            self.shells.extend(
                ShellKind::ALL
                    .iter()
                    .map(|kind| ShellFrame::new(*kind, t, ctx.state, ctx.palette)),
            );
        }
        if let Some(stream) = &mut self.stream {
            stream.update(t, frame_scale);
        }
    }

    /// Start a click ripple. Only the orb shows ripples.
    pub fn on_click(&mut self, t: f32) {
        if self.click_ripples && self.variant == SurfaceVariant::Orb {
            self.ripples.spawn(t);
        }
    }

    /// Append this tick's set dressing to `out`.
    pub fn write_points(&self, ctx: &FrameContext, out: &mut Vec<PointSprite>) {
        let t = ctx.t();
        match self.variant {
            SurfaceVariant::Orb => {
                self.orbital.write_points(t, ctx.state, ctx.palette, out);
                if let Some(tendrils) = &self.tendrils {
                    tendrils.write_points(t, ctx.state, ctx.palette, out);
                }
                self.ripples.write_points(t, ctx.palette.accent, out);
            }
            SurfaceVariant::Hologram => {
                write_hologram_rig_dressing(t, ctx.palette, self.model_euler(), RIG_OFFSET, out);
                write_platform(t, ctx.palette, out);
                if let Some(stream) = &self.stream {
                    stream.write_points(out);
                }
            }
        }
    }

    pub fn variant(&self) -> SurfaceVariant {
        self.variant
    }

    /// Rest mesh: topology, normals and UVs never change after build.
    pub fn mesh(&self) -> &SurfaceMesh {
        &self.rest
    }

    /// Displaced model-space positions, one per mesh vertex.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-vertex displacement scalar for fragment brightness.
    pub fn displacement(&self) -> &[f32] {
        &self.displacement
    }

    /// Rest mesh for the glow shells, scaled per shell on the GPU.
    pub fn shell_mesh(&self) -> &SurfaceMesh {
        &self.shell_mesh
    }

    /// Glow shells for the last tick. Empty for the hologram.
    pub fn shells(&self) -> &[ShellFrame] {
        &self.shells
    }

    pub fn model_euler(&self) -> Vec3 {
        [self.rotation[0], self.rotation[1], 0.0]
    }

    pub fn model_offset(&self) -> Vec3 {
        match self.variant {
            SurfaceVariant::Orb => [0.0; 3],
            SurfaceVariant::Hologram => RIG_OFFSET,
        }
    }

    pub fn camera(&self, t: f32) -> Camera {
        Camera::for_variant(self.variant, t)
    }

    /// Largest vertex offset from rest in the last update.
    pub fn peak_offset(&self) -> f32 {
        self.peak_offset
    }

    pub fn ripple_count(&self) -> usize {
        self.ripples.len()
    }
}

fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

// =============================================================================
// Tests
// =============================================================================
