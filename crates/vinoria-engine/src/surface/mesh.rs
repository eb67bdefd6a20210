//! Indexed primitive meshes: UV sphere, capped cylinder, box.
//!
//! Every generator returns a [`SurfaceMesh`] in local space. Parts are
//! merged with [`SurfaceMesh::append_transformed`] to build a rig. UVs
//! follow the usual convention: u around the primitive, v bottom to top.

use std::f32::consts::{PI, TAU};

use vinoria_config::schema::MeshDetail;

use crate::vector::{add, normalize_or, rotate_euler, scale, Vec3};

/// One mesh vertex as uploaded to the GPU.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: [f32; 2],
}

/// Triangle-list mesh with a `u32` index buffer.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMesh {
    pub vertices: Vec<SurfaceVertex>,
    pub indices: Vec<u32>,
}

/// Latitude/longitude segment counts for a sphere at the given detail.
pub fn sphere_segments(detail: MeshDetail) -> (u32, u32) {
    match detail {
        MeshDetail::Low => (16, 24),
        MeshDetail::Medium => (32, 48),
        MeshDetail::High => (64, 96),
    }
}

/// Radial segment multiplier for rig primitives.
pub fn radial_scale(detail: MeshDetail) -> u32 {
    match detail {
        MeshDetail::Low => 1,
        MeshDetail::Medium => 2,
        MeshDetail::High => 3,
    }
}

impl SurfaceMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append `other` after rotating (Z, Y, X order) and translating it.
    pub fn append_transformed(&mut self, other: &SurfaceMesh, translation: Vec3, euler: Vec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices.iter().map(|v| SurfaceVertex {
            position: add(rotate_euler(v.position, euler), translation),
            normal: rotate_euler(v.normal, euler),
            uv: v.uv,
        }));
        self.indices.extend(other.indices.iter().map(|i| base + i));
    }

    fn push_grid(&mut self, rows: u32, cols: u32, base: u32) {
        let stride = cols + 1;
        for r in 0..rows {
            for c in 0..cols {
                let a = base + r * stride + c;
                let b = a + stride;
                self.indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }
    }
}

/// UV sphere of `radius` centered at the origin, north pole at +y.
pub fn sphere(radius: f32, n_lat: u32, n_lon: u32) -> SurfaceMesh {
    let n_lat = n_lat.max(2);
    let n_lon = n_lon.max(3);
    let mut mesh = SurfaceMesh {
        vertices: Vec::with_capacity(((n_lat + 1) * (n_lon + 1)) as usize),
        indices: Vec::with_capacity((n_lat * n_lon * 6) as usize),
    };

    for lat in 0..=n_lat {
        let theta = PI * lat as f32 / n_lat as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        for lon in 0..=n_lon {
            let phi = TAU * lon as f32 / n_lon as f32;
            let (sin_p, cos_p) = phi.sin_cos();
            let normal = [sin_t * cos_p, cos_t, sin_t * sin_p];
            mesh.vertices.push(SurfaceVertex {
                position: scale(normal, radius),
                normal,
                uv: [lon as f32 / n_lon as f32, 1.0 - lat as f32 / n_lat as f32],
            });
        }
    }
    mesh.push_grid(n_lat, n_lon, 0);
    mesh
}

/// Capped cylinder (or frustum) of `height` centered at the origin along y.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> SurfaceMesh {
    let segments = segments.max(3);
    let half = height * 0.5;
    let slope = if height.abs() > f32::EPSILON {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };
    let mut mesh = SurfaceMesh::default();

    // Side: two rings, bottom then top.
    for (row, (y, r)) in [(-half, radius_bottom), (half, radius_top)].into_iter().enumerate() {
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let (sin_a, cos_a) = (u * TAU).sin_cos();
            mesh.vertices.push(SurfaceVertex {
                position: [r * sin_a, y, r * cos_a],
                normal: normalize_or([sin_a, slope, cos_a], [sin_a, 0.0, cos_a]),
                uv: [u, row as f32],
            });
        }
    }
    mesh.push_grid(1, segments, 0);

    // Caps: center vertex plus a rim.
    for (y, r, ny) in [(half, radius_top, 1.0f32), (-half, radius_bottom, -1.0)] {
        if r <= 0.0 {
            continue;
        }
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(SurfaceVertex {
            position: [0.0, y, 0.0],
            normal: [0.0, ny, 0.0],
            uv: [0.5, 0.5],
        });
        for s in 0..=segments {
            let (sin_a, cos_a) = (s as f32 / segments as f32 * TAU).sin_cos();
            mesh.vertices.push(SurfaceVertex {
                position: [r * sin_a, y, r * cos_a],
                normal: [0.0, ny, 0.0],
                uv: [sin_a * 0.5 + 0.5, cos_a * 0.5 + 0.5],
            });
        }
        for s in 0..segments {
            let a = center + 1 + s;
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, a, a + 1]);
            } else {
                mesh.indices.extend_from_slice(&[center, a + 1, a]);
            }
        }
    }
    mesh
}

/// Axis-aligned box centered at the origin.
pub fn cuboid(width: f32, height: f32, depth: f32) -> SurfaceMesh {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    // (normal, u axis, v axis), each scaled by the half extents below.
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let half = [hx, hy, hz];
    let mul = |v: Vec3| [v[0] * half[0], v[1] * half[1], v[2] * half[2]];

    let mut mesh = SurfaceMesh::default();
    for (normal, u_axis, v_axis) in faces {
        let base = mesh.vertices.len() as u32;
        for (du, dv) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            let p = add(add(mul(normal), scale(mul(u_axis), du)), scale(mul(v_axis), dv));
            mesh.vertices.push(SurfaceVertex {
                position: p,
                normal,
                uv: [(du + 1.0) * 0.5, (dv + 1.0) * 0.5],
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
    }
    mesh
}

// =============================================================================
// Tests
// =============================================================================
