//! The humanoid hologram: primitive solids assembled once into one mesh.

use vinoria_config::schema::MeshDetail;

use super::mesh::{cuboid, cylinder, radial_scale, sphere, SurfaceMesh};
use crate::vector::Vec3;

/// Whole-rig offset applied as part of the model transform.
pub const RIG_OFFSET: Vec3 = [0.0, -0.5, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Sphere { radius: f32 },
    Cylinder { top: f32, bottom: f32, height: f32, segments: u32 },
    Cuboid { width: f32, height: f32, depth: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigPart {
    pub name: &'static str,
    pub shape: PartShape,
    pub translation: Vec3,
    pub rotation: Vec3,
}

pub const HUMANOID: [RigPart; 7] = [
    RigPart {
        name: "head",
        shape: PartShape::Sphere { radius: 0.35 },
        translation: [0.0, 2.2, 0.0],
        rotation: [0.0; 3],
    },
    RigPart {
        name: "neck",
        shape: PartShape::Cylinder { top: 0.1, bottom: 0.12, height: 0.2, segments: 16 },
        translation: [0.0, 1.8, 0.0],
        rotation: [0.0; 3],
    },
    RigPart {
        name: "torso",
        shape: PartShape::Cylinder { top: 0.25, bottom: 0.4, height: 1.0, segments: 16 },
        translation: [0.0, 1.2, 0.0],
        rotation: [0.0; 3],
    },
    RigPart {
        name: "shoulders",
        shape: PartShape::Cuboid { width: 0.9, height: 0.15, depth: 0.25 },
        translation: [0.0, 1.6, 0.0],
        rotation: [0.0; 3],
    },
    RigPart {
        name: "left_arm",
        shape: PartShape::Cylinder { top: 0.08, bottom: 0.06, height: 0.8, segments: 12 },
        translation: [-0.55, 1.1, 0.0],
        rotation: [0.0, 0.0, 0.2],
    },
    RigPart {
        name: "right_arm",
        shape: PartShape::Cylinder { top: 0.08, bottom: 0.06, height: 0.7, segments: 12 },
        translation: [0.5, 1.2, 0.3],
        rotation: [0.5, 0.0, -0.3],
    },
    RigPart {
        name: "lower_body",
        shape: PartShape::Cylinder { top: 0.35, bottom: 0.15, height: 1.2, segments: 16 },
        translation: [0.0, 0.4, 0.0],
        rotation: [0.0; 3],
    },
];

impl PartShape {
    fn mesh(&self, detail: MeshDetail) -> SurfaceMesh {
        let k = radial_scale(detail);
        match *self {
            PartShape::Sphere { radius } => sphere(radius, 16 * k, 16 * k),
            PartShape::Cylinder { top, bottom, height, segments } => {
                cylinder(top, bottom, height, segments * k)
            }
            PartShape::Cuboid { width, height, depth } => cuboid(width, height, depth),
        }
    }
}

/// Merge every part of `parts` into a single mesh in rig space.
pub fn build_rig(parts: &[RigPart], detail: MeshDetail) -> SurfaceMesh {
    let mut rig = SurfaceMesh::default();
    for part in parts {
        rig.append_transformed(&part.shape.mesh(detail), part.translation, part.rotation);
    }
    rig
}

// =============================================================================
// Tests
// =============================================================================
