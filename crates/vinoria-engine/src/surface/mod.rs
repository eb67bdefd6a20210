//! Shader-driven surface: meshes, per-vertex displacement, the fragment
//! reference, the orb's glow shells, the humanoid rig and its set
//! dressing.

mod animator;
pub mod displacement;
pub mod dressing;
pub mod mesh;
pub mod rig;
pub mod ripple;
pub mod shading;
pub mod shell;

pub use animator::{Camera, SurfaceAnimator, ORB_AMPLITUDE, RIG_AMPLITUDE};
pub use displacement::{DisplacementParams, DisplacementTerms};
pub use mesh::{SurfaceMesh, SurfaceVertex};
pub use shading::{shade, Shade, ShadeInput};
pub use shell::{ShellFrame, ShellKind};
