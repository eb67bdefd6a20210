pub mod gpu;
pub mod matrix;
pub mod particle_pipeline;
pub mod perf;
pub mod render_state;
pub mod shell_pipeline;
pub mod surface_pipeline;

pub use gpu::{FrameUniforms, GpuContext, RendererError};
pub use perf::FrameTimer;
pub use render_state::{FrameOutcome, RenderState, ResizeAction, SurfaceLifecycle};
