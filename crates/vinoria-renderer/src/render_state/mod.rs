mod helpers;
mod state;

pub use helpers::{classify_surface_error, ResizeAction, SurfaceLifecycle, SurfaceRecovery};
pub use state::{FrameOutcome, RenderState};
