use crate::gpu::RendererError;

/// What to do after `get_current_texture` fails.
#[derive(Debug)]
pub enum SurfaceRecovery {
    /// Reconfigure the surface and try again next frame.
    Reconfigure,
    /// Drop this frame only.
    Skip,
    /// Stop the frame loop.
    Fatal(RendererError),
}

pub fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceRecovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        wgpu::SurfaceError::Timeout => SurfaceRecovery::Skip,
        wgpu::SurfaceError::OutOfMemory => {
            SurfaceRecovery::Fatal(RendererError::ContextLost(err.to_string()))
        }
        other => SurfaceRecovery::Fatal(RendererError::ContextLost(other.to_string())),
    }
}

/// Where the host surface is in its life, as far as resizes are concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurfaceLifecycle {
    /// No window yet, or torn down.
    #[default]
    Absent,
    /// Window exists with zero area; the renderer is not built yet.
    Deferred,
    Active,
    /// Renderer exists but the region has zero area.
    Paused,
}

/// What a resize asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAction {
    Ignore,
    /// First non-zero size after a deferred start.
    CreateRenderer,
    Reconfigure,
    /// The region just lost its area. Stop drawing and ticking.
    Pause,
    /// Area is back after a pause. Reconfigure and restart frame timing.
    Resume,
}

impl SurfaceLifecycle {
    /// Apply a resize to `width`x`height` and return the action it needs.
    pub fn on_resize(&mut self, width: u32, height: u32) -> ResizeAction {
        use SurfaceLifecycle::*;

        let has_area = width > 0 && height > 0;
        let (next, action) = match (*self, has_area) {
            (Absent, _) => (Absent, ResizeAction::Ignore),
            (Deferred, false) => (Deferred, ResizeAction::Ignore),
            (Deferred, true) => (Active, ResizeAction::CreateRenderer),
            (Active, false) => (Paused, ResizeAction::Pause),
            (Active, true) => (Active, ResizeAction::Reconfigure),
            (Paused, false) => (Paused, ResizeAction::Ignore),
            (Paused, true) => (Active, ResizeAction::Resume),
        };
        *self = next;
        action
    }

    /// Whether frames should be ticked and drawn.
    pub fn is_drawing(self) -> bool {
        self == SurfaceLifecycle::Active
    }
}

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}
