//! Teardown: release GPU resources, then the window.

use vinoria_engine::ActivityInputs;
use vinoria_renderer::SurfaceLifecycle;

use super::core::VinoriaApp;

impl VinoriaApp {
    /// Stop the frame loop and release everything the host owns.
    ///
    /// Safe to call more than once and after a partial initialization.
    pub(super) fn shutdown(&mut self) {
        self.should_exit = true;
        if self.render_state.is_none() && self.window.is_none() {
            return;
        }
        tracing::info!("Initiating shutdown");

        // The surface borrows the window, so the renderer goes first.
        self.render_state = None;
        self.window = None;
        self.lifecycle = SurfaceLifecycle::Absent;
        self.inputs = ActivityInputs::default();

        tracing::info!("Shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::VinoriaApp;
    use vinoria_config::{MeshDetail, VinoriaConfig};

    fn app() -> VinoriaApp {
        let mut config = VinoriaConfig::default();
        config.visual.mesh_detail = MeshDetail::Low;
        config.particles.count = 8;
        VinoriaApp::new(config)
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();
        app.shutdown();
        assert!(app.render_state.is_none());
        assert!(app.window.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();
        app.shutdown();
        app.shutdown();
        assert!(app.render_state.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn frame_without_renderer_is_a_no_op() {
        let mut app = app();
        app.render_frame();
        assert_eq!(app.vis.last_time().frame, 0);
        assert!(!app.should_exit);
    }
}
