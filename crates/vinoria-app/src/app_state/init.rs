//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use vinoria_renderer::{RenderState, SurfaceLifecycle};

use super::core::VinoriaApp;

impl VinoriaApp {
    /// Create the window and, if it already has an area, the renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(window_config.transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size();
        self.window = Some(window);

        if size.width == 0 || size.height == 0 {
            tracing::info!("Window has no area yet, deferring renderer setup");
            self.lifecycle = SurfaceLifecycle::Deferred;
            return true;
        }

        self.create_render_state()
    }

    /// Build the renderer for the current window. Returns `false` on failure.
    pub(super) fn create_render_state(&mut self) -> bool {
        let Some(window) = self.window.clone() else {
            return false;
        };

        let transparent = self.config.window.transparent;
        match pollster::block_on(RenderState::new(window, &self.vis, transparent)) {
            Ok(rs) => {
                self.render_state = Some(rs);
                self.lifecycle = SurfaceLifecycle::Active;
                self.clock.reset_delta();
                tracing::info!("Window created and renderer initialized");
                true
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                self.lifecycle = SurfaceLifecycle::Absent;
                false
            }
        }
    }
}
