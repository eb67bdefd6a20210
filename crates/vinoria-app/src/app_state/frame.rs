//! One frame: tick the engine, draw, and keep frame statistics.

use vinoria_renderer::FrameOutcome;

use super::core::VinoriaApp;

impl VinoriaApp {
    /// Advance the visual core by one tick and present it.
    ///
    /// Nothing ticks while the renderer is missing or paused. A lost GPU
    /// context stops the loop.
    pub(super) fn render_frame(&mut self) {
        if !self.lifecycle.is_drawing() {
            return;
        }
        let Some(rs) = self.render_state.as_mut() else {
            return;
        };

        let time = self.clock.tick();
        self.vis.tick(self.inputs, time);

        match rs.render(&self.vis) {
            Ok(FrameOutcome::Presented) => {
                self.timer.begin_frame();
                if self.timer.log_due() {
                    tracing::debug!(
                        fps = self.timer.fps(),
                        frame_ms = self.timer.frame_time_ms(),
                        particles = self.vis.swarm().len(),
                        activity = self.vis.activity().activity,
                        "frame stats"
                    );
                }
            }
            Ok(FrameOutcome::Skipped) => {}
            Err(e) => {
                tracing::error!("Render error, stopping: {e}");
                self.should_exit = true;
            }
        }
    }
}
