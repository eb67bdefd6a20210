//! Windowless run: drives the engine on a synthetic 60 Hz clock through a
//! fixed script of conversational phases and logs per-phase statistics.

use tracing::info;
use vinoria_config::VinoriaConfig;
use vinoria_engine::{ActivityInputs, FrameClock, SyntheticClock, Visualization};

/// Script order: one entry per phase.
pub const PHASES: [(&str, ActivityInputs); 5] = [
    ("idle", ActivityInputs { speaking: false, listening: false, thinking: false }),
    ("listening", ActivityInputs { speaking: false, listening: true, thinking: false }),
    ("thinking", ActivityInputs { speaking: false, listening: false, thinking: true }),
    ("speaking", ActivityInputs { speaking: true, listening: false, thinking: false }),
    ("settle", ActivityInputs { speaking: false, listening: false, thinking: false }),
];

/// Statistics at the end of one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseReport {
    pub name: &'static str,
    pub frames: u64,
    pub activity: f32,
    pub mean_radius: f32,
    pub mean_focus_distance: f32,
    pub peak_speed: f32,
    pub peak_surface_offset: f32,
}

/// Run `frames` ticks split evenly across [`PHASES`].
pub fn run(config: &VinoriaConfig, frames: u64) -> Vec<PhaseReport> {
    let mut vis = Visualization::new(config);
    let mut clock = FrameClock::new(SyntheticClock::sixty_hz(), config.performance.max_frame_delta);

    let per_phase = (frames / PHASES.len() as u64).max(1);
    let mut reports = Vec::with_capacity(PHASES.len());

    for (name, inputs) in PHASES {
        let mut peak_speed = 0.0f32;
        let mut peak_offset = 0.0f32;
        for _ in 0..per_phase {
            vis.tick(inputs, clock.tick());
            peak_speed = peak_speed.max(vis.swarm().max_speed());
            peak_offset = peak_offset.max(vis.surface().peak_offset());
        }

        let swarm = vis.swarm();
        let report = PhaseReport {
            name,
            frames: per_phase,
            activity: vis.activity().activity,
            mean_radius: swarm.mean_radius(),
            mean_focus_distance: swarm.mean_distance_to(swarm.focus()),
            peak_speed,
            peak_surface_offset: peak_offset,
        };
        info!(
            phase = report.name,
            frames = report.frames,
            activity = report.activity,
            mean_radius = report.mean_radius,
            focus_distance = report.mean_focus_distance,
            peak_speed = report.peak_speed,
            surface_offset = report.peak_surface_offset,
            "headless phase complete"
        );
        reports.push(report);
    }

    reports
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vinoria_config::MeshDetail;

    fn config() -> VinoriaConfig {
        let mut config = VinoriaConfig::default();
        config.visual.mesh_detail = MeshDetail::Low;
        config.particles.count = 200;
        config
    }

    #[test]
    fn reports_every_phase() {
        let reports = run(&config(), 600);
        let names: Vec<_> = reports.iter().map(|r| r.name).collect();
        assert_eq!(names, ["idle", "listening", "thinking", "speaking", "settle"]);
        assert!(reports.iter().all(|r| r.frames == 120));
    }

    #[test]
    fn activity_follows_script() {
        let reports = run(&config(), 600);
        assert!(reports[0].activity < 0.01);
        assert!(reports[1].activity > 0.99);
        assert!(reports[3].activity > 0.99);
        assert!(reports[4].activity < 0.01);
    }

    #[test]
    fn listening_pulls_swarm_in() {
        let reports = run(&config(), 600);
        assert!(reports[1].mean_focus_distance < reports[0].mean_focus_distance);
    }

    #[test]
    fn tiny_frame_count_still_runs_each_phase() {
        let reports = run(&config(), 2);
        assert_eq!(reports.len(), PHASES.len());
        assert!(reports.iter().all(|r| r.frames == 1));
    }
}
