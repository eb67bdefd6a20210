//! VinoriaApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use vinoria_config::VinoriaConfig;
use vinoria_engine::{ActivityInputs, FrameClock, MonotonicClock, Visualization};
use vinoria_renderer::{FrameTimer, RenderState, SurfaceLifecycle};

/// Top-level application state.
pub struct VinoriaApp {
    pub(super) config: VinoriaConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) lifecycle: SurfaceLifecycle,

    // Visual core
    pub(super) vis: Visualization,
    pub(super) inputs: ActivityInputs,
    pub(super) clock: FrameClock<MonotonicClock>,
    pub(super) timer: FrameTimer,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl VinoriaApp {
    pub fn new(config: VinoriaConfig) -> Self {
        let vis = Visualization::new(&config);
        let clock = FrameClock::new(MonotonicClock::new(), config.performance.max_frame_delta);
        let timer = FrameTimer::new(config.performance.fps_log_interval);
        Self {
            config,
            window: None,
            render_state: None,
            lifecycle: SurfaceLifecycle::Absent,
            vis,
            inputs: ActivityInputs::default(),
            clock,
            timer,
            should_exit: false,
        }
    }
}
