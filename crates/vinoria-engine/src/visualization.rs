//! One tick of the whole visual core: smoothing, then the surface, then
//! the particles. The host owns a [`Visualization`] and calls
//! [`tick`](Visualization::tick) once per display refresh.

use tracing::{debug, info};
use vinoria_config::schema::{PaletteConfig, SurfaceVariant, VinoriaConfig, WineCategory};

use crate::activity::{ActivityInputs, ActivityState};
use crate::clock::FrameTime;
use crate::frame::FrameContext;
use crate::input::Pointer;
use crate::palette::Palette;
use crate::particles::{ParticleSwarm, SwarmParams};
use crate::points::PointSprite;
use crate::surface::SurfaceAnimator;

pub struct Visualization {
    activity: ActivityState,
    pointer: Pointer,
    category: WineCategory,
    palette_overrides: PaletteConfig,
    palette: Palette,
    surface: SurfaceAnimator,
    swarm: ParticleSwarm,
    dressing: Vec<PointSprite>,
    last_time: FrameTime,
}

impl Visualization {
    pub fn new(config: &VinoriaConfig) -> Self {
        let category = config.visual.wine_type;
        let swarm = ParticleSwarm::new(SwarmParams::from_config(&config.particles), config.visual.seed);
        info!(
            variant = ?config.visual.variant,
            wine_type = %category,
            particles = swarm.len(),
            "visualization created"
        );
        Self {
            activity: ActivityState::default(),
            pointer: Pointer::default(),
            category,
            palette_overrides: config.palette.clone(),
            palette: Palette::from_config(category, &config.palette),
            surface: SurfaceAnimator::new(&config.visual),
            swarm,
            dressing: Vec::new(),
            last_time: FrameTime::default(),
        }
    }

    /// Advance everything by one frame.
    pub fn tick(&mut self, inputs: ActivityInputs, time: FrameTime) {
        self.activity.update(inputs);
        self.pointer.update();
        self.last_time = time;

        let ctx = FrameContext {
            time,
            state: &self.activity,
            pointer: self.pointer.position(),
            palette: &self.palette,
        };
        self.surface.update(&ctx);
        self.swarm.step(&ctx);

        self.dressing.clear();
        self.surface.write_points(&ctx, &mut self.dressing);
    }

    /// Select a palette. Config overrides still apply on top.
    pub fn set_category(&mut self, category: WineCategory) {
        if category != self.category {
            debug!(wine_type = %category, "palette changed");
            self.category = category;
            self.palette = Palette::from_config(category, &self.palette_overrides);
        }
    }

    pub fn category(&self) -> WineCategory {
        self.category
    }

    /// A click on the host region.
    pub fn click(&mut self) {
        self.surface.on_click(self.last_time.elapsed);
    }

    pub fn pointer_mut(&mut self) -> &mut Pointer {
        &mut self.pointer
    }

    /// Rebuild the surface mesh, e.g. after the host recreated its context.
    pub fn reinit_surface(&mut self) {
        self.surface.reinit();
    }

    pub fn activity(&self) -> &ActivityState {
        &self.activity
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn surface(&self) -> &SurfaceAnimator {
        &self.surface
    }

    pub fn variant(&self) -> SurfaceVariant {
        self.surface.variant()
    }

    pub fn swarm(&self) -> &ParticleSwarm {
        &self.swarm
    }

    /// Set dressing points from the last tick.
    pub fn dressing(&self) -> &[PointSprite] {
        &self.dressing
    }

    pub fn last_time(&self) -> FrameTime {
        self.last_time
    }
}

// =============================================================================
// Tests
// =============================================================================
