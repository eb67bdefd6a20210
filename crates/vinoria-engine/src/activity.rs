//! Activity smoothing: three conversational flags eased into weights.
//!
//! Each weight moves a fixed fraction of the way toward its target every
//! tick, independent of frame duration. This is the only writer of
//! [`ActivityState`]; the surface and particle stages read it.

/// Fraction of the remaining distance covered per tick.
pub const SMOOTHING_RATE: f32 = 0.08;

/// Raw flags sampled once per frame from the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityInputs {
    pub speaking: bool,
    pub listening: bool,
    pub thinking: bool,
}

/// Smoothed activity weights, all in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityState {
    pub speaking: f32,
    pub listening: f32,
    pub thinking: f32,
    /// `max(speaking, listening, thinking)`, refreshed by [`update`](Self::update).
    pub activity: f32,
}

impl ActivityState {
    /// Advance one tick toward the given flags.
    pub fn update(&mut self, inputs: ActivityInputs) {
        self.speaking = approach(self.speaking, inputs.speaking);
        self.listening = approach(self.listening, inputs.listening);
        self.thinking = approach(self.thinking, inputs.thinking);
        self.activity = self.speaking.max(self.listening).max(self.thinking);
    }

    /// Whether any weight is still visibly away from its resting value.
    pub fn is_idle(&self) -> bool {
        self.activity <= 0.01
    }
}

fn approach(value: f32, on: bool) -> f32 {
    let target = if on { 1.0 } else { 0.0 };
    (value + (target - value) * SMOOTHING_RATE).clamp(0.0, 1.0)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SPEAKING: ActivityInputs = ActivityInputs {
        speaking: true,
        listening: false,
        thinking: false,
    };

    #[test]
    fn single_step_moves_by_rate() {
        let mut state = ActivityState::default();
        state.update(SPEAKING);
        assert!((state.speaking - 0.08).abs() < 1e-6);
        assert_eq!(state.listening, 0.0);
    }

    #[test]
    fn converges_within_one_percent_after_two_seconds() {
        let mut state = ActivityState::default();
        for _ in 0..120 {
            state.update(SPEAKING);
        }
        assert!(state.speaking > 0.99);

        for _ in 0..120 {
            state.update(ActivityInputs::default());
        }
        assert!(state.speaking < 0.01);
    }

    #[test]
    fn activity_is_max_every_tick() {
        let script = [
            ActivityInputs { speaking: true, ..Default::default() },
            ActivityInputs { listening: true, ..Default::default() },
            ActivityInputs { thinking: true, listening: true, ..Default::default() },
            ActivityInputs::default(),
        ];
        let mut state = ActivityState::default();
        for inputs in script {
            for _ in 0..40 {
                state.update(inputs);
                let expected = state.speaking.max(state.listening).max(state.thinking);
                assert_eq!(state.activity, expected);
            }
        }
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut state = ActivityState::default();
        for i in 0..1000 {
            let inputs = ActivityInputs {
                speaking: i % 3 == 0,
                listening: i % 7 < 3,
                thinking: i % 11 > 5,
            };
            state.update(inputs);
            for w in [state.speaking, state.listening, state.thinking, state.activity] {
                assert!((0.0..=1.0).contains(&w));
            }
        }
    }

    #[test]
    fn saturated_state_is_a_fixed_point() {
        let mut state = ActivityState {
            speaking: 1.0,
            listening: 0.0,
            thinking: 0.0,
            activity: 1.0,
        };
        let before = state;
        state.update(SPEAKING);
        assert_eq!(state, before);
    }

    #[test]
    fn idle_threshold() {
        let mut state = ActivityState::default();
        assert!(state.is_idle());
        state.update(SPEAKING);
        assert!(!state.is_idle());
    }
}
