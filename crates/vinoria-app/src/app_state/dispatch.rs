//! Keyboard actions for the demo host.

use vinoria_config::WineCategory;

use super::core::VinoriaApp;

/// An action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyAction {
    ToggleSpeaking,
    ToggleListening,
    ToggleThinking,
    SelectCategory(WineCategory),
    ResetSurface,
    Quit,
}

/// Map a normalized key name to an action.
pub(super) fn map_key(key: &str) -> Option<KeyAction> {
    match key {
        "s" | "S" => Some(KeyAction::ToggleSpeaking),
        "l" | "L" => Some(KeyAction::ToggleListening),
        "t" | "T" => Some(KeyAction::ToggleThinking),
        "r" | "R" => Some(KeyAction::ResetSurface),
        "Escape" => Some(KeyAction::Quit),
        digit => {
            let index = digit.parse::<usize>().ok()?.checked_sub(1)?;
            WineCategory::ALL
                .get(index)
                .map(|c| KeyAction::SelectCategory(*c))
        }
    }
}

impl VinoriaApp {
    pub(super) fn dispatch(&mut self, action: KeyAction) {
        match action {
            KeyAction::ToggleSpeaking => self.inputs.speaking = !self.inputs.speaking,
            KeyAction::ToggleListening => self.inputs.listening = !self.inputs.listening,
            KeyAction::ToggleThinking => self.inputs.thinking = !self.inputs.thinking,
            KeyAction::SelectCategory(category) => self.vis.set_category(category),
            KeyAction::ResetSurface => {
                self.vis.reinit_surface();
                if let Some(ref mut rs) = self.render_state {
                    rs.reload_mesh(&self.vis);
                }
            }
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
        }
        tracing::debug!(?action, inputs = ?self.inputs, "key action");
        self.update_window_title();
    }
}

// =============================================================================
// Tests
// =============================================================================
