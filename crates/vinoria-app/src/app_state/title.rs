//! Window title reflecting the current flags and palette.

use vinoria_config::WineCategory;
use vinoria_engine::ActivityInputs;

use super::core::VinoriaApp;

pub(super) fn window_title(base: &str, inputs: ActivityInputs, category: WineCategory) -> String {
    let mut flags = Vec::new();
    if inputs.speaking {
        flags.push("speaking");
    }
    if inputs.listening {
        flags.push("listening");
    }
    if inputs.thinking {
        flags.push("thinking");
    }
    if flags.is_empty() {
        format!("{base} [{category}]")
    } else {
        format!("{base} [{category}] {}", flags.join(" + "))
    }
}

impl VinoriaApp {
    pub(super) fn update_window_title(&self) {
        if let Some(ref window) = self.window {
            window.set_title(&window_title(
                &self.config.window.title,
                self.inputs,
                self.vis.category(),
            ));
        }
    }
}
