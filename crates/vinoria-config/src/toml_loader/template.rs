//! Default TOML config template with inline documentation comments.

/// Default `vinoria.toml` content. Every value is commented out.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Vinoria visual core configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[visual]
# variant = "orb"          # orb, hologram
# wine_type = "neutral"    # red, white, rose, sparkling, dessert, neutral
# mesh_detail = "medium"   # low, medium, high
# seed = 1592598101
# click_ripples = true

[particles]
# enabled = true
# count = 2000             # 0-20000
# point_size = 3.0         # 0.5-16.0 (pixels)
# boundary_radius = 3.0    # 0.5-20.0
# ring_radius = 0.9        # 0.0-boundary_radius
# focus = [0.0, 0.0, 0.0]  # must lie inside boundary_radius
# focus_drift = 0.0        # 0.0-2.0 (slow wander amplitude)
# pulse_hz = 0.8           # 0.05-5.0

[palette]
# base_color = "#0891b2"   # overrides the wine-type palette
# accent_color = "#22d3ee"

[window]
# title = "Vinoria AI Sommelier"
# width = 720              # 64-8192
# height = 720
# transparent = true

[performance]
# max_frame_delta = 0.1    # seconds, 0.001-0.5
# fps_log_interval = 10.0  # seconds, 0 disables

[logging]
# level = "INFO"           # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
