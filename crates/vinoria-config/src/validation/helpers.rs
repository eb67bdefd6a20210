//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not finite (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if an optional hex color does not parse.
pub(crate) fn validate_hex_color(errors: &mut Vec<String>, name: &str, value: Option<&str>) {
    if let Some(hex) = value {
        if vinoria_common::Color::from_hex(hex).is_none() {
            errors.push(format!("{name} = '{hex}' is not a #rrggbb color"));
        }
    }
}
