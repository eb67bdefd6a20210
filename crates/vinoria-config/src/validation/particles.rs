//! Particle swarm validation.

use crate::schema::VinoriaConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate particle population and force-field geometry.
pub(crate) fn validate_particles(errors: &mut Vec<String>, config: &VinoriaConfig) {
    let particles = &config.particles;

    validate_range(errors, "particles.count", particles.count, 0, 20_000);
    validate_range_f64(errors, "particles.point_size", particles.point_size, 0.5, 16.0);
    validate_range_f64(
        errors,
        "particles.boundary_radius",
        particles.boundary_radius,
        0.5,
        20.0,
    );
    validate_range_f64(
        errors,
        "particles.ring_radius",
        particles.ring_radius,
        0.0,
        particles.boundary_radius.max(0.0),
    );
    validate_range_f64(errors, "particles.focus_drift", particles.focus_drift, 0.0, 2.0);
    validate_range_f64(errors, "particles.pulse_hz", particles.pulse_hz, 0.05, 5.0);

    let focus_len = particles.focus.iter().map(|c| c * c).sum::<f64>().sqrt();
    if !focus_len.is_finite() || focus_len >= particles.boundary_radius {
        errors.push(format!(
            "particles.focus lies outside boundary_radius ({focus_len:.2} >= {})",
            particles.boundary_radius
        ));
    }
}
