//! Point sprites: the common output of the particle swarm and the
//! surface set dressing, drawn by the renderer's point pipeline.

/// One screen-facing point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointSprite {
    pub position: [f32; 3],
    /// Size in pixels before the global point-size multiplier.
    pub size: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

/// Append `count` points evenly spaced on a circle of `radius` in the XY
/// plane, rotated by `euler` and offset by `center`.
pub fn push_ring(
    out: &mut Vec<PointSprite>,
    center: [f32; 3],
    radius: f32,
    euler: [f32; 3],
    count: usize,
    template: PointSprite,
) {
    if count == 0 {
        return;
    }
    out.reserve(count);
    for i in 0..count {
        let angle = std::f32::consts::TAU * i as f32 / count as f32;
        let local = [angle.cos() * radius, angle.sin() * radius, 0.0];
        let p = crate::vector::add(crate::vector::rotate_euler(local, euler), center);
        out.push(PointSprite {
            position: p,
            ..template
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{length, sub};

    #[test]
    fn ring_points_lie_on_radius() {
        let mut out = Vec::new();
        let center = [0.0, 1.0, 0.0];
        push_ring(&mut out, center, 0.6, [1.2, 0.3, 0.0], 48, PointSprite::default());
        assert_eq!(out.len(), 48);
        for p in &out {
            assert!((length(sub(p.position, center)) - 0.6).abs() < 1e-5);
        }
    }

    #[test]
    fn empty_ring_pushes_nothing() {
        let mut out = Vec::new();
        push_ring(&mut out, [0.0; 3], 1.0, [0.0; 3], 0, PointSprite::default());
        assert!(out.is_empty());
    }
}
