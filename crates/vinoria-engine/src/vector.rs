//! Small `[f32; 3]` helpers shared by the surface and particle code.
//!
//! Every normalization goes through [`normalize_or`], which returns the
//! caller's fallback for zero-length input instead of producing NaN.

pub type Vec3 = [f32; 3];

/// Lengths below this are treated as zero.
pub const EPSILON: f32 = 1e-6;

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(v: Vec3, s: f32) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`, or `fallback` when `v` is ~zero.
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let len = length(v);
    if len > EPSILON && len.is_finite() {
        scale(v, 1.0 / len)
    } else {
        fallback
    }
}

pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Clamp every channel to `[0, 1]`.
pub fn saturate(v: Vec3) -> Vec3 {
    [
        v[0].clamp(0.0, 1.0),
        v[1].clamp(0.0, 1.0),
        v[2].clamp(0.0, 1.0),
    ]
}

/// Rotate `v` by Euler angles applied Z, then Y, then X.
pub fn rotate_euler(v: Vec3, euler: Vec3) -> Vec3 {
    let (sz, cz) = euler[2].sin_cos();
    let v = [v[0] * cz - v[1] * sz, v[0] * sz + v[1] * cz, v[2]];
    let (sy, cy) = euler[1].sin_cos();
    let v = [v[0] * cy + v[2] * sy, v[1], -v[0] * sy + v[2] * cy];
    let (sx, cx) = euler[0].sin_cos();
    [v[0], v[1] * cx - v[2] * sx, v[1] * sx + v[2] * cx]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-5)
    }

    #[test]
    fn normalize_zero_returns_fallback() {
        assert_eq!(normalize_or([0.0; 3], [0.0, 1.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn normalize_nan_returns_fallback() {
        assert_eq!(normalize_or([f32::NAN, 0.0, 0.0], [1.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let n = normalize_or([3.0, 4.0, 0.0], [0.0; 3]);
        assert!((length(n) - 1.0).abs() < 1e-6);
        assert!(approx(n, [0.6, 0.8, 0.0]));
    }

    #[test]
    fn cross_of_axes() {
        assert!(approx(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn rotate_euler_about_y_quarter_turn() {
        let r = rotate_euler([1.0, 0.0, 0.0], [0.0, std::f32::consts::FRAC_PI_2, 0.0]);
        assert!(approx(r, [0.0, 0.0, -1.0]));
    }

    #[test]
    fn rotate_euler_preserves_length() {
        let v = [0.3, -1.2, 0.7];
        let r = rotate_euler(v, [0.5, -0.3, 0.2]);
        assert!((length(r) - length(v)).abs() < 1e-5);
    }

    #[test]
    fn saturate_clamps_channels() {
        assert_eq!(saturate([-0.5, 0.5, 1.5]), [0.0, 0.5, 1.0]);
    }
}
