//! Seeded 3D simplex noise and its four-octave fractal sum.

use noise::{Fbm, MultiFractal, NoiseFn, Simplex};

/// Octave count for [`NoiseField::fbm`].
pub const FBM_OCTAVES: usize = 4;

pub struct NoiseField {
    simplex: Simplex,
    fbm: Fbm<Simplex>,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        let fbm = Fbm::<Simplex>::new(seed)
            .set_octaves(FBM_OCTAVES)
            .set_frequency(1.0)
            .set_lacunarity(2.0)
            .set_persistence(0.5);
        Self {
            simplex: Simplex::new(seed),
            fbm,
        }
    }

    /// Simplex noise in `[-1, 1]`.
    pub fn snoise(&self, p: [f32; 3]) -> f32 {
        sample(&self.simplex, p)
    }

    /// Fractal Brownian motion in `[-1, 1]`.
    pub fn fbm(&self, p: [f32; 3]) -> f32 {
        sample(&self.fbm, p)
    }
}

fn sample<N: NoiseFn<f64, 3>>(source: &N, p: [f32; 3]) -> f32 {
    let v = source.get([p[0] as f64, p[1] as f64, p[2] as f64]) as f32;
    if v.is_finite() {
        v.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

// =============================================================================
// Tests
// =============================================================================
