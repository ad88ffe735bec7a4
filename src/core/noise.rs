use ::noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::constants::NOISE_INPUT_LIMIT;

/// Coherent noise sampled by the simulation, always in `[0, 1]`.
///
/// Injected into the field controller so runs are reproducible and tests can
/// substitute a fixed field.
pub trait NoiseField {
    fn sample3(&self, x: f32, y: f32, z: f32) -> f32;

    #[inline]
    fn sample1(&self, x: f32) -> f32 {
        self.sample3(x, 0.0, 0.0)
    }
}

/// Four-octave Perlin fBm remapped from `[-1, 1]` to `[0, 1]`.
pub struct PerlinNoise {
    fbm: Fbm<Perlin>,
}

impl PerlinNoise {
    pub const OCTAVES: usize = 4;
    pub const PERSISTENCE: f64 = 0.5;

    pub fn new(seed: u32) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(Self::OCTAVES)
            .set_frequency(1.0)
            .set_persistence(Self::PERSISTENCE);
        Self { fbm }
    }
}

impl NoiseField for PerlinNoise {
    fn sample3(&self, x: f32, y: f32, z: f32) -> f32 {
        // The lattice lookup panics on NaN or out-of-range coordinates.
        if [x, y, z].iter().any(|c| !(c.abs() <= NOISE_INPUT_LIMIT)) {
            return 0.5;
        }
        let v = self.fbm.get([x as f64, y as f64, z as f64]);
        if !v.is_finite() {
            return 0.5;
        }
        ((v * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
    }
}

/// Uniform field returning the same value everywhere.
#[derive(Clone, Copy, Debug)]
pub struct ConstantNoise(pub f32);

impl NoiseField for ConstantNoise {
    fn sample3(&self, _x: f32, _y: f32, _z: f32) -> f32 {
        self.0.clamp(0.0, 1.0)
    }
}
