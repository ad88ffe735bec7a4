use thiserror::Error;

use super::burst::BurstTuning;
use super::constants::*;

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("viewport {width}x{height} is not a finite size within the supported range")]
    InvalidViewport { width: f32, height: f32 },
    #[error("shard pool must hold at least one shard")]
    EmptyPool,
    #[error("time step {0} must be finite and positive")]
    InvalidTimestep(f32),
    #[error("burst {name} = {value} must be finite and non-negative")]
    InvalidBurst { name: &'static str, value: f64 },
}

/// Tunables of a field controller.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub num_shards: usize,
    pub seed: u64,
    pub time_step: f32,
    pub burst: BurstTuning,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            num_shards: DEFAULT_NUM_SHARDS,
            seed: 42,
            time_step: DEFAULT_TIME_STEP,
            burst: BurstTuning {
                freeze_ms: BURST_FREEZE_MS,
                shatter_ms: BURST_SHATTER_MS,
                radius: BURST_RADIUS,
                force: BURST_FORCE,
            },
        }
    }
}

impl FieldConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.num_shards == 0 {
            return Err(FieldError::EmptyPool);
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(FieldError::InvalidTimestep(self.time_step));
        }
        let b = &self.burst;
        for (name, value) in [
            ("freeze_ms", b.freeze_ms),
            ("shatter_ms", b.shatter_ms),
            ("radius", b.radius as f64),
            ("force", b.force as f64),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FieldError::InvalidBurst { name, value });
            }
        }
        Ok(())
    }
}

pub fn validate_viewport(width: f32, height: f32) -> Result<(), FieldError> {
    let in_range = |v: f32| (0.0..=MAX_VIEWPORT_EXTENT).contains(&v);
    if in_range(width) && in_range(height) {
        Ok(())
    } else {
        Err(FieldError::InvalidViewport { width, height })
    }
}
