use glam::Vec2;

use super::constants::ALARM_FLASH_MS;

/// Phase of the click burst, derived from elapsed time on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BurstPhase {
    Idle,
    Freezing,
    /// `progress` runs from 0 at the end of the freeze to 1 at the end of the shatter.
    Shattering { progress: f32 },
}

impl BurstPhase {
    /// Pure phase lookup: freezing on `[0, freeze)`, shattering on
    /// `[freeze, freeze + shatter)`, idle afterwards (and before 0).
    pub fn at(elapsed_ms: f64, freeze_ms: f64, shatter_ms: f64) -> BurstPhase {
        if !(elapsed_ms >= 0.0) {
            return BurstPhase::Idle;
        }
        if elapsed_ms < freeze_ms {
            BurstPhase::Freezing
        } else if elapsed_ms < freeze_ms + shatter_ms {
            let progress = ((elapsed_ms - freeze_ms) / shatter_ms) as f32;
            BurstPhase::Shattering {
                progress: progress.clamp(0.0, 1.0),
            }
        } else {
            BurstPhase::Idle
        }
    }

    #[inline]
    pub fn is_frozen(self) -> bool {
        matches!(self, BurstPhase::Freezing)
    }

    #[inline]
    pub fn shatter_progress(self) -> Option<f32> {
        match self {
            BurstPhase::Shattering { progress } => Some(progress),
            _ => None,
        }
    }
}

/// Alarm flash index: 0, 1, 2, 0, ... advancing every [`ALARM_FLASH_MS`].
#[inline]
pub fn alarm_index(elapsed_ms: f64) -> usize {
    if !(elapsed_ms >= 0.0) {
        return 0;
    }
    ((elapsed_ms / ALARM_FLASH_MS).floor() as u64 % 3) as usize
}

/// Timing and reach of the freeze-then-shatter interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstTuning {
    pub freeze_ms: f64,
    pub shatter_ms: f64,
    pub radius: f32,
    pub force: f32,
}

impl BurstTuning {
    #[inline]
    pub fn total_ms(&self) -> f64 {
        self.freeze_ms + self.shatter_ms
    }
}

/// Click burst bookkeeping. Only the trigger is stored; the phase is always
/// recomputed from `now - start_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstState {
    pub active: bool,
    pub origin: Vec2,
    pub start_ms: f64,
}

impl Default for BurstState {
    fn default() -> Self {
        Self {
            active: false,
            origin: Vec2::ZERO,
            start_ms: 0.0,
        }
    }
}

impl BurstState {
    pub fn trigger(&mut self, origin: Vec2, now_ms: f64) {
        self.active = true;
        self.origin = origin;
        self.start_ms = now_ms;
    }

    #[inline]
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        now_ms - self.start_ms
    }

    /// Current phase; an inactive burst is always idle.
    pub fn phase(&self, now_ms: f64, tuning: &BurstTuning) -> BurstPhase {
        if !self.active {
            return BurstPhase::Idle;
        }
        BurstPhase::at(self.elapsed(now_ms), tuning.freeze_ms, tuning.shatter_ms)
    }

    /// Phase for this tick, deactivating the burst once it has run its course.
    pub fn advance(&mut self, now_ms: f64, tuning: &BurstTuning) -> BurstPhase {
        let phase = self.phase(now_ms, tuning);
        if self.active && phase == BurstPhase::Idle {
            self.active = false;
            log::debug!("burst settled after {:.0}ms", self.elapsed(now_ms));
        }
        phase
    }
}
