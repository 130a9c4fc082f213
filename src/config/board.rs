//! Board tuning knobs. Passed explicitly into the generator and the board session.
use crate::config::constants::{mixture, timers, verdict};

/// Half-open value range `[lo, hi)` for one tier of the projection mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionBand {
    pub lo: f64,
    pub hi: f64,
}

impl ProjectionBand {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v < self.hi
    }
}

/// Three-tier mixture used for both seeded projections and live noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureConfig {
    /// `chance` below this picks the common band
    pub common_cutoff: f64,
    /// `chance` below this (and above common) picks the low band; otherwise high
    pub low_cutoff: f64,
    pub common: ProjectionBand,
    pub low: ProjectionBand,
    pub high: ProjectionBand,
    pub leader_bonus_max: f64,
}

impl Default for MixtureConfig {
    fn default() -> Self {
        mixture::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub mixture: MixtureConfig,

    /// Live noise re-rolls after a uniform delay in `[min, max)`.
    pub noise_delay_min_ms: i64,
    pub noise_delay_max_ms: i64,

    pub reanalysis_delay_ms: i64,
    pub no_opportunity_chance: f64,

    pub buy_chance: f64,
    pub expiry_minutes: &'static [u32],
}

pub const BOARD: BoardConfig = BoardConfig {
    mixture: mixture::DEFAULT,
    noise_delay_min_ms: timers::NOISE_DELAY_MIN_MS,
    noise_delay_max_ms: timers::NOISE_DELAY_MAX_MS,
    reanalysis_delay_ms: timers::REANALYSIS_DELAY_MS,
    no_opportunity_chance: verdict::NO_OPPORTUNITY_CHANCE,
    buy_chance: verdict::BUY_CHANCE,
    expiry_minutes: verdict::EXPIRY_MINUTES,
};

impl Default for BoardConfig {
    fn default() -> Self {
        BOARD
    }
}
