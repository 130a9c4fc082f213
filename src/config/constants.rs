use std::time::Duration;

// Top Level Constants
pub const SIGNAL_INTERVAL_MINUTES: u32 = 15; // Signals rotate on quarter-hour boundaries.
pub const SIGNAL_INTERVAL: Duration = Duration::from_secs(SIGNAL_INTERVAL_MINUTES as u64 * 60);

pub mod mixture {
    use crate::config::{MixtureConfig, ProjectionBand};

    // Tier cutoffs on the `chance` draw
    pub const COMMON_CUTOFF: f64 = 0.80;
    pub const LOW_CUTOFF: f64 = 0.90;

    pub const COMMON: ProjectionBand = ProjectionBand::new(122.0, 334.0);
    pub const LOW: ProjectionBand = ProjectionBand::new(20.0, 122.0);
    pub const HIGH: ProjectionBand = ProjectionBand::new(334.0, 1200.0);

    /// Upper bound of the amount added on top of the best value for the leader.
    pub const LEADER_BONUS_MAX: f64 = 50.0;

    pub const DEFAULT: MixtureConfig = MixtureConfig {
        common_cutoff: COMMON_CUTOFF,
        low_cutoff: LOW_CUTOFF,
        common: COMMON,
        low: LOW,
        high: HIGH,
        leader_bonus_max: LEADER_BONUS_MAX,
    };
}

pub mod timers {
    pub const NOISE_DELAY_MIN_MS: i64 = 3_000;
    pub const NOISE_DELAY_MAX_MS: i64 = 7_000;
    pub const REANALYSIS_DELAY_MS: i64 = 5_000;
}

pub mod verdict {
    pub const NO_OPPORTUNITY_CHANCE: f64 = 0.70;
    pub const BUY_CHANCE: f64 = 0.50;
    pub const EXPIRY_MINUTES: &[u32] = &[1, 5, 15];
}
