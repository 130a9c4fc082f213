use crate::analysis::opportunity_generator::draw_projection;
use crate::analysis::random::RandomSource;
use crate::config::{BoardConfig, MixtureConfig};
use crate::utils::lerp_unit;

/// "Market jitter" for the non-leader slots. Unseeded, so it differs on every reload.
pub fn roll_live_noise(
    rng: &mut dyn RandomSource,
    mixture: &MixtureConfig,
    slots: usize,
) -> Vec<f64> {
    (0..slots).map(|_| draw_projection(&mut *rng, mixture)).collect()
}

/// Delay before the next re-roll, uniform in `[min, max)`.
pub fn next_noise_delay_ms(rng: &mut dyn RandomSource, config: &BoardConfig) -> i64 {
    lerp_unit(
        rng.next_f64(),
        config.noise_delay_min_ms as f64,
        config.noise_delay_max_ms as f64,
    ) as i64
}
