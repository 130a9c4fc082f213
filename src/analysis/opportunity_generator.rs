use crate::analysis::interval_seed::IntervalSeed;
use crate::analysis::random::{RandomSource, SeededStream};
use crate::config::MixtureConfig;
use crate::utils::{lerp_unit, unit_to_bucket};

/// Seeded snapshot for one interval.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedOpportunities {
    /// One projection per asset, catalog order
    pub values: Vec<f64>,
    /// `None` only when there are no assets
    pub leader_index: Option<usize>,
}

impl GeneratedOpportunities {
    pub fn leader_value(&self) -> Option<f64> {
        self.leader_index.and_then(|i| self.values.get(i).copied())
    }
}

/// Draws one projection from the three-tier mixture. Consumes exactly two draws.
pub fn draw_projection(rng: &mut (impl RandomSource + ?Sized), mixture: &MixtureConfig) -> f64 {
    let chance = rng.next_f64();
    let band = if chance < mixture.common_cutoff {
        mixture.common
    } else if chance < mixture.low_cutoff {
        mixture.low
    } else {
        mixture.high
    };
    lerp_unit(rng.next_f64(), band.lo, band.hi)
}

/// Builds the interval snapshot: per-asset projections, the leader, and the leader's boost.
///
/// Draw order is fixed (two per asset, one for the leader pick, one for the bonus),
/// so the same seed always reproduces the same board.
pub fn generate_opportunities(
    seed: IntervalSeed,
    asset_count: usize,
    mixture: &MixtureConfig,
) -> GeneratedOpportunities {
    if asset_count == 0 {
        return GeneratedOpportunities {
            values: Vec::new(),
            leader_index: None,
        };
    }

    let mut rng = SeededStream::new(seed);

    let mut values: Vec<f64> = (0..asset_count)
        .map(|_| draw_projection(&mut rng, mixture))
        .collect();

    let leader_index = unit_to_bucket(rng.next_f64(), asset_count);

    let best = values.iter().copied().fold(f64::MIN, f64::max);
    values[leader_index] = best + lerp_unit(rng.next_f64(), 0.0, mixture.leader_bonus_max);

    GeneratedOpportunities {
        values,
        leader_index: Some(leader_index),
    }
}
