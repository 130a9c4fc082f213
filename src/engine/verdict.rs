use crate::analysis::random::RandomSource;
use crate::config::BoardConfig;
use crate::utils::unit_to_bucket;

use super::messages::{AnalysisVerdict, ReAnalysisOutcome, TradeSide};

pub(crate) fn roll_reanalysis(rng: &mut dyn RandomSource, config: &BoardConfig) -> ReAnalysisOutcome {
    if rng.next_f64() < config.no_opportunity_chance {
        ReAnalysisOutcome::NoOpportunity
    } else {
        ReAnalysisOutcome::OpportunityFound
    }
}

pub(crate) fn roll_verdict(rng: &mut dyn RandomSource, config: &BoardConfig) -> AnalysisVerdict {
    let side = if rng.next_f64() < config.buy_chance {
        TradeSide::Buy
    } else {
        TradeSide::Sell
    };
    let pick = unit_to_bucket(rng.next_f64(), config.expiry_minutes.len());
    AnalysisVerdict {
        side,
        expiry_minutes: config.expiry_minutes.get(pick).copied().unwrap_or(1),
    }
}
