use serde::Serialize;
use strum_macros::Display;

use crate::analysis::interval_seed::IntervalSeed;

use super::scheduler::TimerToken;

/// What `Board::operate` did with a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperateOutcome {
    /// First visit this interval: now marked analyzed, go run the analysis view.
    StartAnalysis { ticker: String },
    /// Already analyzed: a re-analysis probe is running and resolves at `ready_at_ms`.
    ReAnalysisPending { ticker: String, ready_at_ms: i64 },
    UnknownAsset { ticker: String },
    /// The board was shut down; nothing changed.
    BoardClosed { ticker: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReAnalysisOutcome {
    NoOpportunity,
    OpportunityFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// The fabricated recommendation shown once the analysis view finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisVerdict {
    pub side: TradeSide,
    pub expiry_minutes: u32,
}

/// Things that happened during one `Board::tick`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardEvent {
    IntervalRolled {
        from: IntervalSeed,
        to: IntervalSeed,
    },
    NoiseRefreshed {
        values: Vec<f64>,
        next_due_ms: i64,
    },
    ReAnalysisResolved {
        ticker: String,
        outcome: ReAnalysisOutcome,
    },
}

/// Re-analysis probe in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingReAnalysis {
    pub ticker: String,
    pub token: TimerToken,
}
