mod core;
mod live_noise;
mod messages;
mod ranking;
mod scheduler;
mod verdict;

pub use core::Board;

pub use messages::{AnalysisVerdict, BoardEvent, OperateOutcome, ReAnalysisOutcome, TradeSide};
pub use ranking::{BoardRow, compute_display_order};
pub use scheduler::{Scheduler, TimerToken};

pub use live_noise::{next_noise_delay_ms, roll_live_noise};
