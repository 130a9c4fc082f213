#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::new_without_default)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types outside of crate (for the CLI and integration tests)
pub use analysis::countdown::SignalCountdown;
pub use analysis::interval_seed::{IntervalSeed, compute_interval_seed};
pub use analysis::opportunity_generator::{GeneratedOpportunities, generate_opportunities};
pub use analysis::random::{RandomSource, ScriptedRandom, SeededStream, ThreadRandom};
pub use config::{ASSETS, BOARD, BoardConfig, PERSISTENCE};
pub use data::{AnalyzedSet, BoardRepository, KeyValueStore, MemoryStore};
pub use domain::{AssetProfile, Language, Trend};
pub use engine::{
    AnalysisVerdict, Board, BoardEvent, BoardRow, OperateOutcome, ReAnalysisOutcome, TradeSide,
};

#[cfg(not(target_arch = "wasm32"))]
pub use data::FileStore;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Quarter-hour trading signal board", long_about = None)]
pub struct Cli {
    /// Evaluate at a fixed local time (YYYY-MM-DDTHH:MM[:SS]) instead of now
    #[arg(long)]
    pub at: Option<String>,

    /// JSON file standing in for browser storage
    #[arg(long, default_value_t = PERSISTENCE.file.state_path.to_string())]
    pub state: String,

    /// Operate on this asset (e.g. BTC/USDT) before printing
    #[arg(long)]
    pub operate: Option<String>,

    /// Run the manual "refresh signals" first
    #[arg(long, default_value_t = false)]
    pub refresh: bool,

    /// Keep ticking, reprinting the board every SECS seconds
    #[arg(long, value_name = "SECS")]
    pub watch: Option<u64>,
}
