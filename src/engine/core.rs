use chrono::NaiveDateTime;

use crate::analysis::countdown::SignalCountdown;
use crate::analysis::interval_seed::{IntervalSeed, compute_interval_seed};
use crate::analysis::opportunity_generator::{GeneratedOpportunities, generate_opportunities};
use crate::analysis::random::{RandomSource, ThreadRandom};

use crate::config::{ASSETS, BOARD, BoardConfig};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::data::{AnalyzedSet, BoardRepository, KeyValueStore};
use crate::domain::{AssetProfile, Language, find_profile};
use crate::utils::{Clock, SystemClock};

use super::live_noise::{next_noise_delay_ms, roll_live_noise};
use super::messages::{
    AnalysisVerdict, BoardEvent, OperateOutcome, PendingReAnalysis, ReAnalysisOutcome,
};
use super::ranking::{BoardRow, compute_display_order};
use super::scheduler::{Scheduler, TimerToken};
use super::verdict::{roll_reanalysis, roll_verdict};

/// One user's signal board session.
///
/// Single-threaded and poll-driven: the host calls `tick()` on its own timer
/// (once a second is plenty) and reads `rows()` afterwards. Every public
/// operation is infallible; storage trouble degrades to "no saved state".
pub struct Board {
    config: BoardConfig,
    assets: Vec<AssetProfile>,

    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    repo: BoardRepository,

    seed: IntervalSeed,
    generated: GeneratedOpportunities,
    analyzed: AnalyzedSet,
    noise: Vec<f64>,

    noise_timer: Scheduler,
    reanalysis_timer: Scheduler,
    reanalysis: Option<PendingReAnalysis>,

    highlighted: usize,
    rows: Vec<BoardRow>,
    running: bool,
}

impl Board {
    pub fn new(
        config: BoardConfig,
        assets: &[AssetProfile],
        clock: Box<dyn Clock>,
        rng: Box<dyn RandomSource>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let seed = compute_interval_seed(clock.now());
        let generated = generate_opportunities(seed, assets.len(), &config.mixture);

        let mut board = Self {
            config,
            assets: assets.to_vec(),
            clock,
            rng,
            repo: BoardRepository::new(store),
            seed,
            generated,
            analyzed: AnalyzedSet::empty(seed),
            noise: Vec::new(),
            noise_timer: Scheduler::new(),
            reanalysis_timer: Scheduler::new(),
            reanalysis: None,
            highlighted: 0,
            rows: Vec::new(),
            running: true,
        };

        board.analyzed = board.repo.load_analyzed(seed);
        board.restart_noise();
        board.rerank();

        log::info!(
            "Board up: interval {} ({} assets, {} already analyzed)",
            seed,
            board.assets.len(),
            board.analyzed.len()
        );
        board
    }

    /// Production wiring: default config and catalog, local clock, thread RNG.
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self::new(
            BOARD,
            ASSETS,
            Box::new(SystemClock),
            Box::new(ThreadRandom),
            store,
        )
    }

    // --- Queries ---

    pub fn seed(&self) -> IntervalSeed {
        self.seed
    }

    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Row currently in the spotlight slot.
    pub fn spotlight(&self) -> Option<&BoardRow> {
        self.rows.get(self.highlighted)
    }

    pub fn generated(&self) -> &GeneratedOpportunities {
        &self.generated
    }

    pub fn analyzed(&self) -> &AnalyzedSet {
        &self.analyzed
    }

    pub fn is_analyzed(&self, ticker: &str) -> bool {
        self.analyzed.contains(ticker)
    }

    pub fn live_noise(&self) -> &[f64] {
        &self.noise
    }

    /// Local wall-clock time as the board sees it.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    pub fn countdown(&self) -> SignalCountdown {
        SignalCountdown::at(self.clock.now())
    }

    pub fn noise_timer(&self) -> Option<TimerToken> {
        self.noise_timer.pending()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn language(&self) -> Language {
        self.repo.language()
    }

    pub fn set_language(&mut self, language: Language) {
        self.repo.set_language(language);
    }

    // --- Driving ---

    /// Advances every cycle that is due: interval rollover, live noise, re-analysis.
    pub fn tick(&mut self) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        let now = self.clock.now();
        let current = compute_interval_seed(now);
        if current != self.seed {
            let from = self.seed;
            self.reset_interval(current);
            events.push(BoardEvent::IntervalRolled { from, to: current });
        }

        let now_ms = self.clock.now_ms();

        if let Some(token) = self.noise_timer.due(now_ms) {
            if self.fire_noise_timer(token) {
                events.push(BoardEvent::NoiseRefreshed {
                    values: self.noise.clone(),
                    next_due_ms: self.noise_timer.pending().map_or(0, |t| t.due_at_ms),
                });
            }
        }

        if let Some(token) = self.reanalysis_timer.due(now_ms) {
            if let Some((ticker, outcome)) = self.fire_reanalysis_timer(token) {
                events.push(BoardEvent::ReAnalysisResolved { ticker, outcome });
            }
        }

        events
    }

    /// Entry point for hosts that run their own timers. Stale tokens are ignored.
    /// Returns true if the noise was re-rolled.
    pub fn fire_noise_timer(&mut self, token: TimerToken) -> bool {
        if !self.running || !self.noise_timer.claim(token) {
            #[cfg(debug_assertions)]
            if DF.log_noise {
                log::info!("NOISE: ignoring stale timer due at {}", token.due_at_ms);
            }
            return false;
        }
        self.refresh_live_noise();
        self.arm_noise_timer();
        true
    }

    /// Re-rolls the live noise for every non-leader slot and re-ranks.
    pub fn refresh_live_noise(&mut self) {
        if !self.running {
            return;
        }
        let slots = self.assets.len().saturating_sub(1);
        self.noise = roll_live_noise(self.rng.as_mut(), &self.config.mixture, slots);

        #[cfg(debug_assertions)]
        if DF.log_noise {
            log::info!("NOISE: {:?}", self.noise);
        }
        self.rerank();
    }

    /// Manual "refresh signals": jump to the current window, forget what was
    /// analyzed (memory and store), put the spotlight back on the first row.
    pub fn refresh_signals(&mut self) {
        if !self.running {
            return;
        }
        let seed = compute_interval_seed(self.clock.now());
        log::info!("Manual refresh: interval {} -> {}", self.seed, seed);
        self.reset_interval(seed);
    }

    /// The user picked `ticker` on the board.
    pub fn operate(&mut self, ticker: &str) -> OperateOutcome {
        if !self.running {
            log::warn!("Operate on '{}' after shutdown ignored", ticker);
            return OperateOutcome::BoardClosed {
                ticker: ticker.to_string(),
            };
        }
        let Some(profile) = find_profile(&self.assets, ticker) else {
            log::warn!("Operate on unknown asset '{}'", ticker);
            return OperateOutcome::UnknownAsset {
                ticker: ticker.to_string(),
            };
        };
        let ticker = profile.ticker.to_string();

        if self.analyzed.contains(&ticker) {
            let delay = self.config.reanalysis_delay_ms;
            let token = self.reanalysis_timer.schedule(self.clock.now_ms(), delay);
            self.reanalysis = Some(PendingReAnalysis {
                ticker: ticker.clone(),
                token,
            });

            #[cfg(debug_assertions)]
            if DF.log_operate {
                log::info!("OPERATE: {} already analyzed, re-analysis in {}ms", ticker, delay);
            }
            return OperateOutcome::ReAnalysisPending {
                ticker,
                ready_at_ms: token.due_at_ms,
            };
        }

        // Store first, memory regardless: a failed write leaves it session-only
        self.repo.mark_analyzed(&ticker, self.seed);
        self.analyzed.tickers.push(ticker.clone());
        self.rerank();

        #[cfg(debug_assertions)]
        if DF.log_operate {
            log::info!("OPERATE: {} marked analyzed @ {}", ticker, self.seed);
        }
        OperateOutcome::StartAnalysis { ticker }
    }

    /// Resolves a re-analysis probe for hosts that run their own timers.
    pub fn fire_reanalysis_timer(
        &mut self,
        token: TimerToken,
    ) -> Option<(String, ReAnalysisOutcome)> {
        if !self.running || !self.reanalysis_timer.claim(token) {
            return None;
        }
        let pending = self.reanalysis.take()?;
        let outcome = roll_reanalysis(self.rng.as_mut(), &self.config);

        #[cfg(debug_assertions)]
        if DF.log_operate {
            log::info!("OPERATE: re-analysis of {} -> {}", pending.ticker, outcome);
        }
        Some((pending.ticker, outcome))
    }

    /// Ticker whose re-analysis is still running, if any.
    pub fn pending_reanalysis(&self) -> Option<&str> {
        self.reanalysis.as_ref().map(|p| p.ticker.as_str())
    }

    /// Buy/sell call plus expiry, rolled when the analysis view completes.
    pub fn conclude_analysis(&mut self) -> AnalysisVerdict {
        roll_verdict(self.rng.as_mut(), &self.config)
    }

    /// Teardown: no timer may touch the board after this.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.noise_timer.invalidate();
        self.reanalysis_timer.invalidate();
        self.reanalysis = None;
        self.running = false;
        log::info!("Board shut down at interval {}", self.seed);
    }

    // --- Internals ---

    /// Everything that follows a new window: new snapshot, empty analyzed set,
    /// spotlight reset, fresh noise on a fresh timer generation.
    /// No await point between the store clear and the in-memory reset.
    fn reset_interval(&mut self, seed: IntervalSeed) {
        self.seed = seed;
        self.generated = generate_opportunities(seed, self.assets.len(), &self.config.mixture);
        self.repo.clear_analyzed();
        self.analyzed = AnalyzedSet::empty(seed);
        self.highlighted = 0;
        self.restart_noise();
        self.rerank();
    }

    /// Drops any pending noise timer (old generation can never fire), rolls
    /// fresh noise immediately and arms the next re-roll.
    fn restart_noise(&mut self) {
        self.noise_timer.invalidate();
        let slots = self.assets.len().saturating_sub(1);
        self.noise = roll_live_noise(self.rng.as_mut(), &self.config.mixture, slots);
        self.arm_noise_timer();
    }

    fn arm_noise_timer(&mut self) {
        let delay = next_noise_delay_ms(self.rng.as_mut(), &self.config);
        let _token = self.noise_timer.schedule(self.clock.now_ms(), delay);

        #[cfg(debug_assertions)]
        if DF.log_noise {
            log::info!("NOISE: next re-roll in {}ms (due {})", delay, _token.due_at_ms);
        }
    }

    fn rerank(&mut self) {
        self.rows = crate::trace_time!("Rank board", 500, {
            compute_display_order(&self.assets, &self.analyzed, &self.generated, &self.noise)
        });

        #[cfg(debug_assertions)]
        if DF.log_ranking {
            let summary: Vec<String> = self
                .rows
                .iter()
                .map(|r| format!("{}={}", r.ticker(), r.projection))
                .collect();
            log::info!("RANK @ {}: {}", self.seed, summary.join(", "));
        }
    }
}

impl Drop for Board {
    fn drop(&mut self) {
        self.shutdown();
    }
}
