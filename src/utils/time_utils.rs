use std::cell::Cell;
use std::rc::Rc;

use chrono::{Duration as ChronoDuration, Local, NaiveDateTime, Utc};

// Monotonic instant that also works in the browser
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Two time lines: local wall-clock time for the interval seed and countdown,
/// and epoch milliseconds for timer deadlines.
/// Everything time-dependent in the board reads through this, so tests can pin it.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Epoch milliseconds (UTC). Must not jump when local time does (DST, zone change).
    fn now_ms(&self) -> i64;
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Local clock shifted by a fixed offset. Lets the CLI pretend it is some other
/// time while still ticking forward in real time.
#[derive(Debug, Clone, Copy)]
pub struct ShiftedClock {
    offset: ChronoDuration,
}

impl ShiftedClock {
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            offset: start - Local::now().naive_local(),
        }
    }
}

impl Clock for ShiftedClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local() + self.offset
    }

    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis() + self.offset.num_milliseconds()
    }
}

/// Hand-driven clock. Clones share the same instant, so a test can keep one
/// handle and advance time under a board that owns another.
///
/// `advance_ms` moves both time lines; `set` moves only the wall clock, the
/// way a DST change or a user editing the system clock would.
#[derive(Debug, Clone)]
pub struct FixedClock(Rc<Cell<(NaiveDateTime, i64)>>);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(Rc::new(Cell::new((at, at.and_utc().timestamp_millis()))))
    }

    pub fn set(&self, at: NaiveDateTime) {
        let (_, ms) = self.0.get();
        self.0.set((at, ms));
    }

    pub fn advance_ms(&self, ms: i64) {
        let (local, epoch) = self.0.get();
        self.0
            .set((local + ChronoDuration::milliseconds(ms), epoch + ms));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get().0
    }

    fn now_ms(&self) -> i64 {
        self.0.get().1
    }
}

pub fn format_local(at: NaiveDateTime) -> String {
    at.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// Parses CLI-style local timestamps: `2026-10-19T14:07` or `2026-10-19T14:07:30`.
pub fn parse_local(text: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .map_err(|e| anyhow::anyhow!("invalid local time '{}': {}", text, e))
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m {}s", mins, secs % 60);
    }
    format!("{}h {}m", mins / 60, mins % 60)
}
