use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use crate::config::constants::SIGNAL_INTERVAL;

/// Time left in the current signal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalCountdown {
    pub remaining_secs: u32,
}

impl SignalCountdown {
    pub fn at(now: NaiveDateTime) -> Self {
        let window = SIGNAL_INTERVAL.as_secs() as u32;
        let into_window = (now.minute() * 60 + now.second()) % window;
        Self {
            remaining_secs: window - into_window,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.remaining_secs / 60
    }

    pub fn seconds(&self) -> u32 {
        self.remaining_secs % 60
    }

    /// Fraction of the window still to run, in (0, 1].
    pub fn progress(&self) -> f64 {
        self.remaining_secs as f64 / SIGNAL_INTERVAL.as_secs_f64()
    }
}

impl fmt::Display for SignalCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}
