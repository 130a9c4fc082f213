use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::constants::SIGNAL_INTERVAL_MINUTES;

/// Identifies one quarter-hour signal window.
/// `day*10000 + month0*1000 + hour*100 + bucket`, month zero-based.
/// Not unique across months (e.g. day 1 / month 10 collides with day 2 / month 0); that is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalSeed(i64);

impl IntervalSeed {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for IntervalSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seed for the window containing `now` (local wall-clock time).
pub fn compute_interval_seed(now: NaiveDateTime) -> IntervalSeed {
    let bucket = now.minute() / SIGNAL_INTERVAL_MINUTES;
    IntervalSeed(
        now.day() as i64 * 10_000
            + now.month0() as i64 * 1_000
            + now.hour() as i64 * 100
            + bucket as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(month: u32, day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, month, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn seed_layout() {
        // 19 Oct (month0 = 9), 14:07 -> bucket 0
        assert_eq!(compute_interval_seed(at(10, 19, 14, 7, 0)).value(), 200_400);
        // 1 Jan 00:59 -> bucket 3
        assert_eq!(compute_interval_seed(at(1, 1, 0, 59, 59)).value(), 10_003);
    }

    #[test]
    fn constant_within_a_bucket() {
        let a = compute_interval_seed(at(10, 19, 14, 15, 0));
        let b = compute_interval_seed(at(10, 19, 14, 29, 59));
        assert_eq!(a, b);
    }

    #[test]
    fn advances_on_bucket_boundary() {
        let before = compute_interval_seed(at(10, 19, 14, 29, 59));
        let after = compute_interval_seed(at(10, 19, 14, 30, 0));
        assert_eq!(after.value(), before.value() + 1);
    }

    #[test]
    fn every_minute_of_an_hour_maps_to_four_seeds() {
        let mut seeds: Vec<_> = (0..60)
            .map(|m| compute_interval_seed(at(3, 5, 8, m, 30)))
            .collect();
        seeds.dedup();
        assert_eq!(seeds.len(), 4);
    }
}
