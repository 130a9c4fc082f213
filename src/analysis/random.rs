use rand::Rng;

use crate::analysis::interval_seed::IntervalSeed;

/// Anything that yields uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

// LCG constants
const LCG_MUL: i64 = 9301;
const LCG_INC: i64 = 49297;
const LCG_MOD: i64 = 233280;

/// Deterministic linear congruential stream. Same seed, same sequence.
/// Rebuilt from the interval seed every time it is needed; never stored.
#[derive(Debug, Clone)]
pub struct SeededStream {
    state: i64,
}

impl SeededStream {
    pub fn new(seed: IntervalSeed) -> Self {
        Self { state: seed.value() }
    }
}

impl RandomSource for SeededStream {
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MUL + LCG_INC).rem_euclid(LCG_MOD);
        self.state as f64 / LCG_MOD as f64
    }
}

/// Unseeded source for live noise and verdict rolls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
/// Stand-in for the unseeded source when a test needs exact values.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v
    }
}
