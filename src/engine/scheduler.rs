/// Proof that a timer was armed. Carries the generation it was armed under,
/// so a host that holds on to it (e.g. a browser `setTimeout`) can be told
/// later whether it still counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    pub due_at_ms: i64,
}

/// One-shot, re-armable timer driven by polling.
///
/// `invalidate` bumps the generation: every token issued before it is dead,
/// even if its host callback still fires afterwards.
#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
    pending: Option<TimerToken>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) the timer. Any previously pending deadline is replaced.
    pub fn schedule(&mut self, now_ms: i64, delay_ms: i64) -> TimerToken {
        let token = TimerToken {
            generation: self.generation,
            due_at_ms: now_ms + delay_ms.max(0),
        };
        self.pending = Some(token);
        token
    }

    /// Drops the pending deadline and disowns every token issued so far.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    pub fn is_current(&self, token: TimerToken) -> bool {
        token.generation == self.generation && self.pending == Some(token)
    }

    /// Consumes `token` if it is the live one. Returns false for stale or already-fired tokens.
    pub fn claim(&mut self, token: TimerToken) -> bool {
        if self.is_current(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// The pending token, if its deadline has passed.
    pub fn due(&self, now_ms: i64) -> Option<TimerToken> {
        self.pending.filter(|t| t.due_at_ms <= now_ms)
    }

    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }
}
