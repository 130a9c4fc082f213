//! Debugging feature flags.

pub struct LogFlags {
    /// Every live-noise re-roll and timer (re)arm.
    pub log_noise: bool,

    /// Final board order after each ranking pass.
    pub log_ranking: bool,

    /// Reads, writes and invalidations of the analyzed record.
    pub log_storage: bool,

    /// Activate trace_time macro
    pub log_performance: bool,

    pub log_operate: bool,
}

pub const DF: LogFlags = LogFlags {
    log_storage: true,
    log_operate: true,

    log_noise: false,
    log_ranking: false,
    log_performance: false,
};
