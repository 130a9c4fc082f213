pub(crate) mod maths_utils;
mod perf;
pub(crate) mod time_utils;

pub use time_utils::{
    AppInstant, Clock, FixedClock, ShiftedClock, SystemClock, TimeUtils, format_duration,
    format_local, parse_local,
};

pub(crate) use maths_utils::{lerp_unit, unit_to_bucket};
