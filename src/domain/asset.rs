use serde::Serialize;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Sideways,
}

/// Static presentation data for one tracked asset.
/// Only `ticker` takes part in ranking; the rest rides along to the rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetProfile {
    pub ticker: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change_pct: f64,
    pub sparkline: &'static [f64],
    pub volatility: f64,
    pub trend: Trend,
    pub probability_pct: u32,
    pub payout_pct: u32,
}

pub(crate) fn find_profile<'a>(assets: &'a [AssetProfile], ticker: &str) -> Option<&'a AssetProfile> {
    assets.iter().find(|a| a.ticker.eq_ignore_ascii_case(ticker))
}
