use itertools::Itertools;
use serde::Serialize;

use crate::analysis::opportunity_generator::GeneratedOpportunities;
use crate::data::AnalyzedSet;
use crate::domain::AssetProfile;

/// One line of the board as the presentation layer shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRow {
    pub profile: AssetProfile,
    /// Whole-number projection after noise, fallback and clamping
    pub projection: f64,
    /// This asset is the interval's generated leader (spotlighted only while not analyzed)
    pub is_leader: bool,
    pub is_analyzed: bool,
}

impl BoardRow {
    pub fn ticker(&self) -> &'static str {
        self.profile.ticker
    }
}

/// Projection shown for a non-leader slot: live noise when there is a usable value, else the seeded one.
/// Non-leaders map onto noise slots in catalog order with the leader's slot skipped.
fn competitor_projection(
    index: usize,
    leader_index: Option<usize>,
    generated: &GeneratedOpportunities,
    noise: &[f64],
) -> f64 {
    let slot = match leader_index {
        Some(li) if index > li => index - 1,
        _ => index,
    };
    noise
        .get(slot)
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .or_else(|| generated.values.get(index).copied())
        .unwrap_or(0.0)
}

/// Orders the board: `[leader?, competitors by projection desc, analyzed in catalog order]`.
///
/// Every competitor is clamped to at most `leader - 1`, whatever its own value,
/// so the spotlighted asset always shows the best number. An analyzed leader
/// loses the spotlight and drops to the analyzed group with everyone else.
pub fn compute_display_order(
    assets: &[AssetProfile],
    analyzed: &AnalyzedSet,
    generated: &GeneratedOpportunities,
    noise: &[f64],
) -> Vec<BoardRow> {
    let leader_index = generated.leader_index.filter(|&li| li < assets.len());

    let rows = assets.iter().enumerate().map(|(i, profile)| {
        let is_leader = leader_index == Some(i);
        let raw = if is_leader {
            generated.values.get(i).copied().unwrap_or(0.0)
        } else {
            competitor_projection(i, leader_index, generated, noise)
        };
        BoardRow {
            profile: *profile,
            projection: raw.round(),
            is_leader,
            is_analyzed: analyzed.contains(profile.ticker),
        }
    });

    let (analyzed_rows, open_rows): (Vec<BoardRow>, Vec<BoardRow>) =
        rows.partition(|r| r.is_analyzed);

    let (leader, competitors): (Vec<BoardRow>, Vec<BoardRow>) =
        open_rows.into_iter().partition(|r| r.is_leader);
    let leader = leader.into_iter().next();

    let ceiling = leader.as_ref().map(|l| l.projection - 1.0);

    let competitors = competitors
        .into_iter()
        .sorted_by(|a, b| b.projection.total_cmp(&a.projection))
        .map(|mut row| {
            if let Some(cap) = ceiling {
                row.projection = row.projection.min(cap);
            }
            row
        });

    leader
        .into_iter()
        .chain(competitors)
        .chain(analyzed_rows)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::interval_seed::IntervalSeed;
    use crate::config::ASSETS;

    fn generated(values: &[f64], leader: usize) -> GeneratedOpportunities {
        GeneratedOpportunities {
            values: values.to_vec(),
            leader_index: Some(leader),
        }
    }

    fn analyzed(tickers: &[&str]) -> AnalyzedSet {
        AnalyzedSet {
            tickers: tickers.iter().map(|t| t.to_string()).collect(),
            interval_seed: Some(IntervalSeed::new(1)),
        }
    }

    fn order(rows: &[BoardRow]) -> Vec<&'static str> {
        rows.iter().map(|r| r.ticker()).collect()
    }

    #[test]
    fn noise_maps_around_leader_slot() {
        // Leader is ETH (index 1); noise slots 0,1,2 -> BTC, XRP, SOL
        let g = generated(&[150.0, 400.0, 160.0, 170.0], 1);
        let rows = compute_display_order(ASSETS, &analyzed(&[]), &g, &[200.0, 300.0, 250.0]);
        assert_eq!(order(&rows), vec!["ETH/USDT", "XRP/USDT", "SOL/USDT", "BTC/USDT"]);
        assert_eq!(
            rows.iter().map(|r| r.projection).collect::<Vec<_>>(),
            vec![400.0, 300.0, 250.0, 200.0]
        );
        assert!(rows[0].is_leader);
    }

    #[test]
    fn competitors_are_clamped_below_leader() {
        let g = generated(&[250.0, 180.0, 170.0, 160.0], 0);
        // Raw noise for XRP is far above the leader
        let rows = compute_display_order(ASSETS, &analyzed(&[]), &g, &[900.0, 1100.0, 120.0]);
        assert_eq!(rows[0].ticker(), "BTC/USDT");
        assert_eq!(rows[0].projection, 250.0);
        // ETH 900 and XRP 1100 both capped at 249; stable order keeps XRP (1100) first
        assert_eq!(order(&rows), vec!["BTC/USDT", "XRP/USDT", "ETH/USDT", "SOL/USDT"]);
        assert_eq!(rows[1].projection, 249.0);
        assert_eq!(rows[2].projection, 249.0);
        assert_eq!(rows[3].projection, 120.0);
        for r in &rows[1..] {
            assert!(r.projection < rows[0].projection);
        }
    }

    #[test]
    fn short_or_empty_noise_falls_back_to_seeded_values() {
        let g = generated(&[250.4, 180.6, 170.2, 160.5], 0);
        let rows = compute_display_order(ASSETS, &analyzed(&[]), &g, &[190.0]);
        // ETH takes noise slot 0; XRP and SOL fall back to their seeded values (rounded)
        assert_eq!(
            rows.iter().map(|r| (r.ticker(), r.projection)).collect::<Vec<_>>(),
            vec![
                ("BTC/USDT", 250.0),
                ("ETH/USDT", 190.0),
                ("XRP/USDT", 170.0),
                ("SOL/USDT", 161.0),
            ]
        );

        let none = compute_display_order(ASSETS, &analyzed(&[]), &g, &[]);
        assert_eq!(none[1].projection, 181.0);

        // Zero is "no value yet", not a real projection
        let zeros = compute_display_order(ASSETS, &analyzed(&[]), &g, &[0.0, 0.0, 0.0]);
        assert_eq!(zeros[1].projection, 181.0);
    }

    #[test]
    fn analyzed_assets_sink_in_catalog_order() {
        let g = generated(&[150.0, 400.0, 160.0, 170.0], 1);
        let rows = compute_display_order(
            ASSETS,
            &analyzed(&["SOL/USDT", "BTC/USDT"]),
            &g,
            &[1000.0, 300.0, 900.0],
        );
        assert_eq!(order(&rows), vec!["ETH/USDT", "XRP/USDT", "BTC/USDT", "SOL/USDT"]);
        assert!(rows[2].is_analyzed && rows[3].is_analyzed);
        // Analyzed rows are not clamped
        assert_eq!(rows[2].projection, 1000.0);
    }

    #[test]
    fn analyzed_leader_loses_spotlight() {
        let g = generated(&[150.0, 400.0, 160.0, 170.0], 1);
        let rows = compute_display_order(
            ASSETS,
            &analyzed(&["ETH/USDT"]),
            &g,
            &[500.0, 300.0, 250.0],
        );
        assert_eq!(order(&rows), vec!["BTC/USDT", "XRP/USDT", "SOL/USDT", "ETH/USDT"]);
        // No spotlight, so nothing is clamped
        assert_eq!(rows[0].projection, 500.0);
        assert!(rows[3].is_leader && rows[3].is_analyzed);
    }

    #[test]
    fn everything_analyzed_keeps_catalog_order() {
        let g = generated(&[150.0, 400.0, 160.0, 170.0], 1);
        let all: Vec<&str> = ASSETS.iter().map(|a| a.ticker).collect();
        let rows = compute_display_order(ASSETS, &analyzed(&all), &g, &[1.0, 2.0, 3.0]);
        assert_eq!(order(&rows), all);
    }

    #[test]
    fn no_leader_no_clamp() {
        let g = GeneratedOpportunities {
            values: vec![100.0, 200.0],
            leader_index: None,
        };
        let rows = compute_display_order(&ASSETS[..2], &analyzed(&[]), &g, &[]);
        assert_eq!(order(&rows), vec!["ETH/USDT", "BTC/USDT"]);
        assert!(rows.iter().all(|r| !r.is_leader));
        assert!(compute_display_order(&[], &analyzed(&[]), &g, &[]).is_empty());
    }
}
