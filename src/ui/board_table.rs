use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use crate::engine::{Board, BoardRow};
use crate::utils::format_local;

#[derive(Tabled)]
struct RowView {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Ticker")]
    ticker: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Projection")]
    projection: String,
    #[tabled(rename = "Leader")]
    leader: &'static str,
    #[tabled(rename = "Analyzed")]
    analyzed: &'static str,
    #[tabled(rename = "Trend")]
    trend: String,
    #[tabled(rename = "Prob.")]
    probability: String,
    #[tabled(rename = "Payout")]
    payout: String,
}

impl RowView {
    fn new(rank: usize, row: &BoardRow, highlighted: bool) -> Self {
        let marker = if highlighted { "> " } else { "" };
        Self {
            rank,
            ticker: row.ticker(),
            name: row.profile.name,
            projection: format!("{}{:.0}%", marker, row.projection),
            leader: if row.is_leader { "*" } else { "" },
            analyzed: if row.is_analyzed { "yes" } else { "" },
            trend: row.profile.trend.to_string(),
            probability: format!("{}%", row.profile.probability_pct),
            payout: format!("{}%", row.profile.payout_pct),
        }
    }
}

/// The ranked board as a rounded text table. The spotlight row is marked with `>`.
pub fn render_board(board: &Board) -> String {
    let highlighted = board.highlighted();
    let views: Vec<RowView> = board
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| RowView::new(i + 1, row, i == highlighted && !row.is_analyzed))
        .collect();

    let mut table = Table::new(views);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()))
        .with(Modify::new(Columns::new(7..)).with(Alignment::right()));
    table.to_string()
}

/// `interval 200400 | next signals in 07:53 | 2026-10-19 14:07:07`
pub fn render_status_line(board: &Board) -> String {
    format!(
        "interval {} | next signals in {} | {}",
        board.seed(),
        board.countdown(),
        format_local(board.now())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::random::ScriptedRandom;
    use crate::config::{ASSETS, BOARD};
    use crate::data::MemoryStore;
    use crate::utils::FixedClock;
    use chrono::NaiveDate;

    fn board() -> Board {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 7, 0)
            .unwrap();
        Board::new(
            BOARD,
            ASSETS,
            Box::new(FixedClock::new(now)),
            Box::new(ScriptedRandom::new(vec![0.5])),
            Box::new(MemoryStore::new()),
        )
    }

    #[test]
    fn table_lists_every_asset_leader_first() {
        let out = render_board(&board());
        for a in ASSETS {
            assert!(out.contains(a.ticker));
        }
        let eth = out.find("ETH/USDT").unwrap();
        let btc = out.find("BTC/USDT").unwrap();
        assert!(eth < btc);
        assert!(out.contains("> 293%"));
    }

    #[test]
    fn status_line_shows_seed_and_countdown() {
        let line = render_status_line(&board());
        assert!(line.starts_with("interval 200400 | next signals in 08:00"));
    }
}
