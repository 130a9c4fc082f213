use crate::domain::{AssetProfile, Trend};

/// The four tracked assets, in catalog order. Catalog order is also the order
/// analyzed assets keep at the bottom of the board.
pub const ASSETS: &[AssetProfile] = &[
    AssetProfile {
        ticker: "BTC/USDT",
        name: "Bitcoin",
        price: 67842.5,
        change_pct: 2.34,
        sparkline: &[65000.0, 66200.0, 65800.0, 67100.0, 66900.0, 67500.0, 67842.0],
        volatility: 12.5,
        trend: Trend::Up,
        probability_pct: 78,
        payout_pct: 87,
    },
    AssetProfile {
        ticker: "ETH/USDT",
        name: "Ethereum",
        price: 3456.78,
        change_pct: -1.12,
        sparkline: &[3500.0, 3480.0, 3520.0, 3450.0, 3470.0, 3440.0, 3456.0],
        volatility: 15.2,
        trend: Trend::Down,
        probability_pct: 72,
        payout_pct: 85,
    },
    AssetProfile {
        ticker: "XRP/USDT",
        name: "XRP",
        price: 0.5234,
        change_pct: 5.67,
        sparkline: &[0.48, 0.49, 0.5, 0.51, 0.5, 0.52, 0.52],
        volatility: 18.7,
        trend: Trend::Up,
        probability_pct: 81,
        payout_pct: 92,
    },
    AssetProfile {
        ticker: "SOL/USDT",
        name: "Solana",
        price: 142.89,
        change_pct: 3.21,
        sparkline: &[135.0, 138.0, 136.0, 140.0, 139.0, 141.0, 142.0],
        volatility: 22.1,
        trend: Trend::Up,
        probability_pct: 75,
        payout_pct: 89,
    },
];
