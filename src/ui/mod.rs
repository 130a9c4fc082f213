// Text presentation for the CLI. The browser renders rows itself from `rows_json`.
mod board_table;

pub use board_table::{render_board, render_status_line};
