// WASM-only code i.e. gated in lib.rs by #[cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;

use crate::data::LocalStorage;
use crate::domain::Language;
use crate::engine::Board;

pub fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for(env!("CARGO_CRATE_NAME"), my_code_level)
        .chain(fern::Output::call(|record| {
            let msg = record.args().to_string();
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg.into()),
                log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                log::Level::Info => web_sys::console::info_1(&msg.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
            }
        }))
        .apply();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_log();
}

/// Browser handle on a board backed by `localStorage`.
/// The page calls `tick()` from `setInterval` and re-renders from `rows_json()`.
#[wasm_bindgen]
pub struct WebBoard {
    board: Board,
}

#[wasm_bindgen]
impl WebBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebBoard {
        WebBoard {
            board: Board::with_store(Box::new(LocalStorage)),
        }
    }

    /// Events from this tick as a JSON array.
    pub fn tick(&mut self) -> String {
        to_json(&self.board.tick())
    }

    /// `OperateOutcome` as JSON, tagged by `kind`.
    pub fn operate(&mut self, ticker: &str) -> String {
        to_json(&self.board.operate(ticker))
    }

    /// Verdict for the analysis view that just finished, as JSON.
    pub fn conclude(&mut self) -> String {
        to_json(&self.board.conclude_analysis())
    }

    pub fn refresh(&mut self) {
        self.board.refresh_signals();
    }

    pub fn rows_json(&self) -> String {
        to_json(&self.board.rows())
    }

    pub fn countdown(&self) -> String {
        self.board.countdown().to_string()
    }

    pub fn highlighted(&self) -> usize {
        self.board.highlighted()
    }

    pub fn language(&self) -> String {
        self.board.language().to_string()
    }

    /// Unknown codes fall back to the default language.
    pub fn set_language(&mut self, code: &str) {
        self.board
            .set_language(Language::from_stored(Some(code)));
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("JSON encode failed: {}", e);
        "null".to_string()
    })
}
