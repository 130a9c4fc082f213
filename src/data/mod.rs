mod board_repo;
mod storage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;

#[cfg(target_arch = "wasm32")]
mod web_store;

pub use {
    board_repo::{AnalyzedSet, BoardRepository},
    storage::{KeyValueStore, MemoryStore},
};

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(target_arch = "wasm32")]
pub use web_store::LocalStorage;
