//! Key-value persistence configuration

/// Storage keys shared with the web front end. Changing these orphans existing browser state.
pub struct StorageKeys {
    /// JSON `{ tickers, intervalSeed }`
    pub analyzed: &'static str,
    /// `pt` | `en` | `es`
    pub language: &'static str,
}

/// Configuration for the native file-backed store
pub struct FileStoreConfig {
    /// Default path of the JSON key-value file used by the CLI
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub keys: StorageKeys,
    pub file: FileStoreConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    keys: StorageKeys {
        analyzed: "evotrex_analyzed_cryptos",
        language: "evotrex_language",
    },
    file: FileStoreConfig {
        state_path: ".signal_board.json",
    },
};
