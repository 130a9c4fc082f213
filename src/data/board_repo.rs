use serde::{Deserialize, Serialize};

use crate::analysis::interval_seed::IntervalSeed;
use crate::config::PERSISTENCE;
use crate::data::storage::KeyValueStore;
use crate::domain::Language;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Tickers the user has already operated on, tagged with the window they belong to.
/// Wire shape: `{ "tickers": [...], "intervalSeed": n }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedSet {
    #[serde(default)]
    pub tickers: Vec<String>,
    // Optional so a record missing the field is treated as stale rather than corrupt
    #[serde(default)]
    pub interval_seed: Option<IntervalSeed>,
}

impl AnalyzedSet {
    pub fn empty(seed: IntervalSeed) -> Self {
        Self {
            tickers: Vec::new(),
            interval_seed: Some(seed),
        }
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.tickers.iter().any(|t| t == ticker)
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

/// Persistence for per-browser board state. Every failure is logged and absorbed:
/// a broken store behaves like an empty one, and writes just don't stick.
pub struct BoardRepository {
    store: Box<dyn KeyValueStore>,
}

impl BoardRepository {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Analyzed set for `current`. A record from any other window is removed
    /// from the store before returning empty.
    pub fn load_analyzed(&mut self, current: IntervalSeed) -> AnalyzedSet {
        let key = PERSISTENCE.keys.analyzed;

        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AnalyzedSet::empty(current),
            Err(e) => {
                log::warn!("Analyzed record unreadable, starting empty: {:#}", e);
                return AnalyzedSet::empty(current);
            }
        };

        let record: AnalyzedSet = match serde_json::from_str(&raw) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Analyzed record corrupt, starting empty: {}", e);
                return AnalyzedSet::empty(current);
            }
        };

        if record.interval_seed != Some(current) {
            #[cfg(debug_assertions)]
            if DF.log_storage {
                log::info!(
                    "STORAGE: dropping stale analyzed record (stored {:?}, current {})",
                    record.interval_seed,
                    current
                );
            }
            self.clear_analyzed();
            return AnalyzedSet::empty(current);
        }

        record
    }

    /// Adds `ticker` to the record for `current` and returns the resulting set.
    /// The returned set includes `ticker` even if the write fails.
    pub fn mark_analyzed(&mut self, ticker: &str, current: IntervalSeed) -> AnalyzedSet {
        let mut set = self.load_analyzed(current);
        if set.contains(ticker) {
            return set;
        }
        set.tickers.push(ticker.to_string());

        let write = serde_json::to_string(&set)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.store.set(PERSISTENCE.keys.analyzed, &json));

        match write {
            Ok(()) => {
                #[cfg(debug_assertions)]
                if DF.log_storage {
                    log::info!("STORAGE: analyzed {:?} @ {}", set.tickers, current);
                }
            }
            Err(e) => log::warn!("Could not persist analyzed {}: {:#}", ticker, e),
        }
        set
    }

    pub fn clear_analyzed(&mut self) {
        if let Err(e) = self.store.remove(PERSISTENCE.keys.analyzed) {
            log::warn!("Could not clear analyzed record: {:#}", e);
        }
    }

    pub fn language(&self) -> Language {
        match self.store.get(PERSISTENCE.keys.language) {
            Ok(raw) => Language::from_stored(raw.as_deref()),
            Err(e) => {
                log::warn!("Language preference unreadable: {:#}", e);
                Language::default()
            }
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if let Err(e) = self
            .store
            .set(PERSISTENCE.keys.language, &language.to_string())
        {
            log::warn!("Could not persist language: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::storage::MemoryStore;
    use anyhow::{Result, bail};

    const KEY: &str = "evotrex_analyzed_cryptos";

    fn repo() -> (BoardRepository, MemoryStore) {
        let store = MemoryStore::new();
        (BoardRepository::new(Box::new(store.clone())), store)
    }

    /// Reads fine, refuses every write.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            bail!("quota exceeded")
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            bail!("storage disabled")
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            bail!("security error")
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            bail!("security error")
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            bail!("security error")
        }
    }

    #[test]
    fn mark_then_read_same_window() {
        let (mut repo, store) = repo();
        let s = IntervalSeed::new(200_400);
        repo.mark_analyzed("BTC/USDT", s);

        let stored: serde_json::Value = serde_json::from_str(&store.raw(KEY).unwrap()).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({ "tickers": ["BTC/USDT"], "intervalSeed": 200_400 })
        );
        assert_eq!(repo.load_analyzed(s).tickers, vec!["BTC/USDT"]);
    }

    #[test]
    fn read_from_next_window_clears_store() {
        let (mut repo, store) = repo();
        let s = IntervalSeed::new(200_400);
        repo.mark_analyzed("BTC/USDT", s);

        let next = IntervalSeed::new(200_401);
        assert!(repo.load_analyzed(next).is_empty());
        assert_eq!(store.raw(KEY), None);
    }

    #[test]
    fn marking_twice_keeps_one_entry_in_order() {
        let (mut repo, _) = repo();
        let s = IntervalSeed::new(5);
        repo.mark_analyzed("SOL/USDT", s);
        repo.mark_analyzed("BTC/USDT", s);
        let set = repo.mark_analyzed("SOL/USDT", s);
        assert_eq!(set.tickers, vec!["SOL/USDT", "BTC/USDT"]);
    }

    #[test]
    fn corrupt_record_reads_empty() {
        let (mut repo, store) = repo();
        store.put_raw(KEY, "{ tickers: oops");
        let s = IntervalSeed::new(7);
        assert!(repo.load_analyzed(s).is_empty());

        // Next mark overwrites the junk
        repo.mark_analyzed("ETH/USDT", s);
        assert_eq!(repo.load_analyzed(s).tickers, vec!["ETH/USDT"]);
    }

    #[test]
    fn record_without_seed_is_stale() {
        let (mut repo, store) = repo();
        store.put_raw(KEY, r#"{"tickers":["XRP/USDT"]}"#);
        assert!(repo.load_analyzed(IntervalSeed::new(1)).is_empty());
        assert_eq!(store.raw(KEY), None);
    }

    #[test]
    fn record_without_tickers_is_empty_but_valid() {
        let (mut repo, store) = repo();
        store.put_raw(KEY, r#"{"intervalSeed":9}"#);
        let set = repo.load_analyzed(IntervalSeed::new(9));
        assert!(set.is_empty());
        assert!(store.raw(KEY).is_some());
    }

    #[test]
    fn failed_write_still_returns_marked_set() {
        let inner = MemoryStore::new();
        let mut repo = BoardRepository::new(Box::new(ReadOnlyStore(inner.clone())));
        let set = repo.mark_analyzed("BTC/USDT", IntervalSeed::new(3));
        assert!(set.contains("BTC/USDT"));
        assert!(inner.is_empty());
        repo.clear_analyzed();
    }

    #[test]
    fn broken_store_behaves_like_empty() {
        let mut repo = BoardRepository::new(Box::new(BrokenStore));
        let s = IntervalSeed::new(3);
        assert!(repo.load_analyzed(s).is_empty());
        assert_eq!(repo.mark_analyzed("BTC/USDT", s).len(), 1);
        assert_eq!(repo.language(), Language::Pt);
        repo.set_language(Language::Es);
    }

    #[test]
    fn language_round_trip() {
        let (mut repo, store) = repo();
        assert_eq!(repo.language(), Language::Pt);
        repo.set_language(Language::En);
        assert_eq!(store.raw("evotrex_language").as_deref(), Some("en"));
        assert_eq!(repo.language(), Language::En);
    }
}
