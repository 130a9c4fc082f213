// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))] so no need to gate internally here

use {
    crate::data::storage::KeyValueStore,
    anyhow::{Context, Result},
    std::{
        collections::BTreeMap,
        fs::File,
        io::{BufReader, BufWriter},
        path::{Path, PathBuf},
    },
};

type Entries = BTreeMap<String, String>;

/// Whole-file JSON key-value store for the CLI. Every call re-reads the file,
/// so two CLI runs against the same path see each other's writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        let entries = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Corrupt state file {}", self.path.display()))?;
        Ok(entries)
    }

    /// Like `load`, but a corrupt file is replaced rather than blocking writes forever.
    fn load_for_write(&self) -> Result<Entries> {
        match self.load() {
            Ok(entries) => Ok(entries),
            Err(e) if self.path.exists() => {
                log::warn!("Discarding unreadable state file: {:#}", e);
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &Entries) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), entries)
            .context("Failed to write state file")?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load_for_write()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
