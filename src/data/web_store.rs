// WASM-only code i.e. gated in mod.rs by #[cfg(target_arch = "wasm32")]

use {
    crate::data::storage::KeyValueStore,
    anyhow::{Result, anyhow},
};

/// `window.localStorage`. Looked up per call: storage can be disabled at any time
/// (private mode, quota, user settings) and that must only fail the one call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window`"))?;
        window
            .local_storage()
            .map_err(|e| anyhow!("localStorage unavailable: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage disabled"))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| anyhow!("getItem({}) failed: {:?}", key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("setItem({}) failed: {:?}", key, e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| anyhow!("removeItem({}) failed: {:?}", key, e))
    }
}
