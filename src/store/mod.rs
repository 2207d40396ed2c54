mod file;
#[cfg(test)]
mod memory;
mod repository;

pub(crate) use file::FileStore;
#[cfg(test)]
pub(crate) use memory::MemoryStore;
pub(crate) use repository::{LedgerRepository, LoadSource};
#[cfg(test)]
pub(crate) use repository::LEDGER_KEY;

#[derive(Debug, thiserror::Error)]
pub(crate) enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode ledger: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable string storage addressed by key.
pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
