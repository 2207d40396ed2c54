use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{KeyValueStore, StoreError};

/// In-memory store for tests. Clones share the same entries, so a test can keep
/// a handle after giving the store away.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(std::io::Error::other("write refused").into());
        }
        self.writes.set(self.writes.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
