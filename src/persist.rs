use crate::error::PersistError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key the theme preference is stored under.
pub const THEME_KEY: &str = "portfolio-theme";

/// A single-value-per-key preference backend.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// Browser `localStorage`.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .ok_or(PersistError::Unavailable)?
            .local_storage()
            .map_err(|e| PersistError::Read(format!("{:?}", e)))?
            .ok_or(PersistError::Unavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| PersistError::Read(format!("{:?}", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PersistError::Write(format!("{:?}", e)))
    }
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what was written.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_shares_state() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.save(THEME_KEY, "nord").unwrap();
        assert_eq!(store.load(THEME_KEY).unwrap().as_deref(), Some("nord"));
    }

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemoryStore::with("other", "x");
        assert_eq!(store.load(THEME_KEY).unwrap(), None);
    }
}
