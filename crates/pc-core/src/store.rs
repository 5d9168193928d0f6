//! Persistence boundary. The engine never stores results itself; callers
//! hand it a store when a request has to resolve profiles by id.

use crate::error::{EngineError, Result};
use crate::profile::UserResults;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Key-value store of scored results.
pub trait ResultsStore: Send + Sync {
    fn get(&self, id: &Uuid) -> Result<Option<UserResults>>;

    fn put(&self, results: UserResults) -> Result<()>;

    /// Fetch or fail with `ProfileNotFound`.
    fn require(&self, id: &Uuid) -> Result<UserResults> {
        self.get(id)?.ok_or_else(|| EngineError::ProfileNotFound { id: id.to_string() })
    }
}

/// In-memory store keyed by results id.
#[derive(Debug, Clone, Default)]
pub struct MemoryResultsStore {
    inner: Arc<RwLock<HashMap<Uuid, UserResults>>>,
}

impl MemoryResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.inner.read().map_err(|_| poisoned())?.len())
    }
}

fn poisoned() -> EngineError {
    EngineError::Other(anyhow::anyhow!("results store lock poisoned"))
}

impl ResultsStore for MemoryResultsStore {
    fn get(&self, id: &Uuid) -> Result<Option<UserResults>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }

    fn put(&self, results: UserResults) -> Result<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(results.id, results);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisoned_lock_is_an_error() {
        let store = MemoryResultsStore::new();
        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(store.count(), Err(EngineError::Other(_))));
        assert!(store.get(&Uuid::new_v4()).is_err());
    }
}
