//! Store - the collections blob and its load/save contract

use std::sync::Arc;

use shared::error::AppResult;

use super::seed::{self, SeedConfig};
use super::storage::{DB_SLOT, KvStorage, StorageError};
use super::Collections;

/// Owns the in-memory collections and writes them back in full
pub struct Store {
    storage: Arc<dyn KvStorage>,
    db: Collections,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("db", &self.db).finish_non_exhaustive()
    }
}

impl Store {
    /// Load the persisted blob, or seed defaults if none exists
    ///
    /// An existing blob with no accounts gets the admin seeded; one with no
    /// departments gets the default departments. A blob that fails to parse is
    /// reported as `StorageCorrupted` and left untouched on disk.
    pub fn load(storage: Arc<dyn KvStorage>, seed: &SeedConfig) -> AppResult<Self> {
        let raw = storage.get(DB_SLOT)?;

        let (db, dirty) = match raw {
            None => {
                tracing::info!("No stored data found, seeding defaults");
                (seed::seeded(seed), true)
            }
            Some(raw) => {
                let mut db: Collections = serde_json::from_str(&raw).map_err(|e| {
                    tracing::error!(error = %e, "Stored collections blob is unreadable");
                    StorageError::Corrupted(e.to_string())
                })?;
                let seeded_admin = seed::seed_admin_if_empty(&mut db, seed);
                let seeded_depts = seed::seed_departments_if_empty(&mut db);
                (db, seeded_admin || seeded_depts)
            }
        };

        let store = Self { storage, db };
        if dirty {
            store.save()?;
        }

        tracing::debug!(
            accounts = store.db.accounts.len(),
            departments = store.db.departments.len(),
            employees = store.db.employees.len(),
            requests = store.db.requests.len(),
            "Store loaded"
        );
        Ok(store)
    }

    /// Discard whatever is stored and start over from the defaults
    pub fn reseed(storage: Arc<dyn KvStorage>, seed: &SeedConfig) -> AppResult<Self> {
        tracing::warn!("Reseeding store, existing data is discarded");
        let store = Self {
            storage,
            db: seed::seeded(seed),
        };
        store.save()?;
        Ok(store)
    }

    /// Serialize the full collection set in one write
    pub fn save(&self) -> AppResult<()> {
        let blob = serde_json::to_string(&self.db).map_err(StorageError::from)?;
        self.storage.set(DB_SLOT, &blob)?;
        Ok(())
    }

    /// Run one read-modify-write transaction
    ///
    /// The mutation works on a copy. On `Ok` the copy is persisted and becomes
    /// the current state; on `Err` nothing changes in memory or on disk.
    pub fn transact<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Collections) -> AppResult<T>,
    {
        let mut next = self.db.clone();
        let value = f(&mut next)?;

        let blob = serde_json::to_string(&next).map_err(StorageError::from)?;
        self.storage.set(DB_SLOT, &blob)?;
        self.db = next;
        Ok(value)
    }

    pub fn collections(&self) -> &Collections {
        &self.db
    }

    pub fn storage(&self) -> &Arc<dyn KvStorage> {
        &self.storage
    }
}
