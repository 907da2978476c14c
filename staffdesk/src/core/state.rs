use std::sync::Arc;

use shared::error::AppResult;
use shared::models::Account;
use shared::util::normalize_email;

use crate::auth::Session;
use crate::core::Config;
use crate::db::{KvStorage, Store, UNVERIFIED_EMAIL_SLOT};
use crate::router::Router;

/// Kernel state - everything an intent handler can touch
///
/// Built once by [`AppState::initialize`]; the store and the session share
/// one storage handle.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub session: Session,
    pub router: Router,
}

impl AppState {
    /// Load the store (seeding a fresh install) and restore the session
    ///
    /// A corrupted collections blob is returned as an error; the embedding
    /// decides whether to [`Store::reseed`].
    pub fn initialize(config: Config, storage: Arc<dyn KvStorage>) -> AppResult<Self> {
        let store = Store::load(storage.clone(), &config.seed)?;
        let session = Session::restore(storage, store.collections())?;
        tracing::info!(
            accounts = store.collections().accounts.len(),
            departments = store.collections().departments.len(),
            signed_in = session.is_authenticated(),
            "Kernel state initialized"
        );
        Ok(Self {
            config,
            store,
            session,
            router: Router::new(),
        })
    }

    /// As [`AppState::initialize`] but overwriting whatever blob is stored
    pub fn initialize_reseeded(config: Config, storage: Arc<dyn KvStorage>) -> AppResult<Self> {
        let store = Store::reseed(storage.clone(), &config.seed)?;
        let session = Session::restore(storage, store.collections())?;
        Ok(Self {
            config,
            store,
            session,
            router: Router::new(),
        })
    }

    pub fn actor(&self) -> Option<&Account> {
        self.session.current()
    }

    fn storage(&self) -> &Arc<dyn KvStorage> {
        self.store.storage()
    }

    /// Email awaiting verification, if a registration is pending
    pub fn pending_email(&self) -> AppResult<Option<String>> {
        Ok(self
            .storage()
            .get(UNVERIFIED_EMAIL_SLOT)?
            .map(|e| normalize_email(&e))
            .filter(|e| !e.is_empty()))
    }

    pub fn set_pending_email(&self, email: &str) -> AppResult<()> {
        self.storage().set(UNVERIFIED_EMAIL_SLOT, email)?;
        Ok(())
    }

    pub fn clear_pending_email(&self) -> AppResult<()> {
        self.storage().remove(UNVERIFIED_EMAIL_SLOT)?;
        Ok(())
    }

    /// Refresh the session after a committed account edit
    ///
    /// Called once the change is saved, so a token write failure is logged
    /// rather than reported.
    pub fn refresh_session(&mut self, account: &Account) {
        if let Err(e) = self.session.refresh(account) {
            tracing::warn!(email = %account.email, error = %e, "Remember-me token not updated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{AUTH_TOKEN_SLOT, MemoryStorage};

    #[test]
    fn test_initialize_restores_session() {
        let storage: Arc<dyn KvStorage> = Arc::new(MemoryStorage::with_slots([(
            AUTH_TOKEN_SLOT,
            "admin@example.com",
        )]));
        let mut config = Config::with_data_dir("/unused");
        config.seed = Default::default();
        let state = AppState::initialize(config, storage).unwrap();
        assert!(state.session.is_admin());
    }

    #[test]
    fn test_pending_email_slot() {
        let storage: Arc<dyn KvStorage> = Arc::new(MemoryStorage::new());
        let state = AppState::initialize(Config::with_data_dir("/unused"), storage).unwrap();
        assert_eq!(state.pending_email().unwrap(), None);
        state.set_pending_email("jane@x.com").unwrap();
        assert_eq!(state.pending_email().unwrap().as_deref(), Some("jane@x.com"));
        state.clear_pending_email().unwrap();
        assert_eq!(state.pending_email().unwrap(), None);
    }
}
