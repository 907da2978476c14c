//! Session - the signed-in identity and its remember-me token
//!
//! The token is the account's normalized email, kept in
//! [`AUTH_TOKEN_SLOT`] so a later start can restore the session.

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::Account;
use shared::util::normalize_email;

use crate::db::{AUTH_TOKEN_SLOT, Collections, KvStorage};

pub struct Session {
    storage: Arc<dyn KvStorage>,
    current: Option<Account>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("current", &self.current.as_ref().map(|a| &a.email))
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Signed-out session writing its token to `storage`
    pub fn new(storage: Arc<dyn KvStorage>) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    /// Restore from the remember-me token
    ///
    /// The account must still exist and be verified; otherwise the session
    /// stays signed out and the stale token is dropped.
    pub fn restore(storage: Arc<dyn KvStorage>, db: &Collections) -> AppResult<Self> {
        let mut session = Self::new(storage);

        let token = session
            .storage
            .get(AUTH_TOKEN_SLOT)?
            .map(|t| normalize_email(&t))
            .filter(|t| !t.is_empty());

        if let Some(token) = token {
            match db.account_by_email(&token) {
                Some(acc) if acc.verified => {
                    tracing::info!(email = %acc.email, "Session restored");
                    session.current = Some(acc.clone());
                }
                _ => {
                    tracing::info!(token = %token, "Remember-me token no longer valid, signed out");
                    session.storage.remove(AUTH_TOKEN_SLOT)?;
                }
            }
        }

        Ok(session)
    }

    /// Set the active identity and persist the token
    pub fn sign_in(&mut self, account: Account) -> AppResult<()> {
        self.storage
            .set(AUTH_TOKEN_SLOT, &normalize_email(&account.email))?;
        self.current = Some(account);
        Ok(())
    }

    /// Clear identity and token
    pub fn sign_out(&mut self) -> AppResult<()> {
        self.storage.remove(AUTH_TOKEN_SLOT)?;
        self.current = None;
        Ok(())
    }

    /// Replace the cached identity after the account itself was edited
    ///
    /// No-op unless `account` is the signed-in one. The cached identity is
    /// replaced before the token is rewritten, so it is current even when
    /// the token write fails.
    pub fn refresh(&mut self, account: &Account) -> AppResult<()> {
        let Some(current) = &self.current else {
            return Ok(());
        };
        if current.id != account.id {
            return Ok(());
        }
        let email_changed = current.email != account.email;
        self.current = Some(account.clone());
        if email_changed {
            self.storage
                .set(AUTH_TOKEN_SLOT, &normalize_email(&account.email))?;
        }
        Ok(())
    }

    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(Account::is_admin)
    }
}
