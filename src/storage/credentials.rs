//! Credential store: the four operator secrets and their persistence.
//!
//! Lifecycle: [`CredentialStore::load`] on start, [`CredentialStore::update`] on
//! form submission, [`CredentialStore::persist`] right after a successful
//! submission. Every request reads [`CredentialStore::auth_headers`].

use crate::domain::credentials::{Credentials, CREDENTIAL_KEYS};
use crate::domain::error::Result;
use crate::storage::backend::SessionStore;
use std::collections::BTreeMap;

/// Current credentials plus the session store they persist to.
#[derive(Debug)]
pub struct CredentialStore {
    current: Credentials,
    store: Box<dyn SessionStore>,
}

impl CredentialStore {
    /// Wraps a session store. Credentials start empty until [`load`](Self::load).
    #[must_use]
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            current: Credentials::default(),
            store,
        }
    }

    /// Restores stored values. Keys that were never stored (or stored empty)
    /// keep their current value.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub fn load(&mut self) -> Result<()> {
        let mut restored = 0;
        for key in CREDENTIAL_KEYS {
            let Some(value) = self.store.get(key)?.filter(|v| !v.is_empty()) else {
                continue;
            };
            if let Some(slot) = self.current.field_mut(key) {
                *slot = value;
                restored += 1;
            }
        }
        tracing::debug!(restored, complete = self.is_complete(), "credentials loaded");
        Ok(())
    }

    /// Replaces the current values with trimmed form values.
    ///
    /// Returns whether all four are non-empty.
    pub fn update(&mut self, form: &Credentials) -> bool {
        self.current = Credentials::from_form(
            &form.access_token,
            &form.org_id,
            &form.client_id,
            &form.client_secret,
        );
        self.is_complete()
    }

    /// Writes the current values under the four credential keys.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails.
    pub fn persist(&mut self) -> Result<()> {
        for (key, value) in self.current.fields() {
            self.store.set(key, value)?;
        }
        tracing::debug!("credentials persisted");
        Ok(())
    }

    /// Forgets the current values and empties the session store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    pub fn clear(&mut self) -> Result<()> {
        self.current = Credentials::default();
        self.store.clear()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current.is_complete()
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.current
    }

    #[must_use]
    pub fn auth_headers(&self) -> BTreeMap<&'static str, String> {
        self.current.auth_headers()
    }
}
