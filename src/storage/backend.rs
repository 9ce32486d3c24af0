//! Session store abstraction.
//!
//! This module defines the [`SessionStore`] trait: a small string key/value store
//! that survives between invocations of the explorer for as long as the session
//! lasts (until `logout` clears it).
//!
//! Each method maps to one credential store operation.

use crate::domain::error::Result;

/// Abstraction over session persistence backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map
///
/// # Examples
///
/// ```no_run
/// use reactor_explorer::storage::{JsonStorage, SessionStore};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/session.json"))?;
/// storage.set("orgId", "ORG@AdobeOrg")?;
/// assert_eq!(storage.get("orgId")?.as_deref(), Some("ORG@AdobeOrg"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SessionStore: Send + std::fmt::Debug {
    /// Reads a value, `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes every stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn clear(&mut self) -> Result<()>;
}
