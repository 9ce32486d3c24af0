//! Storage layer for session-scoped persistence.
//!
//! # Modules
//!
//! - `backend`: [`SessionStore`] trait abstraction
//! - `json`: JSON file-based implementation with atomic writes
//! - `memory`: in-memory implementation
//! - `credentials`: the credential store built on a session store

pub mod backend;
pub mod credentials;
pub mod json;
pub mod memory;

pub use backend::SessionStore;
pub use credentials::CredentialStore;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
