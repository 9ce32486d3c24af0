//! Domain layer for the explorer.
//!
//! Core types independent of transport, storage or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`resource`]: JSON:API resource model (rules, components, data elements, extensions)
//! - [`credentials`]: Operator credentials and the request headers derived from them
//!
//! # Examples
//!
//! ```
//! use reactor_explorer::domain::{Credentials, Result};
//!
//! fn login() -> Result<Credentials> {
//!     Ok(Credentials::from_form("token", "org", "client", "secret"))
//! }
//! ```

pub mod credentials;
pub mod error;
pub mod resource;

pub use credentials::Credentials;
pub use error::{ExplorerError, Result};
pub use resource::{Choice, Company, DataElement, Extension, Property, Resource, Rule, RuleComponent};
