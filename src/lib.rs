//! Reactor Explorer: a terminal explorer for tag-management property configuration.
//!
//! Reactor Explorer reads a property's configuration from the Reactor API and
//! presents it as a collapsible, searchable tree:
//! - Credential form persisted to a local session store
//! - Company and property listings
//! - Rules (with their events, conditions and actions), data elements and extensions
//! - Publish-status and rule-name filters
//! - Live keyword search with highlighting and expand/collapse-all

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action runtime                                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Sections    │   │ - JSON I/O    │   │ - Listings    │
//! │ - Search      │   │ - Credentials │   │ - Details     │
//! │ - Rendering   │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog (catalog/) & API (api/)                    │
//! │  - Aggregation, filters, classification             │
//! │  - Fetcher trait, HTTP client, pagination           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types, resources, credentials (domain/)    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: Resource fetching, pagination and typed endpoints
//! - [`catalog`]: Property details aggregation and component classification
//! - [`domain`]: Core domain types (resources, credentials, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Session store backends and the credential store
//! - [`worker`]: Request worker executing API calls
//! - [`ui`]: Presentation tree, search and terminal rendering
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! An optional TOML file, every key optional:
//!
//! ```toml
//! api_base_url = "https://reactor.adobe.io"
//! data_dir = "~/.local/share/reactor-explorer"
//! theme = "catppuccin-mocha"
//! theme_file = "/path/to/theme.toml"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use reactor_explorer::{app::dispatch, connector, initialize, Config, Event};
//!
//! # async fn run() -> reactor_explorer::Result<()> {
//! let config = Config::default();
//! let mut state = initialize(&config)?;
//! let connect = connector(&config);
//!
//! dispatch(&mut state, Event::Start, &connect).await?;
//! dispatch(&mut state, Event::SelectCompany("CO123".into()), &connect).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{ExplorerError, Result};
pub use ui::Theme;

use crate::api::HttpFetcher;
use crate::domain::Credentials;
use crate::storage::{CredentialStore, JsonStorage};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default Reactor API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://reactor.adobe.io";

/// File name of the session store inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Explorer configuration.
///
/// Every field is optional in the TOML file; CLI flags override file values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL every API path is appended to.
    pub api_base_url: String,

    /// Directory holding the session store and trace file. `~` is expanded.
    /// Default: platform data directory + `reactor-explorer`.
    pub data_dir: Option<String>,

    /// Built-in theme name: `catppuccin-mocha`, `catppuccin-latte` or `plain`.
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: None,
            theme: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExplorerError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] on invalid TOML or mistyped keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ExplorerError::Config(e.to_string()))
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::get_data_dir, infrastructure::expand_tilde)
    }

    #[must_use]
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join(SESSION_FILE_NAME)
    }

    /// Resolved theme: file first, then built-in name, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Theme`] for an unknown name or unreadable file.
    pub fn theme(&self) -> Result<Theme> {
        let file = self.theme_file.as_deref().map(infrastructure::expand_tilde);
        Theme::resolve(self.theme.as_deref(), file.as_deref())
    }
}

/// Builds the application state: session store, credential store and theme.
///
/// Stored credentials are loaded by the `Start` event, not here.
///
/// # Errors
///
/// Returns an error if the session store cannot be opened or the theme cannot
/// be resolved.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(data_dir = ?config.data_dir(), "initializing explorer");

    let store = JsonStorage::new(config.session_file())?;
    let theme = config.theme()?;

    Ok(AppState::new(CredentialStore::new(Box::new(store)), theme))
}

/// Returns the fetcher factory used by [`app::dispatch`]: one HTTP client per
/// request, authenticated with the credentials current at that moment.
pub fn connector(config: &Config) -> impl Fn(&Credentials) -> Result<HttpFetcher> {
    let base_url = config.api_base_url.clone();
    move |credentials: &Credentials| HttpFetcher::new(&base_url, &credentials.auth_headers())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn config_keys_override_defaults() {
        let config = Config::from_toml(
            "api_base_url = \"http://localhost:9000\"\ndata_dir = \"/tmp/rx\"\ntheme = \"plain\"\n",
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.session_file(), PathBuf::from("/tmp/rx/session.json"));
        assert_eq!(config.theme().unwrap().name, "plain");
    }

    #[test]
    fn mistyped_keys_are_config_errors() {
        let err = Config::from_toml("trace_level = 3").unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
    }

    #[test]
    fn initialize_opens_the_session_store_in_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Config::default()
        };

        let state = initialize(&config).unwrap();

        assert!(!state.credentials.is_complete());
        assert!(dir.path().exists());
    }
}
