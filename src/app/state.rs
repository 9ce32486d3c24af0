//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the explorer: credentials,
//! the company and property option lists, the Get Details inputs, the mounted
//! results and the live search state. View models are computed on demand.
//!
//! # Example
//!
//! ```rust
//! use reactor_explorer::app::AppState;
//! use reactor_explorer::storage::{CredentialStore, MemoryStorage};
//! use reactor_explorer::ui::Theme;
//!
//! let credentials = CredentialStore::new(Box::new(MemoryStorage::new()));
//! let state = AppState::new(credentials, Theme::default());
//! let viewmodel = state.compute_viewmodel();
//! assert!(viewmodel.empty_state.is_some());
//! ```

use crate::app::modes::StatusMessage;
use crate::domain::{Company, Property};
use crate::storage::CredentialStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusLine, UIViewModel};
use crate::ui::{ResultsView, SearchEngine, SearchOutcome};

/// Title shown in the header bar.
pub const APP_TITLE: &str = "Reactor Explorer";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Operator credentials and their session store.
    pub credentials: CredentialStore,

    /// Company options from the last successful listing.
    pub companies: Vec<Company>,

    /// Property options of the selected company from the last successful listing.
    pub properties: Vec<Property>,

    pub selected_company: Option<String>,
    pub selected_property: Option<String>,

    /// Rule-name filter for Get Details.
    pub query: String,
    pub include_unpublished: bool,
    pub show_attributes: bool,

    /// Requests posted to the worker and not yet answered.
    pub pending: usize,

    /// Inline listing and credential feedback.
    pub status: Option<StatusMessage>,

    /// Alert raised by the last Get Details run.
    pub alert: Option<String>,

    /// Currently mounted results.
    pub results: ResultsView,

    pub search: SearchEngine,

    /// Outcome of the last non-empty search, cleared on remount.
    pub last_search: Option<SearchOutcome>,

    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(credentials: CredentialStore, theme: Theme) -> Self {
        Self {
            credentials,
            companies: Vec::new(),
            properties: Vec::new(),
            selected_company: None,
            selected_property: None,
            query: String::new(),
            include_unpublished: false,
            show_attributes: false,
            pending: 0,
            status: None,
            alert: None,
            results: ResultsView::default(),
            search: SearchEngine::new(),
            last_search: None,
            theme,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub fn selected_company(&self) -> Option<&Company> {
        let id = self.selected_company.as_deref()?;
        self.companies.iter().find(|company| company.id == id)
    }

    #[must_use]
    pub fn selected_property(&self) -> Option<&Property> {
        let id = self.selected_property.as_deref()?;
        self.properties.iter().find(|property| property.id == id)
    }

    /// Replaces the mounted results; search state starts over.
    pub fn mount_results(&mut self, results: ResultsView) {
        self.results = results;
        self.search.reset();
        self.last_search = None;
    }

    /// Drops everything derived from the current credentials.
    pub fn reset_session(&mut self) {
        self.companies.clear();
        self.properties.clear();
        self.selected_company = None;
        self.selected_property = None;
        self.alert = None;
        self.mount_results(ResultsView::default());
    }

    /// Computes the screen chrome around the results.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            status: self.status.as_ref().map(|status| StatusLine {
                kind: status.kind,
                text: status.text.clone(),
            }),
            alert: self.alert.clone(),
            search_bar: self.compute_search_bar(),
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let company = self.selected_company().map(|c| c.name.as_str());
        let property = self.selected_property().map(|p| p.name.as_str());
        let context = match (company, property) {
            (Some(company), Some(property)) => Some(format!("{company} / {property}")),
            (Some(company), None) => Some(company.to_string()),
            (None, Some(property)) => Some(property.to_string()),
            (None, None) => None,
        };
        HeaderInfo {
            title: APP_TITLE.to_string(),
            context,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        self.last_search.as_ref().map(|outcome| SearchBarInfo {
            query: outcome.query.clone(),
            matched: outcome.matched,
            total: self.results.item_count(),
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.results.is_empty() {
            return None;
        }
        let (message, subtitle) = if self.is_loading() {
            ("Loading...", "Waiting for the API to answer.")
        } else if !self.credentials.is_complete() {
            ("No credentials", "Please fill in all fields.")
        } else {
            ("Nothing to show", "Select a property and run Get Details.")
        };
        Some(EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        FooterInfo {
            hint: format!(
                "{} | {} of {} shown",
                self.results.toggle.label(),
                self.results.visible_count(),
                self.results.item_count()
            ),
        }
    }
}
