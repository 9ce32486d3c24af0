//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes. It returns
//! whether the screen needs redrawing plus the [`Action`]s to execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Start`, `Logout`
//! - **Form**: `SubmitCredentials`, `SelectCompany`, `SelectProperty`,
//!   `SetQuery`, `SetIncludeUnpublished`, `SetShowAttributes`
//! - **Results**: `GetDetails`, `Search`, `ToggleAll`, `ToggleItem`
//! - **Worker**: `WorkerResponse` with typed response variants
//!
//! # Example
//!
//! ```rust
//! use reactor_explorer::app::{handle_event, Action, AppState, Event};
//! use reactor_explorer::domain::Credentials;
//! use reactor_explorer::storage::{CredentialStore, MemoryStorage};
//! use reactor_explorer::ui::Theme;
//!
//! let credentials = CredentialStore::new(Box::new(MemoryStorage::new()));
//! let mut state = AppState::new(credentials, Theme::default());
//! let form = Credentials::from_form("token", "org", "client", "secret");
//! let (_, actions) = handle_event(&mut state, &Event::SubmitCredentials(form))?;
//! assert_eq!(actions[0], Action::PersistCredentials);
//! # Ok::<(), reactor_explorer::ExplorerError>(())
//! ```

use crate::app::modes::StatusMessage;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Credentials;
use crate::ui::{build_sections, PresentationOptions, ResultsView};
use crate::worker::{RequestKind, WorkerMessage, WorkerResponse};

pub const SETTINGS_UPDATED: &str = "Settings updated successfully!";
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const COMPANIES_FAILED: &str = "Error fetching companies. Check your credentials.";
pub const PROPERTIES_FAILED: &str = "Error fetching properties. Please check your credentials.";
pub const SELECT_PROPERTY: &str = "Please select a property.";
pub const DETAILS_FAILED: &str =
    "An error occurred while fetching details. Please check the console for more information.";
pub const SESSION_CLEARED: &str = "Session cleared.";

/// Events triggered by the operator or by worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Loads stored credentials; lists companies when they are complete.
    Start,

    /// Submits the credential form (values are trimmed).
    SubmitCredentials(Credentials),

    /// Selects a company by id and lists its properties.
    SelectCompany(String),

    /// Selects a property by id.
    SelectProperty(String),

    /// Sets the rule-name filter used by Get Details.
    SetQuery(String),

    SetIncludeUnpublished(bool),

    SetShowAttributes(bool),

    /// Fetches and renders the selected property's configuration.
    GetDetails,

    /// Runs a live search over the mounted results.
    Search(String),

    /// Flips every item between expanded and collapsed.
    ToggleAll,

    /// Flips one item by flat index.
    ToggleItem(usize),

    /// Forgets credentials, listings and results.
    Logout,

    /// Wraps a response from the worker.
    WorkerResponse(WorkerResponse),
}

/// Posts `message` and counts it as pending.
fn post(state: &mut AppState, message: WorkerMessage) -> Action {
    state.pending += 1;
    Action::PostToWorker(message)
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// Returns an error if stored credentials cannot be read on `Start`.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => {
            state.credentials.load()?;
            if !state.credentials.is_complete() {
                tracing::debug!("stored credentials incomplete, waiting for submission");
                return Ok((true, vec![]));
            }
            let action = post(state, WorkerMessage::load_companies());
            Ok((true, vec![action]))
        }
        Event::SubmitCredentials(form) => {
            if !state.credentials.update(form) {
                tracing::debug!("credential submission incomplete");
                state.status = Some(StatusMessage::error(FILL_ALL_FIELDS));
                return Ok((true, vec![]));
            }
            state.status = Some(StatusMessage::success(SETTINGS_UPDATED));
            let fetch = post(state, WorkerMessage::load_companies());
            Ok((true, vec![Action::PersistCredentials, fetch]))
        }
        Event::SelectCompany(company_id) => {
            tracing::debug!(company_id = %company_id, "company selected");
            state.selected_company = Some(company_id.clone());
            let action = post(state, WorkerMessage::load_properties(company_id.clone()));
            Ok((true, vec![action]))
        }
        Event::SelectProperty(property_id) => {
            tracing::debug!(property_id = %property_id, "property selected");
            state.selected_property = Some(property_id.clone());
            Ok((true, vec![]))
        }
        Event::SetQuery(query) => {
            state.query.clone_from(query);
            Ok((false, vec![]))
        }
        Event::SetIncludeUnpublished(include) => {
            state.include_unpublished = *include;
            Ok((false, vec![]))
        }
        Event::SetShowAttributes(show) => {
            state.show_attributes = *show;
            Ok((false, vec![]))
        }
        Event::GetDetails => {
            let Some(property_id) = state.selected_property.clone() else {
                tracing::debug!("get details without a selected property");
                state.alert = Some(SELECT_PROPERTY.to_string());
                return Ok((true, vec![]));
            };
            state.alert = None;
            let message = WorkerMessage::fetch_details(
                property_id,
                state.query.clone(),
                state.include_unpublished,
            );
            let action = post(state, message);
            Ok((true, vec![action]))
        }
        Event::Search(query) => {
            let outcome = state.search.search(&mut state.results, query);
            state.last_search = (!outcome.query.is_empty()).then_some(outcome);
            Ok((true, vec![]))
        }
        Event::ToggleAll => {
            let label = state.results.toggle_all();
            tracing::debug!(label = label.label(), "toggle all");
            Ok((true, vec![]))
        }
        Event::ToggleItem(index) => Ok((state.results.toggle_item(*index), vec![])),
        Event::Logout => {
            tracing::debug!("logging out");
            state.reset_session();
            state.status = Some(StatusMessage::info(SESSION_CLEARED));
            Ok((true, vec![Action::ClearSession]))
        }
        Event::WorkerResponse(response) => {
            state.pending = state.pending.saturating_sub(1);
            handle_worker_response(state, response)
        }
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::CompaniesLoaded { companies } => {
            tracing::debug!(count = companies.len(), "companies replaced");
            state.companies.clone_from(companies);
            if state.selected_company().is_none() {
                state.selected_company = None;
            }
            Ok((true, vec![]))
        }
        WorkerResponse::PropertiesLoaded { company_id, properties } => {
            if state.selected_company.as_deref() != Some(company_id.as_str()) {
                tracing::debug!(company_id = %company_id, "ignoring properties of a deselected company");
                return Ok((false, vec![]));
            }
            tracing::debug!(count = properties.len(), "properties replaced");
            state.properties.clone_from(properties);
            if state.selected_property().is_none() {
                state.selected_property = None;
            }
            Ok((true, vec![]))
        }
        WorkerResponse::DetailsLoaded { details } => {
            let options = PresentationOptions {
                show_attributes: state.show_attributes,
            };
            let results = ResultsView::mount(build_sections(details, options), &state.query);
            tracing::debug!(items = results.item_count(), "details mounted");
            state.mount_results(results);
            Ok((true, vec![]))
        }
        WorkerResponse::Error { request, message } => {
            tracing::error!(request = ?request, error = %message, "worker request failed");
            match request {
                RequestKind::Companies => state.status = Some(StatusMessage::error(COMPANIES_FAILED)),
                RequestKind::Properties => state.status = Some(StatusMessage::error(PROPERTIES_FAILED)),
                RequestKind::Details => state.alert = Some(DETAILS_FAILED.to_string()),
            }
            Ok((true, vec![]))
        }
    }
}
