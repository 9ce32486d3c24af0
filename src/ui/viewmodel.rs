//! View model types representing the screen chrome around the results.
//!
//! Computed by `AppState::compute_viewmodel()`; the results tree itself is
//! drawn straight from the mounted [`ResultsView`](crate::ui::view::ResultsView).

use crate::app::modes::StatusKind;

/// Everything the renderer draws around the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Inline status message (listing and credential feedback).
    pub status: Option<StatusLine>,

    /// Alert raised by a failed or rejected Get Details run.
    pub alert: Option<String>,

    /// Shown while a search is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Shown instead of results when nothing has been fetched.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Selected company and property, e.g. "Acme / Main Site".
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub matched: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Current expand/collapse-all label plus a visibility summary.
    pub hint: String,
}
