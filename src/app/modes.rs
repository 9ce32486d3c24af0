//! Status message types shown above the results.
//!
//! Listing and credential feedback is reported inline through a
//! [`StatusMessage`]; failures of a Get Details run are raised as an alert on
//! [`AppState`](crate::app::AppState) instead.

/// Severity of an inline status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral progress information.
    Info,

    /// A submission or request completed.
    Success,

    /// A request failed or input was rejected.
    Error,
}

/// Inline status message with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, StatusKind::Error)
    }
}
