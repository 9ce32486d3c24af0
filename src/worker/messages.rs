//! Worker message types.
//!
//! Requests carry the trace context of the span that issued them so the
//! worker's spans join the same trace even when handled on another task.

use crate::catalog::PropertyDetails;
use crate::domain::{Company, Property};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-task span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current span, `None` when the
    /// span is not backed by a valid OpenTelemetry context.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::trace!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            None
        }
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_companies(LoadCompanies {}),
    load_properties(LoadProperties { company_id: String }),
    fetch_details(FetchDetails { property_id: String, query: String, include_unpublished: bool }),
}

/// Requests handled by the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// List the companies the credentials can see.
    LoadCompanies {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// List the properties of one company.
    LoadProperties {
        company_id: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Fetch rules (filtered, with components), data elements and extensions.
    FetchDetails {
        property_id: String,
        query: String,
        include_unpublished: bool,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::LoadCompanies { .. } => RequestKind::Companies,
            Self::LoadProperties { .. } => RequestKind::Properties,
            Self::FetchDetails { .. } => RequestKind::Details,
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCompanies { trace_context }
            | Self::LoadProperties { trace_context, .. }
            | Self::FetchDetails { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Which request a response answers; errors are routed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    Companies,
    Properties,
    Details,
}

/// Responses sent back to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    CompaniesLoaded {
        companies: Vec<Company>,
    },

    PropertiesLoaded {
        company_id: String,
        properties: Vec<Property>,
    },

    DetailsLoaded {
        details: PropertyDetails,
    },

    /// The request failed; nothing partial is returned.
    Error {
        request: RequestKind,
        message: String,
    },
}
