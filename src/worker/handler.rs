//! Worker executing fetch requests against the configuration API.

use crate::api::{ReactorApi, ResourceFetcher};
use crate::catalog::fetch_details;
use crate::domain::error::Result;
use crate::worker::messages::{RequestKind, TraceContext};
use crate::worker::{WorkerMessage, WorkerResponse};
use tracing::Instrument;

/// Executes [`WorkerMessage`]s with one API client.
#[derive(Debug)]
pub struct ExplorerWorker<F> {
    api: ReactorApi<F>,
}

impl<F: ResourceFetcher> ExplorerWorker<F> {
    pub const fn new(fetcher: F) -> Self {
        Self {
            api: ReactorApi::new(fetcher),
        }
    }

    pub const fn api(&self) -> &ReactorApi<F> {
        &self.api
    }

    /// Maps an operation result to a response with consistent logging.
    fn handle_result<T, C>(request: RequestKind, result: Result<T>, on_success: C) -> WorkerResponse
    where
        C: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(request = ?request, "worker request successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(request = ?request, error = %e, "worker request failed");
                WorkerResponse::Error {
                    request,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Links `span` to the trace the message was issued from.
    fn link_parent(span: &tracing::Span, trace_context: Option<&TraceContext>) {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let Some(trace_context) = trace_context else {
            return;
        };
        let (Ok(trace_id), Ok(span_id)) = (
            TraceId::from_hex(&trace_context.trace_id),
            SpanId::from_hex(&trace_context.parent_span_id),
        ) else {
            tracing::debug!("ignoring malformed trace context");
            return;
        };

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );
        span.set_parent(opentelemetry::Context::current().with_remote_span_context(span_context));
    }

    /// Processes one message and returns its response.
    pub async fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", request = ?message.kind());
        Self::link_parent(&span, message.trace_context());

        async move {
            match message {
                WorkerMessage::LoadCompanies { .. } => Self::handle_result(
                    RequestKind::Companies,
                    self.api.companies().await,
                    |companies| {
                        tracing::debug!(count = companies.len(), "companies loaded");
                        WorkerResponse::CompaniesLoaded { companies }
                    },
                ),

                WorkerMessage::LoadProperties { company_id, .. } => {
                    let result = self.api.properties(&company_id).await;
                    Self::handle_result(RequestKind::Properties, result, |properties| {
                        tracing::debug!(company_id = %company_id, count = properties.len(), "properties loaded");
                        WorkerResponse::PropertiesLoaded { company_id, properties }
                    })
                }

                WorkerMessage::FetchDetails {
                    property_id,
                    query,
                    include_unpublished,
                    ..
                } => Self::handle_result(
                    RequestKind::Details,
                    fetch_details(&self.api, &property_id, &query, include_unpublished).await,
                    |details| WorkerResponse::DetailsLoaded { details },
                ),
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::page_path;
    use crate::api::testing::RecordingFetcher;
    use crate::domain::Choice;
    use serde_json::json;

    #[tokio::test]
    async fn companies_request_answers_with_choices() {
        let worker = ExplorerWorker::new(RecordingFetcher::new().with(
            "/companies",
            json!({"data": [{"id": "CO1", "attributes": {"name": "Acme"}}]}),
        ));

        let response = worker.handle_message(WorkerMessage::load_companies()).await;

        assert_eq!(
            response,
            WorkerResponse::CompaniesLoaded {
                companies: vec![Choice { id: "CO1".into(), name: "Acme".into() }]
            }
        );
    }

    #[tokio::test]
    async fn failures_are_tagged_with_the_request() {
        let worker = ExplorerWorker::new(RecordingFetcher::new().with_status("/companies/CO1/properties", 403));

        let response = worker
            .handle_message(WorkerMessage::load_properties("CO1".into()))
            .await;

        let WorkerResponse::Error { request, message } = response else {
            panic!("expected an error, got {response:?}");
        };
        assert_eq!(request, RequestKind::Properties);
        assert!(message.starts_with("API error: 403"));
    }

    #[tokio::test]
    async fn details_request_runs_the_aggregator() {
        let fetcher = RecordingFetcher::new()
            .with(&page_path("/properties/PR1/rules", 1), json!({"data": []}))
            .with(&page_path("/properties/PR1/data_elements", 1), json!({"data": []}))
            .with("/properties/PR1/extensions", json!({"data": [{"id": "EX1", "attributes": {}}]}));
        let worker = ExplorerWorker::new(fetcher);

        let response = worker
            .handle_message(WorkerMessage::fetch_details("PR1".into(), String::new(), false))
            .await;

        let WorkerResponse::DetailsLoaded { details } = response else {
            panic!("expected details, got {response:?}");
        };
        assert_eq!(details.extensions.len(), 1);
        assert!(details.rules.is_empty());
    }

    #[test]
    fn messages_report_their_kind() {
        assert_eq!(WorkerMessage::load_companies().kind(), RequestKind::Companies);
        assert_eq!(
            WorkerMessage::fetch_details("P".into(), "q".into(), true).kind(),
            RequestKind::Details
        );
    }
}
