//! OTLP/JSON encoding of finished spans.
//!
//! One exported batch becomes one JSON document with a single resource and a
//! single instrumentation scope, matching what OTLP file receivers expect.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Encodes `batch` as an OTLP `resourceSpans` document.
pub fn encode_batch(resource: &Resource, scope: &str, batch: &[SpanData]) -> JsonValue {
    let resource_attributes: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| attribute(key.as_str(), value))
        .collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": scope },
                "spans": batch.iter().map(encode_span).collect::<Vec<_>>(),
            }],
        }],
    })
}

fn encode_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(encode_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(encode_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn encode_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn encode_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

/// Nanoseconds since the epoch as a decimal string; pre-epoch times are zero.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default()
        .to_string()
}

/// OTLP `SpanKind` numbering (0 is unspecified).
const fn kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs
        .iter()
        .map(|pair| attribute(pair.key.as_str(), &pair.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": any_value(value) })
}

/// OTLP `AnyValue`; 64-bit integers travel as strings.
pub fn any_value(value: &Value) -> JsonValue {
    use opentelemetry::Array;

    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(array) => {
            let values: Vec<JsonValue> = match array {
                Array::Bool(items) => items.iter().map(|b| json!({ "boolValue": b })).collect(),
                Array::I64(items) => items.iter().map(|i| json!({ "intValue": i.to_string() })).collect(),
                Array::F64(items) => items.iter().map(|f| json!({ "doubleValue": f })).collect(),
                Array::String(items) => items.iter().map(|s| json!({ "stringValue": s.as_str() })).collect(),
            };
            json!({ "arrayValue": { "values": values } })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::{Array, StringValue};
    use std::time::Duration;

    #[test]
    fn scalars_use_otlp_any_value_keys() {
        assert_eq!(any_value(&Value::Bool(true)), json!({"boolValue": true}));
        assert_eq!(any_value(&Value::I64(42)), json!({"intValue": "42"}));
        assert_eq!(any_value(&Value::from("GET")), json!({"stringValue": "GET"}));
    }

    #[test]
    fn arrays_become_array_values() {
        let value = Value::Array(Array::String(vec![StringValue::from("a"), StringValue::from("b")]));
        assert_eq!(
            any_value(&value),
            json!({"arrayValue": {"values": [{"stringValue": "a"}, {"stringValue": "b"}]}})
        );
    }

    #[test]
    fn timestamps_are_decimal_nanoseconds() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_micros(1500)), "1500000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn empty_batches_still_name_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "reactor-explorer")]);

        let doc = encode_batch(&resource, "reactor-explorer", &[]);

        let scope_spans = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope_spans["scope"]["name"], "reactor-explorer");
        assert_eq!(scope_spans["spans"], json!([]));
        let attributes = doc["resourceSpans"][0]["resource"]["attributes"].as_array().unwrap();
        assert!(attributes.contains(&json!({
            "key": "service.name",
            "value": {"stringValue": "reactor-explorer"}
        })));
    }
}
