//! Text formatting for rendered resources: code cleaning, settings payloads,
//! status subtitles and attribute rows.

use crate::domain::resource::display_value;
use crate::domain::Resource;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// `\"` or `"\"`, both collapsed to a single quote in one pass.
static ESCAPED_QUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\\"|"\\""#).unwrap());

/// How a `settings` payload is turned into code block text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsStyle {
    /// Escaped source text, cleaned for display (rules, extensions, plain data elements).
    Code,
    /// JSON pretty-printed, then cleaned so embedded code reads naturally (rule components).
    ComponentJson,
    /// JSON pretty-printed as-is (XDM object data elements).
    XdmJson,
}

/// Unescapes an escaped code string for display.
///
/// Literal `\n` becomes a newline, `\t` four spaces and CRLF becomes LF. An
/// escaped quote `\"` or the sequence `"\"` becomes a plain quote; any other
/// backslash is kept. The unicode escapes for `&`, `<` and `>` are decoded.
/// Surrounding whitespace is trimmed.
#[must_use]
pub fn format_code(code: &str) -> String {
    let code = code
        .replace("\\n", "\n")
        .replace("\\t", "    ")
        .replace("\r\n", "\n");
    ESCAPED_QUOTE_REGEX
        .replace_all(&code, "\"")
        .replace("\\u0026", "&")
        .replace("\\u003c", "<")
        .replace("\\u003e", ">")
        .trim()
        .to_string()
}

/// Two-space pretty JSON, compact on the (unreachable) serializer error.
#[must_use]
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Code block text for a settings payload.
///
/// JSON styles parse string payloads first; a payload that is not valid JSON
/// silently degrades to the cleaned raw text. Non-string payloads are already
/// JSON and are pretty-printed directly.
#[must_use]
pub fn format_settings(settings: &Value, style: SettingsStyle) -> String {
    let Value::String(raw) = settings else {
        return pretty_json(settings);
    };

    match style {
        SettingsStyle::Code => format_code(raw),
        SettingsStyle::ComponentJson => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => format_code(&pretty_json(&parsed)),
            Err(e) => {
                tracing::debug!(error = %e, "component settings are not JSON, showing raw text");
                format_code(raw)
            }
        },
        SettingsStyle::XdmJson => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => pretty_json(&parsed),
            Err(e) => {
                tracing::debug!(error = %e, "XDM settings are not JSON, showing raw text");
                format_code(raw)
            }
        },
    }
}

/// `(Rev: <rev>, <Published|Not Published>, <Enabled|Not Enabled>)`.
#[must_use]
pub fn status_subtitle(resource: &Resource) -> String {
    let published = if resource.shows_published() { "Published" } else { "Not Published" };
    let enabled = if resource.shows_enabled() { "Enabled" } else { "Not Enabled" };
    format!("(Rev: {}, {published}, {enabled})", resource.revision_label())
}

/// One row per attribute, in attribute order. Objects and arrays are
/// pretty-printed, scalars stringified.
#[must_use]
pub fn attribute_rows(resource: &Resource) -> Vec<(String, String)> {
    resource
        .attributes
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::Object(_) | Value::Array(_) => pretty_json(value),
                other => display_value(other),
            };
            (key.clone(), text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(value: Value) -> Resource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn escaped_newlines_and_quotes_are_unescaped() {
        assert_eq!(format_code("{\\n\\\"a\\\":1}"), "{\n\"a\":1}");
    }

    #[test]
    fn backslashes_after_a_quote_are_kept() {
        let code = r#"var re = new RegExp("\\w+");"#;
        assert_eq!(format_code(code), code);
    }

    #[test]
    fn quote_backslash_quote_collapses_to_one_quote() {
        assert_eq!(format_code(r#"x = "\";"#), r#"x = ";"#);
    }

    #[test]
    fn tabs_crlf_and_unicode_escapes_are_normalized() {
        let cleaned = format_code("  if (a \\u003c b \\u0026\\u0026 c \\u003e d) {\r\n\\tgo();\r\n}  ");
        assert_eq!(cleaned, "if (a < b && c > d) {\n    go();\n}");
    }

    #[test]
    fn xdm_settings_are_pretty_printed() {
        let text = format_settings(&json!("{\"xdm\":{\"a\":1}}"), SettingsStyle::XdmJson);
        assert_eq!(text, "{\n  \"xdm\": {\n    \"a\": 1\n  }\n}");
    }

    #[test]
    fn unparseable_json_settings_fall_back_to_cleaned_text() {
        let text = format_settings(&json!("not json\\n"), SettingsStyle::XdmJson);
        assert_eq!(text, "not json");
        let text = format_settings(&json!("return 1;\\t"), SettingsStyle::ComponentJson);
        assert_eq!(text, "return 1;");
    }

    #[test]
    fn component_settings_show_embedded_code_on_separate_lines() {
        let raw = json!({"source": "a();\nb();"}).to_string();
        let text = format_settings(&Value::String(raw), SettingsStyle::ComponentJson);
        assert_eq!(text, "{\n  \"source\": \"a();\nb();\"\n}");
    }

    #[test]
    fn object_settings_are_pretty_printed_directly() {
        let text = format_settings(&json!({"k": "v"}), SettingsStyle::Code);
        assert_eq!(text, "{\n  \"k\": \"v\"\n}");
    }

    #[test]
    fn subtitle_uses_truthiness_and_revision_fallbacks() {
        let r = resource(json!({"id": "1", "attributes": {"published": 1, "enabled": false}}));
        assert_eq!(status_subtitle(&r), "(Rev: N/A, Published, Not Enabled)");

        let r = resource(json!({
            "id": "2",
            "attributes": {"enabled": true, "latest_revision": 3},
            "meta": {"latest_revision_number": 9}
        }));
        assert_eq!(status_subtitle(&r), "(Rev: 9, Not Published, Enabled)");
    }

    #[test]
    fn attribute_rows_keep_order_and_pretty_print_objects() {
        let r = resource(json!({
            "id": "1",
            "attributes": {"name": "Rule", "published": true, "tags": ["a"], "extra": {"x": 1}}
        }));

        let rows = attribute_rows(&r);

        assert_eq!(rows[0], ("name".into(), "Rule".into()));
        assert_eq!(rows[1], ("published".into(), "true".into()));
        assert_eq!(rows[2], ("tags".into(), "[\n  \"a\"\n]".into()));
        assert_eq!(rows[3], ("extra".into(), "{\n  \"x\": 1\n}".into()));
    }
}
