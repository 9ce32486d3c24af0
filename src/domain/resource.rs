//! JSON:API resource model.
//!
//! Every entity the explorer shows is a read-only projection of a remote resource
//! object: an `id`, a `type`, an open `attributes` map and an optional `meta`
//! object. Field access is best-effort; a missing or oddly typed attribute reads as
//! absent instead of failing the whole response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor of the data element type whose settings are an XDM object.
pub const XDM_OBJECT_DESCRIPTOR: &str = "adobe-alloy::dataElements::xdm-object";

/// One resource object as returned in a `data` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: String,

    /// JSON:API `type` member (`rules`, `data_elements`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub attributes: Map<String, Value>,

    #[serde(default)]
    pub meta: Option<Value>,
}

/// A rule component, joined onto its rule after fetch.
pub type RuleComponent = Resource;

/// A data element of a property.
pub type DataElement = Resource;

/// An extension installed on a property.
pub type Extension = Resource;

impl Resource {
    /// Returns an attribute only when it is present and truthy.
    fn truthy_attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| is_truthy(v))
    }

    fn text_attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// The `name` attribute, if it is a non-empty string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text_attribute("name")
    }

    /// The `display_name` attribute used by extensions.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.text_attribute("display_name")
    }

    /// `true` only when `published` is exactly the JSON boolean `true`.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.attributes.get("published") == Some(&Value::Bool(true))
    }

    /// Truthiness of `published`, used for the display subtitle.
    #[must_use]
    pub fn shows_published(&self) -> bool {
        self.truthy_attribute("published").is_some()
    }

    /// Truthiness of `enabled`.
    #[must_use]
    pub fn shows_enabled(&self) -> bool {
        self.truthy_attribute("enabled").is_some()
    }

    /// Revision label: `meta.latest_revision_number`, then
    /// `attributes.latest_revision`, then `"N/A"`.
    #[must_use]
    pub fn revision_label(&self) -> String {
        self.meta
            .as_ref()
            .and_then(|meta| meta.get("latest_revision_number"))
            .filter(|v| is_truthy(v))
            .or_else(|| self.truthy_attribute("latest_revision"))
            .map_or_else(|| "N/A".to_string(), display_value)
    }

    /// The `settings` attribute when present and truthy.
    #[must_use]
    pub fn settings(&self) -> Option<&Value> {
        self.truthy_attribute("settings")
    }

    #[must_use]
    pub fn delegate_descriptor_id(&self) -> Option<&str> {
        self.attributes
            .get("delegate_descriptor_id")
            .and_then(Value::as_str)
    }

    /// Whether this data element stores an XDM object in its settings.
    #[must_use]
    pub fn is_xdm_object(&self) -> bool {
        self.delegate_descriptor_id() == Some(XDM_OBJECT_DESCRIPTOR)
    }
}

/// A rule with its components attached.
///
/// `components` is not part of the remote resource; it stays empty until the
/// aggregator joins the rule's components onto it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
    pub resource: Resource,
    pub components: Vec<RuleComponent>,
}

impl Rule {
    #[must_use]
    pub const fn new(resource: Resource) -> Self {
        Self {
            resource,
            components: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.resource.id
    }
}

/// A selectable option (company or property): id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub name: String,
}

impl From<&Resource> for Choice {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id.clone(),
            name: resource.name().unwrap_or_default().to_string(),
        }
    }
}

/// A company the credentials can see.
pub type Company = Choice;

/// A property belonging to a company.
pub type Property = Choice;

/// JavaScript-style truthiness of a JSON value.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stringifies a scalar the way it reads on screen (strings without quotes).
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(value: Value) -> Resource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn revision_prefers_meta_then_attribute_then_na() {
        let from_meta = resource(json!({
            "id": "RL1",
            "attributes": {"latest_revision": 2},
            "meta": {"latest_revision_number": 7}
        }));
        assert_eq!(from_meta.revision_label(), "7");

        let from_attr = resource(json!({"id": "RL1", "attributes": {"latest_revision": 2}}));
        assert_eq!(from_attr.revision_label(), "2");

        let missing = resource(json!({"id": "RL1", "attributes": {}}));
        assert_eq!(missing.revision_label(), "N/A");
    }

    #[test]
    fn published_filter_is_strict_but_display_is_truthy() {
        let stringly = resource(json!({"id": "x", "attributes": {"published": "yes"}}));
        assert!(!stringly.is_published());
        assert!(stringly.shows_published());

        let missing = resource(json!({"id": "x"}));
        assert!(!missing.is_published());
        assert!(!missing.shows_published());
    }

    #[test]
    fn empty_name_reads_as_missing() {
        let r = resource(json!({"id": "x", "attributes": {"name": ""}}));
        assert_eq!(r.name(), None);
    }

    #[test]
    fn empty_settings_are_absent() {
        let r = resource(json!({"id": "x", "attributes": {"settings": ""}}));
        assert!(r.settings().is_none());
    }
}
