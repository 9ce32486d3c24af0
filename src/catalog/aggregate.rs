//! Multi-entity fetch for one property.
//!
//! Rules are fetched, filtered, and joined with their components one rule at a
//! time. Data elements and extensions follow, unfiltered: narrowing those two is
//! left to the search over the rendered results.

use crate::api::{ReactorApi, ResourceFetcher};
use crate::domain::error::Result;
use crate::domain::{DataElement, Extension, Resource, Rule};

/// Everything fetched for one Get Details run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDetails {
    pub rules: Vec<Rule>,
    pub data_elements: Vec<DataElement>,
    pub extensions: Vec<Extension>,
}

impl PropertyDetails {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.data_elements.is_empty() && self.extensions.is_empty()
    }
}

/// Keeps rules whose `published` attribute is exactly `true`, unless
/// unpublished rules were asked for.
#[must_use]
pub fn filter_by_publish_status(rules: Vec<Resource>, include_unpublished: bool) -> Vec<Resource> {
    if include_unpublished {
        return rules;
    }
    rules.into_iter().filter(Resource::is_published).collect()
}

/// Keeps rules whose name contains `query`, ignoring case. An empty query keeps
/// everything; a rule without a name never matches a non-empty query.
#[must_use]
pub fn filter_by_name(rules: Vec<Resource>, query: &str) -> Vec<Resource> {
    if query.is_empty() {
        return rules;
    }
    let needle = query.to_lowercase();
    rules
        .into_iter()
        .filter(|rule| rule.name().is_some_and(|name| name.to_lowercase().contains(&needle)))
        .collect()
}

/// Fetches rules (filtered, components joined), data elements and extensions.
///
/// Component fetches run sequentially in rule order, one request in flight at a
/// time.
///
/// # Errors
///
/// Any failing request aborts the run; nothing fetched so far is returned.
pub async fn fetch_details<F: ResourceFetcher>(
    api: &ReactorApi<F>,
    property_id: &str,
    query: &str,
    include_unpublished: bool,
) -> Result<PropertyDetails> {
    let fetched = api.rules(property_id).await?;
    let fetched_count = fetched.len();

    let rules = filter_by_name(filter_by_publish_status(fetched, include_unpublished), query);
    tracing::debug!(
        property_id = %property_id,
        fetched = fetched_count,
        kept = rules.len(),
        include_unpublished,
        query = %query,
        "rules filtered"
    );

    let mut joined = Vec::with_capacity(rules.len());
    for resource in rules {
        let mut rule = Rule::new(resource);
        rule.components = api.rule_components(rule.id()).await?;
        tracing::trace!(rule_id = %rule.id(), components = rule.components.len(), "components joined");
        joined.push(rule);
    }

    let data_elements = api.data_elements(property_id).await?;
    let extensions = api.extensions(property_id).await?;

    tracing::debug!(
        rules = joined.len(),
        data_elements = data_elements.len(),
        extensions = extensions.len(),
        "property details fetched"
    );

    Ok(PropertyDetails {
        rules: joined,
        data_elements,
        extensions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::page_path;
    use crate::api::testing::RecordingFetcher;
    use serde_json::{json, Value};

    fn rule(id: &str, name: Option<&str>, published: Value) -> Resource {
        let mut attributes = json!({"published": published});
        if let Some(name) = name {
            attributes["name"] = json!(name);
        }
        serde_json::from_value(json!({"id": id, "type": "rules", "attributes": attributes})).unwrap()
    }

    fn names(rules: &[Resource]) -> Vec<&str> {
        rules.iter().filter_map(Resource::name).collect()
    }

    #[test]
    fn unpublished_and_missing_flags_are_dropped() {
        let rules = vec![
            rule("1", Some("Page View"), json!(true)),
            rule("2", Some("Debug Rule"), json!(false)),
            rule("3", Some("Odd"), json!("true")),
            rule("4", Some("Missing"), Value::Null),
        ];

        let kept = filter_by_publish_status(rules.clone(), false);
        assert_eq!(names(&kept), vec!["Page View"]);

        let all = filter_by_publish_status(rules, true);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn name_filter_is_a_case_insensitive_substring() {
        let rules = vec![
            rule("1", Some("Page View"), json!(true)),
            rule("2", Some("PageViews"), json!(true)),
            rule("3", Some("Pageview123"), json!(true)),
            rule("4", Some("Click"), json!(true)),
            rule("5", None, json!(true)),
        ];

        let kept = filter_by_name(rules, "view");

        assert_eq!(names(&kept), vec!["Page View", "PageViews", "Pageview123"]);
    }

    #[test]
    fn filter_order_does_not_matter() {
        let rules = vec![
            rule("1", Some("Page View"), json!(true)),
            rule("2", Some("View Debug"), json!(false)),
            rule("3", Some("Click"), json!(true)),
            rule("4", None, json!(true)),
        ];

        let a = filter_by_name(filter_by_publish_status(rules.clone(), false), "view");
        let b = filter_by_publish_status(filter_by_name(rules, "view"), false);

        assert_eq!(a, b);
    }

    fn property_fetcher() -> RecordingFetcher {
        RecordingFetcher::new()
            .with(
                &page_path("/properties/PR1/rules", 1),
                json!({
                    "data": [
                        {"id": "RL1", "type": "rules", "attributes": {"name": "Page View", "published": true}},
                        {"id": "RL2", "type": "rules", "attributes": {"name": "Debug Rule", "published": false}},
                        {"id": "RL3", "type": "rules", "attributes": {"name": "Checkout", "published": true}}
                    ],
                    "meta": {"pagination": {"total_pages": 1}}
                }),
            )
            .with(
                "/rules/RL1/rule_components",
                json!({"data": [{"id": "RC1", "attributes": {"delegate_descriptor_id": "core::events::click"}}]}),
            )
            .with("/rules/RL3/rule_components", json!({"data": []}))
            .with(
                &page_path("/properties/PR1/data_elements", 1),
                json!({"data": [{"id": "DE1", "type": "data_elements", "attributes": {"name": "pageName"}}]}),
            )
            .with(
                "/properties/PR1/extensions",
                json!({"data": [{"id": "EX1", "attributes": {"display_name": "Core"}}]}),
            )
    }

    #[tokio::test]
    async fn scenario_published_only() {
        let api = ReactorApi::new(property_fetcher());

        let details = fetch_details(&api, "PR1", "", false).await.unwrap();

        let rule_names: Vec<_> = details.rules.iter().filter_map(|r| r.resource.name()).collect();
        assert_eq!(rule_names, vec!["Page View", "Checkout"]);
        assert_eq!(details.rules[0].components.len(), 1);
        assert_eq!(details.data_elements.len(), 1);
        assert_eq!(details.extensions.len(), 1);
    }

    #[tokio::test]
    async fn components_are_fetched_sequentially_in_rule_order() {
        let api = ReactorApi::new(property_fetcher());

        fetch_details(&api, "PR1", "", false).await.unwrap();

        assert_eq!(
            api.fetcher().calls(),
            vec![
                page_path("/properties/PR1/rules", 1),
                "/rules/RL1/rule_components".to_string(),
                "/rules/RL3/rule_components".to_string(),
                page_path("/properties/PR1/data_elements", 1),
                "/properties/PR1/extensions".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn query_narrows_rules_but_not_other_entities() {
        let api = ReactorApi::new(property_fetcher());

        let details = fetch_details(&api, "PR1", "CHECK", false).await.unwrap();

        assert_eq!(details.rules.len(), 1);
        assert_eq!(details.rules[0].id(), "RL3");
        assert_eq!(details.data_elements.len(), 1);
        assert_eq!(details.extensions.len(), 1);
    }

    #[tokio::test]
    async fn any_failure_aborts_the_run() {
        let api = ReactorApi::new(
            property_fetcher().with_status("/properties/PR1/extensions", 500),
        );

        assert!(fetch_details(&api, "PR1", "", false).await.is_err());
    }
}
