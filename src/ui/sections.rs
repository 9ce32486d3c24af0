//! Presentation builder: turns fetched property details into a tree of
//! renderable sections.
//!
//! The tree is plain data. Nothing here knows about terminals; a
//! [`Renderer`](crate::ui::renderer::Renderer) walks the mounted tree and draws it.
//!
//! ```text
//! Rules                       group (one per non-empty entity kind)
//! └── Page View (Rev: 3, ...) item, collapsed by default
//!     ├── attributes table    only with "show attributes"
//!     ├── Settings            code block
//!     └── Rule Components
//!         ├── [core] [events] [click]   tags from the bucket's first member
//!         └── card: table? + code?
//! ```

use crate::catalog::{bucket_tags, classify, PropertyDetails};
use crate::domain::{Resource, Rule};
use crate::ui::format::{attribute_rows, format_settings, status_subtitle, SettingsStyle};

pub const RULES_GROUP: &str = "Rules";
pub const DATA_ELEMENTS_GROUP: &str = "Data Elements";
pub const EXTENSIONS_GROUP: &str = "Extensions";
pub const SETTINGS_TITLE: &str = "Settings";
pub const RULE_COMPONENTS_TITLE: &str = "Rule Components";

pub const UNNAMED_RULE: &str = "Unnamed Rule";
pub const UNNAMED_DATA_ELEMENT: &str = "Unnamed Data Element";
pub const UNNAMED_EXTENSION: &str = "Unnamed Extension";

/// A titled node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSection {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Vec<SectionNode>,
    /// Collapsible items start collapsed; groups and subsections are always open.
    pub collapsed_by_default: bool,
}

impl RenderSection {
    fn heading(title: &str, body: Vec<SectionNode>) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            body,
            collapsed_by_default: false,
        }
    }

    /// Code blocks anywhere under this section, in depth-first order.
    #[must_use]
    pub fn code_blocks(&self) -> Vec<&CodeBlock> {
        let mut blocks = Vec::new();
        collect_code(&self.body, &mut blocks);
        blocks
    }
}

fn collect_code<'a>(nodes: &'a [SectionNode], blocks: &mut Vec<&'a CodeBlock>) {
    for node in nodes {
        match node {
            SectionNode::Section(section) => collect_code(&section.body, blocks),
            SectionNode::Card(children) => collect_code(children, blocks),
            SectionNode::Code(block) => blocks.push(block),
            SectionNode::Table(_) | SectionNode::Tags(_) => {}
        }
    }
}

/// Body content of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionNode {
    Section(RenderSection),
    Table(AttributeTable),
    Code(CodeBlock),
    /// Word tags heading a component bucket.
    Tags(Vec<String>),
    /// One rule component.
    Card(Vec<SectionNode>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTable {
    pub rows: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub text: String,
}

/// Options read at build time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationOptions {
    pub show_attributes: bool,
}

/// Builds one group per non-empty entity kind, in the order rules, data
/// elements, extensions.
#[must_use]
pub fn build_sections(details: &PropertyDetails, options: PresentationOptions) -> Vec<RenderSection> {
    let mut groups = Vec::with_capacity(3);

    if !details.rules.is_empty() {
        let items = details.rules.iter().map(|rule| rule_item(rule, options));
        groups.push(group(RULES_GROUP, items));
    }
    if !details.data_elements.is_empty() {
        let items = details.data_elements.iter().map(|de| data_element_item(de, options));
        groups.push(group(DATA_ELEMENTS_GROUP, items));
    }
    if !details.extensions.is_empty() {
        let items = details.extensions.iter().map(|ext| extension_item(ext, options));
        groups.push(group(EXTENSIONS_GROUP, items));
    }

    tracing::debug!(groups = groups.len(), "presentation tree built");
    groups
}

fn group(title: &str, items: impl Iterator<Item = RenderSection>) -> RenderSection {
    RenderSection::heading(title, items.map(SectionNode::Section).collect())
}

fn item(resource: &Resource, title: &str, body: Vec<SectionNode>) -> RenderSection {
    RenderSection {
        title: title.to_string(),
        subtitle: Some(status_subtitle(resource)),
        body,
        collapsed_by_default: true,
    }
}

fn attributes(resource: &Resource, options: PresentationOptions) -> Option<SectionNode> {
    options.show_attributes.then(|| {
        SectionNode::Table(AttributeTable {
            rows: attribute_rows(resource),
        })
    })
}

fn code(resource: &Resource, style: SettingsStyle) -> Option<SectionNode> {
    resource.settings().map(|settings| {
        SectionNode::Code(CodeBlock {
            text: format_settings(settings, style),
        })
    })
}

fn settings_section(resource: &Resource, style: SettingsStyle) -> Option<SectionNode> {
    code(resource, style)
        .map(|block| SectionNode::Section(RenderSection::heading(SETTINGS_TITLE, vec![block])))
}

fn rule_item(rule: &Rule, options: PresentationOptions) -> RenderSection {
    let resource = &rule.resource;
    let mut body: Vec<SectionNode> = attributes(resource, options).into_iter().collect();
    body.extend(settings_section(resource, SettingsStyle::Code));

    if !rule.components.is_empty() {
        let buckets = classify(&rule.components);
        let mut components = Vec::new();
        for (_, members) in buckets.non_empty() {
            components.push(SectionNode::Tags(bucket_tags(members)));
            for component in members {
                let card: Vec<SectionNode> = attributes(component, options)
                    .into_iter()
                    .chain(code(component, SettingsStyle::ComponentJson))
                    .collect();
                components.push(SectionNode::Card(card));
            }
        }
        body.push(SectionNode::Section(RenderSection::heading(
            RULE_COMPONENTS_TITLE,
            components,
        )));
    }

    item(resource, resource.name().unwrap_or(UNNAMED_RULE), body)
}

fn data_element_item(data_element: &Resource, options: PresentationOptions) -> RenderSection {
    let style = if data_element.is_xdm_object() {
        SettingsStyle::XdmJson
    } else {
        SettingsStyle::Code
    };
    let body = attributes(data_element, options)
        .into_iter()
        .chain(settings_section(data_element, style))
        .collect();
    item(data_element, data_element.name().unwrap_or(UNNAMED_DATA_ELEMENT), body)
}

fn extension_item(extension: &Resource, options: PresentationOptions) -> RenderSection {
    let body = attributes(extension, options)
        .into_iter()
        .chain(settings_section(extension, SettingsStyle::Code))
        .collect();
    item(extension, extension.display_name().unwrap_or(UNNAMED_EXTENSION), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn resource(value: Value) -> Resource {
        serde_json::from_value(value).unwrap()
    }

    fn items(group: &RenderSection) -> Vec<&RenderSection> {
        group
            .body
            .iter()
            .filter_map(|node| match node {
                SectionNode::Section(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    fn sample_details() -> PropertyDetails {
        let mut rule = Rule::new(resource(json!({
            "id": "RL1",
            "attributes": {"name": "Page View", "published": true, "enabled": true},
            "meta": {"latest_revision_number": 4}
        })));
        rule.components = vec![
            resource(json!({"id": "A", "attributes": {
                "delegate_descriptor_id": "core::actions::custom-code",
                "settings": "{\"source\":\"track();\"}"
            }})),
            resource(json!({"id": "E", "attributes": {
                "delegate_descriptor_id": "core::events::click"
            }})),
        ];

        PropertyDetails {
            rules: vec![rule, Rule::new(resource(json!({"id": "RL2", "attributes": {}})))],
            data_elements: vec![resource(json!({"id": "DE1", "type": "data_elements", "attributes": {
                "name": "xdmPayload",
                "delegate_descriptor_id": "adobe-alloy::dataElements::xdm-object",
                "settings": "{\"data\":{\"a\":1}}"
            }}))],
            extensions: vec![resource(json!({"id": "EX1", "attributes": {"settings": "x\\ny"}}))],
        }
    }

    #[test]
    fn groups_follow_fixed_order_and_skip_empties() {
        let mut details = sample_details();
        let titles: Vec<_> = build_sections(&details, PresentationOptions::default())
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, vec![RULES_GROUP, DATA_ELEMENTS_GROUP, EXTENSIONS_GROUP]);

        details.data_elements.clear();
        let titles: Vec<_> = build_sections(&details, PresentationOptions::default())
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, vec![RULES_GROUP, EXTENSIONS_GROUP]);

        assert!(build_sections(&PropertyDetails::default(), PresentationOptions::default()).is_empty());
    }

    #[test]
    fn items_start_collapsed_with_subtitle_and_fallback_names() {
        let groups = build_sections(&sample_details(), PresentationOptions::default());
        let rules = items(&groups[0]);

        assert!(rules.iter().all(|r| r.collapsed_by_default));
        assert_eq!(rules[0].title, "Page View");
        assert_eq!(rules[0].subtitle.as_deref(), Some("(Rev: 4, Published, Enabled)"));
        assert_eq!(rules[1].title, UNNAMED_RULE);
        assert_eq!(items(&groups[2])[0].title, UNNAMED_EXTENSION);
    }

    #[test]
    fn rule_components_are_bucketed_with_tag_headers() {
        let groups = build_sections(&sample_details(), PresentationOptions::default());
        let rule = items(&groups[0])[0];

        let SectionNode::Section(components) = rule.body.last().unwrap() else {
            panic!("expected rule components section");
        };
        assert_eq!(components.title, RULE_COMPONENTS_TITLE);

        let SectionNode::Tags(first) = &components.body[0] else {
            panic!("expected tags");
        };
        assert_eq!(first, &vec!["core", "events", "click"]);
        assert!(matches!(&components.body[1], SectionNode::Card(card) if card.is_empty()));
        assert!(matches!(&components.body[2], SectionNode::Tags(t) if t[1] == "actions"));
        assert_eq!(rule.code_blocks()[0].text, "{\n  \"source\": \"track();\"\n}");
    }

    #[test]
    fn xdm_settings_are_pretty_json_and_others_are_cleaned() {
        let groups = build_sections(&sample_details(), PresentationOptions::default());

        let de = items(&groups[1])[0];
        assert_eq!(de.code_blocks()[0].text, "{\n  \"data\": {\n    \"a\": 1\n  }\n}");

        let ext = items(&groups[2])[0];
        assert_eq!(ext.code_blocks()[0].text, "x\ny");
        assert!(matches!(&ext.body[0], SectionNode::Section(s) if s.title == SETTINGS_TITLE));
    }

    #[test]
    fn attribute_tables_follow_the_toggle() {
        let hidden = build_sections(&sample_details(), PresentationOptions { show_attributes: false });
        let shown = build_sections(&sample_details(), PresentationOptions { show_attributes: true });

        let first_node = |groups: &[RenderSection]| items(&groups[1])[0].body[0].clone();
        assert!(!matches!(first_node(&hidden[..]), SectionNode::Table(_)));
        let SectionNode::Table(table) = first_node(&shown[..]) else {
            panic!("expected attributes table");
        };
        assert_eq!(table.rows[0].0, "name");
    }
}
