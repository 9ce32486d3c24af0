//! Renderer capability and the walk over mounted results.
//!
//! A [`Renderer`] knows how to draw one section heading, one attribute table and
//! one code block. [`render_results`] walks the mounted view and calls into it,
//! skipping hidden items and the bodies of collapsed ones. [`render`] draws the
//! whole screen with the ANSI components.

use crate::app::AppState;
use crate::domain::error::Result;
use crate::ui::components::{self, AnsiRenderer};
use crate::ui::helpers::Highlighted;
use crate::ui::sections::{AttributeTable, SectionNode};
use crate::ui::view::{MountedItem, ResultsView};
use std::io::Write;

/// A heading in the results tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading<'a> {
    /// Entity group ("Rules", "Data Elements", "Extensions").
    Group { title: &'a str },
    /// Collapsible item; `header` holds the title followed by the subtitle.
    Item {
        header: &'a Highlighted,
        title_len: usize,
        expanded: bool,
    },
    /// Fixed subsection inside an item ("Settings", "Rule Components").
    Subsection { title: &'a str },
    /// One rule component card.
    Card,
}

/// Drawing capability the results walk calls into.
pub trait Renderer {
    /// # Errors
    ///
    /// Propagates output errors.
    fn render_section(&mut self, heading: Heading<'_>, depth: usize) -> Result<()>;

    /// # Errors
    ///
    /// Propagates output errors.
    fn render_table(&mut self, table: &AttributeTable, depth: usize) -> Result<()>;

    /// # Errors
    ///
    /// Propagates output errors.
    fn render_code_block(&mut self, code: &Highlighted, depth: usize) -> Result<()>;

    /// Descriptor words heading a component bucket.
    ///
    /// # Errors
    ///
    /// Propagates output errors.
    fn render_tags(&mut self, tags: &[String], depth: usize) -> Result<()>;
}

/// Walks the mounted results into `renderer`.
///
/// # Errors
///
/// Propagates the first renderer error.
pub fn render_results<R: Renderer + ?Sized>(view: &ResultsView, renderer: &mut R) -> Result<()> {
    for group in &view.groups {
        renderer.render_section(Heading::Group { title: &group.title }, 0)?;
        for item in group.items.iter().filter(|item| !item.hidden) {
            renderer.render_section(
                Heading::Item {
                    header: &item.header,
                    title_len: item.title_len(),
                    expanded: item.expanded,
                },
                1,
            )?;
            if item.expanded {
                let mut code_index = 0;
                walk(&item.section.body, item, &mut code_index, 2, renderer)?;
            }
        }
    }
    Ok(())
}

fn walk<R: Renderer + ?Sized>(
    nodes: &[SectionNode],
    item: &MountedItem,
    code_index: &mut usize,
    depth: usize,
    renderer: &mut R,
) -> Result<()> {
    for node in nodes {
        match node {
            SectionNode::Section(section) => {
                renderer.render_section(Heading::Subsection { title: &section.title }, depth)?;
                walk(&section.body, item, code_index, depth + 1, renderer)?;
            }
            SectionNode::Card(children) => {
                renderer.render_section(Heading::Card, depth)?;
                walk(children, item, code_index, depth + 1, renderer)?;
            }
            SectionNode::Table(table) => renderer.render_table(table, depth)?,
            SectionNode::Tags(tags) => renderer.render_tags(tags, depth)?,
            SectionNode::Code(block) => {
                let fallback;
                let shown = match item.code.get(*code_index) {
                    Some(shown) => shown,
                    None => {
                        fallback = Highlighted::plain(block.text.clone());
                        &fallback
                    }
                };
                renderer.render_code_block(shown, depth)?;
                *code_index += 1;
            }
        }
    }
    Ok(())
}

/// Draws the full screen for `state` into `out`.
///
/// # Errors
///
/// Propagates output errors.
pub fn render<W: Write>(state: &AppState, out: &mut W, cols: usize) -> Result<()> {
    let viewmodel = state.compute_viewmodel();
    let theme = &state.theme;

    components::render_chrome_top(out, &viewmodel, theme, cols)?;
    if let Some(empty) = &viewmodel.empty_state {
        components::render_empty_state(out, empty, theme, cols)?;
    } else {
        let mut renderer = AnsiRenderer::new(out, theme, cols);
        render_results(&state.results, &mut renderer)?;
    }
    components::render_chrome_bottom(out, &viewmodel, theme, cols)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PropertyDetails;
    use crate::domain::{Resource, Rule};
    use crate::ui::sections::{build_sections, PresentationOptions};
    use crate::ui::SearchEngine;
    use serde_json::json;

    /// Records calls as indented text lines.
    #[derive(Default)]
    struct Outline(Vec<String>);

    impl Renderer for Outline {
        fn render_section(&mut self, heading: Heading<'_>, depth: usize) -> Result<()> {
            let text = match heading {
                Heading::Group { title } | Heading::Subsection { title } => title.to_string(),
                Heading::Item { header, title_len, expanded } => {
                    let title: String = header.text.chars().take(title_len).collect();
                    format!("{} {title}", if expanded { "-" } else { "+" })
                }
                Heading::Card => "card".to_string(),
            };
            self.0.push(format!("{}{text}", "  ".repeat(depth)));
            Ok(())
        }

        fn render_table(&mut self, table: &AttributeTable, depth: usize) -> Result<()> {
            self.0.push(format!("{}table({})", "  ".repeat(depth), table.rows.len()));
            Ok(())
        }

        fn render_code_block(&mut self, code: &Highlighted, depth: usize) -> Result<()> {
            let marks = code.highlighted_parts().len();
            self.0.push(format!("{}code:{}:{marks}", "  ".repeat(depth), code.text));
            Ok(())
        }

        fn render_tags(&mut self, tags: &[String], depth: usize) -> Result<()> {
            self.0.push(format!("{}[{}]", "  ".repeat(depth), tags.join("][")));
            Ok(())
        }
    }

    fn view() -> ResultsView {
        let mut rule = Rule::new(
            serde_json::from_value::<Resource>(json!({"id": "RL1", "attributes": {
                "name": "Page View", "settings": "go()"
            }}))
            .unwrap(),
        );
        rule.components = vec![serde_json::from_value(json!({"id": "RC1", "attributes": {
            "delegate_descriptor_id": "core::events::click", "settings": "{\"a\":1}"
        }}))
        .unwrap()];
        let details = PropertyDetails {
            rules: vec![rule],
            extensions: vec![serde_json::from_value(json!({
                "id": "EX1", "attributes": {"display_name": "Core"}
            }))
            .unwrap()],
            ..PropertyDetails::default()
        };
        ResultsView::mount(build_sections(&details, PresentationOptions::default()), "")
    }

    #[test]
    fn collapsed_items_render_headers_only() {
        let mut outline = Outline::default();
        render_results(&view(), &mut outline).unwrap();

        assert_eq!(outline.0, vec!["Rules", "  + Page View", "Extensions", "  + Core"]);
    }

    #[test]
    fn expanded_items_render_their_body_in_order() {
        let mut view = view();
        view.toggle_all();
        let mut outline = Outline::default();

        render_results(&view, &mut outline).unwrap();

        assert_eq!(
            outline.0,
            vec![
                "Rules",
                "  - Page View",
                "    Settings",
                "      code:go():0",
                "    Rule Components",
                "      [core][events][click]",
                "      card",
                "        code:{\n  \"a\": 1\n}:0",
                "Extensions",
                "  - Core",
            ]
        );
    }

    #[test]
    fn hidden_items_are_skipped_and_highlights_reach_the_renderer() {
        let mut view = view();
        SearchEngine::new().search(&mut view, "\"a\"");
        let mut outline = Outline::default();

        render_results(&view, &mut outline).unwrap();

        assert!(outline.0.contains(&"        code:{\n  \"a\": 1\n}:1".to_string()));
        assert!(!outline.0.iter().any(|line| line.contains("Core")));
    }
}
