//! Mounted results: the presentation tree plus its live display state.
//!
//! Building the tree is pure; mounting attaches what the user can change
//! afterwards: which items are expanded or hidden, and which text is
//! highlighted. Expand/collapse-all and the search engine operate here.

use crate::ui::helpers::Highlighted;
use crate::ui::sections::{RenderSection, SectionNode};

/// Label of the expand/collapse-all toggle, which doubles as its state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleLabel {
    /// Items are (presumed) collapsed; pressing expands everything.
    #[default]
    ExpandAll,
    /// Items are expanded; pressing collapses everything.
    CollapseAll,
}

impl ToggleLabel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExpandAll => "Expand All",
            Self::CollapseAll => "Collapse All",
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::ExpandAll => Self::CollapseAll,
            Self::CollapseAll => Self::ExpandAll,
        }
    }
}

/// One collapsible item and its display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedItem {
    pub section: RenderSection,
    pub expanded: bool,
    pub hidden: bool,
    /// Header as displayed: title, a space, then the subtitle.
    pub header: Highlighted,
    /// Code blocks as displayed, in depth-first order of the body.
    pub code: Vec<Highlighted>,
}

impl MountedItem {
    fn mount(section: RenderSection, query: &str) -> Self {
        let title = Highlighted::with_keyword(section.title.clone(), query);
        let header = match &section.subtitle {
            Some(subtitle) => Highlighted {
                text: format!("{} {subtitle}", section.title),
                ranges: title.ranges,
            },
            None => title,
        };
        let code = section
            .code_blocks()
            .into_iter()
            .map(|block| Highlighted::plain(block.text.clone()))
            .collect();
        Self {
            expanded: !section.collapsed_by_default,
            hidden: false,
            header,
            code,
            section,
        }
    }

    /// Character length of the title part of [`Self::header`].
    #[must_use]
    pub fn title_len(&self) -> usize {
        self.section.title.chars().count()
    }
}

/// A top-level group heading and its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedGroup {
    pub title: String,
    pub items: Vec<MountedItem>,
}

/// The currently rendered results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsView {
    pub groups: Vec<MountedGroup>,
    pub toggle: ToggleLabel,
}

impl ResultsView {
    /// Mounts freshly built groups; item titles highlight `query`.
    #[must_use]
    pub fn mount(groups: Vec<RenderSection>, query: &str) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| MountedGroup {
                title: group.title,
                items: group
                    .body
                    .into_iter()
                    .filter_map(|node| match node {
                        SectionNode::Section(section) => Some(MountedItem::mount(section, query)),
                        _ => None,
                    })
                    .collect(),
            })
            .collect();
        Self {
            groups,
            toggle: ToggleLabel::default(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.items.is_empty())
    }

    /// Items across all groups, in display order.
    pub fn items(&self) -> impl Iterator<Item = &MountedItem> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut MountedItem> {
        self.groups.iter_mut().flat_map(|group| group.items.iter_mut())
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items().filter(|item| !item.hidden).count()
    }

    /// Flips every item in lockstep, hidden ones included, and swaps the
    /// toggle label. Returns the new label.
    pub fn toggle_all(&mut self) -> ToggleLabel {
        let expand = self.toggle == ToggleLabel::ExpandAll;
        for item in self.items_mut() {
            item.expanded = expand;
        }
        self.toggle = self.toggle.flipped();
        tracing::debug!(expanded = expand, items = self.item_count(), "toggled all items");
        self.toggle
    }

    /// Flips a single item by flat index; `false` if there is no such item.
    pub fn toggle_item(&mut self, index: usize) -> bool {
        self.items_mut().nth(index).is_some_and(|item| {
            item.expanded = !item.expanded;
            true
        })
    }
}
