//! Live keyword search over mounted results.
//!
//! Each item matches when its header or any of its code blocks contains the
//! keyword, ignoring case. Matching items are shown, force-expanded and
//! highlighted; the rest are hidden. Every comparison runs against the text
//! the node had when the engine first saw it, so repeated searches never see a
//! previously highlighted version.

use crate::ui::helpers::{keyword_regex, ranges_for, Highlighted};
use crate::ui::view::ResultsView;
use std::collections::HashMap;

/// A searchable node: an item header or the nth code block of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NodeKey {
    Header(usize),
    Code(usize, usize),
}

/// What a search did to the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub matched: usize,
    pub hidden: usize,
}

/// Search state for one mounted view: the side-table of pristine texts.
#[derive(Debug, Default)]
pub struct SearchEngine {
    originals: HashMap<NodeKey, String>,
}

impl SearchEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets cached originals; called whenever a new view is mounted.
    pub fn reset(&mut self) {
        self.originals.clear();
    }

    fn original(&mut self, key: NodeKey, shown: &Highlighted) -> String {
        self.originals
            .entry(key)
            .or_insert_with(|| shown.text.clone())
            .clone()
    }

    /// Runs a search for `query` (trimmed, case-insensitive).
    ///
    /// An empty query restores every item's unhighlighted text and visibility
    /// and leaves expansion untouched.
    pub fn search(&mut self, view: &mut ResultsView, query: &str) -> SearchOutcome {
        let query = query.trim();
        let _span = tracing::debug_span!("search", query = %query).entered();

        let Some(regex) = keyword_regex(query) else {
            self.restore(view);
            return SearchOutcome {
                matched: view.item_count(),
                ..SearchOutcome::default()
            };
        };
        let needle = query.to_lowercase();
        let mut outcome = SearchOutcome {
            query: query.to_string(),
            ..SearchOutcome::default()
        };

        for (index, item) in view.items_mut().enumerate() {
            let mut found = false;

            let header = self.original(NodeKey::Header(index), &item.header);
            item.header = if header.to_lowercase().contains(&needle) {
                found = true;
                Highlighted {
                    ranges: ranges_for(&regex, &header),
                    text: header,
                }
            } else {
                Highlighted::plain(header)
            };

            for (block, shown) in item.code.iter_mut().enumerate() {
                let original = self.original(NodeKey::Code(index, block), shown);
                *shown = if original.to_lowercase().contains(&needle) {
                    found = true;
                    Highlighted {
                        ranges: ranges_for(&regex, &original),
                        text: original,
                    }
                } else {
                    Highlighted::plain(original)
                };
            }

            item.hidden = !found;
            if found {
                item.expanded = true;
                outcome.matched += 1;
            } else {
                outcome.hidden += 1;
            }
        }

        tracing::debug!(matched = outcome.matched, hidden = outcome.hidden, "search applied");
        outcome
    }

    fn restore(&mut self, view: &mut ResultsView) {
        for (index, item) in view.items_mut().enumerate() {
            item.header = Highlighted::plain(self.original(NodeKey::Header(index), &item.header));
            for (block, shown) in item.code.iter_mut().enumerate() {
                *shown = Highlighted::plain(self.original(NodeKey::Code(index, block), shown));
            }
            item.hidden = false;
        }
        tracing::debug!(items = view.item_count(), "search cleared");
    }
}
