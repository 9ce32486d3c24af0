//! Resolves operator-typed selectors against company and property options.

use crate::domain::Choice;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Finds the option `selector` refers to.
///
/// An exact id wins; otherwise the name with the best fuzzy score. Ties keep
/// the earlier option.
#[must_use]
pub fn resolve<'a>(choices: &'a [Choice], selector: &str) -> Option<&'a Choice> {
    let selector = selector.trim();
    if selector.is_empty() {
        return None;
    }
    if let Some(exact) = choices.iter().find(|choice| choice.id == selector) {
        return Some(exact);
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut best: Option<(i64, &Choice)> = None;
    for choice in choices {
        let Some(score) = matcher.fuzzy_match(&choice.name, selector) else {
            continue;
        };
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, choice));
        }
    }

    let resolved = best.map(|(_, choice)| choice);
    tracing::debug!(selector = %selector, resolved = ?resolved.map(|c| &c.id), "selector resolved");
    resolved
}
