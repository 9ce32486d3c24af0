//! Rule component classification into events, conditions and actions.
//!
//! The bucket is decided by a substring of the component's
//! `delegate_descriptor_id` (`"::events::"`, `"::conditions::"`,
//! `"::actions::"`), checked in that order. Anything else lands in conditions.

use crate::domain::RuleComponent;

/// The three component buckets in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Events,
    Conditions,
    Actions,
}

impl Bucket {
    /// Display order of the buckets.
    pub const ORDER: [Self; 3] = [Self::Events, Self::Conditions, Self::Actions];

    const fn pattern(self) -> &'static str {
        match self {
            Self::Events => "::events::",
            Self::Conditions => "::conditions::",
            Self::Actions => "::actions::",
        }
    }

    /// Bucket for a descriptor id; unrecognized ids fall back to conditions.
    #[must_use]
    pub fn of(descriptor_id: &str) -> Self {
        Self::ORDER
            .into_iter()
            .find(|bucket| descriptor_id.contains(bucket.pattern()))
            .unwrap_or(Self::Conditions)
    }
}

/// Components partitioned by bucket, each keeping input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentBuckets<'a> {
    pub events: Vec<&'a RuleComponent>,
    pub conditions: Vec<&'a RuleComponent>,
    pub actions: Vec<&'a RuleComponent>,
}

impl<'a> ComponentBuckets<'a> {
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> &[&'a RuleComponent] {
        match bucket {
            Bucket::Events => &self.events,
            Bucket::Conditions => &self.conditions,
            Bucket::Actions => &self.actions,
        }
    }

    /// Non-empty buckets in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Bucket, &[&'a RuleComponent])> + '_ {
        Bucket::ORDER
            .into_iter()
            .map(|bucket| (bucket, self.get(bucket)))
            .filter(|(_, members)| !members.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len() + self.conditions.len() + self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions components; a missing descriptor id classifies as conditions.
#[must_use]
pub fn classify(components: &[RuleComponent]) -> ComponentBuckets<'_> {
    let mut buckets = ComponentBuckets::default();
    for component in components {
        let bucket = Bucket::of(component.delegate_descriptor_id().unwrap_or_default());
        match bucket {
            Bucket::Events => buckets.events.push(component),
            Bucket::Conditions => buckets.conditions.push(component),
            Bucket::Actions => buckets.actions.push(component),
        }
    }
    buckets
}

/// Header words for a bucket, derived from its first member only.
///
/// `"core::events::click"` yields `["core", "events", "click"]`.
#[must_use]
pub fn bucket_tags(members: &[&RuleComponent]) -> Vec<String> {
    members
        .first()
        .and_then(|first| first.delegate_descriptor_id())
        .map(|id| {
            id.replace("::", " ")
                .split(' ')
                .filter(|word| !word.trim().is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resource;
    use serde_json::json;

    fn component(id: &str, descriptor: Option<&str>) -> RuleComponent {
        let mut attributes = json!({"name": id});
        if let Some(d) = descriptor {
            attributes["delegate_descriptor_id"] = json!(d);
        }
        serde_json::from_value::<Resource>(json!({"id": id, "attributes": attributes})).unwrap()
    }

    fn ids(members: &[&RuleComponent]) -> Vec<String> {
        members.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn descriptor_patterns_pick_the_bucket() {
        assert_eq!(Bucket::of("core::events::click"), Bucket::Events);
        assert_eq!(Bucket::of("core::conditions::path"), Bucket::Conditions);
        assert_eq!(Bucket::of("core::actions::custom-code"), Bucket::Actions);
        assert_eq!(Bucket::of("custom::unknown::x"), Bucket::Conditions);
        assert_eq!(Bucket::of(""), Bucket::Conditions);
    }

    #[test]
    fn first_matching_pattern_wins() {
        assert_eq!(Bucket::of("x::actions::y::events::z"), Bucket::Events);
    }

    #[test]
    fn classification_is_total_and_order_preserving() {
        let components = vec![
            component("a1", Some("core::actions::custom-code")),
            component("e1", Some("core::events::click")),
            component("c1", None),
            component("a2", Some("analytics::actions::send-beacon")),
            component("c2", Some("custom::unknown::x")),
            component("e2", Some("core::events::page-bottom")),
        ];

        let buckets = classify(&components);

        assert_eq!(buckets.len(), components.len());
        assert_eq!(ids(&buckets.events), vec!["e1", "e2"]);
        assert_eq!(ids(&buckets.conditions), vec!["c1", "c2"]);
        assert_eq!(ids(&buckets.actions), vec!["a1", "a2"]);
    }

    #[test]
    fn empty_buckets_are_skipped_in_display_order() {
        let components = vec![
            component("a1", Some("core::actions::custom-code")),
            component("e1", Some("core::events::click")),
        ];

        let buckets = classify(&components);
        let order: Vec<Bucket> = buckets.non_empty().map(|(b, _)| b).collect();

        assert_eq!(order, vec![Bucket::Events, Bucket::Actions]);
    }

    #[test]
    fn tags_come_from_the_first_member() {
        let components = vec![
            component("e1", Some("core::events::click")),
            component("e2", Some("other::events::load")),
        ];
        let buckets = classify(&components);

        assert_eq!(bucket_tags(&buckets.events), vec!["core", "events", "click"]);
        assert!(bucket_tags(&[]).is_empty());
    }
}
