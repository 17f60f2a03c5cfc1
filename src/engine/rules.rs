//! The forward-chaining rule engine: boolean facts in, diet tags and tips out.

use crate::kb::FactRule;
use ahash::{AHashMap, AHashSet};

/// An insertion-ordered set of diet tags.
///
/// Duplicates collapse and membership checks are O(1), but iteration order is
/// the order tags were first inserted. Rule evaluation order is fixed, so the
/// output tag sequence is deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    order: Vec<String>,
    seen: AHashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag; returns `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if !self.seen.insert(tag.clone()) {
            return false;
        }
        self.order.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the set, yielding tags in first-insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// The outcome of the rule engine: accumulated diet tags plus advisory tips.
///
/// Tags are a deduplicated set; tips keep duplicates and their insertion
/// order (= rule evaluation order).
#[derive(Debug, Clone, Default)]
pub struct Inference {
    pub diet_tags: TagSet,
    pub tips: Vec<String>,
}

/// Runs both rule sets over their fact maps and unions the results.
///
/// Condition rules are matched against health facts first, then preference
/// rules against preference facts. Each pass is flat: a rule fires only when
/// its fact is present and equals `expected`, and no rule can trigger
/// another.
pub fn infer(
    health_facts: &AHashMap<String, bool>,
    preference_facts: &AHashMap<String, bool>,
    condition_rules: &[FactRule],
    preference_rules: &[FactRule],
) -> Inference {
    let mut inference = Inference::default();
    apply_rules(condition_rules, health_facts, &mut inference);
    apply_rules(preference_rules, preference_facts, &mut inference);
    inference
}

fn apply_rules(rules: &[FactRule], facts: &AHashMap<String, bool>, out: &mut Inference) {
    for rule in rules {
        if facts.get(&rule.fact) == Some(&rule.expected) {
            tracing::debug!(fact = %rule.fact, expected = rule.expected, "rule fired");
            for tag in &rule.diet_tags_add {
                out.diet_tags.insert(tag.clone());
            }
            out.tips.extend(rule.tips.iter().cloned());
        }
    }
}
