use indexmap::IndexMap;

use super::{StyleClass, StyleRule};

/// Style rules keyed by semantic class, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    rules: IndexMap<StyleClass, StyleRule>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `class`.
    pub fn rule(mut self, class: StyleClass, rule: StyleRule) -> Self {
        self.rules.insert(class, rule);
        self
    }

    /// Overlays `rule` onto the existing rule for `class`, inserting it when
    /// the class has no rule yet.
    pub fn extend_rule(mut self, class: StyleClass, rule: StyleRule) -> Self {
        self.rules
            .entry(class)
            .and_modify(|existing| existing.refine(&rule))
            .or_insert(rule);
        self
    }

    pub fn get(&self, class: StyleClass) -> Option<&StyleRule> {
        self.rules.get(&class)
    }

    pub fn contains(&self, class: StyleClass) -> bool {
        self.rules.contains_key(&class)
    }

    pub fn classes(&self) -> impl Iterator<Item = StyleClass> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
