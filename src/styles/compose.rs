use gpui::SharedString;
use smallvec::SmallVec;

use super::{StyleClass, StyleMap, StyleRule};

/// Marker asking automatic page translators to leave the element's text alone.
pub const NO_TRANSLATE: &str = "notranslate";

/// Ordered set of active classes for one element.
///
/// Classes are resolved in order, so a class added later overrides any
/// property an earlier class also sets. A class keeps the position it was
/// first added at: adding it again does not move it, and so cannot make it
/// win over classes added in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassList {
    classes: SmallVec<[StyleClass; 8]>,
    markers: SmallVec<[&'static str; 1]>,
}

impl ClassList {
    pub fn new(base: StyleClass) -> Self {
        let mut classes = SmallVec::new();
        classes.push(base);

        Self {
            classes,
            markers: SmallVec::new(),
        }
    }

    /// Appends `class` unless the list already has it.
    pub fn with(mut self, class: StyleClass) -> Self {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn when(self, condition: bool, class: StyleClass) -> Self {
        if condition { self.with(class) } else { self }
    }

    /// Adds a class name that carries no style rule.
    pub fn marker(mut self, marker: &'static str) -> Self {
        if !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    pub fn when_marker(self, condition: bool, marker: &'static str) -> Self {
        if condition { self.marker(marker) } else { self }
    }

    pub fn classes(&self) -> &[StyleClass] {
        &self.classes
    }

    pub fn markers(&self) -> &[&'static str] {
        &self.markers
    }

    pub fn contains(&self, class: StyleClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|existing| *existing == marker)
    }

    /// Space separated class names, markers last.
    pub fn class_names(&self) -> SharedString {
        self.classes
            .iter()
            .map(StyleClass::name)
            .chain(self.markers.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
            .into()
    }

    /// Folds the rules of every class into one rule, later classes winning.
    pub fn resolve(&self, styles: &StyleMap) -> StyleRule {
        self.classes
            .iter()
            .fold(StyleRule::default(), |mut resolved, class| {
                match styles.get(*class) {
                    Some(rule) => resolved.refine(rule),
                    None => tracing::warn!(class = class.name(), "no style rule for class"),
                }
                resolved
            })
    }
}
