use std::{collections::HashMap, sync::Arc};

use gpui::{App, Global};

use super::{StyleMap, StyleSheet};
use crate::theme::{Theme, ThemeExt, ThemeRevision};

/// Built style maps, keyed by sheet and tagged with the theme revision
/// they were built from.
#[derive(Default)]
pub struct StyleCache {
    sheets: HashMap<StyleSheet, (ThemeRevision, Arc<StyleMap>)>,
}

impl Global for StyleCache {}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached map for `sheet`, if it was built from `revision`.
    pub fn lookup(&self, sheet: StyleSheet, revision: ThemeRevision) -> Option<Arc<StyleMap>> {
        self.sheets
            .get(&sheet)
            .filter(|(built_from, _)| *built_from == revision)
            .map(|(_, styles)| styles.clone())
    }

    pub fn get_or_build(
        &mut self,
        sheet: StyleSheet,
        theme: &Theme,
        revision: ThemeRevision,
    ) -> Arc<StyleMap> {
        if let Some(styles) = self.lookup(sheet, revision) {
            return styles;
        }

        tracing::debug!(?sheet, revision = revision.0, "building style sheet");

        let styles = Arc::new(sheet.build(theme));
        self.sheets.insert(sheet, (revision, styles.clone()));
        styles
    }

    pub fn clear(&mut self) {
        self.sheets.clear();
    }
}

/// Access to cached style maps for the installed theme.
pub trait StyleSheetExt {
    fn style_sheet(&mut self, sheet: StyleSheet) -> Arc<StyleMap>;
}

impl StyleSheetExt for App {
    fn style_sheet(&mut self, sheet: StyleSheet) -> Arc<StyleMap> {
        let revision = self.theme_revision();

        if let Some(styles) = self
            .try_global::<StyleCache>()
            .and_then(|cache| cache.lookup(sheet, revision))
        {
            return styles;
        }

        let theme = self.get_theme().clone();
        self.default_global::<StyleCache>()
            .get_or_build(sheet, &theme, revision)
    }
}
