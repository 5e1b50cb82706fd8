use gpui::{App, Global};

use crate::theme::Theme;

/// Identifies which theme value is installed. Bumped by every
/// [`ThemeExt::set_theme`] call, so caches keyed on it never serve styles
/// derived from a replaced theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ThemeRevision(pub u64);

impl Global for ThemeRevision {}

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme. Falls back to
    /// [`Theme::bundled`] until a theme is installed.
    fn get_theme(&self) -> &Theme;

    /// Revision of the currently installed theme.
    fn theme_revision(&self) -> ThemeRevision;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        let theme = theme.as_ref().clone();
        let revision = ThemeRevision(self.theme_revision().0 + 1);

        tracing::info!(name = %theme.name, revision = revision.0, "setting theme");

        self.set_global::<Theme>(theme);
        self.set_global(revision);
    }

    fn get_theme(&self) -> &Theme {
        self.try_global::<Theme>()
            .unwrap_or_else(|| Theme::bundled())
    }

    fn theme_revision(&self) -> ThemeRevision {
        self.try_global::<ThemeRevision>()
            .copied()
            .unwrap_or_default()
    }
}
