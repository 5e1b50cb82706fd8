use enum_assoc::Assoc;
use gpui::{
    Hsla, IntoElement, Length, RenderOnce, SharedString, Styled, prelude::FluentBuilder, svg,
};

use crate::theme::ThemeExt;

/// Icons bundled with the crate.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum IconKind {
    #[assoc(path = "icons/caret_up.svg".into())]
    CaretUp,
    #[assoc(path = "icons/caret_down.svg".into())]
    CaretDown,
    /// Filled circle, the checked radio bullet.
    #[assoc(path = "icons/record.svg".into())]
    Record,
    /// Horizontal dash, the indeterminate marker.
    #[assoc(path = "icons/remove.svg".into())]
    Remove,
}

impl IconKind {
    pub const ALL: [IconKind; 4] = [
        IconKind::CaretUp,
        IconKind::CaretDown,
        IconKind::Record,
        IconKind::Remove,
    ];
}

impl From<IconKind> for SharedString {
    fn from(icon: IconKind) -> Self {
        icon.path()
    }
}

/// An SVG icon. Decorative: it takes no focus and has no label.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Option<Length>,
    color: Option<Hsla>,
}

impl Icon {
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: None,
            color: None,
        }
    }

    /// Sets uniform width and height for the icon.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Overrides the theme's text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let text_color = cx.get_theme().color.accent.text;
        let size = self
            .size
            .unwrap_or_else(|| cx.get_theme().layout.text.base_size.into());

        svg()
            .path(self.path)
            .text_color(text_color)
            .w(size)
            .min_w(size)
            .h(size)
            .min_h(size)
            .flex_none()
            .when_some(self.color, |this, color| this.text_color(color))
    }
}
