use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::FluentBuilder,
};

use crate::{
    components::{Icon, IconKind},
    styles::{ClassList, StyleClass, StyleSheet, StyleSheetExt},
    theme::ThemeExt,
};

/// Up and down carets indicating the sort direction of a table column.
#[derive(IntoElement, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCarets {
    up: bool,
    down: bool,
    enable_up: bool,
    enable_down: bool,
}

impl Default for SortCarets {
    fn default() -> Self {
        Self {
            up: true,
            down: true,
            enable_up: false,
            enable_down: false,
        }
    }
}

impl SortCarets {
    /// Both carets shown, neither emphasized.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to show the up caret.
    pub fn up(mut self, up: bool) -> Self {
        self.up = up;
        self
    }

    /// Whether to show the down caret.
    pub fn down(mut self, down: bool) -> Self {
        self.down = down;
        self
    }

    /// Emphasizes the up caret.
    pub fn enable_up(mut self, enable_up: bool) -> Self {
        self.enable_up = enable_up;
        self
    }

    /// Emphasizes the down caret.
    pub fn enable_down(mut self, enable_down: bool) -> Self {
        self.enable_down = enable_down;
        self
    }

    /// Classes of the up caret, `None` while it is hidden.
    pub fn caret_up_classes(&self) -> Option<ClassList> {
        self.up.then(|| caret_classes(self.down, StyleClass::CaretUp, self.enable_up))
    }

    /// Classes of the down caret, `None` while it is hidden.
    pub fn caret_down_classes(&self) -> Option<ClassList> {
        self.down.then(|| caret_classes(self.up, StyleClass::CaretDown, self.enable_down))
    }
}

/// `pair_class` leads the list only while the other caret is visible too.
fn caret_classes(paired: bool, pair_class: StyleClass, active: bool) -> ClassList {
    let emphasis = if active {
        StyleClass::CaretActive
    } else {
        StyleClass::CaretInactive
    };

    let classes = if paired {
        ClassList::new(pair_class).with(StyleClass::Caret)
    } else {
        ClassList::new(StyleClass::Caret)
    };
    classes.with(emphasis)
}

impl RenderOnce for SortCarets {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let styles = cx.style_sheet(StyleSheet::SortCarets);
        let size = cx.get_theme().layout.text.base_size * 2.;

        let caret = |classes: ClassList, icon: IconKind| {
            let rule = classes.resolve(&styles);

            rule.apply(div().flex_none()).child(
                Icon::new(icon)
                    .size(size)
                    .when_some(rule.text_color, |icon, color| icon.color(color)),
            )
        };

        let up = self
            .caret_up_classes()
            .map(|classes| caret(classes, IconKind::CaretUp));
        let down = self
            .caret_down_classes()
            .map(|classes| caret(classes, IconKind::CaretDown));

        ClassList::new(StyleClass::CaretContainer)
            .resolve(&styles)
            .apply(div().flex().flex_col().items_center())
            .children(up)
            .children(down)
    }
}

#[cfg(test)]
mod tests {
    use gpui::px;

    use super::*;
    use crate::{
        styles::{RulePosition, sort_caret_styles},
        theme::Theme,
    };

    fn names(classes: Option<ClassList>) -> Option<Vec<&'static str>> {
        classes.map(|classes| classes.classes().iter().map(StyleClass::name).collect())
    }

    #[test]
    fn test_defaults_show_both_inactive() {
        let carets = SortCarets::new();

        assert_eq!(
            names(carets.caret_up_classes()),
            Some(vec!["caret_up", "caret", "caret_inactive"])
        );
        assert_eq!(
            names(carets.caret_down_classes()),
            Some(vec!["caret_down", "caret", "caret_inactive"])
        );
    }

    #[test]
    fn test_enabled_caret_is_active() {
        let carets = SortCarets::new().enable_up(true);

        assert_eq!(
            names(carets.caret_up_classes()),
            Some(vec!["caret_up", "caret", "caret_active"])
        );
        assert_eq!(
            names(carets.caret_down_classes()),
            Some(vec!["caret_down", "caret", "caret_inactive"])
        );
    }

    #[test]
    fn test_hidden_caret_renders_nothing() {
        let carets = SortCarets::new().down(false).enable_up(true);

        assert_eq!(names(carets.caret_down_classes()), None);
        assert_eq!(
            names(carets.caret_up_classes()),
            Some(vec!["caret", "caret_active"])
        );
    }

    #[test]
    fn test_both_hidden() {
        let carets = SortCarets::new().up(false).down(false);

        assert!(carets.caret_up_classes().is_none());
        assert!(carets.caret_down_classes().is_none());
    }

    #[test]
    fn test_stacked_carets_shift_toward_center() {
        let styles = sort_caret_styles(Theme::bundled());
        let carets = SortCarets::new();

        let up = carets.caret_up_classes().map(|classes| classes.resolve(&styles));
        let down = carets.caret_down_classes().map(|classes| classes.resolve(&styles));

        assert_eq!(up.and_then(|rule| rule.bottom), Some(px(-11.)));
        assert_eq!(down.and_then(|rule| rule.bottom), Some(px(11.)));
    }

    #[test]
    fn test_lone_caret_keeps_its_position() {
        let styles = sort_caret_styles(Theme::bundled());

        let up = SortCarets::new().down(false).caret_up_classes().unwrap();
        let down = SortCarets::new().up(false).caret_down_classes().unwrap();

        let up = up.resolve(&styles);
        let down = down.resolve(&styles);
        assert_eq!(up.bottom, None);
        assert_eq!(down.bottom, None);
        assert_eq!(up.position, Some(RulePosition::Relative));
    }

    #[test]
    fn test_classes_are_pure() {
        let carets = SortCarets::new().enable_down(true);

        assert_eq!(carets.caret_down_classes(), carets.caret_down_classes());
    }
}
