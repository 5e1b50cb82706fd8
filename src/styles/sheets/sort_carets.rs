use gpui::px;

use super::units;
use crate::{
    styles::{StyleClass, StyleMap, StyleRule},
    theme::Theme,
};

/// How far each caret moves toward the other when both are shown.
pub const CARET_CENTER_OFFSET: f32 = 11.;

pub const SORT_CARET_CLASSES: &[StyleClass] = &[
    StyleClass::CaretContainer,
    StyleClass::Caret,
    StyleClass::CaretInactive,
    StyleClass::CaretActive,
    StyleClass::CaretUp,
    StyleClass::CaretDown,
];

pub fn sort_caret_styles(theme: &Theme) -> StyleMap {
    let neutral = &theme.color.core.neutral;

    StyleMap::new()
        .rule(
            StyleClass::CaretContainer,
            StyleRule::new().margin_right(units(theme.unit, 0.5)),
        )
        .rule(
            StyleClass::Caret,
            StyleRule::new().relative().right(units(theme.unit, 0.5)),
        )
        .rule(
            StyleClass::CaretInactive,
            StyleRule::new().text_color(neutral[3]),
        )
        .rule(StyleClass::CaretActive, StyleRule::new().text_color(neutral[4]))
        .rule(
            StyleClass::CaretUp,
            StyleRule::new().bottom(px(-CARET_CENTER_OFFSET)),
        )
        .rule(
            StyleClass::CaretDown,
            StyleRule::new().bottom(px(CARET_CENTER_OFFSET)),
        )
}
