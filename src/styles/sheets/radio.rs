use gpui::{CursorStyle, px};

use super::{INPUT_CLASSES, input_styles};
use crate::{
    styles::{StyleClass, StyleMap, StyleRule},
    theme::Theme,
};

/// Side length of the radio marker.
pub const RADIO_SIZE: f32 = 18.;

/// Every class [`radio_styles`] provides: the input classes plus the radio
/// specific ones.
pub const RADIO_CLASSES: &[StyleClass] = &[
    StyleClass::Input,
    StyleClass::InputImportant,
    StyleClass::InputCompact,
    StyleClass::InputInvalid,
    StyleClass::InputDisabled,
    StyleClass::InputHidden,
    StyleClass::InputHasPrefix,
    StyleClass::InputHasSuffix,
    StyleClass::InputChecked,
    StyleClass::InputIndeterminate,
    StyleClass::Select,
    StyleClass::SelectCompact,
    StyleClass::SelectOption,
    StyleClass::SelectOptionSelected,
    StyleClass::TextArea,
    StyleClass::Button,
    StyleClass::ButtonChecked,
    StyleClass::ButtonInvalid,
    StyleClass::ButtonDisabled,
    StyleClass::Radio,
    StyleClass::RadioHideLabel,
    StyleClass::Bullet,
    StyleClass::Indeterminate,
    StyleClass::Children,
];

/// The input styles, with `input` reshaped into a circular marker.
pub fn radio_styles(theme: &Theme) -> StyleMap {
    debug_assert!(INPUT_CLASSES.iter().all(|class| RADIO_CLASSES.contains(class)));

    let size = px(RADIO_SIZE);

    input_styles(theme)
        .rule(
            StyleClass::Radio,
            StyleRule::new()
                .relative()
                .margin_top(px(2.))
                .width(size)
                .height(size),
        )
        .rule(
            StyleClass::RadioHideLabel,
            StyleRule::new().margin_top(px(0.)),
        )
        .extend_rule(
            StyleClass::Input,
            StyleRule::new()
                .width(size)
                .height(size)
                .padding_x(px(0.))
                .padding_y(px(0.))
                .rounded(px(RADIO_SIZE / 2.))
                .text_size(px(8.))
                .cursor(CursorStyle::PointingHand),
        )
        .rule(
            StyleClass::Bullet,
            StyleRule::new().relative().top(px(3.)).left(px(3.)),
        )
        .rule(
            StyleClass::Indeterminate,
            StyleRule::new().relative().top(px(1.)).left(px(0.5)),
        )
        .rule(StyleClass::Children, StyleRule::new().margin_left(theme.unit))
}
