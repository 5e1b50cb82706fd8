use gpui::{CursorStyle, px};

use super::units;
use crate::{
    styles::{StyleClass, StyleMap, StyleRule},
    theme::Theme,
};

/// Every class [`input_styles`] provides.
pub const INPUT_CLASSES: &[StyleClass] = &[
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
];

/// Styles shared by every form control.
pub fn input_styles(theme: &Theme) -> StyleMap {
    let unit = theme.unit;
    let text = &theme.layout.text;
    let core = &theme.color.core;
    let accent = &theme.color.accent;

    StyleMap::new()
        .rule(
            StyleClass::Input,
            StyleRule::new()
                .background(accent.bg)
                .border_width(theme.layout.border_width)
                .border_color(accent.border)
                .rounded(theme.layout.corner_radii.sm)
                .text_color(accent.text)
                .text_size(text.sizes.regular)
                .padding_x(units(unit, 1.5))
                .padding_y(unit)
                .cursor(CursorStyle::IBeam),
        )
        .rule(
            StyleClass::InputImportant,
            StyleRule::new().border_color(accent.border_active),
        )
        .rule(
            StyleClass::InputCompact,
            StyleRule::new()
                .padding_x(unit)
                .padding_y(units(unit, 0.5))
                .text_size(text.sizes.small),
        )
        .rule(
            StyleClass::InputInvalid,
            StyleRule::new()
                .background(core.danger[0])
                .border_color(core.danger[4]),
        )
        .rule(
            StyleClass::InputDisabled,
            StyleRule::new()
                .background(accent.disabled)
                .text_color(accent.text_disabled)
                .cursor(CursorStyle::OperationNotAllowed),
        )
        .rule(StyleClass::InputHidden, StyleRule::new().hidden(true))
        .rule(
            StyleClass::InputHasPrefix,
            StyleRule::new().corner_radius_left(px(0.)),
        )
        .rule(
            StyleClass::InputHasSuffix,
            StyleRule::new().corner_radius_right(px(0.)),
        )
        .rule(
            StyleClass::InputChecked,
            StyleRule::new()
                .background(core.primary[3])
                .border_color(core.primary[3])
                .text_color(theme.color.base),
        )
        .rule(
            StyleClass::InputIndeterminate,
            StyleRule::new()
                .background(core.neutral[1])
                .border_color(core.neutral[4])
                .text_color(core.neutral[4]),
        )
        .rule(
            StyleClass::Select,
            StyleRule::new()
                .padding_x(units(unit, 0.5))
                .padding_y(units(unit, 0.5))
                .cursor(CursorStyle::PointingHand),
        )
        .rule(
            StyleClass::SelectCompact,
            StyleRule::new()
                .padding_x(units(unit, 0.25))
                .padding_y(units(unit, 0.25)),
        )
        .rule(
            StyleClass::SelectOption,
            StyleRule::new()
                .padding_x(unit)
                .padding_y(units(unit, 0.5))
                .rounded(theme.layout.corner_radii.sm)
                .cursor(CursorStyle::PointingHand),
        )
        .rule(
            StyleClass::SelectOptionSelected,
            StyleRule::new()
                .background(core.primary[0])
                .text_color(core.primary[4])
                .font_weight(text.weights.bold()),
        )
        .rule(StyleClass::TextArea, StyleRule::new().padding_y(unit))
        .rule(
            StyleClass::Button,
            StyleRule::new()
                .background(accent.bg)
                .border_width(theme.layout.border_width)
                .border_color(accent.border)
                .rounded(theme.layout.corner_radii.md)
                .padding_x(units(unit, 2.))
                .padding_y(units(unit, 1.5))
                .cursor(CursorStyle::PointingHand),
        )
        .rule(
            StyleClass::ButtonChecked,
            StyleRule::new()
                .background(core.primary[0])
                .border_color(core.primary[3]),
        )
        .rule(
            StyleClass::ButtonInvalid,
            StyleRule::new()
                .background(core.danger[0])
                .border_color(core.danger[4]),
        )
        .rule(
            StyleClass::ButtonDisabled,
            StyleRule::new()
                .background(accent.disabled)
                .text_color(accent.text_disabled)
                .cursor(CursorStyle::OperationNotAllowed),
        )
}
