mod event;
pub use event::*;

mod kind;
pub use kind::*;

mod render;

use std::rc::Rc;

use gpui::{App, ElementId, Entity, FocusHandle, IntoElement, SharedString, Window};
use gpui_primitives::input::InputState;

use crate::styles::{ClassList, NO_TRANSLATE, StyleClass};

/// Library flags shared by every form control. All default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    /// Smaller text and padding.
    pub compact: bool,
    pub important: bool,
    pub invalid: bool,
    /// Not required. Fields are required unless marked optional.
    pub optional: bool,
    pub hidden: bool,
    pub disabled: bool,
    /// Keeps automatic page translators away from the value.
    pub no_translate: bool,
    /// Squares the leading edge so an addon can sit flush against it.
    pub has_prefix: bool,
    /// Squares the trailing edge so an addon can sit flush against it.
    pub has_suffix: bool,
}

/// Attributes passed through to the rendered element. Anything not listed
/// here has no representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputAttributes {
    pub name: Option<SharedString>,
    pub value: SharedString,
    pub placeholder: Option<SharedString>,
    pub title: Option<SharedString>,
    pub read_only: bool,
    pub auto_focus: bool,
    pub tab_index: Option<isize>,
}

/// The attribute set a [`FormInput`] renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAttributes {
    pub tag: &'static str,
    pub input_type: Option<InputType>,
    pub id: SharedString,
    pub name: Option<SharedString>,
    pub value: SharedString,
    pub placeholder: Option<SharedString>,
    pub title: Option<SharedString>,
    pub class_names: SharedString,
    pub checked: Option<bool>,
    pub required: bool,
    pub disabled: bool,
    pub hidden: bool,
    pub read_only: bool,
    pub tab_index: Option<isize>,
    /// Only set while invalid, never `Some(false)`.
    pub aria_invalid: Option<bool>,
    /// Points at the `<id>-error` element while invalid.
    pub aria_described_by: Option<SharedString>,
    pub data_gramm: bool,
    pub data_enable_grammarly: bool,
}

/// Renders an input, select or textarea element behind one set of props.
///
/// Toggle inputs and selects report changes through [`FormInput::on_change`].
/// Text kinds write into their [`InputState`], which the caller can read at
/// any time.
#[derive(IntoElement)]
pub struct FormInput {
    id: SharedString,
    kind: FormInputKind,
    flags: InputFlags,
    attributes: FormInputAttributes,
    on_change: Option<ChangeHandler>,
    propagate_ref: Option<PropagateRef>,
}

impl FormInput {
    pub fn new(id: impl Into<SharedString>, kind: impl Into<FormInputKind>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            flags: InputFlags::default(),
            attributes: FormInputAttributes::default(),
            on_change: None,
            propagate_ref: None,
        }
    }

    pub fn input(id: impl Into<SharedString>, input_type: InputType) -> Self {
        Self::new(id, input_type)
    }

    pub fn select(
        id: impl Into<SharedString>,
        options: impl IntoIterator<Item = impl Into<SelectOption>>,
    ) -> Self {
        Self::new(
            id,
            FormInputKind::Select(SelectElement {
                options: options.into_iter().map(Into::into).collect(),
            }),
        )
    }

    pub fn textarea(id: impl Into<SharedString>) -> Self {
        Self::new(id, FormInputKind::TextArea(TextAreaElement::default()))
    }

    /// Text storage for input and textarea kinds.
    pub fn state(mut self, state: Entity<InputState>) -> Self {
        match &mut self.kind {
            FormInputKind::Input(input) => input.state = Some(state),
            FormInputKind::TextArea(textarea) => textarea.state = Some(state),
            FormInputKind::Select(_) => {}
        }
        self
    }

    /// Checked state of a toggle input.
    pub fn checked(mut self, checked: bool) -> Self {
        if let FormInputKind::Input(input) = &mut self.kind {
            input.checked = checked;
        }
        self
    }

    /// Visible line count of a textarea.
    pub fn rows(mut self, rows: usize) -> Self {
        if let FormInputKind::TextArea(textarea) = &mut self.kind {
            textarea.rows = rows.max(1);
        }
        self
    }

    pub fn option(mut self, option: impl Into<SelectOption>) -> Self {
        if let FormInputKind::Select(select) = &mut self.kind {
            select.options.push(option.into());
        }
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.flags.compact = compact;
        self
    }

    pub fn important(mut self, important: bool) -> Self {
        self.flags.important = important;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.flags.invalid = invalid;
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.flags.optional = optional;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.flags.hidden = hidden;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.flags.disabled = disabled;
        self
    }

    pub fn no_translate(mut self, no_translate: bool) -> Self {
        self.flags.no_translate = no_translate;
        self
    }

    pub fn has_prefix(mut self, has_prefix: bool) -> Self {
        self.flags.has_prefix = has_prefix;
        self
    }

    pub fn has_suffix(mut self, has_suffix: bool) -> Self {
        self.flags.has_suffix = has_suffix;
        self
    }

    /// Replaces every flag at once.
    pub fn flags(mut self, flags: InputFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn name(mut self, name: impl Into<SharedString>) -> Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.attributes.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.attributes.placeholder = Some(placeholder.into());
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.attributes.title = Some(title.into());
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.attributes.read_only = read_only;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.attributes.auto_focus = auto_focus;
        self
    }

    pub fn tab_index(mut self, tab_index: isize) -> Self {
        self.attributes.tab_index = Some(tab_index);
        self
    }

    /// Replaces every pass-through attribute at once.
    pub fn attrs(mut self, attributes: FormInputAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn on_change(
        mut self,
        on_change: impl Fn(&ChangeEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    /// Hands the element's focus handle to the caller on every render.
    pub fn propagate_ref(
        mut self,
        propagate_ref: impl Fn(&FocusHandle, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.propagate_ref = Some(Rc::new(propagate_ref));
        self
    }

    pub fn kind(&self) -> &FormInputKind {
        &self.kind
    }

    pub fn input_flags(&self) -> InputFlags {
        self.flags
    }

    /// Id of the element describing this field's error.
    pub fn error_id(&self) -> SharedString {
        format!("{}-error", self.id).into()
    }

    pub(crate) fn element_id(&self) -> ElementId {
        ElementId::Name(self.id.clone())
    }

    /// Active classes, in the order they are resolved.
    pub fn classes(&self) -> ClassList {
        let flags = &self.flags;
        let is_select = self.kind.is_select();

        ClassList::new(StyleClass::Input)
            .when(flags.important, StyleClass::InputImportant)
            .when(flags.compact, StyleClass::InputCompact)
            .when(flags.invalid, StyleClass::InputInvalid)
            .when(flags.disabled, StyleClass::InputDisabled)
            .when(flags.hidden, StyleClass::InputHidden)
            .when(is_select, StyleClass::Select)
            .when(is_select && flags.compact, StyleClass::SelectCompact)
            .when(flags.has_prefix, StyleClass::InputHasPrefix)
            .when(flags.has_suffix, StyleClass::InputHasSuffix)
            .when_marker(flags.no_translate, NO_TRANSLATE)
    }

    pub fn attributes(&self) -> FieldAttributes {
        let invalid = self.flags.invalid;
        let checked = match &self.kind {
            FormInputKind::Input(input) if input.input_type.is_toggle() => Some(input.checked),
            _ => None,
        };

        FieldAttributes {
            tag: self.kind.tag(),
            input_type: self.kind.input_type(),
            id: self.id.clone(),
            name: self.attributes.name.clone(),
            value: self.attributes.value.clone(),
            placeholder: self.attributes.placeholder.clone(),
            title: self.attributes.title.clone(),
            class_names: self.classes().class_names(),
            checked,
            required: !self.flags.optional,
            disabled: self.flags.disabled,
            hidden: self.flags.hidden,
            read_only: self.attributes.read_only,
            tab_index: self.attributes.tab_index,
            aria_invalid: invalid.then_some(true),
            aria_described_by: invalid.then(|| self.error_id()),
            data_gramm: false,
            data_enable_grammarly: false,
        }
    }

    /// Child content. Only select elements have any.
    pub fn content(&self) -> Option<&[SelectOption]> {
        match &self.kind {
            FormInputKind::Select(select) => Some(&select.options),
            _ => None,
        }
    }

    fn accepts_changes(&self) -> bool {
        !self.flags.disabled && !self.attributes.read_only
    }

    /// The change a click or space press raises on a toggle input.
    ///
    /// Checkboxes flip. Radios only ever become checked, so a checked radio
    /// raises nothing.
    pub fn toggle_change(&self, trigger: ChangeTrigger) -> Option<ChangeEvent> {
        let FormInputKind::Input(input) = &self.kind else {
            return None;
        };
        if !self.accepts_changes() {
            return None;
        }

        let checked = match input.input_type {
            InputType::Checkbox => !input.checked,
            InputType::Radio if !input.checked => true,
            _ => return None,
        };

        Some(ChangeEvent {
            checked,
            value: self.attributes.value.clone(),
            trigger,
        })
    }

    /// The change raised by picking the option at `index` of a select.
    pub fn select_change(&self, index: usize, trigger: ChangeTrigger) -> Option<ChangeEvent> {
        let option = self.content()?.get(index)?;
        if !self.accepts_changes() || option.disabled || option.value == self.attributes.value {
            return None;
        }

        Some(ChangeEvent {
            checked: true,
            value: option.value.clone(),
            trigger,
        })
    }

    /// Index of the nearest enabled option `step` options away from the
    /// selected one. With nothing selected, stepping starts outside the list.
    /// A zero step never moves.
    pub fn adjacent_option(&self, step: isize) -> Option<usize> {
        if step == 0 {
            return None;
        }

        let options = self.content()?;
        let selected = options
            .iter()
            .position(|option| option.value == self.attributes.value);

        let mut index = match selected {
            Some(index) => index as isize,
            None if step > 0 => -1,
            None => options.len() as isize,
        };

        loop {
            index += step.signum();
            let option = options.get(usize::try_from(index).ok()?)?;
            if !option.disabled {
                return Some(index as usize);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(input: &FormInput) -> Vec<&'static str> {
        input.classes().classes().iter().map(StyleClass::name).collect()
    }

    #[test]
    fn test_invalid_sets_aria() {
        let attributes = FormInput::input("email", InputType::Email)
            .invalid(true)
            .attributes();

        assert_eq!(attributes.aria_invalid, Some(true));
        assert_eq!(
            attributes.aria_described_by,
            Some(SharedString::from("email-error"))
        );
    }

    #[test]
    fn test_valid_leaves_aria_unset() {
        let attributes = FormInput::input("email", InputType::Email).attributes();

        assert_eq!(attributes.aria_invalid, None);
        assert_eq!(attributes.aria_described_by, None);
    }

    #[test]
    fn test_required_unless_optional() {
        assert!(FormInput::input("a", InputType::Text).attributes().required);
        assert!(
            !FormInput::input("a", InputType::Text)
                .optional(true)
                .attributes()
                .required
        );
    }

    #[test]
    fn test_only_select_has_content() {
        let select = FormInput::select("color", ["red", "green"]);
        assert_eq!(select.content().map(<[_]>::len), Some(2));

        assert!(
            FormInput::input("a", InputType::Text)
                .option("ignored")
                .content()
                .is_none()
        );
        assert!(FormInput::textarea("notes").content().is_none());
    }

    #[test]
    fn test_no_translate_appends_marker() {
        let input = FormInput::input("a", InputType::Text)
            .invalid(true)
            .no_translate(true);

        assert_eq!(
            input.attributes().class_names,
            SharedString::from("input input_invalid notranslate")
        );
        assert_eq!(
            FormInput::input("a", InputType::Text).attributes().class_names,
            SharedString::from("input")
        );
    }

    #[test]
    fn test_grammar_checkers_always_disabled() {
        let attributes = FormInput::textarea("notes").attributes();

        assert!(!attributes.data_gramm);
        assert!(!attributes.data_enable_grammarly);
    }

    #[test]
    fn test_every_flag_combination_keeps_base_and_invalid_state() {
        for bits in 0u16..(1 << 9) {
            let bit = |n: u16| bits & (1 << n) != 0;
            let flags = InputFlags {
                compact: bit(0),
                important: bit(1),
                invalid: bit(2),
                optional: bit(3),
                hidden: bit(4),
                disabled: bit(5),
                no_translate: bit(6),
                has_prefix: bit(7),
                has_suffix: bit(8),
            };

            for input in [
                FormInput::input("a", InputType::Text).flags(flags),
                FormInput::select("b", ["x"]).flags(flags),
            ] {
                let classes = input.classes();

                assert_eq!(classes.classes().first(), Some(&StyleClass::Input));
                assert_eq!(classes.contains(StyleClass::InputInvalid), flags.invalid);
                assert_eq!(classes, input.classes());
            }
        }
    }

    #[test]
    fn test_class_order() {
        let select = FormInput::select("s", ["a"])
            .has_suffix(true)
            .has_prefix(true)
            .hidden(true)
            .disabled(true)
            .invalid(true)
            .compact(true)
            .important(true);

        assert_eq!(
            names(&select),
            [
                "input",
                "input_important",
                "input_compact",
                "input_invalid",
                "input_disabled",
                "input_hidden",
                "select",
                "select_compact",
                "input_hasPrefix",
                "input_hasSuffix",
            ]
        );
    }

    #[test]
    fn test_select_classes_only_on_select() {
        let input = FormInput::input("a", InputType::Text).compact(true);

        assert_eq!(names(&input), ["input", "input_compact"]);
    }

    #[test]
    fn test_attributes_are_idempotent() {
        let input = FormInput::input("a", InputType::Checkbox)
            .checked(true)
            .invalid(true)
            .name("terms");

        assert_eq!(input.attributes(), input.attributes());
        assert_eq!(input.attributes().checked, Some(true));
        assert_eq!(input.attributes().input_type, Some(InputType::Checkbox));
    }

    #[test]
    fn test_checkbox_change_flips() {
        let unchecked = FormInput::input("a", InputType::Checkbox).value("yes");
        let event = unchecked.toggle_change(ChangeTrigger::Pointer).unwrap();
        assert!(event.checked);
        assert_eq!(event.value, SharedString::from("yes"));

        let checked = FormInput::input("a", InputType::Checkbox).checked(true);
        assert!(!checked.toggle_change(ChangeTrigger::Keyboard).unwrap().checked);
    }

    #[test]
    fn test_radio_change_only_checks() {
        let unchecked = FormInput::input("a", InputType::Radio).value("left");
        assert_eq!(
            unchecked.toggle_change(ChangeTrigger::Pointer),
            Some(ChangeEvent {
                checked: true,
                value: "left".into(),
                trigger: ChangeTrigger::Pointer,
            })
        );

        let checked = FormInput::input("a", InputType::Radio).checked(true);
        assert_eq!(checked.toggle_change(ChangeTrigger::Pointer), None);
    }

    #[test]
    fn test_disabled_and_read_only_raise_nothing() {
        let disabled = FormInput::input("a", InputType::Checkbox).disabled(true);
        assert_eq!(disabled.toggle_change(ChangeTrigger::Pointer), None);

        let read_only = FormInput::select("s", ["a", "b"]).read_only(true);
        assert_eq!(read_only.select_change(1, ChangeTrigger::Pointer), None);

        let text = FormInput::input("a", InputType::Text);
        assert_eq!(text.toggle_change(ChangeTrigger::Pointer), None);
    }

    #[test]
    fn test_select_change() {
        let select = FormInput::select(
            "s",
            [
                SelectOption::new("a", "A"),
                SelectOption::new("b", "B").disabled(true),
                SelectOption::new("c", "C"),
            ],
        )
        .value("a");

        assert_eq!(select.select_change(0, ChangeTrigger::Pointer), None);
        assert_eq!(select.select_change(1, ChangeTrigger::Pointer), None);
        assert_eq!(
            select
                .select_change(2, ChangeTrigger::Keyboard)
                .map(|event| event.value),
            Some("c".into())
        );
        assert_eq!(select.select_change(9, ChangeTrigger::Pointer), None);
    }

    #[test]
    fn test_adjacent_option_skips_disabled() {
        let select = FormInput::select(
            "s",
            [
                SelectOption::new("a", "A"),
                SelectOption::new("b", "B").disabled(true),
                SelectOption::new("c", "C"),
            ],
        );

        assert_eq!(select.adjacent_option(1), Some(0));
        assert_eq!(select.adjacent_option(-1), Some(2));

        let select = select.value("a");
        assert_eq!(select.adjacent_option(1), Some(2));
        assert_eq!(select.adjacent_option(-1), None);
    }

    #[test]
    fn test_zero_step_stays_put_on_disabled_option() {
        let select = FormInput::select(
            "s",
            [SelectOption::new("a", "A").disabled(true), SelectOption::new("b", "B")],
        )
        .value("a");

        assert_eq!(select.adjacent_option(0), None);
        assert_eq!(select.adjacent_option(1), Some(1));
    }
}
