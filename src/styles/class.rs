#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

/// Semantic class keys a style map can hold.
///
/// Names follow the class names widgets expose in their rendered class
/// string, so `input_hasPrefix` keeps its camel-cased suffix.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum StyleClass {
    #[assoc(name = "input")]
    Input,
    #[assoc(name = "input_important")]
    InputImportant,
    #[assoc(name = "input_compact")]
    InputCompact,
    #[assoc(name = "input_invalid")]
    InputInvalid,
    #[assoc(name = "input_disabled")]
    InputDisabled,
    #[assoc(name = "input_hidden")]
    InputHidden,
    #[assoc(name = "input_hasPrefix")]
    InputHasPrefix,
    #[assoc(name = "input_hasSuffix")]
    InputHasSuffix,
    #[assoc(name = "input_checked")]
    InputChecked,
    #[assoc(name = "input_indeterminate")]
    InputIndeterminate,
    #[assoc(name = "select")]
    Select,
    #[assoc(name = "select_compact")]
    SelectCompact,
    #[assoc(name = "select_option")]
    SelectOption,
    #[assoc(name = "select_option_selected")]
    SelectOptionSelected,
    #[assoc(name = "textarea")]
    TextArea,
    #[assoc(name = "button")]
    Button,
    #[assoc(name = "button_checked")]
    ButtonChecked,
    #[assoc(name = "button_invalid")]
    ButtonInvalid,
    #[assoc(name = "button_disabled")]
    ButtonDisabled,
    #[assoc(name = "radio")]
    Radio,
    #[assoc(name = "radio_hideLabel")]
    RadioHideLabel,
    #[assoc(name = "bullet")]
    Bullet,
    #[assoc(name = "indeterminate")]
    Indeterminate,
    #[assoc(name = "children")]
    Children,
    #[assoc(name = "caret_container")]
    CaretContainer,
    #[assoc(name = "caret")]
    Caret,
    #[assoc(name = "caret_inactive")]
    CaretInactive,
    #[assoc(name = "caret_active")]
    CaretActive,
    #[assoc(name = "caret_up")]
    CaretUp,
    #[assoc(name = "caret_down")]
    CaretDown,
}
