#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{Entity, SharedString};
use gpui_primitives::input::InputState;

/// The `type` of a single-line input element.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum InputType {
    #[default]
    #[assoc(name = "text")]
    Text,
    #[assoc(name = "email")]
    Email,
    #[assoc(name = "password")]
    Password,
    #[assoc(name = "search")]
    Search,
    #[assoc(name = "tel")]
    Tel,
    #[assoc(name = "url")]
    Url,
    #[assoc(name = "number")]
    Number,
    #[assoc(name = "radio")]
    Radio,
    #[assoc(name = "checkbox")]
    Checkbox,
}

impl InputType {
    /// Radio and checkbox inputs hold a checked state instead of text.
    pub fn is_toggle(&self) -> bool {
        matches!(self, InputType::Radio | InputType::Checkbox)
    }

    /// Hides typed characters.
    pub fn is_masked(&self) -> bool {
        matches!(self, InputType::Password)
    }
}

/// One entry of a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: SharedString,
    pub label: SharedString,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

macro_rules! option_from_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for SelectOption {
                fn from(value: $ty) -> Self {
                    let value = SharedString::from(value);
                    Self::new(value.clone(), value)
                }
            }
        )+
    };
}

option_from_value!(&'static str, String, SharedString);

#[derive(Clone, Default)]
pub struct InputElement {
    pub input_type: InputType,
    /// Only meaningful for toggle types.
    pub checked: bool,
    /// Text storage for text-like types. When absent, the element keeps its
    /// own state seeded from the `value` attribute.
    pub state: Option<Entity<InputState>>,
}

#[derive(Clone, Default)]
pub struct SelectElement {
    pub options: Vec<SelectOption>,
}

#[derive(Clone)]
pub struct TextAreaElement {
    pub state: Option<Entity<InputState>>,
    pub rows: usize,
}

impl Default for TextAreaElement {
    fn default() -> Self {
        Self {
            state: None,
            rows: 3,
        }
    }
}

/// Which element a [`FormInput`](super::FormInput) renders.
#[derive(Clone)]
pub enum FormInputKind {
    Input(InputElement),
    Select(SelectElement),
    TextArea(TextAreaElement),
}

impl FormInputKind {
    /// The element's tag name.
    pub fn tag(&self) -> &'static str {
        match self {
            FormInputKind::Input(_) => "input",
            FormInputKind::Select(_) => "select",
            FormInputKind::TextArea(_) => "textarea",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FormInputKind::Select(_))
    }

    pub fn input_type(&self) -> Option<InputType> {
        match self {
            FormInputKind::Input(input) => Some(input.input_type),
            _ => None,
        }
    }

    pub fn is_toggle(&self) -> bool {
        self.input_type().is_some_and(|input_type| input_type.is_toggle())
    }
}

impl From<InputType> for FormInputKind {
    fn from(input_type: InputType) -> Self {
        FormInputKind::Input(InputElement {
            input_type,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_types() {
        assert!(InputType::Radio.is_toggle());
        assert!(InputType::Checkbox.is_toggle());
        assert!(!InputType::Text.is_toggle());
        assert!(!InputType::Password.is_toggle());
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(FormInputKind::from(InputType::Email).tag(), "input");
        assert_eq!(FormInputKind::Select(SelectElement::default()).tag(), "select");
        assert_eq!(FormInputKind::TextArea(TextAreaElement::default()).tag(), "textarea");
    }

    #[test]
    fn test_option_from_value_uses_it_as_label() {
        let option = SelectOption::from("red");

        assert_eq!(option.value, SharedString::from("red"));
        assert_eq!(option.label, SharedString::from("red"));
        assert!(!option.disabled);
    }
}
