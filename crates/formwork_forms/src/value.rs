use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current values of a form, keyed by field name.
pub type Values = IndexMap<String, FieldValue>;

/// Error messages of a form, keyed by field name.
pub type Errors = IndexMap<String, String>;

/// A value held by a form field.
///
/// Which variant a field holds depends on the widget bound to it, see [`ValueKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox, radio button and switch fields.
    Bool(bool),
    /// Text inputs, selects, text areas and radio/toggle controllers.
    String(String),
    /// Checkbox controllers and multi-completes.
    List(Vec<String>),
    /// No value.
    Null,
}

impl FieldValue {
    /// Returns the kind of this value, or `None` for [`FieldValue::Null`].
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Bool(_) => Some(ValueKind::Bool),
            Self::String(_) => Some(ValueKind::String),
            Self::List(_) => Some(ValueKind::List),
            Self::Null => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// The shape of value a widget reads from and writes to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `true`/`false`: checkbox, radio button, switch.
    Bool,
    /// A single string: input, select, text area, radio and toggle controllers.
    String,
    /// A list of strings: checkbox controller, multi-complete.
    List,
}

/// Initial value of a field. `None` on the descriptor means "absent".
pub type DefaultValue = FieldValue;

/// Raw value handed to a field's parser: what a single control emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseValue {
    Bool(bool),
    String(String),
    Null,
}

impl From<ParseValue> for FieldValue {
    fn from(value: ParseValue) -> Self {
        match value {
            ParseValue::Bool(value) => Self::Bool(value),
            ParseValue::String(value) => Self::String(value),
            ParseValue::Null => Self::Null,
        }
    }
}

/// Relates a field's stored value type to the type its parser produces.
///
/// List fields are built one item at a time, so a `Vec<U>` field parses
/// into a single `U`. Every other field parses into its own type.
pub trait FieldType: 'static {
    /// The type a parser returns for this field.
    type Parsed;
}

impl FieldType for bool {
    type Parsed = bool;
}

impl FieldType for String {
    type Parsed = String;
}

impl FieldType for FieldValue {
    type Parsed = FieldValue;
}

impl<U: 'static> FieldType for Vec<U> {
    type Parsed = U;
}

impl<T: FieldType> FieldType for Option<T> {
    type Parsed = Option<T::Parsed>;
}
