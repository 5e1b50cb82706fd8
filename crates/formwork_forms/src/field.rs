use std::{fmt, sync::Arc};

use crate::{DefaultValue, FieldSubscription, FieldType, FieldValue, ParseValue, Values};

/// Converts the raw value a control emits into the field's parsed type.
pub type Parse<T> = Arc<dyn Fn(ParseValue) -> <T as FieldType>::Parsed + Send + Sync>;

/// Decides whether two field values are the same, for dirty tracking.
pub type IsEqual = Arc<dyn Fn(&FieldValue, &FieldValue) -> bool + Send + Sync>;

/// Returns an error message when the value is invalid.
pub type FieldValidator<T> = Arc<dyn Fn(Option<&T>, &Values) -> Option<String> + Send + Sync>;

/// Declarative description of a form field, used to register it with a
/// [`FormContext`](crate::FormContext).
pub struct Field<T: FieldType> {
    pub name: String,
    pub default_value: Option<DefaultValue>,
    pub is_equal: Option<IsEqual>,
    pub parse: Option<Parse<T>>,
    /// `None` subscribes to everything.
    pub subscriptions: Option<Vec<FieldSubscription>>,
    pub validate_default_value: bool,
    /// Other fields to re-validate whenever this one changes.
    pub validate_fields: Option<Vec<String>>,
    pub validator: FieldValidator<T>,
}

impl<T: FieldType> Field<T> {
    pub fn new(
        name: impl Into<String>,
        validator: impl Fn(Option<&T>, &Values) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            is_equal: None,
            parse: None,
            subscriptions: None,
            validate_default_value: false,
            validate_fields: None,
            validator: Arc::new(validator),
        }
    }

    /// A field whose validator never reports an error.
    pub fn unvalidated(name: impl Into<String>) -> Self {
        Self::new(name, |_, _| None)
    }

    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn is_equal(
        mut self,
        is_equal: impl Fn(&FieldValue, &FieldValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_equal = Some(Arc::new(is_equal));
        self
    }

    pub fn parse(
        mut self,
        parse: impl Fn(ParseValue) -> T::Parsed + Send + Sync + 'static,
    ) -> Self {
        self.parse = Some(Arc::new(parse));
        self
    }

    pub fn subscriptions(
        mut self,
        subscriptions: impl IntoIterator<Item = FieldSubscription>,
    ) -> Self {
        self.subscriptions = Some(subscriptions.into_iter().collect());
        self
    }

    pub fn validate_default_value(mut self, validate: bool) -> Self {
        self.validate_default_value = validate;
        self
    }

    pub fn validate_fields<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.validate_fields = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Runs the parser, if the field has one.
    pub fn parse_value(&self, value: ParseValue) -> Option<T::Parsed> {
        self.parse.as_ref().map(|parse| (parse)(value))
    }

    /// Compares with the custom predicate, falling back to `==`.
    pub fn values_equal(&self, a: &FieldValue, b: &FieldValue) -> bool {
        match &self.is_equal {
            Some(is_equal) => (is_equal)(a, b),
            None => a == b,
        }
    }

    pub fn validate(&self, value: Option<&T>, all_values: &Values) -> Option<String> {
        (self.validator)(value, all_values)
    }

    pub fn subscribes_to(&self, subscription: FieldSubscription) -> bool {
        self.subscriptions
            .as_ref()
            .is_none_or(|subscriptions| subscriptions.contains(&subscription))
    }
}

impl<T: FieldType> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            default_value: self.default_value.clone(),
            is_equal: self.is_equal.clone(),
            parse: self.parse.clone(),
            subscriptions: self.subscriptions.clone(),
            validate_default_value: self.validate_default_value,
            validate_fields: self.validate_fields.clone(),
            validator: self.validator.clone(),
        }
    }
}

impl<T: FieldType> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("has_is_equal", &self.is_equal.is_some())
            .field("has_parse", &self.parse.is_some())
            .field("subscriptions", &self.subscriptions)
            .field("validate_default_value", &self.validate_default_value)
            .field("validate_fields", &self.validate_fields)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(value: Option<&String>, _values: &Values) -> Option<String> {
        match value {
            Some(value) if !value.is_empty() => None,
            _ => Some("Field is required.".to_owned()),
        }
    }

    #[test]
    fn test_field_defaults() {
        let field = Field::<String>::unvalidated("email");
        assert_eq!(field.name, "email");
        assert_eq!(field.default_value, None);
        assert!(!field.validate_default_value);
        assert!(field.validate_fields.is_none());
        assert_eq!(field.validate(None, &Values::new()), None);
    }

    #[test]
    fn test_field_validator() {
        let field = Field::<String>::new("email", required);
        let values = Values::new();

        assert_eq!(
            field.validate(None, &values).as_deref(),
            Some("Field is required.")
        );
        assert_eq!(
            field.validate(Some(&String::new()), &values).as_deref(),
            Some("Field is required.")
        );
        assert_eq!(field.validate(Some(&"a@b.c".to_owned()), &values), None);
    }

    #[test]
    fn test_validator_sees_all_values() {
        let field = Field::<String>::new("confirm", |value, values| {
            let password = values.get("password").and_then(FieldValue::as_str);
            (value.map(String::as_str) != password).then(|| "Passwords differ.".to_owned())
        })
        .validate_fields(["password"]);

        let mut values = Values::new();
        values.insert("password".to_owned(), FieldValue::from("hunter2"));

        assert_eq!(field.validate(Some(&"hunter2".to_owned()), &values), None);
        assert!(field.validate(Some(&"hunter3".to_owned()), &values).is_some());
        assert_eq!(field.validate_fields, Some(vec!["password".to_owned()]));
    }

    #[test]
    fn test_list_field_parses_single_items() {
        let field = Field::<Vec<String>>::unvalidated("tags").parse(|value| match value {
            ParseValue::String(value) => value.to_uppercase(),
            ParseValue::Bool(value) => value.to_string(),
            ParseValue::Null => String::new(),
        });

        assert_eq!(
            field.parse_value(ParseValue::String("rust".to_owned())),
            Some("RUST".to_owned())
        );
        assert_eq!(field.parse_value(ParseValue::Null), Some(String::new()));
    }

    #[test]
    fn test_parse_value_without_parser() {
        let field = Field::<bool>::unvalidated("agree");
        assert_eq!(field.parse_value(ParseValue::Bool(true)), None);
    }

    #[test]
    fn test_values_equal() {
        let field = Field::<String>::unvalidated("name");
        assert!(field.values_equal(&"a".into(), &"a".into()));
        assert!(!field.values_equal(&"a".into(), &"A".into()));

        let field = field.is_equal(|a, b| match (a.as_str(), b.as_str()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => a == b,
        });
        assert!(field.values_equal(&"a".into(), &"A".into()));
    }

    #[test]
    fn test_subscriptions() {
        let field = Field::<bool>::unvalidated("agree");
        assert!(field.subscribes_to(FieldSubscription::Value));

        let field = field.subscriptions([FieldSubscription::Value, FieldSubscription::Error]);
        assert!(field.subscribes_to(FieldSubscription::Error));
        assert!(!field.subscribes_to(FieldSubscription::Touched));
    }

    #[test]
    fn test_clone_shares_callbacks() {
        let field = Field::<String>::new("email", required).default_value("x");
        let cloned = field.clone();

        assert_eq!(cloned.default_value, Some(FieldValue::from("x")));
        assert!(Arc::ptr_eq(&field.validator, &cloned.validator));
    }
}
