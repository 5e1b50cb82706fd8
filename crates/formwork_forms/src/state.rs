use serde::{Deserialize, Serialize};

use crate::{Errors, Values};

/// A piece of field state a registration can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldSubscription {
    Active,
    Data,
    Dirty,
    DirtySinceLastSubmit,
    Error,
    Initial,
    Invalid,
    Length,
    Modified,
    ModifiedSinceLastSubmit,
    Pristine,
    SubmitError,
    SubmitFailed,
    SubmitSucceeded,
    Submitting,
    Touched,
    Valid,
    Validating,
    Value,
    Visited,
}

/// Snapshot of a single registered field, as reported by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState<T> {
    pub name: String,
    pub value: Option<T>,
    pub initial: Option<T>,
    pub error: Option<String>,
    pub submit_error: Option<String>,
    pub active: bool,
    pub dirty: bool,
    pub modified: bool,
    pub touched: bool,
    pub validating: bool,
    pub visited: bool,
}

impl<T> FieldState<T> {
    /// A pristine, untouched field with no value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            initial: None,
            error: None,
            submit_error: None,
            active: false,
            dirty: false,
            modified: false,
            touched: false,
            validating: false,
            visited: false,
        }
    }

    pub fn valid(&self) -> bool {
        self.error.is_none() && self.submit_error.is_none()
    }

    pub fn pristine(&self) -> bool {
        !self.dirty
    }
}

/// Snapshot of the whole form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: Values,
    pub initial_values: Values,
    pub errors: Errors,
    pub submit_errors: Errors,
    pub submitting: bool,
    pub submit_failed: bool,
    pub submit_succeeded: bool,
    pub validating: bool,
    pub dirty: bool,
}

impl FormState {
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn pristine(&self) -> bool {
        !self.dirty
    }
}
