use std::fmt;

use futures::future::BoxFuture;

use crate::{Errors, Field, FieldState, FieldType, FieldValue, FormState, SubmitError, Values};

/// Called by the controller whenever a subscribed piece of field state changes.
pub type FieldSubscriber<T> = Box<dyn FnMut(&FieldState<T>) + Send>;

/// Result of a submission: `Some(errors)` when the submit handler reported
/// field errors, `None` on success.
pub type SubmitResult = Result<Option<Errors>, SubmitError>;

/// The contract of an external form-state controller.
///
/// This crate does not implement a controller. Widgets and bindings only rely
/// on these operations.
pub trait FormContext {
    /// Sets a field's value. `batch_values` are applied in the same update.
    fn change(&self, name: &str, value: FieldValue, batch_values: Option<&Values>);

    fn get_fields(&self) -> Vec<FieldState<FieldValue>>;

    fn get_state(&self) -> FormState;

    /// Registers a field. The field stays registered until the returned
    /// handle is consumed or dropped.
    fn register<T: FieldType>(
        &self,
        field: Field<T>,
        on_update: FieldSubscriber<T>,
    ) -> Unsubscribe;

    fn submit(&self) -> BoxFuture<'static, SubmitResult>;
}

/// Handle that unregisters a field. The cleanup runs at most once, either
/// through [`Unsubscribe::unsubscribe`] or when the handle is dropped.
#[must_use = "dropping the handle unregisters the field immediately"]
pub struct Unsubscribe(Option<Box<dyn FnOnce() + Send>>);

impl Unsubscribe {
    pub fn new(cleanup: impl FnOnce() + Send + 'static) -> Self {
        Self(Some(Box::new(cleanup)))
    }

    /// A handle with nothing to clean up.
    pub fn noop() -> Self {
        Self(None)
    }

    pub fn unsubscribe(mut self) {
        self.run();
    }

    /// Keeps the registration alive for the rest of the controller's life.
    pub fn detach(mut self) {
        self.0 = None;
    }

    fn run(&mut self) {
        if let Some(cleanup) = self.0.take() {
            tracing::trace!("unsubscribing form field");
            (cleanup)();
        }
    }
}

impl Drop for Unsubscribe {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unsubscribe").field(&self.0.is_some()).finish()
    }
}
