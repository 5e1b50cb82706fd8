//! Glue between widget change events and a [`FormContext`].

use std::rc::Rc;

use formwork_forms::{FieldValue, FormContext};
use gpui::{App, Entity, SharedString, Window};
use gpui_primitives::input::InputState;

use crate::components::ChangeEvent;

/// How a widget's change event maps onto a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// One string value per group, written when a radio becomes checked.
    Radio,
    /// The picked option's value.
    Select,
    /// The checked state itself.
    Checkbox,
}

impl BindingKind {
    /// The value written for `event`, or `None` when the event leaves the
    /// field unchanged.
    pub fn field_value(&self, event: &ChangeEvent) -> Option<FieldValue> {
        match self {
            BindingKind::Radio => event
                .checked
                .then(|| FieldValue::String(event.value.to_string())),
            BindingKind::Select => Some(FieldValue::String(event.value.to_string())),
            BindingKind::Checkbox => Some(FieldValue::Bool(event.checked)),
        }
    }
}

/// Produces change handlers that write into a shared form controller.
pub struct FormBinding<C> {
    form: Rc<C>,
}

impl<C> Clone for FormBinding<C> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
        }
    }
}

impl<C: FormContext + 'static> FormBinding<C> {
    pub fn new(form: Rc<C>) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &C {
        &self.form
    }

    /// Writes the value `event` implies for `name`. Returns whether the
    /// controller was called.
    pub fn apply(&self, name: &str, kind: BindingKind, event: &ChangeEvent) -> bool {
        let Some(value) = kind.field_value(event) else {
            return false;
        };

        tracing::trace!(field = name, ?kind, "writing field value");
        self.form.change(name, value, None);
        true
    }

    /// Handler for every [`RadioButton`](crate::components::RadioButton) of
    /// the group `name`.
    pub fn radio(
        &self,
        name: impl Into<SharedString>,
    ) -> impl Fn(&bool, &SharedString, &ChangeEvent, &mut Window, &mut App) + 'static {
        let binding = self.clone();
        let name = name.into();

        move |_checked, _value, event, _window, _cx| {
            binding.apply(&name, BindingKind::Radio, event);
        }
    }

    /// Handler for a select or checkbox [`FormInput`](crate::components::FormInput).
    pub fn input(
        &self,
        name: impl Into<SharedString>,
        kind: BindingKind,
    ) -> impl Fn(&ChangeEvent, &mut Window, &mut App) + 'static {
        let binding = self.clone();
        let name = name.into();

        move |event, _window, _cx| {
            binding.apply(&name, kind, event);
        }
    }

    /// Writes the current text of an input or textarea.
    pub fn commit_text(&self, name: &str, state: &Entity<InputState>, cx: &App) {
        let text = state.read(cx).value();
        self.form
            .change(name, FieldValue::String(text.to_string()), None);
    }
}
