use std::rc::Rc;

use gpui::{App, FocusHandle, KeyBinding, SharedString, Window, actions};

actions!(form_input, [Toggle, SelectPrevious, SelectNext]);

pub(crate) const TOGGLE_CONTEXT: &str = "FormToggle";
pub(crate) const SELECT_CONTEXT: &str = "FormSelect";

/// What raised a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTrigger {
    Pointer,
    Keyboard,
}

/// A change raised by a toggle input or a select element, carrying the
/// element's new checked state and its raw value string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub checked: bool,
    pub value: SharedString,
    pub trigger: ChangeTrigger,
}

pub type ChangeHandler = Rc<dyn Fn(&ChangeEvent, &mut Window, &mut App)>;

/// Receives the element's focus handle on every render.
pub type PropagateRef = Rc<dyn Fn(&FocusHandle, &mut Window, &mut App)>;

pub(crate) fn emit_change(
    on_change: Option<&ChangeHandler>,
    event: &ChangeEvent,
    window: &mut Window,
    cx: &mut App,
) {
    tracing::trace!(
        checked = event.checked,
        value = %event.value,
        trigger = ?event.trigger,
        "change"
    );

    if let Some(on_change) = on_change {
        (on_change)(event, window, cx);
    }
}

pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("space", Toggle, Some(TOGGLE_CONTEXT)),
        KeyBinding::new("up", SelectPrevious, Some(SELECT_CONTEXT)),
        KeyBinding::new("down", SelectNext, Some(SELECT_CONTEXT)),
    ]);
}
