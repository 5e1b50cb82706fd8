use std::rc::Rc;

use gpui::{
    AnyElement, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::SquircleStyled;
use smallvec::SmallVec;

use crate::{
    components::{
        ChangeEvent, ChangeTrigger, FormInput, Icon, IconKind, InputType, TOGGLE_CONTEXT, Toggle,
    },
    primitives::FocusRing,
    styles::{ClassList, RADIO_SIZE, StyleClass, StyleSheet, StyleSheetExt},
    theme::ThemeExt,
    utils::ElementIdExt,
};

/// Size of the dash relative to the bullet.
const DASH_SCALE: f32 = 1.64;

pub type RadioChangeHandler = Rc<dyn Fn(&bool, &SharedString, &ChangeEvent, &mut Window, &mut App)>;

/// Which marker glyphs a radio draws. Independent of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadioMarkers {
    /// Filled bullet, drawn while checked.
    pub bullet: bool,
    /// Dash, drawn while indeterminate.
    pub dash: bool,
}

/// A radio control, optionally rendered as a large clickable button
/// containing arbitrary content.
///
/// Holds no state: the owner passes `checked` down and updates it from
/// [`RadioButton::on_change`].
#[derive(IntoElement)]
pub struct RadioButton {
    id: SharedString,
    value: SharedString,
    name: Option<SharedString>,
    checked: bool,
    indeterminate: bool,
    invalid: bool,
    disabled: bool,
    hide_label: bool,
    button: bool,
    children: SmallVec<[AnyElement; 2]>,
    on_change: Option<RadioChangeHandler>,
}

impl RadioButton {
    pub fn new(id: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            name: None,
            checked: false,
            indeterminate: false,
            invalid: false,
            disabled: false,
            hide_label: false,
            button: false,
            children: SmallVec::new(),
            on_change: None,
        }
    }

    /// Group name shared by every radio of one field.
    pub fn name(mut self, name: impl Into<SharedString>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Greys the control out with a dash.
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hide_label(mut self, hide_label: bool) -> Self {
        self.hide_label = hide_label;
        self
    }

    /// Renders the control and its children inside a large clickable surface.
    pub fn button(mut self, button: bool) -> Self {
        self.button = button;
        self
    }

    /// Receives `(checked, value, event)` for every native change.
    pub fn on_change(
        mut self,
        on_change: impl Fn(&bool, &SharedString, &ChangeEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    pub fn markers(&self) -> RadioMarkers {
        RadioMarkers {
            bullet: self.checked,
            dash: self.indeterminate,
        }
    }

    /// Classes of the circular marker surface.
    pub fn control_classes(&self) -> ClassList {
        ClassList::new(StyleClass::Input)
            .when(self.indeterminate, StyleClass::InputIndeterminate)
            .when(self.checked, StyleClass::InputChecked)
            .when(self.invalid, StyleClass::InputInvalid)
            .when(self.disabled, StyleClass::InputDisabled)
    }

    pub fn label_classes(&self) -> ClassList {
        ClassList::new(StyleClass::Radio).when(self.hide_label, StyleClass::RadioHideLabel)
    }

    /// Classes of the outer surface in button mode.
    pub fn button_classes(&self) -> ClassList {
        ClassList::new(StyleClass::Button)
            .when(self.indeterminate, StyleClass::InputIndeterminate)
            .when(self.checked, StyleClass::ButtonChecked)
            .when(self.invalid, StyleClass::ButtonInvalid)
            .when(self.disabled, StyleClass::ButtonDisabled)
    }

    /// The hidden native radio input backing this control.
    pub fn native_input(&self) -> FormInput {
        FormInput::input(self.id.clone(), InputType::Radio)
            .value(self.value.clone())
            .checked(self.checked)
            .disabled(self.disabled)
            .invalid(self.invalid)
            .hidden(true)
            .optional(true)
            .when_some(self.name.clone(), |input, name| input.name(name))
    }

    /// The change the native input raises when activated.
    pub fn native_change(&self, trigger: ChangeTrigger) -> Option<ChangeEvent> {
        self.native_input().toggle_change(trigger)
    }

    /// Forwards a native change to `on_change` unchanged.
    pub fn handle_change(
        on_change: Option<&RadioChangeHandler>,
        event: &ChangeEvent,
        window: &mut Window,
        cx: &mut App,
    ) {
        tracing::trace!(checked = event.checked, value = %event.value, "radio change");

        if let Some(on_change) = on_change {
            (on_change)(&event.checked, &event.value, event, window, cx);
        }
    }

    fn element_id(&self) -> ElementId {
        ElementId::Name(self.id.clone())
    }
}

impl ParentElement for RadioButton {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for RadioButton {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let styles = cx.style_sheet(StyleSheet::Radio);
        let element_id = self.element_id();

        let focus_handle = window
            .use_keyed_state(
                element_id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone()
            .tab_stop(!self.disabled);

        if self.disabled && focus_handle.is_focused(window) {
            window.blur();
        }

        let markers = self.markers();
        let control_rule = self.control_classes().resolve(&styles);
        let marker_size = control_rule.text_size.unwrap_or(px(8.));
        let marker_color = control_rule.text_color;

        let bullet = markers.bullet.then(|| {
            ClassList::new(StyleClass::Bullet).resolve(&styles).apply(div()).child(
                Icon::new(IconKind::Record)
                    .size(marker_size)
                    .when_some(marker_color, |icon, color| icon.color(color)),
            )
        });
        let dash = markers.dash.then(|| {
            ClassList::new(StyleClass::Indeterminate).resolve(&styles).apply(div()).child(
                Icon::new(IconKind::Remove)
                    .size(marker_size * DASH_SCALE)
                    .when_some(marker_color, |icon, color| icon.color(color)),
            )
        });

        let control = control_rule
            .apply(div().flex().flex_col().flex_none())
            .children(bullet)
            .children(dash);

        let radio = self
            .label_classes()
            .resolve(&styles)
            .apply(div().flex_none())
            .when(!self.button, |this| {
                this.child(
                    FocusRing::new(focus_handle.clone())
                        .invalid(self.invalid)
                        .rounded(px(RADIO_SIZE / 2.)),
                )
            })
            .child(self.native_input())
            .child(control);

        let click_change = self.native_change(ChangeTrigger::Pointer);
        let key_change = self.native_change(ChangeTrigger::Keyboard);
        let on_click_change = self.on_change.clone();
        let on_key_change = self.on_change.clone();
        let interactive = !self.disabled;

        let button_rule = self.button.then(|| self.button_classes().resolve(&styles));

        let surface = if let Some(button_rule) = button_rule {
            let radius = cx.get_theme().layout.corner_radii.sm;
            let children = ClassList::new(StyleClass::Children)
                .resolve(&styles)
                .apply(div().flex_1())
                .children(self.children);

            button_rule
                .apply(div().id(element_id).relative().flex().items_start())
                .child(FocusRing::new(focus_handle.clone()).invalid(self.invalid).rounded(radius))
                .child(radio)
                .child(children)
        } else {
            div().id(element_id).relative().flex_none().child(radio)
        };

        surface.when(interactive, |this| {
            this.key_context(TOGGLE_CONTEXT)
                .track_focus(&focus_handle)
                .on_mouse_down(gpui::MouseButton::Left, |_, window, _cx| {
                    // Keeps the focus ring from appearing on click.
                    window.prevent_default();
                })
                .on_click(move |_, window, cx| {
                    if let Some(event) = click_change.as_ref() {
                        Self::handle_change(on_click_change.as_ref(), event, window, cx);
                    }
                })
                .on_action(move |_: &Toggle, window, cx| {
                    if let Some(event) = key_change.as_ref() {
                        Self::handle_change(on_key_change.as_ref(), event, window, cx);
                    }
                })
        })
    }
}


#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use std::{cell::RefCell, rc::Rc};

    use gpui::{AppContext, Context, Render, TestAppContext, VisualTestContext};

    use super::*;

    type Received = Rc<RefCell<Vec<(bool, SharedString, ChangeEvent)>>>;

    #[gpui::test]
    fn test_handle_change_forwards_event_unchanged(cx: &mut TestAppContext) {
        let received: Received = Rc::default();

        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| EmptyView))
                .unwrap()
        });
        let mut cx = VisualTestContext::from_window(window.into(), cx);

        let sink = received.clone();
        let on_change: RadioChangeHandler = Rc::new(move |checked, value, event, _window, _cx| {
            sink.borrow_mut().push((*checked, value.clone(), event.clone()));
        });
        let event = ChangeEvent {
            checked: true,
            value: "left".into(),
            trigger: ChangeTrigger::Pointer,
        };

        cx.update(|window, cx| {
            RadioButton::handle_change(Some(&on_change), &event, window, cx);
        });

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], (true, SharedString::from("left"), event));
    }

    #[gpui::test]
    fn test_radio_group_renders(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| RadioGroupView {
                    selected: "small".into(),
                })
            })
            .unwrap()
        });

        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    #[gpui::test]
    fn test_button_mode_toggles_from_keyboard(cx: &mut TestAppContext) {
        let received: Received = Rc::default();

        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ButtonRadioView {
                    received: received.clone(),
                })
            })
            .unwrap()
        });

        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        cx.update(|window, cx| window.focus_next(cx));
        cx.run_until_parked();
        cx.simulate_keystrokes("space");

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert!(received[0].0);
        assert_eq!(received[0].1.as_ref(), "express");
        assert_eq!(received[0].2.trigger, ChangeTrigger::Keyboard);
    }

    struct ButtonRadioView {
        received: Received,
    }

    impl Render for ButtonRadioView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let sink = self.received.clone();

            div().child(
                RadioButton::new("shipping-express", "express")
                    .name("shipping")
                    .button(true)
                    .on_change(move |checked, value, event, _window, _cx| {
                        sink.borrow_mut().push((*checked, value.clone(), event.clone()));
                    })
                    .child("Express")
                    .child("Arrives tomorrow"),
            )
        }
    }

    struct EmptyView;

    impl Render for EmptyView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div()
        }
    }

    struct RadioGroupView {
        selected: SharedString,
    }

    impl Render for RadioGroupView {
        fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
            let sizes = ["small", "medium", "large"];
            let view = cx.entity();

            div()
                .flex()
                .flex_col()
                .children(sizes.map(|size| {
                    let view = view.clone();

                    RadioButton::new(format!("size-{size}"), size)
                        .name("size")
                        .checked(self.selected.as_ref() == size)
                        .on_change(move |checked, value, _event, _window, cx| {
                            if *checked {
                                view.update(cx, |view, cx| {
                                    view.selected = value.clone();
                                    cx.notify();
                                });
                            }
                        })
                }))
                .child(
                    RadioButton::new("size-custom", "custom")
                        .button(true)
                        .indeterminate(true)
                        .child("Custom size"),
                )
        }
    }
}
