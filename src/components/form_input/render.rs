use gpui::{
    AnyElement, App, Entity, FocusHandle, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_primitives::input::{Input as PrimitiveInput, InputState};
use gpui_squircle::SquircleStyled;

use super::{
    ChangeTrigger, FormInput, FormInputKind, SELECT_CONTEXT, SelectNext, SelectPrevious,
    TOGGLE_CONTEXT, Toggle, emit_change,
};
use crate::{
    primitives::FocusRing,
    styles::{ClassList, StyleClass, StyleMap, StyleRule, StyleSheet, StyleSheetExt, units},
    theme::ThemeExt,
    utils::ElementIdExt,
};

const MASK_CHAR: char = '•';
const LINE_HEIGHT_FACTOR: f32 = 1.5;

impl RenderOnce for FormInput {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let styles = cx.style_sheet(StyleSheet::Input);
        let rule = self.classes().resolve(&styles);

        match &self.kind {
            FormInputKind::Input(input) if input.input_type.is_toggle() => {
                let rule = rule.refined(&toggle_rule(input.checked, &styles));
                self.render_toggle(rule, window, cx)
            }
            FormInputKind::Input(input) => {
                let state = input.state.clone();
                self.render_text(state, None, rule, window, cx)
            }
            FormInputKind::TextArea(textarea) => {
                let state = textarea.state.clone();
                let rows = textarea.rows;
                let rule = match styles.get(StyleClass::TextArea) {
                    Some(textarea_rule) => rule.refined(textarea_rule),
                    None => rule,
                };
                self.render_text(state, Some(rows), rule, window, cx)
            }
            FormInputKind::Select(_) => self.render_select(rule, &styles, window, cx),
        }
    }
}

/// Geometry and checked fill of a toggle input. Not part of the class list.
fn toggle_rule(checked: bool, styles: &StyleMap) -> StyleRule {
    let rule = StyleRule::new().padding_x(px(0.)).padding_y(px(0.));

    match styles.get(StyleClass::InputChecked) {
        Some(checked_rule) if checked => rule.refined(checked_rule),
        _ => rule,
    }
}

impl FormInput {
    /// Focus handle owned by this element across renders.
    fn keyed_focus_handle(&self, window: &mut Window, cx: &mut App) -> FocusHandle {
        let handle = window
            .use_keyed_state(
                self.element_id().with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();

        self.configure_focus(handle)
    }

    fn configure_focus(&self, handle: FocusHandle) -> FocusHandle {
        let focusable = !self.flags.disabled && !self.flags.hidden;
        let handle = handle.tab_stop(focusable);

        match self.attributes.tab_index {
            Some(tab_index) => handle.tab_index(tab_index),
            None => handle,
        }
    }

    /// Shared per-render focus bookkeeping: hand the handle out, honor
    /// `auto_focus` once, and drop focus from disabled elements.
    fn sync_focus(&self, focus_handle: &FocusHandle, window: &mut Window, cx: &mut App) {
        if let Some(propagate_ref) = self.propagate_ref.as_ref() {
            (propagate_ref)(focus_handle, window, cx);
        }

        let is_focus = focus_handle.is_focused(window);
        if is_focus && self.flags.disabled {
            window.blur();
            return;
        }

        if self.attributes.auto_focus && !self.flags.disabled {
            let auto_focused = window.use_keyed_state(
                self.element_id().with_suffix("state:auto_focused"),
                cx,
                |_window, _cx| false,
            );

            if !*auto_focused.read(cx) {
                focus_handle.focus(window, cx);
                auto_focused.update(cx, |auto_focused, _cx| *auto_focused = true);
            }
        }
    }

    fn render_toggle(&self, rule: StyleRule, window: &mut Window, cx: &mut App) -> AnyElement {
        let focus_handle = self.keyed_focus_handle(window, cx);
        self.sync_focus(&focus_handle, window, cx);

        let size = units(cx.get_theme().unit, 2.);
        let radius = cx.get_theme().layout.corner_radii.sm;
        let invalid = self.flags.invalid;
        let click_change = self.toggle_change(ChangeTrigger::Pointer);
        let key_change = self.toggle_change(ChangeTrigger::Keyboard);
        let on_change = self.on_change.clone();
        let on_key_change = self.on_change.clone();

        rule.apply(div().id(self.element_id()).relative().flex_none())
            .size(size)
            .child(FocusRing::new(focus_handle.clone()).invalid(invalid).rounded(radius))
            .when(self.accepts_changes(), |this| {
                this.cursor_pointer()
                    .key_context(TOGGLE_CONTEXT)
                    .track_focus(&focus_handle)
                    .on_mouse_down(gpui::MouseButton::Left, |_, window, _cx| {
                        // Keeps the focus ring from appearing on click.
                        window.prevent_default();
                    })
                    .on_click(move |_, window, cx| {
                        if let Some(event) = click_change.as_ref() {
                            emit_change(on_change.as_ref(), event, window, cx);
                        }
                    })
                    .on_action(move |_: &Toggle, window, cx| {
                        if let Some(event) = key_change.as_ref() {
                            emit_change(on_key_change.as_ref(), event, window, cx);
                        }
                    })
            })
            .into_any_element()
    }

    fn render_text(
        &self,
        state: Option<Entity<InputState>>,
        rows: Option<usize>,
        rule: StyleRule,
        window: &mut Window,
        cx: &mut App,
    ) -> AnyElement {
        let element_id = self.element_id();
        let state = state.unwrap_or_else(|| {
            let value = self.attributes.value.clone();
            window.use_keyed_state(
                element_id.with_suffix("state:text"),
                cx,
                move |_window, cx| InputState::new(cx).initial_value(value),
            )
        });

        // The primitive input tracks the state's own handle, so tab order is
        // configured on that one.
        let focus_handle = state.update(cx, |state, _cx| {
            state.focus_handle = self.configure_focus(state.focus_handle.clone());
            state.focus_handle.clone()
        });
        self.sync_focus(&focus_handle, window, cx);

        let theme = cx.get_theme();
        let radius = theme.layout.corner_radii.sm;
        let placeholder_color = theme.color.accent.text_disabled;
        let selection_color = theme.color.core.primary.first().copied();
        let line_height =
            rule.text_size.unwrap_or(theme.layout.text.sizes.regular) * LINE_HEIGHT_FACTOR;

        let masked = self.kind.input_type().is_some_and(|input_type| input_type.is_masked());
        let disabled = !self.accepts_changes();

        let input = PrimitiveInput::new(element_id.with_suffix("text"), state)
            .w_full()
            .placeholder(self.attributes.placeholder.clone().unwrap_or_default())
            .placeholder_text_color(placeholder_color)
            .disabled(disabled)
            .when_some(selection_color, |this, color| this.selection_color(color))
            .when(masked, |this| this.transform_text(|_| MASK_CHAR))
            .when_some(rows, |this, _rows| this.multiline());

        rule.apply(div().id(element_id).relative().flex().items_center())
            .when_some(rows, |this, rows| this.min_h(line_height * rows as f32))
            .child(
                FocusRing::new(focus_handle)
                    .invalid(self.flags.invalid)
                    .rounded(radius),
            )
            .child(input)
            .into_any_element()
    }

    fn render_select(
        &self,
        rule: StyleRule,
        styles: &StyleMap,
        window: &mut Window,
        cx: &mut App,
    ) -> AnyElement {
        let focus_handle = self.keyed_focus_handle(window, cx);
        self.sync_focus(&focus_handle, window, cx);

        let element_id = self.element_id();
        let radius = cx.get_theme().layout.corner_radii.sm;
        let hover_bg = cx.get_theme().color.accent.bg_hover;
        let previous_change = self
            .adjacent_option(-1)
            .and_then(|index| self.select_change(index, ChangeTrigger::Keyboard));
        let next_change = self
            .adjacent_option(1)
            .and_then(|index| self.select_change(index, ChangeTrigger::Keyboard));
        let on_previous = self.on_change.clone();
        let on_next = self.on_change.clone();

        let options = self.content().unwrap_or_default().iter().enumerate();
        let options = options.map(|(index, option)| {
            let selected = option.value == self.attributes.value;
            let option_rule = ClassList::new(StyleClass::SelectOption)
                .when(selected, StyleClass::SelectOptionSelected)
                .resolve(styles);
            let change = self.select_change(index, ChangeTrigger::Pointer);
            let on_change = self.on_change.clone();

            option_rule
                .apply(div().id(element_id.with_index("option", index)).w_full())
                .child(option.label.clone())
                .when(option.disabled, |this| this.opacity(0.5))
                .when_some(change, |this, change| {
                    this.cursor_pointer()
                        .hover(move |style| style.bg(hover_bg))
                        .on_click(move |_, window, cx| {
                            emit_change(on_change.as_ref(), &change, window, cx);
                        })
                })
        });

        rule.apply(div().id(element_id.clone()).relative().flex().flex_col())
            .child(
                FocusRing::new(focus_handle.clone())
                    .invalid(self.flags.invalid)
                    .rounded(radius),
            )
            .children(options.collect::<Vec<_>>())
            .when(self.accepts_changes(), |this| {
                this.key_context(SELECT_CONTEXT)
                    .track_focus(&focus_handle)
                    .on_action(move |_: &SelectPrevious, window, cx| {
                        if let Some(event) = previous_change.as_ref() {
                            emit_change(on_previous.as_ref(), event, window, cx);
                        }
                    })
                    .on_action(move |_: &SelectNext, window, cx| {
                        if let Some(event) = next_change.as_ref() {
                            emit_change(on_next.as_ref(), event, window, cx);
                        }
                    })
            })
            .into_any_element()
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use gpui::{AppContext, Context, Render, SharedString, TestAppContext, VisualTestContext};

    use super::*;
    use crate::components::{ChangeEvent, InputType, SelectOption};

    struct FormInputTestView {
        events: Rc<RefCell<Vec<ChangeEvent>>>,
        focus: Rc<RefCell<Option<FocusHandle>>>,
    }

    impl Render for FormInputTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let events = self.events.clone();
            let focus = self.focus.clone();

            div()
                .size_full()
                .child(
                    FormInput::input("terms", InputType::Checkbox)
                        .value("accepted")
                        .propagate_ref(move |handle, _window, _cx| {
                            *focus.borrow_mut() = Some(handle.clone());
                        })
                        .on_change(move |event, _window, _cx| {
                            events.borrow_mut().push(event.clone());
                        }),
                )
                .child(FormInput::input("email", InputType::Email).invalid(true))
                .child(FormInput::input("password", InputType::Password).placeholder("Password"))
                .child(FormInput::textarea("notes").rows(4).no_translate(true))
                .child(
                    FormInput::select(
                        "color",
                        [SelectOption::new("red", "Red"), SelectOption::new("blue", "Blue")],
                    )
                    .value("red")
                    .compact(true),
                )
        }
    }

    #[gpui::test]
    fn test_every_kind_renders(cx: &mut TestAppContext) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let focus = Rc::new(RefCell::new(None));

        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| FormInputTestView {
                    events: events.clone(),
                    focus: focus.clone(),
                })
            })
            .unwrap()
        });

        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        assert!(focus.borrow().is_some(), "propagate_ref should receive the focus handle");
        assert!(events.borrow().is_empty(), "rendering alone raises no change");
    }

    type Handles = Rc<RefCell<Vec<(SharedString, FocusHandle)>>>;

    struct TabOrderView {
        handles: Handles,
    }

    impl Render for TabOrderView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let field = |id: &'static str, handles: &Handles| {
                let handles = handles.clone();

                FormInput::input(id, InputType::Text).propagate_ref(move |handle, _window, _cx| {
                    let mut handles = handles.borrow_mut();
                    if !handles.iter().any(|(name, _)| name.as_ref() == id) {
                        handles.push((id.into(), handle.clone()));
                    }
                })
            };

            div()
                .size_full()
                .child(field("first", &self.handles))
                .child(field("locked", &self.handles).disabled(true))
                .child(FormInput::textarea("skipped").hidden(true))
                .child(field("last", &self.handles))
        }
    }

    #[gpui::test]
    fn test_tab_skips_disabled_text_input(cx: &mut TestAppContext) {
        let handles: Handles = Rc::default();

        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| TabOrderView {
                    handles: handles.clone(),
                })
            })
            .unwrap()
        });

        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        let handle = |id: &str| {
            handles
                .borrow()
                .iter()
                .find(|(name, _)| name.as_ref() == id)
                .map(|(_, handle)| handle.clone())
                .unwrap()
        };
        let first = handle("first");
        let locked = handle("locked");
        let last = handle("last");

        cx.update(|window, cx| first.focus(window, cx));
        cx.run_until_parked();
        cx.update(|window, cx| window.focus_next(cx));
        cx.run_until_parked();

        cx.update(|window, _cx| {
            assert!(!locked.is_focused(window));
            assert!(last.is_focused(window));
        });
    }

    #[gpui::test]
    fn test_space_toggles_focused_checkbox(cx: &mut TestAppContext) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let focus = Rc::new(RefCell::new(None));

        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| FormInputTestView {
                    events: events.clone(),
                    focus: focus.clone(),
                })
            })
            .unwrap()
        });

        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        let handle = focus.borrow().clone().unwrap();
        cx.update(|window, cx| handle.focus(window, cx));
        cx.run_until_parked();
        cx.simulate_keystrokes("space");

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert!(events[0].checked);
        assert_eq!(events[0].value.as_ref(), "accepted");
        assert_eq!(events[0].trigger, ChangeTrigger::Keyboard);
    }
}
