use std::{cell::RefCell, rc::Rc};

use futures::future::{self, BoxFuture};
use gpui::{
    App, AppContext, Application, Bounds, Context, FocusHandle, KeyBinding, Menu, SharedString,
    TitlebarOptions, Window, WindowBounds, WindowOptions, actions, div, point, prelude::*, px,
    size,
};

use gpui_formwork::{
    FormworkAssets, assets,
    bindings::{BindingKind, FormBinding},
    components::{ChangeEvent, FormInput, InputType, RadioButton, SelectOption, SortCarets},
    forms::{
        Field, FieldState, FieldSubscriber, FieldType, FieldValue, FormContext, FormState,
        SubmitResult, Unsubscribe, Values,
    },
    theme::{Theme, ThemeExt},
};

const SIZES: [&str; 3] = ["small", "medium", "large"];
const SHIPPING: [&str; 2] = ["standard", "express"];

/// Keeps submitted values in memory. Registration is not tracked.
#[derive(Default)]
struct DemoForm {
    values: RefCell<Values>,
}

impl DemoForm {
    fn string(&self, name: &str) -> Option<String> {
        let values = self.values.borrow();
        values.get(name).and_then(FieldValue::as_str).map(str::to_owned)
    }

    fn bool(&self, name: &str) -> bool {
        let values = self.values.borrow();
        values.get(name).and_then(FieldValue::as_bool).unwrap_or(false)
    }
}

impl FormContext for DemoForm {
    fn change(&self, name: &str, value: FieldValue, batch_values: Option<&Values>) {
        let mut values = self.values.borrow_mut();
        values.insert(name.to_owned(), value);

        if let Some(batch_values) = batch_values {
            values.extend(batch_values.clone());
        }
    }

    fn get_fields(&self) -> Vec<FieldState<FieldValue>> {
        self.values
            .borrow()
            .iter()
            .map(|(name, value)| {
                let mut state = FieldState::new(name.clone());
                state.value = Some(value.clone());
                state
            })
            .collect()
    }

    fn get_state(&self) -> FormState {
        FormState {
            values: self.values.borrow().clone(),
            ..Default::default()
        }
    }

    fn register<T: FieldType>(
        &self,
        _field: Field<T>,
        _on_update: FieldSubscriber<T>,
    ) -> Unsubscribe {
        Unsubscribe::noop()
    }

    fn submit(&self) -> BoxFuture<'static, SubmitResult> {
        tracing::info!(values = ?self.values.borrow(), "submitting demo form");
        Box::pin(future::ready(Ok(None)))
    }
}

struct Showcase {
    focus_handle: FocusHandle,
    binding: FormBinding<DemoForm>,

    size: SharedString,
    color: SharedString,
    terms: bool,
    ascending: bool,
}

actions!(window, [TabNext, TabPrev]);

impl Render for Showcase {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_formwork::init_for_window(window, cx);

        let theme = cx.get_theme();
        let view = cx.entity();
        let form = self.binding.form();
        let shipping = form.string("shipping");

        div()
            .tab_group()
            .track_focus(&self.focus_handle)
            .size_full()
            .text_size(theme.layout.text.base_size)
            .bg(theme.color.base)
            .flex()
            .flex_col()
            .gap(px(16.))
            .p(px(48.))
            .child(
                FormInput::input("email", InputType::Email)
                    .name("email")
                    .placeholder("you@example.com")
                    .auto_focus(true),
            )
            .child(
                FormInput::input("password", InputType::Password)
                    .name("password")
                    .invalid(!self.terms),
            )
            .child(FormInput::textarea("notes").rows(3).optional(true).no_translate(true))
            .child(
                FormInput::select(
                    "color",
                    [
                        SelectOption::new("red", "Red"),
                        SelectOption::new("green", "Green").disabled(true),
                        SelectOption::new("blue", "Blue"),
                    ],
                )
                .value(self.color.clone())
                .compact(true)
                .on_change(cx.listener(|view, event: &ChangeEvent, _window, cx| {
                    view.color = event.value.clone();
                    cx.notify();
                })),
            )
            .child(
                FormInput::input("terms", InputType::Checkbox)
                    .checked(self.terms)
                    .value("accepted")
                    .on_change(cx.listener(|view, event: &ChangeEvent, _window, cx| {
                        view.terms = event.checked;
                        cx.notify();
                    })),
            )
            .child(div().flex().gap(px(12.)).children(SIZES.map(|size| {
                let view = view.clone();

                RadioButton::new(format!("size-{size}"), size)
                    .name("size")
                    .checked(self.size.as_ref() == size)
                    .invalid(!self.terms)
                    .on_change(move |checked, value, _event, _window, cx| {
                        if *checked {
                            view.update(cx, |view, cx| {
                                view.size = value.clone();
                                cx.notify();
                            });
                        }
                    })
            })))
            .child({
                let view = view.clone();

                RadioButton::new("size-custom", "custom")
                    .name("size")
                    .button(true)
                    .checked(self.size.as_ref() == "custom")
                    .indeterminate(!self.terms)
                    .on_change(move |checked, value, _event, _window, cx| {
                        if *checked {
                            view.update(cx, |view, cx| {
                                view.size = value.clone();
                                cx.notify();
                            });
                        }
                    })
                    .child("Custom size")
            })
            .child(div().flex().gap(px(12.)).children(SHIPPING.map(|option| {
                let view = view.clone();
                let write = self.binding.radio("shipping");

                RadioButton::new(format!("shipping-{option}"), option)
                    .name("shipping")
                    .checked(shipping.as_deref() == Some(option))
                    .on_change(move |checked, value, event, window, cx| {
                        write(checked, value, event, window, cx);
                        view.update(cx, |_, cx| cx.notify());
                    })
            })))
            .child({
                let write = self.binding.input("newsletter", BindingKind::Checkbox);

                FormInput::input("newsletter", InputType::Checkbox)
                    .checked(form.bool("newsletter"))
                    .optional(true)
                    .on_change(move |event, window, cx| {
                        write(event, window, cx);
                        view.update(cx, |_, cx| cx.notify());
                    })
            })
            .child(
                div()
                    .id("sort-header")
                    .flex()
                    .items_center()
                    .cursor_pointer()
                    .child("Name")
                    .child(
                        SortCarets::new()
                            .enable_up(self.ascending)
                            .enable_down(!self.ascending),
                    )
                    .on_click(cx.listener(|view, _, _window, cx| {
                        view.ascending = !view.ascending;
                        cx.notify();
                    })),
            )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![FormworkAssets])
        .run(|cx: &mut App| {
            gpui_formwork::init(cx);

            cx.set_menus(vec![Menu {
                name: "Formwork".into(),
                items: vec![],
            }]);

            cx.set_theme(Theme::bundled());

            let bounds = Bounds::centered(None, size(px(620.), px(800.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|cx| Showcase {
                        focus_handle: cx.focus_handle(),
                        binding: FormBinding::new(Rc::new(DemoForm::default())),
                        size: "medium".into(),
                        color: "red".into(),
                        terms: false,
                        ascending: true,
                    })
                },
            )
            .unwrap();

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([
        KeyBinding::new("tab", TabNext, None),
        KeyBinding::new("shift-tab", TabPrev, None),
    ]);
}
