use gpui::{App, Window};

use crate::{components, theme::ThemeExt};

/// Binds the keys every widget relies on. Call once at startup.
pub fn init(cx: &mut App) {
    gpui_primitives::input::init(cx);
    components::init(cx);
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
