#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{Pixels, px};

use crate::{styles::{StyleClass, StyleMap}, theme::Theme};

mod input;
pub use input::*;

mod radio;
pub use radio::*;

mod sort_carets;
pub use sort_carets::*;

/// A named style map builder, one per widget family.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn build(&self, theme: &Theme) -> StyleMap)]
#[func(pub fn classes(&self) -> &'static [StyleClass])]
pub enum StyleSheet {
    /// Shared by every form control.
    #[assoc(build = input_styles(theme))]
    #[assoc(classes = INPUT_CLASSES)]
    Input,
    #[assoc(build = radio_styles(theme))]
    #[assoc(classes = RADIO_CLASSES)]
    Radio,
    #[assoc(build = sort_caret_styles(theme))]
    #[assoc(classes = SORT_CARET_CLASSES)]
    SortCarets,
}

/// `unit * factor`, for spacing expressed in theme units.
pub(crate) fn units(unit: Pixels, factor: f32) -> Pixels {
    px(unit.to_f64() as f32 * factor)
}
