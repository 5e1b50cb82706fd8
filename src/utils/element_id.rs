use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;

    /// Child id for the `index`th item of a repeated part, e.g. an option row.
    fn with_index(&self, suffix: impl Into<SharedString>, index: usize) -> ElementId {
        ElementId::NamedInteger(self.with_suffix(suffix).to_string().into(), index as u64)
    }
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}
