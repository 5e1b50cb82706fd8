use gpui::{CursorStyle, FontWeight, Pixels, Rgba, Styled};

/// How an element is taken out of (or kept in) the normal layout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePosition {
    /// Laid out normally, then moved by its insets.
    Relative,
    Absolute,
}

/// A single style rule: every property is optional, unset properties leave
/// the element's own styling alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRule {
    pub hidden: Option<bool>,
    pub position: Option<RulePosition>,
    pub top: Option<Pixels>,
    pub right: Option<Pixels>,
    pub bottom: Option<Pixels>,
    pub left: Option<Pixels>,
    pub margin_top: Option<Pixels>,
    pub margin_right: Option<Pixels>,
    pub margin_left: Option<Pixels>,
    pub padding_x: Option<Pixels>,
    pub padding_y: Option<Pixels>,
    pub width: Option<Pixels>,
    pub height: Option<Pixels>,
    pub background: Option<Rgba>,
    pub border_width: Option<Pixels>,
    pub border_color: Option<Rgba>,
    pub corner_radius_left: Option<Pixels>,
    pub corner_radius_right: Option<Pixels>,
    pub text_color: Option<Rgba>,
    pub text_size: Option<Pixels>,
    pub font_weight: Option<FontWeight>,
    pub opacity: Option<f32>,
    pub cursor: Option<CursorStyle>,
}

macro_rules! style_rule_properties {
    ($( $field:ident : $ty:ty ),+ $(,)?) => {
        impl StyleRule {
            $(
                pub fn $field(mut self, $field: impl Into<$ty>) -> Self {
                    self.$field = Some($field.into());
                    self
                }
            )+

            /// Overlays `other` onto this rule. Properties set in `other` win.
            pub fn refine(&mut self, other: &StyleRule) {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )+
            }
        }
    };
}

style_rule_properties! {
    hidden: bool,
    position: RulePosition,
    top: Pixels,
    right: Pixels,
    bottom: Pixels,
    left: Pixels,
    margin_top: Pixels,
    margin_right: Pixels,
    margin_left: Pixels,
    padding_x: Pixels,
    padding_y: Pixels,
    width: Pixels,
    height: Pixels,
    background: Rgba,
    border_width: Pixels,
    border_color: Rgba,
    corner_radius_left: Pixels,
    corner_radius_right: Pixels,
    text_color: Rgba,
    text_size: Pixels,
    font_weight: FontWeight,
    opacity: f32,
    cursor: CursorStyle,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both horizontal corner radii.
    pub fn rounded(self, radius: impl Into<Pixels>) -> Self {
        let radius = radius.into();
        self.corner_radius_left(radius).corner_radius_right(radius)
    }

    /// Offsets the element from where it would otherwise be laid out.
    pub fn relative(self) -> Self {
        self.position(RulePosition::Relative)
    }

    /// Returns this rule with `other` overlaid on top of it.
    pub fn refined(mut self, other: &StyleRule) -> Self {
        self.refine(other);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &StyleRule::default()
    }

    /// Applies every set property to a GPUI element.
    pub fn apply<E: Styled>(&self, mut element: E) -> E {
        if self.hidden == Some(true) {
            element = element.hidden();
        }

        match self.position {
            Some(RulePosition::Relative) => element = element.relative(),
            Some(RulePosition::Absolute) => element = element.absolute(),
            None => {}
        }

        if let Some(top) = self.top {
            element = element.top(top);
        }
        if let Some(right) = self.right {
            element = element.right(right);
        }
        if let Some(bottom) = self.bottom {
            element = element.bottom(bottom);
        }
        if let Some(left) = self.left {
            element = element.left(left);
        }

        if let Some(margin) = self.margin_top {
            element = element.mt(margin);
        }
        if let Some(margin) = self.margin_right {
            element = element.mr(margin);
        }
        if let Some(margin) = self.margin_left {
            element = element.ml(margin);
        }

        if let Some(padding) = self.padding_x {
            element = element.px(padding);
        }
        if let Some(padding) = self.padding_y {
            element = element.py(padding);
        }

        if let Some(width) = self.width {
            element = element.w(width);
        }
        if let Some(height) = self.height {
            element = element.h(height);
        }

        if let Some(background) = self.background {
            element = element.bg(background);
        }

        if let Some(width) = self.border_width {
            let borders = &mut element.style().border_widths;
            borders.top = Some(width.into());
            borders.right = Some(width.into());
            borders.bottom = Some(width.into());
            borders.left = Some(width.into());
        }
        if let Some(color) = self.border_color {
            element = element.border_color(color);
        }

        if let Some(radius) = self.corner_radius_left {
            let corners = &mut element.style().corner_radii;
            corners.top_left = Some(radius.into());
            corners.bottom_left = Some(radius.into());
        }
        if let Some(radius) = self.corner_radius_right {
            let corners = &mut element.style().corner_radii;
            corners.top_right = Some(radius.into());
            corners.bottom_right = Some(radius.into());
        }

        if let Some(color) = self.text_color {
            element = element.text_color(color);
        }
        if let Some(size) = self.text_size {
            element = element.text_size(size);
        }
        if let Some(weight) = self.font_weight {
            element = element.font_weight(weight);
        }

        if let Some(opacity) = self.opacity {
            element = element.opacity(opacity);
        }
        if let Some(cursor) = self.cursor {
            element = element.cursor(cursor);
        }

        element
    }
}
