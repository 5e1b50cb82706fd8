use gpui::{FocusHandle, IntoElement, Pixels, RenderOnce, prelude::*, px};
use gpui_squircle::{SquircleStyleRefinement, SquircleStyled, squircle};

use crate::{theme::ThemeExt, utils::RgbaExt};

const RING_WIDTH: f32 = 3.;
const RING_OPACITY: f32 = 0.3;

/// Outline drawn around a focusable control while it has keyboard focus.
/// Renders nothing visible otherwise.
#[derive(IntoElement)]
pub struct FocusRing {
    focus_handle: FocusHandle,
    invalid: bool,
    style: SquircleStyleRefinement,
}

impl FocusRing {
    pub fn new(focus_handle: FocusHandle) -> Self {
        Self {
            focus_handle,
            invalid: false,
            style: SquircleStyleRefinement::default(),
        }
    }

    /// Draws the ring in the error color.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl SquircleStyled for FocusRing {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style.inner
    }

    fn outer_style(&mut self) -> &mut SquircleStyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = &cx.get_theme().color;
        let color = if self.invalid {
            colors.core.danger[4]
        } else {
            colors.accent.border_active
        };
        let radius = cx.get_theme().layout.corner_radii.sm;
        let is_focused = self.focus_handle.is_focused(window);

        squircle()
            .absolute()
            .top_0()
            .bottom_0()
            .left_0()
            .right_0()
            .inset(px(-1.))
            .border(px(RING_WIDTH))
            .border_outside()
            .rounded(radius + px(1.))
            .border_color(color.alpha(if is_focused { RING_OPACITY } else { 0. }))
            .map(|mut this| {
                if let Some(corner_radii) = widen(&self.style) {
                    this.outer_style().corner_radii = corner_radii;
                }
                this
            })
    }
}

/// Grows any caller-set corner radii by the ring's offset.
fn widen(style: &SquircleStyleRefinement) -> Option<gpui::CornersRefinement<Pixels>> {
    let radii = &style.corner_radii;
    if radii.top_left.is_none()
        && radii.top_right.is_none()
        && radii.bottom_right.is_none()
        && radii.bottom_left.is_none()
    {
        return None;
    }

    let grow = |radius: Option<Pixels>| radius.map(|radius| radius + px(1.));
    Some(gpui::CornersRefinement {
        top_left: grow(radii.top_left),
        top_right: grow(radii.top_right),
        bottom_right: grow(radii.bottom_right),
        bottom_left: grow(radii.bottom_left),
    })
}
