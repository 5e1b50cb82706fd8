use gpui::Rgba;

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0., 1.);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;

    #[test]
    fn test_alpha_keeps_channels() {
        let color = rgb(0x008489).alpha(0.3);

        assert_eq!(color.a, 0.3);
        assert_eq!(color.r, rgb(0x008489).r);
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(rgb(0xffffff).alpha(2.).a, 1.);
    }
}
