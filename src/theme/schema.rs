use std::{path::Path, sync::LazyLock};

use gpui::{FontWeight, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::deserializers::{de_palette, de_pixels};

/// Number of shades in every core palette, lightest first.
pub const PALETTE_SHADES: usize = 7;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    /// Base spacing unit every offset and padding is derived from.
    #[serde(deserialize_with = "de_pixels")]
    pub unit: Pixels,
    pub layout: ThemeLayout,
    pub color: ThemeColors,
}

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("could not read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid theme: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Theme {
    /// The light theme bundled with the crate.
    pub fn bundled() -> &'static Theme {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(|| {
            Theme::from_string(include_str!("../../themes/default.json"))
                .expect("bundled theme should be valid")
        });

        &DEFAULT
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let theme = Self::from_string(contents)?;
        tracing::debug!(name = %theme.name, path = %path.as_ref().display(), "loaded theme");
        Ok(theme)
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    #[serde(deserialize_with = "de_pixels")]
    pub border_width: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_pixels")]
    pub regular: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub small: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub bold: f32,
}

impl ThemeTextWeights {
    pub fn bold(&self) -> FontWeight {
        FontWeight(self.bold)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    /// Pure base color (white in light themes).
    pub base: Rgba,
    pub core: ThemeCoreColors,
    pub accent: ThemeAccentColors,
}

/// Seven-shade palettes, indexed `0` (lightest) to `6` (darkest).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCoreColors {
    #[serde(deserialize_with = "de_palette")]
    pub neutral: SmallVec<[Rgba; PALETTE_SHADES]>,
    #[serde(deserialize_with = "de_palette")]
    pub primary: SmallVec<[Rgba; PALETTE_SHADES]>,
    /// Invalid state colors.
    #[serde(deserialize_with = "de_palette")]
    pub danger: SmallVec<[Rgba; PALETTE_SHADES]>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub bg: Rgba,
    pub bg_hover: Rgba,
    pub border: Rgba,
    pub border_active: Rgba,
    pub text: Rgba,
    pub text_disabled: Rgba,
    pub disabled: Rgba,
}
