use gpui::{Pixels, Rgba, px};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::PALETTE_SHADES;

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => Ok(px(pixels)),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => Ok(px(pixels)),
    }
}

pub fn de_palette<'de, D>(deserializer: D) -> Result<SmallVec<[Rgba; PALETTE_SHADES]>, D::Error>
where
    D: Deserializer<'de>,
{
    let shades = SmallVec::<[Rgba; PALETTE_SHADES]>::deserialize(deserializer)?;

    if shades.len() != PALETTE_SHADES {
        return Err(D::Error::custom(format!(
            "a palette needs exactly {PALETTE_SHADES} shades, got {}.",
            shades.len()
        )));
    }

    Ok(shades)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Pixel {
        #[serde(deserialize_with = "de_pixels")]
        value: Pixels,
    }

    #[derive(Deserialize, Debug)]
    struct Palette {
        #[serde(deserialize_with = "de_palette")]
        #[allow(dead_code)]
        shades: SmallVec<[Rgba; PALETTE_SHADES]>,
    }

    #[test]
    fn test_pixels_from_string_and_number() {
        let parsed: Pixel = serde_json::from_str(r#"{ "value": "8px" }"#).unwrap();
        assert_eq!(parsed.value, px(8.));

        let parsed: Pixel = serde_json::from_str(r#"{ "value": 12.5 }"#).unwrap();
        assert_eq!(parsed.value, px(12.5));
    }

    #[test]
    fn test_pixels_rejects_other_units() {
        assert!(serde_json::from_str::<Pixel>(r#"{ "value": "1rem" }"#).is_err());
        assert!(serde_json::from_str::<Pixel>(r#"{ "value": "tenpx" }"#).is_err());
    }

    #[test]
    fn test_palette_requires_every_shade() {
        let full = r##"{ "shades": [
            "#000000", "#111111", "#222222", "#333333", "#444444", "#555555", "#666666"
        ] }"##;
        assert!(serde_json::from_str::<Palette>(full).is_ok());

        let short = r##"{ "shades": ["#000000", "#111111"] }"##;
        let error = serde_json::from_str::<Palette>(short).unwrap_err();
        assert!(error.to_string().contains("exactly 7 shades"));
    }
}
