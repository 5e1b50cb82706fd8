use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};

/// An [`AssetSource`] that asks each provider in turn, first match wins.
///
/// Lets an application serve its own assets next to the ones bundled here.
#[derive(Default)]
pub struct Assets {
    providers: Vec<Box<dyn AssetProvider>>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider(mut self, provider: impl AssetProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

/// Builds an [`Assets`] source from a list of providers.
#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new()
            $( .provider($item) )*
    };
}

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        match self.providers.iter().find_map(|provider| provider.get(path)) {
            Some(asset) => Ok(Some(asset)),
            None => {
                tracing::warn!(path, "asset not found");
                Err(anyhow!("could not find asset at path \"{path}\""))
            }
        }
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut listed = Vec::new();

        for provider in &self.providers {
            listed.extend(provider.list(path)?);
        }

        Ok(listed)
    }
}

/// A source of embedded files, queried by [`Assets`].
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static [u8]);

    impl AssetProvider for Fixed {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            (path == self.0).then_some(Cow::Borrowed(self.1))
        }

        fn list(&self, path: &str) -> Result<Vec<SharedString>> {
            Ok(self
                .0
                .starts_with(path)
                .then(|| SharedString::from(self.0))
                .into_iter()
                .collect())
        }
    }

    #[test]
    fn test_first_provider_wins() {
        let assets = crate::assets![Fixed("a.svg", b"first"), Fixed("a.svg", b"second")];

        let loaded = assets.load("a.svg").unwrap().unwrap();
        assert_eq!(loaded.as_ref(), b"first");
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let assets = crate::assets![Fixed("a.svg", b"a")];

        assert!(assets.load("b.svg").is_err());
        assert!(assets.load("").unwrap().is_none());
    }

    #[test]
    fn test_list_merges_providers() {
        let assets = crate::assets![Fixed("icons/a.svg", b"a"), Fixed("icons/b.svg", b"b")];

        assert_eq!(assets.list("icons/").unwrap().len(), 2);
        assert!(assets.list("fonts/").unwrap().is_empty());
    }
}
