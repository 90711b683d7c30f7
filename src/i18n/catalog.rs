//! Translation catalog: bundle storage, activation and key lookup.
//!
//! The language selector talks to the catalog only through the
//! [`TranslationCatalog`] trait, so the storage can be swapped without
//! affecting selection semantics. [`Catalog`] is the default
//! implementation, backed by any [`BundleLoader`].

use crate::error::LocaleError;
use crate::i18n::bundle::{interpolate, Bundle, Params};
use crate::i18n::{
    BundleLoader, BundleValidator, CatalogMetrics, LanguageTag, SupportedLanguages,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Collaborator owning supported languages, activation and lookup.
#[allow(async_fn_in_trait)]
pub trait TranslationCatalog {
    /// Replace the set of supported languages.
    fn set_languages(&mut self, tags: &[LanguageTag]);

    fn set_default_language(&mut self, tag: LanguageTag);

    fn default_language(&self) -> Option<&LanguageTag>;

    fn current_language(&self) -> Option<&LanguageTag>;

    fn languages(&self) -> &[LanguageTag];

    /// Make `tag` the current language, loading its bundle if needed.
    ///
    /// On failure the current language is left unchanged.
    async fn activate(&mut self, tag: &LanguageTag) -> Result<(), LocaleError>;

    /// Look up an already-loaded value. Unknown keys return the key itself.
    fn instant(&self, key: &str, params: Option<&Params>) -> String;

    /// Look up a value, loading the current language's bundle first if needed.
    async fn get(&mut self, key: &str, params: Option<&Params>) -> Result<String, LocaleError>;
}

/// Default catalog keeping every loaded bundle in memory.
pub struct Catalog<L> {
    loader: L,
    languages: SupportedLanguages,
    default_language: Option<LanguageTag>,
    current_language: Option<LanguageTag>,
    bundles: HashMap<LanguageTag, Bundle>,
    metrics: CatalogMetrics,
}

impl<L: BundleLoader> Catalog<L> {
    /// Create an empty catalog on top of `loader`.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            languages: SupportedLanguages::default(),
            default_language: None,
            current_language: None,
            bundles: HashMap::new(),
            metrics: CatalogMetrics::new(),
        }
    }

    /// Get this catalog's counters.
    pub fn metrics(&self) -> &CatalogMetrics {
        &self.metrics
    }

    /// Check if a bundle for `tag` has been loaded.
    pub fn is_loaded(&self, tag: &LanguageTag) -> bool {
        self.bundles.contains_key(tag)
    }

    /// Load the bundle for `tag` unless it is already in memory.
    pub async fn preload(&mut self, tag: &LanguageTag) -> Result<(), LocaleError> {
        if self.bundles.contains_key(tag) {
            return Ok(());
        }

        self.metrics.record_bundle_load();
        let bundle = match self.loader.load(tag).await {
            Ok(bundle) => bundle,
            Err(e) => {
                self.metrics.record_load_failure();
                return Err(e);
            }
        };

        self.check_against_default(tag, &bundle);
        info!("Loaded translation bundle for {} ({} keys)", tag, bundle.len());
        self.bundles.insert(tag.clone(), bundle);
        Ok(())
    }

    fn check_against_default(&self, tag: &LanguageTag, bundle: &Bundle) {
        let Some(default) = &self.default_language else {
            return;
        };
        if default == tag {
            return;
        }
        let Some(base) = self.bundles.get(default) else {
            return;
        };

        let report = BundleValidator::validate(base, bundle);
        if report.has_warnings() {
            warn!(
                "Translation bundle {} differs from {}: {:?}",
                tag, default, report.warnings
            );
        }
        if report.has_errors() {
            warn!(
                "Translation bundle {} has placeholder errors: {:?}",
                tag, report.errors
            );
        }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        let in_current = self
            .current_language
            .as_ref()
            .and_then(|tag| self.bundles.get(tag))
            .and_then(|bundle| bundle.get(key));

        in_current.or_else(|| {
            self.default_language
                .as_ref()
                .and_then(|tag| self.bundles.get(tag))
                .and_then(|bundle| bundle.get(key))
        })
    }
}

impl<L: BundleLoader> TranslationCatalog for Catalog<L> {
    fn set_languages(&mut self, tags: &[LanguageTag]) {
        self.languages.replace(tags.iter().cloned());
    }

    fn set_default_language(&mut self, tag: LanguageTag) {
        self.default_language = Some(tag);
    }

    fn default_language(&self) -> Option<&LanguageTag> {
        self.default_language.as_ref()
    }

    fn current_language(&self) -> Option<&LanguageTag> {
        self.current_language.as_ref()
    }

    fn languages(&self) -> &[LanguageTag] {
        self.languages.as_slice()
    }

    async fn activate(&mut self, tag: &LanguageTag) -> Result<(), LocaleError> {
        // The default bundle backs every lookup and is the validation base
        if let Some(default) = self.default_language.clone() {
            if &default != tag {
                if let Err(e) = self.preload(&default).await {
                    warn!("Failed to load default language {}: {}", default, e);
                }
            }
        }

        self.preload(tag).await?;
        self.current_language = Some(tag.clone());
        debug!("Activated language {}", tag);
        Ok(())
    }

    fn instant(&self, key: &str, params: Option<&Params>) -> String {
        self.metrics.record_lookup();
        match self.lookup(key) {
            Some(text) => interpolate(text, params),
            None => {
                self.metrics.record_miss();
                debug!("Missing translation for key '{}'", key);
                key.to_string()
            }
        }
    }

    async fn get(&mut self, key: &str, params: Option<&Params>) -> Result<String, LocaleError> {
        if let Some(tag) = self.current_language.clone() {
            self.preload(&tag).await?;
        }
        Ok(self.instant(key, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::StaticBundleLoader;

    fn tag(code: &str) -> LanguageTag {
        LanguageTag::new(code).unwrap()
    }

    fn bundle(pairs: &[(&str, &str)]) -> Bundle {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn test_catalog() -> Catalog<StaticBundleLoader> {
        let loader = StaticBundleLoader::new()
            .with_bundle(
                tag("en-US"),
                bundle(&[("hello", "Hello"), ("bye", "Goodbye"), ("greet", "Hi {{name}}")]),
            )
            .with_bundle(
                tag("vi-VN"),
                bundle(&[("hello", "Xin chào"), ("greet", "Chào {{name}}")]),
            );

        let mut catalog = Catalog::new(loader);
        catalog.set_languages(&[tag("en-US"), tag("vi-VN"), tag("zh-CN")]);
        catalog.set_default_language(tag("en-US"));
        catalog
    }

    // ==================== Language State Tests ====================

    #[test]
    fn test_initial_state() {
        let catalog = test_catalog();
        assert_eq!(catalog.default_language(), Some(&tag("en-US")));
        assert!(catalog.current_language().is_none());
        assert_eq!(catalog.languages().len(), 3);
    }

    #[test]
    fn test_set_languages_replaces() {
        let mut catalog = test_catalog();
        catalog.set_languages(&[tag("vi-VN")]);
        assert_eq!(catalog.languages(), &[tag("vi-VN")]);
    }

    // ==================== Activation Tests ====================

    #[tokio::test]
    async fn test_activate_loads_bundle_and_sets_current() {
        let mut catalog = test_catalog();

        catalog.activate(&tag("vi-VN")).await.expect("Should activate");

        assert_eq!(catalog.current_language(), Some(&tag("vi-VN")));
        assert!(catalog.is_loaded(&tag("vi-VN")));
        assert!(catalog.is_loaded(&tag("en-US")));
        assert_eq!(catalog.metrics().bundle_loads(), 2);
    }

    #[tokio::test]
    async fn test_activate_without_default_bundle_still_switches() {
        let loader = StaticBundleLoader::new()
            .with_bundle(tag("vi-VN"), bundle(&[("hello", "Xin chào")]));
        let mut catalog = Catalog::new(loader);
        catalog.set_default_language(tag("en-US"));

        catalog.activate(&tag("vi-VN")).await.expect("Should activate");

        assert_eq!(catalog.current_language(), Some(&tag("vi-VN")));
        assert_eq!(catalog.instant("hello", None), "Xin chào");
        assert_eq!(catalog.metrics().load_failures(), 1);
    }

    #[tokio::test]
    async fn test_activate_reuses_loaded_bundle() {
        let mut catalog = test_catalog();

        catalog.activate(&tag("en-US")).await.unwrap();
        catalog.activate(&tag("vi-VN")).await.unwrap();
        catalog.activate(&tag("en-US")).await.unwrap();

        assert_eq!(catalog.metrics().bundle_loads(), 2);
    }

    #[tokio::test]
    async fn test_activate_failure_keeps_current() {
        let mut catalog = test_catalog();
        catalog.activate(&tag("en-US")).await.unwrap();

        let result = catalog.activate(&tag("zh-CN")).await;

        assert!(result.is_err());
        assert_eq!(catalog.current_language(), Some(&tag("en-US")));
        assert_eq!(catalog.metrics().load_failures(), 1);
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_instant_before_activation_returns_key() {
        let catalog = test_catalog();
        assert_eq!(catalog.instant("hello", None), "hello");
        assert_eq!(catalog.metrics().misses(), 1);
    }

    #[tokio::test]
    async fn test_instant_uses_current_bundle() {
        let mut catalog = test_catalog();
        catalog.activate(&tag("vi-VN")).await.unwrap();

        assert_eq!(catalog.instant("hello", None), "Xin chào");
    }

    #[tokio::test]
    async fn test_instant_falls_back_to_default_bundle() {
        let mut catalog = test_catalog();
        catalog.activate(&tag("vi-VN")).await.unwrap();

        assert_eq!(catalog.instant("bye", None), "Goodbye");
    }

    #[tokio::test]
    async fn test_instant_interpolates() {
        let mut catalog = test_catalog();
        catalog.activate(&tag("vi-VN")).await.unwrap();

        let params: Params = [("name".to_string(), "Minh".to_string())].into_iter().collect();
        assert_eq!(catalog.instant("greet", Some(&params)), "Chào Minh");
    }

    #[tokio::test]
    async fn test_get_without_current_language() {
        let mut catalog = test_catalog();
        let text = catalog.get("hello", None).await.unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_get_returns_loaded_value() {
        let mut catalog = test_catalog();
        catalog.activate(&tag("en-US")).await.unwrap();

        let text = catalog.get("hello", None).await.unwrap();
        assert_eq!(text, "Hello");
        assert_eq!(catalog.metrics().lookups(), 1);
    }
}
