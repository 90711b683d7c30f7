//! Bundle loaders.
//!
//! `HttpBundleLoader` serves the base language from a bundle compiled into
//! the binary and fetches every other language from
//! `<base-url>/<tag>.json`. `StaticBundleLoader` serves preloaded bundles
//! from memory.

use crate::config::Config;
use crate::error::LocaleError;
use crate::i18n::{Bundle, LanguageTag};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use tracing::debug;

/// Source of translation bundles for a language tag.
#[allow(async_fn_in_trait)]
pub trait BundleLoader {
    async fn load(&self, tag: &LanguageTag) -> Result<Bundle, LocaleError>;
}

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct EmbeddedBundles;

/// Loads bundles over HTTP, except for the embedded base language.
#[derive(Debug, Clone)]
pub struct HttpBundleLoader {
    client: reqwest::Client,
    base_url: String,
    embedded_language: LanguageTag,
}

impl HttpBundleLoader {
    /// Create a loader.
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `base_url` - Directory URL the `<tag>.json` files live under
    /// * `embedded_language` - Tag served from the compiled-in bundle
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        embedded_language: LanguageTag,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            embedded_language,
        }
    }

    /// Create a loader from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            reqwest::Client::new(),
            config.bundle_base_url.clone(),
            config.embedded_language.clone(),
        )
    }

    /// URL a tag's bundle is fetched from.
    pub fn bundle_url(&self, tag: &LanguageTag) -> String {
        format!("{}/{}.json", self.base_url, tag)
    }

    /// Tag served from the compiled-in bundle.
    pub fn embedded_language(&self) -> &LanguageTag {
        &self.embedded_language
    }

    fn load_embedded(&self, tag: &LanguageTag) -> Result<Bundle, LocaleError> {
        let file = EmbeddedBundles::get(&format!("{}.json", tag))
            .ok_or_else(|| LocaleError::EmbeddedBundleMissing(tag.to_string()))?;
        Bundle::from_slice(tag, file.data.as_ref())
    }

    async fn fetch(&self, tag: &LanguageTag) -> Result<Bundle, LocaleError> {
        let url = self.bundle_url(tag);
        debug!("Fetching translation bundle from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LocaleError::FetchStatus {
                tag: tag.to_string(),
                status: response.status(),
            });
        }

        let body = response.bytes().await?;
        Bundle::from_slice(tag, &body)
    }
}

impl BundleLoader for HttpBundleLoader {
    async fn load(&self, tag: &LanguageTag) -> Result<Bundle, LocaleError> {
        if *tag == self.embedded_language {
            debug!("Serving embedded translation bundle for {}", tag);
            return self.load_embedded(tag);
        }
        self.fetch(tag).await
    }
}

/// Serves bundles that were built ahead of time.
#[derive(Debug, Clone, Default)]
pub struct StaticBundleLoader {
    bundles: HashMap<LanguageTag, Bundle>,
}

impl StaticBundleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bundle served for `tag`.
    pub fn with_bundle(mut self, tag: LanguageTag, bundle: Bundle) -> Self {
        self.bundles.insert(tag, bundle);
        self
    }
}

impl BundleLoader for StaticBundleLoader {
    async fn load(&self, tag: &LanguageTag) -> Result<Bundle, LocaleError> {
        self.bundles
            .get(tag)
            .cloned()
            .ok_or_else(|| LocaleError::InvalidBundle {
                tag: tag.to_string(),
                reason: "no bundle registered".to_string(),
            })
    }
}
