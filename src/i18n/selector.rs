//! Language selector: holds the current and default language, validates
//! changes and broadcasts change events.
//!
//! # Deferred changes
//!
//! `change_language` never touches the catalog. It resolves the tag, returns
//! it immediately and, when the tag differs from the current language,
//! queues a deferred change. The driver calls [`LanguageSelector::run_pending`]
//! once the current synchronous work is done; queued changes then run in
//! the order they were scheduled. Each one compares against the current
//! language *at the time it runs*, activates the tag in the catalog and
//! notifies observers. Callers must not assume the catalog has switched
//! languages when `change_language` returns.

use crate::config::Config;
use crate::error::LocaleError;
use crate::i18n::bundle::Params;
use crate::i18n::{
    LanguageObservers, LanguageTag, PreferredLanguageSource, PreferredPatterns, SubscriptionId,
    SupportedLanguages, TranslationCatalog,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

const DEFAULT_SUPPORTED_LANGUAGES: [&str; 3] = ["en-US", "vi-VN", "zh-CN"];
const DEFAULT_LANGUAGE: &str = "en-US";

/// Construction-time settings for a [`LanguageSelector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOptions {
    pub supported_languages: Vec<LanguageTag>,
    pub default_language: LanguageTag,
    pub preferred_patterns: PreferredPatterns,

    /// Reject tags outside the supported set instead of forwarding them
    pub strict: bool,
}

impl SelectorOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            supported_languages: config.supported_languages.clone(),
            default_language: config.default_language.clone(),
            preferred_patterns: config.preferred_patterns.clone(),
            strict: config.strict_language_validation,
        }
    }
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            supported_languages: DEFAULT_SUPPORTED_LANGUAGES
                .into_iter()
                .map(LanguageTag::from_static)
                .collect(),
            default_language: LanguageTag::from_static(DEFAULT_LANGUAGE),
            preferred_patterns: PreferredPatterns::default(),
            strict: false,
        }
    }
}

/// Selects the active display language on top of a [`TranslationCatalog`].
pub struct LanguageSelector<C> {
    catalog: C,
    preferred_source: Box<dyn PreferredLanguageSource + Send>,
    preferred_patterns: PreferredPatterns,
    strict: bool,
    observers: LanguageObservers,
    queue_tx: UnboundedSender<LanguageTag>,
    queue_rx: UnboundedReceiver<LanguageTag>,
}

impl<C: TranslationCatalog> LanguageSelector<C> {
    /// Create a selector, registering the supported set and default
    /// language from `options` with the catalog.
    ///
    /// # Errors
    /// * `EmptySupportedSet` if no supported languages are given
    /// * `UnsupportedLanguage` in strict mode, if the default is not supported
    pub fn new(
        catalog: C,
        preferred_source: Box<dyn PreferredLanguageSource + Send>,
        options: SelectorOptions,
    ) -> Result<Self, LocaleError> {
        let (queue_tx, queue_rx) = mpsc::unbounded_channel();

        let mut selector = Self {
            catalog,
            preferred_source,
            preferred_patterns: options.preferred_patterns,
            strict: options.strict,
            observers: LanguageObservers::new(),
            queue_tx,
            queue_rx,
        };

        selector.register_supported_languages(options.supported_languages)?;
        selector.set_default_language(options.default_language)?;
        Ok(selector)
    }

    // ==================== Supported Set and Default ====================

    /// Record the supported set. The last call is authoritative.
    ///
    /// # Errors
    /// * `EmptySupportedSet` if `tags` is empty
    /// * `UnsupportedLanguage` in strict mode, if the set leaves out the
    ///   current default language; the previous set is kept
    pub fn register_supported_languages<I>(&mut self, tags: I) -> Result<(), LocaleError>
    where
        I: IntoIterator<Item = LanguageTag>,
    {
        let supported = SupportedLanguages::new(tags);
        if supported.is_empty() {
            return Err(LocaleError::EmptySupportedSet);
        }

        if self.strict {
            if let Some(default) = self.catalog.default_language() {
                if !supported.contains(default.as_str()) {
                    return Err(LocaleError::UnsupportedLanguage(default.to_string()));
                }
            }
        }

        debug!("Registering {} supported languages", supported.len());
        self.catalog.set_languages(supported.as_slice());
        Ok(())
    }

    /// Record the fallback language.
    ///
    /// Only strict mode checks membership in the supported set.
    pub fn set_default_language(&mut self, tag: LanguageTag) -> Result<(), LocaleError> {
        self.ensure_allowed(&tag)?;
        self.catalog.set_default_language(tag);
        Ok(())
    }

    /// The fallback language, if one has been recorded.
    pub fn default_language(&self) -> Option<LanguageTag> {
        self.catalog.default_language().cloned()
    }

    /// The active language, or `None` before the first deferred change ran.
    pub fn current_language(&self) -> Option<LanguageTag> {
        self.catalog.current_language().cloned()
    }

    /// The registered supported set, in registration order.
    pub fn loaded_languages(&self) -> Vec<LanguageTag> {
        self.catalog.languages().to_vec()
    }

    /// Check if a tag is in the registered supported set.
    pub fn is_supported(&self, tag: &LanguageTag) -> bool {
        self.catalog.languages().contains(tag)
    }

    /// Whether unsupported tags are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn ensure_allowed(&self, tag: &LanguageTag) -> Result<(), LocaleError> {
        if self.strict && !self.is_supported(tag) {
            return Err(LocaleError::UnsupportedLanguage(tag.to_string()));
        }
        Ok(())
    }

    // ==================== Changing Language ====================

    /// Switch to the host's preferred language if it is accepted.
    ///
    /// # Returns
    /// * `Some(tag)` if the host value matched and a change was requested
    /// * `None` otherwise; nothing is changed
    pub fn detect_preferred_language(&self) -> Option<LanguageTag> {
        let candidate = self.preferred_source.preferred_language()?;

        let Some(tag) = self
            .preferred_patterns
            .matches(&candidate, self.catalog.languages())
        else {
            debug!("Preferred language '{}' is not accepted", candidate);
            return None;
        };

        match self.change_language(Some(tag.as_str())) {
            Ok(tag) => Some(tag),
            Err(e) => {
                warn!("Ignoring preferred language '{}': {}", candidate, e);
                None
            }
        }
    }

    /// Same as `change_language(None)`.
    pub fn reset_to_default_language(&self) -> Result<LanguageTag, LocaleError> {
        self.change_language(None)
    }

    /// Request a language change and return the resolved tag.
    ///
    /// `None` or an empty string resolves to the default language. When the
    /// resolved tag differs from the current language a deferred change is
    /// queued; see the module docs.
    ///
    /// # Errors
    /// * `NoDefaultLanguage` if `tag` is empty and no default is set
    /// * `UnsupportedLanguage` in strict mode, if the tag is not supported
    pub fn change_language(&self, tag: Option<&str>) -> Result<LanguageTag, LocaleError> {
        let resolved = match tag.and_then(LanguageTag::new) {
            Some(tag) => tag,
            None => self.default_language().ok_or(LocaleError::NoDefaultLanguage)?,
        };

        self.ensure_allowed(&resolved)?;

        if self.catalog.current_language() != Some(&resolved) {
            debug!("Scheduling language change to {}", resolved);
            // The receiver lives as long as `self`, so sending cannot fail
            let _ = self.queue_tx.send(resolved.clone());
        }

        Ok(resolved)
    }

    /// Number of deferred changes waiting for `run_pending`.
    pub fn pending_changes(&self) -> usize {
        self.queue_rx.len()
    }

    /// Run every queued change in scheduling order.
    ///
    /// # Returns
    /// The number of changes that took effect (and were broadcast).
    pub async fn run_pending(&mut self) -> usize {
        let mut applied = 0;

        while let Ok(tag) = self.queue_rx.try_recv() {
            if self.apply_change(tag).await {
                applied += 1;
            }
        }

        applied
    }

    async fn apply_change(&mut self, tag: LanguageTag) -> bool {
        if self.catalog.current_language() == Some(&tag) {
            debug!("Language {} is already active, skipping", tag);
            return false;
        }

        if let Err(e) = self.catalog.activate(&tag).await {
            warn!("Failed to activate language {}: {}", tag, e);
        }

        info!("Language changed to {}", tag);
        self.observers.notify(&tag);
        true
    }

    // ==================== Observers ====================

    /// Register an observer for every language change that takes effect.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&LanguageTag) + Send + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Receive language changes through a channel.
    pub fn subscribe_channel(&mut self) -> UnboundedReceiver<LanguageTag> {
        self.observers.subscribe_channel()
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ==================== Lookup ====================

    /// Synchronous lookup of an already-loaded value.
    pub fn lookup_text(&self, key: &str, params: Option<&Params>) -> String {
        self.catalog.instant(key, params)
    }

    /// Lookup that may fetch the current language's bundle first.
    pub async fn lookup_text_async(
        &mut self,
        key: &str,
        params: Option<&Params>,
    ) -> Result<String, LocaleError> {
        self.catalog.get(key, params).await
    }

    /// Get the underlying catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
