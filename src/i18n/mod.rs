//! Internationalization (i18n) module: language selection and translation
//! bundles.
//!
//! # Architecture
//!
//! - `selector`: The language selector (current/default language, deferred changes)
//! - `observers`: Broadcast list for "language changed" notifications
//! - `preferred`: Host preferred-language signal and accepted tags
//! - `catalog`: Translation catalog trait and the default in-memory catalog
//! - `loader`: Bundle loaders (embedded base bundle + HTTP)
//! - `bundle`: Flattened key → string bundles and `{{param}}` interpolation
//! - `registry`: Supported language set
//! - `validator`: Bundle validation against the base bundle
//! - `metrics`: Catalog lookup and load counters
//!
//! # Example
//!
//! ```rust,ignore
//! use app_translation::i18n::*;
//!
//! let catalog = Catalog::new(HttpBundleLoader::from_config(&config));
//! let mut selector = LanguageSelector::new(
//!     catalog,
//!     Box::new(SystemLocale),
//!     SelectorOptions::from_config(&config),
//! )?;
//!
//! selector.subscribe(|tag| println!("now showing {}", tag));
//! selector.change_language(Some("vi-VN"))?;
//! selector.run_pending().await;
//! ```

mod bundle;
mod catalog;
mod language;
mod loader;
mod metrics;
mod observers;
mod preferred;
mod registry;
mod selector;
mod validator;

pub use bundle::{interpolate, Bundle, Params};
pub use catalog::{Catalog, TranslationCatalog};
pub use language::LanguageTag;
pub use loader::{BundleLoader, HttpBundleLoader, StaticBundleLoader};
pub use metrics::{CatalogMetrics, MetricsReport};
pub use observers::{LanguageObservers, SubscriptionId};
pub use preferred::{
    FixedLanguage, PreferredLanguageSource, PreferredPatterns, SystemLocale,
    DEFAULT_PREFERRED_PATTERNS,
};
pub use registry::SupportedLanguages;
pub use selector::{LanguageSelector, SelectorOptions};
pub use validator::{BundleValidator, ValidationReport};
