use thiserror::Error;

/// Errors raised while selecting languages or loading translation bundles.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// Raised only in strict mode, when a tag is outside the supported set.
    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("No default language has been set")]
    NoDefaultLanguage,

    #[error("The supported language set must not be empty")]
    EmptySupportedSet,

    #[error("Failed to fetch translation bundle: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation bundle for '{tag}' returned status {status}")]
    FetchStatus {
        tag: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse translation bundle: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid translation bundle for '{tag}': {reason}")]
    InvalidBundle { tag: String, reason: String },

    #[error("Embedded translation bundle for '{0}' not found")]
    EmbeddedBundleMissing(String),
}
