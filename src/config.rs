use crate::i18n::{LanguageTag, PreferredPatterns};
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Bundles
    pub bundle_base_url: String,
    pub embedded_language: LanguageTag,

    // Languages
    pub supported_languages: Vec<LanguageTag>,
    pub default_language: LanguageTag,

    // Preferred language detection
    pub preferred_patterns: PreferredPatterns,
    pub preferred_language: Option<String>,

    // Validation
    pub strict_language_validation: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let supported_languages = LanguageTag::parse_list(
            &std::env::var("I18N_SUPPORTED_LANGUAGES")
                .unwrap_or_else(|_| "en-US,vi-VN,zh-CN".to_string()),
        );
        if supported_languages.is_empty() {
            bail!("I18N_SUPPORTED_LANGUAGES must list at least one language");
        }

        Ok(Self {
            // Bundles
            bundle_base_url: std::env::var("I18N_BUNDLE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4200/assets/i18n".to_string()),
            embedded_language: LanguageTag::new(
                std::env::var("I18N_EMBEDDED_LANGUAGE").unwrap_or_else(|_| "en-US".to_string()),
            )
            .context("I18N_EMBEDDED_LANGUAGE must not be empty")?,

            // Languages
            supported_languages,
            default_language: LanguageTag::new(
                std::env::var("I18N_DEFAULT_LANGUAGE").unwrap_or_else(|_| "en-US".to_string()),
            )
            .context("I18N_DEFAULT_LANGUAGE must not be empty")?,

            // Preferred language detection
            preferred_patterns: std::env::var("I18N_PREFERRED_PATTERNS")
                .map(|v| PreferredPatterns::parse(&v))
                .unwrap_or_default(),
            preferred_language: std::env::var("I18N_PREFERRED_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            // Validation
            strict_language_validation: match std::env::var("I18N_STRICT") {
                Ok(v) => parse_bool(&v).context("I18N_STRICT must be true or false")?,
                Err(_) => false,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => bail!("Invalid boolean value: '{}'", other),
    }
}
