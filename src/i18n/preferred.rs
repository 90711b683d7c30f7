//! Host preferred-language signal and the tags accepted from it.

use crate::i18n::LanguageTag;

/// Tags accepted from the host signal unless configured otherwise.
pub const DEFAULT_PREFERRED_PATTERNS: [&str; 3] = ["en-US", "vi-VN", "zh-CN"];

/// Read-only accessor for the host's preferred display language.
pub trait PreferredLanguageSource {
    fn preferred_language(&self) -> Option<String>;
}

/// Operating system locale, as reported by `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl PreferredLanguageSource for SystemLocale {
    fn preferred_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A fixed value, e.g. from configuration.
#[derive(Debug, Clone, Default)]
pub struct FixedLanguage(Option<String>);

impl FixedLanguage {
    pub fn new(tag: Option<String>) -> Self {
        Self(tag)
    }

    pub fn unset() -> Self {
        Self(None)
    }
}

impl From<&str> for FixedLanguage {
    fn from(tag: &str) -> Self {
        Self(Some(tag.to_string()))
    }
}

impl PreferredLanguageSource for FixedLanguage {
    fn preferred_language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Which host values `detect_preferred_language` accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferredPatterns {
    /// Exactly these tags.
    Listed(Vec<LanguageTag>),
    /// Any tag in the live supported set.
    SupportedSet,
}

impl Default for PreferredPatterns {
    fn default() -> Self {
        Self::Listed(
            DEFAULT_PREFERRED_PATTERNS
                .iter()
                .filter_map(LanguageTag::new)
                .collect(),
        )
    }
}

impl PreferredPatterns {
    /// Parse a configured pattern list. `*` selects the supported set.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            Self::SupportedSet
        } else {
            Self::Listed(LanguageTag::parse_list(value))
        }
    }

    /// Match a host value. Matching is exact and case-sensitive.
    pub fn matches(&self, candidate: &str, supported: &[LanguageTag]) -> Option<LanguageTag> {
        let accepted = match self {
            Self::Listed(tags) => tags.as_slice(),
            Self::SupportedSet => supported,
        };
        let candidate = candidate.trim();
        accepted.iter().find(|tag| **tag == candidate).cloned()
    }
}
