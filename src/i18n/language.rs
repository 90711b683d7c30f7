//! Language tag: the identifier of a display language.
//!
//! A `LanguageTag` is never empty. Places that accept "no language" use
//! `Option<LanguageTag>`, and empty strings are normalised to `None` by
//! [`LanguageTag::new`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty locale identifier (e.g., "en-US", "vi-VN").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag from a string.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Returns
    /// * `Some(LanguageTag)` for a non-empty value
    /// * `None` if the value is empty or only whitespace
    pub fn new(tag: impl AsRef<str>) -> Option<LanguageTag> {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            None
        } else {
            Some(LanguageTag(tag.to_string()))
        }
    }

    /// Parse a comma-separated list of tags, skipping empty entries.
    ///
    /// # Example
    /// ```ignore
    /// let tags = LanguageTag::parse_list("en-US, vi-VN,,zh-CN");
    /// assert_eq!(tags.len(), 3);
    /// ```
    pub fn parse_list(list: &str) -> Vec<LanguageTag> {
        list.split(',').filter_map(LanguageTag::new).collect()
    }

    /// Build a tag from a compile-time constant. `tag` must not be empty.
    pub(crate) fn from_static(tag: &'static str) -> LanguageTag {
        debug_assert!(!tag.trim().is_empty());
        LanguageTag(tag.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
