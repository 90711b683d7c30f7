//! Supported language set.
//!
//! Holds the tags the application is prepared to display. Unlike a global
//! registry, a `SupportedLanguages` value is owned by whoever constructs it
//! (the catalog, in practice) and replaced wholesale on re-registration.

use crate::i18n::LanguageTag;

/// Ordered, duplicate-free set of supported language tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedLanguages {
    tags: Vec<LanguageTag>,
}

impl SupportedLanguages {
    /// Build a set from tags, keeping the first occurrence of each tag.
    pub fn new<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = LanguageTag>,
    {
        let mut set = Self::default();
        set.replace(tags);
        set
    }

    /// Replace the whole set. The last registration is authoritative.
    pub fn replace<I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = LanguageTag>,
    {
        self.tags.clear();
        for tag in tags {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Check if a tag is a member of the set.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Get the tags in registration order.
    pub fn as_slice(&self) -> &[LanguageTag] {
        &self.tags
    }

    /// Iterate over the tags in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageTag> {
        self.tags.iter()
    }

    /// Get the number of supported tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
