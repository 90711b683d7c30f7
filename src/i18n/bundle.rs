//! Translation bundles: flat key → string maps parsed from JSON.
//!
//! Nested objects are flattened with `.` separators, so
//! `{"menu": {"open": "Open"}}` yields the key `menu.open`.

use crate::error::LocaleError;
use crate::i18n::LanguageTag;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Interpolation parameters, keyed by placeholder name.
pub type Params = HashMap<String, String>;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `{{name}}` and `{{ name }}`.
pub(crate) fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.\-]+)\s*\}\}").unwrap())
}

/// A loaded translation bundle for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: HashMap<String, String>,
}

impl Bundle {
    /// Build a bundle from a parsed JSON document.
    ///
    /// Strings are kept as-is, numbers and booleans are stringified, and
    /// arrays and nulls are skipped.
    ///
    /// # Errors
    /// `LocaleError::InvalidBundle` if the root is not a JSON object.
    pub fn from_json(tag: &LanguageTag, value: Value) -> Result<Self, LocaleError> {
        let Value::Object(map) = value else {
            return Err(LocaleError::InvalidBundle {
                tag: tag.to_string(),
                reason: "root must be a JSON object".to_string(),
            });
        };

        let mut entries = HashMap::new();
        flatten_into("", &map, &mut entries);
        Ok(Self { entries })
    }

    /// Parse a bundle from raw JSON bytes.
    pub fn from_slice(tag: &LanguageTag, bytes: &[u8]) -> Result<Self, LocaleError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_json(tag, value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn flatten_into(prefix: &str, map: &Map<String, Value>, out: &mut HashMap<String, String>) {
    for (key, value) in map {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::String(s) => {
                out.insert(full_key, s.clone());
            }
            Value::Number(n) => {
                out.insert(full_key, n.to_string());
            }
            Value::Bool(b) => {
                out.insert(full_key, b.to_string());
            }
            Value::Object(nested) => flatten_into(&full_key, nested, out),
            Value::Array(_) | Value::Null => {}
        }
    }
}

/// Replace `{{name}}` placeholders with values from `params`.
///
/// Placeholders without a matching parameter are left untouched.
pub fn interpolate(template: &str, params: Option<&Params>) -> String {
    let Some(params) = params else {
        return template.to_string();
    };

    placeholder_regex()
        .replace_all(template, |caps: &regex::Captures| {
            params
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
