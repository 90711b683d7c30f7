//! Bundle validation against the base language bundle.
//!
//! A translated bundle should cover the same keys as the base bundle and
//! keep every `{{placeholder}}` of the base text, otherwise interpolated
//! values silently disappear from the UI.

use crate::i18n::bundle::{placeholder_regex, Bundle};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Placeholder mismatches (interpolated values would be lost)
    pub errors: Vec<String>,

    /// Missing or extra keys
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator comparing a translated bundle with the base bundle.
pub struct BundleValidator;

impl BundleValidator {
    /// Validate `candidate` against `base`.
    ///
    /// Checks that:
    /// - every base key exists in the candidate
    /// - the candidate has no keys unknown to the base
    /// - shared keys use the same set of placeholders
    ///
    /// Keys in the report are sorted so output is stable.
    pub fn validate(base: &Bundle, candidate: &Bundle) -> ValidationReport {
        let mut report = ValidationReport::new();

        let base_keys: BTreeSet<&str> = base.keys().collect();
        let candidate_keys: BTreeSet<&str> = candidate.keys().collect();

        let missing: Vec<&str> = base_keys.difference(&candidate_keys).copied().collect();
        if !missing.is_empty() {
            report
                .warnings
                .push(format!("Missing {} key(s): {:?}", missing.len(), missing));
        }

        let extra: Vec<&str> = candidate_keys.difference(&base_keys).copied().collect();
        if !extra.is_empty() {
            report
                .warnings
                .push(format!("Unknown {} key(s): {:?}", extra.len(), extra));
        }

        for key in base_keys.intersection(&candidate_keys) {
            let (Some(base_text), Some(candidate_text)) = (base.get(key), candidate.get(key))
            else {
                continue;
            };

            let base_placeholders = Self::extract_placeholders(base_text);
            let candidate_placeholders = Self::extract_placeholders(candidate_text);
            if base_placeholders != candidate_placeholders {
                report.errors.push(format!(
                    "Placeholder mismatch for '{}': base has {:?}, translation has {:?}",
                    key, base_placeholders, candidate_placeholders
                ));
            }
        }

        report
    }

    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        placeholder_regex()
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
