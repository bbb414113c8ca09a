/*!
 * Content validation service that orchestrates all validators.
 *
 * Validation never changes content. It reports issues; whether an
 * error-severity issue blocks loading is decided by `ValidationConfig::strict`.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::model::{ConceptDocument, Section};
use crate::errors::{ContentError, RenderError};

use super::locales::{LocaleCoverageValidator, LocaleIssue};
use super::tables::TableShapeValidator;

static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid")
});

/// Configuration for content validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Whether validation runs at all when the registry is built
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Reject documents with error-severity issues instead of logging them
    #[serde(default)]
    pub strict: bool,

    /// Whether to check that every localized field covers every locale
    #[serde(default = "default_true")]
    pub locale_coverage: bool,

    /// Whether to compare table row widths with header widths
    #[serde(default = "default_true")]
    pub table_shape: bool,

    /// Whether to check slugs are lowercase kebab-case
    #[serde(default = "default_true")]
    pub slug_format: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strict: false,
            locale_coverage: true,
            table_shape: true,
            slug_format: true,
        }
    }
}

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Content renders but may look wrong
    Warning,
    /// Content is broken and strict loading rejects it
    Error,
}

/// A validation issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Type of validation that found the issue
    pub validation_type: String,
    /// Severity of the issue
    pub severity: IssueSeverity,
    /// Section the issue belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_index: Option<usize>,
    /// Description of the issue
    pub message: String,
}

impl ValidationIssue {
    /// Create a warning issue
    pub fn warning(validation_type: &str, section_index: Option<usize>, message: String) -> Self {
        Self {
            validation_type: validation_type.to_string(),
            severity: IssueSeverity::Warning,
            section_index,
            message,
        }
    }

    /// Create an error issue
    pub fn error(validation_type: &str, section_index: Option<usize>, message: String) -> Self {
        Self {
            validation_type: validation_type.to_string(),
            severity: IssueSeverity::Error,
            section_index,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            IssueSeverity::Warning => "warning",
            IssueSeverity::Error => "error",
        };
        match self.section_index {
            Some(index) => write!(f, "[{}] {} (section {}): {}", severity, self.validation_type, index, self.message),
            None => write!(f, "[{}] {}: {}", severity, self.validation_type, self.message),
        }
    }
}

/// Validation report for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub slug: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Validation of '{}': {} errors, {} warnings",
            self.slug,
            self.error_count(),
            self.warning_count()
        )
    }
}

/// Validation service for concept documents
#[derive(Debug, Clone, Default)]
pub struct ContentValidator {
    config: ValidationConfig,
}

impl ContentValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Check if validation is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Check if error-severity issues should block loading
    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    /// Run every enabled check against a document
    pub fn validate(&self, document: &ConceptDocument) -> ValidationReport {
        let mut issues = Vec::new();

        if !self.config.enabled {
            return ValidationReport {
                slug: document.slug.clone(),
                issues,
            };
        }

        if self.config.slug_format && !SLUG_PATTERN.is_match(&document.slug) {
            issues.push(ValidationIssue::error(
                "slug_format",
                None,
                format!("Slug '{}' is not lowercase kebab-case", document.slug),
            ));
        }

        for (index, section) in document.sections.iter().enumerate() {
            if let Section::Unsupported { kind, .. } = section {
                issues.push(ValidationIssue::error(
                    "section_type",
                    Some(index),
                    RenderError::UnknownSectionType(kind.clone()).to_string(),
                ));
            }
        }

        if self.config.locale_coverage {
            for issue in LocaleCoverageValidator::validate(document) {
                let section_index = section_index_of(issue.field());
                issues.push(match issue {
                    LocaleIssue::Missing { .. } => ValidationIssue::error("locale_coverage", section_index, issue.to_string()),
                    LocaleIssue::Empty { .. } => ValidationIssue::warning("locale_coverage", section_index, issue.to_string()),
                });
            }
        }

        if self.config.table_shape {
            for error in TableShapeValidator::validate(document) {
                let section_index = match &error {
                    ContentError::MalformedTable { section_index, .. } => Some(*section_index),
                    _ => None,
                };
                issues.push(ValidationIssue::warning("table_shape", section_index, error.to_string()));
            }
        }

        debug!("Validated '{}': {} issue(s)", document.slug, issues.len());

        ValidationReport {
            slug: document.slug.clone(),
            issues,
        }
    }
}

// Field paths look like `sections[3].title`
fn section_index_of(field: &str) -> Option<usize> {
    let rest = field.strip_prefix("sections[")?;
    let end = rest.find(']')?;
    rest[..end].parse().ok()
}
