/*!
 * Error types for the conceptdocs library.
 *
 * Content and rendering errors are typed with thiserror so callers can
 * match on them; the application edge folds everything into `AppError`.
 */

use thiserror::Error;

use crate::language_utils::Locale;
use crate::validation::ValidationIssue;

/// Errors raised while reading or resolving concept content
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    /// Neither the requested nor the fallback locale holds a value
    #[error("Missing locale: no value for '{requested}' and no fallback in '{fallback}'")]
    MissingLocale {
        /// Locale asked for by the caller
        requested: Locale,
        /// Configured fallback locale
        fallback: Locale,
    },

    /// A table row whose width differs from the header width
    #[error("Malformed table in section {section_index}: row {row_index} ({locale}) has {found} cells, expected {expected}")]
    MalformedTable {
        section_index: usize,
        row_index: usize,
        locale: Locale,
        expected: usize,
        found: usize,
    },

    /// Two documents share the same slug
    #[error("Duplicate concept slug: {0}")]
    DuplicateSlug(String),

    /// A content source could not be parsed
    #[error("Failed to parse concept '{source_name}': {message}")]
    Parse {
        /// File path or catalog entry name
        source_name: String,
        message: String,
    },

    /// Strict validation rejected a document
    #[error("Concept '{slug}' failed validation with {} issue(s)", issues.len())]
    Invalid {
        slug: String,
        issues: Vec<ValidationIssue>,
    },
}

/// Errors raised while rendering a section or document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Section tag not known to the renderer
    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    /// Content could not be resolved for the locale
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading or resolving content
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Error rendering content
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Slug lookup miss surfaced to a user
    #[error("Concept not found: {0}")]
    NotFound(String),

    /// One or more concepts have error-severity validation issues
    #[error("Validation failed: {failed} of {total} concept(s) have errors")]
    ValidationFailed { failed: usize, total: usize },

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
