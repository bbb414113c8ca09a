/*!
 * Validation of authored concept content.
 *
 * Rendering trusts its input; these checks are where broken content is
 * reported:
 * - Locale coverage (every localized field in every locale)
 * - Table shape (row widths against header widths)
 * - Slug format and unknown section tags
 *
 * # Architecture
 *
 * - `locales`: Validates locale coverage of localized fields
 * - `tables`: Validates table row widths
 * - `service`: Orchestrates all validators
 */

pub mod locales;
pub mod service;
pub mod tables;

// Re-export main types
pub use service::{ContentValidator, IssueSeverity, ValidationConfig, ValidationIssue, ValidationReport};
