/*!
 * # conceptdocs - Bilingual programming concept documentation
 *
 * A Rust library for authoring and rendering programming concepts in
 * Spanish and English.
 *
 * ## Features
 *
 * - Concepts as ordered, typed sections:
 *   - explanatory text with optional code
 *   - bullet lists
 *   - comparison tables
 *   - worked examples
 * - Locale resolution with a configurable fallback
 * - Tables that degrade to placeholders when headers or rows are missing
 * - Per-section fault isolation when rendering
 * - Content validation with warning and error severities
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `content`: The concept model and its loading:
 *   - `content::model`: Concepts, sections and localized values
 *   - `content::resolver`: Locale resolution with fallback
 *   - `content::registry`: Immutable concept registry and the loader trait
 *   - `content::catalog`: Concepts compiled into the crate
 * - `render`: The render pipeline:
 *   - `render::section`: Section dispatch by variant
 *   - `render::table`: Table layout with placeholders
 *   - `render::document`: Whole-document rendering
 *   - `render::text`: Plain text output
 * - `validation`: Structural checks on authored content
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: Locales and ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod content;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod render;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use content::{ConceptDocument, ConceptLoader, ConceptRegistry, LocalizedTextResolver, Section};
pub use errors::{AppError, ContentError, RenderError};
pub use language_utils::{Locale, normalize_to_part2t};
pub use render::{DocumentRenderer, RenderableNode, SectionRenderer, TableRenderer, render_to_text};
