/*!
 * Tests for error types
 */

use conceptdocs::errors::{AppError, ContentError, RenderError};
use conceptdocs::language_utils::Locale;

/// Test error messages name the values involved
#[test]
fn test_content_error_display_withFields_shouldIncludeThem() {
    let missing = ContentError::MissingLocale {
        requested: Locale::Es,
        fallback: Locale::En,
    };
    let message = missing.to_string();
    assert!(message.contains("'es'"));
    assert!(message.contains("'en'"));

    let malformed = ContentError::MalformedTable {
        section_index: 2,
        row_index: 0,
        locale: Locale::En,
        expected: 3,
        found: 2,
    };
    assert_eq!(
        malformed.to_string(),
        "Malformed table in section 2: row 0 (en) has 2 cells, expected 3"
    );

    assert_eq!(
        ContentError::DuplicateSlug("css-flexbox".to_string()).to_string(),
        "Duplicate concept slug: css-flexbox"
    );
}

/// Test that content errors convert into render and app errors
#[test]
fn test_error_conversion_withContentError_shouldWrap() {
    let content = ContentError::DuplicateSlug("a".to_string());

    let render: RenderError = content.clone().into();
    assert_eq!(render, RenderError::Content(content.clone()));

    let app: AppError = content.into();
    assert!(matches!(app, AppError::Content(ContentError::DuplicateSlug(_))));
}

/// Test unknown section type message
#[test]
fn test_render_error_display_withUnknownType_shouldNameTag() {
    let error = RenderError::UnknownSectionType("video".to_string());
    assert_eq!(error.to_string(), "Unknown section type: video");

    let app: AppError = error.into();
    assert_eq!(app.to_string(), "Render error: Unknown section type: video");
}

/// Test conversion from anyhow and io errors
#[test]
fn test_app_error_from_withExternalErrors_shouldConvert() {
    let app: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(app, AppError::Unknown(ref msg) if msg == "boom"));

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app: AppError = io.into();
    assert!(matches!(app, AppError::File(_)));
}

/// Test the validation failure message counts concepts and is not reported as unknown
#[test]
fn test_app_error_display_withValidationFailed_shouldCountConcepts() {
    let app = AppError::ValidationFailed { failed: 2, total: 5 };
    let message = anyhow::Error::from(app).to_string();

    assert_eq!(message, "Validation failed: 2 of 5 concept(s) have errors");
    assert!(!message.contains("Unknown"));
}
