/*!
 * Tests for the concept model and its JSON form
 */

use anyhow::Result;
use conceptdocs::content::{ConceptDocument, LocalizedString, Section};
use conceptdocs::errors::ContentError;
use conceptdocs::language_utils::Locale;

use crate::common;

const EXAMPLE_JSON: &str = r#"{
    "title": { "es": "Ejemplo", "en": "Example" },
    "slug": "example",
    "description": { "es": "Descripción", "en": "Description" },
    "sections": [
        {
            "type": "example",
            "title": { "es": "Caso", "en": "Case" },
            "caseTitle": { "es": "Título", "en": "Title" },
            "caseDescription": { "es": "Descripción", "en": "Description" },
            "code": "let x = 1;",
            "conclusion": { "es": "Fin", "en": "End" }
        },
        { "type": "video", "url": "https://example.com/v.mp4" }
    ],
    "conclusion": { "es": ["uno"], "en": ["one"] }
}"#;

/// Test parsing camelCase example fields and keeping unknown tags
#[test]
fn test_from_json_withExampleAndUnknownSection_shouldParseBoth() -> Result<()> {
    let document = ConceptDocument::from_json("example.json", EXAMPLE_JSON)?;

    assert_eq!(document.sections.len(), 2);
    match &document.sections[0] {
        Section::Example(example) => {
            assert_eq!(example.case_title.get(Locale::En).map(String::as_str), Some("Title"));
            assert_eq!(example.code, "let x = 1;");
        }
        other => panic!("expected example section, got {:?}", other),
    }
    assert!(matches!(&document.sections[1], Section::Unsupported { kind, .. } if kind == "video"));
    assert_eq!(document.sections[1].kind(), "video");
    assert!(document.sections[1].title().is_none());

    Ok(())
}

/// Test that a table without headers or rows parses with empty defaults
#[test]
fn test_from_json_withBareTable_shouldDefaultHeadersAndRows() -> Result<()> {
    let json = r#"{
        "title": { "es": "T", "en": "T" },
        "slug": "bare",
        "description": { "es": "D", "en": "D" },
        "sections": [ { "type": "table", "title": { "es": "Vacía", "en": "Empty" } } ]
    }"#;

    let document = ConceptDocument::from_json("bare.json", json)?;
    let (index, table) = document.tables().next().expect("one table");

    assert_eq!(index, 0);
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());
    assert!(document.conclusion.is_empty());

    Ok(())
}

/// Test that a section without a tag is a parse error naming the source
#[test]
fn test_from_json_withUntaggedSection_shouldFailWithSourceName() {
    let json = r#"{
        "title": { "es": "T", "en": "T" },
        "slug": "untagged",
        "description": { "es": "D", "en": "D" },
        "sections": [ { "title": { "es": "T", "en": "T" } } ]
    }"#;

    let error = ConceptDocument::from_json("untagged.json", json).unwrap_err();

    assert!(matches!(error, ContentError::Parse { ref source_name, .. } if source_name == "untagged.json"));
}

/// Test that a known tag with missing required fields is rejected
#[test]
fn test_from_json_withIncompleteTextSection_shouldFail() {
    let json = r#"{
        "title": { "es": "T", "en": "T" },
        "slug": "incomplete",
        "description": { "es": "D", "en": "D" },
        "sections": [ { "type": "text", "title": { "es": "T", "en": "T" } } ]
    }"#;

    assert!(ConceptDocument::from_json("incomplete.json", json).is_err());
}

/// Test that serializing and parsing a document preserves it
#[test]
fn test_to_json_withEveryVariant_shouldParseBackEqual() -> Result<()> {
    let document = common::sample_concept("css-colors");

    let json = document.to_json()?;
    assert!(json.contains(r#""type": "table""#));
    assert!(json.contains(r#""caseTitle""#));

    assert_eq!(ConceptDocument::from_json("roundtrip", &json)?, document);

    Ok(())
}

/// Test that a section with an unknown tag keeps all of its fields through a round trip
#[test]
fn test_to_json_withUnknownSection_shouldKeepItsFields() -> Result<()> {
    let json = r#"{
        "title": { "es": "Medios", "en": "Media" },
        "slug": "media",
        "description": { "es": "D", "en": "D" },
        "sections": [
            { "type": "video", "url": "http://x", "title": { "es": "Vídeo", "en": "Video" } }
        ]
    }"#;
    let document = ConceptDocument::from_json("media.json", json)?;

    let written = document.to_json()?;
    let value: serde_json::Value = serde_json::from_str(&written)?;

    assert_eq!(value["sections"][0]["type"], "video");
    assert_eq!(value["sections"][0]["url"], "http://x");
    assert_eq!(value["sections"][0]["title"]["en"], "Video");
    assert_eq!(ConceptDocument::from_json("media-again.json", &written)?, document);

    Ok(())
}

/// Test localized value helpers
#[test]
fn test_localized_withOneLocale_shouldReportMissing() {
    let value = LocalizedString::new().with(Locale::Es, "Hola");

    assert_eq!(value.get(Locale::Es).map(String::as_str), Some("Hola"));
    assert!(value.get(Locale::En).is_none());
    assert_eq!(value.missing_locales(), vec![Locale::En]);
    assert!(!value.is_complete());
    assert!(LocalizedString::bilingual("Hola", "Hello").is_complete());
}
