/*!
 * Built-in concept catalog.
 *
 * The concept files under `content/` are compiled into the crate so the
 * binary works without any content directory.
 */

use crate::content::model::ConceptDocument;
use crate::errors::ContentError;

/// Source name and JSON text of every built-in concept, in catalog order
pub const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("content/css-box-model.json", include_str!("../../content/css-box-model.json")),
    ("content/css-flexbox.json", include_str!("../../content/css-flexbox.json")),
    ("content/javascript-closures.json", include_str!("../../content/javascript-closures.json")),
    ("content/rust-ownership.json", include_str!("../../content/rust-ownership.json")),
];

/// Parse the built-in concepts
pub fn builtin_documents() -> Result<Vec<ConceptDocument>, ContentError> {
    BUILTIN_SOURCES
        .iter()
        .map(|(source_name, json)| ConceptDocument::from_json(source_name, json))
        .collect()
}
