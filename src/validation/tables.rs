/*!
 * Table shape validation.
 *
 * The table renderer lays rows out as authored. This validator is where
 * rows whose width disagrees with the header width get noticed.
 */

use crate::content::model::{ConceptDocument, TableSection};
use crate::errors::ContentError;

/// Checks table row widths against header widths per locale
pub struct TableShapeValidator;

impl TableShapeValidator {
    /// Every malformed row of every table in the document
    pub fn validate(document: &ConceptDocument) -> Vec<ContentError> {
        document
            .tables()
            .flat_map(|(section_index, table)| Self::validate_table(section_index, table))
            .collect()
    }

    /// Malformed rows of a single table
    pub fn validate_table(section_index: usize, table: &TableSection) -> Vec<ContentError> {
        let mut errors = Vec::new();

        for (row_index, row) in table.rows.iter().enumerate() {
            for (locale, cells) in row.iter() {
                // Without headers in this locale there is no width to compare with
                let Some(headers) = table.headers.get(locale) else {
                    continue;
                };

                if cells.len() != headers.len() {
                    errors.push(ContentError::MalformedTable {
                        section_index,
                        row_index,
                        locale,
                        expected: headers.len(),
                        found: cells.len(),
                    });
                }
            }
        }

        errors
    }
}
