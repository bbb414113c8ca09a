/*!
 * Locale coverage validation.
 *
 * Every localized field of a concept should be authored in every supported
 * locale. The resolver can paper over a gap with its fallback, but a gap
 * usually means a translation was forgotten.
 */

use crate::content::model::{ConceptDocument, Localized, Section};
use crate::language_utils::Locale;

/// Types of locale coverage issues
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleIssue {
    /// Field has no value for a supported locale
    Missing { field: String, locale: Locale },
    /// Field holds an empty string or list for a locale
    Empty { field: String, locale: Locale },
}

impl LocaleIssue {
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field, .. } | Self::Empty { field, .. } => field,
        }
    }
}

impl std::fmt::Display for LocaleIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocaleIssue::Missing { field, locale } => {
                write!(f, "Field '{}' has no '{}' value", field, locale)
            }
            LocaleIssue::Empty { field, locale } => {
                write!(f, "Field '{}' is empty for '{}'", field, locale)
            }
        }
    }
}

/// Something that can be checked for emptiness per locale
trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for Vec<String> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Checks that localized fields cover every supported locale
pub struct LocaleCoverageValidator;

impl LocaleCoverageValidator {
    /// Validate every localized field of a document
    pub fn validate(document: &ConceptDocument) -> Vec<LocaleIssue> {
        let mut issues = Vec::new();

        check(&mut issues, "title", &document.title);
        check(&mut issues, "description", &document.description);
        // A concept without a conclusion renders without one
        if !document.conclusion.is_empty() {
            check(&mut issues, "conclusion", &document.conclusion);
        }

        for (index, section) in document.sections.iter().enumerate() {
            let prefix = format!("sections[{}]", index);
            match section {
                Section::Text(text) => {
                    check(&mut issues, &format!("{}.title", prefix), &text.title);
                    check(&mut issues, &format!("{}.content", prefix), &text.content);
                }
                Section::List(list) => {
                    check(&mut issues, &format!("{}.title", prefix), &list.title);
                    check(&mut issues, &format!("{}.content", prefix), &list.content);
                }
                Section::Table(table) => {
                    check(&mut issues, &format!("{}.title", prefix), &table.title);
                    // Absent table data renders as placeholders; only partial data is a gap
                    if !table.headers.is_empty() {
                        check_present(&mut issues, &format!("{}.headers", prefix), &table.headers);
                    }
                    for (row_index, row) in table.rows.iter().enumerate() {
                        check_present(&mut issues, &format!("{}.rows[{}]", prefix, row_index), row);
                    }
                }
                Section::Example(example) => {
                    check(&mut issues, &format!("{}.title", prefix), &example.title);
                    check(&mut issues, &format!("{}.caseTitle", prefix), &example.case_title);
                    check(&mut issues, &format!("{}.caseDescription", prefix), &example.case_description);
                    check(&mut issues, &format!("{}.conclusion", prefix), &example.conclusion);
                }
                Section::Unsupported { .. } => {}
            }
        }

        issues
    }
}

fn check<T: Blank>(issues: &mut Vec<LocaleIssue>, field: &str, value: &Localized<T>) {
    check_present(issues, field, value);

    for (locale, item) in value.iter() {
        if item.is_blank() {
            issues.push(LocaleIssue::Empty {
                field: field.to_string(),
                locale,
            });
        }
    }
}

fn check_present<T>(issues: &mut Vec<LocaleIssue>, field: &str, value: &Localized<T>) {
    for locale in value.missing_locales() {
        issues.push(LocaleIssue::Missing {
            field: field.to_string(),
            locale,
        });
    }
}
