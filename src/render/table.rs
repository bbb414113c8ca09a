use crate::language_utils::Locale;
use crate::render::node::{RenderableNode, TableNode, TableRow};

/// Placeholder texts shown when a table has no headers or no rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLabels {
    /// Single header cell used when there are no headers
    pub empty_header: String,
    /// Body row text used when there are no rows
    pub empty_body: String,
}

impl TableLabels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                empty_header: "No data".to_string(),
                empty_body: "No data available".to_string(),
            },
            Locale::Es => Self {
                empty_header: "Sin datos".to_string(),
                empty_body: "No hay datos disponibles".to_string(),
            },
        }
    }
}

impl Default for TableLabels {
    fn default() -> Self {
        Self::for_locale(Locale::En)
    }
}

/// Lays out already-resolved table data.
///
/// Missing headers or rows are replaced by placeholders. Row widths are
/// rendered as given, even when they disagree with the header width.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    labels: TableLabels,
}

impl TableRenderer {
    pub fn new(labels: TableLabels) -> Self {
        Self { labels }
    }

    /// Renderer with placeholder texts in `locale`
    pub fn for_locale(locale: Locale) -> Self {
        Self::new(TableLabels::for_locale(locale))
    }

    pub fn labels(&self) -> &TableLabels {
        &self.labels
    }

    /// Render a table node.
    ///
    /// The body always has `max(rows.len(), 1)` rows; the empty-body
    /// placeholder spans `max(headers.len(), 1)` columns.
    pub fn render(&self, title: &str, headers: &[String], rows: &[Vec<String>]) -> RenderableNode {
        let header = if headers.is_empty() {
            TableRow::placeholder(self.labels.empty_header.as_str(), 1)
        } else {
            TableRow::from_texts(headers)
        };

        let body = if rows.is_empty() {
            vec![TableRow::placeholder(self.labels.empty_body.as_str(), headers.len().max(1))]
        } else {
            rows.iter().map(|row| TableRow::from_texts(row)).collect()
        };

        RenderableNode::Table(TableNode {
            caption: title.to_string(),
            header,
            body,
        })
    }
}
