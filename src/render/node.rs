/*!
 * Render tree types.
 *
 * The renderer produces a small, presentation-agnostic tree. Consumers walk
 * it to build HTML, terminal output or anything else; the serde form is the
 * JSON output of the CLI.
 */

use serde::{Deserialize, Serialize};

/// Layout a rendered section was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Text,
    List,
    Table,
    Example,
    /// Closing summary of a document
    Conclusion,
}

/// A node of the render tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RenderableNode {
    /// Root of a rendered concept
    Document { children: Vec<RenderableNode> },
    /// One rendered content section
    Section {
        kind: SectionKind,
        children: Vec<RenderableNode>,
    },
    /// Heading with level 1-6
    Heading { level: u8, text: String },
    Paragraph { text: String },
    CodeBlock { code: String },
    /// Unordered list of plain items
    List { items: Vec<String> },
    Table(TableNode),
}

impl RenderableNode {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn code_block(code: impl Into<String>) -> Self {
        Self::CodeBlock { code: code.into() }
    }

    /// Direct children; leaves have none.
    pub fn children(&self) -> &[RenderableNode] {
        match self {
            Self::Document { children } | Self::Section { children, .. } => children,
            _ => &[],
        }
    }

    /// This node and all its descendants in pre-order.
    pub fn descendants(&self) -> Vec<&RenderableNode> {
        let mut nodes = vec![self];
        for child in self.children() {
            nodes.extend(child.descendants());
        }
        nodes
    }

    pub fn as_table(&self) -> Option<&TableNode> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// First table in this subtree.
    pub fn find_table(&self) -> Option<&TableNode> {
        self.descendants().into_iter().find_map(Self::as_table)
    }
}

/// Rendered table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableNode {
    pub caption: String,
    pub header: TableRow,
    pub body: Vec<TableRow>,
}

impl TableNode {
    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.body.len()
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Row with one plain cell per text.
    pub fn from_texts(texts: &[String]) -> Self {
        Self {
            cells: texts.iter().map(|text| TableCell::new(text.clone())).collect(),
        }
    }

    /// Row holding a single placeholder cell spanning `col_span` columns.
    pub fn placeholder(text: impl Into<String>, col_span: usize) -> Self {
        Self {
            cells: vec![TableCell {
                text: text.into(),
                col_span,
                placeholder: true,
            }],
        }
    }

    /// Columns covered by this row.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|cell| cell.col_span).sum()
    }

    pub fn is_placeholder(&self) -> bool {
        self.cells.iter().any(|cell| cell.placeholder)
    }
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,

    #[serde(default = "default_col_span")]
    pub col_span: usize,

    /// Stands in for missing data
    #[serde(default)]
    pub placeholder: bool,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            col_span: default_col_span(),
            placeholder: false,
        }
    }
}

fn default_col_span() -> usize {
    1
}
