/*!
 * Plain text output for render trees.
 *
 * Produces markdown-flavoured text: `#` headings, `-` list items, fenced
 * code blocks and `|`-separated table rows.
 */

use crate::render::node::{RenderableNode, TableNode, TableRow};

/// Heading level used for table captions
const CAPTION_LEVEL: u8 = 2;

/// Write a render tree as text
pub fn render_to_text(node: &RenderableNode) -> String {
    let mut writer = TextWriter::default();
    writer.walk_node(node);
    writer.finish()
}

#[derive(Default)]
struct TextWriter {
    output: String,
}

impl TextWriter {
    fn finish(mut self) -> String {
        let trimmed_len = self.output.trim_end().len();
        self.output.truncate(trimmed_len);
        self.output.push('\n');
        self.output
    }

    // Blocks are separated by one blank line
    fn start_block(&mut self) {
        if !self.output.is_empty() && !self.output.ends_with("\n\n") {
            if !self.output.ends_with('\n') {
                self.output.push('\n');
            }
            self.output.push('\n');
        }
    }

    fn write_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn walk_node(&mut self, node: &RenderableNode) {
        match node {
            RenderableNode::Document { children } | RenderableNode::Section { children, .. } => {
                for child in children {
                    self.walk_node(child);
                }
            }
            RenderableNode::Heading { level, text } => {
                self.write_heading(*level, text);
            }
            RenderableNode::Paragraph { text } => {
                self.start_block();
                self.write_line(text);
            }
            RenderableNode::CodeBlock { code } => {
                self.start_block();
                self.write_line("```");
                self.write_line(code.trim_end_matches('\n'));
                self.write_line("```");
            }
            RenderableNode::List { items } => {
                self.start_block();
                for item in items {
                    self.write_line(&format!("- {}", item));
                }
            }
            RenderableNode::Table(table) => self.write_table(table),
        }
    }

    fn write_heading(&mut self, level: u8, text: &str) {
        self.start_block();
        let marks = "#".repeat(level.clamp(1, 6) as usize);
        self.write_line(&format!("{} {}", marks, text));
    }

    fn write_table(&mut self, table: &TableNode) {
        if !table.caption.is_empty() {
            self.write_heading(CAPTION_LEVEL, &table.caption);
        }

        self.start_block();
        self.write_row(&table.header);

        let separator = vec!["---"; table.header.width().max(1)].join(" | ");
        self.write_line(&format!("| {} |", separator));

        for row in &table.body {
            self.write_row(row);
        }
    }

    fn write_row(&mut self, row: &TableRow) {
        // A bare pipe inside a cell would split it in two
        let cells: Vec<String> = row.cells.iter().map(|cell| cell.text.replace('|', "\\|")).collect();
        self.write_line(&format!("| {} |", cells.join(" | ")));
    }
}
