/*!
 * Section dispatch.
 *
 * Each section variant has its own layout. Dispatch is an exhaustive match
 * so a new variant cannot be added without a layout, and sections whose
 * tag is unknown are rejected rather than skipped.
 */

use crate::content::model::{
    ExampleSection, ListSection, LocalizedStringList, Section, TableSection, TextSection,
};
use crate::content::resolver::LocalizedTextResolver;
use crate::errors::{ContentError, RenderError};
use crate::language_utils::Locale;
use crate::render::node::{RenderableNode, SectionKind};
use crate::render::table::TableRenderer;

/// Heading level of section titles
pub const SECTION_HEADING_LEVEL: u8 = 2;

/// Heading level of the case title inside an example
pub const CASE_HEADING_LEVEL: u8 = 3;

/// Renders one section for a locale
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionRenderer {
    resolver: LocalizedTextResolver,
}

impl SectionRenderer {
    pub fn new(resolver: LocalizedTextResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &LocalizedTextResolver {
        &self.resolver
    }

    /// Render `section` into a `Section` node.
    ///
    /// Fails with `UnknownSectionType` for unsupported tags and with a
    /// content error when a value cannot be resolved; no partial node is
    /// returned in either case.
    pub fn render(&self, section: &Section, locale: Locale) -> Result<RenderableNode, RenderError> {
        match section {
            Section::Text(text) => self.render_text(text, locale),
            Section::List(list) => self.render_list(list, locale),
            Section::Table(table) => self.render_table(table, locale),
            Section::Example(example) => self.render_example(example, locale),
            Section::Unsupported { kind, .. } => Err(RenderError::UnknownSectionType(kind.clone())),
        }
    }

    fn render_text(&self, section: &TextSection, locale: Locale) -> Result<RenderableNode, RenderError> {
        let mut children = vec![
            RenderableNode::heading(SECTION_HEADING_LEVEL, self.resolver.resolve_text(&section.title, locale)?),
            RenderableNode::paragraph(self.resolver.resolve_text(&section.content, locale)?),
        ];

        if let Some(code) = &section.code {
            children.push(RenderableNode::code_block(code.as_str()));
        }

        Ok(RenderableNode::Section {
            kind: SectionKind::Text,
            children,
        })
    }

    fn render_list(&self, section: &ListSection, locale: Locale) -> Result<RenderableNode, RenderError> {
        let children = vec![
            RenderableNode::heading(SECTION_HEADING_LEVEL, self.resolver.resolve_text(&section.title, locale)?),
            RenderableNode::List {
                items: self.resolver.resolve_list(&section.content, locale)?,
            },
        ];

        Ok(RenderableNode::Section {
            kind: SectionKind::List,
            children,
        })
    }

    fn render_table(&self, section: &TableSection, locale: Locale) -> Result<RenderableNode, RenderError> {
        let title = self.resolver.resolve_text(&section.title, locale)?;
        let headers = self.resolve_cells(&section.headers, locale)?;
        let rows = section
            .rows
            .iter()
            .map(|row| self.resolve_cells(row, locale))
            .collect::<Result<Vec<_>, _>>()?;

        let table = TableRenderer::for_locale(locale).render(&title, &headers, &rows);

        Ok(RenderableNode::Section {
            kind: SectionKind::Table,
            children: vec![table],
        })
    }

    fn render_example(&self, section: &ExampleSection, locale: Locale) -> Result<RenderableNode, RenderError> {
        let children = vec![
            RenderableNode::heading(SECTION_HEADING_LEVEL, self.resolver.resolve_text(&section.title, locale)?),
            RenderableNode::heading(CASE_HEADING_LEVEL, self.resolver.resolve_text(&section.case_title, locale)?),
            RenderableNode::paragraph(self.resolver.resolve_text(&section.case_description, locale)?),
            RenderableNode::code_block(section.code.as_str()),
            RenderableNode::paragraph(self.resolver.resolve_text(&section.conclusion, locale)?),
        ];

        Ok(RenderableNode::Section {
            kind: SectionKind::Example,
            children,
        })
    }

    // Absent table data degrades to an empty list so the table renderer
    // can show its placeholders.
    fn resolve_cells(&self, value: &LocalizedStringList, locale: Locale) -> Result<Vec<String>, ContentError> {
        if value.is_empty() {
            return Ok(Vec::new());
        }
        self.resolver.resolve_list(value, locale)
    }
}
