use log::{debug, warn};

use crate::content::model::ConceptDocument;
use crate::content::resolver::LocalizedTextResolver;
use crate::errors::RenderError;
use crate::language_utils::Locale;
use crate::render::node::{RenderableNode, SectionKind};
use crate::render::section::{SectionRenderer, SECTION_HEADING_LEVEL};

/// Heading of the closing summary of a concept
pub fn conclusion_heading(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Conclusión",
        Locale::En => "Conclusion",
    }
}

/// A section that could not be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFailure {
    /// Position in the document's section list
    pub index: usize,
    pub error: RenderError,
}

/// Result of rendering a document with per-section fault isolation
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRender {
    /// Tree with every section that rendered
    pub node: RenderableNode,
    /// Sections left out of `node`
    pub failures: Vec<SectionFailure>,
}

impl DocumentRender {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders whole concept documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRenderer {
    sections: SectionRenderer,
}

impl DocumentRenderer {
    pub fn new(resolver: LocalizedTextResolver) -> Self {
        Self {
            sections: SectionRenderer::new(resolver),
        }
    }

    pub fn section_renderer(&self) -> &SectionRenderer {
        &self.sections
    }

    /// Render a document; the first failing section aborts the render.
    pub fn render_document(&self, document: &ConceptDocument, locale: Locale) -> Result<RenderableNode, RenderError> {
        let sections = document
            .sections
            .iter()
            .map(|section| self.sections.render(section, locale))
            .collect::<Result<Vec<_>, _>>()?;

        self.assemble(document, locale, sections)
    }

    /// Render each section independently.
    ///
    /// Results line up with `document.sections`; one failure never affects
    /// the others.
    pub fn render_sections(&self, document: &ConceptDocument, locale: Locale) -> Vec<Result<RenderableNode, RenderError>> {
        document
            .sections
            .iter()
            .map(|section| self.sections.render(section, locale))
            .collect()
    }

    /// Render a document, leaving out sections that fail.
    ///
    /// Title, description and conclusion must still resolve.
    pub fn render_document_isolated(&self, document: &ConceptDocument, locale: Locale) -> Result<DocumentRender, RenderError> {
        let mut sections = Vec::with_capacity(document.sections.len());
        let mut failures = Vec::new();

        for (index, result) in self.render_sections(document, locale).into_iter().enumerate() {
            match result {
                Ok(node) => sections.push(node),
                Err(error) => {
                    warn!("Skipping section {} of '{}': {}", index, document.slug, error);
                    failures.push(SectionFailure { index, error });
                }
            }
        }

        let node = self.assemble(document, locale, sections)?;
        Ok(DocumentRender { node, failures })
    }

    fn assemble(&self, document: &ConceptDocument, locale: Locale, sections: Vec<RenderableNode>) -> Result<RenderableNode, RenderError> {
        let resolver = self.sections.resolver();
        let mut children = Vec::with_capacity(sections.len() + 3);

        children.push(RenderableNode::heading(1, resolver.resolve_text(&document.title, locale)?));
        children.push(RenderableNode::paragraph(resolver.resolve_text(&document.description, locale)?));
        children.extend(sections);

        if !document.conclusion.is_empty() {
            children.push(RenderableNode::Section {
                kind: SectionKind::Conclusion,
                children: vec![
                    RenderableNode::heading(SECTION_HEADING_LEVEL, conclusion_heading(locale)),
                    RenderableNode::List {
                        items: resolver.resolve_list(&document.conclusion, locale)?,
                    },
                ],
            });
        }

        debug!("Rendered '{}' ({}) with {} top-level nodes", document.slug, locale, children.len());

        Ok(RenderableNode::Document { children })
    }
}
