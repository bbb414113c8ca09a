use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::content::{ConceptDocument, ConceptLoader, ConceptRegistry, LocalizedTextResolver};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::language_utils::Locale;
use crate::render::{DocumentRender, DocumentRenderer, RenderableNode, render_to_text};
use crate::validation::{ContentValidator, ValidationReport};

// @module: Application controller for concept rendering

/// Output format of a rendered concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    // @returns: File extension for exported concepts
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "md",
            Self::Json => "json",
        }
    }
}

/// One line of the concept listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptSummary {
    pub slug: String,
    pub title: String,
}

/// Main application controller for concept documentation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Loaded concepts
    registry: ConceptRegistry,
    // @field: Document renderer using the configured fallback locale
    renderer: DocumentRenderer,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let mut builder = ConceptRegistry::builder().with_validation(config.validation.clone());

        if config.include_builtin {
            builder = builder.with_builtin().context("Failed to load built-in concepts")?;
        }

        if let Some(dir) = &config.content_dir {
            builder = builder.with_dir(dir)?;
        }

        let registry = builder.build().context("Failed to build concept registry")?;
        info!("Loaded {} concept(s)", registry.len());

        let renderer = DocumentRenderer::new(LocalizedTextResolver::new(config.fallback_locale));

        Ok(Self {
            config,
            registry,
            renderer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &ConceptRegistry {
        &self.registry
    }

    /// Locale to use when the caller did not ask for one
    pub fn locale_or_default(&self, locale: Option<Locale>) -> Locale {
        locale.unwrap_or(self.config.default_locale)
    }

    fn concept(&self, slug: &str) -> Result<&ConceptDocument, AppError> {
        self.registry
            .get_concept_by_slug(slug)
            .ok_or_else(|| AppError::NotFound(slug.to_string()))
    }

    /// Slug and resolved title of every concept
    pub fn list_concepts(&self, locale: Locale) -> Result<Vec<ConceptSummary>, AppError> {
        let resolver = self.renderer.section_renderer().resolver();

        self.registry
            .get_all_concepts()
            .iter()
            .map(|concept| -> Result<ConceptSummary, AppError> {
                Ok(ConceptSummary {
                    slug: concept.slug.clone(),
                    title: resolver.resolve_text(&concept.title, locale)?,
                })
            })
            .collect()
    }

    /// Render one concept; any failing section fails the render
    pub fn render_concept(&self, slug: &str, locale: Locale) -> Result<RenderableNode, AppError> {
        let concept = self.concept(slug)?;
        debug!("Rendering '{}' in '{}'", slug, locale);
        Ok(self.renderer.render_document(concept, locale)?)
    }

    /// Render one concept, leaving out sections that fail
    pub fn render_concept_isolated(&self, slug: &str, locale: Locale) -> Result<DocumentRender, AppError> {
        let concept = self.concept(slug)?;
        Ok(self.renderer.render_document_isolated(concept, locale)?)
    }

    /// Render one concept to the requested output format
    pub fn render_concept_as(&self, slug: &str, locale: Locale, format: OutputFormat) -> Result<String, AppError> {
        let node = self.render_concept(slug, locale)?;
        format_node(&node, format)
    }

    /// Validation report of every loaded concept, in registry order
    pub fn validate_all(&self) -> Vec<ValidationReport> {
        let validator = ContentValidator::with_config(self.config.validation.clone());

        self.registry
            .get_all_concepts()
            .iter()
            .map(|concept| validator.validate(concept))
            .collect()
    }

    /// Render every concept into `output_dir`, one file per concept.
    ///
    /// Sections that fail are left out and logged; the paths written are returned.
    pub fn export_all<P: AsRef<Path>>(&self, output_dir: P, locale: Locale, format: OutputFormat) -> Result<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        FileManager::ensure_dir(output_dir)?;

        let mut written = Vec::with_capacity(self.registry.len());

        for concept in self.registry.get_all_concepts() {
            let render = self.renderer.render_document_isolated(concept, locale)?;
            if !render.is_complete() {
                warn!(
                    "'{}' exported without {} failing section(s)",
                    concept.slug,
                    render.failures.len()
                );
            }

            let output = format_node(&render.node, format)?;
            let path = FileManager::generate_output_path(output_dir, &concept.slug, locale.code(), format.extension());
            FileManager::write_to_file(&path, &output)?;
            written.push(path);
        }

        info!("Exported {} concept(s) to {:?}", written.len(), output_dir);

        Ok(written)
    }
}

fn format_node(node: &RenderableNode, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_to_text(node)),
        OutputFormat::Json => serde_json::to_string_pretty(node).map_err(|e| AppError::Unknown(e.to_string())),
    }
}
