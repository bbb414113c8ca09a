/*!
 * Concept registry.
 *
 * Concepts are loaded once, checked for unique slugs and then only read.
 * Everything outside this module reaches them through [`ConceptLoader`].
 */

use anyhow::{Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

use crate::content::catalog;
use crate::content::model::ConceptDocument;
use crate::errors::ContentError;
use crate::file_utils::FileManager;
use crate::validation::{ContentValidator, ValidationConfig};

/// Read access to loaded concepts
pub trait ConceptLoader {
    /// Concept with this slug, or `None` when there is none
    fn get_concept_by_slug(&self, slug: &str) -> Option<&ConceptDocument>;

    /// Every concept in registration order
    fn get_all_concepts(&self) -> &[ConceptDocument];
}

// Compiled-in content must pass validation, so any error-severity issue fails the load
static BUILTIN: Lazy<Result<ConceptRegistry, ContentError>> = Lazy::new(|| {
    ConceptRegistry::builder()
        .with_validation(ValidationConfig {
            strict: true,
            ..Default::default()
        })
        .with_builtin()
        .and_then(RegistryBuilder::build)
});

/// Immutable set of concepts indexed by slug
#[derive(Debug, Clone, Default)]
pub struct ConceptRegistry {
    concepts: Vec<ConceptDocument>,
    by_slug: HashMap<String, usize>,
}

impl ConceptRegistry {
    /// Build a registry, rejecting duplicate slugs
    pub fn from_documents(concepts: Vec<ConceptDocument>) -> Result<Self, ContentError> {
        let mut by_slug = HashMap::with_capacity(concepts.len());

        for (index, concept) in concepts.iter().enumerate() {
            if by_slug.insert(concept.slug.clone(), index).is_some() {
                return Err(ContentError::DuplicateSlug(concept.slug.clone()));
            }
        }

        debug!("Concept registry built with {} concept(s)", concepts.len());

        Ok(Self { concepts, by_slug })
    }

    /// The process-wide registry of built-in concepts, parsed and validated on first use
    pub fn builtin() -> Result<&'static ConceptRegistry, ContentError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Load every concept file below a directory, with default validation
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Ok(Self::builder().with_dir(dir)?.build()?)
    }

    /// Start assembling a registry from several sources
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Slugs in registration order
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(|concept| concept.slug.as_str())
    }
}

impl ConceptLoader for ConceptRegistry {
    fn get_concept_by_slug(&self, slug: &str) -> Option<&ConceptDocument> {
        self.by_slug.get(slug).map(|&index| &self.concepts[index])
    }

    fn get_all_concepts(&self) -> &[ConceptDocument] {
        &self.concepts
    }
}

/// Collects concepts from the built-in catalog, directories and values
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    documents: Vec<ConceptDocument>,
    validator: ContentValidator,
}

impl RegistryBuilder {
    /// Validate documents with this configuration when building
    pub fn with_validation(mut self, config: ValidationConfig) -> Self {
        self.validator = ContentValidator::with_config(config);
        self
    }

    /// Add the concepts compiled into the crate
    pub fn with_builtin(mut self) -> Result<Self, ContentError> {
        self.documents.extend(catalog::builtin_documents()?);
        Ok(self)
    }

    pub fn with_document(mut self, document: ConceptDocument) -> Self {
        self.documents.push(document);
        self
    }

    /// Add every `*.json` concept file below `dir`, in path order
    pub fn with_dir<P: AsRef<Path>>(mut self, dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !FileManager::dir_exists(dir) {
            return Err(anyhow::anyhow!("Content directory does not exist: {:?}", dir));
        }

        let mut files = FileManager::find_files(dir, "json")?;
        files.sort();

        for path in &files {
            let json = FileManager::read_to_string(path)?;
            let document = ConceptDocument::from_json(&path.display().to_string(), &json)
                .with_context(|| format!("Failed to load concept file: {:?}", path))?;
            self.documents.push(document);
        }

        info!("Loaded {} concept file(s) from {:?}", files.len(), dir);

        Ok(self)
    }

    /// Validate every collected document and build the registry
    pub fn build(self) -> Result<ConceptRegistry, ContentError> {
        if self.validator.is_enabled() {
            for document in &self.documents {
                let report = self.validator.validate(document);
                for issue in &report.issues {
                    warn!("{}: {}", document.slug, issue);
                }

                if self.validator.is_strict() && report.has_errors() {
                    return Err(ContentError::Invalid {
                        slug: report.slug,
                        issues: report.issues,
                    });
                }
            }
        }

        ConceptRegistry::from_documents(self.documents)
    }
}
