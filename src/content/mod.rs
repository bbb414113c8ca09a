/*!
 * Concept content: the bilingual document model, locale resolution and
 * the registry documents are loaded into.
 */

pub mod catalog;
pub mod model;
pub mod registry;
pub mod resolver;

pub use model::{
    ConceptDocument, ExampleSection, ListSection, Localized, LocalizedString, LocalizedStringList, Section,
    TableSection, TextSection,
};
pub use registry::{ConceptLoader, ConceptRegistry, RegistryBuilder};
pub use resolver::LocalizedTextResolver;
