/*!
 * Common test utilities for the conceptdocs test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use conceptdocs::content::{
    ConceptDocument, ExampleSection, ListSection, LocalizedString, LocalizedStringList, Section, TableSection,
    TextSection,
};

/// Routes `log` output through the test harness; safe to call from every test
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a concept file for `slug` in the specified directory
pub fn create_test_concept(dir: &Path, slug: &str) -> Result<PathBuf> {
    let json = sample_concept(slug).to_json()?;
    create_test_file(dir, &format!("{}.json", slug), &json)
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn text(es: &str, en: &str) -> LocalizedString {
    LocalizedString::bilingual(es, en)
}

pub fn list(es: &[&str], en: &[&str]) -> LocalizedStringList {
    LocalizedStringList::bilingual(strings(es), strings(en))
}

/// A complete concept with one section of every variant
pub fn sample_concept(slug: &str) -> ConceptDocument {
    ConceptDocument {
        title: text("Colores en CSS", "CSS Colors"),
        slug: slug.to_string(),
        description: text("Cómo se expresan los colores.", "How colors are expressed."),
        sections: vec![
            Section::Text(TextSection {
                title: text("Introducción", "Introduction"),
                code: Some("color: red;".to_string()),
                content: text("Hola", "Hello"),
            }),
            Section::List(ListSection {
                title: text("Formatos", "Formats"),
                content: list(&["hex", "rgb"], &["hex", "rgb"]),
            }),
            Section::Table(TableSection {
                title: text("Propiedades", "Properties"),
                headers: list(&["Propiedad", "Descripción", "Ejemplo"], &["Property", "Description", "Example"]),
                rows: vec![list(
                    &["color", "Color del texto", "color: red;"],
                    &["color", "Text color", "color: red;"],
                )],
            }),
            Section::Example(ExampleSection {
                title: text("Ejemplo", "Example"),
                case_title: text("Texto rojo", "Red text"),
                case_description: text("Un párrafo rojo.", "A red paragraph."),
                code: "p { color: red; }".to_string(),
                conclusion: text("El texto es rojo.", "The text is red."),
            }),
        ],
        conclusion: list(&["Los colores tienen varios formatos."], &["Colors come in several formats."]),
    }
}
