/*!
 * Integration tests for the render pipeline over the built-in catalog
 */

use anyhow::Result;
use conceptdocs::content::{ConceptLoader, ConceptRegistry, LocalizedTextResolver, Section};
use conceptdocs::language_utils::Locale;
use conceptdocs::render::{DocumentRenderer, RenderableNode, render_to_text};

use crate::common;

/// Test every built-in concept has a non-empty title in every locale
#[test]
fn test_builtin_titles_withEveryLocale_shouldResolveNonEmpty() -> Result<()> {
    let registry = ConceptRegistry::builtin()?;
    let resolver = LocalizedTextResolver::default();

    for concept in registry.get_all_concepts() {
        for locale in Locale::ALL {
            let title = resolver.resolve(&concept.title, locale)?;
            assert!(!title.trim().is_empty(), "{} has an empty {} title", concept.slug, locale);
        }
    }

    Ok(())
}

/// Test every built-in concept renders strictly in every locale
#[test]
fn test_render_document_withBuiltinCatalog_shouldRenderEverySection() -> Result<()> {
    let registry = ConceptRegistry::builtin()?;
    let renderer = DocumentRenderer::default();

    for concept in registry.get_all_concepts() {
        for locale in Locale::ALL {
            let node = renderer.render_document(concept, locale)?;
            let sections = node
                .children()
                .iter()
                .filter(|child| matches!(child, RenderableNode::Section { .. }))
                .count();

            // One node per section plus the conclusion
            assert_eq!(sections, concept.sections.len() + 1, "{} in {}", concept.slug, locale);
        }
    }

    Ok(())
}

/// Test rendering is idempotent
#[test]
fn test_render_document_calledTwice_shouldProduceEqualTrees() -> Result<()> {
    let registry = ConceptRegistry::builtin()?;
    let renderer = DocumentRenderer::default();

    for concept in registry.get_all_concepts() {
        let first = renderer.render_document(concept, Locale::Es)?;
        let second = renderer.render_document(concept, Locale::Es)?;
        assert_eq!(first, second);
        assert_eq!(render_to_text(&first), render_to_text(&second));
    }

    Ok(())
}

/// Test table shape over the built-in catalog
#[test]
fn test_builtin_tables_shouldRenderOneBodyRowPerAuthoredRow() -> Result<()> {
    let registry = ConceptRegistry::builtin()?;
    let renderer = DocumentRenderer::default();

    for concept in registry.get_all_concepts() {
        for (index, section) in concept.sections.iter().enumerate() {
            let Section::Table(table) = section else {
                continue;
            };

            let node = renderer.section_renderer().render(section, Locale::En)?;
            let rendered = node.find_table().expect("table section renders a table");

            assert_eq!(rendered.row_count(), table.rows.len().max(1), "{} section {}", concept.slug, index);
            for row in &rendered.body {
                assert_eq!(row.width(), rendered.header.width());
            }
        }
    }

    Ok(())
}

/// Test the text output of a known concept
#[test]
fn test_render_to_text_withBoxModel_shouldContainHeadingsAndTable() -> Result<()> {
    let registry = ConceptRegistry::builtin()?;
    let concept = registry
        .get_concept_by_slug("css-box-model")
        .expect("css-box-model is built in");

    let text = render_to_text(&DocumentRenderer::default().render_document(concept, Locale::En)?);

    assert!(text.starts_with("# The CSS Box Model\n"));
    assert!(text.contains("| Property | Description | Example |"));
    assert!(text.contains("| --- | --- | --- |"));
    assert!(text.contains("## Conclusion\n\n- Every element is a box with four layers."));

    Ok(())
}

/// Test a broken section does not affect its siblings
#[test]
fn test_render_document_isolated_withUnknownSection_shouldKeepSiblings() -> Result<()> {
    let mut concept = common::sample_concept("with-video");
    concept.sections.insert(
        1,
        Section::unsupported("video"),
    );

    let renderer = DocumentRenderer::default();
    assert!(renderer.render_document(&concept, Locale::En).is_err());

    let render = renderer.render_document_isolated(&concept, Locale::En)?;
    assert_eq!(render.failures.len(), 1);
    assert_eq!(render.failures[0].index, 1);

    let isolated = renderer.render_sections(&concept, Locale::En);
    let ok_count = isolated.iter().filter(|r| r.is_ok()).count();
    assert_eq!(ok_count, concept.sections.len() - 1);

    Ok(())
}

/// Test the JSON form of the render tree
#[test]
fn test_render_tree_json_shouldBeTaggedByNode() -> Result<()> {
    let concept = common::sample_concept("css-colors");
    let node = DocumentRenderer::default().render_document(&concept, Locale::Es)?;

    let json = serde_json::to_value(&node)?;

    assert_eq!(json["node"], "document");
    assert_eq!(json["children"][0]["node"], "heading");
    assert_eq!(json["children"][0]["text"], "Colores en CSS");

    Ok(())
}
