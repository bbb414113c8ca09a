/*!
 * Rendering of concept documents.
 *
 * - `node`: the render tree handed to presentation layers
 * - `table`: table layout with placeholders for missing data
 * - `section`: per-variant section dispatch
 * - `document`: whole-document rendering, strict or per-section
 * - `text`: plain text output of a render tree
 */

pub mod document;
pub mod node;
pub mod section;
pub mod table;
pub mod text;

pub use document::{DocumentRender, DocumentRenderer, SectionFailure};
pub use node::{RenderableNode, SectionKind, TableCell, TableNode, TableRow};
pub use section::SectionRenderer;
pub use table::{TableLabels, TableRenderer};
pub use text::render_to_text;
