//! Pure Markdown generation from the render tree.
//!
//! - [`escape`]: escaping for literal record text
//! - [`render`]: render tree → Markdown string
//!
//! The export layer ([`crate::export::MarkdownExporter`]) writes the result.

mod escape;
mod render;

pub use escape::escape_markdown;
pub use render::render_markdown;
