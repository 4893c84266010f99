use std::io::Write;

use crate::error::Result;
use crate::markdown::render_markdown;
use crate::model::RenderNode;

use super::Exporter;

/// Exporter for Markdown output.
#[derive(Debug, Clone, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, tree: &RenderNode, writer: &mut W) -> Result<()> {
        let content = render_markdown(tree);
        writer.write_all(content.as_bytes())?;
        tracing::debug!(bytes = content.len(), "wrote markdown");
        Ok(())
    }
}
