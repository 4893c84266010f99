use std::io::Write;

use crate::error::Result;
use crate::model::{RenderNode, Role};

use super::Exporter;

/// Plain-text output: one line per non-empty region, blocks separated by a
/// blank line. Text is written exactly as it appears in the tree.
#[derive(Debug, Clone, Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, tree: &RenderNode, writer: &mut W) -> Result<()> {
        let mut out = String::new();
        if tree.role == Role::Page {
            for (i, block) in tree.children.iter().enumerate() {
                if i > 0 && !out.is_empty() {
                    out.push('\n');
                }
                write_lines(block, &mut out);
            }
        } else {
            write_lines(tree, &mut out);
        }
        writer.write_all(out.as_bytes())?;
        tracing::debug!(bytes = out.len(), "wrote text");
        Ok(())
    }
}

fn write_lines(node: &RenderNode, out: &mut String) {
    if !node.text.is_empty() {
        out.push_str(&node.text);
        out.push('\n');
    }
    for child in &node.children {
        write_lines(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::DisplayStrings;
    use crate::model::EbookRecord;
    use crate::page::render_detail;

    #[test]
    fn test_text_page() {
        let record = EbookRecord::new("The Long Road")
            .with_category("Fiction")
            .with_author("J. Doe");
        let text = TextExporter::new()
            .export_to_string(&render_detail(&record, &DisplayStrings::default()))
            .unwrap();
        assert_eq!(
            text,
            "Fiction\nThe Long Road\nby J. Doe\n\nAbout this ebook\nDescription not available.\n"
        );
    }

    #[test]
    fn test_text_is_verbatim() {
        let record = EbookRecord::new("*x*").with_description("<p> & </p>");
        let text = TextExporter::new()
            .export_to_string(&render_detail(&record, &DisplayStrings::default()))
            .unwrap();
        assert!(text.contains("*x*\n"));
        assert!(text.contains("<p> & </p>\n"));
    }
}
