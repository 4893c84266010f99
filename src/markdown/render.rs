//! Render tree → Markdown rendering.
//!
//! Pure string building; the export layer handles writing.

use crate::model::{RenderNode, Role};

use super::escape::escape_markdown;

/// Heading level used for top-level section titles.
const SECTION_LEVEL: u8 = 2;

/// Accumulates Markdown output while walking a render tree.
struct RenderContext {
    output: String,
    /// A blank line is owed before the next block.
    pending_blank: bool,
    section_depth: u8,
}

impl RenderContext {
    fn new() -> Self {
        Self {
            output: String::new(),
            pending_blank: false,
            section_depth: 0,
        }
    }

    fn walk(&mut self, node: &RenderNode) {
        match node.role {
            Role::Page | Role::Header => {
                for child in &node.children {
                    self.walk(child);
                }
            }
            Role::Section => {
                let level = SECTION_LEVEL.saturating_add(self.section_depth);
                self.write_heading(level, &node.text);
                self.section_depth = self.section_depth.saturating_add(1);
                for child in &node.children {
                    self.walk(child);
                }
                self.section_depth = self.section_depth.saturating_sub(1);
            }
            Role::Heading(level) => self.write_heading(level, &node.text),
            Role::Tag => {
                if !node.text.is_empty() {
                    // Edge blanks are escaped as references, so the
                    // delimiters always hug non-blank text.
                    let tag = format!("*{}*", escape_markdown(&node.text));
                    self.write_block(&tag);
                }
            }
            Role::Byline | Role::Paragraph => {
                if !node.text.is_empty() {
                    self.write_block(&escape_markdown(&node.text));
                }
            }
        }
    }

    fn write_heading(&mut self, level: u8, text: &str) {
        if text.is_empty() {
            return;
        }
        let hashes = "#".repeat(usize::from(level.clamp(1, 6)));
        let line = format!("{hashes} {}", escape_markdown(text));
        self.write_block(&line);
    }

    fn write_block(&mut self, text: &str) {
        if self.pending_blank {
            self.output.push('\n');
        }
        self.output.push_str(text);
        self.output.push('\n');
        self.pending_blank = true;
    }
}

/// Render a tree to Markdown.
///
/// Empty leaves are omitted; every non-empty region becomes its own block.
pub fn render_markdown(tree: &RenderNode) -> String {
    let mut ctx = RenderContext::new();
    ctx.walk(tree);
    ctx.output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::DisplayStrings;
    use crate::model::EbookRecord;
    use crate::page::render_detail;

    #[test]
    fn test_render_full_page() {
        let record = EbookRecord::new("The Long Road")
            .with_category("Fiction")
            .with_author("J. Doe");
        let md = render_markdown(&render_detail(&record, &DisplayStrings::default()));
        assert_eq!(
            md,
            "*Fiction*\n\n# The Long Road\n\nby J. Doe\n\n## About this ebook\n\nDescription not available.\n"
        );
    }

    #[test]
    fn test_render_escapes_record_text() {
        let record = EbookRecord::new("*Draft*").with_description("# not a heading");
        let md = render_markdown(&render_detail(&record, &DisplayStrings::default()));
        assert!(md.contains("# \\*Draft\\*\n"));
        assert!(md.contains("\n\\# not a heading\n"));
    }

    #[test]
    fn test_render_skips_empty_regions() {
        let record = EbookRecord::new("Untitled").with_description("A short tale.");
        let md = render_markdown(&render_detail(&record, &DisplayStrings::default()));
        assert!(md.starts_with("# Untitled\n"));
    }

    #[test]
    fn test_tag_with_edge_spaces_stays_emphasis() {
        let leading = RenderNode::leaf(Role::Tag, " Fiction");
        let trailing = RenderNode::leaf(Role::Tag, "Fiction ");
        assert_eq!(render_markdown(&leading), "*&#32;Fiction*\n");
        assert_eq!(render_markdown(&trailing), "*Fiction&#32;*\n");
    }

    #[test]
    fn test_description_markup_stays_literal() {
        let record = EbookRecord::new("T")
            .with_description("Chapter One\n===\n    four spaces in\nAT&amp;T &copy;");
        let md = render_markdown(&render_detail(&record, &DisplayStrings::default()));
        assert!(md.ends_with(
            "Chapter One\n\\===\n&#32;&#32;&#32;&#32;four spaces in\nAT\\&amp;T \\&copy;\n"
        ));
    }

    #[test]
    fn test_deeply_nested_sections_do_not_overflow() {
        let mut tree = RenderNode::leaf(Role::Paragraph, "deep");
        for _ in 0..300 {
            tree = RenderNode::section("S", vec![tree]);
        }
        let md = render_markdown(&tree);
        assert!(md.starts_with("## S\n\n### S\n"));
        assert!(md.ends_with("###### S\n\ndeep\n"));
    }

    #[test]
    fn test_nested_section_level() {
        let tree = RenderNode::section(
            "Outer",
            vec![RenderNode::section(
                "Inner",
                vec![RenderNode::leaf(Role::Paragraph, "x")],
            )],
        );
        assert_eq!(render_markdown(&tree), "## Outer\n\n### Inner\n\nx\n");
    }
}
