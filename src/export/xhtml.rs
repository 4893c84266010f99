//! XHTML fragment exporter.
//!
//! Writes an `<article>` fragment suitable for embedding in a host page.
//! Styling is left to the host; elements only carry semantic class names.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::model::{RenderNode, Role};

use super::Exporter;

/// Configuration for XHTML export.
#[derive(Debug, Clone)]
pub struct XhtmlConfig {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Class attribute of the root `<article>`.
    pub root_class: String,
}

impl Default for XhtmlConfig {
    fn default() -> Self {
        Self {
            indent: None,
            root_class: "ebook-detail".to_string(),
        }
    }
}

/// Exporter for XHTML fragments.
#[derive(Debug, Clone, Default)]
pub struct XhtmlExporter {
    config: XhtmlConfig,
}

impl XhtmlExporter {
    /// Create an XhtmlExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an XhtmlExporter with the specified configuration.
    pub fn with_config(config: XhtmlConfig) -> Self {
        Self { config }
    }
}

impl Exporter for XhtmlExporter {
    fn export<W: Write>(&self, tree: &RenderNode, writer: &mut W) -> Result<()> {
        {
            let mut xml = match self.config.indent {
                Some(width) => Writer::new_with_indent(&mut *writer, b' ', width),
                None => Writer::new(&mut *writer),
            };
            let mut ctx = XhtmlContext {
                writer: &mut xml,
                root_class: &self.config.root_class,
                section_depth: 0,
            };
            ctx.write_node(tree)?;
        }
        writer.write_all(b"\n")?;
        tracing::debug!(root = %self.config.root_class, "wrote xhtml");
        Ok(())
    }
}

struct XhtmlContext<'a, W: Write> {
    writer: &'a mut Writer<W>,
    root_class: &'a str,
    section_depth: u8,
}

impl<W: Write> XhtmlContext<'_, W> {
    fn write_node(&mut self, node: &RenderNode) -> Result<()> {
        match node.role {
            Role::Page => {
                let class = self.root_class;
                self.open("article", Some(class))?;
                self.write_children(node)?;
                self.close("article")
            }
            Role::Header => {
                self.open("header", None)?;
                self.write_children(node)?;
                self.close("header")
            }
            Role::Section => {
                self.open("section", None)?;
                let level = 2u8.saturating_add(self.section_depth).min(6);
                self.leaf(&heading_tag(level), None, &node.text)?;
                self.section_depth = self.section_depth.saturating_add(1);
                self.write_children(node)?;
                self.section_depth = self.section_depth.saturating_sub(1);
                self.close("section")
            }
            Role::Tag => self.leaf("span", Some("category"), &node.text),
            Role::Heading(level) => self.leaf(&heading_tag(level), None, &node.text),
            Role::Byline => self.leaf("p", Some("byline"), &node.text),
            Role::Paragraph => self.leaf("p", None, &node.text),
        }
    }

    fn write_children(&mut self, node: &RenderNode) -> Result<()> {
        for child in &node.children {
            self.write_node(child)?;
        }
        Ok(())
    }

    fn open(&mut self, name: &str, class: Option<&str>) -> Result<()> {
        let mut start = BytesStart::new(name);
        if let Some(class) = class {
            start.push_attribute(("class", class));
        }
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Element with text content. Empty text still produces an open/close
    /// pair, since `<p/>` is not valid HTML.
    fn leaf(&mut self, name: &str, class: Option<&str>, text: &str) -> Result<()> {
        self.open(name, class)?;
        if !text.is_empty() {
            self.writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        self.close(name)
    }
}

fn heading_tag(level: u8) -> Cow<'static, str> {
    match level.clamp(1, 6) {
        1 => Cow::Borrowed("h1"),
        2 => Cow::Borrowed("h2"),
        n => Cow::Owned(format!("h{n}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::DisplayStrings;
    use crate::model::EbookRecord;
    use crate::page::render_detail;

    fn page(record: &EbookRecord) -> RenderNode {
        render_detail(record, &DisplayStrings::default())
    }

    #[test]
    fn test_xhtml_structure() {
        let record = EbookRecord::new("The Long Road")
            .with_category("Fiction")
            .with_author("J. Doe")
            .with_description("A short tale.");
        let xhtml = XhtmlExporter::new().export_to_string(&page(&record)).unwrap();
        assert_eq!(
            xhtml,
            "<article class=\"ebook-detail\"><header><span class=\"category\">Fiction</span>\
             <h1>The Long Road</h1><p class=\"byline\">by J. Doe</p></header>\
             <section><h2>About this ebook</h2><p>A short tale.</p></section></article>\n"
        );
    }

    #[test]
    fn test_xhtml_escapes_text() {
        let record = EbookRecord::new("Tom & Jerry").with_description("<script>");
        let xhtml = XhtmlExporter::new().export_to_string(&page(&record)).unwrap();
        assert!(xhtml.contains("<h1>Tom &amp; Jerry</h1>"));
        assert!(xhtml.contains("<p>&lt;script&gt;</p>"));
    }

    #[test]
    fn test_xhtml_empty_regions_keep_elements() {
        let xhtml = XhtmlExporter::new()
            .export_to_string(&page(&EbookRecord::new("Untitled")))
            .unwrap();
        assert!(xhtml.contains("<span class=\"category\"></span>"));
        assert!(xhtml.contains("<p class=\"byline\">by </p>"));
    }

    #[test]
    fn test_xhtml_deeply_nested_sections() {
        let mut tree = RenderNode::leaf(Role::Paragraph, "deep");
        for _ in 0..300 {
            tree = RenderNode::section("S", vec![tree]);
        }
        let xhtml = XhtmlExporter::new().export_to_string(&tree).unwrap();
        assert!(xhtml.starts_with("<section><h2>S</h2><section><h3>S</h3>"));
        assert!(xhtml.contains("<h6>S</h6><p>deep</p></section>"));
    }

    #[test]
    fn test_xhtml_custom_root_class() {
        let exporter = XhtmlExporter::with_config(XhtmlConfig {
            indent: Some(2),
            root_class: "product".to_string(),
        });
        let xhtml = exporter
            .export_to_string(&page(&EbookRecord::new("T")))
            .unwrap();
        assert!(xhtml.starts_with("<article class=\"product\">"));
        assert!(xhtml.contains("\n  <header>"));
    }
}
