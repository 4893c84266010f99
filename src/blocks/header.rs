use crate::locale::DisplayStrings;
use crate::model::{EbookRecord, RenderNode, Role};

use super::Block;

/// Renders the identity fields of a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderBlock;

impl Block for HeaderBlock {
    fn name(&self) -> &'static str {
        "header"
    }

    fn render(&self, record: &EbookRecord, strings: &DisplayStrings) -> RenderNode {
        render_header(record, strings)
    }
}

/// Build the header: category tag, title as the primary heading, then the
/// byline. Empty fields produce empty regions, never placeholders.
pub fn render_header(record: &EbookRecord, strings: &DisplayStrings) -> RenderNode {
    RenderNode::container(
        Role::Header,
        vec![
            RenderNode::leaf(Role::Tag, record.category.as_str()),
            RenderNode::leaf(Role::Heading(1), record.title.as_str()),
            RenderNode::leaf(Role::Byline, strings.byline(&record.author)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_order() {
        let record = EbookRecord::new("The Long Road")
            .with_category("Fiction")
            .with_author("J. Doe");
        let header = render_header(&record, &DisplayStrings::default());

        assert_eq!(header.role, Role::Header);
        let regions: Vec<(Role, &str)> = header
            .children
            .iter()
            .map(|n| (n.role, n.text.as_str()))
            .collect();
        assert_eq!(
            regions,
            vec![
                (Role::Tag, "Fiction"),
                (Role::Heading(1), "The Long Road"),
                (Role::Byline, "by J. Doe"),
            ]
        );
    }

    #[test]
    fn test_header_empty_fields_stay_empty() {
        let record = EbookRecord::new("");
        let header = render_header(&record, &DisplayStrings::default());
        assert_eq!(header.text_of(Role::Tag), Some(""));
        assert_eq!(header.text_of(Role::Heading(1)), Some(""));
        assert_eq!(header.text_of(Role::Byline), Some("by "));
    }

    #[test]
    fn test_header_uses_configured_connective() {
        let record = EbookRecord::new("T").with_author("Ana");
        let strings = crate::locale::Locale::Es.strings();
        let header = HeaderBlock.render(&record, &strings);
        assert_eq!(header.text_of(Role::Byline), Some("por Ana"));
    }
}
