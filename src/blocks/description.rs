use crate::locale::DisplayStrings;
use crate::model::{EbookRecord, RenderNode, Role};

use super::Block;

/// Renders the long-form description under a fixed section title.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionBlock;

impl Block for DescriptionBlock {
    fn name(&self) -> &'static str {
        "description"
    }

    fn render(&self, record: &EbookRecord, strings: &DisplayStrings) -> RenderNode {
        render_description(record, strings)
    }
}

/// Build the description section.
///
/// The text is passed through untouched; absent or empty descriptions show
/// the placeholder instead.
pub fn render_description(record: &EbookRecord, strings: &DisplayStrings) -> RenderNode {
    let body = record.description_or(&strings.description_placeholder);
    RenderNode::section(
        strings.description_title.as_str(),
        vec![RenderNode::leaf(Role::Paragraph, body)],
    )
}
