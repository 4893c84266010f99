//! Page composition.
//!
//! [`DetailPage`] arranges blocks under a single `Page` root. It adds no
//! content of its own.

use std::fmt;

use crate::blocks::{Block, DescriptionBlock, HeaderBlock};
use crate::locale::DisplayStrings;
use crate::model::{EbookRecord, RenderNode, Role};

/// An ordered list of blocks rendered against one record.
pub struct DetailPage {
    blocks: Vec<Box<dyn Block>>,
}

impl DetailPage {
    /// A page with no blocks.
    pub fn empty() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Header followed by description.
    pub fn standard() -> Self {
        Self::empty()
            .with_block(HeaderBlock)
            .with_block(DescriptionBlock)
    }

    /// Append a block.
    pub fn with_block(mut self, block: impl Block + 'static) -> Self {
        self.blocks.push(Box::new(block));
        self
    }

    /// Names of the blocks, in render order.
    pub fn block_names(&self) -> Vec<&'static str> {
        self.blocks.iter().map(|b| b.name()).collect()
    }

    /// Render every block in order under a `Page` root.
    pub fn render(&self, record: &EbookRecord, strings: &DisplayStrings) -> RenderNode {
        let children = self
            .blocks
            .iter()
            .map(|block| {
                tracing::trace!(block = block.name(), "rendering block");
                block.render(record, strings)
            })
            .collect();
        RenderNode::container(Role::Page, children)
    }
}

impl Default for DetailPage {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for DetailPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailPage")
            .field("blocks", &self.block_names())
            .finish()
    }
}

/// Render the standard detail page with the given strings.
pub fn render_detail(record: &EbookRecord, strings: &DisplayStrings) -> RenderNode {
    DetailPage::standard().render(record, strings)
}
