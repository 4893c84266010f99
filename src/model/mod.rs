//! Data model shared by the blocks and exporters.
//!
//! - [`EbookRecord`]: the input record
//! - [`RenderNode`] and [`Role`]: the abstract render tree

mod record;
mod tree;

pub use record::EbookRecord;
pub use tree::{DfsIter, RenderNode, Role};
