//! Display blocks for the ebook detail view.
//!
//! Each block is a pure function of an [`EbookRecord`] and the active
//! [`DisplayStrings`]. Blocks hold no state and never look at each other's
//! output, so a composer may use any subset in any order.
//!
//! - [`HeaderBlock`]: category tag, title heading, author byline
//! - [`DescriptionBlock`]: titled section with the description or a placeholder

mod description;
mod header;

use crate::locale::DisplayStrings;
use crate::model::{EbookRecord, RenderNode};

pub use description::{DescriptionBlock, render_description};
pub use header::{HeaderBlock, render_header};

/// A presentational component producing one region of the detail view.
pub trait Block: Send + Sync {
    /// Short identifier, used for logging and CLI selection.
    fn name(&self) -> &'static str;

    /// Render the block for `record`.
    fn render(&self, record: &EbookRecord, strings: &DisplayStrings) -> RenderNode;
}
