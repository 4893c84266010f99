//! # ebook-detail
//!
//! Composable rendering for the detail view of a single ebook record.
//!
//! ## Features
//!
//! - Pure display blocks ([`HeaderBlock`], [`DescriptionBlock`]) that map an
//!   [`EbookRecord`] to an abstract render tree
//! - A fallback placeholder for records without a description
//! - Localized display strings ([`DisplayStrings`], [`Locale`])
//! - Exporters for plain text, Markdown, XHTML and JSON
//!
//! ## Quick Start
//!
//! ```
//! use ebook_detail::{DisplayStrings, EbookRecord, Role, render_detail};
//!
//! let record = EbookRecord::new("The Long Road")
//!     .with_category("Fiction")
//!     .with_author("J. Doe");
//!
//! let tree = render_detail(&record, &DisplayStrings::default());
//! assert_eq!(tree.text_of(Role::Heading(1)), Some("The Long Road"));
//! assert_eq!(tree.text_of(Role::Byline), Some("by J. Doe"));
//! assert_eq!(tree.text_of(Role::Paragraph), Some("Description not available."));
//! ```
//!
//! ## Composing Pages
//!
//! Blocks can be used on their own or arranged by a [`DetailPage`]:
//!
//! ```
//! use ebook_detail::{DescriptionBlock, DetailPage, EbookRecord, Locale};
//!
//! let page = DetailPage::empty().with_block(DescriptionBlock);
//! let strings = Locale::Fr.strings();
//! let tree = page.render(&EbookRecord::new("Titre"), &strings);
//! assert_eq!(tree.children[0].text, "À propos de cet ebook");
//! ```

pub mod blocks;
pub mod error;
pub mod export;
pub mod locale;
pub mod markdown;
pub mod model;
pub mod page;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use blocks::{Block, DescriptionBlock, HeaderBlock, render_description, render_header};
pub use error::{Error, Result};
pub use export::{Exporter, Format};
pub use locale::{DisplayStrings, Locale};
pub use model::{EbookRecord, RenderNode, Role};
pub use page::{DetailPage, render_detail};
