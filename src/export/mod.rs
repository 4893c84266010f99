//! Exporters turning a render tree into concrete output.
//!
//! Provides the `Exporter` trait and format-specific implementations.
//!
//! # Example
//!
//! ```
//! use ebook_detail::export::{Exporter, TextExporter};
//! use ebook_detail::{DisplayStrings, EbookRecord, render_detail};
//!
//! let record = EbookRecord::new("The Long Road").with_author("J. Doe");
//! let tree = render_detail(&record, &DisplayStrings::default());
//!
//! let mut out = Vec::new();
//! TextExporter::new().export(&tree, &mut out)?;
//! assert!(String::from_utf8(out)?.contains("by J. Doe"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::RenderNode;

mod json;
mod markdown;
mod text;
mod xhtml;

pub use json::JsonExporter;
pub use markdown::MarkdownExporter;
pub use text::TextExporter;
pub use xhtml::{XhtmlConfig, XhtmlExporter};

/// Trait for writing a render tree in a specific format.
pub trait Exporter {
    /// Write the tree to `writer`.
    fn export<W: Write>(&self, tree: &RenderNode, writer: &mut W) -> Result<()>;

    /// Render the tree into a `String`.
    fn export_to_string(&self, tree: &RenderNode) -> Result<String> {
        let mut buf = Vec::new();
        self.export(tree, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Output formats understood by [`Format::export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Text,
    Markdown,
    Xhtml,
    Json,
}

impl Format {
    /// Guess the format from a file extension. Unknown extensions yield `None`.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Format::Text),
            "md" | "markdown" => Some(Format::Markdown),
            "xhtml" | "html" | "htm" => Some(Format::Xhtml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Format for an output file. Paths without an extension get the default
    /// format; an unrecognized extension is an error.
    pub fn for_output(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().is_none() {
            return Ok(Format::default());
        }
        Self::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
    }

    /// Export with this format's default exporter configuration.
    pub fn export<W: Write>(self, tree: &RenderNode, writer: &mut W) -> Result<()> {
        match self {
            Format::Text => TextExporter::new().export(tree, writer),
            Format::Markdown => MarkdownExporter::new().export(tree, writer),
            Format::Xhtml => XhtmlExporter::new().export(tree, writer),
            Format::Json => JsonExporter::new().export(tree, writer),
        }
    }

    pub fn export_to_string(self, tree: &RenderNode) -> Result<String> {
        let mut buf = Vec::new();
        self.export(tree, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "markdown" | "md" => Ok(Format::Markdown),
            "xhtml" | "html" => Ok(Format::Xhtml),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Text => "text",
            Format::Markdown => "markdown",
            Format::Xhtml => "xhtml",
            Format::Json => "json",
        })
    }
}
