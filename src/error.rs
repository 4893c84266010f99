//! Error types for loading records and exporting rendered pages.
//!
//! Rendering itself cannot fail; these errors come from the layers around it.

use thiserror::Error;

/// Errors that can occur while loading input or writing output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
