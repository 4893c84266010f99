use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A resolved ebook entry, as handed over by whatever layer fetched it.
///
/// Only the fields the detail view displays are modelled. The record is
/// read-only to every renderer; nothing here validates or normalizes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbookRecord {
    /// Short classification label ("Fiction"). May be empty.
    pub category: String,
    pub title: String,
    pub author: String,
    /// Long-form prose. `null` and a missing key both decode to `None`.
    #[serde(default)]
    pub description: Option<String>,
}

impl EbookRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description to display, or `fallback` when there is nothing to show.
    ///
    /// Absent and empty descriptions are treated the same way.
    pub fn description_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(fallback)
    }

    /// Parse a record from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a record from any reader producing JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let record: Self = serde_json::from_reader(reader)?;
        tracing::debug!(title = %record.title, "record decoded");
        Ok(record)
    }

    /// Load a record from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        tracing::debug!(path = %path.display(), "loading record");
        Self::from_reader(std::io::BufReader::new(file))
    }
}
