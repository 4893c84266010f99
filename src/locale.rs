//! User-facing display strings.
//!
//! The blocks never embed literal copy; every word they emit on their own
//! behalf comes from a [`DisplayStrings`] value. Built-in translations are
//! available through [`Locale`], and overrides can be loaded from JSON.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The strings emitted by the detail blocks.
///
/// Missing keys in a JSON override fall back to the English defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayStrings {
    /// Word placed before the author name ("by").
    pub connective: String,
    /// Title of the description section.
    pub description_title: String,
    /// Shown when a record has no description.
    pub description_placeholder: String,
}

impl Default for DisplayStrings {
    fn default() -> Self {
        Locale::En.strings()
    }
}

impl DisplayStrings {
    /// Built-in strings for a language tag such as `"fr"` or `"en-GB"`.
    pub fn for_locale(tag: &str) -> Result<Self> {
        Ok(tag.parse::<Locale>()?.strings())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load overrides from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading display strings");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The byline for `author`: connective, one space, author verbatim.
    pub fn byline(&self, author: &str) -> String {
        let mut line = String::with_capacity(self.connective.len() + 1 + author.len());
        line.push_str(&self.connective);
        line.push(' ');
        line.push_str(author);
        line
    }
}

/// Languages with built-in display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Es, Locale::Fr, Locale::De];

    /// Primary language subtag.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    pub fn strings(self) -> DisplayStrings {
        let (connective, title, placeholder) = match self {
            Locale::En => ("by", "About this ebook", "Description not available."),
            Locale::Es => (
                "por",
                "Acerca de este libro electrónico",
                "Descripción no disponible.",
            ),
            Locale::Fr => ("par", "À propos de cet ebook", "Description non disponible."),
            Locale::De => ("von", "Über dieses E-Book", "Beschreibung nicht verfügbar."),
        };
        DisplayStrings {
            connective: connective.to_string(),
            description_title: title.to_string(),
            description_placeholder: placeholder.to_string(),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts BCP 47-style tags; region and script subtags are ignored.
    fn from_str(tag: &str) -> Result<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|l| l.tag() == primary)
            .ok_or_else(|| Error::UnknownLocale(tag.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
