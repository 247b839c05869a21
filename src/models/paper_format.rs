//! Registry of named paper formats.
//!
//! The table is embedded from `data/paper_formats.toml` and exposes its keys
//! sorted alphabetically, which is the order the format selector shows them in.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

use super::SizeF;

/// Embedded paper format definitions
const PAPER_FORMATS_TOML: &str = include_str!("../data/paper_formats.toml");

/// Metadata of the formats file
#[derive(Debug, Clone, Deserialize)]
struct FormatsMeta {
    unit: String,
}

/// Portrait dimensions of one format
#[derive(Debug, Clone, Copy, Deserialize)]
struct FormatEntry {
    width: f64,
    height: f64,
}

/// Root structure of the formats file
#[derive(Debug, Clone, Deserialize)]
struct FormatsFile {
    meta: FormatsMeta,
    formats: BTreeMap<String, FormatEntry>,
}

/// Known paper formats keyed by display name.
#[derive(Debug, Clone)]
pub struct PaperFormats {
    unit: String,
    formats: BTreeMap<String, SizeF>,
}

impl PaperFormats {
    /// Loads the embedded format table.
    ///
    /// # Errors
    /// Returns an error if the embedded TOML cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::from_toml(PAPER_FORMATS_TOML)
    }

    /// Parses a format table from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid formats file or contains
    /// a non-positive dimension.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: FormatsFile =
            toml::from_str(text).context("Failed to parse paper format table")?;

        let mut formats = BTreeMap::new();
        for (name, entry) in file.formats {
            if entry.width <= 0.0 || entry.height <= 0.0 {
                anyhow::bail!("Paper format '{name}' has a non-positive dimension");
            }
            formats.insert(name, SizeF::new(entry.width, entry.height));
        }

        Ok(Self {
            unit: file.meta.unit,
            formats,
        })
    }

    /// Unit the sizes are expressed in.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Portrait size of a format.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SizeF> {
        self.formats.get(name).copied()
    }

    /// Whether the table knows a format.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Format names in alphabetical order.
    #[must_use]
    pub fn names_sorted(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }

    /// Number of formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl PaperFormats {
    fn from_toml_or_empty(text: &str) -> Self {
        Self::from_toml(text).unwrap_or_else(|e| {
            tracing::warn!("Paper format table unusable, no formats offered: {e:#}");
            Self {
                unit: "cm".to_string(),
                formats: BTreeMap::new(),
            }
        })
    }
}

/// The embedded table. A broken table is logged and yields no formats.
impl Default for PaperFormats {
    fn default() -> Self {
        Self::from_toml_or_empty(PAPER_FORMATS_TOML)
    }
}
