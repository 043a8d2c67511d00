//! Read-only registry of topic content.
//!
//! A catalog must define every [`Topic`] exactly once. That check runs when
//! the catalog is built, so [`ContentCatalog::get`] can never miss at request
//! time. The [`Topic::General`] entry must echo the caller's message, so its
//! body has to carry [`MESSAGE_PLACEHOLDER`].

mod builtin;

use std::path::Path;

use crate::error::ConfigError;
use crate::models::{ContentEntry, Topic, MESSAGE_PLACEHOLDER};

pub use builtin::builtin_entries;

#[derive(Debug, Clone)]
pub struct ContentCatalog {
    /// Indexed by [`Topic::index`].
    entries: Vec<ContentEntry>,
}

impl ContentCatalog {
    pub fn new(entries: impl IntoIterator<Item = ContentEntry>) -> Result<Self, ConfigError> {
        let mut slots: Vec<Option<ContentEntry>> = vec![None; Topic::ALL.len()];

        for entry in entries {
            let slot = &mut slots[entry.topic.index()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateTopic(entry.topic));
            }
            *slot = Some(entry);
        }

        let entries = slots
            .into_iter()
            .zip(Topic::ALL)
            .map(|(slot, topic)| slot.ok_or(ConfigError::UnknownTopic(topic)))
            .collect::<Result<Vec<_>, _>>()?;

        if !entries[Topic::General.index()].body.contains(MESSAGE_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(Topic::General));
        }

        Ok(Self { entries })
    }

    /// The compiled-in mock content.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(builtin_entries())
    }

    /// Load a catalog from a JSON array of entries.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<ContentEntry> =
            serde_json::from_str(&raw).map_err(|source| ConfigError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Loaded {} catalog entries from {}", entries.len(), path.display());
        Self::new(entries)
    }

    pub fn get(&self, topic: Topic) -> &ContentEntry {
        &self.entries[topic.index()]
    }

    pub fn entries(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter()
    }
}
