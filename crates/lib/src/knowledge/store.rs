//! # Knowledge Entry Store
//!
//! An immutable, in-memory collection of knowledge entries. The store is built once at
//! startup, validated (unique, non-empty ids), and then only read. Iteration order is the
//! load order, which the search engine relies on for deterministic tie-breaking.

use crate::{errors::KnowledgeError, types::KnowledgeEntry};
use serde::Deserialize;
use std::{collections::HashMap, path::Path};
use tracing::{debug, info};

/// The corpus compiled into the library.
const BUILTIN_KNOWLEDGE_BASE: &str = include_str!("../../data/knowledge_base.yml");

#[derive(Deserialize, Debug)]
struct KnowledgeFile {
    #[serde(default)]
    entries: Vec<KnowledgeEntry>,
}

/// A read-only knowledge base.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Builds a store from entries in load order.
    ///
    /// Fails on the first empty id, empty title or duplicate id.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Result<Self, KnowledgeError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(KnowledgeError::EmptyId(position));
            }
            if entry.title.trim().is_empty() {
                return Err(KnowledgeError::EmptyTitle(entry.id.clone()));
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(KnowledgeError::DuplicateId(entry.id.clone()));
            }
        }
        info!("Loaded {} knowledge entries.", entries.len());
        Ok(Self { entries, index })
    }

    /// Parses a YAML document of the form `entries: [...]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile = serde_yaml::from_str(yaml)?;
        Self::from_entries(file.entries)
    }

    /// Reads and parses a YAML corpus from disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        debug!("Reading knowledge base from '{}'.", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// The corpus shipped with the library.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::from_yaml_str(BUILTIN_KNOWLEDGE_BASE)
    }

    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries associated with `page_path`, in load order.
    ///
    /// An entry matches when one of its page paths equals `page_path` or is a parent route of
    /// it (`/forms` matches `/forms/benefits`). The root path `/` only matches itself.
    pub fn entries_for_page(&self, page_path: &str) -> Vec<&KnowledgeEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                entry
                    .page_context
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .any(|route| route_matches(route, page_path))
            })
            .collect()
    }
}

fn route_matches(route: &str, page_path: &str) -> bool {
    if route == page_path {
        return true;
    }
    let route = route.trim_end_matches('/');
    if route.is_empty() {
        return false;
    }
    page_path
        .strip_prefix(route)
        .is_some_and(|rest| rest.starts_with('/'))
}
