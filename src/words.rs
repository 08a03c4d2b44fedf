use crate::config::PROGRESS_INTERVAL;
use crate::models::WordEntry;
use crate::parser::DumpReader;
use crate::stats::ParseStats;
use anyhow::Result;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Word to raw-wikitext mapping, the durable output of the parsing pass.
///
/// Keys are unique; a page seen later in the dump overwrites an earlier one
/// with the same title. The ordered map keeps serialization key-sorted, so
/// the persisted artifact is byte-identical across runs over the same dump.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordTable {
    words: BTreeMap<String, String>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Streams a dump into a fresh table, one page at a time.
    pub fn build(path: &Path) -> Result<(Self, ParseStats)> {
        let mut reader = DumpReader::open(path)?;
        let mut table = Self::new();
        let pb = ProgressBar::new_spinner();

        info!("Extracting words from: {}", path.display());

        while let Some(entry) = reader.next_entry()? {
            table.insert(entry);
            if reader.stats().pages() % PROGRESS_INTERVAL == 0 {
                pb.tick();
            }
        }

        pb.finish_and_clear();

        let stats = reader.into_stats();
        info!(
            words = table.len(),
            pages = stats.pages(),
            skipped = stats.skipped(),
            "Word table built"
        );

        Ok((table, stats))
    }

    /// Inserts an entry; an existing word is overwritten.
    pub fn insert(&mut self, entry: WordEntry) {
        self.words.insert(entry.word, entry.markup);
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in ascending word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words.iter().map(|(w, m)| (w.as_str(), m.as_str()))
    }
}
