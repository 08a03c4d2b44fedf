//! On-disk artifacts: the word table and its rendered counterpart, plus the
//! file-name conventions the pipeline shares with the dump download step.

use crate::config::{DUMP_PREFIX, IO_BUF_CAPACITY, RENDERED_PREFIX, WORDS_PREFIX};
use crate::words::WordTable;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn words_path(dir: &Path, snapshot: &str) -> PathBuf {
    dir.join(format!("{}-{}.json", WORDS_PREFIX, snapshot))
}

pub fn rendered_path(dir: &Path, snapshot: &str) -> PathBuf {
    dir.join(format!("{}-{}.json", RENDERED_PREFIX, snapshot))
}

/// Saves the raw word table for a snapshot. Returns the path written.
pub fn save_words(table: &WordTable, dir: &Path, snapshot: &str) -> Result<PathBuf> {
    let path = words_path(dir, snapshot);
    write_table(table, &path)?;
    info!(words = table.len(), path = ?path, "Word table saved");
    Ok(path)
}

/// Saves the rendered table for a snapshot. Returns the path written.
pub fn save_rendered(table: &WordTable, dir: &Path, snapshot: &str) -> Result<PathBuf> {
    let path = rendered_path(dir, snapshot);
    write_table(table, &path)?;
    info!(words = table.len(), path = ?path, "Rendered table saved");
    Ok(path)
}

/// Loads a previously saved table.
pub fn load_words(path: &Path) -> Result<WordTable> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open word table at: {}", path.display()))?;
    let reader = BufReader::with_capacity(IO_BUF_CAPACITY, file);
    let table = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse word table at: {}", path.display()))?;
    Ok(table)
}

/// Writes the table as pretty, key-sorted JSON. The write lands in a temp
/// file first and is renamed into place, so a crash mid-write never leaves a
/// truncated artifact behind.
fn write_table(table: &WordTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let file = File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file: {:?}", tmp_path))?;
    let mut writer = BufWriter::with_capacity(IO_BUF_CAPACITY, file);

    serde_json::to_writer_pretty(&mut writer, table).context("Failed to serialize word table")?;
    writer.flush().context("Failed to flush word table")?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {:?}", path))?;

    Ok(())
}

/// Newest dump in `dir` by file-name order. Dump files are named
/// `pages-<date>.xml` or `pages-<date>.xml.bz2`, so lexicographic order is
/// date order.
pub fn latest_dump(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut dumps: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(name) = name.to_str() {
            if name.starts_with(DUMP_PREFIX)
                && (name.ends_with(".xml") || name.ends_with(".xml.bz2"))
            {
                dumps.push(entry.path());
            }
        }
    }

    dumps.sort();
    Ok(dumps.pop())
}

/// Snapshot tag from a dump file name: `pages-20240801.xml.bz2` -> `20240801`.
pub fn snapshot_date(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let stem = name.split('.').next()?;
    let date = stem.strip_prefix(DUMP_PREFIX)?;
    if date.is_empty() {
        None
    } else {
        Some(date.to_string())
    }
}

/// Snapshot tag from a saved word-table name: `words-20240801.json` -> `20240801`.
pub fn table_snapshot(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".json")?;
    let tag = stem.strip_prefix(WORDS_PREFIX)?.strip_prefix('-')?;
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordEntry;
    use tempfile::TempDir;

    fn sample_table() -> WordTable {
        let mut table = WordTable::new();
        table.insert(WordEntry::new("Wasser", "{{Sprache|Deutsch}} Text"));
        table.insert(WordEntry::new("laufen", "{{Sprache|Deutsch}} Verb"));
        table
    }

    #[test]
    fn words_path_layout() {
        let path = words_path(Path::new("data/de"), "20240801");
        assert_eq!(path, PathBuf::from("data/de/words-20240801.json"));
    }

    #[test]
    fn rendered_path_layout() {
        let path = rendered_path(Path::new("data/de"), "20240801");
        assert_eq!(path, PathBuf::from("data/de/rendered-20240801.json"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let table = sample_table();

        let path = save_words(&table, dir.path(), "20240801").unwrap();
        let loaded = load_words(&path).unwrap();

        assert_eq!(loaded, table);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("de").join("deep");

        let path = save_words(&sample_table(), &nested, "20240801").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        save_words(&sample_table(), dir.path(), "20240801").unwrap();

        assert!(!dir.path().join("words-20240801.json.tmp").exists());
    }

    #[test]
    fn saved_json_is_key_sorted() {
        let dir = TempDir::new().unwrap();
        let path = save_words(&sample_table(), dir.path(), "20240801").unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let wasser = json.find("\"Wasser\"").unwrap();
        let laufen = json.find("\"laufen\"").unwrap();
        // "Wasser" < "laufen" in byte order.
        assert!(wasser < laufen);
    }

    #[test]
    fn load_fails_for_nonexistent_file() {
        let result = load_words(Path::new("/nonexistent/words.json"));
        assert!(result.is_err());
    }

    #[test]
    fn load_fails_for_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words-x.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(load_words(&path).is_err());
    }

    #[test]
    fn latest_dump_picks_newest_by_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pages-20240701.xml.bz2"), b"x").unwrap();
        fs::write(dir.path().join("pages-20240801.xml.bz2"), b"x").unwrap();
        fs::write(dir.path().join("pages-20240601.xml"), b"x").unwrap();
        fs::write(dir.path().join("unrelated.txt"), b"x").unwrap();

        let latest = latest_dump(dir.path()).unwrap().unwrap();
        assert_eq!(
            latest.file_name().unwrap().to_str().unwrap(),
            "pages-20240801.xml.bz2"
        );
    }

    #[test]
    fn latest_dump_none_when_empty() {
        let dir = TempDir::new().unwrap();
        assert!(latest_dump(dir.path()).unwrap().is_none());
    }

    #[test]
    fn latest_dump_fails_for_missing_directory() {
        assert!(latest_dump(Path::new("/nonexistent/dir")).is_err());
    }

    #[test]
    fn snapshot_date_variants() {
        assert_eq!(
            snapshot_date(Path::new("data/de/pages-20240801.xml.bz2")),
            Some("20240801".to_string())
        );
        assert_eq!(
            snapshot_date(Path::new("pages-20240801.xml")),
            Some("20240801".to_string())
        );
        assert_eq!(snapshot_date(Path::new("dump.xml")), None);
        assert_eq!(snapshot_date(Path::new("pages-.xml")), None);
    }

    #[test]
    fn table_snapshot_variants() {
        assert_eq!(
            table_snapshot(Path::new("data/de/words-20240801.json")),
            Some("20240801".to_string())
        );
        assert_eq!(table_snapshot(Path::new("words-.json")), None);
        assert_eq!(table_snapshot(Path::new("rendered-20240801.json")), None);
        assert_eq!(table_snapshot(Path::new("words-20240801.txt")), None);
    }
}
