//! Entry store module
//!
//! Persists named date values in a flat `key=value` file (`vars.env`).
//! Every mutation is a whole-file rewrite: load all entries, change the
//! in-memory list, write everything back. Insertion order is preserved.
//! There is no escaping, so a value must not contain a newline and the
//! first `=` on a line always ends the key.

mod paths;
mod types;

pub use paths::{ensure_ready, resolve_paths_from_env, StatePaths};

#[cfg(test)]
pub use paths::resolve_paths;
pub use types::{Entry, UpsertOutcome};

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::{Limits, OverflowPolicy};
use crate::error::{GetDateError, Result};
use types::truncate_bytes;

/// Handle on one store file
#[derive(Debug, Clone)]
pub struct Store {
    file: PathBuf,
    limits: Limits,
}

impl Store {
    pub fn new(file: impl Into<PathBuf>, limits: Limits) -> Self {
        Self {
            file: file.into(),
            limits,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Read entries in file order, at most `max_entries` of them.
    ///
    /// A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Entry>> {
        let bytes = match fs::read(&self.file) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(GetDateError::Store(format!(
                    "cannot read state file {}: {}",
                    self.file.display(),
                    e
                )))
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        let entries: Vec<Entry> = content
            .lines()
            .filter_map(Entry::parse_line)
            .take(self.limits.max_entries)
            .map(|entry| self.clamp(entry))
            .collect();

        log::debug!("loaded {} entries from {}", entries.len(), self.file.display());
        Ok(entries)
    }

    /// Overwrite the file with `entries`, one line each
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let write_error = |e: std::io::Error| {
            GetDateError::Store(format!(
                "cannot write state file {}: {}",
                self.file.display(),
                e
            ))
        };

        let file = File::create(&self.file).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", entry.to_line()).map_err(write_error)?;
        }
        writer.flush().map_err(write_error)?;

        log::debug!("saved {} entries to {}", entries.len(), self.file.display());
        Ok(())
    }

    /// Set `key` to `value`, replacing in place or appending.
    ///
    /// A new key arriving at a full store is dropped or rejected
    /// according to `limits.on_full`.
    pub fn upsert(&self, key: &str, value: &str) -> Result<UpsertOutcome> {
        let outcomes = self.upsert_all(&[(key, value)])?;
        Ok(outcomes[0])
    }

    /// Apply several upserts in order with one load and one save.
    ///
    /// If any of them is rejected nothing is written.
    pub fn upsert_all(&self, pairs: &[(&str, &str)]) -> Result<Vec<UpsertOutcome>> {
        let mut entries = self.load()?;
        let outcomes = pairs
            .iter()
            .map(|(key, value)| self.apply(&mut entries, self.clamp(Entry::new(*key, *value))))
            .collect::<Result<Vec<_>>>()?;

        if outcomes.iter().any(|o| *o != UpsertOutcome::Dropped) {
            self.save(&entries)?;
        }
        Ok(outcomes)
    }

    fn apply(&self, entries: &mut Vec<Entry>, incoming: Entry) -> Result<UpsertOutcome> {
        if let Some(existing) = entries.iter_mut().find(|e| e.key == incoming.key) {
            existing.value = incoming.value;
            log::debug!("updated {}", incoming.key);
            return Ok(UpsertOutcome::Updated);
        }

        if entries.len() >= self.limits.max_entries {
            return match self.limits.on_full {
                OverflowPolicy::Drop => {
                    log::debug!(
                        "store full ({} entries), dropping {}",
                        entries.len(),
                        incoming.key
                    );
                    Ok(UpsertOutcome::Dropped)
                }
                OverflowPolicy::Reject => Err(GetDateError::Store(format!(
                    "state file is full ({} entries), cannot add {}",
                    entries.len(),
                    incoming.key
                ))),
            };
        }

        log::debug!("inserted {}", incoming.key);
        entries.push(incoming);
        Ok(UpsertOutcome::Inserted)
    }

    /// Truncate the store to zero length
    pub fn clear(&self) -> Result<()> {
        File::create(&self.file).map_err(|e| {
            GetDateError::Store(format!(
                "cannot clear state file {}: {}",
                self.file.display(),
                e
            ))
        })?;
        log::debug!("cleared {}", self.file.display());
        Ok(())
    }

    fn clamp(&self, entry: Entry) -> Entry {
        Entry {
            key: truncate_bytes(&entry.key, self.limits.max_key_bytes).to_string(),
            value: truncate_bytes(&entry.value, self.limits.max_value_bytes).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> Store {
        Store::new(temp.path().join("vars.env"), Limits::default())
    }

    fn small_store(temp: &TempDir, max_entries: usize, on_full: OverflowPolicy) -> Store {
        let limits = Limits {
            max_entries,
            on_full,
            ..Limits::default()
        };
        Store::new(temp.path().join("vars.env"), limits)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_skips_lines_without_equals() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "a=1\nnot a pair\nb=2\r\n").unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries, vec![Entry::new("a", "1"), Entry::new("b", "2")]);
    }

    #[test]
    fn test_load_is_bounded() {
        let temp = TempDir::new().unwrap();
        let store = small_store(&temp, 2, OverflowPolicy::Drop);
        fs::write(store.path(), "a=1\nb=2\nc=3\n").unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_save_writes_in_order() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store
            .save(&[Entry::new("z", "last"), Entry::new("a", "first")])
            .unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "z=last\na=first\n");
    }

    #[test]
    fn test_upsert_round_trip_keeps_other_keys() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert_eq!(store.upsert("_theYear", "2024").unwrap(), UpsertOutcome::Inserted);
        assert_eq!(store.upsert("_theMonth", "March").unwrap(), UpsertOutcome::Inserted);
        assert_eq!(store.upsert("_theYear", "2025").unwrap(), UpsertOutcome::Updated);

        let entries = store.load().unwrap();
        assert_eq!(
            entries,
            vec![Entry::new("_theYear", "2025"), Entry::new("_theMonth", "March")]
        );
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.upsert("_getDate", "03-15-24").unwrap();
        let once = fs::read_to_string(store.path()).unwrap();

        for _ in 0..5 {
            store.upsert("_getDate", "03-15-24").unwrap();
        }
        assert_eq!(fs::read_to_string(store.path()).unwrap(), once);
    }

    #[test]
    fn test_upsert_value_with_equals_is_stored_raw() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.upsert("expr", "a=b").unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "expr=a=b\n");
        assert_eq!(store.load().unwrap()[0].value, "a=b");
    }

    #[test]
    fn test_full_store_drops_new_key() {
        let temp = TempDir::new().unwrap();
        let store = small_store(&temp, 1, OverflowPolicy::Drop);

        store.upsert("a", "1").unwrap();
        assert_eq!(store.upsert("b", "2").unwrap(), UpsertOutcome::Dropped);
        assert_eq!(store.upsert("a", "3").unwrap(), UpsertOutcome::Updated);

        assert_eq!(store.load().unwrap(), vec![Entry::new("a", "3")]);
    }

    #[test]
    fn test_full_store_rejects_new_key() {
        let temp = TempDir::new().unwrap();
        let store = small_store(&temp, 1, OverflowPolicy::Reject);

        store.upsert("a", "1").unwrap();
        let result = store.upsert("b", "2");
        assert!(matches!(result, Err(GetDateError::Store(_))));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_upsert_all_rejects_without_partial_write() {
        let temp = TempDir::new().unwrap();
        let store = small_store(&temp, 1, OverflowPolicy::Reject);

        let result = store.upsert_all(&[("_theTwoDigitDate", "15"), ("_theMonth", "March")]);
        assert!(matches!(result, Err(GetDateError::Store(_))));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_all_saves_in_order() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let outcomes = store
            .upsert_all(&[("a", "1"), ("b", "2"), ("a", "3")])
            .unwrap();
        assert_eq!(
            outcomes,
            vec![
                UpsertOutcome::Inserted,
                UpsertOutcome::Inserted,
                UpsertOutcome::Updated
            ]
        );
        assert_eq!(store.load().unwrap(), vec![Entry::new("a", "3"), Entry::new("b", "2")]);
    }

    #[test]
    fn test_upsert_truncates_long_value() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let long = "x".repeat(300);
        store.upsert("k", &long).unwrap();
        assert_eq!(store.load().unwrap()[0].value.len(), 255);
    }

    #[test]
    fn test_clear_then_load_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.upsert("a", "1").unwrap();
        store.upsert("b", "2").unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(fs::metadata(store.path()).unwrap().len(), 0);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().join("missing/vars.env"), Limits::default());

        let result = store.save(&[Entry::new("a", "1")]);
        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("cannot write state file"));
    }
}
