//! Process-wide watchlist of `"{type}-{id}"` keys, persisted as a JSON
//! array of strings (e.g. `~/.local/share/terebi/watchlist.json`, or
//! platform equivalent via the `directories` crate).

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::models::{watchlist_key, MediaType};

const FILE_NAME: &str = "watchlist.json";

/// Errors from watchlist persistence. Only writes can fail; unreadable
/// or malformed files read as an empty set.
#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Set of watchlisted media keys backed by a single JSON file.
///
/// The file is re-read on every access and rewritten in sorted order
/// after every mutation, so a corrupt file heals on the next toggle.
/// An interior mutex serializes read-modify-write cycles; the store is
/// the one piece of state shared across screens.
pub struct Watchlist {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Watchlist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Open the watchlist at its default platform location.
    pub fn open_default() -> Option<Self> {
        default_path().map(Self::new)
    }

    /// Whether the given `"{type}-{id}"` key is in the watchlist.
    pub fn contains(&self, key: &str) -> bool {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read_set().contains(key)
    }

    /// Flip membership for (media_type, id) and re-persist the full set.
    /// Returns the new membership state.
    pub fn toggle(&self, media_type: MediaType, id: u64) -> Result<bool, WatchlistError> {
        let key = watchlist_key(media_type, id);
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut set = self.read_set();
        let now_member = if set.remove(&key) {
            false
        } else {
            set.insert(key);
            true
        };
        self.write_set(&set)?;
        Ok(now_member)
    }

    fn read_set(&self) -> BTreeSet<String> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return BTreeSet::new();
        };
        match serde_json::from_str::<Vec<String>>(&contents) {
            Ok(keys) => keys.into_iter().collect(),
            Err(e) => {
                tracing::debug!(error = %e, "unreadable watchlist file, treating as empty");
                BTreeSet::new()
            }
        }
    }

    fn write_set(&self, set: &BTreeSet<String>) -> Result<(), WatchlistError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // BTreeSet iterates in ascending order, so the array serializes sorted.
        let keys: Vec<&String> = set.iter().collect();
        std::fs::write(&self.path, serde_json::to_string(&keys)?)?;
        Ok(())
    }
}

/// Default path for the watchlist file.
fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "terebi").map(|dirs| dirs.data_dir().join(FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_watchlist() -> (tempfile::TempDir, Watchlist) {
        let dir = tempfile::tempdir().unwrap();
        let watchlist = Watchlist::new(dir.path().join("watchlist.json"));
        (dir, watchlist)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (_dir, watchlist) = temp_watchlist();

        assert!(watchlist.toggle(MediaType::Movie, 42).unwrap());
        assert!(watchlist.contains("movie-42"));

        assert!(!watchlist.toggle(MediaType::Movie, 42).unwrap());
        assert!(!watchlist.contains("movie-42"));
    }

    #[test]
    fn test_persisted_array_is_sorted() {
        let (dir, watchlist) = temp_watchlist();

        watchlist.toggle(MediaType::Tv, 9).unwrap();
        watchlist.toggle(MediaType::Movie, 42).unwrap();
        watchlist.toggle(MediaType::Movie, 7).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("watchlist.json")).unwrap();
        let keys: Vec<String> = serde_json::from_str(&contents).unwrap();
        assert_eq!(keys, vec!["movie-42", "movie-7", "tv-9"]);
    }

    #[test]
    fn test_same_id_different_types_are_distinct() {
        let (_dir, watchlist) = temp_watchlist();

        watchlist.toggle(MediaType::Movie, 42).unwrap();
        watchlist.toggle(MediaType::Tv, 42).unwrap();

        assert!(watchlist.contains("movie-42"));
        assert!(watchlist.contains("tv-42"));
    }

    #[test]
    fn test_malformed_file_reads_as_empty() {
        let (dir, watchlist) = temp_watchlist();
        std::fs::write(dir.path().join("watchlist.json"), "not json").unwrap();

        assert!(!watchlist.contains("movie-42"));

        // The next write heals the file.
        watchlist.toggle(MediaType::Movie, 42).unwrap();
        assert!(watchlist.contains("movie-42"));
    }
}
