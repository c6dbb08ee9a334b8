//! File-backed leaderboard store.

use log::{info, warn};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{rank, LeaderboardEntry, LeaderboardError, MAX_ENTRIES};

/// Reads and atomically rewrites the leaderboard file.
///
/// `record_win` is a read-modify-write; the internal lock serializes it for
/// every caller sharing this store.
#[derive(Debug)]
pub struct LeaderboardStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted entries: the fastest [`MAX_ENTRIES`], ascending by
    /// time.
    ///
    /// A missing file is an empty leaderboard, not an error.
    pub fn load(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(LeaderboardError::Unreadable {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut entries: Vec<LeaderboardEntry> =
            serde_json::from_str(&data).map_err(|source| LeaderboardError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        entries.sort_by_key(|e| e.time);
        entries.truncate(MAX_ENTRIES);
        Ok(entries)
    }

    /// Like [`load`](Self::load), but a bad store reads as empty with a warning.
    ///
    /// The file is left untouched.
    pub fn load_or_empty(&self) -> Vec<LeaderboardEntry> {
        self.load().unwrap_or_else(|err| {
            warn!("Ignoring leaderboard: {}", err);
            Vec::new()
        })
    }

    /// The persisted top entries.
    pub fn top_entries(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        self.load()
    }

    /// Record a completed game and return the updated top entries.
    ///
    /// A corrupt file is moved aside to the first free `<file>.corrupt`,
    /// `<file>.corrupt.1`, ... and replaced by a fresh leaderboard. An
    /// unreadable file aborts the update.
    pub fn record_win(
        &self,
        player: &str,
        seconds: u64,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(err @ LeaderboardError::Corrupt { .. }) => {
                let backup = self.backup_path();
                warn!("{}; moving it to {}", err, backup.display());
                fs::rename(&self.path, &backup).map_err(|source| LeaderboardError::Write {
                    path: backup,
                    source,
                })?;
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        rank(&mut entries, LeaderboardEntry::new(player, seconds));
        self.write_atomic(&entries)?;

        info!("Recorded {} in {}s on the leaderboard", player, seconds);
        Ok(entries)
    }

    /// Write to a sibling temp file, flush it to disk, then rename it over the
    /// target so readers see either the old or the new leaderboard.
    fn write_atomic(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        let tmp = self.sibling("tmp");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error(parent))?;
        }

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
            .map_err(write_error(&tmp))?;

        let mut file = File::create(&tmp).map_err(write_error(&tmp))?;
        file.write_all(&json).map_err(write_error(&tmp))?;
        file.sync_all().map_err(write_error(&tmp))?;
        drop(file);

        fs::rename(&tmp, &self.path).map_err(write_error(&self.path))
    }

    /// First `<file>.corrupt[.N]` name not already on disk.
    fn backup_path(&self) -> PathBuf {
        let first = self.sibling("corrupt");
        if !first.exists() {
            return first;
        }
        (1u32..)
            .map(|n| self.sibling(&format!("corrupt.{n}")))
            .find(|path| !path.exists())
            .unwrap_or(first)
    }

    /// `<file>.<suffix>` next to the leaderboard file.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("leaderboard"));
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> LeaderboardError {
    let path = path.to_path_buf();
    move |source| LeaderboardError::Write { path, source }
}
