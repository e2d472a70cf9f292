//! Platform directories for config and logs.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Name of the active log file inside the cache dir.
const LATEST_LOG: &str = "latest.log";

/// Prefix of archived log files.
const ARCHIVE_PREFIX: &str = "folio-";

/// Archived logs kept after rotation.
const KEEP_ARCHIVED_LOGS: usize = 25;

/// Resolved application directories.
#[derive(Debug, Clone)]
pub struct AppDirs {
    config_dir: PathBuf,
    cache_dir: PathBuf,
}

impl AppDirs {
    /// Resolve the directories, or `None` if there is no home directory.
    ///
    /// - Linux: `~/.config/folio` and `~/.cache/folio`
    /// - macOS: `~/Library/Application Support/dev.folio.folio` and `~/Library/Caches/dev.folio.folio`
    pub fn discover() -> Option<Self> {
        let dirs = ProjectDirs::from("dev", "folio", "folio")?;
        Some(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            cache_dir: dirs.cache_dir().to_path_buf(),
        })
    }

    /// Path of the optional `config.json`.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Path of the log file for this run.
    pub fn log_file(&self) -> PathBuf {
        self.cache_dir.join(LATEST_LOG)
    }

    /// Archive the previous run's log and prune old archives.
    ///
    /// Creates the cache dir if needed.
    pub fn rotate_logs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;

        let latest = self.log_file();
        if latest.exists() {
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            let archived = self
                .cache_dir
                .join(format!("{}{}.log", ARCHIVE_PREFIX, stamp));
            fs::rename(&latest, archived)?;
        }

        prune_archives(&self.cache_dir, KEEP_ARCHIVED_LOGS)
    }
}

/// Delete the oldest archived logs so at most `keep` remain.
///
/// Archive names embed a sortable timestamp, so name order is age order.
fn prune_archives(dir: &Path, keep: usize) -> io::Result<()> {
    let mut archives: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_archive(path))
        .collect();

    if archives.len() <= keep {
        return Ok(());
    }
    archives.sort();
    let excess = archives.len() - keep;
    for path in archives.into_iter().take(excess) {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
}
