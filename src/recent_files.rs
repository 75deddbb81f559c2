//! Most-recently-opened images, newest first, one path per line.

use crate::app_home::AppHome;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tracing::warn;

/// Returns the path to the `recent_files.txt` file in the given `AppHome`
fn recent_file_path(home: &AppHome) -> PathBuf {
    home.file_path("recent_files.txt")
}

/// Load the persisted list, newest first.
///
/// # Errors
///
/// Returns an error if reading the list fails.
pub fn load_recent(home: &AppHome) -> eyre::Result<Vec<PathBuf>> {
    let path = recent_file_path(home);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(&path)?;
    Ok(s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect())
}

fn save_recent(home: &AppHome, paths: &[PathBuf]) -> eyre::Result<()> {
    let path = recent_file_path(home);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut f = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    for p in paths {
        writeln!(f, "{}", p.display())?;
    }
    Ok(())
}

/// Move `file` to the front of the list (canonicalized), keeping at most `max` entries.
///
/// # Errors
///
/// Returns an error if the path cannot be canonicalized or the list cannot be written.
pub fn add_recent(home: &AppHome, file: &Path, max: usize) -> eyre::Result<Vec<PathBuf>> {
    let canonical = dunce::canonicalize(file)?;
    let mut list = load_recent(home)?;
    list.retain(|p| p != &canonical);
    list.insert(0, canonical);
    list.truncate(max);
    save_recent(home, &list)?;
    Ok(list)
}

/// Best-effort [`add_recent`] for commands whose main job is something else.
pub fn remember(home: &AppHome, file: &Path, max: usize) {
    if let Err(e) = add_recent(home, file, max) {
        warn!("Failed to update recent files with {}: {}", file.display(), e);
    }
}

/// Empty the list. Returns how many entries were removed.
///
/// # Errors
///
/// Returns an error if the list cannot be read or written.
pub fn clear_recent(home: &AppHome) -> eyre::Result<usize> {
    let removed = load_recent(home)?.len();
    save_recent(home, &[])?;
    Ok(removed)
}
