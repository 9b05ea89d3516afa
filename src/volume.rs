//! Mounted glossary volumes.

use std::path::{
    Path,
    PathBuf,
};

use crate::catalogue::Locale;

/// Where macOS mounts disk images.
pub const DEFAULT_VOLUMES_DIRECTORY: &str = "/Volumes";

/// Lists the mounted volumes (directories) directly inside `volumes_directory`.
///
/// Sorted by path so logs read the same from run to run.
///
/// # Errors
/// Returns error if the directory cannot be read.
pub fn list_mounted_volumes(volumes_directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut volumes = Vec::new();
    for entry in std::fs::read_dir(volumes_directory)? {
        let path = entry?.path();
        if path.is_dir() {
            volumes.push(path);
        }
    }
    volumes.sort();

    tracing::debug!(
        volumes_directory = %volumes_directory.display(),
        count = volumes.len(),
        "Listed mounted volumes"
    );
    Ok(volumes)
}

/// Volumes whose name contains the locale's volume name (case-sensitive).
///
/// Usually two match: the macOS and the iOS glossary for the same language.
#[must_use]
pub fn matching_volumes(locale: &Locale, volumes: &[PathBuf]) -> Vec<PathBuf> {
    volumes
        .iter()
        .filter(|volume| {
            volume
                .file_name()
                .is_some_and(|name| name.to_string_lossy().contains(locale.volume_name.as_str()))
        })
        .cloned()
        .collect()
}
