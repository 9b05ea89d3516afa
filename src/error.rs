//! Fatal errors that abort a run.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::resolver::LookupError;

/// Any error that stops the run.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Invalid or unreadable configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The volumes directory could not be listed.
    #[error("Failed to list mounted volumes in {}: {source}", .path.display())]
    ListVolumes {
        /// Volumes directory
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Only the unrecoverable lookup errors end up here.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// An output directory could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        /// Directory being created
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
