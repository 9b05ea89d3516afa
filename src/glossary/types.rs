//! Glossary entry and error types.

use std::path::PathBuf;

use thiserror::Error;

/// A localisation entry parsed from a glossary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalisationEntry {
    /// The file the entry was read from.
    pub source_file: PathBuf,
    /// The usage description to help with translation.
    pub comment: Option<String>,
    /// The lookup key (`Position`).
    ///
    /// `None` when Apple's strings file used a whitespace-only key, which never matches.
    pub key: Option<String>,
    /// The English text.
    pub base: String,
    /// The localised text.
    pub translation: String,
}

/// Reading a glossary file failed. Always fatal for the run.
#[derive(Error, Debug)]
pub enum GlossaryError {
    /// The file could not be read.
    #[error("Failed to read glossary file {}: {source}", .path.display())]
    Io {
        /// Glossary file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed XML.
    #[error("Malformed XML in glossary file {}: {message}", .path.display())]
    Malformed {
        /// Glossary file
        path: PathBuf,
        /// Reader error, with the byte offset where known
        message: String,
    },

    /// The document parsed but does not follow the `File`/`TextItem`/`TranslationSet` layout.
    #[error("Unexpected structure in glossary file {}: {message}", .path.display())]
    Structure {
        /// Glossary file
        path: PathBuf,
        /// Which element broke the layout
        message: String,
    },
}
