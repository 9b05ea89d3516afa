//! Memoised access to parsed glossary files.

use std::collections::HashMap;
use std::fmt;
use std::path::{
    Path,
    PathBuf,
};
use std::rc::Rc;

use super::parser;
use super::types::{
    GlossaryError,
    LocalisationEntry,
};

/// Something that can hand out the entries of a glossary file.
pub trait EntrySource {
    /// Entries of the glossary file at `path`, in document order.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    fn entries(&mut self, path: &Path) -> Result<Rc<[LocalisationEntry]>, GlossaryError>;
}

/// The parse function used by [`EntryCache::new`].
pub type ParseFn = fn(&Path) -> Result<Vec<LocalisationEntry>, GlossaryError>;

/// Parses each glossary file at most once and keeps the result for the whole run.
///
/// The same glossary is revisited for every needed localisation that names it,
/// and re-parsing multi-megabyte XML dominates the run time otherwise. Source
/// files are not expected to change during a run, so entries are never invalidated.
pub struct EntryCache<F = ParseFn> {
    /// Parser invoked on a cache miss
    parse: F,
    /// Parsed entries by file path
    entries: HashMap<PathBuf, Rc<[LocalisationEntry]>>,
}

impl EntryCache {
    /// Creates a cache backed by the glossary file parser.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parser(parser::read_entries)
    }
}

impl Default for EntryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> EntryCache<F>
where
    F: FnMut(&Path) -> Result<Vec<LocalisationEntry>, GlossaryError>,
{
    /// Creates a cache backed by a custom parse function.
    #[must_use]
    pub fn with_parser(parse: F) -> Self {
        Self { parse, entries: HashMap::new() }
    }

    /// Number of files parsed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file has been parsed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F> EntrySource for EntryCache<F>
where
    F: FnMut(&Path) -> Result<Vec<LocalisationEntry>, GlossaryError>,
{
    fn entries(&mut self, path: &Path) -> Result<Rc<[LocalisationEntry]>, GlossaryError> {
        if let Some(entries) = self.entries.get(path) {
            tracing::trace!(path = %path.display(), "Glossary cache hit");
            return Ok(Rc::clone(entries));
        }

        let entries: Rc<[LocalisationEntry]> = (self.parse)(path)?.into();
        self.entries.insert(path.to_path_buf(), Rc::clone(&entries));
        Ok(entries)
    }
}

impl<F> fmt::Debug for EntryCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryCache").field("files", &self.entries.len()).finish_non_exhaustive()
    }
}
