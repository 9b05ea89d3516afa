//! Apple localisation glossary reading
/// Memoised entry access
mod cache;
/// XML parser for glossary files
mod parser;
/// Entry and error types
mod types;

pub use cache::{
    EntryCache,
    EntrySource,
    ParseFn,
};
pub use parser::{
    parse_entries,
    read_entries,
};
pub use types::{
    GlossaryError,
    LocalisationEntry,
};
