//! Resolution of a needed localisation to a single translation.

use std::collections::BTreeSet;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::catalogue::NeededLocalisation;
use crate::glossary::{
    EntrySource,
    GlossaryError,
};

/// A lookup that did not come down to exactly one translation.
///
/// Glossaries merge many strings files, so one key can legitimately carry
/// different translations. Lookups are keyed by glossary and key only, so such
/// clashes are reported rather than guessed at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Wrong number of matches for {apple_key} in files matching {glossary_filename}: {candidates:?}"
)]
pub struct LookupFailure {
    /// Key looked up
    pub apple_key: String,
    /// Glossary file name fragment searched
    pub glossary_filename: String,
    /// Distinct translations found. Empty when the key was not found at all.
    pub candidates: BTreeSet<String>,
}

/// Why a needed localisation was not resolved.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Recoverable: the item is left out of the output.
    #[error(transparent)]
    WrongMatchCount(#[from] LookupFailure),

    /// A matching volume could not be listed.
    #[error("Failed to list glossary files in {}: {source}", .volume.display())]
    ListVolume {
        /// Volume being listed
        volume: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A candidate glossary file could not be read or parsed.
    #[error(transparent)]
    Glossary(#[from] GlossaryError),
}

impl LookupError {
    /// Whether the run can carry on without this item.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::WrongMatchCount(_))
    }
}

/// Files directly inside `volume` whose name contains `glossary_filename`.
///
/// # Errors
/// Returns error if the volume cannot be listed.
pub fn candidate_files(
    volume: &Path,
    glossary_filename: &str,
) -> Result<Vec<PathBuf>, LookupError> {
    let list_error = |source| LookupError::ListVolume { volume: volume.to_path_buf(), source };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(volume).map_err(list_error)? {
        let path = entry.map_err(list_error)?.path();
        let matches_name = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().contains(glossary_filename));
        if matches_name && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Finds the one translation of `needed` across the locale's volumes.
///
/// Every glossary file whose name contains the needed glossary name is read
/// (through `source`, so each file is parsed once per run), and every entry
/// whose key equals the Apple key exactly is collected. Succeeds only when all
/// of them agree on a single translation.
///
/// # Errors
/// - [`LookupError::WrongMatchCount`] when zero or several distinct translations are found
/// - Listing a volume or reading a glossary file fails
pub fn resolve<S>(
    source: &mut S,
    needed: &NeededLocalisation,
    volumes: &[PathBuf],
) -> Result<String, LookupError>
where
    S: EntrySource + ?Sized,
{
    let mut candidates = BTreeSet::new();

    for volume in volumes {
        for file in candidate_files(volume, &needed.glossary_filename)? {
            let entries = source.entries(&file)?;
            candidates.extend(
                entries
                    .iter()
                    .filter(|entry| entry.key.as_deref() == Some(needed.apple_key.as_str()))
                    .map(|entry| entry.translation.clone()),
            );
        }
    }

    let mut distinct = candidates.iter();
    match (distinct.next(), distinct.next()) {
        (Some(translation), None) => Ok(translation.clone()),
        _ => Err(LookupFailure {
            apple_key: needed.apple_key.clone(),
            glossary_filename: needed.glossary_filename.clone(),
            candidates,
        }
        .into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::missing_docs_in_private_items)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::rc::Rc;

    use googletest::prelude::*;
    use rstest::{
        fixture,
        rstest,
    };
    use tempfile::TempDir;

    use super::*;
    use crate::glossary::{
        EntryCache,
        LocalisationEntry,
    };
    use crate::test_utils::write_glossary;

    /// Serves canned entries keyed by file name and records which files were read.
    #[derive(Debug, Default)]
    struct FakeSource {
        entries: HashMap<String, Vec<(Option<&'static str>, &'static str)>>,
        reads: Vec<PathBuf>,
    }

    impl FakeSource {
        fn with_file(
            mut self,
            file_name: &str,
            entries: &[(Option<&'static str>, &'static str)],
        ) -> Self {
            self.entries.insert(file_name.to_string(), entries.to_vec());
            self
        }
    }

    impl EntrySource for FakeSource {
        fn entries(
            &mut self,
            path: &Path,
        ) -> std::result::Result<Rc<[LocalisationEntry]>, GlossaryError> {
            self.reads.push(path.to_path_buf());
            let file_name = path.file_name().unwrap().to_string_lossy().to_string();
            let entries = self.entries.get(&file_name).cloned().unwrap_or_default();
            Ok(entries
                .into_iter()
                .map(|(key, translation)| LocalisationEntry {
                    source_file: path.to_path_buf(),
                    comment: None,
                    key: key.map(str::to_string),
                    base: key.unwrap_or_default().to_string(),
                    translation: translation.to_string(),
                })
                .collect())
        }
    }

    /// Two German volumes, each holding an (empty) `UIKitCore.lg` and `AppKit.lg`.
    struct Volumes {
        _temp_dir: TempDir,
        macos: PathBuf,
        ios: PathBuf,
    }

    impl Volumes {
        fn paths(&self) -> Vec<PathBuf> {
            vec![self.macos.clone(), self.ios.clone()]
        }
    }

    #[fixture]
    fn volumes() -> Volumes {
        let temp_dir = TempDir::new().unwrap();
        let macos = temp_dir.path().join("macOS German");
        let ios = temp_dir.path().join("iOS German");
        for volume in [&macos, &ios] {
            fs::create_dir(volume).unwrap();
        }
        fs::write(macos.join("UIKitCore.lg"), "").unwrap();
        fs::write(ios.join("UIKitCore_iOS.lg"), "").unwrap();
        fs::write(macos.join("AppKit.lg"), "").unwrap();
        Volumes { _temp_dir: temp_dir, macos, ios }
    }

    fn done() -> NeededLocalisation {
        NeededLocalisation::new("barButton_done", "Done", "UIKitCore")
    }

    fn failure(result: std::result::Result<String, LookupError>) -> LookupFailure {
        match result {
            Err(LookupError::WrongMatchCount(failure)) => failure,
            other => panic!("expected WrongMatchCount, got {other:?}"),
        }
    }

    #[rstest]
    fn test_resolve_agreeing_volumes(volumes: Volumes) {
        let mut source = FakeSource::default()
            .with_file("UIKitCore.lg", &[(Some("Done"), "Fertig"), (Some("Cancel"), "Abbrechen")])
            .with_file("UIKitCore_iOS.lg", &[(Some("Done"), "Fertig")]);

        let result = resolve(&mut source, &done(), &volumes.paths());

        assert_eq!(result.unwrap(), "Fertig");
    }

    #[rstest]
    fn test_resolve_conflicting_translations(volumes: Volumes) {
        let mut source = FakeSource::default()
            .with_file("UIKitCore.lg", &[(Some("Done"), "Fertig")])
            .with_file("UIKitCore_iOS.lg", &[(Some("Done"), "Erledigt")]);

        let failure = failure(resolve(&mut source, &done(), &volumes.paths()));

        assert_eq!(failure.apple_key, "Done");
        assert_eq!(failure.glossary_filename, "UIKitCore");
        assert_eq!(
            failure.candidates,
            BTreeSet::from(["Erledigt".to_string(), "Fertig".to_string()])
        );
        assert_eq!(
            failure.to_string(),
            r#"Wrong number of matches for Done in files matching UIKitCore: {"Erledigt", "Fertig"}"#
        );
    }

    #[rstest]
    fn test_resolve_missing_key(volumes: Volumes) {
        let mut source =
            FakeSource::default().with_file("UIKitCore.lg", &[(Some("Cancel"), "Abbrechen")]);

        let failure = failure(resolve(&mut source, &done(), &volumes.paths()));

        assert!(failure.candidates.is_empty());
    }

    #[rstest]
    fn test_resolve_without_volumes() {
        let mut source = FakeSource::default();

        let failure = failure(resolve(&mut source, &done(), &[]));

        assert!(failure.candidates.is_empty());
        assert!(source.reads.is_empty());
    }

    #[rstest]
    #[case::substring_key("Don")]
    #[case::longer_key("Done ")]
    #[case::other_case("done")]
    fn test_resolve_requires_exact_key(volumes: Volumes, #[case] stored_key: &'static str) {
        let mut source =
            FakeSource::default().with_file("UIKitCore.lg", &[(Some(stored_key), "Fertig")]);

        let failure = failure(resolve(&mut source, &done(), &volumes.paths()));

        assert!(failure.candidates.is_empty());
    }

    #[rstest]
    fn test_resolve_ignores_entries_without_key(volumes: Volumes) {
        let mut source = FakeSource::default()
            .with_file("UIKitCore.lg", &[(None, "Leer"), (Some("Done"), "Fertig")]);

        let result = resolve(&mut source, &done(), &volumes.paths());

        assert_eq!(result.unwrap(), "Fertig");
    }

    #[rstest]
    fn test_resolve_reads_only_files_matching_glossary_name(volumes: Volumes) {
        let mut source = FakeSource::default()
            .with_file("UIKitCore.lg", &[(Some("Done"), "Fertig")])
            .with_file("AppKit.lg", &[(Some("Done"), "Fertig gestellt")]);

        let result = resolve(&mut source, &done(), &volumes.paths());

        assert_eq!(result.unwrap(), "Fertig");
        let read_names: Vec<_> =
            source.reads.iter().map(|path| path.file_name().unwrap().to_owned()).collect();
        assert_eq!(read_names, vec!["UIKitCore.lg", "UIKitCore_iOS.lg"]);
    }

    #[googletest::test]
    fn test_resolve_missing_volume_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let mut source = FakeSource::default();

        let result = resolve(&mut source, &done(), &[temp_dir.path().join("unmounted")]);

        let error = result.unwrap_err();
        expect_that!(error.is_recoverable(), eq(false));
        expect_that!(matches!(error, LookupError::ListVolume { .. }), eq(true));
    }

    #[googletest::test]
    fn test_resolve_malformed_glossary_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("UIKitCore.lg"), "<Proj><File>").unwrap();
        let mut cache = EntryCache::new();

        let result = resolve(&mut cache, &done(), &[temp_dir.path().to_path_buf()]);

        let error = result.unwrap_err();
        expect_that!(error.is_recoverable(), eq(false));
        expect_that!(
            matches!(error, LookupError::Glossary(GlossaryError::Malformed { .. })),
            eq(true)
        );
    }

    #[googletest::test]
    fn test_resolve_through_cache_parses_shared_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let volume = temp_dir.path().join("macOS German");
        write_glossary(
            &volume,
            "UIKitCore.lg",
            &[("Done", "Done", "Fertig"), ("Back", "Back", "Zurück")],
        );
        let parses = std::cell::Cell::new(0_usize);
        let mut cache = EntryCache::with_parser(|path: &Path| {
            parses.set(parses.get() + 1);
            crate::glossary::read_entries(path)
        });
        let volumes = vec![volume];
        let back = NeededLocalisation::new("navigation_back", "Back", "UIKitCore");

        let first = resolve(&mut cache, &done(), &volumes).unwrap();
        let second = resolve(&mut cache, &back, &volumes).unwrap();

        expect_that!(first, eq("Fertig"));
        expect_that!(second, eq("Zurück"));
        expect_that!(parses.get(), eq(1));
    }

    #[googletest::test]
    fn test_candidate_files_is_substring_match_on_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("UIKitCore.lg"), "").unwrap();
        fs::write(temp_dir.path().join("Other.lg"), "").unwrap();
        fs::create_dir(temp_dir.path().join("UIKitCore.bundle")).unwrap();

        let files = candidate_files(temp_dir.path(), "UIKit").unwrap();

        expect_that!(files, eq(&vec![temp_dir.path().join("UIKitCore.lg")]));
    }
}
