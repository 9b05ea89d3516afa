//! The per-locale extraction loop.

use std::path::PathBuf;

use tracing::{
    debug,
    error,
    info,
    warn,
};

use crate::config::ExtractConfig;
use crate::emitter::write_output;
use crate::error::ExtractError;
use crate::glossary::{
    EntryCache,
    EntrySource,
};
use crate::resolver::{
    LookupError,
    LookupFailure,
    resolve,
};
use crate::volume::{
    list_mounted_volumes,
    matching_volumes,
};

/// What happened to one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    /// Locale code
    pub code: String,
    /// Number of mounted volumes matching the locale's volume name
    pub volume_count: usize,
    /// File written for the locale
    pub output_path: PathBuf,
    /// Number of lines written
    pub resolved: usize,
    /// Needed localisations left out of the file, in catalogue order
    pub failures: Vec<LookupFailure>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Written locales, in processing order
    pub locales: Vec<LocaleReport>,
    /// Codes of locales without an output path for the run mode
    pub skipped: Vec<String>,
}

impl RunReport {
    /// Lookups that failed across all locales.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.locales.iter().map(|locale| locale.failures.len()).sum()
    }
}

/// Resolves every needed localisation for every locale and writes the files.
///
/// The entry source lives as long as the extractor, so a glossary shared by
/// several locales or needed items is parsed once.
#[derive(Debug)]
pub struct Extractor<S = EntryCache> {
    /// What to extract, for which locales, and where to write it
    config: ExtractConfig,
    /// Parsed glossary entries, shared by all locales
    source: S,
}

impl Extractor {
    /// Creates an extractor reading glossaries through a fresh [`EntryCache`].
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        Self::with_source(config, EntryCache::new())
    }
}

impl<S: EntrySource> Extractor<S> {
    /// Creates an extractor reading glossaries through `source`.
    #[must_use]
    pub const fn with_source(config: ExtractConfig, source: S) -> Self {
        Self { config, source }
    }

    /// The entry source, e.g. to see how many files were parsed.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Processes the configured locales in order against `volumes`.
    ///
    /// A lookup that finds zero or several translations is logged and left out;
    /// anything else aborts the run. Files written before the abort stay on disk.
    ///
    /// # Errors
    /// - A volume cannot be listed or a glossary cannot be parsed
    /// - An output directory cannot be created or a file cannot be written
    pub fn run(&mut self, volumes: &[PathBuf]) -> Result<RunReport, ExtractError> {
        let Self { config, source } = self;
        let dialect = config.mode.dialect();
        let mut report = RunReport::default();

        for locale in &config.locales {
            let Some(output_path) = dialect.output_path(&config.output_directory, locale) else {
                debug!(
                    code = %locale.code,
                    "No output file for this locale in {:?} mode, skipping",
                    config.mode
                );
                report.skipped.push(locale.code.clone());
                continue;
            };

            let locale_volumes = matching_volumes(locale, volumes);
            info!(
                "Localising {} ({}) from {} volumes.",
                locale.volume_name,
                locale.code,
                locale_volumes.len()
            );
            if locale_volumes.is_empty() {
                warn!(
                    "No mounted volume matches '{}', every lookup for {} will fail",
                    locale.volume_name, locale.code
                );
            }

            let mut lines = Vec::with_capacity(config.needed_localisations.len());
            let mut failures = Vec::new();
            for needed in &config.needed_localisations {
                match resolve(source, needed, &locale_volumes) {
                    Ok(translation) => {
                        lines.push(dialect.render_line(&needed.target_key, &translation));
                    }
                    Err(LookupError::WrongMatchCount(failure)) => {
                        error!("{failure}");
                        failures.push(failure);
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            write_output(&output_path, &dialect.render_file(&lines))?;
            report.locales.push(LocaleReport {
                code: locale.code.clone(),
                volume_count: locale_volumes.len(),
                output_path,
                resolved: lines.len(),
                failures,
            });
        }

        Ok(report)
    }
}

/// Lists the mounted volumes and runs a fresh [`Extractor`] over them.
///
/// # Errors
/// Returns error if the volumes directory cannot be listed, or as [`Extractor::run`].
pub fn run(config: ExtractConfig) -> Result<RunReport, ExtractError> {
    let volumes = list_mounted_volumes(&config.volumes_directory).map_err(|source| {
        ExtractError::ListVolumes { path: config.volumes_directory.clone(), source }
    })?;

    let mut extractor = Extractor::new(config);
    let report = extractor.run(&volumes)?;
    debug!(files = extractor.source().len(), "Glossary files parsed");
    Ok(report)
}
