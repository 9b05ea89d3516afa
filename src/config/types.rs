//! Settings file contents, validation errors and the resolved run configuration.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::catalogue::{
    Locale,
    NeededLocalisation,
};
use crate::mode::RunMode;
use crate::volume::DEFAULT_VOLUMES_DIRECTORY;

/// One problem found in the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locales[3].code")
    pub field_path: String,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ValidationError {
    /// Creates an error for the field at `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Loading or validating the configuration failed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every problem found, in field order.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file (or the working directory) could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`Settings`].
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// One numbered line per error.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `.glossary-strings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Where generated files are written. Required, from here or `--output-dir`.
    pub output_directory: Option<PathBuf>,

    /// Where the glossary disk images are mounted.
    pub volumes_directory: PathBuf,

    /// Replaces the run mode's built-in catalogue.
    ///
    /// Lets the tool serve any project: list the keys it needs here.
    pub needed_localisations: Option<Vec<NeededLocalisation>>,

    /// Replaces the built-in locale list.
    pub locales: Option<Vec<Locale>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_directory: None,
            volumes_directory: PathBuf::from(DEFAULT_VOLUMES_DIRECTORY),
            needed_localisations: None,
            locales: None,
        }
    }
}

impl Settings {
    /// # Errors
    /// - Required field is empty
    /// - Duplicate target key or locale code
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.volumes_directory.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "volumesDirectory",
                "The directory cannot be empty. Example: \"/Volumes\"",
            ));
        }

        if let Some(needed) = &self.needed_localisations {
            validate_needed_localisations(needed, &mut errors);
        }

        if let Some(locales) = &self.locales {
            validate_locales(locales, &mut errors);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Checks a catalogue override: non-empty, no empty fields, unique target keys.
fn validate_needed_localisations(needed: &[NeededLocalisation], errors: &mut Vec<ValidationError>) {
    if needed.is_empty() {
        errors.push(ValidationError::new(
            "neededLocalisations",
            "At least one entry is required, or remove this field to use the built-in catalogue",
        ));
    }

    let mut target_keys = HashSet::new();
    for (index, item) in needed.iter().enumerate() {
        let fields = [
            ("targetKey", &item.target_key),
            ("appleKey", &item.apple_key),
            ("glossaryFilename", &item.glossary_filename),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                errors.push(ValidationError::new(
                    format!("neededLocalisations[{index}].{name}"),
                    "The value cannot be empty",
                ));
            }
        }

        if !target_keys.insert(item.target_key.as_str()) {
            errors.push(ValidationError::new(
                format!("neededLocalisations[{index}].targetKey"),
                format!("Duplicate target key '{}'", item.target_key),
            ));
        }
    }
}

/// Checks a locale override: no empty code or volume name, unique codes.
fn validate_locales(locales: &[Locale], errors: &mut Vec<ValidationError>) {
    let mut codes = HashSet::new();
    for (index, locale) in locales.iter().enumerate() {
        if locale.code.is_empty() {
            errors.push(ValidationError::new(
                format!("locales[{index}].code"),
                "The code cannot be empty. Example: \"de\"",
            ));
        }
        if locale.volume_name.is_empty() {
            errors.push(ValidationError::new(
                format!("locales[{index}].volumeName"),
                "The volume name cannot be empty, it would match every mounted volume",
            ));
        }
        if locale.auxiliary_output_name.as_deref() == Some("") {
            errors.push(ValidationError::new(
                format!("locales[{index}].auxiliaryOutputName"),
                "The name cannot be empty. Example: \"de_de\", or remove this field",
            ));
        }
        if !codes.insert(locale.code.as_str()) {
            errors.push(ValidationError::new(
                format!("locales[{index}].code"),
                format!("Duplicate locale code '{}'", locale.code),
            ));
        }
    }
}

/// Everything one extraction run needs, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Selects the output dialect
    pub mode: RunMode,
    /// Root of the generated files
    pub output_directory: PathBuf,
    /// Where the mounted volumes are listed from
    pub volumes_directory: PathBuf,
    /// In output order.
    pub needed_localisations: Vec<NeededLocalisation>,
    /// In processing order.
    pub locales: Vec<Locale>,
}
