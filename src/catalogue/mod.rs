//! Compiled-in catalogues of needed localisations and target locales.

mod locales;
mod main_menu;
mod vim_menu;

use serde::{
    Deserialize,
    Serialize,
};

/// A localised string we want to lift out of Apple's glossaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeededLocalisation {
    /// Identifier written to the generated file.
    pub target_key: String,
    /// The key (AKA `Position`) Apple uses in the glossary.
    pub apple_key: String,
    /// Substring of the glossary file names to search, e.g. `AppKit` for `AppKit.lg`.
    pub glossary_filename: String,
}

impl NeededLocalisation {
    /// Creates an entry from its three fields.
    #[must_use]
    pub fn new(
        target_key: impl Into<String>,
        apple_key: impl Into<String>,
        glossary_filename: impl Into<String>,
    ) -> Self {
        Self {
            target_key: target_key.into(),
            apple_key: apple_key.into(),
            glossary_filename: glossary_filename.into(),
        }
    }
}

/// A target locale and how to find its glossary volumes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Language code as used for `.lproj` directories.
    pub code: String,
    /// Enough of the volume name to pick this locale's DMGs out from the others.
    ///
    /// `French` alone is not enough: it matches both Universal French and Canadian French.
    pub volume_name: String,
    /// Language part of the Vim menu file name (`menu_<name>.apple.vim`).
    #[serde(default)]
    pub auxiliary_output_name: Option<String>,
}

impl Locale {
    /// Creates a locale without a Vim menu file.
    #[must_use]
    pub fn new(code: impl Into<String>, volume_name: impl Into<String>) -> Self {
        Self { code: code.into(), volume_name: volume_name.into(), auxiliary_output_name: None }
    }

    /// Sets the language part of the Vim menu file name.
    #[must_use]
    pub fn with_auxiliary_output_name(mut self, name: impl Into<String>) -> Self {
        self.auxiliary_output_name = Some(name.into());
        self
    }
}

/// Converts a `(target key, apple key, glossary)` table into owned entries.
fn from_table(table: &[(&str, &str, &str)]) -> Vec<NeededLocalisation> {
    table
        .iter()
        .map(|(target_key, apple_key, glossary)| {
            NeededLocalisation::new(*target_key, *apple_key, *glossary)
        })
        .collect()
}

/// Strings for the application's main menu, rendered as `Localizable.strings`.
#[must_use]
pub fn main_menu_localisations() -> Vec<NeededLocalisation> {
    from_table(main_menu::NEEDED_LOCALISATIONS)
}

/// Strings for Vim's own menus, rendered as `menutrans` directives.
#[must_use]
pub fn vim_menu_localisations() -> Vec<NeededLocalisation> {
    from_table(vim_menu::NEEDED_LOCALISATIONS)
}

/// Every locale Apple publishes a glossary for that we generate output for.
#[must_use]
pub fn default_locales() -> Vec<Locale> {
    locales::LOCALES
        .iter()
        .map(|(code, volume_name, auxiliary)| {
            let locale = Locale::new(*code, *volume_name);
            match auxiliary {
                Some(name) => locale.with_auxiliary_output_name(*name),
                None => locale,
            }
        })
        .collect()
}
