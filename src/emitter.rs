//! Rendering and writing of per-locale output files.

use std::path::{
    Path,
    PathBuf,
};

use crate::catalogue::Locale;
use crate::error::ExtractError;

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `"key" = "translation";` lines in `<code>.lproj/Localizable.strings`.
    Strings,
    /// `menutrans` directives in `menu_<name>.apple.vim`.
    VimMenu,
}

impl Dialect {
    /// The fixed comment at the top of every generated file.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Strings => "// This file was generated from Apple localisation glossaries.",
            Self::VimMenu => "\" This file was generated from Apple localisation glossaries.",
        }
    }

    /// Renders one resolved translation.
    #[must_use]
    pub fn render_line(self, target_key: &str, translation: &str) -> String {
        match self {
            Self::Strings => format!("\"{target_key}\" = \"{translation}\";"),
            Self::VimMenu => format!("menutrans {target_key} {}", escape_spaces(translation)),
        }
    }

    /// Where the file for `locale` goes.
    ///
    /// `None` for a Vim menu locale without an auxiliary output name: Vim has no
    /// menu translation file for it.
    #[must_use]
    pub fn output_path(self, output_directory: &Path, locale: &Locale) -> Option<PathBuf> {
        match self {
            Self::Strings => Some(
                output_directory.join(format!("{}.lproj", locale.code)).join("Localizable.strings"),
            ),
            Self::VimMenu => locale
                .auxiliary_output_name
                .as_ref()
                .map(|name| output_directory.join(format!("menu_{name}.apple.vim"))),
        }
    }

    /// Full file contents: header, a blank line, then one line per translation.
    #[must_use]
    pub fn render_file(self, lines: &[String]) -> String {
        format!("{}\n\n{}\n", self.header(), lines.join("\n"))
    }
}

/// Escapes every space for Vim's command line (`a b` becomes `a\ b`).
#[must_use]
pub fn escape_spaces(text: &str) -> String {
    text.replace(' ', "\\ ")
}

/// Writes `contents` to `path`, creating missing parent directories.
///
/// Existing files are overwritten in place.
///
/// # Errors
/// Returns error if a directory cannot be created or the file cannot be written.
pub fn write_output(path: &Path, contents: &str) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|source| ExtractError::CreateDirectory { path: parent.to_path_buf(), source })?;
    }
    std::fs::write(path, contents)
        .map_err(|source| ExtractError::Write { path: path.to_path_buf(), source })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote output file");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::missing_docs_in_private_items)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[case::strings(Dialect::Strings, "barButton_done", "Fertig", r#""barButton_done" = "Fertig";"#)]
    #[case::strings_keeps_spaces(
        Dialect::Strings,
        "window_close",
        "Fenster schließen",
        r#""window_close" = "Fenster schließen";"#
    )]
    #[case::vim(Dialect::VimMenu, "&Undo", "Widerrufen", "menutrans &Undo Widerrufen")]
    #[case::vim_escapes_spaces(
        Dialect::VimMenu,
        "Close\\ Window",
        "Fenster schließen",
        "menutrans Close\\ Window Fenster\\ schließen"
    )]
    fn test_render_line(
        #[case] dialect: Dialect,
        #[case] target_key: &str,
        #[case] translation: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(dialect.render_line(target_key, translation), expected);
    }

    #[rstest]
    #[case::single("a b", "a\\ b")]
    #[case::several("Alle auswählen und mehr", "Alle\\ auswählen\\ und\\ mehr")]
    #[case::consecutive("a  b", "a\\ \\ b")]
    #[case::none("Widerrufen", "Widerrufen")]
    #[case::tab_untouched("a\tb", "a\tb")]
    fn test_escape_spaces(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_spaces(input), expected);
    }

    #[googletest::test]
    fn test_output_path_strings() {
        let locale = Locale::new("zh-Hans", "Simplified Chinese");

        let path = Dialect::Strings.output_path(Path::new("/out"), &locale);

        expect_that!(path, some(eq(Path::new("/out/zh-Hans.lproj/Localizable.strings"))));
    }

    #[googletest::test]
    fn test_output_path_vim_menu() {
        let locale = Locale::new("de", "German").with_auxiliary_output_name("de_de");

        let path = Dialect::VimMenu.output_path(Path::new("/runtime/lang"), &locale);

        expect_that!(path, some(eq(Path::new("/runtime/lang/menu_de_de.apple.vim"))));
    }

    #[googletest::test]
    fn test_output_path_vim_menu_without_auxiliary_name() {
        let locale = Locale::new("ar", "Arabic");

        expect_that!(Dialect::VimMenu.output_path(Path::new("/out"), &locale), none());
    }

    #[rstest]
    #[case::strings(Dialect::Strings, "// This file was generated from Apple localisation glossaries.\n\n\"a\" = \"b\";\n\"c\" = \"d\";\n")]
    #[case::vim(Dialect::VimMenu, "\" This file was generated from Apple localisation glossaries.\n\nmenutrans a b\nmenutrans c d\n")]
    fn test_render_file(#[case] dialect: Dialect, #[case] expected: &str) {
        let lines = vec![dialect.render_line("a", "b"), dialect.render_line("c", "d")];

        assert_eq!(dialect.render_file(&lines), expected);
    }

    #[rstest]
    fn test_render_file_without_lines_keeps_header() {
        assert_eq!(
            Dialect::Strings.render_file(&[]),
            "// This file was generated from Apple localisation glossaries.\n\n\n"
        );
    }

    #[googletest::test]
    fn test_write_output_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deep/nested/de.lproj/Localizable.strings");

        write_output(&path, "content\n").unwrap();

        expect_that!(fs::read_to_string(&path).unwrap(), eq("content\n"));
    }

    #[googletest::test]
    fn test_write_output_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("menu_de_de.apple.vim");
        fs::write(&path, "old content that is longer than the new one\n").unwrap();

        write_output(&path, "new\n").unwrap();

        expect_that!(fs::read_to_string(&path).unwrap(), eq("new\n"));
    }

    #[googletest::test]
    fn test_write_output_parent_is_a_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("de.lproj");
        fs::write(&blocker, "").unwrap();

        let result = write_output(&blocker.join("Localizable.strings"), "x");

        expect_that!(matches!(result, Err(ExtractError::CreateDirectory { .. })), eq(true));
    }
}
