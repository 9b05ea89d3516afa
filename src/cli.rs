//! Command-line definition.

use std::path::PathBuf;

use clap::Parser;

use crate::mode::RunMode;

/// Extract officially translated UI strings from Apple localisation glossaries.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "extract-localised-strings")]
#[command(version, about)]
#[command(long_about = concat!(
    "Extract officially translated UI strings from Apple localisation glossaries.\n\n",
    "Mount the glossary disk images for every language first. For each configured ",
    "locale the mounted volumes whose name contains the locale's volume name are ",
    "searched, and every needed string that resolves to exactly one translation is ",
    "written to the locale's output file. Strings with zero or several distinct ",
    "translations are reported and left out.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Write <code>.lproj/Localizable.strings for the main menu:\n",
    "    $ extract-localised-strings -o Resources\n\n",
    "  Write menu_<lang>.apple.vim files for German and French only:\n",
    "    $ extract-localised-strings --mode vim-menu -o runtime/lang -l de -l fr\n\n",
    "CONFIGURATION:\n",
    "  .glossary-strings.json in the current directory (or --config) may set\n",
    "  outputDirectory, volumesDirectory, neededLocalisations and locales.",
))]
pub struct Cli {
    /// Which catalogue to extract and which file format to write.
    #[arg(long, value_enum, default_value_t = RunMode::MainMenu)]
    pub mode: RunMode,

    /// Directory receiving the generated files.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory where the glossary disk images are mounted [default: /Volumes].
    #[arg(long, value_name = "DIR")]
    pub volumes_dir: Option<PathBuf>,

    /// Settings file to use instead of ./.glossary-strings.json.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only process this locale code (repeatable).
    #[arg(short, long = "locale", value_name = "CODE")]
    pub locales: Vec<String>,

    /// Log debug output.
    #[arg(short, long)]
    pub verbose: bool,
}
