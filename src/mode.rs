//! Run modes: which catalogue to extract and which dialect to write.

use clap::ValueEnum;

use crate::catalogue::{
    self,
    NeededLocalisation,
};
use crate::emitter::Dialect;

/// What a run extracts and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RunMode {
    /// Main menu strings as `<code>.lproj/Localizable.strings`
    #[default]
    MainMenu,
    /// Vim menu translations as `menu_<lang>.apple.vim`
    VimMenu,
}

impl RunMode {
    /// The built-in catalogue for this mode.
    #[must_use]
    pub fn needed_localisations(self) -> Vec<NeededLocalisation> {
        match self {
            Self::MainMenu => catalogue::main_menu_localisations(),
            Self::VimMenu => catalogue::vim_menu_localisations(),
        }
    }

    /// The output format for this mode.
    #[must_use]
    pub const fn dialect(self) -> Dialect {
        match self {
            Self::MainMenu => Dialect::Strings,
            Self::VimMenu => Dialect::VimMenu,
        }
    }
}
