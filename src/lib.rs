//! apple-glossary-strings
//!
//! Apple のローカライズ用 glossary から公式訳を抽出し、`.strings` と Vim メニュー翻訳ファイルを生成する

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod glossary;
pub mod mode;
pub mod resolver;
pub mod volume;

mod test_utils;

pub use error::ExtractError;
pub use extractor::{
    Extractor,
    LocaleReport,
    RunReport,
};
