//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used, clippy::missing_docs_in_private_items)]

use std::fmt::Write as _;
use std::path::{
    Path,
    PathBuf,
};

use quick_xml::escape::escape;

/// テスト用の glossary XML を作成する
///
/// # Arguments
/// * `items` - `(Position, base, tran)` の組
///
/// # Returns
/// Apple の `.lg` ファイルと同じ構造の XML
pub(crate) fn glossary_xml(items: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Proj>\n  <File>\n");
    xml.push_str("    <Filepath>Localizable.strings</Filepath>\n");
    for (key, base, translation) in items {
        write!(
            xml,
            "    <TextItem>\n      <Description>{} button title</Description>\n      \
             <Position>{}</Position>\n      <TranslationSet>\n        \
             <base loc=\"en\">{}</base>\n        <tran loc=\"xx\">{}</tran>\n      \
             </TranslationSet>\n    </TextItem>\n",
            escape(*base),
            escape(*key),
            escape(*base),
            escape(*translation),
        )
        .unwrap();
    }
    xml.push_str("  </File>\n</Proj>\n");
    xml
}

/// テスト用の glossary ファイルを `dir` に書き出す
pub(crate) fn write_glossary(dir: &Path, file_name: &str, items: &[(&str, &str, &str)]) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, glossary_xml(items)).unwrap();
    path
}
