//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    ExtractConfig,
    Settings,
    ValidationError,
    loader,
};
use crate::catalogue;
use crate::mode::RunMode;

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: Settings,

    /// 読み込んだ設定ファイルのパス
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: Settings::default(), config_path: None }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `explicit_path` - `--config` で指定されたファイル（必須扱い）
    /// * `working_dir` - 指定がない場合に `.glossary-strings.json` を探すディレクトリ
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(
        &mut self,
        explicit_path: Option<&Path>,
        working_dir: &Path,
    ) -> Result<(), ConfigError> {
        let (settings, config_path) = if let Some(path) = explicit_path {
            (loader::load_from_file(path)?, Some(path.to_path_buf()))
        } else if let Some(settings) = loader::load_from_directory(working_dir)? {
            (settings, Some(working_dir.join(loader::CONFIG_FILE_NAME)))
        } else {
            (Settings::default(), None)
        };

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を保存
        self.current_settings = settings;
        self.config_path = config_path;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// コマンドライン引数で設定を上書きする
    pub fn apply_overrides(
        &mut self,
        output_directory: Option<PathBuf>,
        volumes_directory: Option<PathBuf>,
    ) {
        if let Some(output_directory) = output_directory {
            self.current_settings.output_directory = Some(output_directory);
        }
        if let Some(volumes_directory) = volumes_directory {
            self.current_settings.volumes_directory = volumes_directory;
        }
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &Settings {
        &self.current_settings
    }

    /// 読み込んだ設定ファイルのパスを取得
    #[must_use]
    pub const fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// 実行用の設定を組み立てる
    ///
    /// # Arguments
    /// * `mode` - 実行モード（カタログと出力形式を決める）
    /// * `only_locales` - 空でなければ、このコードのロケールだけを処理する
    ///
    /// # Errors
    /// - 出力ディレクトリが未指定
    /// - 存在しないロケールコードが指定された
    pub fn extract_config(
        &self,
        mode: RunMode,
        only_locales: &[String],
    ) -> Result<ExtractConfig, ConfigError> {
        let settings = &self.current_settings;
        let mut errors = Vec::new();

        let output_directory = settings.output_directory.clone().unwrap_or_default();
        if output_directory.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "outputDirectory",
                "An output directory is required. Pass --output-dir or set \"outputDirectory\"",
            ));
        }

        let mut locales = settings.locales.clone().unwrap_or_else(catalogue::default_locales);
        for code in only_locales {
            if !locales.iter().any(|locale| &locale.code == code) {
                errors.push(ValidationError::new(
                    "--locale",
                    format!("Unknown locale code '{code}'"),
                ));
            }
        }
        if !only_locales.is_empty() {
            locales.retain(|locale| only_locales.contains(&locale.code));
        }

        if !errors.is_empty() {
            return Err(ConfigError::ValidationErrors(errors));
        }

        Ok(ExtractConfig {
            mode,
            output_directory,
            volumes_directory: settings.volumes_directory.clone(),
            needed_localisations: settings
                .needed_localisations
                .clone()
                .unwrap_or_else(|| mode.needed_localisations()),
            locales,
        })
    }
}
