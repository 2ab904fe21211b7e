// コマンド共通コンテキスト
//
// 設定ファイル読み込みと出力方言の解決をCLI層で集約する。

use crate::core::config::{Config, Dialect};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// 読み込んだ設定ファイル（既定値を使用した場合は None）
    pub config_path: Option<PathBuf>,
    pub config: Config,
}

impl CommandContext {
    /// プロジェクトルートの設定ファイルを読み込んでコンテキストを作成
    ///
    /// 設定ファイルが無い場合は既定の設定を使用します。
    pub fn load(project_path: &Path) -> Result<Self> {
        Self::load_with_config(project_path, None)
    }

    /// カスタム設定ファイルパスを指定してコンテキストを作成
    ///
    /// カスタムパスを指定した場合、ファイルが存在しなければエラーになります。
    pub fn load_with_config(
        project_path: &Path,
        custom_config_path: Option<PathBuf>,
    ) -> Result<Self> {
        let config_path = match custom_config_path {
            Some(path) => path,
            None => {
                let default_path = project_path.join(Config::DEFAULT_CONFIG_PATH);
                if !default_path.exists() {
                    debug!("No config file found, using defaults");
                    return Ok(Self {
                        config_path: None,
                        config: Config::default(),
                    });
                }
                default_path
            }
        };

        let config =
            Config::from_file(&config_path).with_context(|| "Failed to read config file")?;
        debug!(config_path = %config_path.display(), "Loaded config file");

        Ok(Self {
            config_path: Some(config_path),
            config,
        })
    }

    /// 出力方言を解決（コマンドラインの指定を優先）
    pub fn resolve_dialect(&self, dialect: Option<&str>) -> Result<Dialect> {
        match dialect {
            Some(value) => value.parse(),
            None => Ok(self.config.dialect),
        }
    }
}
