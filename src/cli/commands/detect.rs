// detectコマンドハンドラー
//
// 既存のDDLファイルがMySQLとDorisのどちらで書かれているかを判定します。

use crate::core::error::IoError;
use crate::services::ddl_detector::detect_dialect_from_ddl;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// detectコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct DetectCommand {
    /// DDLファイルのパス
    pub ddl_path: PathBuf,
}

/// detectコマンドハンドラー
#[derive(Debug, Clone)]
pub struct DetectCommandHandler {}

impl DetectCommandHandler {
    /// 新しいDetectCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// detectコマンドを実行
    ///
    /// # Returns
    ///
    /// 判定した方言名（mysql または doris）
    pub fn execute(&self, command: &DetectCommand) -> Result<String> {
        let path = &command.ddl_path;
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let ddl = fs::read_to_string(path).map_err(|e| IoError::FileRead {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        Ok(detect_dialect_from_ddl(&ddl).to_string())
    }
}

impl Default for DetectCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
