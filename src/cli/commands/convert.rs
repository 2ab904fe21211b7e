// convertコマンドハンドラー
//
// テーブル定義をMySQLとDorisの間で相互変換したCREATE TABLE文を出力します。

use crate::core::config::Dialect;
use crate::core::error::IoError;
use crate::services::ddl_converter::convert_ddl;
use crate::services::ddl_detector::detect_dialect_from_ddl;
use crate::services::input_loader::load_table_schema;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// convertコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ConvertCommand {
    /// テーブル定義ファイルのパス
    pub schema_path: PathBuf,
    /// 変換元のDDLファイルのパス
    pub ddl_path: Option<PathBuf>,
    /// 変換先の方言（省略時は変換元DDLの反対側）
    pub target: Option<Dialect>,
}

/// convertコマンドハンドラー
#[derive(Debug, Clone)]
pub struct ConvertCommandHandler {}

impl ConvertCommandHandler {
    /// 新しいConvertCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// convertコマンドを実行
    ///
    /// # Returns
    ///
    /// 変換後のCREATE TABLE文
    pub fn execute(&self, command: &ConvertCommand) -> Result<String> {
        let table = load_table_schema(&command.schema_path)?;
        let source_ddl = match &command.ddl_path {
            Some(path) => read_ddl(path)?,
            None => String::new(),
        };

        let target = match (command.target, command.ddl_path.is_some()) {
            (Some(target), _) => target,
            (None, true) => match detect_dialect_from_ddl(&source_ddl) {
                Dialect::Doris => Dialect::MySQL,
                _ => Dialect::Doris,
            },
            (None, false) => {
                return Err(anyhow!(
                    "Cannot determine the conversion target. Please pass --to or --ddl."
                ))
            }
        };

        debug!(table = %table.name, target = %target, "Executing convert command");

        let sql = convert_ddl(&table, &source_ddl, target)
            .with_context(|| format!("Failed to convert DDL for table '{}'", table.name))?;
        Ok(sql)
    }
}

impl Default for ConvertCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn read_ddl(path: &Path) -> Result<String> {
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
    Ok(ddl)
}
