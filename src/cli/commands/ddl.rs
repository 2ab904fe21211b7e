// ddlコマンドハンドラー
//
// テーブル定義ファイルからCREATE TABLE文を生成します。

use crate::core::config::Dialect;
use crate::services::ddl_service::synthesize_create_table;
use crate::services::input_loader::load_table_schema;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// ddlコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct DdlCommand {
    /// テーブル定義ファイルのパス
    pub schema_path: PathBuf,
    /// 出力方言
    pub dialect: Dialect,
}

/// ddlコマンドハンドラー
#[derive(Debug, Clone)]
pub struct DdlCommandHandler {}

impl DdlCommandHandler {
    /// 新しいDdlCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// ddlコマンドを実行
    ///
    /// # Returns
    ///
    /// 成功時はCREATE TABLE文
    pub fn execute(&self, command: &DdlCommand) -> Result<String> {
        debug!(schema = %command.schema_path.display(), dialect = %command.dialect, "Executing ddl command");

        let table = load_table_schema(&command.schema_path)?;
        let sql = synthesize_create_table(&table, command.dialect)
            .with_context(|| format!("Failed to generate DDL for table '{}'", table.name))?;
        Ok(sql)
    }
}

impl Default for DdlCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
