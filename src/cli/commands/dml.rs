// dmlコマンドハンドラー
//
// テーブル定義ファイルからDML文の雛形を生成します。

use crate::core::config::Dialect;
use crate::services::dml_generator::{synthesize_dml, DmlKind};
use crate::services::input_loader::load_table_schema;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// dmlコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct DmlCommand {
    /// テーブル定義ファイルのパス
    pub schema_path: PathBuf,
    /// DML文の種類
    pub kind: DmlKind,
    /// 出力方言
    pub dialect: Dialect,
}

/// dmlコマンドハンドラー
#[derive(Debug, Clone)]
pub struct DmlCommandHandler {}

impl DmlCommandHandler {
    /// 新しいDmlCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// dmlコマンドを実行
    pub fn execute(&self, command: &DmlCommand) -> Result<String> {
        let table = load_table_schema(&command.schema_path)?;
        let sql = synthesize_dml(command.kind, &table, command.dialect).with_context(|| {
            format!(
                "Failed to generate {} statement for table '{}'",
                command.kind, table.name
            )
        })?;
        Ok(sql)
    }
}

impl Default for DmlCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
