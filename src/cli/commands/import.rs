// importコマンドハンドラー
//
// シートデータ（CSV）とカラムマッピングからバッチINSERT文を生成します。
// マッピングファイルが指定されない場合はヘッダー名から自動でマッピングします。

use crate::core::config::Dialect;
use crate::services::import_generator::{auto_map, synthesize_batch_insert};
use crate::services::input_loader::{load_mappings, load_sheet, load_table_schema};
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// importコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ImportCommand {
    /// インポート先のテーブル定義ファイル
    pub schema_path: PathBuf,
    /// シートデータのCSVファイル
    pub data_path: PathBuf,
    /// マッピングファイル
    pub mapping_path: Option<PathBuf>,
    /// 出力方言
    pub dialect: Dialect,
}

/// importコマンドハンドラー
#[derive(Debug, Clone)]
pub struct ImportCommandHandler {}

impl ImportCommandHandler {
    /// 新しいImportCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// importコマンドを実行
    pub fn execute(&self, command: &ImportCommand) -> Result<String> {
        let table = load_table_schema(&command.schema_path)?;
        let sheet = load_sheet(&command.data_path)?;

        let mappings = match &command.mapping_path {
            Some(path) => load_mappings(path)?,
            None => {
                let mappings = auto_map(&table, &sheet.headers);
                debug!(
                    matched = mappings.iter().filter(|m| m.is_active()).count(),
                    total = mappings.len(),
                    "Auto-mapped columns to headers"
                );
                mappings
            }
        };

        Ok(synthesize_batch_insert(&table, &mappings, &sheet, command.dialect))
    }
}

impl Default for ImportCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
