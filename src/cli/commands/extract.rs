// extractコマンドハンドラー
//
// CSVとして書き出したテーブル定義書からテーブル定義を抽出し、DDLを生成します。

use crate::core::config::{Dialect, NamedTemplate};
use crate::services::ddl_service::synthesize_create_table;
use crate::services::input_loader::load_grid;
use crate::services::spreadsheet_extractor::{extract_schema, table_name_from_sheet};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

/// extractコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ExtractCommand {
    /// セルグリッドのCSVファイル
    pub grid_path: PathBuf,
    /// 使用するテンプレート
    pub template: NamedTemplate,
    /// テーブル名（指定されない場合はファイル名から生成）
    pub table_name: Option<String>,
    /// 出力方言
    pub dialect: Dialect,
}

/// extractコマンドハンドラー
#[derive(Debug, Clone)]
pub struct ExtractCommandHandler {}

impl ExtractCommandHandler {
    /// 新しいExtractCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// extractコマンドを実行
    ///
    /// # Returns
    ///
    /// 使用したテンプレートを示すヘッダーコメントとCREATE TABLE文
    pub fn execute(&self, command: &ExtractCommand) -> Result<String> {
        let table_name = self.resolve_table_name(command)?;
        let grid = load_grid(&command.grid_path)?;

        let template = command.template.to_template();
        let table = extract_schema(&table_name, &grid, &template).with_context(|| {
            format!("Failed to extract table definition from {}", command.grid_path.display())
        })?;
        let sql = synthesize_create_table(&table, command.dialect)
            .with_context(|| format!("No column definitions found with template '{}'", command.template.name))?;

        Ok(format!(
            "-- Using Template: {}\n-- Rules: Start Row {}, Cols [{}, {}]\n\n{}",
            command.template.name,
            template.data_start_row,
            template.name_col,
            template.type_col,
            sql
        ))
    }

    fn resolve_table_name(&self, command: &ExtractCommand) -> Result<String> {
        if let Some(name) = command.table_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return Ok(name.trim().to_string());
        }

        command
            .grid_path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(table_name_from_sheet)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "Cannot derive a table name from {}. Please pass --table.",
                    command.grid_path.display()
                )
            })
    }
}

impl Default for ExtractCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::fs;
    use tempfile::TempDir;

    fn standard_template() -> NamedTemplate {
        Config::default().get_template(None).unwrap().clone()
    }

    #[test]
    fn test_execute_derives_table_name_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("User Accounts.csv");
        fs::write(&path, "Name,Type,Comment\nid,bigint,identifier\n,,\nemail,varchar(100),\n").unwrap();

        let output = ExtractCommandHandler::new()
            .execute(&ExtractCommand {
                grid_path: path,
                template: standard_template(),
                table_name: None,
                dialect: Dialect::MySQL,
            })
            .unwrap();

        assert!(output.starts_with("-- Using Template: standard\n-- Rules: Start Row 2, Cols [A, B]\n\n"));
        assert!(output.contains("CREATE TABLE `user_accounts` ("));
        assert!(output.contains("`id` BIGINT COMMENT 'identifier'"));
        assert!(output.contains("`email` VARCHAR(100)"));
    }

    #[test]
    fn test_execute_with_explicit_table_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheet.csv");
        fs::write(&path, "id,int\n").unwrap();

        let template = Config::default().get_template(Some("simple")).unwrap().clone();
        let output = ExtractCommandHandler::new()
            .execute(&ExtractCommand {
                grid_path: path,
                template,
                table_name: Some("events".to_string()),
                dialect: Dialect::PostgreSQL,
            })
            .unwrap();
        assert!(output.contains("CREATE TABLE \"events\" (\n  \"id\" INT\n);"));
    }

    #[test]
    fn test_derived_table_name_is_a_plain_identifier() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data-dict.csv");
        fs::write(&path, "Name,Type,Comment,PK\nid,bigint,,Y\n").unwrap();

        let template = NamedTemplate {
            pk_col: Some("D".to_string()),
            ..standard_template()
        };
        let output = ExtractCommandHandler::new()
            .execute(&ExtractCommand {
                grid_path: path,
                template,
                table_name: None,
                dialect: Dialect::PostgreSQL,
            })
            .unwrap();
        assert!(output.contains("CREATE TABLE \"data_dict\" ("));
        assert!(output.contains("CONSTRAINT pk_data_dict PRIMARY KEY (\"id\")"));
    }

    #[test]
    fn test_execute_without_columns_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.csv");
        fs::write(&path, "Name,Type\n").unwrap();

        let result = ExtractCommandHandler::new().execute(&ExtractCommand {
            grid_path: path,
            template: standard_template(),
            table_name: None,
            dialect: Dialect::MySQL,
        });
        assert!(result.is_err());
    }
}
