// validateコマンドハンドラー
//
// テーブル定義の検証機能を実装します。
// 合成の前提条件のエラーと、方言ごとの警告をまとめて表示します。

use crate::core::config::Dialect;
use crate::core::error::ValidationResult;
use crate::core::schema::TableSchema;
use crate::services::input_loader::load_table_schema;
use crate::services::schema_validator::SchemaValidatorService;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// validateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ValidateCommand {
    /// テーブル定義ファイルのパス
    pub schema_path: PathBuf,
    /// 検証対象の方言
    pub dialect: Dialect,
}

/// validateコマンドハンドラー
#[derive(Debug, Clone)]
pub struct ValidateCommandHandler {}

impl ValidateCommandHandler {
    /// 新しいValidateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// validateコマンドを実行
    ///
    /// # Returns
    ///
    /// 検証結果のサマリー
    pub fn execute(&self, command: &ValidateCommand) -> Result<String> {
        let table = load_table_schema(&command.schema_path)?;

        let validator = SchemaValidatorService::new();
        let result = validator.validate(&table, command.dialect);

        Ok(self.format_validation_result(&result, &table, command.dialect))
    }

    /// 検証結果をフォーマット
    fn format_validation_result(
        &self,
        result: &ValidationResult,
        table: &TableSchema,
        dialect: Dialect,
    ) -> String {
        let mut output = String::new();

        output.push_str("=== Table Validation Results ===\n\n");

        if !result.errors.is_empty() {
            output.push_str(&format!("❌ {} error(s) found:\n\n", result.error_count()));
            for (i, error) in result.errors.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, error));
            }
            output.push('\n');
        }

        if !result.warnings.is_empty() {
            output.push_str(&format!(
                "{} {} warning(s):\n\n",
                "⚠".yellow(),
                result.warning_count()
            ));
            for warning in &result.warnings {
                output.push_str(&format!("  {}\n", warning.format().yellow()));
            }
            output.push('\n');
        }

        output.push_str("=== Validation Statistics ===\n");
        output.push_str(&format!("Table: {}\n", table.name));
        output.push_str(&format!("Dialect: {}\n", dialect));
        output.push_str(&format!("Columns: {}\n", table.column_count()));
        output.push_str(&format!("Primary key columns: {}\n", table.primary_key_columns().len()));

        output.push_str("\n=== Result ===\n");
        if result.is_valid() {
            output.push_str(&format!(
                "{}\n",
                "✓ Validation complete. No errors found.".green()
            ));
        } else {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "✗ Validation complete. {} error(s) found.",
                    result.error_count()
                )
                .red()
            ));
        }

        output
    }
}

impl Default for ValidateCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_schema(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("table.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_execute_valid_table() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let path = write_schema(&dir, "name: users\ncolumns:\n  - name: id\n    type: bigint\n    primary_key: true\n");

        let output = ValidateCommandHandler::new()
            .execute(&ValidateCommand {
                schema_path: path,
                dialect: Dialect::PostgreSQL,
            })
            .unwrap();
        assert!(output.contains("Columns: 1"));
        assert!(output.contains("No errors found"));
    }

    #[test]
    fn test_execute_reports_doris_warning() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let path = write_schema(&dir, "name: orders\ncolumns:\n  - name: order_no\n    type: varchar\n");

        let output = ValidateCommandHandler::new()
            .execute(&ValidateCommand {
                schema_path: path,
                dialect: Dialect::Doris,
            })
            .unwrap();
        assert!(output.contains("1 warning(s)"));
        assert!(output.contains("No errors found"));
    }

    #[test]
    fn test_execute_reports_empty_table() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let path = write_schema(&dir, "name: empty\n");

        let output = ValidateCommandHandler::new()
            .execute(&ValidateCommand {
                schema_path: path,
                dialect: Dialect::MySQL,
            })
            .unwrap();
        assert!(output.contains("1 error(s) found"));
        assert!(output.contains("Table 'empty' has no columns"));
    }
}
