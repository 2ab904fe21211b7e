// スキーマバリデーターサービス
//
// SQL合成の前提条件（カラムの存在、識別子が空でないこと）の検証と、
// 方言ごとの生成結果に影響する事項の警告を行うサービス。

use crate::adapters::sql_generator::doris::DORIS_KEY_COLUMN;
use crate::core::config::Dialect;
use crate::core::error::{
    SynthesisError, ValidationError, ValidationResult, ValidationWarning,
};
use crate::core::schema::TableSchema;
use std::collections::HashSet;

/// スキーマバリデーターサービス
#[derive(Debug, Clone)]
pub struct SchemaValidatorService {}

impl SchemaValidatorService {
    /// 新しいSchemaValidatorServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 合成の前提条件のみを検証
    ///
    /// # Errors
    ///
    /// カラムが1つもない場合は `EmptySchema`
    pub fn ensure_not_empty(&self, table: &TableSchema) -> Result<(), SynthesisError> {
        if table.is_empty() {
            return Err(SynthesisError::empty_schema(&table.name));
        }
        Ok(())
    }

    /// テーブル定義と出力方言の組み合わせを検証
    ///
    /// # Arguments
    ///
    /// * `table` - 検証対象のテーブル定義
    /// * `dialect` - 出力方言
    ///
    /// # Returns
    ///
    /// 検証結果（エラーと警告のリスト）
    pub fn validate(&self, table: &TableSchema, dialect: Dialect) -> ValidationResult {
        let mut result = ValidationResult::new();

        if table.name.trim().is_empty() {
            result.add_error(ValidationError::BlankIdentifier {
                message: "table name is empty".to_string(),
            });
        }

        if let Err(e) = self.ensure_not_empty(table) {
            result.add_error(e);
            return result;
        }

        let mut seen = HashSet::new();
        for (i, column) in table.columns.iter().enumerate() {
            if column.name.trim().is_empty() {
                result.add_error(ValidationError::BlankIdentifier {
                    message: format!("column #{} has no name", i + 1),
                });
                continue;
            }

            if !seen.insert(column.name.as_str()) {
                result.add_warning(ValidationWarning::duplicate(
                    "Duplicate column name".to_string(),
                    Some(column.name.clone()),
                ));
            }
        }

        result.merge(self.validate_dialect_specific(table, dialect));
        result
    }

    /// 方言ごとの警告
    fn validate_dialect_specific(&self, table: &TableSchema, dialect: Dialect) -> ValidationResult {
        let mut result = ValidationResult::new();

        match dialect {
            Dialect::Doris => {
                if table.get_column(DORIS_KEY_COLUMN).is_none() {
                    result.add_warning(ValidationWarning::dialect_specific(
                        format!(
                            "Doris UNIQUE KEY and DISTRIBUTED BY HASH always reference '{}', which is not a column of '{}'",
                            DORIS_KEY_COLUMN, table.name
                        ),
                        None,
                    ));
                }
            }
            Dialect::MySQL => {
                let pk_count = table.primary_key_columns().len();
                if pk_count > 1 {
                    result.add_warning(ValidationWarning::dialect_specific(
                        format!(
                            "{} primary key columns will each be marked AUTO_INCREMENT; MySQL allows only one",
                            pk_count
                        ),
                        None,
                    ));
                }
            }
            Dialect::PostgreSQL | Dialect::Oracle | Dialect::SQLServer => {}
        }

        result
    }
}

impl Default for SchemaValidatorService {
    fn default() -> Self {
        Self::new()
    }
}
