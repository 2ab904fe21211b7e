// DDL合成サービス
//
// 方言に対応するSQLジェネレーターを選択し、CREATE TABLE文を合成します。

use crate::adapters::sql_generator::generator_for;
use crate::core::config::Dialect;
use crate::core::error::SynthesisError;
use crate::core::schema::TableSchema;
use crate::services::schema_validator::SchemaValidatorService;
use tracing::debug;

/// CREATE TABLE文を合成
///
/// # Arguments
///
/// * `table` - テーブル定義
/// * `dialect` - 出力方言
///
/// # Errors
///
/// カラムが1つもない場合は `EmptySchema`
pub fn synthesize_create_table(
    table: &TableSchema,
    dialect: Dialect,
) -> Result<String, SynthesisError> {
    SchemaValidatorService::new().ensure_not_empty(table)?;

    debug!(
        dialect = %dialect,
        table = %table.name,
        columns = table.column_count(),
        "Synthesizing CREATE TABLE"
    );

    Ok(generator_for(dialect).generate_create_table(table))
}
