// Oracle用SQLジェネレーター
//
// テーブル定義からOracle用のDDL文を生成します。

use crate::adapters::sql_generator::{generate_with_deferred_comments, SqlGenerator};
use crate::core::config::Dialect;
use crate::core::schema::TableSchema;

/// Oracle用SQLジェネレーター
#[derive(Debug, Clone)]
pub struct OracleSqlGenerator {}

impl OracleSqlGenerator {
    /// 新しいOracleSqlGeneratorを作成
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for OracleSqlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlGenerator for OracleSqlGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }

    fn generate_create_table(&self, table: &TableSchema) -> String {
        generate_with_deferred_comments(Dialect::Oracle, table)
    }
}
