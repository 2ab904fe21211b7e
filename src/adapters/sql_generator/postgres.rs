// PostgreSQL用SQLジェネレーター
//
// テーブル定義からPostgreSQL用のDDL文を生成します。

use crate::adapters::sql_generator::{generate_with_deferred_comments, SqlGenerator};
use crate::core::config::Dialect;
use crate::core::schema::TableSchema;

/// PostgreSQL用SQLジェネレーター
#[derive(Debug, Clone)]
pub struct PostgresSqlGenerator {}

impl PostgresSqlGenerator {
    /// 新しいPostgresSqlGeneratorを作成
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for PostgresSqlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlGenerator for PostgresSqlGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSQL
    }

    fn generate_create_table(&self, table: &TableSchema) -> String {
        generate_with_deferred_comments(Dialect::PostgreSQL, table)
    }
}
