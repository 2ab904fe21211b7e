// SQL Server用SQLジェネレーター
//
// テーブル定義からSQL Server用のDDL文を生成します。

use crate::adapters::sql_generator::{generate_with_deferred_comments, SqlGenerator};
use crate::core::config::Dialect;
use crate::core::schema::TableSchema;

/// SQL Server用SQLジェネレーター
#[derive(Debug, Clone)]
pub struct SqlServerSqlGenerator {}

impl SqlServerSqlGenerator {
    /// 新しいSqlServerSqlGeneratorを作成
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for SqlServerSqlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlGenerator for SqlServerSqlGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::SQLServer
    }

    fn generate_create_table(&self, table: &TableSchema) -> String {
        generate_with_deferred_comments(Dialect::SQLServer, table)
    }
}
