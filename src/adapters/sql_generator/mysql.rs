// MySQL用SQLジェネレーター
//
// テーブル定義からMySQL用のDDL文を生成します。

use crate::adapters::sql_generator::{
    column_lines, create_table_body, quoted_primary_keys, SqlGenerator,
};
use crate::adapters::sql_quote::escape_literal;
use crate::adapters::type_mapping::TypeMappingService;
use crate::core::config::Dialect;
use crate::core::schema::TableSchema;

/// エンジン未指定時のストレージエンジン
const DEFAULT_ENGINE: &str = "InnoDB";

/// MySQL用SQLジェネレーター
#[derive(Debug, Clone)]
pub struct MysqlSqlGenerator {}

impl MysqlSqlGenerator {
    /// 新しいMysqlSqlGeneratorを作成
    pub fn new() -> Self {
        Self {}
    }

    /// テーブルオプション句を生成
    fn generate_table_options(&self, table: &TableSchema) -> String {
        let engine = table
            .engine_hint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_ENGINE);

        let mut options = format!(" ENGINE={} DEFAULT CHARSET=utf8mb4", engine);
        if let Some(comment) = table.comment.as_deref().filter(|c| !c.is_empty()) {
            options.push_str(&format!(" COMMENT='{}'", escape_literal(comment)));
        }
        options
    }
}

impl Default for MysqlSqlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlGenerator for MysqlSqlGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::MySQL
    }

    fn generate_create_table(&self, table: &TableSchema) -> String {
        let service = TypeMappingService::new(Dialect::MySQL);
        let mut lines = column_lines(&service, &table.columns);

        // AUTO_INCREMENTカラムはキーである必要があるため、キーは無名のPRIMARY KEYで表現する
        if let Some(columns) = quoted_primary_keys(Dialect::MySQL, table) {
            lines.push(format!("  PRIMARY KEY ({})", columns));
        }

        let mut sql = create_table_body(Dialect::MySQL, &table.name, &lines);
        sql.push_str(&self.generate_table_options(table));
        sql.push(';');
        sql
    }
}
