// Doris用SQLジェネレーター
//
// テーブル定義からApache Doris用のDDL文を生成します。
// Dorisではキーカラムを先頭に連続して宣言する必要があります。

use crate::adapters::sql_generator::{column_lines, create_table_body, SqlGenerator};
use crate::adapters::sql_quote::quote_identifier;
use crate::adapters::type_mapping::TypeMappingService;
use crate::core::config::Dialect;
use crate::core::schema::{ColumnDescriptor, TableSchema};

/// UNIQUE KEY / DISTRIBUTED BY HASH に使用するカラム名
///
/// スキーマのプライマリキー指定に関係なく固定です。
pub const DORIS_KEY_COLUMN: &str = "id";

/// バケット数
pub(crate) const BUCKETS: u32 = 10;

/// Doris用SQLジェネレーター
#[derive(Debug, Clone)]
pub struct DorisSqlGenerator {}

impl DorisSqlGenerator {
    /// 新しいDorisSqlGeneratorを作成
    pub fn new() -> Self {
        Self {}
    }

    /// プライマリキーを先頭に並べ替える（それぞれの相対順序は維持）
    pub fn key_first_order<'a>(&self, table: &'a TableSchema) -> Vec<&'a ColumnDescriptor> {
        let (keys, others): (Vec<_>, Vec<_>) =
            table.columns.iter().partition(|c| c.is_primary_key);
        keys.into_iter().chain(others).collect()
    }

    /// OLAPテーブルのオプション句を生成
    fn generate_table_options(&self) -> String {
        let key = quote_identifier(Dialect::Doris, DORIS_KEY_COLUMN);
        format!(
            "\nENGINE=OLAP\nUNIQUE KEY({key})\nDISTRIBUTED BY HASH({key}) BUCKETS {buckets}\nPROPERTIES (\n  \"replication_num\" = \"1\"\n)",
            key = key,
            buckets = BUCKETS
        )
    }
}

impl Default for DorisSqlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlGenerator for DorisSqlGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::Doris
    }

    fn generate_create_table(&self, table: &TableSchema) -> String {
        let service = TypeMappingService::new(Dialect::Doris);
        let lines = column_lines(&service, self.key_first_order(table));

        let mut sql = create_table_body(Dialect::Doris, &table.name, &lines);
        sql.push_str(&self.generate_table_options());
        sql.push(';');
        sql
    }
}
