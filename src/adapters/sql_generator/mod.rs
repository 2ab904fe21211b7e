// SQL生成アダプター
//
// テーブル定義から各データベース方言用のCREATE TABLE文を生成するアダプター層。

pub mod doris;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod sqlserver;

use crate::adapters::sql_quote::{escape_literal, quote_columns, quote_identifier};
use crate::adapters::type_mapping::TypeMappingService;
use crate::core::config::Dialect;
use crate::core::schema::{ColumnDescriptor, TableSchema};

pub use doris::DorisSqlGenerator;
pub use mysql::MysqlSqlGenerator;
pub use oracle::OracleSqlGenerator;
pub use postgres::PostgresSqlGenerator;
pub use sqlserver::SqlServerSqlGenerator;

/// カラム定義行のインデント
const INDENT: &str = "  ";

/// SQLジェネレータートレイト
///
/// 各データベース方言用のSQLジェネレーターが実装すべきインターフェース。
/// カラム数の検証は行いません（呼び出し側の責務）。
pub trait SqlGenerator {
    /// 対象の方言
    fn dialect(&self) -> Dialect;

    /// CREATE TABLE文を生成
    ///
    /// # Arguments
    ///
    /// * `table` - テーブル定義
    ///
    /// # Returns
    ///
    /// `;` で終端したCREATE TABLE文（後置のCOMMENT ON文を含む）
    fn generate_create_table(&self, table: &TableSchema) -> String;
}

/// 方言に対応するジェネレーターを取得
pub fn generator_for(dialect: Dialect) -> Box<dyn SqlGenerator> {
    match dialect {
        Dialect::MySQL => Box::new(MysqlSqlGenerator::new()),
        Dialect::PostgreSQL => Box::new(PostgresSqlGenerator::new()),
        Dialect::Doris => Box::new(DorisSqlGenerator::new()),
        Dialect::Oracle => Box::new(OracleSqlGenerator::new()),
        Dialect::SQLServer => Box::new(SqlServerSqlGenerator::new()),
    }
}

/// カラム定義行（インデント付き）を生成
pub(crate) fn column_lines<'a, I>(service: &TypeMappingService, columns: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ColumnDescriptor>,
{
    columns
        .into_iter()
        .map(|column| format!("{}{}", INDENT, service.column_definition(column)))
        .collect()
}

/// `CREATE TABLE <name> (\n ... \n)` 部分を組み立てる（終端記号なし）
pub(crate) fn create_table_body(dialect: Dialect, table_name: &str, lines: &[String]) -> String {
    format!(
        "CREATE TABLE {} (\n{}\n)",
        quote_identifier(dialect, table_name),
        lines.join(",\n")
    )
}

/// プライマリキーのクォート済みカラムリスト（宣言順）
pub(crate) fn quoted_primary_keys(dialect: Dialect, table: &TableSchema) -> Option<String> {
    let pks = table.primary_key_columns();
    if pks.is_empty() {
        return None;
    }
    Some(quote_columns(dialect, pks.iter().map(|c| c.name.as_str())))
}

/// 名前付きPRIMARY KEY制約行
pub(crate) fn constraint_line(dialect: Dialect, table: &TableSchema) -> Option<String> {
    quoted_primary_keys(dialect, table).map(|columns| {
        format!(
            "{}CONSTRAINT pk_{} PRIMARY KEY ({})",
            INDENT, table.name, columns
        )
    })
}

/// CREATE TABLE後に発行するCOMMENT ON文
///
/// カラムコメントとテーブルコメントがいずれも無い場合は `None`。
pub(crate) fn deferred_comments(dialect: Dialect, table: &TableSchema) -> Option<String> {
    let table_ident = quote_identifier(dialect, &table.name);
    let mut statements = String::new();

    for column in &table.columns {
        if let Some(comment) = column.comment_text() {
            statements.push_str(&format!(
                "COMMENT ON COLUMN {}.{} IS '{}';\n",
                table_ident,
                quote_identifier(dialect, &column.name),
                escape_literal(comment)
            ));
        }
    }

    if let Some(comment) = table.comment.as_deref().filter(|c| !c.is_empty()) {
        statements.push_str(&format!(
            "COMMENT ON TABLE {} IS '{}';\n",
            table_ident,
            escape_literal(comment)
        ));
    }

    if statements.is_empty() {
        None
    } else {
        Some(statements)
    }
}

/// インラインコメント非対応方言の共通CREATE TABLE生成
///
/// 名前付きPRIMARY KEY制約を末尾に置き、コメントは空行の後にCOMMENT ON文として出力します。
pub(crate) fn generate_with_deferred_comments(dialect: Dialect, table: &TableSchema) -> String {
    let service = TypeMappingService::new(dialect);
    let mut lines = column_lines(&service, &table.columns);
    if let Some(constraint) = constraint_line(dialect, table) {
        lines.push(constraint);
    }

    let mut sql = create_table_body(dialect, &table.name, &lines);
    sql.push(';');

    if let Some(comments) = deferred_comments(dialect, table) {
        sql.push_str("\n\n");
        sql.push_str(&comments);
    }

    sql
}
