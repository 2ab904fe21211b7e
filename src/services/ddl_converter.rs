// DDL変換サービス
//
// MySQLとDorisの間でCREATE TABLE文を相互変換します。
// カラムは TableSchema から組み立て、変換元のDDLからはテーブルコメントのみを読み取ります。

use crate::adapters::sql_generator::doris::{DorisSqlGenerator, BUCKETS, DORIS_KEY_COLUMN};
use crate::adapters::sql_quote::{escape_literal, quote_columns, quote_identifier};
use crate::core::config::Dialect;
use crate::core::error::SynthesisError;
use crate::core::schema::{ColumnDescriptor, TableSchema};
use crate::services::schema_validator::SchemaValidatorService;
use regex::Regex;
use tracing::debug;

/// 表示幅を持ちうる整数型
const INTEGER_TYPES: [&str; 5] = ["BIGINT", "INT", "TINYINT", "SMALLINT", "MEDIUMINT"];

/// DorisのSTRINGに変換するテキスト型
const TEXT_TYPES: [&str; 4] = ["TEXT", "LONGTEXT", "MEDIUMTEXT", "TINYTEXT"];

/// CREATE TABLE文を別の方言に変換
///
/// # Arguments
///
/// * `table` - 変換対象のテーブル定義
/// * `source_ddl` - 変換元のDDL（テーブルコメントの取得に使用、空文字列可）
/// * `target` - 変換先の方言（MySQL または Doris）
///
/// # Errors
///
/// カラムが1つもない場合は `EmptySchema`、変換先がMySQL/Doris以外の場合は `UnsupportedDialectFeature`
pub fn convert_ddl(
    table: &TableSchema,
    source_ddl: &str,
    target: Dialect,
) -> Result<String, SynthesisError> {
    SchemaValidatorService::new().ensure_not_empty(table)?;

    let sql = match target {
        Dialect::Doris => convert_mysql_to_doris(table, source_ddl),
        Dialect::MySQL => convert_doris_to_mysql(table, source_ddl),
        other => {
            return Err(SynthesisError::unsupported_dialect_feature(
                other.to_string(),
                "MySQL/Doris DDL conversion",
            ))
        }
    };

    debug!(
        target = %target,
        table = %table.name,
        columns = table.column_count(),
        "Converted CREATE TABLE"
    );

    Ok(sql)
}

/// MySQLのテーブルをDorisのUNIQUE KEYモデルのDDLに変換
///
/// キーはプライマリキーのカラム（無い場合は `id`）です。テーブルコメントが
/// 見つからない場合はテーブル名をコメントにします。
pub fn convert_mysql_to_doris(table: &TableSchema, source_ddl: &str) -> String {
    let columns = DorisSqlGenerator::new().key_first_order(table);

    let keys: Vec<&str> = columns
        .iter()
        .filter(|c| c.is_primary_key)
        .map(|c| c.name.as_str())
        .collect();
    let key_list = if keys.is_empty() {
        quote_identifier(Dialect::Doris, DORIS_KEY_COLUMN)
    } else {
        quote_columns(Dialect::Doris, keys)
    };

    let table_comment = resolve_table_comment(table, source_ddl).unwrap_or_else(|| table.name.clone());

    let lines: Vec<String> = columns
        .iter()
        .map(|column| {
            format!(
                "  {} {}{}",
                quote_identifier(Dialect::Doris, &column.name),
                mysql_to_doris_type(column),
                comment_clause(column)
            )
        })
        .collect();

    format!(
        "CREATE TABLE {table} (\n{lines}\n) ENGINE = OLAP\n\
         UNIQUE KEY({keys}) COMMENT '{comment}'\n\
         DISTRIBUTED BY HASH({keys}) BUCKETS {buckets}\n\
         PROPERTIES (\n  \"replication_num\" = \"1\",\n  \"enable_unique_key_merge_on_write\" = \"true\"\n);",
        table = quote_identifier(Dialect::Doris, &table.name),
        lines = lines.join(",\n"),
        keys = key_list,
        comment = escape_literal(&table_comment),
        buckets = BUCKETS
    )
}

/// DorisのテーブルをMySQL（InnoDB）のDDLに変換
pub fn convert_doris_to_mysql(table: &TableSchema, source_ddl: &str) -> String {
    let mut lines: Vec<String> = table
        .columns
        .iter()
        .map(|column| {
            format!(
                "  {} {} {}{}",
                quote_identifier(Dialect::MySQL, &column.name),
                doris_to_mysql_type(column),
                if column.nullable { "NULL" } else { "NOT NULL" },
                comment_clause(column)
            )
        })
        .collect();

    let keys = table.primary_key_columns();
    if !keys.is_empty() {
        lines.push(format!(
            "  PRIMARY KEY ({})",
            quote_columns(Dialect::MySQL, keys.iter().map(|c| c.name.as_str()))
        ));
    }

    let table_option = resolve_table_comment(table, source_ddl)
        .map(|comment| format!(" COMMENT='{}'", escape_literal(&comment)))
        .unwrap_or_default();

    format!(
        "CREATE TABLE {} (\n{}\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4{};",
        quote_identifier(Dialect::MySQL, &table.name),
        lines.join(",\n"),
        table_option
    )
}

/// カラムの型を長さ・精度付きの大文字表記にする
///
/// 型トークンが既に括弧を含む場合はそのまま大文字化します。整数型の表示幅は付与しません。
///
/// # Examples
/// ```
/// use tablewright::core::schema::ColumnDescriptor;
/// use tablewright::services::ddl_converter::format_column_type;
/// let column = ColumnDescriptor::new("price", "decimal", true).with_precision(10, 2);
/// assert_eq!(format_column_type(&column), "DECIMAL(10,2)");
/// ```
pub fn format_column_type(column: &ColumnDescriptor) -> String {
    let upper = column.native_type.trim().to_uppercase();
    if has_arguments(&upper) {
        return upper;
    }

    let length = column.length.filter(|l| *l > 0);
    let scale = column.scale.filter(|s| *s > 0);

    match upper.as_str() {
        "VARCHAR" | "CHAR" | "VARBINARY" | "BINARY" => match length {
            Some(length) => format!("{}({})", upper, length),
            None => upper.clone(),
        },
        "DECIMAL" | "NUMERIC" => match (length, scale) {
            (Some(length), Some(scale)) => format!("{}({},{})", upper, length, scale),
            (Some(length), None) => format!("{}({})", upper, length),
            _ => upper.clone(),
        },
        // 日時型の括弧は秒の小数精度
        "DATETIME" | "TIMESTAMP" | "TIME" => match scale {
            Some(scale) => format!("{}({})", upper, scale),
            None => upper.clone(),
        },
        _ => upper.clone(),
    }
}

/// DDLからテーブルコメントを抽出
///
/// Dorisの `UNIQUE KEY(...) COMMENT '...'`、MySQLの `) ... COMMENT='...'` の順に探し、
/// どちらも無ければ最後に現れる `COMMENT '...'` を使います。空のコメントは None です。
pub fn extract_table_comment(ddl: &str) -> Option<String> {
    if ddl.is_empty() {
        return None;
    }

    let key_comment = Regex::new(
        r#"(?i)(?:UNIQUE\s+KEY|DUPLICATE\s+KEY|AGGREGATE\s+KEY)\s*\([^)]*\)\s*COMMENT\s*['"]([^'"]*)['"]"#,
    )
    .ok()?;
    let table_option = Regex::new(r#"(?i)\)\s*(?:[^;]*?)COMMENT\s*=\s*['"]([^'"]*)['"]"#).ok()?;
    let any_comment = Regex::new(r#"(?i)COMMENT\s*=?\s*['"]([^'"]*)['"]"#).ok()?;

    let comment = first_capture(&key_comment, ddl)
        .or_else(|| first_capture(&table_option, ddl))
        .or_else(|| {
            any_comment
                .captures_iter(ddl)
                .last()
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })?;

    Some(comment.to_string()).filter(|c| !c.is_empty())
}

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)?.get(1).map(|m| m.as_str())
}

/// 変換元DDLのコメントを優先し、無ければテーブル定義のコメントを使う
fn resolve_table_comment(table: &TableSchema, source_ddl: &str) -> Option<String> {
    extract_table_comment(source_ddl).or_else(|| table.comment.clone().filter(|c| !c.is_empty()))
}

fn comment_clause(column: &ColumnDescriptor) -> String {
    column
        .comment_text()
        .map(|comment| format!(" COMMENT '{}'", escape_literal(comment)))
        .unwrap_or_default()
}

fn mysql_to_doris_type(column: &ColumnDescriptor) -> String {
    let formatted = format_column_type(column);
    let (base, args) = split_type_args(&formatted);

    let converted = match (base, args) {
        ("TINYINT", Some("1")) => Some("BOOLEAN"),
        // 表示幅が長さとして分離されている場合
        ("TINYINT", None) if column.length == Some(1) => Some("BOOLEAN"),
        (base, Some(width)) if INTEGER_TYPES.contains(&base) && is_digits(width) => Some(base),
        ("DOUBLE" | "FLOAT", Some(precision)) if is_precision_pair(precision) => Some(base),
        (base, None) if TEXT_TYPES.contains(&base) => Some("STRING"),
        ("DATETIME" | "TIMESTAMP", None) => Some("DATETIME"),
        ("DATETIME" | "TIMESTAMP", Some(fsp)) if is_digits(fsp) => Some("DATETIME"),
        ("VARCHAR", None) => Some("STRING"),
        _ => None,
    };

    converted
        .map(str::to_string)
        .unwrap_or_else(|| formatted.clone())
}

fn doris_to_mysql_type(column: &ColumnDescriptor) -> String {
    let formatted = format_column_type(column);
    if formatted == "STRING" {
        "TEXT".to_string()
    } else if formatted == "BOOLEAN" {
        "TINYINT(1)".to_string()
    } else {
        formatted
    }
}

fn has_arguments(type_token: &str) -> bool {
    match (type_token.find('('), type_token.rfind(')')) {
        (Some(open), Some(close)) => open < close,
        _ => false,
    }
}

/// `BASE(args)` を型名と括弧内に分割（括弧で終わらない場合は引数なし）
fn split_type_args(type_token: &str) -> (&str, Option<&str>) {
    match (type_token.find('('), type_token.strip_suffix(')')) {
        (Some(open), Some(inner)) => (type_token[..open].trim_end(), Some(inner[open + 1..].trim())),
        _ => (type_token, None),
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_precision_pair(value: &str) -> bool {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    parts.len() == 2 && parts.iter().all(|p| is_digits(p))
}
