// DML合成サービス
//
// テーブル定義から SELECT / INSERT / UPDATE / DELETE の雛形を生成します。
// 識別子のクォートのみ方言に従い、型の変換は行いません。

use crate::adapters::sql_quote::{quote_columns, quote_identifier};
use crate::core::config::Dialect;
use crate::core::error::SynthesisError;
use crate::core::schema::{ColumnDescriptor, TableSchema};
use crate::core::type_category::TypeCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// SELECT文の行数制限
const SELECT_LIMIT: u32 = 100;

/// UPDATE文で更新するカラムの最大数
const MAX_UPDATE_COLUMNS: usize = 3;

/// UPDATE文の対象から外すカラム
const UPDATE_EXCLUDED_COLUMN: &str = "created_at";

/// DML文の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DmlKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl DmlKind {
    pub const ALL: [DmlKind; 4] = [
        DmlKind::Select,
        DmlKind::Insert,
        DmlKind::Update,
        DmlKind::Delete,
    ];
}

impl fmt::Display for DmlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DmlKind::Select => "select",
            DmlKind::Insert => "insert",
            DmlKind::Update => "update",
            DmlKind::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DmlKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(DmlKind::Select),
            "insert" => Ok(DmlKind::Insert),
            "update" => Ok(DmlKind::Update),
            "delete" => Ok(DmlKind::Delete),
            other => Err(anyhow::anyhow!(
                "Unknown DML kind '{}'. Expected one of: select, insert, update, delete",
                other
            )),
        }
    }
}

/// 種類を指定してDML文を合成
pub fn synthesize_dml(
    kind: DmlKind,
    table: &TableSchema,
    dialect: Dialect,
) -> Result<String, SynthesisError> {
    match kind {
        DmlKind::Select => synthesize_select(table, dialect),
        DmlKind::Insert => synthesize_insert(table, dialect),
        DmlKind::Update => synthesize_update(table, dialect),
        DmlKind::Delete => synthesize_delete(table, dialect),
    }
}

/// SELECT文を合成
///
/// 全カラムを列挙し、方言に関係なく `LIMIT 100` を付与します。
pub fn synthesize_select(table: &TableSchema, dialect: Dialect) -> Result<String, SynthesisError> {
    ensure_columns(table, dialect, DmlKind::Select)?;

    let columns = quote_columns(dialect, table.columns.iter().map(|c| c.name.as_str()));
    Ok(format!(
        "SELECT\n  {}\nFROM {}\nLIMIT {};",
        columns,
        quote_identifier(dialect, &table.name),
        SELECT_LIMIT
    ))
}

/// INSERT文を合成
///
/// MySQLではプライマリキー（AUTO_INCREMENT）のカラムを除外します。
pub fn synthesize_insert(table: &TableSchema, dialect: Dialect) -> Result<String, SynthesisError> {
    ensure_columns(table, dialect, DmlKind::Insert)?;

    let targets: Vec<&ColumnDescriptor> = table
        .columns
        .iter()
        .filter(|c| !(dialect == Dialect::MySQL && c.is_primary_key))
        .collect();

    let columns = quote_columns(dialect, targets.iter().map(|c| c.name.as_str()));
    let values: Vec<&str> = targets.iter().map(|c| insert_sample_value(c)).collect();

    Ok(format!(
        "INSERT INTO {}\n({})\nVALUES\n({});",
        quote_identifier(dialect, &table.name),
        columns,
        values.join(", ")
    ))
}

/// UPDATE文を合成
///
/// キーは最初のプライマリキー（なければ先頭カラム）です。
pub fn synthesize_update(table: &TableSchema, dialect: Dialect) -> Result<String, SynthesisError> {
    let key = ensure_columns(table, dialect, DmlKind::Update)?;

    let assignments: Vec<String> = table
        .columns
        .iter()
        .filter(|c| !c.is_primary_key && c.name != key.name && c.name != UPDATE_EXCLUDED_COLUMN)
        .take(MAX_UPDATE_COLUMNS)
        .map(|c| {
            format!(
                "  {} = {}",
                quote_identifier(dialect, &c.name),
                update_sample_value(c)
            )
        })
        .collect();

    Ok(format!(
        "UPDATE {}\nSET\n{}\nWHERE {} = 1;",
        quote_identifier(dialect, &table.name),
        assignments.join(",\n"),
        quote_identifier(dialect, &key.name)
    ))
}

/// DELETE文を合成
pub fn synthesize_delete(table: &TableSchema, dialect: Dialect) -> Result<String, SynthesisError> {
    let key = ensure_columns(table, dialect, DmlKind::Delete)?;

    Ok(format!(
        "DELETE FROM {}\nWHERE {} = 1;",
        quote_identifier(dialect, &table.name),
        quote_identifier(dialect, &key.name)
    ))
}

/// カラムの存在を確認し、キーカラムを返す
fn ensure_columns(
    table: &TableSchema,
    dialect: Dialect,
    kind: DmlKind,
) -> Result<&ColumnDescriptor, SynthesisError> {
    let key = table
        .key_column()
        .ok_or_else(|| SynthesisError::empty_schema(&table.name))?;

    debug!(
        dialect = %dialect,
        table = %table.name,
        kind = %kind,
        columns = table.column_count(),
        "Synthesizing DML"
    );

    Ok(key)
}

fn insert_sample_value(column: &ColumnDescriptor) -> &'static str {
    let category = column.type_category();
    if category.is_numeric() {
        "0"
    } else if category.is_temporal() {
        "'2024-01-01 12:00:00'"
    } else {
        "'test_value'"
    }
}

fn update_sample_value(column: &ColumnDescriptor) -> &'static str {
    match column.type_category() {
        TypeCategory::Integer => "1",
        TypeCategory::DateTime => "NOW()",
        _ => "'new_value'",
    }
}
