// スプレッドシートスキーマ抽出サービス
//
// テーブル定義書形式のセルグリッドとテンプレートから TableSchema を組み立てます。
// セルグリッドの読み込み（xlsx等）はこのサービスの範囲外です。

use crate::core::error::SynthesisError;
use crate::core::schema::{ColumnDescriptor, SpreadsheetTemplate, TableSchema};
use crate::services::column_address::letter_to_index;
use regex::Regex;
use tracing::debug;

/// プライマリキーとみなすセル値（小文字で比較）
const PRIMARY_KEY_MARKERS: [&str; 4] = ["y", "yes", "1", "是"];

/// 解決済みの列インデックス
struct ResolvedColumns {
    name: usize,
    native_type: usize,
    comment: Option<usize>,
    pk: Option<usize>,
}

impl ResolvedColumns {
    fn resolve(template: &SpreadsheetTemplate) -> Result<Self, SynthesisError> {
        Ok(Self {
            name: letter_to_index(&template.name_col)?,
            native_type: letter_to_index(&template.type_col)?,
            comment: template.comment_column().map(letter_to_index).transpose()?,
            pk: template.pk_column().map(letter_to_index).transpose()?,
        })
    }
}

/// セルグリッドからテーブル定義を抽出
///
/// # Arguments
///
/// * `table_name` - 生成するテーブル名
/// * `grid` - 行ごとのセル文字列（行の長さは不揃いでもよい）
/// * `template` - 列レイアウト
///
/// # Errors
///
/// テンプレートの列文字が解決できない場合、または `data_start_row` が0の場合は `InvalidAddress`
pub fn extract_schema(
    table_name: &str,
    grid: &[Vec<String>],
    template: &SpreadsheetTemplate,
) -> Result<TableSchema, SynthesisError> {
    let columns = ResolvedColumns::resolve(template)?;
    if template.data_start_row == 0 {
        return Err(SynthesisError::invalid_address(
            "0",
            "data_start_row is 1-based and must be at least 1",
        ));
    }

    let precision = precision_pattern();
    let mut table = TableSchema::new(table_name);
    for row in grid.iter().skip(template.data_start_row - 1) {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let name = cell_at(row, columns.name);
        let type_cell = cell_at(row, columns.native_type);
        // 区切り行
        if name.is_empty() || type_cell.is_empty() {
            continue;
        }

        let is_primary_key = columns
            .pk
            .map(|i| is_primary_key_marker(cell_at(row, i)))
            .unwrap_or(false);

        let mut column = parse_type_cell(precision.as_ref(), name, type_cell, !is_primary_key);
        column.is_primary_key = is_primary_key;
        if let Some(comment) = columns.comment.map(|i| cell_at(row, i)).filter(|c| !c.is_empty()) {
            column.comment = Some(comment.to_string());
        }

        table.columns.push(column);
    }

    debug!(
        table = %table.name,
        columns = table.column_count(),
        "Extracted table schema from grid"
    );

    Ok(table)
}

/// シート名からテーブル名を生成
///
/// 小文字化した後、`[a-z0-9_]` 以外の文字をすべてアンダースコアに置換します。
pub fn table_name_from_sheet(sheet_name: &str) -> String {
    sheet_name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn cell_at(row: &[String], index: usize) -> &str {
    row.get(index).map(|c| c.trim()).unwrap_or("")
}

fn is_primary_key_marker(value: &str) -> bool {
    let lower = value.to_lowercase();
    PRIMARY_KEY_MARKERS.contains(&lower.as_str())
}

/// 型セルを解析してカラム定義を作成
///
/// `varchar(50)` や `decimal(10, 2)` の括弧内は長さ・スケールとして取り出します。
/// 解析できない括弧はそのまま型トークンに残します。
fn parse_type_cell(
    precision: Option<&Regex>,
    name: &str,
    type_cell: &str,
    nullable: bool,
) -> ColumnDescriptor {
    match split_precision(precision, type_cell) {
        Some((native_type, length, scale)) => {
            let column = ColumnDescriptor::new(name, native_type, nullable);
            match scale {
                Some(scale) => column.with_precision(length, scale),
                None => column.with_length(length),
            }
        }
        None => ColumnDescriptor::new(name, type_cell, nullable),
    }
}

/// `型名(長さ[, スケール])` 形式の型セル
fn precision_pattern() -> Option<Regex> {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_ ]*?)\s*\(\s*(\d+)\s*(?:,\s*(\d+)\s*)?\)\s*$").ok()
}

fn split_precision(precision: Option<&Regex>, type_cell: &str) -> Option<(String, u32, Option<u32>)> {
    let caps = precision?.captures(type_cell)?;

    let native_type = caps.get(1)?.as_str().to_string();
    let length = caps.get(2)?.as_str().parse().ok()?;
    let scale = match caps.get(3) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    Some((native_type, length, scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn standard() -> SpreadsheetTemplate {
        SpreadsheetTemplate::new(2, "A", "B")
            .with_comment_col("C")
            .with_pk_col("D")
    }

    #[test]
    fn test_extract_skips_header_rows() {
        let grid = vec![
            row(&["Name", "Type", "Comment", "PK"]),
            row(&["id", "bigint", "identifier", "Y"]),
            row(&["title", "varchar(200)", "", ""]),
        ];

        let table = extract_schema("posts", &grid, &standard()).unwrap();
        assert_eq!(table.name, "posts");
        assert_eq!(table.column_count(), 2);

        let id = &table.columns[0];
        assert!(id.is_primary_key);
        assert!(!id.nullable);
        assert_eq!(id.comment.as_deref(), Some("identifier"));

        let title = &table.columns[1];
        assert_eq!(title.native_type, "varchar");
        assert_eq!(title.length, Some(200));
        assert!(title.nullable);
        assert!(title.comment.is_none());
    }

    #[test]
    fn test_extract_skips_blank_and_partial_rows() {
        let grid = vec![
            row(&["Name", "Type"]),
            row(&["id", "int"]),
            row(&["", ""]),
            row(&["orphan", ""]),
            row(&[]),
            row(&["name", "text"]),
        ];

        let table = extract_schema("t", &grid, &SpreadsheetTemplate::new(2, "A", "B")).unwrap();
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn test_primary_key_markers() {
        for marker in ["y", "Y", "yes", "YES", "1", "是"] {
            assert!(is_primary_key_marker(marker), "{}", marker);
        }
        for marker in ["", "n", "no", "0", "true"] {
            assert!(!is_primary_key_marker(marker), "{}", marker);
        }
    }

    #[test]
    fn test_duplicates_pass_through() {
        let grid = vec![row(&["a", "int"]), row(&["a", "int"])];
        let table = extract_schema("t", &grid, &SpreadsheetTemplate::new(1, "A", "B")).unwrap();
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_invalid_template_letters_fail_fast() {
        let err = extract_schema("t", &[], &SpreadsheetTemplate::new(1, "A1", "B")).unwrap_err();
        assert!(err.is_invalid_address());

        let err = extract_schema("t", &[], &SpreadsheetTemplate::new(1, "A", "B").with_pk_col("?"))
            .unwrap_err();
        assert!(err.is_invalid_address());
    }

    #[test]
    fn test_blank_optional_letters_are_unset() {
        let template = SpreadsheetTemplate::new(1, "A", "B")
            .with_comment_col("")
            .with_pk_col(" ");
        let grid = vec![row(&["id", "int", "note", "Y"])];
        let table = extract_schema("t", &grid, &template).unwrap();
        assert!(!table.columns[0].is_primary_key);
        assert!(table.columns[0].comment.is_none());
    }

    #[test]
    fn test_zero_start_row_is_rejected() {
        let err = extract_schema("t", &[], &SpreadsheetTemplate::new(0, "A", "B")).unwrap_err();
        assert!(err.is_invalid_address());
    }

    #[test]
    fn test_start_row_beyond_grid_yields_no_columns() {
        let grid = vec![row(&["id", "int"])];
        let table = extract_schema("t", &grid, &SpreadsheetTemplate::new(5, "A", "B")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_split_precision() {
        let re = precision_pattern();
        let re = re.as_ref();
        assert_eq!(split_precision(re, "varchar(50)"), Some(("varchar".to_string(), 50, None)));
        assert_eq!(
            split_precision(re, "DECIMAL(10, 2)"),
            Some(("DECIMAL".to_string(), 10, Some(2)))
        );
        assert_eq!(split_precision(re, "bigint"), None);
        assert_eq!(split_precision(re, "enum('a','b')"), None);
    }

    #[test]
    fn test_unparseable_parentheses_kept() {
        let grid = vec![row(&["status", "enum('a','b')"])];
        let table = extract_schema("t", &grid, &SpreadsheetTemplate::new(1, "A", "B")).unwrap();
        assert_eq!(table.columns[0].native_type, "enum('a','b')");
        assert!(table.columns[0].length.is_none());
    }

    #[test]
    fn test_table_name_from_sheet() {
        assert_eq!(table_name_from_sheet("User Accounts"), "user_accounts");
        assert_eq!(table_name_from_sheet("orders"), "orders");
        assert_eq!(table_name_from_sheet("order_items_2024"), "order_items_2024");
    }

    #[test]
    fn test_table_name_replaces_every_non_identifier_char() {
        assert_eq!(table_name_from_sheet("Data-Dict (v2)"), "data_dict__v2_");
        assert_eq!(table_name_from_sheet("用户表"), "___");
        assert_eq!(table_name_from_sheet(" users"), "_users");
    }
}
