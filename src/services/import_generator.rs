// インポートSQL合成サービス
//
// シートデータとカラムマッピングから、複数行VALUESのINSERT文を1つ生成します。

use crate::adapters::sql_quote::{escape_literal, quote_columns, quote_identifier};
use crate::core::config::Dialect;
use crate::core::schema::{CellValue, ImportMapping, MappingSource, SheetData, TableSchema};
use tracing::{debug, warn};

/// マッピングが1つも有効でない場合の出力
pub const NO_MAPPINGS_MESSAGE: &str = "-- No mappings configured";

/// データ行が無い場合の出力
pub const NO_DATA_MESSAGE: &str = "-- No data found";

/// 値の解決方法が確定したインポート先カラム
struct BoundColumn<'a> {
    name: &'a str,
    value: BoundValue<'a>,
}

enum BoundValue<'a> {
    Literal(&'a str),
    /// シート上の列インデックス（ヘッダーが見つからない場合は None）
    Cell(Option<usize>),
}

/// バッチINSERT文を合成
///
/// # Arguments
///
/// * `table` - インポート先のテーブル定義
/// * `mappings` - カラムごとの値の取得元
/// * `sheet` - インポート元のシートデータ
/// * `dialect` - 識別子のクォートに使用する方言
///
/// # Returns
///
/// `-- Import to <table>` で始まるSQL。有効なマッピングが無い場合は `-- No mappings configured`
pub fn synthesize_batch_insert(
    table: &TableSchema,
    mappings: &[ImportMapping],
    sheet: &SheetData,
    dialect: Dialect,
) -> String {
    let bound = bind_columns(table, mappings, sheet);
    if bound.is_empty() {
        return NO_MAPPINGS_MESSAGE.to_string();
    }

    let mut sql = format!("-- Import to {}\n", table.name);

    // セルを1つも持たない行のみ読み飛ばす
    let rows: Vec<&Vec<CellValue>> = sheet.rows.iter().filter(|row| !row.is_empty()).collect();
    let skipped = sheet.rows.len() - rows.len();
    if skipped > 0 {
        debug!(skipped, "Skipped empty rows");
    }

    if rows.is_empty() {
        sql.push_str(NO_DATA_MESSAGE);
        return sql;
    }

    sql.push_str(&format!(
        "INSERT INTO {} ({}) VALUES\n",
        quote_identifier(dialect, &table.name),
        quote_columns(dialect, bound.iter().map(|c| c.name))
    ));

    let tuples: Vec<String> = rows
        .iter()
        .map(|row| {
            let values: Vec<String> = bound.iter().map(|column| render_value(&column.value, row)).collect();
            format!("({})", values.join(", "))
        })
        .collect();
    sql.push_str(&tuples.join(",\n"));
    sql.push(';');

    debug!(
        dialect = %dialect,
        table = %table.name,
        columns = bound.len(),
        rows = rows.len(),
        "Synthesized batch INSERT"
    );

    sql
}

fn render_value(value: &BoundValue<'_>, row: &[CellValue]) -> String {
    match value {
        BoundValue::Literal(literal) => format!("'{}'", escape_literal(literal)),
        BoundValue::Cell(index) => match index.and_then(|i| row.get(i)) {
            None | Some(CellValue::Null) => "NULL".to_string(),
            Some(cell) => format!("'{}'", escape_literal(&stringify_cell(cell))),
        },
    }
}

/// テーブルのカラム順に有効なマッピングを解決
fn bind_columns<'a>(
    table: &'a TableSchema,
    mappings: &'a [ImportMapping],
    sheet: &SheetData,
) -> Vec<BoundColumn<'a>> {
    for mapping in mappings {
        if table.get_column(&mapping.column).is_none() {
            warn!(
                table = %table.name,
                column = %mapping.column,
                "Ignoring mapping for unknown column"
            );
        }
    }

    table
        .columns
        .iter()
        .filter_map(|column| {
            let mapping = mappings
                .iter()
                .find(|m| m.column == column.name && m.is_active())?;

            let value = match mapping.source.as_ref()? {
                MappingSource::Literal(literal) => BoundValue::Literal(literal),
                MappingSource::SourceHeader(header) => {
                    let index = sheet.header_index(header);
                    if index.is_none() {
                        debug!(column = %column.name, header = %header, "Source header not found; emitting NULL");
                    }
                    BoundValue::Cell(index)
                }
            };

            Some(BoundColumn {
                name: column.name.as_str(),
                value,
            })
        })
        .collect()
}

fn stringify_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// シートのヘッダーからマッピングを自動生成
///
/// 大文字小文字を無視して一致するヘッダー、またはアンダースコアを除去して一致するヘッダーの
/// うち最初のものに割り当てます。見つからないカラムは取得元なしになります。
pub fn auto_map(table: &TableSchema, headers: &[String]) -> Vec<ImportMapping> {
    table
        .columns
        .iter()
        .map(|column| {
            let name = column.name.to_lowercase();
            let compact = name.replace('_', "");
            let matched = headers.iter().find(|header| {
                let header = header.to_lowercase();
                header == name || header.replace('_', "") == compact
            });

            match matched {
                Some(header) => ImportMapping::from_header(&column.name, header),
                None => ImportMapping::unmapped(&column.name),
            }
        })
        .collect()
}
