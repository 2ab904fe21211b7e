// 入力ファイルローダー
//
// CLIから渡されるYAMLのテーブル定義・マッピングファイルと、
// CSV形式のセルグリッド・シートデータを読み込みます。

use crate::core::error::IoError;
use crate::core::schema::{CellValue, ImportMapping, MappingSource, SheetData, TableSchema};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// マッピングファイルの1エントリ
///
/// `literal` が空でなければ `header` より優先されます。
#[derive(Debug, Clone, Deserialize)]
struct MappingEntry {
    column: String,
    #[serde(default)]
    header: Option<String>,
    #[serde(default)]
    literal: Option<String>,
}

impl From<MappingEntry> for ImportMapping {
    fn from(entry: MappingEntry) -> Self {
        let literal = entry.literal.filter(|v| !v.is_empty());
        let header = entry.header.filter(|h| !h.is_empty());

        let source = match (literal, header) {
            (Some(value), _) => Some(MappingSource::Literal(value)),
            (None, Some(header)) => Some(MappingSource::SourceHeader(header)),
            (None, None) => None,
        };

        ImportMapping {
            column: entry.column,
            source,
        }
    }
}

/// ファイルの内容を読み込む
fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path).map_err(|e| IoError::FileRead {
        path: path.display().to_string(),
        cause: e.to_string(),
    })?;
    Ok(content)
}

/// YAML（またはJSON）のテーブル定義ファイルを読み込む
pub fn load_table_schema(path: &Path) -> Result<TableSchema> {
    let content = read_file(path)?;
    let table: TableSchema = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse table schema: {}", path.display()))?;

    debug!(
        path = %path.display(),
        table = %table.name,
        columns = table.column_count(),
        "Loaded table schema"
    );
    Ok(table)
}

/// YAMLのマッピングファイルを読み込む
///
/// ```yaml
/// - column: username
///   header: Name
/// - column: source
///   literal: excel
/// ```
pub fn load_mappings(path: &Path) -> Result<Vec<ImportMapping>> {
    let content = read_file(path)?;
    let entries: Vec<MappingEntry> = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse mapping file: {}", path.display()))?;

    debug!(path = %path.display(), count = entries.len(), "Loaded mappings");
    Ok(entries.into_iter().map(ImportMapping::from).collect())
}

/// CSVをセルグリッドとして読み込む
///
/// ヘッダー行の扱いは行わず、列数の異なる行も許容します。
pub fn load_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let content = read_file(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut grid = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to read CSV record {} in {}", i + 1, path.display()))?;
        grid.push(record.iter().map(str::to_string).collect());
    }

    debug!(path = %path.display(), rows = grid.len(), "Loaded grid");
    Ok(grid)
}

/// CSVをシートデータとして読み込む
///
/// 先頭行をヘッダーとし、空のセルはnullになります。
pub fn load_sheet(path: &Path) -> Result<SheetData> {
    let mut grid = load_grid(path)?.into_iter();
    let headers: Vec<String> = grid
        .next()
        .map(|row| row.into_iter().map(|h| h.trim().to_string()).collect())
        .unwrap_or_default();

    let rows = grid
        .map(|row| {
            row.into_iter()
                .map(|cell| {
                    if cell.is_empty() {
                        CellValue::Null
                    } else {
                        CellValue::String(cell)
                    }
                })
                .collect()
        })
        .collect();

    Ok(SheetData::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_entry_literal_takes_precedence() {
        let entry = MappingEntry {
            column: "source".to_string(),
            header: Some("Source".to_string()),
            literal: Some("excel".to_string()),
        };
        assert_eq!(ImportMapping::from(entry), ImportMapping::literal("source", "excel"));
    }

    #[test]
    fn test_mapping_entry_blank_values_are_unset() {
        let entry = MappingEntry {
            column: "id".to_string(),
            header: Some(String::new()),
            literal: Some(String::new()),
        };
        assert_eq!(ImportMapping::from(entry), ImportMapping::unmapped("id"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_grid(Path::new("/nonexistent/grid.csv")).unwrap_err();
        let io = err.downcast_ref::<IoError>().unwrap();
        assert!(io.is_file_not_found());
    }
}
