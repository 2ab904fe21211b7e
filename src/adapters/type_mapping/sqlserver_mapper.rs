// SQL Server用型マッパー

use super::TypeMapper;
use crate::core::schema::ColumnDescriptor;

/// SQL Server用型マッパー
///
/// プライマリキーには IDENTITY(1,1) を付与します。
pub struct SqlServerTypeMapper;

impl TypeMapper for SqlServerTypeMapper {
    fn translate_type(&self, upper_type: &str, _column: &ColumnDescriptor) -> String {
        match upper_type {
            "DATETIME" => "DATETIME2".to_string(),
            other => other.to_string(),
        }
    }

    fn auto_increment_clause(&self) -> Option<&'static str> {
        Some("IDENTITY(1,1)")
    }
}
