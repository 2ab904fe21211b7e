// PostgreSQL用型マッパー

use super::TypeMapper;
use crate::core::schema::ColumnDescriptor;
use crate::core::type_category::TypeCategory;

/// PostgreSQL用型マッパー
///
/// 整数型のプライマリキーは SERIAL に置き換え、採番句は出力しません。
pub struct PostgresTypeMapper;

impl TypeMapper for PostgresTypeMapper {
    fn translate_type(&self, upper_type: &str, column: &ColumnDescriptor) -> String {
        if column.is_primary_key && TypeCategory::from_type_token(upper_type).is_integer() {
            return "SERIAL".to_string();
        }

        match upper_type {
            "DATETIME" => "TIMESTAMP".to_string(),
            "TINYINT" => "SMALLINT".to_string(),
            other => other.to_string(),
        }
    }

    fn accepts_length(&self, resolved_type: &str) -> bool {
        // PostgreSQLではVARCHARのみ長さを付与する
        resolved_type == "VARCHAR"
    }
}
