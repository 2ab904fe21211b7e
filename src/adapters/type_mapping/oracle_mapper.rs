// Oracle用型マッパー

use super::TypeMapper;
use crate::core::schema::ColumnDescriptor;

/// Oracle用型マッパー
pub struct OracleTypeMapper;

impl TypeMapper for OracleTypeMapper {
    fn translate_type(&self, upper_type: &str, _column: &ColumnDescriptor) -> String {
        match upper_type {
            "VARCHAR" => "VARCHAR2".to_string(),
            "DATETIME" => "DATE".to_string(),
            "BIGINT" => "NUMBER(19)".to_string(),
            "INT" => "NUMBER(10)".to_string(),
            other => other.to_string(),
        }
    }

    fn translate_default(&self, value: &str) -> String {
        if value.trim().eq_ignore_ascii_case("CURRENT_TIMESTAMP") {
            "SYSDATE".to_string()
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::type_mapping::TypeMappingService;
    use crate::core::config::Dialect;
    use crate::core::schema::ColumnDescriptor;

    #[test]
    fn test_numeric_rewrites_suppress_length() {
        let service = TypeMappingService::new(Dialect::Oracle);
        let id = ColumnDescriptor::new("id", "bigint", false)
            .with_length(20)
            .primary_key();
        assert_eq!(service.column_definition(&id), r#""id" NUMBER(19) NOT NULL"#);

        let count = ColumnDescriptor::new("count", "int", true).with_length(11);
        assert_eq!(service.column_definition(&count), r#""count" NUMBER(10)"#);
    }

    #[test]
    fn test_varchar_and_datetime() {
        let service = TypeMappingService::new(Dialect::Oracle);
        let name = ColumnDescriptor::new("name", "varchar", false).with_length(50);
        assert_eq!(service.column_definition(&name), r#""name" VARCHAR2(50) NOT NULL"#);

        let created = ColumnDescriptor::new("created_at", "datetime", false)
            .with_default("CURRENT_TIMESTAMP");
        assert_eq!(
            service.column_definition(&created),
            r#""created_at" DATE NOT NULL DEFAULT SYSDATE"#
        );
    }

    #[test]
    fn test_other_defaults_passthrough() {
        let service = TypeMappingService::new(Dialect::Oracle);
        let status = ColumnDescriptor::new("status", "varchar", false)
            .with_length(20)
            .with_default("'PENDING'");
        assert!(service
            .column_definition(&status)
            .ends_with("DEFAULT 'PENDING'"));
    }
}
