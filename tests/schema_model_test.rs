/// テーブル定義モデルのテスト
///
/// YAML / JSON からのデシリアライズとモデルのヘルパーを確認します。

#[cfg(test)]
mod schema_model_tests {
    use tablewright::core::schema::{ColumnDescriptor, ImportMapping, MappingSource, TableSchema};

    /// YAMLからのデシリアライズ
    #[test]
    fn test_table_schema_from_yaml() {
        let yaml = r#"
name: users
engine: MyISAM
comment: User accounts
columns:
  - name: id
    type: bigint
    nullable: false
    primary_key: true
  - name: email
    type: varchar
    length: 255
    default: "''"
    comment: Login email
"#;
        let table: TableSchema = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(table.name, "users");
        assert_eq!(table.engine_hint.as_deref(), Some("MyISAM"));
        assert_eq!(table.column_count(), 2);

        let id = &table.columns[0];
        assert!(id.is_primary_key);
        assert!(!id.nullable);

        let email = &table.columns[1];
        assert!(email.nullable);
        assert_eq!(email.length, Some(255));
        assert_eq!(email.default_value.as_deref(), Some("''"));
        assert_eq!(email.comment_text(), Some("Login email"));
    }

    /// JSONはYAMLのサブセットとして読み込める
    #[test]
    fn test_table_schema_from_json() {
        let json = r#"{"name": "t", "columns": [{"name": "a", "type": "int"}]}"#;
        let table: TableSchema = serde_saphyr::from_str(json).unwrap();
        assert_eq!(table.columns[0].native_type, "int");
        assert!(table.columns[0].nullable);
    }

    /// キーカラムの選択
    #[test]
    fn test_key_column() {
        let table = TableSchema::new("t")
            .with_column(ColumnDescriptor::new("a", "int", true))
            .with_column(ColumnDescriptor::new("b", "int", false).primary_key());
        assert_eq!(table.key_column().unwrap().name, "b");

        let table = TableSchema::new("t").with_column(ColumnDescriptor::new("a", "int", true));
        assert_eq!(table.key_column().unwrap().name, "a");

        assert!(TableSchema::new("t").key_column().is_none());
    }

    /// 空のコメントは無いものとして扱う
    #[test]
    fn test_blank_comment() {
        let column = ColumnDescriptor::new("a", "int", true).with_comment("");
        assert!(column.comment_text().is_none());
    }

    /// マッピングの有効判定
    #[test]
    fn test_import_mapping_is_active() {
        assert!(ImportMapping::from_header("a", "A").is_active());
        assert!(ImportMapping::literal("a", " ").is_active());
        assert!(!ImportMapping::literal("a", "").is_active());
        assert!(!ImportMapping::from_header("a", "").is_active());
        assert!(!ImportMapping::unmapped("a").is_active());
        assert_eq!(
            ImportMapping::literal("a", "x").source,
            Some(MappingSource::Literal("x".to_string()))
        );
    }
}
