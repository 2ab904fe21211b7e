/// スプレッドシートスキーマ抽出のテスト

#[cfg(test)]
mod spreadsheet_extractor_tests {
    use tablewright::core::config::{Config, Dialect};
    use tablewright::core::schema::SpreadsheetTemplate;
    use tablewright::services::ddl_service::synthesize_create_table;
    use tablewright::services::spreadsheet_extractor::extract_schema;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    /// 2つのデータ行の間の空行は無視される
    #[test]
    fn test_blank_row_between_data_rows() {
        let cells = grid(&[
            &["Field", "Type"],
            &["id", "bigint"],
            &["", ""],
            &["name", "varchar(50)"],
        ]);
        let template = SpreadsheetTemplate::new(2, "A", "B");

        let table = extract_schema("people", &cells, &template).unwrap();
        assert_eq!(table.column_count(), 2);
    }

    /// 組み込みテンプレートで抽出してDDLを生成する
    #[test]
    fn test_builtin_template_to_ddl() {
        let config = Config::default();
        let template = config.get_template(None).unwrap().to_template();
        let cells = grid(&[
            &["Name", "Type", "Comment"],
            &["code", "varchar(10)", "Product code"],
            &["price", "decimal(10,2)", ""],
        ]);

        let table = extract_schema("products", &cells, &template).unwrap();
        let sql = synthesize_create_table(&table, Dialect::MySQL).unwrap();
        assert!(sql.contains("`code` VARCHAR(10) COMMENT 'Product code'"));
        assert!(sql.contains("`price` DECIMAL(10,2)"));
    }

    /// プライマリキー列（離れた列文字も可）
    #[test]
    fn test_primary_key_column() {
        let template = SpreadsheetTemplate::new(1, "B", "C").with_pk_col("AA");
        let mut row = vec![String::new(); 27];
        row[1] = "id".to_string();
        row[2] = "int".to_string();
        row[26] = "是".to_string();

        let table = extract_schema("t", &[row], &template).unwrap();
        assert!(table.columns[0].is_primary_key);
        assert!(!table.columns[0].nullable);
    }

    /// 不正な列文字は即座にエラー
    #[test]
    fn test_invalid_letters() {
        let template = SpreadsheetTemplate::new(1, "A", "B").with_comment_col("C-1");
        let err = extract_schema("t", &grid(&[&["id", "int"]]), &template).unwrap_err();
        assert!(err.is_invalid_address());
    }
}
