/// SQL Server用SQLジェネレーターのテスト

#[cfg(test)]
mod sqlserver_sql_generator_tests {
    use tablewright::adapters::sql_generator::sqlserver::SqlServerSqlGenerator;
    use tablewright::adapters::sql_generator::SqlGenerator;
    use tablewright::core::schema::{ColumnDescriptor, TableSchema};

    /// IDENTITY(1,1) とDATETIME2のテスト
    #[test]
    fn test_identity_and_datetime2() {
        let generator = SqlServerSqlGenerator::new();
        let table = TableSchema::new("orders")
            .with_column(ColumnDescriptor::new("id", "int", false).primary_key())
            .with_column(ColumnDescriptor::new("ordered_at", "datetime", false))
            .with_column(ColumnDescriptor::new("note", "nvarchar", true).with_length(200));

        let sql = generator.generate_create_table(&table);
        assert_eq!(
            sql,
            "CREATE TABLE \"orders\" (\n\
             \x20 \"id\" INT NOT NULL IDENTITY(1,1),\n\
             \x20 \"ordered_at\" DATETIME2 NOT NULL,\n\
             \x20 \"note\" NVARCHAR(200),\n\
             \x20 CONSTRAINT pk_orders PRIMARY KEY (\"id\")\n\
             );"
        );
    }

    /// テーブルコメントのみでもCOMMENT ON文を出力する
    #[test]
    fn test_table_comment_only() {
        let generator = SqlServerSqlGenerator::new();
        let table = TableSchema::new("orders")
            .with_comment("Customer orders")
            .with_column(ColumnDescriptor::new("id", "int", false));

        let sql = generator.generate_create_table(&table);
        assert!(sql.ends_with(");\n\nCOMMENT ON TABLE \"orders\" IS 'Customer orders';\n"));
    }

    /// 識別子内のダブルクォートは二重化する
    #[test]
    fn test_identifier_quote_is_doubled() {
        let generator = SqlServerSqlGenerator::new();
        let table = TableSchema::new("odd\"name").with_column(ColumnDescriptor::new("a", "int", true));

        let sql = generator.generate_create_table(&table);
        assert!(sql.starts_with("CREATE TABLE \"odd\"\"name\" ("));
    }
}
