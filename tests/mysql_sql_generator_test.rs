/// MySQL用SQLジェネレーターのテスト
///
/// テーブル定義からMySQL用のDDL文を正しく生成することを確認します。

#[cfg(test)]
mod mysql_sql_generator_tests {
    use tablewright::adapters::sql_generator::mysql::MysqlSqlGenerator;
    use tablewright::adapters::sql_generator::SqlGenerator;
    use tablewright::core::schema::{ColumnDescriptor, TableSchema};

    fn users() -> TableSchema {
        TableSchema::new("users")
            .with_column(ColumnDescriptor::new("id", "bigint", false).primary_key())
            .with_column(ColumnDescriptor::new("username", "varchar", false).with_length(50))
    }

    /// 基本的なCREATE TABLE文の生成テスト
    #[test]
    fn test_generate_create_table_basic() {
        let generator = MysqlSqlGenerator::new();
        let sql = generator.generate_create_table(&users());

        assert!(sql.starts_with("CREATE TABLE `users` (\n"));
        assert!(sql.contains("`id` BIGINT NOT NULL AUTO_INCREMENT"));
        assert!(sql.contains("`username` VARCHAR(50) NOT NULL"));
        assert!(sql.ends_with("ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"));
    }

    /// PRIMARY KEY行の生成テスト
    #[test]
    fn test_primary_key_line() {
        let generator = MysqlSqlGenerator::new();
        let sql = generator.generate_create_table(&users());

        assert!(sql.contains("  PRIMARY KEY (`id`)\n)"));
        assert!(!sql.contains("CONSTRAINT"));
    }

    /// 複合プライマリキーのテスト
    #[test]
    fn test_composite_primary_key() {
        let generator = MysqlSqlGenerator::new();
        let table = TableSchema::new("user_roles")
            .with_column(ColumnDescriptor::new("user_id", "int", false).primary_key())
            .with_column(ColumnDescriptor::new("role_id", "int", false).primary_key());

        let sql = generator.generate_create_table(&table);
        assert!(sql.contains("PRIMARY KEY (`user_id`, `role_id`)"));
    }

    /// インラインコメントのテスト
    #[test]
    fn test_inline_column_comment() {
        let generator = MysqlSqlGenerator::new();
        let table = TableSchema::new("users").with_column(
            ColumnDescriptor::new("name", "varchar", true)
                .with_length(100)
                .with_comment("Owner's name"),
        );

        let sql = generator.generate_create_table(&table);
        assert!(sql.contains("`name` VARCHAR(100) COMMENT 'Owner''s name'"));
        assert!(!sql.contains("COMMENT ON"));
    }

    /// デフォルト値とDECIMALの精度のテスト
    #[test]
    fn test_default_and_precision() {
        let generator = MysqlSqlGenerator::new();
        let table = TableSchema::new("orders")
            .with_column(ColumnDescriptor::new("amount", "decimal", false).with_precision(10, 2))
            .with_column(
                ColumnDescriptor::new("created_at", "datetime", false)
                    .with_length(6)
                    .with_default("CURRENT_TIMESTAMP"),
            );

        let sql = generator.generate_create_table(&table);
        assert!(sql.contains("`amount` DECIMAL(10,2) NOT NULL"));
        assert!(sql.contains("`created_at` DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP"));
    }

    /// 同じ入力に対して同じ出力になることのテスト
    #[test]
    fn test_deterministic_output() {
        let generator = MysqlSqlGenerator::new();
        assert_eq!(
            generator.generate_create_table(&users()),
            generator.generate_create_table(&users())
        );
    }
}
