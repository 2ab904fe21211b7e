// SQL識別子クォート・リテラルエスケープユーティリティ
//
// 各データベース方言用の識別子クォート関数を提供します。
// type_mapping・sql_generator・DML/インポート生成のすべてから使用される共有モジュールです。

use crate::core::config::Dialect;

/// 方言の識別子クォート文字
pub fn quote_char(dialect: Dialect) -> char {
    match dialect {
        Dialect::MySQL | Dialect::Doris => '`',
        Dialect::PostgreSQL | Dialect::Oracle | Dialect::SQLServer => '"',
    }
}

/// 方言に応じて識別子をクォート
///
/// 識別子内のクォート文字は二重にエスケープします。
///
/// # Examples
/// ```
/// use tablewright::adapters::sql_quote::quote_identifier;
/// use tablewright::core::config::Dialect;
/// assert_eq!(quote_identifier(Dialect::MySQL, "users"), "`users`");
/// assert_eq!(quote_identifier(Dialect::Oracle, "users"), r#""users""#);
/// ```
pub fn quote_identifier(dialect: Dialect, name: &str) -> String {
    let q = quote_char(dialect);
    let mut escaped = String::with_capacity(name.len() + 2);
    escaped.push(q);
    for ch in name.chars() {
        if ch == q {
            escaped.push(q);
        }
        escaped.push(ch);
    }
    escaped.push(q);
    escaped
}

/// カラム名リストをクォートしてカンマ区切りで結合
pub fn quote_columns<'a, I>(dialect: Dialect, columns: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    columns
        .into_iter()
        .map(|c| quote_identifier(dialect, c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 文字列リテラル内のシングルクォートを二重化
///
/// それ以外の文字はエスケープしません。
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// エスケープ済みの文字列リテラルを生成
///
/// # Examples
/// ```
/// use tablewright::adapters::sql_quote::quote_literal;
/// assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
/// ```
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_literal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_backtick_dialects() {
        assert_eq!(quote_identifier(Dialect::MySQL, "users"), "`users`");
        assert_eq!(quote_identifier(Dialect::Doris, "users"), "`users`");
        assert_eq!(quote_identifier(Dialect::MySQL, "table`name"), "`table``name`");
    }

    #[test]
    fn test_quote_identifier_double_quote_dialects() {
        for dialect in [Dialect::PostgreSQL, Dialect::Oracle, Dialect::SQLServer] {
            assert_eq!(quote_identifier(dialect, "users"), r#""users""#);
            assert_eq!(quote_identifier(dialect, r#"table"name"#), r#""table""name""#);
        }
    }

    #[test]
    fn test_quote_columns() {
        let columns = ["user_id", "role_id"];
        assert_eq!(
            quote_columns(Dialect::MySQL, columns.iter().copied()),
            "`user_id`, `role_id`"
        );
        assert_eq!(
            quote_columns(Dialect::PostgreSQL, columns.iter().copied()),
            r#""user_id", "role_id""#
        );
    }

    #[test]
    fn test_escape_literal_only_touches_single_quotes() {
        assert_eq!(escape_literal("O'Brien"), "O''Brien");
        assert_eq!(escape_literal(r#"say "hi" \n"#), r#"say "hi" \n"#);
        assert_eq!(quote_literal("it's"), "'it''s'");
    }
}
