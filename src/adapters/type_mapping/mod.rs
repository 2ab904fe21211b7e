// 型マッピングサービス
//
// 方言に依存しない共通インターフェースで ColumnDescriptor -> カラム定義句 の
// 変換を一元管理します。方言ごとの差分は TypeMapper の実装に閉じ込めます。

pub mod common;
mod doris_mapper;
mod mysql_mapper;
mod oracle_mapper;
mod postgres_mapper;
mod sqlserver_mapper;

pub use doris_mapper::DorisTypeMapper;
pub use mysql_mapper::MySqlTypeMapper;
pub use oracle_mapper::OracleTypeMapper;
pub use postgres_mapper::PostgresTypeMapper;
pub use sqlserver_mapper::SqlServerTypeMapper;

use crate::adapters::sql_quote::{escape_literal, quote_char, quote_identifier};
use crate::core::config::Dialect;
use crate::core::schema::ColumnDescriptor;
use common::{format_length_clause, is_length_exempt, is_serial};

/// 方言固有の型マッピング拡張
///
/// 既定実装はMySQL同様の素通しで、方言ごとに差分のみを上書きします。
pub trait TypeMapper: Send + Sync {
    /// 大文字化済みの型トークンを方言の型へ変換
    fn translate_type(&self, upper_type: &str, _column: &ColumnDescriptor) -> String {
        upper_type.to_string()
    }

    /// 変換後の型に長さ句を付与できるか
    fn accepts_length(&self, _resolved_type: &str) -> bool {
        true
    }

    /// プライマリキーカラムに付与する自動採番句
    fn auto_increment_clause(&self) -> Option<&'static str> {
        None
    }

    /// デフォルト値の方言変換
    fn translate_default(&self, value: &str) -> String {
        value.to_string()
    }
}

/// 1カラム分の方言別の定義句
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSyntax {
    /// 識別子クォート文字
    pub quote: char,
    /// 変換後の型トークン
    pub type_token: String,
    /// `(length[,scale])`
    pub length_clause: Option<String>,
    /// `NOT NULL`
    pub null_clause: Option<&'static str>,
    /// `AUTO_INCREMENT` / `IDENTITY(1,1)`
    pub auto_increment_clause: Option<&'static str>,
    /// `DEFAULT <value>`
    pub default_clause: Option<String>,
    /// `COMMENT '<text>'`（インラインコメント対応方言のみ）
    pub inline_comment: Option<String>,
}

impl ColumnSyntax {
    /// 長さ句を含む完全な型
    pub fn full_type(&self) -> String {
        match &self.length_clause {
            Some(clause) => format!("{}{}", self.type_token, clause),
            None => self.type_token.clone(),
        }
    }

    /// クォート済みカラム名に定義句を連結
    pub fn render(&self, quoted_name: &str) -> String {
        let mut parts = vec![quoted_name.to_string(), self.full_type()];

        if let Some(null_clause) = self.null_clause {
            parts.push(null_clause.to_string());
        }
        if let Some(auto_increment) = self.auto_increment_clause {
            parts.push(auto_increment.to_string());
        }
        if let Some(ref default_clause) = self.default_clause {
            parts.push(default_clause.clone());
        }
        if let Some(ref comment) = self.inline_comment {
            parts.push(comment.clone());
        }

        parts.join(" ")
    }
}

/// 型マッピングサービス
pub struct TypeMappingService {
    dialect: Dialect,
    mapper: Box<dyn TypeMapper>,
}

impl Clone for TypeMappingService {
    fn clone(&self) -> Self {
        Self::new(self.dialect)
    }
}

impl std::fmt::Debug for TypeMappingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeMappingService")
            .field("dialect", &self.dialect)
            .finish()
    }
}

impl TypeMappingService {
    /// 新しいTypeMappingServiceを作成
    pub fn new(dialect: Dialect) -> Self {
        let mapper: Box<dyn TypeMapper> = match dialect {
            Dialect::MySQL => Box::new(MySqlTypeMapper),
            Dialect::PostgreSQL => Box::new(PostgresTypeMapper),
            Dialect::Doris => Box::new(DorisTypeMapper),
            Dialect::Oracle => Box::new(OracleTypeMapper),
            Dialect::SQLServer => Box::new(SqlServerTypeMapper),
        };
        Self { dialect, mapper }
    }

    /// 方言を取得
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// 方言の型トークンを取得（長さ句を含まない）
    pub fn resolve_type(&self, column: &ColumnDescriptor) -> String {
        let upper = column.native_type.trim().to_ascii_uppercase();
        self.mapper.translate_type(&upper, column)
    }

    /// カラムを方言別の定義句へ変換
    pub fn map_column(&self, column: &ColumnDescriptor) -> ColumnSyntax {
        let type_token = self.resolve_type(column);
        let serial = is_serial(&type_token);

        // 変換後の型が括弧を含む場合（NUMBER(19) など）は長さ句を付与しない
        let length_clause = if is_length_exempt(&column.type_key())
            || is_length_exempt(&type_token.to_ascii_lowercase())
            || type_token.contains('(')
            || !self.mapper.accepts_length(&type_token)
        {
            None
        } else {
            format_length_clause(column.length, column.scale)
        };

        let null_clause = (!column.nullable && !serial).then_some("NOT NULL");

        let auto_increment_clause = if column.is_primary_key {
            self.mapper.auto_increment_clause()
        } else {
            None
        };

        let default_clause = column
            .default_value
            .as_deref()
            .filter(|v| !v.is_empty() && !serial)
            .map(|v| format!("DEFAULT {}", self.mapper.translate_default(v)));

        let inline_comment = if self.dialect.supports_inline_comments() {
            column
                .comment_text()
                .map(|c| format!("COMMENT '{}'", escape_literal(c)))
        } else {
            None
        };

        ColumnSyntax {
            quote: quote_char(self.dialect),
            type_token,
            length_clause,
            null_clause,
            auto_increment_clause,
            default_clause,
            inline_comment,
        }
    }

    /// インデント無しのカラム定義行を生成
    pub fn column_definition(&self, column: &ColumnDescriptor) -> String {
        self.map_column(column)
            .render(&quote_identifier(self.dialect, &column.name))
    }
}
