// スキーマドメインモデル
//
// 方言に依存しないテーブル定義を表現する型システム。
// TableSchema, ColumnDescriptor, ImportMapping, SpreadsheetTemplate などを提供します。

use crate::core::type_category::TypeCategory;
use serde::{Deserialize, Serialize};

/// セル値
///
/// スプレッドシートの1セル分の生データ。null / bool / 数値 / 文字列のいずれか。
pub type CellValue = serde_json::Value;

/// テーブル定義
///
/// イントロスペクターまたはスプレッドシート抽出器が一度だけ生成し、
/// シンセサイザーは借用して読み取るのみです。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// テーブル名
    pub name: String,

    /// カラム定義のリスト（宣言順）
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,

    /// ストレージエンジン（例: InnoDB）
    #[serde(default, alias = "engine")]
    pub engine_hint: Option<String>,

    /// テーブルコメント
    #[serde(default)]
    pub comment: Option<String>,
}

impl TableSchema {
    /// 新しいテーブル定義を作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            engine_hint: None,
            comment: None,
        }
    }

    /// カラムを追加
    pub fn with_column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    /// ストレージエンジンを指定
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine_hint = Some(engine.into());
        self
    }

    /// テーブルコメントを指定
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// プライマリキーのカラムを宣言順で取得
    pub fn primary_key_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_primary_key).collect()
    }

    /// プライマリキーを持つかどうか
    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| c.is_primary_key)
    }

    /// 指定されたカラムを取得
    pub fn get_column(&self, column_name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == column_name)
    }

    /// カラム数を取得
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// カラムを持たないかどうか
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// WHERE句のキーとなるカラム
    ///
    /// 最初のプライマリキー、なければ先頭カラム。
    pub fn key_column(&self) -> Option<&ColumnDescriptor> {
        self.columns
            .iter()
            .find(|c| c.is_primary_key)
            .or_else(|| self.columns.first())
    }
}

/// カラム定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// カラム名
    pub name: String,

    /// ソース方言での型トークン（例: varchar, bigint）
    #[serde(rename = "type", alias = "native_type")]
    pub native_type: String,

    /// 長さ・精度
    #[serde(default)]
    pub length: Option<u32>,

    /// スケール
    #[serde(default)]
    pub scale: Option<u32>,

    /// NULL許可フラグ
    #[serde(default = "default_nullable")]
    pub nullable: bool,

    /// プライマリキーフラグ
    #[serde(default, alias = "primary_key")]
    pub is_primary_key: bool,

    /// デフォルト値（ソース方言の式またはリテラル）
    #[serde(default, alias = "default")]
    pub default_value: Option<String>,

    /// カラムコメント
    #[serde(default)]
    pub comment: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnDescriptor {
    /// 新しいカラムを作成
    pub fn new(name: impl Into<String>, native_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            native_type: native_type.into(),
            length: None,
            scale: None,
            nullable,
            is_primary_key: false,
            default_value: None,
            comment: None,
        }
    }

    /// 長さを指定
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// 精度とスケールを指定
    pub fn with_precision(mut self, length: u32, scale: u32) -> Self {
        self.length = Some(length);
        self.scale = Some(scale);
        self
    }

    /// プライマリキーとしてマーク
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// デフォルト値を指定
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// コメントを指定
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// 比較用に正規化した型トークン（小文字）
    pub fn type_key(&self) -> String {
        self.native_type.trim().to_ascii_lowercase()
    }

    /// 型カテゴリを取得
    pub fn type_category(&self) -> TypeCategory {
        TypeCategory::from_type_token(&self.native_type)
    }

    /// 空でないコメントを取得
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// インポート値の取得元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingSource {
    /// 指定ヘッダーの列から行ごとに値を取得
    SourceHeader(String),
    /// 全行で同じ固定値
    Literal(String),
}

/// インポート先カラムごとのバインディング
///
/// `source` が None のカラムは生成されるINSERT文から除外されます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMapping {
    /// インポート先のカラム名
    pub column: String,

    /// 値の取得元
    #[serde(default)]
    pub source: Option<MappingSource>,
}

impl ImportMapping {
    /// ヘッダー参照のマッピングを作成
    pub fn from_header(column: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            source: Some(MappingSource::SourceHeader(header.into())),
        }
    }

    /// 固定値のマッピングを作成
    pub fn literal(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            source: Some(MappingSource::Literal(value.into())),
        }
    }

    /// 取得元なしのマッピングを作成
    pub fn unmapped(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            source: None,
        }
    }

    /// 値を解決できる取得元を持つかどうか
    ///
    /// 空文字列のヘッダーと固定値は未設定として扱います。
    pub fn is_active(&self) -> bool {
        match &self.source {
            Some(MappingSource::SourceHeader(header)) => !header.is_empty(),
            Some(MappingSource::Literal(value)) => !value.is_empty(),
            None => false,
        }
    }
}

/// スプレッドシートのレイアウトテンプレート
///
/// 列はA, B, ... AAのような列文字で指定します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetTemplate {
    /// カラム定義が始まる行（1始まり）
    pub data_start_row: usize,

    /// カラム名の列
    pub name_col: String,

    /// 型の列
    pub type_col: String,

    /// コメントの列
    #[serde(default)]
    pub comment_col: Option<String>,

    /// プライマリキーフラグの列
    #[serde(default)]
    pub pk_col: Option<String>,
}

impl SpreadsheetTemplate {
    /// 新しいテンプレートを作成
    pub fn new(data_start_row: usize, name_col: impl Into<String>, type_col: impl Into<String>) -> Self {
        Self {
            data_start_row,
            name_col: name_col.into(),
            type_col: type_col.into(),
            comment_col: None,
            pk_col: None,
        }
    }

    /// コメント列を指定
    pub fn with_comment_col(mut self, col: impl Into<String>) -> Self {
        self.comment_col = Some(col.into());
        self
    }

    /// プライマリキー列を指定
    pub fn with_pk_col(mut self, col: impl Into<String>) -> Self {
        self.pk_col = Some(col.into());
        self
    }

    /// 設定済みのコメント列（空文字列は未設定扱い）
    pub fn comment_column(&self) -> Option<&str> {
        self.comment_col.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// 設定済みのプライマリキー列（空文字列は未設定扱い）
    pub fn pk_column(&self) -> Option<&str> {
        self.pk_col.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// インポート元のシートデータ
///
/// ヘッダー行は `rows` に含みません。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetData {
    /// ヘッダー行
    pub headers: Vec<String>,

    /// データ行
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetData {
    /// 新しいシートデータを作成
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// ヘッダー名から列インデックスを取得
    pub fn header_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}
