// エラー型定義
//
// ライブラリ全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、SynthesisError, IoError と検証結果の型を定義します。

use thiserror::Error;

/// SQL合成エラー
///
/// 不正な設定（列アドレス、空スキーマ）は即座に失敗させ、
/// 汚れたデータはNULLやスキップに縮退させます。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// Malformed spreadsheet column address
    #[error("Invalid column address '{address}': {reason}")]
    InvalidAddress {
        /// 入力されたアドレス
        address: String,
        /// 不正な理由
        reason: String,
    },

    /// Schema without columns
    #[error("Table '{table}' has no columns")]
    EmptySchema {
        /// テーブル名
        table: String,
    },

    /// Mapping references a header missing from the sheet
    #[error("Column '{column}' is mapped to unknown source header '{header}'")]
    UnresolvedMapping {
        /// インポート先カラム
        column: String,
        /// 見つからなかったヘッダー
        header: String,
    },

    /// Dialect lacks a clause required by the statement
    #[error("Dialect '{dialect}' does not support {feature}")]
    UnsupportedDialectFeature {
        /// 対象のデータベース方言
        dialect: String,
        /// 機能名
        feature: String,
    },
}

impl SynthesisError {
    /// 列アドレスエラーを作成
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        SynthesisError::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// 空スキーマエラーを作成
    pub fn empty_schema(table: impl Into<String>) -> Self {
        SynthesisError::EmptySchema {
            table: table.into(),
        }
    }

    /// 方言非対応エラーを作成
    pub fn unsupported_dialect_feature(dialect: impl Into<String>, feature: impl Into<String>) -> Self {
        SynthesisError::UnsupportedDialectFeature {
            dialect: dialect.into(),
            feature: feature.into(),
        }
    }

    /// 列アドレスエラーかどうか
    pub fn is_invalid_address(&self) -> bool {
        matches!(self, SynthesisError::InvalidAddress { .. })
    }

    /// 空スキーマエラーかどうか
    pub fn is_empty_schema(&self) -> bool {
        matches!(self, SynthesisError::EmptySchema { .. })
    }

    /// 未解決マッピングエラーかどうか
    pub fn is_unresolved_mapping(&self) -> bool {
        matches!(self, SynthesisError::UnresolvedMapping { .. })
    }

    /// 方言非対応エラーかどうか
    pub fn is_unsupported_dialect_feature(&self) -> bool {
        matches!(self, SynthesisError::UnsupportedDialectFeature { .. })
    }
}

/// バリデーション警告
///
/// SQLは生成できるが、生成結果が意図どおりにならない可能性がある事項を表します。
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    /// 警告メッセージ
    pub message: String,
    /// 対象カラム
    pub column: Option<String>,
    /// 警告の種類
    pub kind: WarningKind,
}

/// 警告の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// 方言固有の制約に関する警告
    DialectSpecific,
    /// 重複したカラム定義
    Duplicate,
}

impl ValidationWarning {
    /// 新しい警告を作成
    pub fn new(message: String, column: Option<String>, kind: WarningKind) -> Self {
        Self {
            message,
            column,
            kind,
        }
    }

    /// 方言固有の警告を作成
    pub fn dialect_specific(message: String, column: Option<String>) -> Self {
        Self::new(message, column, WarningKind::DialectSpecific)
    }

    /// 重複の警告を作成
    pub fn duplicate(message: String, column: Option<String>) -> Self {
        Self::new(message, column, WarningKind::Duplicate)
    }

    /// 表示用にフォーマット
    pub fn format(&self) -> String {
        match &self.column {
            Some(column) => format!("Warning: {} (column: {})", self.message, column),
            None => format!("Warning: {}", self.message),
        }
    }
}

/// バリデーションエラー
///
/// 合成の前提条件違反を表現します。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Synthesis precondition violated
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    /// Table or column name is blank
    #[error("Blank identifier: {message}")]
    BlankIdentifier {
        /// エラーメッセージ
        message: String,
    },
}

impl ValidationError {
    /// 合成エラー由来かどうか
    pub fn is_synthesis(&self) -> bool {
        matches!(self, ValidationError::Synthesis(_))
    }

    /// 空の識別子エラーかどうか
    pub fn is_blank_identifier(&self) -> bool {
        matches!(self, ValidationError::BlankIdentifier { .. })
    }
}

/// バリデーション結果
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// エラーのリスト
    pub errors: Vec<ValidationError>,
    /// 警告のリスト
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// 新しいバリデーション結果を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: impl Into<ValidationError>) {
        self.errors.push(error.into());
    }

    /// 警告を追加
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// 検証が成功したかどうか（エラーがない場合は成功）
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// エラーの数を取得
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// 警告の数を取得
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// 他のバリデーション結果をマージ
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// I/Oエラー
///
/// 入力ファイルの読み込み時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// ファイルパス
        path: String,
    },

    /// File read error
    #[error("Failed to read file: {path} (cause: {cause})")]
    FileRead {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },
}

impl IoError {
    /// ファイルが見つからないエラーかどうか
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, IoError::FileNotFound { .. })
    }

    /// ファイル読み込みエラーかどうか
    pub fn is_file_read(&self) -> bool {
        matches!(self, IoError::FileRead { .. })
    }
}
