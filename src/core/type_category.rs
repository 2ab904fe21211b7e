// 型カテゴリ分類
//
// カラムのネイティブ型トークンを大まかなカテゴリに分類します。
// DMLのサンプル値選択や方言ごとの型変換判定に使用されます。

/// 型カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// 整数型 (INT, BIGINT, TINYINT ...)
    Integer,
    /// 小数を含む数値型 (DECIMAL, DOUBLE, FLOAT ...)
    Fractional,
    /// 日時型 (DATETIME)
    DateTime,
    /// 日付型 (DATE)
    Date,
    /// その他（文字列、TIMESTAMP、バイナリなど）
    Other,
}

impl TypeCategory {
    /// 型トークンからカテゴリを判定（大文字小文字は区別しない）
    pub fn from_type_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" | "bigint" | "smallint" | "mediumint" | "tinyint" => {
                TypeCategory::Integer
            }
            "decimal" | "numeric" | "double" | "float" | "real" => TypeCategory::Fractional,
            "datetime" => TypeCategory::DateTime,
            "date" => TypeCategory::Date,
            _ => TypeCategory::Other,
        }
    }

    /// 整数型かどうか
    pub fn is_integer(&self) -> bool {
        matches!(self, TypeCategory::Integer)
    }

    /// 数値型（整数・小数）かどうか
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypeCategory::Integer | TypeCategory::Fractional)
    }

    /// 日付・日時型かどうか
    pub fn is_temporal(&self) -> bool {
        matches!(self, TypeCategory::DateTime | TypeCategory::Date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_family() {
        for token in ["int", "INT", "BigInt", "tinyint", "smallint", "mediumint", "integer"] {
            assert_eq!(TypeCategory::from_type_token(token), TypeCategory::Integer);
        }
    }

    #[test]
    fn test_fractional_and_temporal() {
        assert!(TypeCategory::from_type_token("decimal").is_numeric());
        assert!(!TypeCategory::from_type_token("decimal").is_integer());
        assert_eq!(TypeCategory::from_type_token("DATETIME"), TypeCategory::DateTime);
        assert!(TypeCategory::from_type_token("date").is_temporal());
        // TIMESTAMPは日時サンプルの対象外
        assert_eq!(TypeCategory::from_type_token("timestamp"), TypeCategory::Other);
    }

    #[test]
    fn test_unknown_token_is_other() {
        assert_eq!(TypeCategory::from_type_token("varchar"), TypeCategory::Other);
        assert_eq!(TypeCategory::from_type_token(""), TypeCategory::Other);
    }
}
