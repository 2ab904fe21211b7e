// 共通型フォーマットロジック
//
// 複数の方言で共通する長さ句・SERIAL判定を提供します。

/// 長さ句を付与しない型（小文字で比較）
const LENGTH_EXEMPT_TYPES: [&str; 5] = ["datetime", "text", "date", "timestamp", "serial"];

/// 長さ句の対象外の型かどうか
pub fn is_length_exempt(lower_type: &str) -> bool {
    LENGTH_EXEMPT_TYPES.contains(&lower_type)
}

/// SERIAL系の型かどうか
pub fn is_serial(type_token: &str) -> bool {
    type_token.to_ascii_uppercase().contains("SERIAL")
}

/// `(length[,scale])` を生成
///
/// 長さが未指定または0の場合は `None`。スケールは0以外のときのみ付与します。
pub fn format_length_clause(length: Option<u32>, scale: Option<u32>) -> Option<String> {
    let length = length.filter(|l| *l > 0)?;
    match scale.filter(|s| *s > 0) {
        Some(scale) => Some(format!("({},{})", length, scale)),
        None => Some(format!("({})", length)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_length_clause() {
        assert_eq!(format_length_clause(Some(50), None), Some("(50)".to_string()));
        assert_eq!(format_length_clause(Some(10), Some(2)), Some("(10,2)".to_string()));
        assert_eq!(format_length_clause(Some(10), Some(0)), Some("(10)".to_string()));
        assert_eq!(format_length_clause(Some(0), Some(2)), None);
        assert_eq!(format_length_clause(None, Some(2)), None);
    }

    #[test]
    fn test_is_serial() {
        assert!(is_serial("SERIAL"));
        assert!(is_serial("bigserial"));
        assert!(!is_serial("BIGINT"));
    }

    #[test]
    fn test_is_length_exempt() {
        assert!(is_length_exempt("datetime"));
        assert!(is_length_exempt("serial"));
        assert!(!is_length_exempt("varchar"));
        assert!(!is_length_exempt("DATETIME"));
    }
}
