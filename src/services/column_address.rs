// 列アドレス解決
//
// スプレッドシートの列文字（A, B, ..., Z, AA, ...）を0始まりの列インデックスへ変換します。

use crate::core::error::SynthesisError;

/// 列文字を0始まりのインデックスに変換
///
/// 小文字は大文字として扱います。前後の空白は無視します。
///
/// # Examples
/// ```
/// use tablewright::services::column_address::letter_to_index;
/// assert_eq!(letter_to_index("A").unwrap(), 0);
/// assert_eq!(letter_to_index("AA").unwrap(), 26);
/// ```
///
/// # Errors
///
/// 空文字列、英字以外の文字、桁あふれの場合は `InvalidAddress`
pub fn letter_to_index(letters: &str) -> Result<usize, SynthesisError> {
    let trimmed = letters.trim();
    if trimmed.is_empty() {
        return Err(SynthesisError::invalid_address(
            letters,
            "column letters must not be empty",
        ));
    }

    let mut index: usize = 0;
    for ch in trimmed.chars() {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(SynthesisError::invalid_address(
                letters,
                format!("unexpected character '{}', only A-Z are allowed", ch),
            ));
        }

        let digit = (upper as usize) - ('A' as usize) + 1;
        index = index
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| SynthesisError::invalid_address(letters, "column index overflow"))?;
    }

    Ok(index - 1)
}
