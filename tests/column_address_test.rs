/// 列アドレス解決のテスト

#[cfg(test)]
mod column_address_tests {
    use tablewright::services::column_address::letter_to_index;

    #[test]
    fn test_reference_values() {
        assert_eq!(letter_to_index("A").unwrap(), 0);
        assert_eq!(letter_to_index("Z").unwrap(), 25);
        assert_eq!(letter_to_index("AA").unwrap(), 26);
        assert_eq!(letter_to_index("AZ").unwrap(), 51);
    }

    #[test]
    fn test_lowercase_and_whitespace() {
        assert_eq!(letter_to_index(" ab ").unwrap(), 27);
    }

    #[test]
    fn test_invalid_input() {
        for input in ["", "   ", "1", "A1", "Ä"] {
            let err = letter_to_index(input).unwrap_err();
            assert!(err.is_invalid_address(), "{:?}", input);
        }
    }
}
