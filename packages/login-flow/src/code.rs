//! Confirmation code formatting

/// Maximum number of code characters kept from user input.
pub const MAX_CODE_LEN: usize = 12;

const GROUP_LEN: usize = 3;

/// Remove the display dashes from a code.
pub fn strip_code(display: &str) -> String {
    display.chars().filter(|c| *c != '-').collect()
}

/// Group a code into dash-separated blocks of three.
///
/// Existing dashes are ignored and input beyond [`MAX_CODE_LEN`] characters
/// is dropped, so `"123456789012"` becomes `"123-456-789-012"`.
pub fn format_code(raw: &str) -> String {
    let chars: Vec<char> = strip_code(raw).chars().take(MAX_CODE_LEN).collect();

    chars
        .chunks(GROUP_LEN)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_code() {
        assert_eq!(format_code("123456789012"), "123-456-789-012");
    }

    #[test]
    fn test_format_partial_group() {
        assert_eq!(format_code("1234"), "123-4");
        assert_eq!(format_code("12"), "12");
        assert_eq!(format_code("123"), "123");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_code(""), "");
        assert_eq!(format_code("---"), "");
    }

    #[test]
    fn test_reformats_already_dashed_input() {
        // Typing after "123-45" arrives as "123-456"
        assert_eq!(format_code("123-456"), "123-456");
        assert_eq!(format_code("123-4567"), "123-456-7");
        // Deleting a digit leaves a stale dash behind
        assert_eq!(format_code("12-34"), "123-4");
    }

    #[test]
    fn test_truncates_to_twelve_characters() {
        assert_eq!(format_code("1234567890123456"), "123-456-789-012");
        assert_eq!(strip_code(&format_code("1234567890123456")).len(), MAX_CODE_LEN);
    }

    #[test]
    fn test_truncation_counts_characters() {
        assert_eq!(format_code("ééééééééééééé"), "ééé-ééé-ééé-ééé");
    }

    #[test]
    fn test_strip_code() {
        assert_eq!(strip_code("123-456-789"), "123456789");
    }
}
