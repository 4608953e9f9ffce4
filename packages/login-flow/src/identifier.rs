//! Identifier normalization
//!
//! Users type an email address or a mobile number into a single field.
//! Every keystroke runs through [`normalize_identifier`], which strips the
//! usual phone punctuation, decides which kind of identifier the text is, and
//! produces the value the input should display.

use lazy_static::lazy_static;
use regex::Regex;

/// Characters removed from identifier input before validation.
const FORMATTING_CHARS: [char; 6] = ['+', ' ', '\t', '(', ')', '-'];

/// Inputs of this length or shorter are never treated as phone numbers.
const MIN_PHONE_INPUT_LEN: usize = 4;

/// North American numbers: 10 digits, or 11 with the leading country code.
const NATIONAL_DIGITS: usize = 10;
const INTERNATIONAL_DIGITS: usize = 11;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$"
    ).unwrap();

    // Optional country code, area code 2-9XX, then seven digits
    static ref PHONE_REGEX: Regex = Regex::new(
        r"^1?[2-9][0-9]{2}[0-9]{7}$"
    ).unwrap();

    static ref DIGITS_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// What the user appears to be typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Email,
    Phone,
    Unknown,
}

/// Result of normalizing one input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedIdentifier {
    pub kind: IdentifierKind,
    /// Formatting-free value sent to the API (email or digits)
    pub cleaned: String,
    /// Value shown back in the input field
    pub display: String,
    /// Whether the identifier may be submitted
    pub acceptable: bool,
}

/// Remove phone punctuation (`+`, space, tab, parentheses, dashes).
pub fn clean_identifier(raw: &str) -> String {
    raw.chars().filter(|c| !FORMATTING_CHARS.contains(c)).collect()
}

/// Check whether a cleaned string is a syntactically valid email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check whether a digit string is a dialable North American number.
pub fn is_phone_number(digits: &str) -> bool {
    PHONE_REGEX.is_match(digits)
}

/// Truncate a digit string to the significant length of a phone number.
///
/// A leading `1` is a country code, so those inputs keep 11 digits; all
/// others keep 10. Shorter inputs, and anything that is not all ASCII
/// digits, are returned unchanged.
pub fn truncate_phone_digits(digits: &str) -> &str {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits;
    }
    let max = if digits.starts_with('1') {
        INTERNATIONAL_DIGITS
    } else {
        NATIONAL_DIGITS
    };
    // Digits are ASCII, so byte and char offsets agree
    &digits[..digits.len().min(max)]
}

/// Render phone digits for display, e.g. `15551234567` as `+1 (555) 123-4567`.
///
/// Partial numbers are grouped as far as they go. Only characters stripped
/// by [`clean_identifier`] are inserted, so cleaning the result gives the
/// digits back.
///
/// Anything that is not all ASCII digits is returned unchanged.
pub fn format_phone_number(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }

    let (prefix, national) = match digits.strip_prefix('1') {
        Some(rest) if digits.len() == INTERNATIONAL_DIGITS => ("+1 ", rest),
        _ => ("", digits),
    };

    let grouped = match national.len() {
        0..=3 => national.to_string(),
        4..=6 => format!("({}) {}", &national[..3], &national[3..]),
        _ => format!(
            "({}) {}-{}",
            &national[..3],
            &national[3..6],
            &national[6..]
        ),
    };

    format!("{}{}", prefix, grouped)
}

/// Clean, classify and format raw identifier input.
pub fn normalize_identifier(raw: &str) -> NormalizedIdentifier {
    let cleaned = clean_identifier(raw);

    if is_email(&cleaned) {
        return NormalizedIdentifier {
            kind: IdentifierKind::Email,
            display: cleaned.clone(),
            cleaned,
            acceptable: true,
        };
    }

    if cleaned.len() > MIN_PHONE_INPUT_LEN && DIGITS_REGEX.is_match(&cleaned) {
        let digits = truncate_phone_digits(&cleaned).to_string();
        return NormalizedIdentifier {
            kind: IdentifierKind::Phone,
            display: format_phone_number(&digits),
            acceptable: is_phone_number(&digits),
            cleaned: digits,
        };
    }

    NormalizedIdentifier {
        kind: IdentifierKind::Unknown,
        display: cleaned.clone(),
        cleaned,
        acceptable: false,
    }
}

/// Mask an identifier for log output.
///
/// Emails keep their first character and domain, phone numbers their last
/// four digits.
pub fn mask_identifier(identifier: &str) -> String {
    if let Some((local, domain)) = identifier.split_once('@') {
        let first = local.chars().next().map(String::from).unwrap_or_default();
        return format!("{}***@{}", first, domain);
    }

    let count = identifier.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = identifier.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_digits(first: char, len: usize) -> String {
        let mut s = String::with_capacity(len);
        s.push(first);
        for _ in 1..len {
            s.push(fastrand::char('0'..='9'));
        }
        s
    }

    #[test]
    fn test_clean_strips_phone_punctuation() {
        assert_eq!(clean_identifier("+1 (555) 123-4567"), "15551234567");
        assert_eq!(clean_identifier("a\tb c"), "abc");
        assert_eq!(clean_identifier(""), "");
    }

    #[test]
    fn test_clean_keeps_email_characters() {
        assert_eq!(clean_identifier("user.name@example.com"), "user.name@example.com");
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last@mail.example.co"));
        assert!(!is_email("user@example"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@.com"));
        assert!(!is_email("15551234567"));
    }

    #[test]
    fn test_is_phone_number() {
        assert!(is_phone_number("5551234567"));
        assert!(is_phone_number("15551234567"));
        assert!(!is_phone_number("0551234567"));
        assert!(!is_phone_number("1155123456"));
        assert!(!is_phone_number("555123456"));
        assert!(!is_phone_number("555-123-4567"));
    }

    #[test]
    fn test_truncates_country_code_numbers_to_eleven_digits() {
        for _ in 0..200 {
            let len = fastrand::usize(11..40);
            let digits = random_digits('1', len);
            let normalized = normalize_identifier(&digits);
            assert_eq!(normalized.kind, IdentifierKind::Phone);
            assert_eq!(normalized.cleaned.len(), 11, "input {}", digits);
            assert_eq!(normalized.cleaned, digits[..11]);
        }
    }

    #[test]
    fn test_truncates_national_numbers_to_ten_digits() {
        for _ in 0..200 {
            let first = fastrand::choice(['0', '2', '3', '4', '5', '6', '7', '8', '9']).unwrap();
            let len = fastrand::usize(10..40);
            let digits = random_digits(first, len);
            let normalized = normalize_identifier(&digits);
            assert_eq!(normalized.cleaned.len(), 10, "input {}", digits);
            assert_eq!(normalized.cleaned, digits[..10]);
        }
    }

    #[test]
    fn test_display_cleans_back_to_digits() {
        for len in 5..=11 {
            let first = if len == 11 { '1' } else { '5' };
            let digits = random_digits(first, len);
            let normalized = normalize_identifier(&digits);
            assert_eq!(clean_identifier(&normalized.display), normalized.cleaned);
        }
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("15551234567"), "+1 (555) 123-4567");
        assert_eq!(format_phone_number("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone_number("55512"), "(555) 12");
        assert_eq!(format_phone_number("5551234"), "(555) 123-4");
        assert_eq!(format_phone_number("155512"), "(155) 512");
    }

    #[test]
    fn test_format_phone_number_leaves_non_digits_alone() {
        assert_eq!(format_phone_number("éé"), "éé");
        assert_eq!(format_phone_number("555é1234567"), "555é1234567");
        assert_eq!(format_phone_number("555-1234"), "555-1234");
        assert_eq!(truncate_phone_digits("ééééééééééé"), "ééééééééééé");
    }

    #[test]
    fn test_normalize_email() {
        let normalized = normalize_identifier(" user@example.com ");
        assert_eq!(normalized.kind, IdentifierKind::Email);
        assert_eq!(normalized.cleaned, "user@example.com");
        assert!(normalized.acceptable);
    }

    #[test]
    fn test_normalize_formatted_phone() {
        let normalized = normalize_identifier("+1 (555) 123-4567");
        assert_eq!(normalized.kind, IdentifierKind::Phone);
        assert_eq!(normalized.cleaned, "15551234567");
        assert_eq!(normalized.display, "+1 (555) 123-4567");
        assert!(normalized.acceptable);
    }

    #[test]
    fn test_partial_phone_is_formatted_but_not_acceptable() {
        let normalized = normalize_identifier("555123");
        assert_eq!(normalized.kind, IdentifierKind::Phone);
        assert_eq!(normalized.display, "(555) 123");
        assert!(!normalized.acceptable);
    }

    #[test]
    fn test_short_digits_are_not_phones() {
        let normalized = normalize_identifier("5551");
        assert_eq!(normalized.kind, IdentifierKind::Unknown);
        assert_eq!(normalized.display, "5551");
        assert!(!normalized.acceptable);
    }

    #[test]
    fn test_empty_input_is_not_acceptable() {
        let normalized = normalize_identifier("");
        assert_eq!(normalized.kind, IdentifierKind::Unknown);
        assert!(!normalized.acceptable);
    }

    #[test]
    fn test_mask_identifier() {
        assert_eq!(mask_identifier("admin@example.com"), "a***@example.com");
        assert_eq!(mask_identifier("15551234567"), "*******4567");
        assert_eq!(mask_identifier("123"), "***");
    }
}
