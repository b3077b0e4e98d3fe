//! Kuwaiti phone number validation and formatting
//!
//! Canonical form is `+965 XXXX XXXX`: the country code literal, a space,
//! and two groups of four digits. Formatting works on the local part only;
//! the `+965` prefix is added by call sites.

use serde::{Deserialize, Serialize};

/// Country code literal for Kuwait
pub const KUWAIT_COUNTRY_CODE: &str = "+965";

/// Significant digits of a Kuwaiti subscriber number
pub const PHONE_DIGITS: usize = 8;

const DEFAULT_REQUIRED_ERROR: &str = "Phone number is required";
const DEFAULT_FORMAT_ERROR: &str = "Phone number must be 8 digits (+965 XXXX XXXX)";

/// Result of [`validate_and_format_phone`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneValidation {
    pub is_valid: bool,
    /// Formatted local part, e.g. "1234 5678" (without the country code)
    pub formatted: String,
    pub error: Option<String>,
}

/// Check a phone number against the canonical form `+965 XXXX XXXX`.
///
/// Internal whitespace runs are collapsed to single spaces before matching,
/// so `"+965  1234  5678"` is accepted. Grouping is strict: exactly four
/// digits, a space, four digits.
pub fn validate_kuwaiti_phone(phone: &str) -> bool {
    let parts: Vec<&str> = phone.split_whitespace().collect();
    match parts.as_slice() {
        [code, first, second] => {
            *code == KUWAIT_COUNTRY_CODE && is_digit_group(first) && is_digit_group(second)
        }
        _ => false,
    }
}

fn is_digit_group(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_digit())
}

/// Incrementally format raw keyboard input into the local part of a
/// Kuwaiti number.
///
/// Strips everything but digits, drops a leading `965` (so pasting a full
/// international number does not double the country code), truncates to
/// eight digits and groups them 4+4. Never inserts the `+965` prefix.
///
/// Idempotent: feeding the output back in returns it unchanged.
pub fn format_kuwaiti_phone(input: &str) -> String {
    let mut digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with("965") {
        digits.drain(..3);
    }
    digits.truncate(PHONE_DIGITS);

    if digits.len() <= 4 {
        digits
    } else {
        format!("{} {}", &digits[..4], &digits[4..])
    }
}

/// Format then validate user input in one step.
///
/// Empty or whitespace-only input fails with the required-field error;
/// anything else is formatted and checked for the full eight digits. Both
/// messages default to English when `None`; call sites pass the localized
/// messages for the active language.
pub fn validate_and_format_phone(
    input: &str,
    format_error: Option<&str>,
    required_error: Option<&str>,
) -> PhoneValidation {
    if input.trim().is_empty() {
        return PhoneValidation {
            is_valid: false,
            formatted: String::new(),
            error: Some(required_error.unwrap_or(DEFAULT_REQUIRED_ERROR).to_string()),
        };
    }

    let formatted = format_kuwaiti_phone(input);
    let canonical = format!("{} {}", KUWAIT_COUNTRY_CODE, formatted);
    if validate_kuwaiti_phone(&canonical) {
        PhoneValidation {
            is_valid: true,
            formatted,
            error: None,
        }
    } else {
        PhoneValidation {
            is_valid: false,
            formatted,
            error: Some(format_error.unwrap_or(DEFAULT_FORMAT_ERROR).to_string()),
        }
    }
}

/// Mask the last four digits of a valid number for display in listings,
/// e.g. `"+965 1234 5678"` -> `"+965 1234 ****"`.
///
/// Anything that is not a valid canonical number is returned unchanged.
pub fn mask_phone_number(phone: &str) -> String {
    if !validate_kuwaiti_phone(phone) {
        return phone.to_string();
    }
    let parts: Vec<&str> = phone.split_whitespace().collect();
    format!("{} {} ****", parts[0], parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_canonical_form() {
        assert!(validate_kuwaiti_phone("+965 1234 5678"));
        assert!(validate_kuwaiti_phone("+965  1234  5678")); // extra whitespace collapses
        assert!(!validate_kuwaiti_phone("+965 123 5678")); // wrong grouping
        assert!(!validate_kuwaiti_phone("1234 5678")); // missing country code
        assert!(!validate_kuwaiti_phone("+965 12345678"));
        assert!(!validate_kuwaiti_phone(""));
    }

    #[test]
    fn test_format_lengths() {
        assert_eq!(format_kuwaiti_phone(""), "");
        assert_eq!(format_kuwaiti_phone("1"), "1");
        assert_eq!(format_kuwaiti_phone("1234"), "1234");
        assert_eq!(format_kuwaiti_phone("12345"), "1234 5");
        assert_eq!(format_kuwaiti_phone("12345678"), "1234 5678");
    }

    #[test]
    fn test_format_strips_country_code() {
        assert_eq!(format_kuwaiti_phone("96512345678"), "1234 5678");
        assert_eq!(format_kuwaiti_phone("+965 1234 5678"), "1234 5678");
    }

    #[test]
    fn test_format_truncates_excess_digits() {
        assert_eq!(format_kuwaiti_phone("123456789999"), "1234 5678");
    }

    #[test]
    fn test_format_is_idempotent() {
        for input in ["", "1", "123", "1234 5", "1234 5678", "96512345678"] {
            let once = format_kuwaiti_phone(input);
            assert_eq!(format_kuwaiti_phone(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_validate_and_format() {
        let empty = validate_and_format_phone("   ", None, None);
        assert!(!empty.is_valid);
        assert_eq!(empty.formatted, "");
        assert!(empty.error.is_some());

        let ok = validate_and_format_phone("96512345678", None, None);
        assert!(ok.is_valid);
        assert_eq!(ok.formatted, "1234 5678");
        assert!(ok.error.is_none());

        let short = validate_and_format_phone("123", Some("custom"), None);
        assert!(!short.is_valid);
        assert_eq!(short.error.as_deref(), Some("custom"));
    }

    #[test]
    fn test_localized_required_message_wins_for_empty_input() {
        let empty = validate_and_format_phone("", Some("bad format"), Some("رقم الهاتف مطلوب"));
        assert!(!empty.is_valid);
        assert_eq!(empty.error.as_deref(), Some("رقم الهاتف مطلوب"));

        // the format message never leaks into the required case
        let blank = validate_and_format_phone("   ", Some("bad format"), None);
        assert_ne!(blank.error.as_deref(), Some("bad format"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+965 1234 5678"), "+965 1234 ****");
        assert_eq!(mask_phone_number("1234 5678"), "1234 5678"); // invalid, unchanged
        assert_eq!(mask_phone_number(""), "");
    }
}
