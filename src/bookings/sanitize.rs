//! Input sanitization and coercion for booking submissions.
//!
//! Pure functions, no database access. The coercion rules are deliberately
//! forgiving: callers submit forms from the public site, and malformed
//! numeric input falls back to safe defaults instead of failing the booking.

use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 200;
pub const MAX_PHONE_LEN: usize = 50;
pub const MAX_MESSAGE_LEN: usize = 2000;
pub const MAX_ADMIN_NOTE_LEN: usize = 5000;

pub const MIN_GUESTS: i32 = 1;
pub const MAX_GUESTS: i32 = 100;

/// Reference code alphabet. Excludes confusing characters (I, 1, O, 0).
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const REFERENCE_PREFIX: &str = "GH-";
const REFERENCE_LEN: usize = 6;

/// Trim and truncate a free-text field to at most `max` characters.
/// Truncation, not rejection: oversized input is silently cut.
pub fn truncate(value: &str, max: usize) -> String {
    value.trim().chars().take(max).collect()
}

/// Basic `local@domain.tld` shape check: no whitespace, a single `@`,
/// and a domain with a non-empty label on each side of its last dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Coerce a guest count out of arbitrary JSON input.
///
/// Numbers and numeric strings are rounded and clamped into
/// [MIN_GUESTS, MAX_GUESTS]; anything else defaults to a single guest.
pub fn coerce_guests(value: Option<&Value>) -> i32 {
    match numeric_value(value) {
        Some(n) => (n.round() as i64).clamp(MIN_GUESTS as i64, MAX_GUESTS as i64) as i32,
        None => MIN_GUESTS,
    }
}

/// Coerce a total price out of arbitrary JSON input.
///
/// Floored at zero; non-numeric input defaults to zero.
pub fn coerce_total_price(value: Option<&Value>) -> Decimal {
    match numeric_value(value).and_then(Decimal::from_f64) {
        Some(price) if price > Decimal::ZERO => price.round_dp(2),
        _ => Decimal::ZERO,
    }
}

fn numeric_value(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Generate a human-readable booking reference code, e.g. `GH-A8F2KQ`.
pub fn generate_reference_code() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..REFERENCE_LEN)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect();
    format!("{}{}", REFERENCE_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    // ==================== truncate tests ====================

    #[test]
    fn test_truncate_trims_whitespace() {
        assert_eq!(truncate("  Jane Doe  ", MAX_NAME_LEN), "Jane Doe");
    }

    #[test]
    fn test_truncate_caps_length() {
        let long = "x".repeat(500);
        assert_eq!(truncate(&long, MAX_NAME_LEN).chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let thai = "ท".repeat(300);
        assert_eq!(truncate(&thai, MAX_NAME_LEN).chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate("ok", MAX_MESSAGE_LEN), "ok");
    }

    // ==================== email tests ====================

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("a.b+c@mail.example.co.th"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane@xcom"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@x."));
        assert!(!is_valid_email("jane doe@x.com"));
        assert!(!is_valid_email("jane@x@y.com"));
        assert!(!is_valid_email(""));
    }

    // ==================== guests coercion tests ====================

    #[test]
    fn test_guests_clamped_into_range() {
        assert_eq!(coerce_guests(Some(&json!(5))), 5);
        assert_eq!(coerce_guests(Some(&json!(0))), 1);
        assert_eq!(coerce_guests(Some(&json!(-3))), 1);
        assert_eq!(coerce_guests(Some(&json!(100))), 100);
        assert_eq!(coerce_guests(Some(&json!(250))), 100);
    }

    #[test]
    fn test_guests_rounded() {
        assert_eq!(coerce_guests(Some(&json!(2.4))), 2);
        assert_eq!(coerce_guests(Some(&json!(2.6))), 3);
    }

    #[test]
    fn test_guests_numeric_strings_accepted() {
        assert_eq!(coerce_guests(Some(&json!("12"))), 12);
        assert_eq!(coerce_guests(Some(&json!(" 7 "))), 7);
    }

    #[test]
    fn test_guests_non_numeric_defaults_to_one() {
        assert_eq!(coerce_guests(None), 1);
        assert_eq!(coerce_guests(Some(&json!("lots"))), 1);
        assert_eq!(coerce_guests(Some(&json!(null))), 1);
        assert_eq!(coerce_guests(Some(&json!(true))), 1);
        assert_eq!(coerce_guests(Some(&json!([4]))), 1);
    }

    // ==================== total price coercion tests ====================

    #[test]
    fn test_total_price_parsed() {
        assert_eq!(coerce_total_price(Some(&json!(1500.5))), dec!(1500.50));
        assert_eq!(coerce_total_price(Some(&json!("99.99"))), dec!(99.99));
    }

    #[test]
    fn test_total_price_floored_at_zero() {
        assert_eq!(coerce_total_price(Some(&json!(-20))), dec!(0));
        assert_eq!(coerce_total_price(Some(&json!(0))), dec!(0));
    }

    #[test]
    fn test_total_price_non_numeric_defaults_to_zero() {
        assert_eq!(coerce_total_price(None), dec!(0));
        assert_eq!(coerce_total_price(Some(&json!("free"))), dec!(0));
        assert_eq!(coerce_total_price(Some(&json!(null))), dec!(0));
    }

    // ==================== reference code tests ====================

    #[test]
    fn test_reference_code_shape() {
        for _ in 0..100 {
            let code = generate_reference_code();
            let suffix = code.strip_prefix("GH-").expect("missing prefix");
            assert_eq!(suffix.len(), REFERENCE_LEN);
            for c in suffix.bytes() {
                assert!(
                    REFERENCE_CHARSET.contains(&c),
                    "unexpected character {:?} in {}",
                    c as char,
                    code
                );
            }
        }
    }

    #[test]
    fn test_reference_code_excludes_confusing_characters() {
        for _ in 0..100 {
            let code = generate_reference_code();
            assert!(!code[3..].contains(['I', '1', 'O', '0']));
        }
    }
}
