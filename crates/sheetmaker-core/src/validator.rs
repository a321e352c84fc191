//! Cell validation against a column's declared type
//!
//! Validation never fails with an error: a value is either normalized or
//! rejected, and the caller decides to re-prompt.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::types::ColumnType;

/// Exact DD/MM/YYYY shape; calendar validity is checked separately
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid regex"));

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Why a raw value was not accepted for a column type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Type the value was checked against
    pub column_type: ColumnType,
    /// Human-readable reason
    pub reason: &'static str,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid {} value: {}", self.column_type, self.reason)
    }
}

/// Validate a raw value and return its normalized form
pub fn validate(raw: &str, column_type: ColumnType) -> Result<String, Rejection> {
    let reject = |reason| Rejection {
        column_type,
        reason,
    };

    match column_type {
        ColumnType::Text => {
            if raw.is_empty() {
                Err(reject("no value was typed"))
            } else if is_numeric(raw) {
                // Purely numeric strings are never text, even ZIP codes.
                Err(reject("purely numeric values are not accepted as text"))
            } else {
                Ok(raw.to_string())
            }
        }
        ColumnType::Number => {
            if is_numeric(raw) {
                Ok(raw.to_string())
            } else {
                Err(reject("only digits are allowed (no sign, decimal point or separators)"))
            }
        }
        ColumnType::Date => {
            if DATE_SHAPE.is_match(raw) && NaiveDate::parse_from_str(raw, DATE_FORMAT).is_ok() {
                Ok(raw.to_string())
            } else {
                Err(reject("expected a real date written as DD/MM/YYYY"))
            }
        }
        ColumnType::Currency => match raw.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => Ok(format!("{:.2}", amount)),
            _ => Err(reject("expected a decimal amount such as 19.90")),
        },
    }
}

/// True when the value is non-empty and made only of numeric characters
pub fn is_numeric(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_numbers_not_text() {
        for s in ["0", "7", "30", "12345", "000123", "98765432109876543210"] {
            assert_eq!(validate(s, ColumnType::Number), Ok(s.to_string()));
            assert!(validate(s, ColumnType::Text).is_err(), "{s} accepted as text");
        }
    }

    #[test]
    fn test_number_rejects_sign_decimal_and_separators() {
        for s in ["-1", "+1", "1.5", "1,000", "1 000", "", "abc", "12a"] {
            assert!(validate(s, ColumnType::Number).is_err(), "{s} accepted as number");
        }
    }

    #[test]
    fn test_non_numeric_text_is_kept_verbatim() {
        for s in ["Alice", "thirty", "12a", "-5", "3.14", " 42 ", "   ", "São Paulo"] {
            assert_eq!(validate(s, ColumnType::Text), Ok(s.to_string()));
        }
    }

    #[test]
    fn test_text_rejects_empty() {
        let rejection = validate("", ColumnType::Text).unwrap_err();
        assert_eq!(rejection.column_type, ColumnType::Text);
    }

    #[test]
    fn test_date_accepts_real_calendar_dates() {
        for s in ["31/12/2024", "01/01/2000", "29/02/2024"] {
            assert_eq!(validate(s, ColumnType::Date), Ok(s.to_string()));
        }
    }

    #[test]
    fn test_date_rejects_other_shapes_and_impossible_dates() {
        for s in [
            "2024-12-31",
            "12/31/2024",
            "1/12/2024",
            "31/1/2024",
            "31/12/24",
            "31/12/2024 ",
            "29/02/2023",
            "32/01/2024",
            "00/01/2024",
            "",
        ] {
            assert!(validate(s, ColumnType::Date).is_err(), "{s} accepted as date");
        }
    }

    #[test]
    fn test_currency_normalizes_to_two_decimals() {
        assert_eq!(validate("3", ColumnType::Currency), Ok("3.00".to_string()));
        assert_eq!(validate("3.1", ColumnType::Currency), Ok("3.10".to_string()));
        assert_eq!(validate("19.9", ColumnType::Currency), Ok("19.90".to_string()));
        assert_eq!(validate("-4.5", ColumnType::Currency), Ok("-4.50".to_string()));
        assert_eq!(validate(" 7 ", ColumnType::Currency), Ok("7.00".to_string()));
        assert_eq!(validate("1e3", ColumnType::Currency), Ok("1000.00".to_string()));
    }

    #[test]
    fn test_currency_rejects_non_numbers() {
        for s in ["abc", "twenty", "", "1,50", "inf", "NaN", "$3"] {
            assert!(validate(s, ColumnType::Currency).is_err(), "{s} accepted as currency");
        }
    }

    #[test]
    fn test_rejection_display() {
        let rejection = validate("twenty", ColumnType::Currency).unwrap_err();
        assert!(rejection.to_string().starts_with("not a valid currency value"));
    }
}
