//! Shared utility functions for the bike dashboard crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format (HTML date inputs and CLI args)
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| DateError(format!("'{}' is not a YYYY-MM-DD date ({})", s, e)))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2011, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2011-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_other_formats() {
            assert!(parse_date("06/15/2011").is_err());
            assert!(parse_date("").is_err());
        }
    }
}

/// Numeric helpers
pub mod numbers {
    /// Round to `digits` decimal places, ties to even.
    pub fn round_to(value: f64, digits: i32) -> f64 {
        let factor = 10f64.powi(digits);
        (value * factor).round_ties_even() / factor
    }

    /// Format an optional value with two decimals, or "n/a".
    pub fn format_optional(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{:.2}", v),
            None => "n/a".to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_round_to_two_digits() {
            assert_eq!(round_to(15.0, 2), 15.0);
            assert_eq!(round_to(4504.348837, 2), 4504.35);
            assert_eq!(round_to(0.62704, 2), 0.63);
            assert_eq!(round_to(-0.126, 2), -0.13);
        }

        #[test]
        fn test_round_to_ties_to_even() {
            assert_eq!(round_to(2.125, 2), 2.12);
            assert_eq!(round_to(2.375, 2), 2.38);
            assert_eq!(round_to(0.5, 0), 0.0);
            assert_eq!(round_to(-2.125, 2), -2.12);
        }

        #[test]
        fn test_format_optional() {
            assert_eq!(format_optional(Some(15.0)), "15.00");
            assert_eq!(format_optional(None), "n/a");
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
