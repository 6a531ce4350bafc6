//! `hh:mm:ss` parsing

use chrono::NaiveTime;
use thiserror::Error;

/// Timestamp parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The input is not a valid `hh:mm:ss` time
    #[error("Timestamp must be \"hh:mm:ss\", got {input:?}: {reason}")]
    InvalidFormat {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

impl TimestampError {
    fn invalid(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat { input: input.to_string(), reason: reason.into() }
    }
}

/// Whether the components form a valid time of day (hours 0-23, minutes and seconds 0-59)
pub fn is_valid_time(hours: u32, minutes: u32, seconds: u32) -> bool {
    hours <= 23 && minutes < 60 && seconds < 60
}

/// Create a time of day from a string in the form `hh:mm:ss`
///
/// Components need not be zero padded. Each one may carry surrounding whitespace and a
/// sign, so `" 9:+23:15"` and `"-0:00:00"` are accepted; the value must still be in range.
///
/// ```
/// let t = kata::create_time_from_timestamp("9:23:15").unwrap();
/// assert_eq!(t.to_string(), "09:23:15");
/// ```
pub fn create_time_from_timestamp(timestamp: &str) -> Result<NaiveTime, TimestampError> {
    let parts: Vec<&str> = timestamp.split(':').collect();
    let &[hours, minutes, seconds] = parts.as_slice() else {
        return Err(TimestampError::invalid(
            timestamp,
            format!("expected 3 components, found {}", parts.len()),
        ));
    };

    let parse = |field: &str, value: &str| -> Result<i64, TimestampError> {
        value
            .trim()
            .parse()
            .map_err(|_| TimestampError::invalid(timestamp, format!("{} {:?} is not a number", field, value)))
    };
    let in_range = |value: i64| u32::try_from(value).ok();

    let (hours, minutes, seconds) = match (
        in_range(parse("hours", hours)?),
        in_range(parse("minutes", minutes)?),
        in_range(parse("seconds", seconds)?),
    ) {
        (Some(h), Some(m), Some(s)) if is_valid_time(h, m, s) => (h, m, s),
        _ => return Err(TimestampError::invalid(timestamp, "component out of range")),
    };

    NaiveTime::from_hms_opt(hours, minutes, seconds)
        .ok_or_else(|| TimestampError::invalid(timestamp, "component out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(input: &str) {
        let result = create_time_from_timestamp(input);
        assert!(
            matches!(result, Err(TimestampError::InvalidFormat { .. })),
            "{input:?} gave {result:?}"
        );
    }

    #[test]
    fn test_unpadded_hours() {
        let time = create_time_from_timestamp("9:23:15").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(9, 23, 15).unwrap());
        assert_eq!(time.to_string(), "09:23:15");
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(
            create_time_from_timestamp("00:00:00").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            create_time_from_timestamp("23:59:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
    }

    #[test]
    fn test_hour_out_of_range() {
        assert_invalid("24:00:00");
    }

    #[test]
    fn test_minute_out_of_range() {
        assert_invalid("12:60:00");
    }

    #[test]
    fn test_second_out_of_range() {
        assert_invalid("12:00:60");
    }

    #[test]
    fn test_wrong_component_count() {
        assert_invalid("12:30");
        assert_invalid("12:30:00:00");
        assert_invalid("");
    }

    #[test]
    fn test_non_numeric_components() {
        assert_invalid("ab:cd:ef");
        assert_invalid("12::00");
        assert_invalid("12:3 0:00");
        assert_invalid("12:+-30:00");
        assert_invalid("99999999999999999999:00:00");
    }

    #[test]
    fn test_whitespace_and_signs_accepted() {
        assert_eq!(
            create_time_from_timestamp("12: 30:00").unwrap(),
            NaiveTime::from_hms_opt(12, 30, 0).unwrap()
        );
        assert_eq!(
            create_time_from_timestamp("+9:23:15").unwrap(),
            NaiveTime::from_hms_opt(9, 23, 15).unwrap()
        );
        assert_eq!(
            create_time_from_timestamp("-0:00:00").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            create_time_from_timestamp(" 7 :05\t:09 ").unwrap(),
            NaiveTime::from_hms_opt(7, 5, 9).unwrap()
        );
    }

    #[test]
    fn test_negative_component_out_of_range() {
        let err = create_time_from_timestamp("-1:00:00").unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }

    #[test]
    fn test_error_names_the_input() {
        let err = create_time_from_timestamp("24:00:00").unwrap_err();
        assert!(err.to_string().contains("24:00:00"));
    }

    #[test]
    fn test_is_valid_time() {
        assert!(is_valid_time(23, 59, 59));
        assert!(!is_valid_time(24, 0, 0));
        assert!(!is_valid_time(0, 60, 0));
    }
}
