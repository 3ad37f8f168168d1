use crate::consts::{MAX_YEAR, MIN_YEAR};

/// Error type for every fallible date operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month or season number outside the calendar's period range.
    #[error("Invalid {name}: {value} (must be 1-{max})")]
    InvalidPeriod {
        name:  &'static str,
        value: u8,
        max:   u8,
    },

    /// Day outside the bounds of its (year, period).
    #[error("Invalid day {day} for {year:04}-{period:02} (must be {min}-{max})")]
    InvalidDay {
        year:   u16,
        period: u8,
        day:    u8,
        min:    u8,
        max:    u8,
    },

    /// Malformed ISO text or non-numeric component.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty input string.
    #[error("Empty date string")]
    EmptyInput,

    /// Ordinal outside the range a calendar can represent.
    #[error("Ordinal {ordinal} is out of range ({min}..={max})")]
    OrdinalOutOfRange { ordinal: i64, min: i32, max: i32 },

    /// Date arithmetic left the representable range.
    #[error("date value out of range")]
    Overflow,

    /// Malformed or out-of-range time-of-day or offset.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// POSIX timestamp the host clock cannot represent.
    #[error("Timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    /// `strftime` directive with no rendering for this value.
    #[error("Unsupported format directive: %{0}")]
    UnsupportedDirective(char),
}
