/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Ordinal of the last day of `MAX_YEAR` in the proleptic Gregorian count
pub const MAX_ORDINAL: i32 = 3_652_059;

/// Days in a common (non-leap) year
pub const DAYS_IN_YEAR: i32 = 365;

/// Days in a 4-year cycle (one leap day)
pub const DAYS_IN_4_YEARS: i32 = 1_461;
/// Days in a 100-year cycle (24 leap days)
pub const DAYS_IN_100_YEARS: i32 = 36_524;
/// Days in a 400-year cycle (97 leap days)
pub const DAYS_IN_400_YEARS: i32 = 146_097;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Default separator between the date and time parts of a datetime
pub const DATETIME_SEPARATOR: char = 'T';

/// Length of an ISO date string `YYYY-MM-DD`
pub(crate) const ISO_DATE_LEN: usize = 10;
