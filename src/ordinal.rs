//! Proleptic Gregorian day counting shared by every calendar.
//!
//! Ordinal 1 is January 1 of year 1. Every calendar in this crate converts
//! through this count, so the arithmetic here must be exact at every 4-, 100-
//! and 400-year seam.

use crate::consts::{DAYS_IN_100_YEARS, DAYS_IN_400_YEARS, DAYS_IN_4_YEARS, DAYS_IN_YEAR};

/// A day on the proleptic Gregorian timeline, 1 = January 1 of year 1.
pub type Ordinal = i32;

/// Number of days strictly before January 1 of `year`.
pub const fn days_before_year(year: i32) -> i32 {
    let y = year - 1;
    y * DAYS_IN_YEAR + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Splits an ordinal into its year and zero-based day of that year.
///
/// The 4-year and 400-year remainders can land one day past a 365-day slot;
/// that day is the leap day closing the previous year.
pub const fn ordinal_to_year_and_day_of_year(ordinal: Ordinal) -> (i32, u16) {
    let n = ordinal - 1;
    let n400 = n.div_euclid(DAYS_IN_400_YEARS);
    let n = n.rem_euclid(DAYS_IN_400_YEARS);
    let n100 = n / DAYS_IN_100_YEARS;
    let n = n % DAYS_IN_100_YEARS;
    let n4 = n / DAYS_IN_4_YEARS;
    let n = n % DAYS_IN_4_YEARS;
    let n1 = n / DAYS_IN_YEAR;
    let day_of_year = n % DAYS_IN_YEAR;

    let year = n400 * 400 + n100 * 100 + n4 * 4 + n1 + 1;
    if n1 == 4 || n100 == 4 {
        return (year - 1, DAYS_IN_YEAR as u16);
    }
    (year, day_of_year as u16)
}

/// Inverse of [`ordinal_to_year_and_day_of_year`].
pub const fn year_and_day_of_year_to_ordinal(year: i32, day_of_year: u16) -> Ordinal {
    days_before_year(year) + day_of_year as i32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_ORDINAL;
    use crate::types::is_leap_year;

    #[test]
    fn test_days_before_year_cycle_lengths() {
        assert_eq!(days_before_year(1), 0);
        assert_eq!(days_before_year(2), 365);
        assert_eq!(days_before_year(5), DAYS_IN_4_YEARS);
        assert_eq!(days_before_year(101), DAYS_IN_100_YEARS);
        assert_eq!(days_before_year(401), DAYS_IN_400_YEARS);
        assert_eq!(days_before_year(10000), MAX_ORDINAL);
    }

    #[test]
    fn test_first_and_last_ordinal() {
        assert_eq!(ordinal_to_year_and_day_of_year(1), (1, 0));
        assert_eq!(ordinal_to_year_and_day_of_year(MAX_ORDINAL), (9999, 364));
        assert_eq!(ordinal_to_year_and_day_of_year(MAX_ORDINAL + 1), (10000, 0));
    }

    #[test]
    fn test_four_year_seam() {
        // Year 4 is the first leap year; its last day is day index 365.
        let last_of_4 = days_before_year(5);
        assert_eq!(ordinal_to_year_and_day_of_year(last_of_4), (4, 365));
        assert_eq!(ordinal_to_year_and_day_of_year(last_of_4 - 1), (4, 364));
        assert_eq!(ordinal_to_year_and_day_of_year(last_of_4 + 1), (5, 0));
    }

    #[test]
    fn test_century_seams() {
        // 1900 is not leap, 2000 is.
        let end_1900 = days_before_year(1901);
        assert_eq!(ordinal_to_year_and_day_of_year(end_1900), (1900, 364));
        assert_eq!(ordinal_to_year_and_day_of_year(end_1900 + 1), (1901, 0));

        let end_2000 = days_before_year(2001);
        assert_eq!(ordinal_to_year_and_day_of_year(end_2000), (2000, 365));
        assert_eq!(ordinal_to_year_and_day_of_year(end_2000 + 1), (2001, 0));

        let end_100 = days_before_year(101);
        assert_eq!(ordinal_to_year_and_day_of_year(end_100), (100, 364));
    }

    #[test]
    fn test_four_hundred_year_seams() {
        for year in [400, 800, 1200, 1600, 2000, 2400, 8000, 9600] {
            let end = days_before_year(year + 1);
            assert_eq!(ordinal_to_year_and_day_of_year(end), (year, 365));
            assert_eq!(ordinal_to_year_and_day_of_year(end - 1), (year, 364));
            assert_eq!(ordinal_to_year_and_day_of_year(end + 1), (year + 1, 0));
        }
    }

    #[test]
    fn test_every_year_start_and_end() {
        for year in 1..=9999 {
            let start = days_before_year(year) + 1;
            assert_eq!(ordinal_to_year_and_day_of_year(start), (year, 0));
            let last = if is_leap_year(year as u16) { 365 } else { 364 };
            assert_eq!(
                ordinal_to_year_and_day_of_year(days_before_year(year + 1)),
                (year, last),
                "last day of {year}"
            );
        }
    }

    #[test]
    fn test_round_trip_sample() {
        for ordinal in (1..=MAX_ORDINAL).step_by(97) {
            let (year, doy) = ordinal_to_year_and_day_of_year(ordinal);
            assert_eq!(year_and_day_of_year_to_ordinal(year, doy), ordinal);
        }
    }

    #[test]
    fn test_ordinals_before_year_one() {
        // Proleptic year 0 is a leap year in the Gregorian count.
        assert_eq!(ordinal_to_year_and_day_of_year(0), (0, 365));
        assert_eq!(ordinal_to_year_and_day_of_year(-10), (0, 355));
    }
}
