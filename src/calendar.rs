//! The contract every calendar variant implements.
//!
//! Variants are zero-sized marker types. All of their rules live in
//! associated constants and functions, so a `Date<C>` carries no per-date
//! calendar state and dates of different calendars are different types.

use crate::format::{FormatTokens, NO_VALUE};
use crate::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;

/// Identifies which calendar a variant implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum CalendarKind {
    #[display(fmt = "International Fixed Calendar")]
    Ifc,
    #[display(fmt = "Positivist Calendar")]
    Positivist,
    #[display(fmt = "Seasonal Calendar")]
    Seasonal,
}

/// A day that stands outside the weekly cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Intercalary {
    #[display(fmt = "Year Day")]
    YearDay,
    #[display(fmt = "Leap Day")]
    LeapDay,
    #[display(fmt = "Mid-Season Day")]
    MidSeasonDay,
    #[display(fmt = "Festival of the Dead")]
    FestivalOfTheDead,
    #[display(fmt = "Festival of Holy Women")]
    FestivalOfHolyWomen,
}

impl Intercalary {
    /// Three-letter label used in place of a month abbreviation.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::YearDay => "YrD",
            Self::LeapDay => "LpD",
            Self::MidSeasonDay => "MsD",
            Self::FestivalOfTheDead => "FsD",
            Self::FestivalOfHolyWomen => "FsW",
        }
    }
}

/// Position of a day in its calendar's week.
///
/// Intercalary days have no weekday at all; they are a separate variant so
/// they can never be mistaken for a weekday index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Zero-based index into the calendar's weekday names.
    Ordinary(u8),
    Intercalary(Intercalary),
}

impl Weekday {
    /// The weekday index, or `None` for an intercalary day.
    pub const fn index(self) -> Option<u8> {
        match self {
            Self::Ordinary(index) => Some(index),
            Self::Intercalary(_) => None,
        }
    }

    pub const fn is_intercalary(self) -> bool {
        matches!(self, Self::Intercalary(_))
    }
}

/// Where a day sits inside its year, as seen by a calendar's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPosition {
    pub leap:        bool,
    pub period:      u8,
    pub day:         u8,
    /// Zero-based day of the calendar year.
    pub day_of_year: u16,
}

/// Rule set of one calendar: period layout, names, week structure, and
/// alignment of its year with the Gregorian ordinal count.
pub trait Calendar:
    Copy + Default + Debug + Eq + Ord + Hash + Send + Sync + 'static
{
    const KIND: CalendarKind;

    /// What a period is called in messages: "month" or "season".
    const PERIOD_NAME: &'static str;
    /// Number of periods in a year.
    const PERIODS: u8;
    const PERIOD_NAMES: &'static [&'static str];
    const PERIOD_ABBREVS: &'static [&'static str];

    const DAYS_IN_WEEK: u8;
    const WEEKDAY_NAMES: &'static [&'static str];
    const WEEKDAY_ABBREVS: &'static [&'static str];

    /// Intercalary days in the order of their legacy weekday numbers,
    /// which continue after the last ordinary weekday index.
    const INTERCALARY_DAYS: &'static [Intercalary];

    /// Zero-padding width of the period number when formatted.
    const PERIOD_NUMBER_WIDTH: usize = 2;

    /// Days by which this calendar's year starts before January 1.
    const YEAR_START_SHIFT: i32 = 0;

    fn days_in_period(leap: bool, period: u8) -> u16;

    fn days_before_period(leap: bool, period: u8) -> u16;

    /// Maps a zero-based day of year to its period and zero-based offset.
    fn locate(leap: bool, day_of_year: u16) -> (u8, u16);

    /// Smallest and largest valid day number of a period.
    fn day_bounds(leap: bool, period: u8) -> (u8, u8) {
        (1, Self::days_in_period(leap, period) as u8)
    }

    /// Day number stored for a zero-based offset inside a period.
    fn day_from_offset(_leap: bool, _period: u8, offset: u16) -> u8 {
        offset as u8 + 1
    }

    /// Zero-based offset inside a period of a stored day number.
    fn offset_of_day(_leap: bool, _period: u8, day: u8) -> u16 {
        u16::from(day) - 1
    }

    fn intercalary(position: DayPosition) -> Option<Intercalary>;

    fn weekday(position: DayPosition) -> Weekday;

    fn week_of_year(position: DayPosition) -> u8;

    /// Legacy numeric weekday: the index for ordinary days, and
    /// `DAYS_IN_WEEK + n` for the n-th entry of `INTERCALARY_DAYS`.
    fn weekday_number(weekday: Weekday) -> u8 {
        match weekday {
            Weekday::Ordinary(index) => index,
            Weekday::Intercalary(day) => {
                let slot = Self::INTERCALARY_DAYS
                    .iter()
                    .position(|&known| known == day)
                    .unwrap_or_default();
                Self::DAYS_IN_WEEK + slot as u8
            },
        }
    }

    /// Rewrites the period and day tokens of an intercalary day.
    ///
    /// By default the day belongs to no period: its label replaces the
    /// period name, abbreviation, and number, and the day number is blank.
    fn render_intercalary(day: Intercalary, tokens: &mut FormatTokens) {
        tokens.day = NO_VALUE.to_owned();
        tokens.period_name = day.to_string();
        tokens.period_abbrev = day.abbrev().to_owned();
        tokens.period_number = day.abbrev().to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intercalary_labels() {
        assert_eq!(Intercalary::YearDay.to_string(), "Year Day");
        assert_eq!(Intercalary::LeapDay.to_string(), "Leap Day");
        assert_eq!(Intercalary::FestivalOfTheDead.to_string(), "Festival of the Dead");
        assert_eq!(
            Intercalary::FestivalOfHolyWomen.to_string(),
            "Festival of Holy Women"
        );
        assert_eq!(Intercalary::FestivalOfHolyWomen.abbrev(), "FsW");
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(Weekday::Ordinary(3).index(), Some(3));
        assert_eq!(Weekday::Intercalary(Intercalary::LeapDay).index(), None);
        assert!(Weekday::Intercalary(Intercalary::YearDay).is_intercalary());
        assert!(!Weekday::Ordinary(0).is_intercalary());
    }

    #[test]
    fn test_calendar_kind_display() {
        assert_eq!(CalendarKind::Ifc.to_string(), "International Fixed Calendar");
        assert_eq!(CalendarKind::Seasonal.to_string(), "Seasonal Calendar");
    }
}
