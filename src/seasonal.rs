//! The Seasonal calendar.
//!
//! Five seasons of 73 days. Each season is two 36-day months around a
//! mid-season day (day 37), and each month is four 9-day weeks named after
//! the planets. The year begins 11 days before the Gregorian January 1, so
//! the leap day falls on the old February 29, between Winter 70 and 71; it is
//! stored as Winter 0.

use crate::calendar::{Calendar, CalendarKind, DayPosition, Intercalary, Weekday};
use crate::date::Date;
use crate::datetime::Datetime;
use crate::format::FormatTokens;
use crate::period::PeriodTable;

/// Seasons in a year.
pub const SEASONS: u8 = 5;
/// Days in a season, leap day excluded.
pub const DAYS_IN_SEASON: u16 = 73;
/// Day number of the day between a season's two months.
pub const MIDSEASON_DAY: u8 = 37;
/// Days in a week.
pub const DAYS_IN_WEEK: u8 = 9;
/// Days the seasonal year starts before January 1.
pub const YEAR_START_SHIFT: i32 = 11;

/// Season holding the leap day.
const LEAP_SEASON: u8 = 1;
/// Stored day number of the leap day.
const LEAP_DAY: u8 = 0;
/// Zero-based offset of the leap day inside its season.
const LEAP_DAY_OFFSET: u16 = 70;
/// Week of the season credited with the leap day.
const LEAP_DAY_WEEK: u8 = 7;
/// Week of the season credited with the mid-season day.
const MIDSEASON_WEEK: u8 = 3;

const TABLE: PeriodTable<5> = PeriodTable::new(
    [DAYS_IN_SEASON; SEASONS as usize],
    [
        DAYS_IN_SEASON + 1,
        DAYS_IN_SEASON,
        DAYS_IN_SEASON,
        DAYS_IN_SEASON,
        DAYS_IN_SEASON,
    ],
);

/// Marker type for the Seasonal calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seasonal;

pub type SeasonalDate = Date<Seasonal>;
pub type SeasonalDatetime = Datetime<Seasonal>;

const fn holds_leap_day(leap: bool, season: u8) -> bool {
    leap && season == LEAP_SEASON
}

impl Calendar for Seasonal {
    const KIND: CalendarKind = CalendarKind::Seasonal;

    const PERIOD_NAME: &'static str = "season";
    const PERIODS: u8 = SEASONS;
    const PERIOD_NAMES: &'static [&'static str] = &["Winter", "Spring", "Summer", "Autumn", "Fall"];
    const PERIOD_ABBREVS: &'static [&'static str] = &["Win", "Spr", "Sum", "Aut", "Fal"];

    const DAYS_IN_WEEK: u8 = DAYS_IN_WEEK;
    const WEEKDAY_NAMES: &'static [&'static str] = &[
        "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
    ];
    const WEEKDAY_ABBREVS: &'static [&'static str] =
        &["Mer", "Ven", "Ear", "Mar", "Jup", "Sat", "Ura", "Nep", "Plu"];

    const INTERCALARY_DAYS: &'static [Intercalary] =
        &[Intercalary::MidSeasonDay, Intercalary::LeapDay];

    const PERIOD_NUMBER_WIDTH: usize = 1;
    const YEAR_START_SHIFT: i32 = YEAR_START_SHIFT;

    fn days_in_period(leap: bool, period: u8) -> u16 {
        TABLE.days_in_period(leap, period)
    }

    fn days_before_period(leap: bool, period: u8) -> u16 {
        TABLE.days_before_period(leap, period)
    }

    fn locate(leap: bool, day_of_year: u16) -> (u8, u16) {
        TABLE.locate(leap, day_of_year)
    }

    fn day_bounds(leap: bool, period: u8) -> (u8, u8) {
        let min = if holds_leap_day(leap, period) { LEAP_DAY } else { 1 };
        (min, DAYS_IN_SEASON as u8)
    }

    fn day_from_offset(leap: bool, period: u8, offset: u16) -> u8 {
        if holds_leap_day(leap, period) {
            if offset == LEAP_DAY_OFFSET {
                return LEAP_DAY;
            }
            if offset > LEAP_DAY_OFFSET {
                return offset as u8;
            }
        }
        offset as u8 + 1
    }

    fn offset_of_day(leap: bool, period: u8, day: u8) -> u16 {
        if holds_leap_day(leap, period) {
            if day == LEAP_DAY {
                return LEAP_DAY_OFFSET;
            }
            if u16::from(day) > LEAP_DAY_OFFSET {
                return u16::from(day);
            }
        }
        u16::from(day) - 1
    }

    fn intercalary(position: DayPosition) -> Option<Intercalary> {
        match position.day {
            LEAP_DAY => Some(Intercalary::LeapDay),
            MIDSEASON_DAY => Some(Intercalary::MidSeasonDay),
            _ => None,
        }
    }

    fn weekday(position: DayPosition) -> Weekday {
        if let Some(day) = Self::intercalary(position) {
            return Weekday::Intercalary(day);
        }
        Weekday::Ordinary(days_into_month(position.day) % DAYS_IN_WEEK)
    }

    /// Weeks are counted within the season (0..=7), as every season restarts
    /// its week numbering. The leap day counts toward the week it falls in and
    /// the mid-season day toward the week before it.
    fn week_of_year(position: DayPosition) -> u8 {
        match position.day {
            LEAP_DAY => LEAP_DAY_WEEK,
            MIDSEASON_DAY => MIDSEASON_WEEK,
            day => days_into_month(day) / DAYS_IN_WEEK,
        }
    }

    fn render_intercalary(day: Intercalary, tokens: &mut FormatTokens) {
        if day == Intercalary::LeapDay {
            tokens.day = "Lp".to_owned();
        }
    }
}

/// Zero-based count of ordinary days before `day` in its season.
const fn days_into_month(day: u8) -> u8 {
    if day > MIDSEASON_DAY { day - 2 } else { day - 1 }
}

impl Date<Seasonal> {
    /// Returns the season (1..=5).
    pub const fn season(&self) -> u8 {
        self.period()
    }
}
