//! Positivist calendar, devised by Auguste Comte in 1849.
//!
//! Same 13 x 28 grid as the International Fixed Calendar, with months named
//! after historic figures and weeks starting on Monday. Both intercalary days
//! close the year: the Festival of the Dead (Bichat 29) every year and the
//! Festival of Holy Women (Bichat 30) in leap years.

use crate::calendar::{Calendar, CalendarKind, DayPosition, Intercalary, Weekday};
use crate::date::Date;
use crate::datetime::Datetime;
use crate::fixed::{DAYS_IN_WEEK, IntercalaryRule, MONTHS, ThirteenMonths};

const LAYOUT: ThirteenMonths = ThirteenMonths::new(IntercalaryRule {
    year_end_month: 13,
    year_end:       Intercalary::FestivalOfTheDead,
    leap_month:     13,
    leap:           Intercalary::FestivalOfHolyWomen,
});

/// Marker type for the Positivist calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positivist;

pub type PositivistDate = Date<Positivist>;
pub type PositivistDatetime = Datetime<Positivist>;

impl Calendar for Positivist {
    const KIND: CalendarKind = CalendarKind::Positivist;

    const PERIOD_NAME: &'static str = "month";
    const PERIODS: u8 = MONTHS;
    const PERIOD_NAMES: &'static [&'static str] = &[
        "Moses",
        "Homer",
        "Aristotle",
        "Archimedes",
        "Caesar",
        "Saint Paul",
        "Charlemagne",
        "Dante",
        "Gutenberg",
        "Shakespeare",
        "Descartes",
        "Frederic",
        "Bichat",
    ];
    const PERIOD_ABBREVS: &'static [&'static str] = &[
        "Mos", "Hom", "Ari", "Arc", "Csr", "Spl", "Chl", "Dan", "Gut", "Shk", "Des", "Fre", "Bic",
    ];

    const DAYS_IN_WEEK: u8 = DAYS_IN_WEEK;
    const WEEKDAY_NAMES: &'static [&'static str] = &[
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    const WEEKDAY_ABBREVS: &'static [&'static str] =
        &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    const INTERCALARY_DAYS: &'static [Intercalary] = &[
        Intercalary::FestivalOfTheDead,
        Intercalary::FestivalOfHolyWomen,
    ];

    fn days_in_period(leap: bool, period: u8) -> u16 {
        LAYOUT.table().days_in_period(leap, period)
    }

    fn days_before_period(leap: bool, period: u8) -> u16 {
        LAYOUT.table().days_before_period(leap, period)
    }

    fn locate(leap: bool, day_of_year: u16) -> (u8, u16) {
        LAYOUT.table().locate(leap, day_of_year)
    }

    fn intercalary(position: DayPosition) -> Option<Intercalary> {
        LAYOUT.intercalary(position)
    }

    fn weekday(position: DayPosition) -> Weekday {
        LAYOUT.weekday(position)
    }

    fn week_of_year(position: DayPosition) -> u8 {
        LAYOUT.week_of_year(position)
    }
}

impl Date<Positivist> {
    /// Returns the month (1..=13).
    pub const fn month(&self) -> u8 {
        self.period()
    }
}
