//! International Fixed Calendar.
//!
//! Thirteen months of 28 days; Sol sits between June and July. Leap Day is
//! stored as June 29 and Year Day as December 29. Neither has a weekday.
//! Every month starts on a Sunday, except that in leap years the days after
//! Leap Day fall one weekday later, so Sol through December start on Tuesday.

use crate::calendar::{Calendar, CalendarKind, DayPosition, Intercalary, Weekday};
use crate::date::Date;
use crate::datetime::Datetime;
use crate::fixed::{DAYS_IN_WEEK, IntercalaryRule, MONTHS, ThirteenMonths};

const LAYOUT: ThirteenMonths = ThirteenMonths::new(IntercalaryRule {
    year_end_month: 13,
    year_end:       Intercalary::YearDay,
    leap_month:     6,
    leap:           Intercalary::LeapDay,
});

/// Marker type for the International Fixed Calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ifc;

pub type IfcDate = Date<Ifc>;
pub type IfcDatetime = Datetime<Ifc>;

impl Calendar for Ifc {
    const KIND: CalendarKind = CalendarKind::Ifc;

    const PERIOD_NAME: &'static str = "month";
    const PERIODS: u8 = MONTHS;
    const PERIOD_NAMES: &'static [&'static str] = &[
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "Sol",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    const PERIOD_ABBREVS: &'static [&'static str] = &[
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Sol", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    const DAYS_IN_WEEK: u8 = DAYS_IN_WEEK;
    const WEEKDAY_NAMES: &'static [&'static str] = &[
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
    const WEEKDAY_ABBREVS: &'static [&'static str] =
        &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    const INTERCALARY_DAYS: &'static [Intercalary] = &[Intercalary::YearDay, Intercalary::LeapDay];

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

impl Date<Ifc> {
    /// Returns the month (1..=13).
    pub const fn month(&self) -> u8 {
        self.period()
    }
}
