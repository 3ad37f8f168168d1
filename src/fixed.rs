//! Shared engine for calendars of thirteen 28-day months.
//!
//! Such a calendar only differs in where it puts the days that do not fit
//! the 13 x 28 grid. An [`IntercalaryRule`] names the months receiving them;
//! month lengths, lookup tables, and weekday arithmetic all follow from it.

use crate::calendar::{DayPosition, Intercalary, Weekday};
use crate::period::PeriodTable;

/// Months in a year.
pub const MONTHS: u8 = 13;
/// Days in every month before intercalary days are added.
pub const DAYS_IN_MONTH: u16 = 28;
/// Days in a week.
pub const DAYS_IN_WEEK: u8 = 7;

/// Placement of the days outside the 13 x 28 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntercalaryRule {
    /// Month whose 29th day is added every year.
    pub year_end_month: u8,
    pub year_end:       Intercalary,
    /// Month whose last day is added in leap years.
    pub leap_month:     u8,
    pub leap:           Intercalary,
}

/// A thirteen-month layout built from its intercalary rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThirteenMonths {
    rule:  IntercalaryRule,
    table: PeriodTable<13>,
}

impl ThirteenMonths {
    pub const fn new(rule: IntercalaryRule) -> Self {
        let mut common = [DAYS_IN_MONTH; MONTHS as usize];
        common[rule.year_end_month as usize - 1] += 1;
        let mut leap = common;
        leap[rule.leap_month as usize - 1] += 1;
        Self {
            rule,
            table: PeriodTable::new(common, leap),
        }
    }

    pub const fn table(&self) -> &PeriodTable<13> {
        &self.table
    }

    /// Zero-based days of year of the intercalary days, in year order.
    fn intercalary_days_of_year(&self, leap: bool) -> [Option<u16>; 2] {
        let year_end =
            self.table.days_before_period(leap, self.rule.year_end_month) + DAYS_IN_MONTH;
        let leap_day = leap.then(|| {
            self.table.days_before_period(true, self.rule.leap_month)
                + self.table.days_in_period(true, self.rule.leap_month)
                - 1
        });
        [Some(year_end), leap_day]
    }

    /// Number of intercalary days strictly before a day of year.
    fn intercalary_before(&self, leap: bool, day_of_year: u16) -> u16 {
        self.intercalary_days_of_year(leap)
            .into_iter()
            .flatten()
            .filter(|&doy| doy < day_of_year)
            .count() as u16
    }

    /// Ordinary days in the year before this one.
    fn counted_days(&self, position: DayPosition) -> u16 {
        position.day_of_year - self.intercalary_before(position.leap, position.day_of_year)
    }

    pub fn intercalary(&self, position: DayPosition) -> Option<Intercalary> {
        let DayPosition {
            leap, period, day, ..
        } = position;
        if period == self.rule.year_end_month && u16::from(day) == DAYS_IN_MONTH + 1 {
            return Some(self.rule.year_end);
        }
        if leap
            && period == self.rule.leap_month
            && u16::from(day) == self.table.days_in_period(true, period)
        {
            return Some(self.rule.leap);
        }
        None
    }

    /// Ordinary days count through the week from the first day of the year.
    /// Days after a leap day fall one weekday further along.
    pub fn weekday(&self, position: DayPosition) -> Weekday {
        if let Some(day) = self.intercalary(position) {
            return Weekday::Intercalary(day);
        }
        let [_, leap_day] = self.intercalary_days_of_year(position.leap);
        let shift = u16::from(leap_day.is_some_and(|leap_day| position.day_of_year > leap_day));
        Weekday::Ordinary(((position.day_of_year + shift) % u16::from(DAYS_IN_WEEK)) as u8)
    }

    pub fn week_of_year(&self, position: DayPosition) -> u8 {
        let counted = self.counted_days(position);
        (counted / u16::from(DAYS_IN_WEEK)) as u8
    }
}
