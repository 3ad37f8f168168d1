//! Dates in the International Fixed, Positivist, and Seasonal calendars,
//! converted through the proleptic Gregorian day count.

mod calendar;
mod consts;
mod date;
mod datetime;
mod error;
mod fixed;
mod format;
mod ifc;
mod ordinal;
mod period;
mod positivist;
mod prelude;
mod seasonal;
mod types;

pub use calendar::{Calendar, CalendarKind, DayPosition, Intercalary, Weekday};
pub use consts::*;
pub use date::Date;
pub use datetime::{Datetime, DatetimeFields};
pub use error::DateError;
pub use fixed::{IntercalaryRule, ThirteenMonths};
pub use format::{FormatTokens, NO_VALUE};
pub use ifc::{Ifc, IfcDate, IfcDatetime};
pub use ordinal::{
    Ordinal, days_before_year, ordinal_to_year_and_day_of_year, year_and_day_of_year_to_ordinal,
};
pub use period::PeriodTable;
pub use positivist::{Positivist, PositivistDate, PositivistDatetime};
pub use seasonal::{Seasonal, SeasonalDate, SeasonalDatetime};
pub use types::{Year, is_leap_year};
