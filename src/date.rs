//! Structured dates of any calendar.

use crate::calendar::{Calendar, DayPosition, Intercalary, Weekday};
use crate::consts::{DATE_SEPARATOR, ISO_DATE_LEN};
use crate::format::{self, FormatTokens};
use crate::ordinal::{Ordinal, days_before_year, ordinal_to_year_and_day_of_year};
use crate::types::Year;
use crate::DateError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Sub;
use std::str::FromStr;
use tracing::debug;

/// A validated (year, period, day) triple in calendar `C`.
///
/// Ordering is lexicographic on (year, period, day). That is chronological
/// except for the Seasonal leap day, stored as day 0 of Winter, which sorts
/// before Winter 1; compare [`Date::to_ordinal`] for strict time order.
/// Dates of different calendars are different types and cannot be compared
/// without [`Date::convert`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date<C: Calendar> {
    year:     Year,
    period:   u8,
    day:      u8,
    calendar: PhantomData<C>,
}

impl<C: Calendar> Date<C> {
    /// Creates a date, checking the period and day against the calendar's
    /// layout for that year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidPeriod` or
    /// `DateError::InvalidDay` naming the first field out of range.
    pub fn new(year: u16, period: u8, day: u8) -> Result<Self, DateError> {
        Self::from_parts(Year::new(year)?, period, day)
    }

    fn from_parts(year: Year, period: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=C::PERIODS).contains(&period) {
            return Err(DateError::InvalidPeriod {
                name:  C::PERIOD_NAME,
                value: period,
                max:   C::PERIODS,
            });
        }
        let (min, max) = C::day_bounds(year.is_leap(), period);
        if !(min..=max).contains(&day) {
            return Err(DateError::InvalidDay {
                year: year.get(),
                period,
                day,
                min,
                max,
            });
        }
        Ok(Self {
            year,
            period,
            day,
            calendar: PhantomData,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Month or season number, starting at 1.
    #[inline]
    pub const fn period(&self) -> u8 {
        self.period
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// First day of year 1.
    pub fn min() -> Self {
        let (day, _) = C::day_bounds(Year::MIN.is_leap(), 1);
        Self {
            year: Year::MIN,
            period: 1,
            day,
            calendar: PhantomData,
        }
    }

    /// Last day of year 9999.
    pub fn max() -> Self {
        let (_, day) = C::day_bounds(Year::MAX.is_leap(), C::PERIODS);
        Self {
            year: Year::MAX,
            period: C::PERIODS,
            day,
            calendar: PhantomData,
        }
    }

    /// Inclusive range of ordinals this calendar can represent.
    pub fn ordinal_range() -> (Ordinal, Ordinal) {
        (Self::min().to_ordinal(), Self::max().to_ordinal())
    }

    /// Builds the date falling on `ordinal`.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the ordinal lies outside
    /// [`Date::ordinal_range`].
    pub fn from_ordinal(ordinal: Ordinal) -> Result<Self, DateError> {
        let (min, max) = Self::ordinal_range();
        if !(min..=max).contains(&ordinal) {
            debug!(calendar = %C::KIND, ordinal, min, max, "ordinal out of range");
            return Err(DateError::OrdinalOutOfRange {
                ordinal: i64::from(ordinal),
                min,
                max,
            });
        }
        let (year, day_of_year) = ordinal_to_year_and_day_of_year(ordinal + C::YEAR_START_SHIFT);
        let year = Year::try_from(year)?;
        let leap = year.is_leap();
        let (period, offset) = C::locate(leap, day_of_year);
        Self::from_parts(year, period, C::day_from_offset(leap, period, offset))
    }

    pub fn to_ordinal(&self) -> Ordinal {
        let position = self.position();
        days_before_year(i32::from(self.year())) + i32::from(position.day_of_year) + 1
            - C::YEAR_START_SHIFT
    }

    /// Where this date sits in its year.
    pub fn position(&self) -> DayPosition {
        let leap = self.is_leap_year();
        DayPosition {
            leap,
            period: self.period,
            day: self.day,
            day_of_year: C::days_before_period(leap, self.period)
                + C::offset_of_day(leap, self.period, self.day),
        }
    }

    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// The intercalary day this date is, if any.
    pub fn intercalary(&self) -> Option<Intercalary> {
        C::intercalary(self.position())
    }

    pub fn is_intercalary(&self) -> bool {
        self.intercalary().is_some()
    }

    pub fn weekday(&self) -> Weekday {
        C::weekday(self.position())
    }

    /// Numeric weekday, with intercalary days numbered after the last
    /// ordinary weekday (see [`Calendar::weekday_number`]).
    pub fn weekday_number(&self) -> u8 {
        C::weekday_number(self.weekday())
    }

    pub fn week_of_year(&self) -> u8 {
        C::week_of_year(self.position())
    }

    /// Day of the calendar year, starting at 1.
    pub fn day_of_year(&self) -> u16 {
        self.position().day_of_year + 1
    }

    /// Returns a copy with the given fields changed and revalidated.
    ///
    /// `None` keeps the current value; a zero is a value like any other.
    ///
    /// # Errors
    /// Returns the same errors as [`Date::new`].
    pub fn replace(
        &self,
        year: Option<u16>,
        period: Option<u8>,
        day: Option<u8>,
    ) -> Result<Self, DateError> {
        Self::new(
            year.unwrap_or_else(|| self.year()),
            period.unwrap_or(self.period),
            day.unwrap_or(self.day),
        )
    }

    /// Moves the date by a signed number of days.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if the result falls outside the
    /// calendar's range.
    pub fn checked_add_days(&self, days: i64) -> Result<Self, DateError> {
        let target = i64::from(self.to_ordinal())
            .checked_add(days)
            .ok_or(DateError::Overflow)?;
        let (min, max) = Self::ordinal_range();
        if target < i64::from(min) || target > i64::from(max) {
            return Err(DateError::Overflow);
        }
        let ordinal = Ordinal::try_from(target).map_err(|_| DateError::Overflow)?;
        Self::from_ordinal(ordinal)
    }

    /// # Errors
    /// Returns `DateError::Overflow` if the result falls outside the
    /// calendar's range.
    pub fn checked_sub_days(&self, days: i64) -> Result<Self, DateError> {
        self.checked_add_days(days.checked_neg().ok_or(DateError::Overflow)?)
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(&self, other: &Self) -> i64 {
        i64::from(self.to_ordinal()) - i64::from(other.to_ordinal())
    }

    /// The same day expressed in another calendar.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the day is outside the
    /// target calendar's range.
    pub fn convert<D: Calendar>(&self) -> Result<Date<D>, DateError> {
        Date::from_ordinal(self.to_ordinal())
    }

    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the Gregorian date lies
    /// outside this calendar's range.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, DateError> {
        Self::from_ordinal(date.num_days_from_ce())
    }

    /// The Gregorian date of the same day.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if chrono cannot represent the day.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        NaiveDate::from_num_days_from_ce_opt(self.to_ordinal()).ok_or(DateError::Overflow)
    }

    /// The local date of a POSIX timestamp, like [`Date::today`].
    ///
    /// # Errors
    /// Returns `DateError::TimestampOutOfRange` if chrono cannot represent
    /// the timestamp, or `DateError::OrdinalOutOfRange` if the day is outside
    /// this calendar's range.
    pub fn from_timestamp(timestamp: i64) -> Result<Self, DateError> {
        let instant = utc_from_timestamp(timestamp)?;
        Self::from_naive_date(instant.with_timezone(&chrono::Local).date_naive())
    }

    /// The UTC date of a POSIX timestamp.
    ///
    /// # Errors
    /// Same as [`Date::from_timestamp`].
    pub fn from_timestamp_utc(timestamp: i64) -> Result<Self, DateError> {
        Self::from_naive_date(utc_from_timestamp(timestamp)?.date_naive())
    }

    /// Today's date in the local timezone.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if today is outside this
    /// calendar's range.
    pub fn today() -> Result<Self, DateError> {
        Self::from_naive_date(chrono::Local::now().date_naive())
    }

    /// Rendered values for every supported format directive.
    pub fn tokens(&self) -> FormatTokens {
        FormatTokens::from_date(self)
    }

    /// Formats the date with `%` directives (see [`FormatTokens::get`]).
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedDirective` for a directive with no
    /// date token, or `DateError::InvalidFormat` for a trailing `%`.
    pub fn strftime(&self, fmt: &str) -> Result<String, DateError> {
        let tokens = self.tokens();
        format::render(fmt, |directive| tokens.get(directive).map(str::to_owned))
    }

    /// `YYYY-MM-DD` in this calendar's own numbering.
    pub fn isoformat(&self) -> String {
        self.to_string()
    }
}

impl<C: Calendar> Sub for Date<C> {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.days_since(&rhs)
    }
}

impl<C: Calendar> fmt::Debug for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Date")
            .field("calendar", &C::KIND)
            .field("year", &self.year())
            .field(C::PERIOD_NAME, &self.period)
            .field("day", &self.day)
            .finish()
    }
}

impl<C: Calendar> fmt::Display for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{sep}{:02}{sep}{:02}",
            self.year(),
            self.period,
            self.day,
            sep = DATE_SEPARATOR
        )
    }
}

impl<C: Calendar> FromStr for Date<C> {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        parse_iso_date(trimmed)
            .and_then(|(year, period, day)| Self::new(year, period, day))
            .inspect_err(|error| debug!(input = trimmed, %error, "failed to parse date"))
    }
}

/// Splits `YYYY-MM-DD` into its numeric fields without validating them.
pub(crate) fn utc_from_timestamp(
    timestamp: i64,
) -> Result<chrono::DateTime<chrono::Utc>, DateError> {
    chrono::DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
        debug!(timestamp, "timestamp out of range");
        DateError::TimestampOutOfRange(timestamp)
    })
}

pub(crate) fn parse_iso_date(s: &str) -> Result<(u16, u8, u8), DateError> {
    let bytes = s.as_bytes();
    if !s.is_ascii() || bytes.len() != ISO_DATE_LEN {
        return Err(DateError::InvalidFormat(format!(
            "expected YYYY-MM-DD, found {s:?}"
        )));
    }
    let separator = DATE_SEPARATOR as u8;
    if bytes[4] != separator || bytes[7] != separator {
        return Err(DateError::InvalidFormat(format!(
            "expected '{DATE_SEPARATOR}' at offsets 4 and 7 in {s:?}"
        )));
    }
    Ok((
        parse_digits(&s[0..4])?,
        parse_digits(&s[5..7])?,
        parse_digits(&s[8..10])?,
    ))
}

/// Parses a fixed-width, all-digit component. Signs are rejected.
fn parse_digits<T: FromStr>(part: &str) -> Result<T, DateError> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(part.to_owned()));
    }
    part.parse()
        .map_err(|_| DateError::InvalidFormat(part.to_owned()))
}

impl<C: Calendar> serde::Serialize for Date<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, C: Calendar> serde::Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
