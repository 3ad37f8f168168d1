//! A calendar date paired with a chrono time of day and optional offset.
//!
//! All time-of-day and offset arithmetic is chrono's. Absolute instants are
//! taken from the offset when there is one and from UTC otherwise.

use crate::calendar::Calendar;
use crate::consts::{DATETIME_SEPARATOR, ISO_DATE_LEN};
use crate::date::{Date, utc_from_timestamp};
use crate::format;
use crate::DateError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Date plus time of day, naive or with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Datetime<C: Calendar> {
    date:   Date<C>,
    time:   NaiveTime,
    offset: Option<FixedOffset>,
}

/// Fields to change in [`Datetime::replace`]; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatetimeFields {
    pub year:        Option<u16>,
    pub period:      Option<u8>,
    pub day:         Option<u8>,
    pub hour:        Option<u32>,
    pub minute:      Option<u32>,
    pub second:      Option<u32>,
    pub microsecond: Option<u32>,
    /// `Some(None)` drops the offset.
    pub offset:      Option<Option<FixedOffset>>,
}

fn time_of_day(
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
) -> Result<NaiveTime, DateError> {
    NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond).ok_or_else(|| {
        DateError::InvalidTime(format!(
            "{hour:02}:{minute:02}:{second:02}.{microsecond:06}"
        ))
    })
}

impl<C: Calendar> Datetime<C> {
    /// Naive datetime from its fields.
    ///
    /// # Errors
    /// Returns the date errors of [`Date::new`], or `DateError::InvalidTime`
    /// if the time fields do not form a time of day.
    pub fn new(
        year: u16,
        period: u8,
        day: u8,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> Result<Self, DateError> {
        Ok(Self::combine(
            Date::new(year, period, day)?,
            time_of_day(hour, minute, second, microsecond)?,
            None,
        ))
    }

    pub const fn combine(date: Date<C>, time: NaiveTime, offset: Option<FixedOffset>) -> Self {
        Self { date, time, offset }
    }

    #[inline]
    pub const fn date(&self) -> Date<C> {
        self.date
    }

    #[inline]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    #[inline]
    pub const fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    pub fn microsecond(&self) -> u32 {
        self.time.nanosecond() / 1_000
    }

    /// Naive datetime from a chrono Gregorian one.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the day is outside this
    /// calendar's range.
    pub fn from_naive(naive: NaiveDateTime) -> Result<Self, DateError> {
        Ok(Self::combine(
            Date::from_naive_date(naive.date())?,
            naive.time(),
            None,
        ))
    }

    /// The Gregorian wall-clock datetime, ignoring the offset.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if chrono cannot represent the day.
    pub fn to_naive(&self) -> Result<NaiveDateTime, DateError> {
        Ok(self.date.to_naive_date()?.and_time(self.time))
    }

    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the local day is outside
    /// this calendar's range.
    pub fn from_chrono(datetime: &DateTime<FixedOffset>) -> Result<Self, DateError> {
        let naive = datetime.naive_local();
        Ok(Self::combine(
            Date::from_naive_date(naive.date())?,
            naive.time(),
            Some(*datetime.offset()),
        ))
    }

    /// # Errors
    /// Returns `DateError::InvalidTime` for a naive datetime, or
    /// `DateError::Overflow` if chrono cannot represent the instant.
    pub fn to_chrono(&self) -> Result<DateTime<FixedOffset>, DateError> {
        let offset = self
            .offset
            .ok_or_else(|| DateError::InvalidTime("naive datetime has no offset".to_owned()))?;
        self.to_naive()?
            .and_local_timezone(offset)
            .single()
            .ok_or(DateError::Overflow)
    }

    /// The instant this value denotes, reading a naive value as UTC.
    fn instant(&self) -> Result<DateTime<Utc>, DateError> {
        match self.offset {
            Some(_) => Ok(self.to_chrono()?.with_timezone(&Utc)),
            None => Ok(self.to_naive()?.and_utc()),
        }
    }

    /// Local wall clock of a POSIX timestamp at `offset`.
    ///
    /// # Errors
    /// Returns `DateError::TimestampOutOfRange` if chrono cannot represent
    /// the timestamp, or `DateError::OrdinalOutOfRange` if the day is outside
    /// this calendar's range.
    pub fn from_timestamp(timestamp: i64, offset: FixedOffset) -> Result<Self, DateError> {
        let utc = utc_from_timestamp(timestamp)?;
        Self::from_chrono(&utc.with_timezone(&offset))
    }

    /// Naive UTC wall clock of a POSIX timestamp.
    ///
    /// # Errors
    /// Same as [`Datetime::from_timestamp`].
    pub fn from_timestamp_utc(timestamp: i64) -> Result<Self, DateError> {
        Self::from_naive(utc_from_timestamp(timestamp)?.naive_utc())
    }

    /// The current time, with a zero offset.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if today is outside this
    /// calendar's range.
    pub fn now_utc() -> Result<Self, DateError> {
        Self::from_chrono(&Utc::now().fixed_offset())
    }

    /// POSIX timestamp in whole seconds; naive values are read as UTC.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if chrono cannot represent the instant.
    pub fn timestamp(&self) -> Result<i64, DateError> {
        Ok(self.instant()?.timestamp())
    }

    /// Returns a copy with the given fields changed and revalidated.
    ///
    /// # Errors
    /// Returns the date errors of [`Date::new`], or `DateError::InvalidTime`
    /// for an invalid time of day.
    pub fn replace(&self, fields: DatetimeFields) -> Result<Self, DateError> {
        let date = self.date.replace(fields.year, fields.period, fields.day)?;
        let time = time_of_day(
            fields.hour.unwrap_or_else(|| self.hour()),
            fields.minute.unwrap_or_else(|| self.minute()),
            fields.second.unwrap_or_else(|| self.second()),
            fields.microsecond.unwrap_or_else(|| self.microsecond()),
        )?;
        Ok(Self::combine(date, time, fields.offset.unwrap_or(self.offset)))
    }

    /// The same instant seen from another offset; naive values are read as
    /// UTC.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if chrono cannot represent the instant,
    /// or `DateError::OrdinalOutOfRange` if the shifted day is outside this
    /// calendar's range.
    pub fn with_offset(&self, offset: FixedOffset) -> Result<Self, DateError> {
        Self::from_chrono(&self.instant()?.with_timezone(&offset))
    }

    /// Moves the wall clock by `delta`, keeping the offset.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if the result is outside this calendar's
    /// range.
    pub fn checked_add_signed(&self, delta: TimeDelta) -> Result<Self, DateError> {
        let naive = self
            .to_naive()?
            .checked_add_signed(delta)
            .ok_or(DateError::Overflow)?;
        let date = Date::from_naive_date(naive.date()).map_err(|_| DateError::Overflow)?;
        Ok(Self::combine(date, naive.time(), self.offset))
    }

    /// # Errors
    /// Same as [`Datetime::checked_add_signed`].
    pub fn checked_sub_signed(&self, delta: TimeDelta) -> Result<Self, DateError> {
        self.checked_add_signed(-delta)
    }

    /// Time elapsed from `other` to `self`.
    ///
    /// Two naive values are compared as wall clocks and two aware values as
    /// instants.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` when exactly one side has an offset.
    pub fn signed_duration_since(&self, other: &Self) -> Result<TimeDelta, DateError> {
        match (self.offset, other.offset) {
            (None, None) => Ok(self.to_naive()? - other.to_naive()?),
            (Some(_), Some(_)) => Ok(self.instant()? - other.instant()?),
            _ => Err(DateError::InvalidTime(
                "cannot subtract naive and offset datetimes".to_owned(),
            )),
        }
    }

    /// `YYYY-MM-DDTHH:MM:SS[.ffffff][+HH:MM]`.
    pub fn isoformat(&self) -> String {
        self.isoformat_with(DATETIME_SEPARATOR)
    }

    /// Like [`Datetime::isoformat`] with `separator` between date and time.
    pub fn isoformat_with(&self, separator: char) -> String {
        let mut out = format!(
            "{}{separator}{:02}:{:02}:{:02}",
            self.date,
            self.hour(),
            self.minute(),
            self.second()
        );
        if self.microsecond() != 0 {
            out.push_str(&format!(".{:06}", self.microsecond()));
        }
        if let Some(offset) = self.offset {
            out.push_str(&offset.to_string());
        }
        out
    }

    /// Formats with the date directives of [`crate::FormatTokens`] plus
    /// `%H %M %S %f %z`.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedDirective` for an unknown directive,
    /// or `DateError::InvalidFormat` for a trailing `%`.
    pub fn strftime(&self, fmt: &str) -> Result<String, DateError> {
        let tokens = self.date.tokens();
        format::render(fmt, |directive| match directive {
            'H' => Some(format!("{:02}", self.hour())),
            'M' => Some(format!("{:02}", self.minute())),
            'S' => Some(format!("{:02}", self.second())),
            'f' => Some(format!("{:06}", self.microsecond())),
            'z' => Some(self.offset.map(compact_offset).unwrap_or_default()),
            _ => tokens.get(directive).map(str::to_owned),
        })
    }
}

/// `+HHMM`, as `%z` renders offsets.
fn compact_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}{:02}", minutes / 60, minutes % 60)
}

impl<C: Calendar> fmt::Display for Datetime<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.isoformat_with(' '))
    }
}

impl<C: Calendar> FromStr for Datetime<C> {
    type Err = DateError;

    /// Parses `YYYY-MM-DD<sep>HH:MM:SS[.f][+HH:MM]`, where `<sep>` is any
    /// single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        parse_datetime(trimmed)
            .inspect_err(|error| debug!(input = trimmed, %error, "failed to parse datetime"))
    }
}

fn parse_datetime<C: Calendar>(s: &str) -> Result<Datetime<C>, DateError> {
    let (date, rest) = s
        .split_at_checked(ISO_DATE_LEN)
        .ok_or_else(|| DateError::InvalidFormat(s.to_owned()))?;
    let date: Date<C> = date.parse()?;

    let mut rest = rest.chars();
    if rest.next().is_none() {
        return Err(DateError::InvalidFormat(format!("missing time in {s:?}")));
    }
    let rest = rest.as_str();

    let (time, offset) = match rest.rfind(['+', '-']) {
        Some(at) => {
            let (time, offset) = rest.split_at(at);
            let offset = offset
                .parse::<FixedOffset>()
                .map_err(|e| DateError::InvalidTime(format!("{offset}: {e}")))?;
            (time, Some(offset))
        },
        None => (rest, None),
    };
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S%.f")
        .map_err(|e| DateError::InvalidTime(format!("{time}: {e}")))?;
    Ok(Datetime::combine(date, time, offset))
}

impl<C: Calendar> serde::Serialize for Datetime<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.isoformat())
    }
}

impl<'de, C: Calendar> serde::Deserialize<'de> for Datetime<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IfcDate, IfcDatetime, SeasonalDate, SeasonalDatetime};

    fn hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    #[test]
    fn test_new_validates_time() {
        let dt = IfcDatetime::new(2019, 13, 29, 23, 59, 59, 999_999).unwrap();
        assert_eq!(dt.date(), IfcDate::new(2019, 13, 29).unwrap());
        assert_eq!(dt.microsecond(), 999_999);
        assert!(matches!(
            IfcDatetime::new(2019, 1, 1, 24, 0, 0, 0),
            Err(DateError::InvalidTime(_))
        ));
        assert!(matches!(
            IfcDatetime::new(2019, 13, 30, 0, 0, 0, 0),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_isoformat() {
        let dt = IfcDatetime::new(2000, 6, 29, 8, 5, 3, 0).unwrap();
        assert_eq!(dt.isoformat(), "2000-06-29T08:05:03");
        assert_eq!(dt.isoformat_with('_'), "2000-06-29_08:05:03");
        assert_eq!(dt.to_string(), "2000-06-29 08:05:03");

        let aware = dt
            .replace(DatetimeFields {
                microsecond: Some(42),
                offset: Some(Some(FixedOffset::east_opt(5 * 3600 + 1800).unwrap())),
                ..DatetimeFields::default()
            })
            .unwrap();
        assert_eq!(aware.isoformat(), "2000-06-29T08:05:03.000042+05:30");
    }

    #[test]
    fn test_parse() {
        let dt: IfcDatetime = "2000-06-29T08:05:03.000042+05:30".parse().unwrap();
        assert_eq!(dt.date(), IfcDate::new(2000, 6, 29).unwrap());
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 5, 3));
        assert_eq!(dt.microsecond(), 42);
        assert_eq!(dt.offset(), FixedOffset::east_opt(5 * 3600 + 1800));

        let naive: SeasonalDatetime = "2020-01-00 12:00:00".parse().unwrap();
        assert_eq!(naive.date(), SeasonalDate::new(2020, 1, 0).unwrap());
        assert_eq!(naive.offset(), None);

        let negative: IfcDatetime = "2019-01-01T00:00:00-03:00".parse().unwrap();
        assert_eq!(negative.offset(), Some(hours(-3)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("  ".parse::<IfcDatetime>(), Err(DateError::EmptyInput));
        assert!(matches!(
            "2019-01-01".parse::<IfcDatetime>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2019/01/01T00:00:00".parse::<IfcDatetime>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2019-01-01T25:00:00".parse::<IfcDatetime>(),
            Err(DateError::InvalidTime(_))
        ));
        assert!(matches!(
            "2019-01-01T10:00:00+99:00".parse::<IfcDatetime>(),
            Err(DateError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_replace_keeps_zero_values() {
        let dt = IfcDatetime::new(2019, 5, 10, 14, 30, 15, 500).unwrap();
        let midnight = dt
            .replace(DatetimeFields {
                hour: Some(0),
                minute: Some(0),
                second: Some(0),
                microsecond: Some(0),
                ..DatetimeFields::default()
            })
            .unwrap();
        assert_eq!(midnight.isoformat(), "2019-05-10T00:00:00");
        assert_eq!(dt.replace(DatetimeFields::default()).unwrap(), dt);

        let seasonal = SeasonalDatetime::new(2020, 1, 5, 1, 0, 0, 0).unwrap();
        let leap_day = seasonal
            .replace(DatetimeFields {
                day: Some(0),
                ..DatetimeFields::default()
            })
            .unwrap();
        assert_eq!(leap_day.date().day(), 0);
    }

    #[test]
    fn test_timestamps() {
        let epoch = IfcDatetime::from_timestamp_utc(0).unwrap();
        assert_eq!(epoch.isoformat(), "1970-01-01T00:00:00");
        assert_eq!(epoch.timestamp().unwrap(), 0);

        // 2000-06-17T12:00:00Z seen from UTC-13 is still the day before.
        let aware = IfcDatetime::from_timestamp(961_243_200, hours(-13)).unwrap();
        assert_eq!(aware.isoformat(), "2000-06-28T23:00:00-13:00");
        assert_eq!(aware.timestamp().unwrap(), 961_243_200);

        let seasonal = SeasonalDatetime::from_timestamp_utc(0).unwrap();
        assert_eq!(seasonal.date(), SeasonalDate::new(1970, 1, 12).unwrap());

        assert!(matches!(
            IfcDatetime::from_timestamp_utc(i64::MIN),
            Err(DateError::TimestampOutOfRange(_))
        ));
    }

    #[test]
    fn test_chrono_round_trip() {
        let chrono = DateTime::parse_from_rfc3339("2019-12-31T23:30:00+01:00").unwrap();
        let dt = IfcDatetime::from_chrono(&chrono).unwrap();
        assert_eq!(dt.date(), IfcDate::new(2019, 13, 29).unwrap());
        assert_eq!(dt.to_chrono().unwrap(), chrono);

        let naive = dt.to_naive().unwrap();
        assert_eq!(IfcDatetime::from_naive(naive).unwrap().offset(), None);
        assert!(IfcDatetime::from_naive(naive).unwrap().to_chrono().is_err());
    }

    #[test]
    fn test_with_offset() {
        let dt: IfcDatetime = "2019-13-29T23:30:00+01:00".parse().unwrap();
        let utc = dt.with_offset(hours(0)).unwrap();
        assert_eq!(utc.isoformat(), "2019-13-29T22:30:00+00:00");
        let east = dt.with_offset(hours(2)).unwrap();
        assert_eq!(east.isoformat(), "2020-01-01T00:30:00+02:00");
        assert_eq!(east.signed_duration_since(&dt).unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_arithmetic() {
        let dt = IfcDatetime::new(2019, 13, 28, 23, 0, 0, 0).unwrap();
        let later = dt.checked_add_signed(TimeDelta::hours(2)).unwrap();
        assert_eq!(later.isoformat(), "2019-13-29T01:00:00");
        assert_eq!(later.signed_duration_since(&dt).unwrap(), TimeDelta::hours(2));
        assert_eq!(later.checked_sub_signed(TimeDelta::hours(2)).unwrap(), dt);

        let last = IfcDatetime::combine(IfcDate::max(), NaiveTime::default(), None);
        assert_eq!(
            last.checked_add_signed(TimeDelta::days(1)),
            Err(DateError::Overflow)
        );

        let aware = dt
            .replace(DatetimeFields {
                offset: Some(Some(hours(0))),
                ..DatetimeFields::default()
            })
            .unwrap();
        assert!(matches!(
            aware.signed_duration_since(&dt),
            Err(DateError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_strftime() {
        let dt: IfcDatetime = "2000-06-29T08:05:03.000042-04:30".parse().unwrap();
        assert_eq!(
            dt.strftime("%B %H:%M:%S.%f %z").unwrap(),
            "Leap Day 08:05:03.000042 -0430"
        );
        let naive = IfcDatetime::new(2019, 1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(naive.strftime("%a %d%z").unwrap(), "Sun 01");
        assert_eq!(naive.strftime("%c"), Err(DateError::UnsupportedDirective('c')));
    }

    #[test]
    fn test_serde() {
        let dt: IfcDatetime = "2019-13-29T23:30:00+01:00".parse().unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2019-13-29T23:30:00+01:00\"");
        let parsed: IfcDatetime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dt);
        assert!(serde_json::from_str::<IfcDatetime>("\"2019-13-30T00:00:00\"").is_err());
    }
}
