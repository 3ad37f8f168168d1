//! `strftime`-style rendering.
//!
//! A date is first turned into a [`FormatTokens`] table holding the rendered
//! value of every supported directive. Intercalary days have no weekday, and
//! each calendar decides how they show up in the period and day slots.

use crate::calendar::{Calendar, Weekday};
use crate::date::Date;
use crate::DateError;

/// Placeholder for a value an intercalary day does not have.
pub const NO_VALUE: &str = "--";

/// Rendered values of the date directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatTokens {
    /// `%Y`, four digits.
    pub year:           String,
    /// `%a`
    pub weekday_abbrev: String,
    /// `%A`
    pub weekday_name:   String,
    /// `%w`, the numeric weekday including intercalary numbers.
    pub weekday_number: String,
    /// `%d`
    pub day:            String,
    /// `%b`
    pub period_abbrev:  String,
    /// `%B`
    pub period_name:    String,
    /// `%m`
    pub period_number:  String,
    /// `%j`, three digits, starting at 001.
    pub day_of_year:    String,
    /// `%U` and `%W`, two digits.
    pub week_of_year:   String,
}

impl FormatTokens {
    pub fn from_date<C: Calendar>(date: &Date<C>) -> Self {
        let weekday = date.weekday();
        let period = usize::from(date.period() - 1);
        let mut tokens = Self {
            year:           format!("{:04}", date.year()),
            weekday_abbrev: NO_VALUE.to_owned(),
            weekday_name:   NO_VALUE.to_owned(),
            weekday_number: C::weekday_number(weekday).to_string(),
            day:            format!("{:02}", date.day()),
            period_abbrev:  name_at(C::PERIOD_ABBREVS, period),
            period_name:    name_at(C::PERIOD_NAMES, period),
            period_number:  format!("{:0width$}", date.period(), width = C::PERIOD_NUMBER_WIDTH),
            day_of_year:    format!("{:03}", date.day_of_year()),
            week_of_year:   format!("{:02}", date.week_of_year()),
        };
        match weekday {
            Weekday::Ordinary(index) => {
                tokens.weekday_abbrev = name_at(C::WEEKDAY_ABBREVS, usize::from(index));
                tokens.weekday_name = name_at(C::WEEKDAY_NAMES, usize::from(index));
            },
            Weekday::Intercalary(day) => C::render_intercalary(day, &mut tokens),
        }
        tokens
    }

    /// Value of a directive letter, `None` if it is not a date directive.
    ///
    /// Supported: `Y a A w d b B m j U W`.
    pub fn get(&self, directive: char) -> Option<&str> {
        let value = match directive {
            'Y' => &self.year,
            'a' => &self.weekday_abbrev,
            'A' => &self.weekday_name,
            'w' => &self.weekday_number,
            'd' => &self.day,
            'b' => &self.period_abbrev,
            'B' => &self.period_name,
            'm' => &self.period_number,
            'j' => &self.day_of_year,
            'U' | 'W' => &self.week_of_year,
            _ => return None,
        };
        Some(value)
    }
}

fn name_at(names: &[&str], index: usize) -> String {
    names.get(index).copied().unwrap_or(NO_VALUE).to_owned()
}

/// Expands `%` directives in `fmt` through `lookup`; `%%` is a literal `%`.
pub(crate) fn render<F>(fmt: &str, mut lookup: F) -> Result<String, DateError>
where
    F: FnMut(char) -> Option<String>,
{
    let mut out = String::with_capacity(fmt.len());
    let mut chars = fmt.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some(directive) => {
                let value = lookup(directive).ok_or(DateError::UnsupportedDirective(directive))?;
                out.push_str(&value);
            },
            None => {
                return Err(DateError::InvalidFormat(format!(
                    "trailing '%' in format {fmt:?}"
                )));
            },
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IfcDate, PositivistDate, SeasonalDate};

    fn tokens(
        weekday: (&str, &str, &str),
        day: &str,
        period: (&str, &str, &str),
        day_of_year: &str,
        week_of_year: &str,
        year: &str,
    ) -> FormatTokens {
        FormatTokens {
            year:           year.to_owned(),
            weekday_abbrev: weekday.0.to_owned(),
            weekday_name:   weekday.1.to_owned(),
            weekday_number: weekday.2.to_owned(),
            day:            day.to_owned(),
            period_abbrev:  period.0.to_owned(),
            period_name:    period.1.to_owned(),
            period_number:  period.2.to_owned(),
            day_of_year:    day_of_year.to_owned(),
            week_of_year:   week_of_year.to_owned(),
        }
    }

    #[test]
    fn test_ifc_ordinary_day() {
        let date = IfcDate::new(2019, 1, 1).unwrap();
        assert_eq!(
            date.tokens(),
            tokens(("Sun", "Sunday", "0"), "01", ("Jan", "January", "01"), "001", "00", "2019")
        );
    }

    #[test]
    fn test_ifc_year_day() {
        let date = IfcDate::new(2019, 13, 29).unwrap();
        assert_eq!(
            date.tokens(),
            tokens(("--", "--", "7"), "--", ("YrD", "Year Day", "YrD"), "365", "52", "2019")
        );
    }

    #[test]
    fn test_ifc_leap_day() {
        let date = IfcDate::new(2000, 6, 29).unwrap();
        assert_eq!(
            date.tokens(),
            tokens(("--", "--", "8"), "--", ("LpD", "Leap Day", "LpD"), "169", "24", "2000")
        );
    }

    #[test]
    fn test_ifc_after_leap_day() {
        let date = IfcDate::new(2000, 7, 1).unwrap();
        assert_eq!(
            date.tokens(),
            tokens(("Tue", "Tuesday", "2"), "01", ("Sol", "Sol", "07"), "170", "24", "2000")
        );
        assert_eq!(date.strftime("%w %A %a").unwrap(), "2 Tuesday Tue");
        let last = IfcDate::new(2000, 13, 28).unwrap();
        assert_eq!(last.strftime("%w %A %j").unwrap(), "1 Monday 365");
    }

    #[test]
    fn test_positivist_festivals() {
        let dead = PositivistDate::new(2019, 13, 29).unwrap();
        assert_eq!(
            dead.tokens(),
            tokens(
                ("--", "--", "7"),
                "--",
                ("FsD", "Festival of the Dead", "FsD"),
                "365",
                "52",
                "2019"
            )
        );
        let holy_women = PositivistDate::new(2020, 13, 30).unwrap();
        assert_eq!(
            holy_women.tokens(),
            tokens(
                ("--", "--", "8"),
                "--",
                ("FsW", "Festival of Holy Women", "FsW"),
                "366",
                "52",
                "2020"
            )
        );
    }

    #[test]
    fn test_seasonal_intercalary_days_keep_their_season() {
        let leap_day = SeasonalDate::new(2020, 1, 0).unwrap();
        assert_eq!(
            leap_day.tokens(),
            tokens(("--", "--", "10"), "Lp", ("Win", "Winter", "1"), "071", "07", "2020")
        );
        let mid_season = SeasonalDate::new(2020, 3, 37).unwrap();
        assert_eq!(
            mid_season.tokens(),
            tokens(("--", "--", "9"), "37", ("Sum", "Summer", "3"), "184", "03", "2020")
        );
    }

    #[test]
    fn test_seasonal_ordinary_day() {
        let date = SeasonalDate::new(2019, 2, 10).unwrap();
        assert_eq!(
            date.tokens(),
            tokens(("Mer", "Mercury", "0"), "10", ("Spr", "Spring", "2"), "083", "01", "2019")
        );
    }

    #[test]
    fn test_strftime() {
        let date = IfcDate::new(2019, 7, 15).unwrap();
        assert_eq!(date.strftime("%A %d %B %Y").unwrap(), "Sunday 15 Sol 2019");
        assert_eq!(date.strftime("%Y-%m-%d (%j) 100%%").unwrap(), "2019-07-15 (183) 100%");
        assert_eq!(date.strftime("").unwrap(), "");
    }

    #[test]
    fn test_strftime_errors() {
        let date = IfcDate::new(2019, 7, 15).unwrap();
        assert_eq!(date.strftime("%Q"), Err(DateError::UnsupportedDirective('Q')));
        assert_eq!(date.strftime("%H"), Err(DateError::UnsupportedDirective('H')));
        assert!(matches!(date.strftime("%d %"), Err(DateError::InvalidFormat(_))));
    }
}
