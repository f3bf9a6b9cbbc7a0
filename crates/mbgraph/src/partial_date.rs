// SPDX-License-Identifier: GPL-3.0-or-later

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartialDateError {
    #[error("`{0}` is not a YYYY, YYYY-MM or YYYY-MM-DD date")]
    Format(String),

    #[error("month {0} is out of range")]
    Month(u8),

    #[error("day {0} is out of range")]
    Day(u8),

    #[error("year {0} is out of range")]
    Year(u16),
}

/// A date known to year, month or day precision (or not at all).
///
/// Components are independent: MusicBrainz occasionally knows a month and day
/// without the year (`????-05-12`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartialDate {
    year: Option<u16>,
    month: Option<u8>,
    day: Option<u8>,
}

impl PartialDate {
    pub const EMPTY: PartialDate = PartialDate {
        year: None,
        month: None,
        day: None,
    };

    pub fn new(
        year: Option<u16>,
        month: Option<u8>,
        day: Option<u8>,
    ) -> Result<Self, PartialDateError> {
        if let Some(year) = year.filter(|year| *year > 9999) {
            return Err(PartialDateError::Year(year));
        }
        if let Some(month) = month.filter(|month| !(1..=12).contains(month)) {
            return Err(PartialDateError::Month(month));
        }
        if let Some(day) = day.filter(|day| !(1..=31).contains(day)) {
            return Err(PartialDateError::Day(day));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> Option<u16> {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// The calendar date, when all three components are known and valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year?),
            u32::from(self.month?),
            u32::from(self.day?),
        )
    }
}

fn parse_component<T: FromStr>(text: &str, source: &str) -> Result<Option<T>, PartialDateError> {
    if text.bytes().all(|byte| byte == b'?') {
        return Ok(None);
    }
    if !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(PartialDateError::Format(source.to_string()));
    }
    text.parse()
        .map(Some)
        .map_err(|_| PartialDateError::Format(source.to_string()))
}

impl FromStr for PartialDate {
    type Err = PartialDateError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Ok(Self::EMPTY);
        }
        let bytes = text.as_bytes();
        let separators_ok = match bytes.len() {
            4 => true,
            7 => bytes[4] == b'-',
            10 => bytes[4] == b'-' && bytes[7] == b'-',
            _ => false,
        };
        if !separators_ok || !text.is_ascii() {
            return Err(PartialDateError::Format(text.to_string()));
        }

        let year = parse_component(&text[0..4], text)?;
        let month = match text.len() {
            7 | 10 => parse_component(&text[5..7], text)?,
            _ => None,
        };
        let day = match text.len() {
            10 => parse_component(&text[8..10], text)?,
            _ => None,
        };
        Self::new(year, month, day)
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        match self.year {
            Some(year) => write!(f, "{year:04}")?,
            None => f.write_str("????")?,
        }
        if self.month.is_none() && self.day.is_none() {
            return Ok(());
        }
        match self.month {
            Some(month) => write!(f, "-{month:02}")?,
            None => f.write_str("-??")?,
        }
        if let Some(day) = self.day {
            write!(f, "-{day:02}")?;
        }
        Ok(())
    }
}

/// Component-wise comparison: dates only compare while both sides know the
/// same leading components.
impl PartialOrd for PartialDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let pairs = [
            (self.year.map(u32::from), other.year.map(u32::from)),
            (self.month.map(u32::from), other.month.map(u32::from)),
            (self.day.map(u32::from), other.day.map(u32::from)),
        ];
        for pair in pairs {
            match pair {
                (Some(left), Some(right)) => match left.cmp(&right) {
                    Ordering::Equal => continue,
                    ordering => return Some(ordering),
                },
                (None, None) => continue,
                _ => return None,
            }
        }
        Some(Ordering::Equal)
    }
}

impl Serialize for PartialDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_each_precision() {
        let year: PartialDate = "1997".parse().unwrap();
        assert_eq!((year.year(), year.month(), year.day()), (Some(1997), None, None));

        let month: PartialDate = "1997-05".parse().unwrap();
        assert_eq!(month.month(), Some(5));

        let day: PartialDate = "1997-05-21".parse().unwrap();
        assert_eq!(
            day.to_naive_date(),
            NaiveDate::from_ymd_opt(1997, 5, 21)
        );
        assert_eq!(day.to_string(), "1997-05-21");
    }

    #[test]
    fn test_empty_string_has_no_components() {
        let date: PartialDate = "".parse().unwrap();
        assert!(date.is_empty());
        assert_eq!(date, PartialDate::EMPTY);
    }

    #[test]
    fn test_unknown_year_components() {
        let date: PartialDate = "????-05-12".parse().unwrap();
        assert_eq!(date.year(), None);
        assert_eq!(date.month(), Some(5));
        assert_eq!(date.day(), Some(12));
        assert_eq!(date.to_string(), "????-05-12");
        assert_eq!(date.to_naive_date(), None);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        for text in ["199", "1997-5", "1997/05/21", "19970521", "abcd", "1997-13", "1997-02-00"] {
            assert!(text.parse::<PartialDate>().is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn test_component_wise_ordering() {
        let a: PartialDate = "1990-01".parse().unwrap();
        let b: PartialDate = "1990-03".parse().unwrap();
        let c: PartialDate = "1990".parse().unwrap();
        let d: PartialDate = "1991".parse().unwrap();

        assert!(a < b);
        assert!(c < d);
        assert!(a < d);
        assert_eq!(a.partial_cmp(&c), None);
        assert_eq!(c.partial_cmp(&c), Some(Ordering::Equal));
    }
}
