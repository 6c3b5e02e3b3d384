//! The calendar month used to filter transactions.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use time::Month;

/// A calendar month chosen by the client, January (1) through December (12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSelector(Month);

impl MonthSelector {
    /// Parse the month number at the start of `text`, e.g. the `month` query
    /// parameter.
    ///
    /// Leading whitespace and an optional sign are skipped, then the longest
    /// run of digits is read and anything after it is ignored, so "3abc" and
    /// "3.5" are both March. A "0x" prefix reads the digits as hexadecimal.
    ///
    /// Returns `None` if `text` does not start with a number, or if the
    /// number is not between 1 and 12.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim_start();

        let (is_negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let hex = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"));

        let (digits, radix) = match hex {
            Some(hex) => (leading_digits(hex, 16), 16),
            None => (leading_digits(unsigned, 10), 10),
        };

        if digits.is_empty() || is_negative {
            return None;
        }

        let number = u8::from_str_radix(digits, radix).ok()?;

        Month::try_from(number).ok().map(Self)
    }

    /// All twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=12u8).filter_map(|number| Month::try_from(number).ok().map(Self))
    }

    /// The month as a [time::Month].
    pub fn month(self) -> Month {
        self.0
    }

    /// The month number, 1 for January through 12 for December.
    pub fn number(self) -> u8 {
        u8::from(self.0)
    }

    /// The full English name of the month, e.g. "March".
    pub fn name(self) -> &'static str {
        match self.0 {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

/// The longest prefix of `text` made of digits in `radix`.
fn leading_digits(text: &str, radix: u32) -> &str {
    let end = text
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(text.len());

    &text[..end]
}

impl From<Month> for MonthSelector {
    fn from(month: Month) -> Self {
        Self(month)
    }
}

/// The query string shared by the routes that filter by month.
///
/// The month is kept as raw text so that a malformed value selects nothing
/// instead of rejecting the request. If `month` is given more than once, the
/// first value is used and the rest are ignored, as are any other parameters.
#[derive(Debug, Default)]
pub(crate) struct MonthQuery {
    pub(crate) month: Option<String>,
}

impl<'de> Deserialize<'de> for MonthQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MonthQueryVisitor)
    }
}

struct MonthQueryVisitor;

impl<'de> Visitor<'de> for MonthQueryVisitor {
    type Value = MonthQuery;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("query parameters")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut month = None;

        while let Some((key, value)) = map.next_entry::<String, String>()? {
            if key == "month" && month.is_none() {
                month = Some(value);
            }
        }

        Ok(MonthQuery { month })
    }
}

impl MonthQuery {
    pub(crate) fn selector(&self) -> Option<MonthSelector> {
        self.month.as_deref().and_then(MonthSelector::parse)
    }
}
