use crate::consts::{
    CENTURY, DAY, DECADE, FORTNIGHT, HOUR, JUBILEE, LEAP_YEAR, MINUTE, MONTH, OLYMPIAD, SECOND,
    WEEK, YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of named durations, from one second up to a century.
/// Each unit maps to a fixed span of milliseconds; `Month` uses the 30-day
/// convention and `Year` the 365-day convention, so these are measuring
/// sticks, not calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Month,
    Year,
    LeapYear,
    Olympiad,
    Decade,
    Jubilee,
    Century,
}

/// Error type for duration-name lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown duration unit: {0}")]
pub struct UnknownUnit(pub String);

impl Unit {
    /// Every unit, smallest to largest
    pub const ALL: [Self; 13] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Fortnight,
        Self::Month,
        Self::Year,
        Self::LeapYear,
        Self::Olympiad,
        Self::Decade,
        Self::Jubilee,
        Self::Century,
    ];

    /// Returns the unit's span in milliseconds
    #[inline]
    pub const fn millis(self) -> i64 {
        match self {
            Self::Second => SECOND,
            Self::Minute => MINUTE,
            Self::Hour => HOUR,
            Self::Day => DAY,
            Self::Week => WEEK,
            Self::Fortnight => FORTNIGHT,
            Self::Month => MONTH,
            Self::Year => YEAR,
            Self::LeapYear => LEAP_YEAR,
            Self::Olympiad => OLYMPIAD,
            Self::Decade => DECADE,
            Self::Jubilee => JUBILEE,
            Self::Century => CENTURY,
        }
    }

    /// Returns the unit's name as it appears in serialized form
    pub const fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Fortnight => "fortnight",
            Self::Month => "month",
            Self::Year => "year",
            Self::LeapYear => "leapYear",
            Self::Olympiad => "olympiad",
            Self::Decade => "decade",
            Self::Jubilee => "jubilee",
            Self::Century => "century",
        }
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| UnknownUnit(s.to_owned()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
