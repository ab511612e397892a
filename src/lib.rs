mod consts;
mod diff;
mod prelude;
mod units;

pub use consts::*;
pub use diff::{days_between, days_from, days_since, now_millis, time_diff};
pub use units::{Unit, UnknownUnit};

use crate::prelude::*;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use std::str::FromStr;

/// A concrete point in time, resolved from one of the accepted date string
/// formats. Wraps an offset-aware instant; equality, ordering and hashing
/// compare the instant itself, not the offset it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{}", "_0.to_rfc3339()")]
pub struct Timestamp(DateTime<FixedOffset>);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Unrecognized date format: {_0}")]
    UnrecognizedFormat(String),
    #[display(fmt = "Invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[display(fmt = "Invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[display(fmt = "Invalid UTC offset: {_0} minutes")]
    InvalidOffset(i32),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl Timestamp {
    /// Epoch milliseconds of this point in time.
    #[inline]
    pub fn epoch_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Builds a timestamp from epoch milliseconds, rendered at UTC.
    /// Returns `None` when the value falls outside the representable range.
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        let secs = millis.div_euclid(SECOND);
        let nanos = u32::try_from(millis.rem_euclid(SECOND)).ok()? * NANOS_PER_MILLI;
        Utc.timestamp_opt(secs, nanos)
            .single()
            .map(|instant| Self(instant.with_timezone(&Utc.fix())))
    }

    /// Parses a date string, interpreting strings without an explicit zone
    /// at `assumed`. Strings that carry their own zone or offset keep it.
    ///
    /// # Errors
    /// Returns a `ParseError` describing why the string was rejected.
    pub fn parse_with_offset(text: &str, assumed: FixedOffset) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(instant));
        }
        if let Ok(instant) = DateTime::parse_from_rfc2822(trimmed) {
            return Ok(Self(instant));
        }
        if let Some(parsed) = Self::parse_iso_naive(trimmed, assumed) {
            return Ok(parsed);
        }
        Self::parse_tokens(trimmed, assumed)
    }
}

/// Returns `true` when `text` is not one of the accepted date formats.
pub fn invalid_date_string(text: &str) -> bool {
    text.parse::<Timestamp>().is_err()
}

/// Parses a date string into a [`Timestamp`], or `None` when it is invalid.
/// Strings without an explicit zone are interpreted at UTC.
pub fn date_from_string(text: &str) -> Option<Timestamp> {
    text.parse().ok()
}

/// Shorthand for [`date_from_string`].
pub use self::date_from_string as d;

/// Parses a date string straight to epoch milliseconds, or `None` when it
/// is invalid.
pub fn time_from_string(text: &str) -> Option<i64> {
    date_from_string(text).map(Timestamp::epoch_millis)
}

/// Shorthand for [`time_from_string`].
pub use self::time_from_string as t;

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_offset(s, Utc.fix())
    }
}

impl Timestamp {
    /// Naive ISO 8601 shapes, interpreted at `assumed`. Only consulted when
    /// the string leads with a full year, so short numeric dates like
    /// "6-6-6" stay in the token grammar.
    fn parse_iso_naive(text: &str, assumed: FixedOffset) -> Option<Self> {
        let dash = text.find('-')?;
        if dash < ISO_YEAR_MIN_DIGITS {
            return None;
        }

        for format in ISO_NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return assumed.from_local_datetime(&naive).single().map(Self);
            }
        }
        NaiveDate::parse_from_str(text, ISO_DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .and_then(|naive| assumed.from_local_datetime(&naive).single())
            .map(Self)
    }

    /// Token-grammar fallback for everything the RFC and ISO parsers do not
    /// cover: month names, numeric triples, bare years, `GMT-0400` tails.
    fn parse_tokens(text: &str, assumed: FixedOffset) -> Result<Self, ParseError> {
        let mut tokens = tokenize(text)?;

        // A leading weekday name carries no information; drop it.
        if let Some(Token::Word(word)) = tokens.first() {
            if match_name(word, &WEEKDAY_NAMES).is_some() {
                tokens.remove(0);
            }
        }

        let (clock, zone) = split_tail(&mut tokens);
        let (year, month, day) = resolve_date(&tokens, text)?;

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ParseError::InvalidDate { year, month, day })?;
        let (hour, minute, second, millisecond) = clock.unwrap_or((0, 0, 0, 0));
        let naive = date
            .and_hms_milli_opt(hour, minute, second, millisecond)
            .ok_or(ParseError::InvalidTime {
                hour,
                minute,
                second,
            })?;

        let offset = match zone {
            Some(minutes) => FixedOffset::east_opt(minutes * SECONDS_PER_MINUTE)
                .ok_or(ParseError::InvalidOffset(minutes))?,
            None => assumed,
        };
        offset
            .from_local_datetime(&naive)
            .single()
            .map(Self)
            .ok_or_else(|| ParseError::UnrecognizedFormat(text.to_owned()))
    }
}

/// One meaningful unit of a date string; separators are discarded while
/// scanning.
#[derive(Debug)]
enum Token {
    /// A run of digits that is not part of a clock, with its written width
    Number { value: u32, digits: usize },
    /// A run of letters, uppercased
    Word(String),
    /// A time of day: `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`
    Clock {
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    },
    /// An explicit UTC offset in minutes, e.g. `-0400` or `+05:30`
    Offset(i32),
}

// --- token scanning helpers ---

/// Splits a date string into tokens, discarding separators.
fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            byte if byte.is_ascii_whitespace() => pos += 1,
            b',' | b'/' | b'.' => pos += 1,
            b'+' | b'-' => {
                // A sign starts an offset only after the time of day or a
                // zone word; everywhere else it is a separator.
                if offset_may_follow(tokens.last()) {
                    let (minutes, next) = scan_offset(text, pos)?;
                    tokens.push(Token::Offset(minutes));
                    pos = next;
                } else {
                    pos += 1;
                }
            }
            byte if byte.is_ascii_digit() => {
                let (token, next) = scan_number_or_clock(text, pos)?;
                tokens.push(token);
                pos = next;
            }
            byte if byte.is_ascii_alphabetic() => {
                let (word, next) = scan_word(text, pos);
                tokens.push(Token::Word(word));
                pos = next;
            }
            _ => return Err(ParseError::UnrecognizedFormat(text.to_owned())),
        }
    }

    Ok(tokens)
}

fn offset_may_follow(last: Option<&Token>) -> bool {
    match last {
        Some(Token::Clock { .. }) => true,
        Some(Token::Word(word)) => UTC_ZONE_NAMES.contains(&word.as_str()),
        _ => false,
    }
}

fn scan_word(text: &str, start: usize) -> (String, usize) {
    let bytes = text.as_bytes();
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
        end += 1;
    }
    (text[start..end].to_ascii_uppercase(), end)
}

fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn scan_number_or_clock(text: &str, start: usize) -> Result<(Token, usize), ParseError> {
    let bytes = text.as_bytes();
    let end = scan_digits(bytes, start);
    let digits = end - start;

    if end < bytes.len() && bytes[end] == b':' {
        return scan_clock(text, start, end);
    }

    if digits > MAX_NUMBER_DIGITS {
        return Err(ParseError::UnrecognizedFormat(text.to_owned()));
    }
    let value = parse_component(text, start, end)?;
    Ok((Token::Number { value, digits }, end))
}

/// Scans a clock whose hour digits span `start..hour_end`, with
/// `bytes[hour_end]` being the first ':'.
fn scan_clock(text: &str, start: usize, hour_end: usize) -> Result<(Token, usize), ParseError> {
    let bytes = text.as_bytes();
    if hour_end - start > 2 {
        return Err(ParseError::UnrecognizedFormat(text.to_owned()));
    }
    let hour = parse_component(text, start, hour_end)?;

    let minute_start = hour_end + 1;
    let minute_end = scan_digits(bytes, minute_start);
    if minute_end == minute_start || minute_end - minute_start > 2 {
        return Err(ParseError::UnrecognizedFormat(text.to_owned()));
    }
    let minute = parse_component(text, minute_start, minute_end)?;

    let mut pos = minute_end;
    let mut second = 0;
    let mut millisecond = 0;
    if pos < bytes.len() && bytes[pos] == b':' {
        let second_start = pos + 1;
        let second_end = scan_digits(bytes, second_start);
        if second_end == second_start || second_end - second_start > 2 {
            return Err(ParseError::UnrecognizedFormat(text.to_owned()));
        }
        second = parse_component(text, second_start, second_end)?;
        pos = second_end;

        // Fractional seconds ride on the seconds field; only the leading
        // millisecond digits survive.
        if pos + 1 < bytes.len() && bytes[pos] == b'.' && bytes[pos + 1].is_ascii_digit() {
            let frac_start = pos + 1;
            let frac_end = scan_digits(bytes, frac_start);
            millisecond = frac_millis(text, frac_start, frac_end)?;
            pos = frac_end;
        }
    }

    Ok((
        Token::Clock {
            hour,
            minute,
            second,
            millisecond,
        },
        pos,
    ))
}

/// Scans an explicit UTC offset: `±H`, `±HH`, `±HMM`, `±HHMM` or `±HH:MM`.
/// Returns the signed offset in minutes; range checking happens later.
fn scan_offset(text: &str, start: usize) -> Result<(i32, usize), ParseError> {
    let bytes = text.as_bytes();
    let sign = if bytes[start] == b'-' { -1 } else { 1 };

    let digit_start = start + 1;
    let digit_end = scan_digits(bytes, digit_start);
    if digit_end == digit_start {
        return Err(ParseError::UnrecognizedFormat(text.to_owned()));
    }

    let (hours, minutes, end) = if digit_end < bytes.len()
        && bytes[digit_end] == b':'
        && digit_end - digit_start <= 2
    {
        let minute_start = digit_end + 1;
        let minute_end = scan_digits(bytes, minute_start);
        if minute_end - minute_start != 2 {
            return Err(ParseError::UnrecognizedFormat(text.to_owned()));
        }
        let hours = parse_component(text, digit_start, digit_end)?;
        let minutes = parse_component(text, minute_start, minute_end)?;
        (hours, minutes, minute_end)
    } else {
        match digit_end - digit_start {
            1 | 2 => (parse_component(text, digit_start, digit_end)?, 0, digit_end),
            3 | 4 => {
                let raw = parse_component(text, digit_start, digit_end)?;
                (raw / 100, raw % 100, digit_end)
            }
            _ => return Err(ParseError::UnrecognizedFormat(text.to_owned())),
        }
    };

    let total = hours as i32 * 60 + minutes as i32;
    Ok((sign * total, end))
}

/// Reduces fractional-second digits to whole milliseconds.
fn frac_millis(text: &str, start: usize, end: usize) -> Result<u32, ParseError> {
    let used = (end - start).min(FRACTION_DIGITS);
    let head = parse_component(text, start, start + used)?;
    Ok(match used {
        1 => head * 100,
        2 => head * 10,
        _ => head,
    })
}

fn parse_component(text: &str, start: usize, end: usize) -> Result<u32, ParseError> {
    text[start..end]
        .parse::<u32>()
        .map_err(|_| ParseError::UnrecognizedFormat(text.to_owned()))
}

/// Case-insensitive lookup of a full name or a prefix of at least
/// `MIN_NAME_PREFIX` letters; `word` is already uppercased.
fn match_name(word: &str, names: &[&str]) -> Option<usize> {
    if word.len() < MIN_NAME_PREFIX {
        return None;
    }
    names.iter().position(|name| name.starts_with(word))
}

fn month_from_name(word: &str) -> Option<u32> {
    match_name(word, &MONTH_NAMES).map(|index| index as u32 + 1)
}

/// Expands a year to its century: two digits or fewer are windowed around
/// `CENTURY_PIVOT`, anything longer is literal.
const fn expand_year(value: u32, digits: usize) -> i32 {
    if digits <= SHORT_YEAR_DIGITS {
        if value < CENTURY_PIVOT {
            2000 + value as i32
        } else {
            1900 + value as i32
        }
    } else {
        value as i32
    }
}

/// Detaches the optional clock and zone tail, leaving only date tokens.
/// An explicit offset wins over the zone word it follows ("GMT-0400").
fn split_tail(tokens: &mut Vec<Token>) -> (Option<(u32, u32, u32, u32)>, Option<i32>) {
    let mut zone = None;
    if let Some(Token::Offset(minutes)) = tokens.last() {
        zone = Some(*minutes);
        tokens.pop();
    }
    if let Some(Token::Word(word)) = tokens.last() {
        if UTC_ZONE_NAMES.contains(&word.as_str()) {
            if zone.is_none() {
                zone = Some(0);
            }
            tokens.pop();
        }
    }

    let mut clock = None;
    if let Some(Token::Clock {
        hour,
        minute,
        second,
        millisecond,
    }) = tokens.last()
    {
        clock = Some((*hour, *minute, *second, *millisecond));
        tokens.pop();
    }

    (clock, zone)
}

/// Resolves the date tokens to (year, month, day) calendar components.
/// Numbers of three or more digits are literal years; the position of the
/// year decides whether a numeric triple is year-first or month-first.
fn resolve_date(tokens: &[Token], text: &str) -> Result<(i32, u32, u32), ParseError> {
    let unrecognized = || ParseError::UnrecognizedFormat(text.to_owned());

    match tokens {
        // "20 APR 1969", "20APR1969" and year-first "1969 APR 20"
        [
            Token::Number { value: a, digits: a_digits },
            Token::Word(name),
            Token::Number { value: b, digits: b_digits },
        ] => {
            let month = month_from_name(name).ok_or_else(unrecognized)?;
            if *a_digits >= LITERAL_YEAR_DIGITS {
                Ok((expand_year(*a, *a_digits), month, *b))
            } else {
                Ok((expand_year(*b, *b_digits), month, *a))
            }
        }
        // "APR 20 1969", "April 20, 1969"
        [
            Token::Word(name),
            Token::Number { value: day, .. },
            Token::Number { value: year, digits },
        ] => {
            let month = month_from_name(name).ok_or_else(unrecognized)?;
            Ok((expand_year(*year, *digits), month, *day))
        }
        // "JUNE 2006"
        [Token::Word(name), Token::Number { value: year, digits }]
            if *digits >= LITERAL_YEAR_DIGITS =>
        {
            let month = month_from_name(name).ok_or_else(unrecognized)?;
            Ok((expand_year(*year, *digits), month, MIN_DAY))
        }
        // "04/20/1969", "6/6/6" and year-first "6969 69 69"
        [
            Token::Number { value: a, digits: a_digits },
            Token::Number { value: b, .. },
            Token::Number { value: c, digits: c_digits },
        ] => {
            if *a_digits >= LITERAL_YEAR_DIGITS {
                Ok((expand_year(*a, *a_digits), *b, *c))
            } else {
                Ok((expand_year(*c, *c_digits), *a, *b))
            }
        }
        // "2006 06"
        [
            Token::Number { value: year, digits },
            Token::Number { value: month, .. },
        ] if *digits >= LITERAL_YEAR_DIGITS => Ok((expand_year(*year, *digits), *month, MIN_DAY)),
        // "1969"
        [Token::Number { value: year, digits }] if *digits == FULL_YEAR_DIGITS => {
            Ok((expand_year(*year, *digits), JANUARY, MIN_DAY))
        }
        _ => Err(unrecognized()),
    }
}

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
