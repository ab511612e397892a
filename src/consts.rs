/// One millisecond, the base unit for every duration in this table
pub const MILLISECOND: i64 = 1;

/// Milliseconds in one second
pub const SECOND: i64 = 1000 * MILLISECOND;

/// Milliseconds in one minute
pub const MINUTE: i64 = 60 * SECOND;

/// Milliseconds in one hour
pub const HOUR: i64 = 60 * MINUTE;

/// Milliseconds in one day
pub const DAY: i64 = 24 * HOUR;

/// Milliseconds in one week
pub const WEEK: i64 = 7 * DAY;

/// Milliseconds in two weeks
pub const FORTNIGHT: i64 = 14 * DAY;

/// Milliseconds in one month, using the fixed 30-day convention
/// (not calendar-accurate)
pub const MONTH: i64 = 30 * DAY;

/// Milliseconds in one common year (365 days)
pub const YEAR: i64 = 365 * DAY;

/// Milliseconds in one leap year (366 days)
pub const LEAP_YEAR: i64 = 366 * DAY;

/// Milliseconds in one olympiad (four common years)
pub const OLYMPIAD: i64 = 4 * YEAR;

/// Milliseconds in one decade
pub const DECADE: i64 = 10 * YEAR;

/// Milliseconds in one jubilee (fifty common years)
pub const JUBILEE: i64 = 50 * YEAR;

/// Milliseconds in one century
pub const CENTURY: i64 = 100 * YEAR;

/// Offset applied to floored day differences so the day that just started
/// counts as day one ("yesterday" is 1 day since, not 0)
pub const DAYS_SINCE_OFFSET: i64 = 1;

/// Month number for January
pub(crate) const JANUARY: u32 = 1;
/// First day of month, used when a format carries no day component
pub(crate) const MIN_DAY: u32 = 1;

/// Two-digit years below this value land in the 2000s, the rest in the 1900s
pub(crate) const CENTURY_PIVOT: u32 = 50;
/// Years written with this many digits or fewer are windowed around the pivot
pub(crate) const SHORT_YEAR_DIGITS: usize = 2;
/// Numbers written with at least this many digits are read as literal years
pub(crate) const LITERAL_YEAR_DIGITS: usize = 3;
/// A bare number is only a date when written as a full four-digit year
pub(crate) const FULL_YEAR_DIGITS: usize = 4;
/// Longest bare number the token scanner accepts (a four-digit year)
pub(crate) const MAX_NUMBER_DIGITS: usize = 4;
/// Fractional-second digits that survive scanning (milliseconds)
pub(crate) const FRACTION_DIGITS: usize = 3;

/// Shortest month or weekday name prefix the parser accepts
pub(crate) const MIN_NAME_PREFIX: usize = 3;

/// Month names, matched case-insensitively on whole names or prefixes
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Weekday names, accepted (and discarded) at the start of a date string
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

/// Zone designators that pin a string to UTC unless an explicit offset follows
pub(crate) const UTC_ZONE_NAMES: [&str; 4] = ["Z", "UT", "UTC", "GMT"];

/// Naive ISO 8601 shapes tried before the token grammar; a match is
/// interpreted at the assumed offset
pub(crate) const ISO_NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only naive ISO shape, resolved to midnight
pub(crate) const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A dash earlier than this marks a short numeric date ("6-6-6"),
/// not an ISO year
pub(crate) const ISO_YEAR_MIN_DIGITS: usize = 3;

/// Seconds per minute, for converting parsed offsets
pub(crate) const SECONDS_PER_MINUTE: i32 = 60;
/// Nanoseconds per millisecond, for epoch conversions
pub(crate) const NANOS_PER_MILLI: u32 = 1_000_000;
