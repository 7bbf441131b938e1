//! Error type for the fallible parts of the crate.
//!
//! The conversion core itself never fails; validation happens when a date,
//! setting or zodiac name enters the crate from the outside.

/// Error type for all fallible operations in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a month number is outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The month number that was provided.
        month: i32,
    },

    /// Returned when a day number does not exist in the given month.
    #[error("invalid day: {day} for {year:04}-{month:02} (max {max_day})")]
    InvalidDay {
        day: i32,
        month: i32,
        year: i32,
        max_day: u32,
    },

    /// Returned when a Gregorian year is outside
    /// [`SUPPORTED_YEARS`](crate::date::SUPPORTED_YEARS).
    #[error("year out of range: {year} (must be -4712..=9999)")]
    YearOutOfRange { year: i32 },

    /// Returned when a date string is not in `YYYY-MM-DD` form.
    #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidFormat(String),

    /// Returned when the reminder lead time is outside `1..=3` days.
    #[error("invalid reminder lead time: {days} days (must be 1..=3)")]
    InvalidLeadDays { days: u32 },

    #[error("unknown zodiac sign: {0:?}")]
    UnknownZodiac(String),

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    ParseSettings(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    SerializeSettings(#[from] toml::ser::Error),

    /// Reported by a [`WisdomSource`](crate::wisdom::WisdomSource).
    #[error("wisdom source failed: {0}")]
    Wisdom(String),
}

/// Shorthand for results in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
