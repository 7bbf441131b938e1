//! Calendar-independant date.

use std::fmt;
use std::ops::{Add, RangeInclusive, Sub};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::vietnamese::{self, LunarDate};

/// Computes the Julian day number (JDN) of a Gregorian calendar date.
///
/// No validation is performed: out-of-range days or months give a
/// well-defined number without calendar meaning. All divisions are floor
/// divisions, so months past 12 roll into the following year.
///
/// # Example
///
/// ```
/// use amlich::date::jd_from_date;
///
/// assert_eq!(2451545, jd_from_date(1, 1, 2000));
/// assert_eq!(2460705, jd_from_date(29, 1, 2025));
/// ```
pub const fn jd_from_date(day: i32, month: i32, year: i32) -> i32 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Years accepted by [`Date::from_gregorian`] and [`SolarDate::new`].
///
/// Starts at the first full Gregorian year after JDN 0 and stops where
/// four-digit ISO formatting ends.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = -4712..=9999;

/// A calendar-independant date.
///
/// The day number is signed; Gregorian decomposition works on both sides of
/// JDN 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2025, 2, 29).is_err());
    /// assert!(Date::from_gregorian(2_000_000_000, 1, 1).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(Error::YearOutOfRange { year });
        }
        let max_day = days_in_month(year, month)?;
        if day < 1 || day as u32 > max_day {
            return Err(Error::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self::from_jdn(jd_from_date(day, month, year)))
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let (year, month, day) = self.ymd();
        (year, month as i32, day as i32)
    }
    /// Returns the Gregorian date as a [`SolarDate`].
    pub fn solar(&self) -> SolarDate {
        let (year, month, day) = self.ymd();
        SolarDate { day, month, year }
    }
    fn ymd(&self) -> (i32, u32, u32) {
        let jdn = self.jdn;
        let f = jdn + 1401 + ((4 * jdn + 274277).div_euclid(146097) * 3).div_euclid(4) - 38;
        let e = 4 * f + 3;
        // day of the 4-year cycle, never negative
        let g = e.rem_euclid(1461).unsigned_abs() / 4;
        let h = 5 * g + 2;
        let day = h % 153 / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e.div_euclid(1461) - 4716 + i32::from(month <= 2);
        (year, month, day)
    }
    /// Returns the lunar date of this day.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let lunar = Date::from_gregorian(2025, 2, 12).unwrap().lunar();
    /// assert_eq!((15, 1, 2025), (lunar.day, lunar.month, lunar.year));
    /// ```
    pub fn lunar(&self) -> LunarDate {
        self.solar().lunar()
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn.rem_euclid(7) as u32 + 1
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

/// A validated Gregorian calendar date, as shown in a grid cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SolarDate {
    /// Day of month, `1..=31`.
    pub day: u32,
    /// Month, `1..=12`.
    pub month: u32,
    pub year: i32,
}

impl SolarDate {
    /// Creates a `SolarDate`, rejecting days and months that do not exist.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::SolarDate;
    ///
    /// let date = SolarDate::new(2024, 2, 29).unwrap();
    /// assert_eq!(29, date.day);
    /// assert!(SolarDate::new(2024, 13, 1).is_err());
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self> {
        Date::from_gregorian(year, month, day).map(|date| date.solar())
    }
    /// Returns the calendar-independant date.
    pub fn date(&self) -> Date {
        Date::from_jdn(self.jdn())
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        jd_from_date(self.day as i32, self.month as i32, self.year)
    }
    /// Converts into the lunar calendar.
    pub fn lunar(&self) -> LunarDate {
        vietnamese::convert_solar_to_lunar(self.day as i32, self.month as i32, self.year)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

impl FromStr for SolarDate {
    type Err = Error;

    /// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormat(s.to_owned());
        let mut it = s.trim().splitn(3, '-');
        let mut next = || -> Result<i32> {
            it.next()
                .filter(|part| !part.is_empty())
                .ok_or_else(invalid)?
                .parse()
                .map_err(|_| invalid())
        };
        let (year, month, day) = (next()?, next()?, next()?);
        Self::new(year, month, day)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Returns the number of days in a Gregorian month.
///
/// # Example
///
/// ```
/// use amlich::date::days_in_month;
///
/// assert_eq!(29, days_in_month(2024, 2).unwrap());
/// assert_eq!(31, days_in_month(2025, 12).unwrap());
/// ```
pub fn days_in_month(year: i32, month: i32) -> Result<u32> {
    Ok(match month {
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        4 | 6 | 9 | 11 => 30,
        1..=12 => 31,
        _ => return Err(Error::InvalidMonth { month }),
    })
}
