//! Vietnamese lunar calendar (âm lịch), approximated.
//!
//! Lunar dates are derived by walking whole lunar months away from a single
//! anchor, 29 January 2025 = day 1 of month 1 of lunar year 2025 (Tết Ất Tỵ).
//! Month lengths come from [`lunar_month_days`], a parity rule standing in for
//! the astronomical new-moon computation: dates close to the anchor agree with
//! the published calendar, dates further away drift. Leap months are never
//! produced.

use tracing::trace;

use crate::date::jd_from_date;

pub mod fmt;

/// Solar date of the anchor, as `(day, month, year)`.
pub const ANCHOR_SOLAR: (i32, i32, i32) = (29, 1, 2025);
/// Lunar date of the anchor, as `(day, month, year)`.
pub const ANCHOR_LUNAR: (u32, u32, i32) = (1, 1, 2025);
/// Julian day number of the anchor.
pub const ANCHOR_JD: i32 = jd_from_date(ANCHOR_SOLAR.0, ANCHOR_SOLAR.1, ANCHOR_SOLAR.2);

/// A date in the lunar calendar.
///
/// Only produced by [`convert_solar_to_lunar`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// Day of the lunar month, `1..=30`. Day 1 is Mùng 1, day 15 is Rằm.
    pub day: u32,
    /// Lunar month, `1..=12`.
    pub month: u32,
    /// Lunar year; changes at Tết rather than on 1 January.
    pub year: i32,
    /// Always `false`, leap months are not computed.
    pub leap: bool,
    /// Julian day number of the solar date this was converted from.
    pub jd: i32,
}

impl LunarDate {
    /// Returns the Can-Chi name of the lunar year, see [`can_chi`].
    pub fn can_chi(&self) -> String {
        can_chi(self)
    }
    /// Returns the number of days in this date's lunar month.
    pub fn month_days(&self) -> u32 {
        lunar_month_days(self.month, self.year)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Returns the length of a lunar month: 30 days when `month + year` is even,
/// 29 otherwise.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::lunar_month_days;
///
/// assert_eq!(30, lunar_month_days(1, 2025));
/// assert_eq!(29, lunar_month_days(2, 2025));
/// ```
pub fn lunar_month_days(month: u32, year: i32) -> u32 {
    if (month as i32 + year).rem_euclid(2) == 0 {
        30
    } else {
        29
    }
}

/// Converts a Gregorian date, given as `(day, month, year)`, into the lunar
/// calendar.
///
/// The input is not validated; see [`SolarDate`](crate::SolarDate) for a
/// checked entry point. Runs in time proportional to the number of lunar
/// months between the date and the anchor.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::convert_solar_to_lunar;
///
/// let lunar = convert_solar_to_lunar(29, 1, 2025);
/// assert_eq!((1, 1, 2025, false), (lunar.day, lunar.month, lunar.year, lunar.leap));
///
/// let lunar = convert_solar_to_lunar(28, 1, 2025);
/// assert_eq!((30, 12, 2024), (lunar.day, lunar.month, lunar.year));
/// ```
pub fn convert_solar_to_lunar(day: i32, month: i32, year: i32) -> LunarDate {
    let jd = jd_from_date(day, month, year);
    let diff = jd - ANCHOR_JD;

    let (mut l_day, mut l_month, mut l_year) = ANCHOR_LUNAR;

    if diff >= 0 {
        let mut remaining = diff as u32;
        while remaining > 0 {
            let rest_of_month = lunar_month_days(l_month, l_year) - l_day + 1;
            if remaining >= rest_of_month {
                remaining -= rest_of_month;
                l_day = 1;
                l_month += 1;
                if l_month > 12 {
                    l_month = 1;
                    l_year += 1;
                }
            } else {
                l_day += remaining;
                remaining = 0;
            }
        }
    } else {
        let mut remaining = diff.unsigned_abs();
        while remaining > 0 {
            if remaining >= l_day {
                remaining -= l_day;
                l_month -= 1;
                if l_month < 1 {
                    l_month = 12;
                    l_year -= 1;
                }
                l_day = lunar_month_days(l_month, l_year);
            } else {
                l_day -= remaining;
                remaining = 0;
            }
        }
    }

    trace!(jd, diff, l_day, l_month, l_year, "converted solar date");
    LunarDate {
        day: l_day,
        month: l_month,
        year: l_year,
        leap: false,
        jd,
    }
}

/// Returns the Can-Chi (sexagenary) name of the lunar year of `lunar`.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{can_chi, convert_solar_to_lunar};
///
/// assert_eq!("Ất Tỵ", can_chi(&convert_solar_to_lunar(1, 6, 2025)));
/// ```
pub fn can_chi(lunar: &LunarDate) -> String {
    can_chi_for_year(lunar.year)
}

/// Returns the Can-Chi name of a lunar year number.
///
/// Negative years are supported.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::can_chi_for_year;
///
/// assert_eq!("Giáp Thìn", can_chi_for_year(2024));
/// assert_eq!("Bính Ngọ", can_chi_for_year(2026));
/// ```
pub fn can_chi_for_year(year: i32) -> String {
    format!("{} {}", fmt::can(year + 6), fmt::chi(year + 8))
}
