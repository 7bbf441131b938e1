//! Vietnamese names for calendar values.

use super::LunarDate;

/// Heavenly stems (Can), index 0 is Giáp.
pub const CAN: &[&str] = &[
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];
/// Earthly branches (Chi), index 0 is Tý.
pub const CHI: &[&str] = &[
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// Stem for `num`, taken modulo 10. Negative numbers wrap around.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::fmt;
///
/// assert_eq!("Giáp", fmt::can(10));
/// assert_eq!("Quý", fmt::can(-1));
/// ```
pub fn can(num: i32) -> &'static str {
    CAN[num.rem_euclid(CAN.len() as i32) as usize]
}

/// Branch for `num`, taken modulo 12. Negative numbers wrap around.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::fmt;
///
/// assert_eq!("Tý", fmt::chi(24));
/// assert_eq!("Hợi", fmt::chi(-1));
/// ```
pub fn chi(num: i32) -> &'static str {
    CHI[num.rem_euclid(CHI.len() as i32) as usize]
}

/// Short weekday name for an ISO day of week (`1..=7`, Monday first):
/// "T2" through "T7", and "CN" for Sunday.
///
/// # Example
///
/// ```
/// use amlich::{Date, vietnamese::fmt};
///
/// let date = Date::from_gregorian(2025, 1, 29).unwrap();
/// assert_eq!("T4", fmt::weekday(date.day_of_week()));
/// ```
///
/// # Panics
///
/// Panics if `dow` is not in `1..=7`.
pub fn weekday(dow: u32) -> &'static str {
    const NAMES: &[&str] = &["T2", "T3", "T4", "T5", "T6", "T7", "CN"];
    match dow {
        1..=7 => NAMES[dow as usize - 1],
        _ => panic!("day of week {} not in 1..=7", dow),
    }
}

/// Column heading for an ISO day of week, e.g. "Thứ 2" or "CN".
///
/// # Panics
///
/// Panics if `dow` is not in `1..=7`.
pub fn weekday_long(dow: u32) -> &'static str {
    const NAMES: &[&str] = &["Thứ 2", "Thứ 3", "Thứ 4", "Thứ 5", "Thứ 6", "Thứ 7", "CN"];
    match dow {
        1..=7 => NAMES[dow as usize - 1],
        _ => panic!("day of week {} not in 1..=7", dow),
    }
}

/// Month heading, "Tháng {m}".
pub fn month(m: u32) -> String {
    format!("Tháng {m}")
}

/// Compact label used in a grid cell: the first day of a lunar month is
/// shown as `day/month`, every other day as the bare day number.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{convert_solar_to_lunar, fmt};
///
/// assert_eq!("1/2", fmt::cell_label(&convert_solar_to_lunar(28, 2, 2025)));
/// assert_eq!("15", fmt::cell_label(&convert_solar_to_lunar(14, 3, 2025)));
/// ```
pub fn cell_label(lunar: &LunarDate) -> String {
    if lunar.day == 1 {
        format!("{}/{}", lunar.day, lunar.month)
    } else {
        lunar.day.to_string()
    }
}
