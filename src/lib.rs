//! Vietnamese lunar calendar (âm lịch) for a month-view calendar.
//!
//! The crate converts Gregorian dates into lunar dates, names lunar years in
//! the Can-Chi cycle, lays out month grids, finds the Rằm and Mùng 1
//! observances and plans reminders for them.
//!
//! Lunar dates are approximated by walking fixed-length months from a single
//! anchor (Tết 2025), see [`vietnamese`]. They match the published calendar
//! near the anchor only.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use amlich::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Lunar calendar:
//!
//! ```
//! use amlich::vietnamese::{can_chi, convert_solar_to_lunar};
//!
//! let lunar = convert_solar_to_lunar(29, 1, 2025);
//!
//! assert_eq!((1, 1, 2025), (lunar.day, lunar.month, lunar.year));
//! assert_eq!("Ất Tỵ", can_chi(&lunar));
//! ```

pub mod date;
pub mod error;
pub mod grid;
pub mod notify;
pub mod settings;
pub mod vietnamese;
pub mod wisdom;
pub mod zodiac;

pub use date::{Date, SolarDate, YearType};
pub use error::{Error, Result};
pub use grid::{DayInfo, MonthGrid};
pub use notify::{Observance, Reminder, Reminders, UpcomingEvent, upcoming_events};
pub use settings::Settings;
pub use vietnamese::LunarDate;
pub use wisdom::{WisdomSource, daily_wisdom, wisdom_prompt};
pub use zodiac::ZodiacSign;
