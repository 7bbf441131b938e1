//! Rằm and Mùng 1 observances, and the reminders announcing them.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, info};

use crate::date::{Date, SolarDate};
use crate::vietnamese::LunarDate;

/// How many days after today are scanned for observances.
pub const LOOKAHEAD_DAYS: u32 = 3;

/// Title shown on every reminder.
pub const REMINDER_TITLE: &str = "📅 Lịch Vạn Niên Nhắc Nhở";

/// One of the two monthly lunar observances.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Observance {
    /// Lunar day 1, Mùng 1.
    NewMoon,
    /// Lunar day 15, Rằm.
    FullMoon,
}

impl Observance {
    /// Returns the observance falling on `lunar`, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Observance;
    /// use amlich::vietnamese::convert_solar_to_lunar;
    ///
    /// let lunar = convert_solar_to_lunar(12, 2, 2025);
    /// assert_eq!(Some(Observance::FullMoon), Observance::of(&lunar));
    /// ```
    pub fn of(lunar: &LunarDate) -> Option<Self> {
        match lunar.day {
            1 => Some(Self::NewMoon),
            15 => Some(Self::FullMoon),
            _ => None,
        }
    }
    /// Display name, "Mùng 1" or "Rằm".
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMoon => "Mùng 1",
            Self::FullMoon => "Rằm",
        }
    }
    /// Stable key used to remember which reminders already fired.
    pub fn key(&self) -> &'static str {
        match self {
            Self::NewMoon => "MUNG_1",
            Self::FullMoon => "RAM",
        }
    }
}

impl fmt::Display for Observance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An observance within the look-ahead window.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UpcomingEvent {
    pub observance: Observance,
    /// `0` is today, `1` tomorrow, and so on.
    pub days_until: u32,
    pub date: SolarDate,
}

impl UpcomingEvent {
    /// Short date as shown to the user, `day/month`.
    pub fn date_str(&self) -> String {
        format!("{}/{}", self.date.day, self.date.month)
    }
    /// Key under which a reminder for this event is recorded.
    pub fn alert_key(&self) -> String {
        format!(
            "{}-{}-{}-{}-alerted-day-{}",
            self.observance.key(),
            self.date.day,
            self.date.month,
            self.date.year,
            self.days_until
        )
    }
}

/// Scans today and the following [`LOOKAHEAD_DAYS`] days for observances.
///
/// # Example
///
/// ```
/// use amlich::{Date, Observance, upcoming_events};
///
/// let today = Date::from_gregorian(2025, 2, 10).unwrap();
/// let events = upcoming_events(today);
///
/// assert_eq!(1, events.len());
/// assert_eq!(Observance::FullMoon, events[0].observance);
/// assert_eq!(2, events[0].days_until);
/// ```
pub fn upcoming_events(today: Date) -> Vec<UpcomingEvent> {
    (0..=LOOKAHEAD_DAYS)
        .filter_map(|days_until| {
            let date = (today + days_until as i32).solar();
            Observance::of(&date.lunar()).map(|observance| UpcomingEvent {
                observance,
                days_until,
                date,
            })
        })
        .collect()
}

/// A reminder ready to be shown.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Reminder {
    pub title: String,
    pub body: String,
    /// Reminders with the same tag replace each other.
    pub tag: String,
}

/// Decides which reminders are due, firing each one at most once.
///
/// A reminder fires on the day that is exactly `lead_days` before an
/// observance, and again on the observance day itself.
#[derive(Debug, Default, Clone)]
pub struct Reminders {
    alerted: HashSet<String>,
}

impl Reminders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reminders due at `today` that have not fired yet, and
    /// records them as fired.
    pub fn due(&mut self, today: Date, lead_days: u32) -> Vec<Reminder> {
        let mut due = Vec::new();
        for event in upcoming_events(today) {
            let body = if event.days_until == 0 {
                format!(
                    "Hôm nay là ngày {}! Chúc bạn ngày mới tốt lành.",
                    event.observance
                )
            } else if event.days_until == lead_days {
                format!(
                    "Còn {} ngày nữa là đến {} ({}).",
                    event.days_until,
                    event.observance,
                    event.date_str()
                )
            } else {
                continue;
            };

            if !self.alerted.insert(event.alert_key()) {
                debug!(key = %event.alert_key(), "reminder already shown");
                continue;
            }
            info!(observance = %event.observance, days_until = event.days_until, "reminder due");
            due.push(Reminder {
                title: REMINDER_TITLE.to_owned(),
                body,
                tag: format!("event-{}-{}", event.date.day, event.date.month),
            });
        }
        due
    }

    /// Number of reminders fired so far.
    pub fn fired(&self) -> usize {
        self.alerted.len()
    }
}

/// Confirmation shown when reminders are switched on.
pub fn enabled_message(lead_days: u32) -> String {
    format!("Đã bật! Sẽ nhắc trước {lead_days} ngày dịp Rằm/Mùng 1.")
}
