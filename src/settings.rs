//! User settings persisted between runs.
//!
//! Only two values are kept: the zodiac sign used to personalise the daily
//! wisdom, and how many days ahead Rằm/Mùng 1 reminders fire.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::zodiac::ZodiacSign;

/// Lead times offered for reminders, in days.
pub const LEAD_DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=3;

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Zodiac sign, if the user picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<ZodiacSign>,

    /// Days before an observance at which the countdown reminder fires.
    #[serde(default = "default_notify_days_before")]
    pub notify_days_before: u32,
}

fn default_notify_days_before() -> u32 {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zodiac: None,
            notify_days_before: default_notify_days_before(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text and validates them.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loading settings");
                Self::from_toml(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes settings to `path` as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Sets the reminder lead time, rejecting values outside
    /// [`LEAD_DAYS_RANGE`].
    pub fn set_notify_days_before(&mut self, days: u32) -> Result<()> {
        check_lead_days(days)?;
        self.notify_days_before = days;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        check_lead_days(self.notify_days_before)
    }
}

fn check_lead_days(days: u32) -> Result<()> {
    if LEAD_DAYS_RANGE.contains(&days) {
        Ok(())
    } else {
        Err(Error::InvalidLeadDays { days })
    }
}
