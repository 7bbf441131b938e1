use std::path::PathBuf;

use amlich::SolarDate;
use clap::{Parser, Subcommand};

/// Vietnamese lunar calendar.
#[derive(Parser)]
#[command(
    name = "amlich",
    version,
    about = "Vietnamese lunar calendar with Rằm/Mùng 1 reminders"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the TOML settings file.
    #[arg(short, long, global = true, default_value = "amlich.toml")]
    pub settings: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date into the lunar calendar.
    Convert {
        /// Date in YYYY-MM-DD form.
        date: SolarDate,
    },
    /// Print the grid of a month.
    Month(MonthArgs),
    /// Show the details of a day.
    Day(DayArgs),
    /// List observances in the next few days and the reminders due today.
    Upcoming,
    /// Show or change the settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Year, defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month (1-12), defaults to the current month.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date in YYYY-MM-DD form, defaults to today.
    pub date: Option<SolarDate>,

    /// Print the prompt that would be sent to the wisdom service.
    #[arg(long)]
    pub prompt: bool,
}

/// `settings` subcommands.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the current settings.
    Show,
    /// Choose a zodiac sign, by Vietnamese or English name.
    SetZodiac { sign: String },
    /// Forget the zodiac sign.
    ClearZodiac,
    /// Set how many days (1-3) before Rằm/Mùng 1 to remind.
    SetLead { days: u32 },
}
