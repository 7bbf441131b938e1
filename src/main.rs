mod cli;
mod logging;
mod render;

use std::path::Path;
use std::process;

use amlich::{Date, DayInfo, MonthGrid, Reminders, Settings, ZodiacSign, upcoming_events};
use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command, DayArgs, MonthArgs, SettingsCommand};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli.settings)
        .with_context(|| format!("failed to load settings: {}", cli.settings.display()))?;
    let today = today()?;
    info!(today = %today, "starting");

    match cli.command {
        Command::Convert { date } => {
            print!("{}", render::day(&DayInfo::new(date.date(), today)));
        }
        Command::Month(args) => month(args, today)?,
        Command::Day(args) => day(args, today, &settings),
        Command::Upcoming => upcoming(today, &settings),
        Command::Settings(command) => settings_command(command, settings, &cli.settings)?,
    }
    Ok(())
}

fn today() -> Result<Date> {
    let now = chrono::Local::now().date_naive();
    Date::from_gregorian(now.year(), now.month() as i32, now.day() as i32)
        .context("system date out of range")
}

fn month(args: MonthArgs, today: Date) -> Result<()> {
    let current = today.solar();
    let year = args.year.unwrap_or(current.year);
    let month = args.month.unwrap_or(current.month);
    let grid = MonthGrid::new(year, month, today)
        .with_context(|| format!("cannot build grid for {year:04}-{month:02}"))?;
    print!("{}", render::month(&grid));
    Ok(())
}

fn day(args: DayArgs, today: Date, settings: &Settings) {
    let date = args.date.map_or(today, |solar| solar.date());
    let info = DayInfo::new(date, today);
    print!("{}", render::day(&info));
    if args.prompt {
        println!();
        println!("{}", amlich::wisdom_prompt(&info, settings.zodiac));
    } else {
        // No wisdom service is configured for the terminal.
        println!("{}", amlich::wisdom::fallback_blessing(settings.zodiac));
    }
}

fn upcoming(today: Date, settings: &Settings) {
    let events = upcoming_events(today);
    if events.is_empty() {
        println!("Không có ngày Rằm/Mùng 1 trong {} ngày tới.", amlich::notify::LOOKAHEAD_DAYS);
    }
    for event in &events {
        println!("{}", render::event(event));
    }
    for reminder in Reminders::new().due(today, settings.notify_days_before) {
        println!();
        println!("{}", reminder.title);
        println!("{}", reminder.body);
    }
}

fn settings_command(command: SettingsCommand, mut settings: Settings, path: &Path) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let zodiac = settings.zodiac.map_or("(chưa chọn)", |sign| sign.name());
            println!("Cung hoàng đạo: {zodiac}");
            println!("Nhắc trước: {} ngày", settings.notify_days_before);
            return Ok(());
        }
        SettingsCommand::SetZodiac { sign } => {
            settings.zodiac = Some(sign.parse::<ZodiacSign>()?);
        }
        SettingsCommand::ClearZodiac => settings.zodiac = None,
        SettingsCommand::SetLead { days } => {
            settings.set_notify_days_before(days)?;
            println!("{}", amlich::notify::enabled_message(days));
        }
    }
    settings
        .save(path)
        .with_context(|| format!("failed to save settings: {}", path.display()))
}
