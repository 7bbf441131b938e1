//! Plain-text rendering for the terminal.

use amlich::vietnamese::fmt;
use amlich::{DayInfo, MonthGrid, UpcomingEvent};

const CELL_WIDTH: usize = 9;

/// Renders a month grid, one week per line. Each cell shows the solar day
/// and, below it, the lunar day; observances are marked with `*` and today
/// is bracketed. Padding days from neighbouring months are dimmed to `·`.
pub fn month(grid: &MonthGrid) -> String {
    let mut out = format!("{} {}\n", fmt::month(grid.month), grid.year);
    for dow in 1..=7 {
        out.push_str(&format!("{:^CELL_WIDTH$}", fmt::weekday_long(dow)));
    }
    out.push('\n');

    for week in grid.weeks() {
        for cell in week {
            let solar = if !cell.in_month {
                "·".to_owned()
            } else if cell.is_today {
                format!("[{}]", cell.solar.day)
            } else {
                cell.solar.day.to_string()
            };
            out.push_str(&format!("{solar:^CELL_WIDTH$}"));
        }
        out.push('\n');
        for cell in week {
            let mark = if cell.observance().is_some() { "*" } else { "" };
            let lunar = format!("{}{mark}", fmt::cell_label(&cell.lunar));
            out.push_str(&format!("{lunar:^CELL_WIDTH$}"));
        }
        out.push('\n');
    }
    out
}

/// Renders the details of a single day.
pub fn day(info: &DayInfo) -> String {
    let date = info.solar.date();
    let mut out = format!(
        "{}, {} ({})\nÂm lịch: ngày {} {} năm {}\n",
        fmt::weekday(date.day_of_week()),
        info.solar,
        date.iso_gregorian(),
        info.lunar.day,
        fmt::month(info.lunar.month),
        info.can_chi
    );
    if let Some(observance) = info.observance() {
        out.push_str(&format!("{observance}\n"));
    }
    out
}

/// Renders one upcoming event.
pub fn event(event: &UpcomingEvent) -> String {
    match event.days_until {
        0 => format!("Hôm nay ({}): {}", event.date_str(), event.observance),
        1 => format!("Ngày mai ({}): {}", event.date_str(), event.observance),
        n => format!("{n} ngày nữa ({}): {}", event.date_str(), event.observance),
    }
}
