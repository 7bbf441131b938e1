//! Month view: a 6×7 grid of days, Monday first.

use tracing::debug;

use crate::date::{Date, SolarDate, days_in_month};
use crate::error::Result;
use crate::notify::Observance;
use crate::vietnamese::LunarDate;

/// Number of cells in a month grid (six weeks).
pub const GRID_CELLS: usize = 42;

/// Everything shown for a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo {
    pub solar: SolarDate,
    pub lunar: LunarDate,
    /// Can-Chi name of the lunar year, e.g. "Ất Tỵ".
    pub can_chi: String,
    pub is_today: bool,
    /// `false` for padding days taken from the neighbouring months.
    pub in_month: bool,
}

impl DayInfo {
    /// Builds the information for `date`.
    pub fn new(date: Date, today: Date) -> Self {
        let solar = date.solar();
        let lunar = solar.lunar();
        Self {
            solar,
            lunar,
            can_chi: lunar.can_chi(),
            is_today: date == today,
            in_month: true,
        }
    }
    /// Returns the observance falling on this day, if any.
    pub fn observance(&self) -> Option<Observance> {
        Observance::of(&self.lunar)
    }
    /// `true` if the day is a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.solar.date().day_of_week() == 7
    }
}

/// The grid for one solar month.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    cells: Vec<DayInfo>,
}

impl MonthGrid {
    /// Builds the grid of `year`-`month`, padded with the days of the
    /// previous and next months so that it starts on a Monday and holds
    /// exactly [`GRID_CELLS`] days.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, MonthGrid};
    ///
    /// let today = Date::from_gregorian(2025, 2, 12).unwrap();
    /// let grid = MonthGrid::new(2025, 2, today).unwrap();
    ///
    /// assert_eq!(42, grid.cells().len());
    /// assert_eq!("2025-01-27", grid.cells()[0].solar.date().iso_gregorian());
    /// ```
    pub fn new(year: i32, month: u32, today: Date) -> Result<Self> {
        let first = Date::from_gregorian(year, month as i32, 1)?;
        let last = days_in_month(year, month as i32)?;
        let start = first + -(first.day_of_week() as i32 - 1);

        let cells: Vec<_> = (0..GRID_CELLS as i32)
            .map(|i| {
                let date = start + i;
                let mut info = DayInfo::new(date, today);
                info.in_month = (first..first + last as i32).contains(&date);
                info
            })
            .collect();
        debug!(year, month, start = %start, "built month grid");

        Ok(Self { year, month, cells })
    }

    /// Grid of the month containing `today`.
    pub fn containing(today: Date) -> Result<Self> {
        let solar = today.solar();
        Self::new(solar.year, solar.month, today)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[DayInfo] {
        &self.cells
    }

    /// The rows of the grid, seven days each.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayInfo]> {
        self.cells.chunks(7)
    }

    /// `(year, month)` of the previous month.
    pub fn prev(&self) -> (i32, u32) {
        if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }

    /// `(year, month)` of the next month.
    pub fn next(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn grid_shape() {
        for (y, m) in [(2025, 1), (2025, 2), (2025, 6), (2024, 12), (2026, 3)] {
            let grid = MonthGrid::new(y, m, day(2025, 1, 1)).unwrap();
            assert_eq!(GRID_CELLS, grid.cells().len());
            assert_eq!(6, grid.weeks().count());
            assert_eq!(1, grid.cells()[0].solar.date().day_of_week());
            for pair in grid.cells().windows(2) {
                assert_eq!(1, pair[1].solar.date() - pair[0].solar.date());
            }
            let in_month: Vec<_> = grid.cells().iter().filter(|c| c.in_month).collect();
            assert_eq!(days_in_month(y, m as i32).unwrap() as usize, in_month.len());
            assert!(in_month.iter().all(|c| c.solar.month == m && c.solar.year == y));
            assert_eq!(1, in_month[0].solar.day);
        }
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_padding() {
        // September 2025 starts on a Monday.
        let grid = MonthGrid::new(2025, 9, day(2025, 9, 1)).unwrap();
        assert!(grid.cells()[0].in_month);
        assert_eq!(1, grid.cells()[0].solar.day);
        assert!(!grid.cells()[41].in_month);
    }

    #[test]
    fn today_flag() {
        let today = day(2025, 2, 12);
        let grid = MonthGrid::new(2025, 2, today).unwrap();
        let todays: Vec<_> = grid.cells().iter().filter(|c| c.is_today).collect();
        assert_eq!(1, todays.len());
        assert_eq!(12, todays[0].solar.day);

        let grid = MonthGrid::new(2025, 5, today).unwrap();
        assert!(grid.cells().iter().all(|c| !c.is_today));
    }

    #[test]
    fn cells_carry_lunar_data() {
        let grid = MonthGrid::new(2025, 2, day(2025, 2, 1)).unwrap();
        let full_moon = grid
            .cells()
            .iter()
            .find(|c| c.in_month && c.solar.day == 12)
            .unwrap();
        assert_eq!((15, 1, 2025), (full_moon.lunar.day, full_moon.lunar.month, full_moon.lunar.year));
        assert_eq!("Ất Tỵ", full_moon.can_chi);
        assert_eq!(Some(Observance::FullMoon), full_moon.observance());
    }

    #[test]
    fn navigation() {
        let grid = MonthGrid::new(2025, 1, day(2025, 1, 1)).unwrap();
        assert_eq!((2024, 12), grid.prev());
        assert_eq!((2025, 2), grid.next());
        let grid = MonthGrid::new(2025, 12, day(2025, 1, 1)).unwrap();
        assert_eq!((2026, 1), grid.next());
    }

    #[test]
    fn invalid_month() {
        assert!(MonthGrid::new(2025, 13, day(2025, 1, 1)).is_err());
    }

    #[test]
    fn containing_today() {
        let grid = MonthGrid::containing(day(2024, 2, 29)).unwrap();
        assert_eq!((2024, 2), (grid.year, grid.month));
        assert!(MonthGrid::containing(Date::from_jdn(-105093)).is_err());
    }

    #[test]
    fn years_out_of_range() {
        let today = day(2025, 1, 1);
        assert!(matches!(
            MonthGrid::new(-5000, 3, today),
            Err(crate::Error::YearOutOfRange { year: -5000 })
        ));
        assert!(MonthGrid::new(2_000_000_000, 1, today).is_err());

        // Padding reaches outside the supported years but stays well formed.
        let first = MonthGrid::new(-4712, 1, today).unwrap();
        assert_eq!((29, 12, -4713), {
            let c = &first.cells()[0].solar;
            (c.day, c.month, c.year)
        });
        let last = MonthGrid::new(9999, 12, today).unwrap();
        assert_eq!((9, 1, 10000), {
            let c = &last.cells()[41].solar;
            (c.day, c.month, c.year)
        });
    }
}
