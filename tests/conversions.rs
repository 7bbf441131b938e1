use amlich::date::jd_from_date;
use amlich::vietnamese::{ANCHOR_JD, can_chi, convert_solar_to_lunar, lunar_month_days};
use amlich::{Date, MonthGrid, Observance, SolarDate, upcoming_events};

#[test]
fn every_day_of_2024_to_2026_is_in_range() {
    let start = Date::from_gregorian(2024, 1, 1).unwrap();
    let end = Date::from_gregorian(2027, 1, 1).unwrap();
    for offset in 0..end - start {
        let date = start + offset;
        let lunar = date.lunar();
        assert!((1..=12).contains(&lunar.month), "{date}: {lunar:?}");
        assert!(
            (1..=lunar_month_days(lunar.month, lunar.year)).contains(&lunar.day),
            "{date}: {lunar:?}"
        );
        assert_eq!(date.jdn(), lunar.jd);
        assert!(!lunar.leap);
    }
}

#[test]
fn validated_and_raw_conversions_agree() {
    for s in ["2023-06-15", "2024-02-29", "2025-01-29", "2025-12-31", "2031-07-04"] {
        let solar: SolarDate = s.parse().unwrap();
        let raw = convert_solar_to_lunar(solar.day as i32, solar.month as i32, solar.year);
        assert_eq!(raw, solar.lunar(), "{s}");
        assert_eq!(raw, solar.date().lunar(), "{s}");
        assert_eq!(jd_from_date(solar.day as i32, solar.month as i32, solar.year), raw.jd);
    }
}

#[test]
fn month_rollover_after_29_and_30_day_months() {
    // Lunar 1/2025 has 30 days, 2/2025 has 29.
    let mut date = Date::from_jdn(ANCHOR_JD);
    for (month, len) in [(1, 30), (2, 29), (3, 30)] {
        assert_eq!(len, lunar_month_days(month, 2025));
        let last = date + (len as i32 - 1);
        assert_eq!((len, month), (last.lunar().day, last.lunar().month));
        date = last + 1;
        assert_eq!((1, month + 1), (date.lunar().day, date.lunar().month));
    }
}

#[test]
fn year_rollover_changes_can_chi() {
    let before = convert_solar_to_lunar(17, 1, 2026);
    let after = convert_solar_to_lunar(18, 1, 2026);
    assert_eq!((29, 12, 2025), (before.day, before.month, before.year));
    assert_eq!((1, 1, 2026), (after.day, after.month, after.year));
    assert_eq!("Ất Tỵ", can_chi(&before));
    assert_eq!("Bính Ngọ", can_chi(&after));
}

#[test]
fn grid_and_events_agree() {
    let today = Date::from_gregorian(2025, 3, 12).unwrap();
    let grid = MonthGrid::new(2025, 3, today).unwrap();
    let pos = grid.cells().iter().position(|c| c.is_today).unwrap();

    let from_grid: Vec<_> = grid.cells()[pos..=pos + 3]
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.observance().map(|o| (i as u32, o)))
        .collect();
    let from_scan: Vec<_> = upcoming_events(today)
        .into_iter()
        .map(|e| (e.days_until, e.observance))
        .collect();

    assert_eq!(vec![(2, Observance::FullMoon)], from_scan);
    assert_eq!(from_scan, from_grid);
}
