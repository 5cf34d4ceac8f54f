use chrono::NaiveDate;
use taqwim_calendar::{HijriConverter, UmmAlQuraHijri, hijri_month};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn shift_moves_day_by_exactly_one() {
    let mut day = date(2024, 1, 1);
    for _ in 0..400 {
        let next = day.succ_opt().unwrap();
        let a = hijri_month(day, &UmmAlQuraHijri::new(), -1).unwrap();
        let b = hijri_month(next, &UmmAlQuraHijri::new(), -1).unwrap();
        let today_a = a.cells()[a.today_index().unwrap()].day().unwrap();
        let today_b = b.cells()[b.today_index().unwrap()].day().unwrap();
        assert_eq!(
            u32::from(today_b),
            u32::from(today_a) % u32::from(a.days_in_month()) + 1,
            "day did not advance by one from {day}"
        );
        day = next;
    }
}

#[test]
fn shift_is_applied_before_conversion() {
    for shift in -3..=3i64 {
        let today = date(2025, 3, 10);
        let shifted = today
            .checked_add_signed(chrono::TimeDelta::days(shift))
            .unwrap();
        let expected = UmmAlQuraHijri::new().to_hijri(shifted).unwrap();
        let grid = hijri_month(today, &UmmAlQuraHijri::new(), shift).unwrap();
        assert_eq!(grid.year(), expected.year());
        assert_eq!(grid.month(), expected.month());
        let today_cell = grid.cells()[grid.today_index().unwrap()];
        assert_eq!(today_cell.day(), Some(expected.day()));
    }
}

#[test]
fn grid_invariants_hold_for_a_year() {
    let mut day = date(2025, 1, 1);
    for _ in 0..366 {
        let grid = hijri_month(day, &UmmAlQuraHijri::new(), -1).unwrap();
        assert!((29..=30).contains(&grid.days_in_month()));
        assert_eq!(
            grid.cells().len(),
            grid.first_weekday_offset() as usize + grid.days_in_month() as usize
        );
        assert_eq!(grid.cells().iter().filter(|c| c.is_today()).count(), 1);
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn ramadan_1446() {
    // Shifted date 2025-03-01 is 1 Ramadan 1446, a Saturday.
    let grid = hijri_month(date(2025, 3, 2), &UmmAlQuraHijri::new(), -1).unwrap();
    assert_eq!(grid.month(), 9);
    assert_eq!(grid.year(), 1446);
    assert_eq!(grid.first_weekday_offset(), 6);
    assert_eq!(grid.today_index(), Some(6));
    assert_eq!(grid.days_in_month(), 29);
}

#[test]
fn muharram_1446_follows_umm_al_qura() {
    // 2024-07-07 opens 1446 in the Umm al-Qura tables; 2024-07-06 is 30 Dhu al-Hijjah.
    let grid = hijri_month(date(2024, 7, 7), &UmmAlQuraHijri::new(), 0).unwrap();
    assert_eq!((grid.year(), grid.month()), (1446, 1));
    assert_eq!(grid.first_weekday_offset(), 0);
    assert_eq!(grid.today_index(), Some(0));

    let grid = hijri_month(date(2024, 7, 7), &UmmAlQuraHijri::new(), -1).unwrap();
    assert_eq!((grid.year(), grid.month()), (1445, 12));
    assert_eq!(grid.days_in_month(), 30);
}
