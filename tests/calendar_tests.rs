mod common;
use common::d;
use rinactive::core::calendar::{HolidayCalendar, HolidayMode};
use rinactive::errors::AppError;
use rinactive::input::holidays::parse_holidays;
use rinactive::models::holiday::HolidayEntry;

#[test]
fn test_anchored_holidays_match_reference_year_only() {
    let entries = vec![HolidayEntry::new(12, 25)];
    let cal = HolidayCalendar::load(&entries, 2022, HolidayMode::Anchored).unwrap();

    assert!(cal.contains(d(2022, 12, 25)));
    assert!(!cal.contains(d(2023, 12, 25)));
    assert!(!cal.contains(d(2022, 12, 26)));
}

#[test]
fn test_recurring_holidays_match_every_year() {
    let entries = vec![HolidayEntry::new(12, 25), HolidayEntry::new(2, 29)];
    let cal = HolidayCalendar::load(&entries, 2022, HolidayMode::Recurring).unwrap();

    assert!(cal.contains(d(2022, 12, 25)));
    assert!(cal.contains(d(2023, 12, 25)));
    assert!(cal.contains(d(2024, 2, 29)));
    assert!(!cal.contains(d(2024, 2, 28)));
}

#[test]
fn test_duplicates_collapse() {
    let entries = vec![
        HolidayEntry::new(7, 4),
        HolidayEntry::new(7, 4),
        HolidayEntry::new(1, 1),
    ];
    let cal = HolidayCalendar::load(&entries, 2022, HolidayMode::Anchored).unwrap();
    assert_eq!(cal.len(), 2);
}

#[test]
fn test_invalid_month_is_rejected() {
    let entries = vec![HolidayEntry::new(13, 1)];
    let err = HolidayCalendar::load(&entries, 2022, HolidayMode::Anchored).unwrap_err();
    assert!(matches!(err, AppError::InvalidHolidayData { .. }));
}

#[test]
fn test_feb_29_needs_a_leap_reference_year() {
    let entries = vec![HolidayEntry::new(2, 29)];
    assert!(HolidayCalendar::load(&entries, 2022, HolidayMode::Anchored).is_err());
    assert!(HolidayCalendar::load(&entries, 2024, HolidayMode::Anchored).is_ok());
}

#[test]
fn test_json_accepts_numbers_and_numeric_strings() {
    let entries = parse_holidays(
        r#"[
            {"name": "Independence Day", "month": 7, "day": 4},
            {"month": "11", "day": "24"}
        ]"#,
    )
    .unwrap();
    let cal = HolidayCalendar::load(&entries, 2022, HolidayMode::Anchored).unwrap();

    assert!(cal.contains(d(2022, 7, 4)));
    assert!(cal.contains(d(2022, 11, 24)));
}

#[test]
fn test_json_non_numeric_string_is_invalid_holiday() {
    let entries = parse_holidays(r#"[{"month": "July", "day": 4}]"#).unwrap();
    let err = HolidayCalendar::load(&entries, 2022, HolidayMode::Anchored).unwrap_err();
    assert!(matches!(err, AppError::InvalidHolidayData { .. }));
}

#[test]
fn test_json_missing_field_is_an_error() {
    assert!(matches!(
        parse_holidays(r#"[{"month": 7}]"#),
        Err(AppError::Json(_))
    ));
}
