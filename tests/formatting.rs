#![forbid(unsafe_code)]
use chrono::NaiveDate;
use weeks_from::{
    countdown::{Countdown, Direction},
    describe, format_date,
    format::{batch_heading, format_with_selector, quick_link_slug},
    share_text, DateLayout,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn same_day_renders_as_before() {
    let d = date(2025, 3, 7);
    assert_eq!(describe(d, d), "0 weeks and 0 days before start date");
}

#[test]
fn countdown_splits_weeks_and_days() {
    let start = date(2025, 1, 6);
    assert_eq!(
        describe(start, date(2025, 1, 16)),
        "1 weeks and 3 days from start date"
    );
    assert_eq!(
        describe(start, date(2024, 12, 20)),
        "2 weeks and 3 days before start date"
    );

    let c = Countdown::between(start, date(2025, 3, 1));
    assert_eq!(c.direction, Direction::FromStart);
    assert_eq!(c.total_days(), 54);
    assert_eq!((c.weeks, c.days), (7, 5));
}

#[test]
fn layouts_are_distinguishable() {
    let d = date(2025, 3, 7);
    assert_eq!(format_date(d, DateLayout::Mdy), "03/07/2025");
    assert_eq!(format_date(d, DateLayout::Dmy), "07/03/2025");
    assert_eq!(format_date(d, DateLayout::Iso), "2025-03-07");
}

#[test]
fn unknown_selector_falls_back_to_mdy() {
    let d = date(2025, 12, 1);
    assert_eq!(DateLayout::from_selector("YYYY/MM/DD"), DateLayout::Mdy);
    assert_eq!(DateLayout::from_selector(""), DateLayout::Mdy);
    assert_eq!(DateLayout::from_selector("dd/mm/yyyy"), DateLayout::Dmy);
    assert_eq!(DateLayout::from_selector("iso"), DateLayout::Iso);
    assert_eq!(format_with_selector(d, "whatever"), "12/01/2025");
    assert_eq!(DateLayout::Dmy.to_string(), "DD/MM/YYYY");
}

#[test]
fn small_years_are_zero_padded() {
    let d = date(987, 1, 2);
    assert_eq!(format_date(d, DateLayout::Iso), "0987-01-02");
}

#[test]
fn presentation_strings() {
    assert_eq!(
        share_text("01/13/2025"),
        "01/13/2025 - calculated using Weeks From Today Calculator"
    );
    assert_eq!(batch_heading(12), "12 Weeks From Today");
    assert_eq!(quick_link_slug(52), "52-weeks-from-today");
}
