#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use weeks_from::{
    BusinessDayAdvancer, ExclusionPolicy, HolidayCalendar, WeekOffsetEngine, WeekRequest,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn christmas_only() -> HolidayCalendar {
    HolidayCalendar::from_dates([date(2024, 12, 24), date(2024, 12, 25)])
}

#[test]
fn flat_addition_is_exact_multiple_of_seven() {
    let engine = WeekOffsetEngine::default();
    let start = date(2025, 1, 6);
    for w in 0..60 {
        let req = WeekRequest::new(start, w, ExclusionPolicy::default());
        let target = engine.compute(&req).unwrap();
        assert_eq!(target.signed_duration_since(start).num_days(), w * 7);
    }
}

#[test]
fn monday_one_week_without_exclusions() {
    let engine = WeekOffsetEngine::default();
    let req = WeekRequest::new(date(2025, 1, 6), 1, ExclusionPolicy::default());
    let result = engine.calculate(&req).unwrap();
    assert_eq!(result.target_date, date(2025, 1, 13));
    assert_eq!(result.countdown, "1 weeks and 0 days from start date");
}

#[test]
fn monday_one_week_excluding_weekends() {
    let engine = WeekOffsetEngine::default();
    let req = WeekRequest::new(date(2025, 1, 6), 1, ExclusionPolicy::new(true, false));
    let target = engine.compute(&req).unwrap();
    assert_eq!(target, date(2025, 1, 15));
    assert_eq!(target.weekday(), Weekday::Wed);
}

#[test]
fn friday_four_weeks_flat_versus_business_walk() {
    let engine = WeekOffsetEngine::default();
    let friday = date(2025, 1, 3);

    let flat = engine
        .calculate(&WeekRequest::new(friday, 4, ExclusionPolicy::default()))
        .unwrap();
    assert_eq!(flat.target_date, date(2025, 1, 31));

    let walked = engine
        .calculate(&WeekRequest::new(friday, 4, ExclusionPolicy::new(true, false)))
        .unwrap();
    assert_eq!(walked.target_date, date(2025, 2, 12));
    assert!(walked.target_date > flat.target_date);
    assert_eq!(walked.countdown, "5 weeks and 5 days from start date");
}

#[test]
fn weekend_walk_covers_exactly_seven_business_days_per_week() {
    let engine = WeekOffsetEngine::default();
    let policy = ExclusionPolicy::new(true, false);
    let advancer = engine.advancer(policy);
    for start in date(2025, 1, 1).iter_days().take(14) {
        for w in 0..=10 {
            let target = engine.compute(&WeekRequest::new(start, w, policy)).unwrap();
            let weekdays = start
                .iter_days()
                .skip(1)
                .take_while(|d| *d <= target)
                .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
                .count() as i64;
            assert_eq!(weekdays, 7 * w, "start {start}, weeks {w}");
            assert_eq!(advancer.business_days_between(start, target), 7 * w);
        }
    }
}

#[test]
fn holidays_are_skipped_when_excluded() {
    let engine = WeekOffsetEngine::new(christmas_only());
    let start = date(2024, 12, 23);
    let result = engine
        .calculate(&WeekRequest::new(start, 1, ExclusionPolicy::new(false, true)))
        .unwrap();
    // 24 et 25 sautés : 9 jours calendaires pour 7 jours comptés
    assert_eq!(result.target_date, date(2025, 1, 1));
    assert_eq!(result.target_date.signed_duration_since(start).num_days(), 9);
    assert_eq!(result.countdown, "1 weeks and 2 days from start date");
}

#[test]
fn holidays_are_ignored_when_flag_is_off() {
    let engine = WeekOffsetEngine::new(christmas_only());
    let target = engine
        .compute(&WeekRequest::new(
            date(2024, 12, 23),
            1,
            ExclusionPolicy::new(true, false),
        ))
        .unwrap();
    // seul le week-end du 28/29 est sauté
    assert_eq!(target, date(2025, 1, 1));
}

#[test]
fn reference_table_skips_year_end_observances() {
    let engine = WeekOffsetEngine::new(HolidayCalendar::reference());
    let start = date(2024, 12, 23);

    let holidays_only = engine
        .compute(&WeekRequest::new(start, 1, ExclusionPolicy::new(false, true)))
        .unwrap();
    assert_eq!(holidays_only, date(2025, 1, 3));

    let both = engine
        .compute(&WeekRequest::new(start, 1, ExclusionPolicy::new(true, true)))
        .unwrap();
    assert_eq!(both, date(2025, 1, 7));
}

#[test]
fn zero_weeks_returns_start() {
    let engine = WeekOffsetEngine::default();
    let start = date(2025, 1, 4);
    for policy in [
        ExclusionPolicy::new(false, false),
        ExclusionPolicy::new(true, false),
        ExclusionPolicy::new(false, true),
        ExclusionPolicy::new(true, true),
    ] {
        let result = engine.calculate(&WeekRequest::new(start, 0, policy)).unwrap();
        assert_eq!(result.target_date, start);
        assert_eq!(result.countdown, "0 weeks and 0 days before start date");
    }
}

#[test]
fn negative_weeks_walk_backwards() {
    let engine = WeekOffsetEngine::default();
    let start = date(2025, 1, 15);

    let flat = engine
        .calculate(&WeekRequest::new(start, -1, ExclusionPolicy::default()))
        .unwrap();
    assert_eq!(flat.target_date, date(2025, 1, 8));
    assert_eq!(flat.countdown, "1 weeks and 0 days before start date");

    let walked = engine
        .compute(&WeekRequest::new(start, -1, ExclusionPolicy::new(true, false)))
        .unwrap();
    assert_eq!(walked, date(2025, 1, 6));
}

#[test]
fn advancer_counts_signed_business_days() {
    let calendar = christmas_only();
    let advancer = BusinessDayAdvancer::new(&calendar, ExclusionPolicy::new(true, true));
    assert!(!advancer.is_business_day(date(2024, 12, 25)));
    assert!(!advancer.is_business_day(date(2024, 12, 28)));
    assert!(advancer.is_business_day(date(2024, 12, 26)));
    assert_eq!(
        advancer.business_days_between(date(2024, 12, 23), date(2024, 12, 31)),
        4
    );
    assert_eq!(
        advancer.business_days_between(date(2024, 12, 31), date(2024, 12, 23)),
        -4
    );
    assert_eq!(advancer.advance(date(2024, 12, 23), 4).unwrap(), date(2024, 12, 31));
}

#[test]
fn overflow_is_reported_not_panicking() {
    let engine = WeekOffsetEngine::default();
    let req = WeekRequest::new(NaiveDate::MAX, 1, ExclusionPolicy::default());
    assert!(engine.compute(&req).is_err());

    let req = WeekRequest::new(date(2025, 1, 1), i64::MAX, ExclusionPolicy::default());
    assert!(engine.compute(&req).is_err());
}
