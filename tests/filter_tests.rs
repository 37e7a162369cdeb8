//! Date-range filter state and derivation tests.

use chrono::NaiveDate;

use chatlens::filter::{DatePreset, DateRange, DateRangeFilter};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const TODAY: fn() -> NaiveDate = || day(2024, 6, 15);

#[test]
fn default_filter_is_last_month_ending_today() {
    let filter = DateRangeFilter::new_on(TODAY());

    assert_eq!(filter.preset(), DatePreset::LastMonth);
    assert_eq!(filter.range().from, Some(day(2024, 5, 17)));
    assert_eq!(filter.range().to, Some(TODAY()));
}

#[test]
fn non_custom_presets_keep_from_before_to_and_end_today() {
    let today = TODAY();

    for preset in [DatePreset::Today, DatePreset::LastMonth, DatePreset::LastYear] {
        let mut filter = DateRangeFilter::new_on(today);
        filter.set_preset_on(preset, today);

        let range = filter.range();
        let (from, to) = (range.from.unwrap(), range.to.unwrap());
        assert!(from <= to, "{preset:?} produced from > to");
        assert_eq!(to, today, "{preset:?} must end on today");
    }
}

#[test]
fn today_preset_collapses_range_to_single_day() {
    let mut filter = DateRangeFilter::new_on(TODAY());
    filter.set_preset_on(DatePreset::Today, TODAY());

    assert_eq!(filter.range().from, Some(TODAY()));
    assert_eq!(filter.range().to, Some(TODAY()));
}

#[test]
fn custom_preset_leaves_range_untouched() {
    let mut filter = DateRangeFilter::new_on(TODAY());
    let before = filter.range();

    filter.set_preset_on(DatePreset::Custom, TODAY());

    assert_eq!(filter.range(), before);
    assert_eq!(filter.preset(), DatePreset::Custom);
}

#[test]
fn setting_a_full_range_implies_custom() {
    let mut filter = DateRangeFilter::new_on(TODAY());
    filter.set_range(DateRange::new(day(2024, 1, 1), day(2024, 1, 31)));

    assert_eq!(filter.preset(), DatePreset::Custom);
}

#[test]
fn query_params_is_pure() {
    let mut filter = DateRangeFilter::new_on(TODAY());
    filter.set_preset_on(DatePreset::LastYear, TODAY());

    assert_eq!(filter.query_params(), filter.query_params());
}

#[test]
fn preset_flag_wins_over_stored_dates() {
    let mut filter = DateRangeFilter::new_on(TODAY());
    filter.set_range(DateRange::new(day(2024, 1, 1), day(2024, 1, 31)));
    filter.set_preset_on(DatePreset::Today, TODAY());

    assert_eq!(filter.query_params(), "?today=true");
}

#[test]
fn preset_flags_match_the_wire_grammar() {
    let cases = [
        (DatePreset::Today, "?today=true"),
        (DatePreset::LastMonth, "?last_month=true"),
        (DatePreset::LastYear, "?last_year=true"),
    ];

    for (preset, expected) in cases {
        let mut filter = DateRangeFilter::new_on(TODAY());
        filter.set_preset_on(preset, TODAY());
        assert_eq!(filter.query_params(), expected);
    }
}

#[test]
fn custom_range_emits_start_and_end_dates() {
    let mut filter = DateRangeFilter::new_on(TODAY());
    filter.set_range(DateRange::new(day(2024, 1, 1), day(2024, 1, 31)));

    assert_eq!(
        filter.query_params(),
        "?start_date=2024-01-01&end_date=2024-01-31"
    );
}

#[test]
fn custom_range_without_from_yields_empty_params() {
    let mut filter = DateRangeFilter::new_on(TODAY());
    filter.set_range(DateRange {
        from: None,
        to: Some(day(2024, 1, 31)),
    });
    filter.set_preset_on(DatePreset::Custom, TODAY());

    assert_eq!(filter.query_params(), "");
}

#[test]
fn preset_labels_and_custom_formatting() {
    let mut filter = DateRangeFilter::new_on(TODAY());
    filter.set_preset_on(DatePreset::Today, TODAY());
    assert_eq!(filter.format_range(), "Today");

    filter.set_preset_on(DatePreset::LastMonth, TODAY());
    assert_eq!(filter.format_range(), "Last Month");

    filter.set_preset_on(DatePreset::LastYear, TODAY());
    assert_eq!(filter.format_range(), "Last year");

    filter.set_range(DateRange::new(day(2024, 1, 1), day(2024, 1, 31)));
    assert_eq!(filter.format_range(), "Jan 1, 2024 - Jan 31, 2024");
}
