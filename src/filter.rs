//! Date-range filter state and its derived query-string fragment.
//!
//! The filter is pure state: presets rewrite the range deterministically
//! from "today", and the two derivations (`query_params`, `format_range`)
//! read current state without touching it. The query fragment is the only
//! thing the metrics gateway ever sees of this module.

use chrono::{Local, Months, NaiveDate};

/// Named shorthand date ranges offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    LastMonth,
    LastYear,
    Custom,
}

/// An inclusive calendar-date range; either endpoint may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }
}

/// Selected date range plus preset, with canonical derivations.
#[derive(Debug, Clone)]
pub struct DateRangeFilter {
    range: DateRange,
    preset: DatePreset,
}

impl DateRangeFilter {
    /// Default filter: last month (today − 29 days through today).
    pub fn new() -> Self {
        Self::new_on(Local::now().date_naive())
    }

    /// Same as [`DateRangeFilter::new`] with an explicit "today".
    pub fn new_on(today: NaiveDate) -> Self {
        Self {
            range: DateRange::new(today - chrono::Days::new(29), today),
            preset: DatePreset::LastMonth,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn preset(&self) -> DatePreset {
        self.preset
    }

    /// Select a preset, recomputing the range from the local calendar date.
    /// `Custom` leaves the stored range untouched.
    pub fn set_preset(&mut self, preset: DatePreset) {
        self.set_preset_on(preset, Local::now().date_naive());
    }

    /// Same as [`DateRangeFilter::set_preset`] with an explicit "today".
    pub fn set_preset_on(&mut self, preset: DatePreset, today: NaiveDate) {
        match preset {
            DatePreset::Today => self.range = DateRange::new(today, today),
            DatePreset::LastMonth => {
                self.range = DateRange::new(today - chrono::Days::new(29), today);
            }
            DatePreset::LastYear => {
                // Feb 29 minus a year lands on Feb 28.
                let from = today
                    .checked_sub_months(Months::new(12))
                    .unwrap_or(today);
                self.range = DateRange::new(from, today);
            }
            DatePreset::Custom => {}
        }
        self.preset = preset;
    }

    /// Overwrite the range directly. A range with both endpoints set
    /// implies the `Custom` preset.
    pub fn set_range(&mut self, range: DateRange) {
        if range.from.is_some() && range.to.is_some() {
            self.preset = DatePreset::Custom;
        }
        self.range = range;
    }

    /// Canonical query-string fragment for the current state.
    ///
    /// Preset flags take priority over the stored dates; an explicit
    /// `start_date`/`end_date` pair is emitted only for `Custom` with both
    /// endpoints present. Returns `""` when `from` is unset.
    pub fn query_params(&self) -> String {
        match self.preset {
            DatePreset::Today => "?today=true".into(),
            DatePreset::LastMonth => "?last_month=true".into(),
            DatePreset::LastYear => "?last_year=true".into(),
            DatePreset::Custom => match (self.range.from, self.range.to) {
                (Some(from), Some(to)) => format!(
                    "?start_date={}&end_date={}",
                    from.format("%Y-%m-%d"),
                    to.format("%Y-%m-%d")
                ),
                _ => String::new(),
            },
        }
    }

    /// Human-readable label for the current state.
    pub fn format_range(&self) -> String {
        let Some(from) = self.range.from else {
            return "Select date range".into();
        };

        match self.preset {
            DatePreset::Today => "Today".into(),
            DatePreset::LastMonth => "Last Month".into(),
            DatePreset::LastYear => "Last year".into(),
            DatePreset::Custom => match self.range.to {
                Some(to) => format!("{} - {}", format_day(from), format_day(to)),
                None => format_day(from),
            },
        }
    }
}

impl Default for DateRangeFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_day(day: NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}
