use chatscope_core::calendar::{serialize_display, MONTH_NAMES};
use chatscope_core::{RecordStore, SenderFilter};
use serde::Serialize;
use std::collections::BTreeMap;
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// `"<month_name>-<year>"`, e.g. `"May-2023"`.
    pub label: String,
    pub year: i32,
    pub month_number: u8,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    #[serde(serialize_with = "serialize_display")]
    pub date: Date,
    pub messages: usize,
}

/// Message counts per calendar month, oldest first. Months without messages
/// are absent.
pub fn monthly_timeline(store: &RecordStore, filter: &SenderFilter) -> Vec<MonthlyPoint> {
    let mut by_month: BTreeMap<(i32, u8), usize> = BTreeMap::new();
    for m in store.filtered(filter) {
        *by_month
            .entry((m.calendar.year, m.calendar.month_number))
            .or_insert(0) += 1;
    }
    by_month
        .into_iter()
        .map(|((year, month_number), messages)| MonthlyPoint {
            label: format!("{}-{year}", MONTH_NAMES[usize::from(month_number - 1)]),
            year,
            month_number,
            messages,
        })
        .collect()
}

/// Message counts per calendar date, oldest first. Dates without messages
/// are absent.
pub fn daily_timeline(store: &RecordStore, filter: &SenderFilter) -> Vec<DailyPoint> {
    let mut by_date: BTreeMap<Date, usize> = BTreeMap::new();
    for m in store.filtered(filter) {
        *by_date.entry(m.calendar.date_only).or_insert(0) += 1;
    }
    by_date
        .into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}
