use chatscope_core::calendar::{hour_bucket_labels, MONTH_NAMES, WEEKDAY_NAMES};
use chatscope_core::{RecordStore, SenderFilter};
use serde::Serialize;

/// A named slot (weekday or month) and how many messages fell into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub name: &'static str,
    pub messages: usize,
}

/// Counts for all seven weekdays, Monday first, zero-filled.
pub fn week_activity_map(store: &RecordStore, filter: &SenderFilter) -> Vec<ActivityCount> {
    let mut counts = [0usize; 7];
    for m in store.filtered(filter) {
        counts[usize::from(m.calendar.weekday_index)] += 1;
    }
    zip_names(&WEEKDAY_NAMES, &counts)
}

/// Counts for all twelve months, January first, zero-filled.
pub fn month_activity_map(store: &RecordStore, filter: &SenderFilter) -> Vec<ActivityCount> {
    let mut counts = [0usize; 12];
    for m in store.filtered(filter) {
        counts[usize::from(m.calendar.month_number - 1)] += 1;
    }
    zip_names(&MONTH_NAMES, &counts)
}

fn zip_names(names: &[&'static str], counts: &[usize]) -> Vec<ActivityCount> {
    names
        .iter()
        .zip(counts)
        .map(|(&name, &messages)| ActivityCount { name, messages })
        .collect()
}

/// Weekday × hour-bucket message counts. Every cell is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Row labels, Monday first.
    pub weekdays: Vec<&'static str>,
    /// Column labels, `"12 AM - 01 AM"` first.
    pub hour_buckets: Vec<String>,
    /// `cells[weekday][hour]`.
    pub cells: [[usize; 24]; 7],
}

impl Heatmap {
    pub fn get(&self, weekday_index: usize, hour: usize) -> usize {
        self.cells
            .get(weekday_index)
            .and_then(|row| row.get(hour))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

pub fn activity_heatmap(store: &RecordStore, filter: &SenderFilter) -> Heatmap {
    let mut cells = [[0usize; 24]; 7];
    for m in store.filtered(filter) {
        cells[usize::from(m.calendar.weekday_index)][usize::from(m.calendar.hour)] += 1;
    }
    Heatmap {
        weekdays: WEEKDAY_NAMES.to_vec(),
        hour_buckets: hour_bucket_labels(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store_from;

    // 12/05/23 is a Friday, 14/05/23 a Sunday.
    const CHAT: &str = "\
12/05/23, 9:00 AM - Alice: one
12/05/23, 9:40 AM - Bob: two
14/05/23, 11:30 PM - Alice: three
2/01/24, 12:10 AM - Alice: four
";

    #[test]
    fn week_map_has_all_days_summing_to_total() {
        let store = store_from(CHAT);
        let week = week_activity_map(&store, &SenderFilter::Overall);
        let names: Vec<&str> = week.iter().map(|c| c.name).collect();
        assert_eq!(names, WEEKDAY_NAMES.to_vec());
        assert_eq!(week.iter().map(|c| c.messages).sum::<usize>(), 4);
        assert_eq!(week[4].messages, 2); // Friday
        assert_eq!(week[6].messages, 1); // Sunday
        assert_eq!(week[1].messages, 1); // Tuesday 2 Jan 2024
        assert_eq!(week[0].messages, 0);
    }

    #[test]
    fn month_map_has_all_months_summing_to_filtered_total() {
        let store = store_from(CHAT);
        let months = month_activity_map(&store, &SenderFilter::from("Alice"));
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].name, "January");
        assert_eq!(months.iter().map(|c| c.messages).sum::<usize>(), 3);
        assert_eq!(months[4].messages, 2);
        assert_eq!(months[0].messages, 1);
    }

    #[test]
    fn maps_for_unknown_user_are_zero_filled() {
        let store = store_from(CHAT);
        let week = week_activity_map(&store, &SenderFilter::from("Nobody"));
        assert_eq!(week.len(), 7);
        assert!(week.iter().all(|c| c.messages == 0));
        let months = month_activity_map(&RecordStore::default(), &SenderFilter::Overall);
        assert_eq!(months.len(), 12);
        assert!(months.iter().all(|c| c.messages == 0));
    }

    #[test]
    fn heatmap_cells() {
        let store = store_from(CHAT);
        let map = activity_heatmap(&store, &SenderFilter::Overall);
        assert_eq!(map.weekdays.len(), 7);
        assert_eq!(map.hour_buckets.len(), 24);
        assert_eq!(map.hour_buckets[23], "11 PM - 12 AM");
        assert_eq!(map.get(4, 9), 2);
        assert_eq!(map.get(6, 23), 1);
        assert_eq!(map.get(1, 0), 1);
        assert_eq!(map.get(0, 0), 0);
        assert_eq!(map.get(9, 99), 0);
        assert_eq!(map.total(), 4);
    }

    #[test]
    fn empty_heatmap_is_all_zero() {
        let map = activity_heatmap(&RecordStore::default(), &SenderFilter::Overall);
        assert_eq!(map.total(), 0);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["cells"].as_array().unwrap().len(), 7);
        assert_eq!(json["cells"][0].as_array().unwrap().len(), 24);
    }
}
