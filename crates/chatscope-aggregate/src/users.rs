use crate::rank::{percent, rank_counts};
use chatscope_core::{RecordStore, Sender};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    pub sender: String,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    pub messages: usize,
    /// Share of all participant messages, rounded to two decimals.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The `limit` busiest participants.
    pub top: Vec<SenderCount>,
    /// Every participant with their share.
    pub shares: Vec<SenderShare>,
}

/// Rank participants by message count, busiest first. Equal counts go to
/// whoever spoke first. Group notifications are left out of both the ranking
/// and the share denominator.
pub fn most_busy_users(store: &RecordStore, limit: usize) -> BusyUsers {
    let ranked = rank_counts(store.iter().filter_map(|m| match &m.sender {
        Sender::Participant(name) => Some(name.as_str()),
        Sender::GroupNotification => None,
    }));
    let total: usize = ranked.iter().map(|(_, n)| n).sum();

    let top = ranked
        .iter()
        .take(limit)
        .map(|&(sender, messages)| SenderCount {
            sender: sender.to_string(),
            messages,
        })
        .collect();
    let shares = ranked
        .iter()
        .map(|&(sender, messages)| SenderShare {
            sender: sender.to_string(),
            messages,
            percent: percent(messages, total),
        })
        .collect();

    BusyUsers { top, shares }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store_from;

    #[test]
    fn ranking_with_first_appearance_tie_break() {
        let store = store_from(
            "\
1/1/24, 9:00 AM - Carol added Bob
1/1/24, 9:01 AM - Bob: hi
1/1/24, 9:02 AM - Alice: hey
1/1/24, 9:03 AM - Alice: there
1/1/24, 9:04 AM - Bob: yo
1/1/24, 9:05 AM - Dan: sup
",
        );
        let busy = most_busy_users(&store, 5);
        let top: Vec<(&str, usize)> = busy
            .top
            .iter()
            .map(|s| (s.sender.as_str(), s.messages))
            .collect();
        // Bob and Alice both have 2; Bob spoke first.
        assert_eq!(top, vec![("Bob", 2), ("Alice", 2), ("Dan", 1)]);
        assert!(busy.shares.iter().all(|s| s.sender != "group_notification"));
    }

    #[test]
    fn shares_are_rounded_percentages() {
        let store = store_from(
            "\
1/1/24, 9:00 AM - A: 1
1/1/24, 9:01 AM - B: 2
1/1/24, 9:02 AM - C: 3
1/1/24, 9:03 AM - A: 4
1/1/24, 9:04 AM - A: 5
1/1/24, 9:05 AM - B: 6
",
        );
        let busy = most_busy_users(&store, 2);
        assert_eq!(busy.top.len(), 2);
        let shares: Vec<(&str, f64)> = busy
            .shares
            .iter()
            .map(|s| (s.sender.as_str(), s.percent))
            .collect();
        assert_eq!(shares, vec![("A", 50.0), ("B", 33.33), ("C", 16.67)]);
    }

    #[test]
    fn empty_store_has_no_users() {
        let busy = most_busy_users(&RecordStore::default(), 5);
        assert!(busy.top.is_empty());
        assert!(busy.shares.is_empty());
    }
}
