use crate::rank::{percent, rank_counts};
use chatscope_core::{RecordStore, SenderFilter};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Single emoji code points: pictographs, skin-tone modifiers and the
/// regional indicator letters that make up flags. Joiners and variation
/// selectors are not counted.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Extended_Pictographic}|[\x{1F3FB}-\x{1F3FF}]|[\x{1F1E6}-\x{1F1FF}]").unwrap()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
    /// Share of all emoji occurrences, rounded to two decimals.
    pub percent: f64,
}

/// Emoji code points found in `text`, in order.
pub fn extract_emojis(text: &str) -> impl Iterator<Item = &str> + '_ {
    EMOJI.find_iter(text).map(|m| m.as_str())
}

/// Every emoji used, most frequent first, ties by first occurrence.
pub fn emoji_analysis(store: &RecordStore, filter: &SenderFilter) -> Vec<EmojiCount> {
    let ranked = rank_counts(
        store
            .filtered(filter)
            .flat_map(|m| extract_emojis(&m.body)),
    );
    let total: usize = ranked.iter().map(|(_, n)| n).sum();
    ranked
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
            percent: percent(count, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store_from;

    #[test]
    fn extracts_code_points() {
        let found: Vec<&str> = extract_emojis("hi 😀 there 👍🏽 ❤️ abc 123 #").collect();
        assert_eq!(found, vec!["😀", "👍", "🏽", "❤"]);
    }

    #[test]
    fn flags_count_as_two_indicators() {
        let found: Vec<&str> = extract_emojis("🇮🇳").collect();
        assert_eq!(found, vec!["🇮", "🇳"]);
    }

    #[test]
    fn ranking_and_shares() {
        let store = store_from(
            "\
1/1/24, 9:00 AM - A: 😂😂 nice
1/1/24, 9:01 AM - B: 🔥 😂
1/1/24, 9:02 AM - A: 🔥🎉
",
        );
        let all = emoji_analysis(&store, &SenderFilter::Overall);
        let table: Vec<(&str, usize, f64)> = all
            .iter()
            .map(|e| (e.emoji.as_str(), e.count, e.percent))
            .collect();
        assert_eq!(
            table,
            vec![("😂", 3, 50.0), ("🔥", 2, 33.33), ("🎉", 1, 16.67)]
        );

        let b = emoji_analysis(&store, &SenderFilter::from("B"));
        let order: Vec<&str> = b.iter().map(|e| e.emoji.as_str()).collect();
        // Tie: 🔥 appeared before 😂 in B's messages.
        assert_eq!(order, vec!["🔥", "😂"]);
    }

    #[test]
    fn no_emojis() {
        let store = store_from("1/1/24, 9:00 AM - A: plain text only\n");
        assert!(emoji_analysis(&store, &SenderFilter::Overall).is_empty());
        assert!(emoji_analysis(&RecordStore::default(), &SenderFilter::Overall).is_empty());
    }
}
