//! Read-only queries over a [`chatscope_core::RecordStore`].
//!
//! Every query is a pure function of the store (plus a sender filter where
//! it makes sense) and is total: empty stores and unknown senders give zero
//! or empty results, never errors.

mod activity;
mod emoji;
mod rank;
mod report;
mod sentiment;
mod stats;
mod timeline;
mod users;
mod words;

pub use activity::{activity_heatmap, month_activity_map, week_activity_map, ActivityCount, Heatmap};
pub use emoji::{emoji_analysis, extract_emojis, EmojiCount};
pub use report::Report;
pub use sentiment::{
    score_messages, sentiment_tally, CategoryTotals, ScoreFn, Sentiment, SentimentScores,
    SentimentTally,
};
pub use stats::{contains_link, fetch_stats, is_media, ChatStats};
pub use timeline::{daily_timeline, monthly_timeline, DailyPoint, MonthlyPoint};
pub use users::{most_busy_users, BusyUsers, SenderCount, SenderShare};
pub use words::{most_common_words, word_frequencies, StopWords, WordCount, DEFAULT_STOP_WORDS};


#[cfg(test)]
mod tests {
    use super::test_support::store_from;
    use super::*;
    use chatscope_core::SenderFilter;
    use std::sync::Arc;

    #[test]
    fn queries_run_concurrently_over_one_store() {
        let store = Arc::new(store_from(
            "1/1/24, 9:00 AM - A: hi 😀\n1/1/24, 9:01 AM - B: yo\n",
        ));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let stats = fetch_stats(&store, &SenderFilter::Overall, "<Media omitted>");
                    let emoji = emoji_analysis(&store, &SenderFilter::Overall);
                    (stats.messages, emoji.len())
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), (2, 1));
        }
    }

    #[test]
    fn single_message_store_is_fine_everywhere() {
        let store = store_from("1/1/24, 9:00 AM - A: hi\n");
        let all = SenderFilter::Overall;
        assert_eq!(monthly_timeline(&store, &all).len(), 1);
        assert_eq!(daily_timeline(&store, &all).len(), 1);
        assert_eq!(activity_heatmap(&store, &all).total(), 1);
        assert_eq!(most_busy_users(&store, 5).shares[0].percent, 100.0);
        assert_eq!(word_frequencies(&store, &all, &StopWords::builtin(), "<Media omitted>")[0].word, "hi");
    }
}
