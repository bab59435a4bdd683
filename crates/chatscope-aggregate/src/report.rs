use crate::activity::{activity_heatmap, month_activity_map, week_activity_map, ActivityCount, Heatmap};
use crate::emoji::{emoji_analysis, EmojiCount};
use crate::sentiment::{sentiment_tally, SentimentScores, SentimentTally};
use crate::stats::{fetch_stats, ChatStats};
use crate::timeline::{daily_timeline, monthly_timeline, DailyPoint, MonthlyPoint};
use crate::users::{most_busy_users, BusyUsers};
use crate::words::{most_common_words, StopWords, WordCount};
use chatscope_core::{AnalysisConfig, RecordStore, SenderFilter};
use serde::Serialize;

/// Every query for one filter, bundled for export.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub selected_user: String,
    pub participants: Vec<String>,
    pub stats: ChatStats,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
    /// Only computed for the unfiltered view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub common_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentTally>,
    /// Why `sentiment` is missing although scores were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_error: Option<String>,
}

impl Report {
    /// Build the report. A sentiment failure is recorded in
    /// `sentiment_error` and leaves every other section intact.
    pub fn build(
        store: &RecordStore,
        filter: &SenderFilter,
        config: &AnalysisConfig,
        stop_words: &StopWords,
        scores: Option<&[SentimentScores]>,
    ) -> Self {
        let (sentiment, sentiment_error) = match scores {
            Some(scores) => {
                match sentiment_tally(store, scores, filter, config.top_sentiment_users) {
                    Ok(tally) => (Some(tally), None),
                    Err(e) => (None, Some(e.to_string())),
                }
            }
            None => (None, None),
        };

        Self {
            selected_user: filter.to_string(),
            participants: store.participants(),
            stats: fetch_stats(store, filter, &config.media_placeholder),
            monthly_timeline: monthly_timeline(store, filter),
            daily_timeline: daily_timeline(store, filter),
            week_activity: week_activity_map(store, filter),
            month_activity: month_activity_map(store, filter),
            heatmap: activity_heatmap(store, filter),
            busy_users: filter
                .is_overall()
                .then(|| most_busy_users(store, config.top_busy_users)),
            common_words: most_common_words(store, filter, stop_words, config),
            emoji: emoji_analysis(store, filter),
            sentiment,
            sentiment_error,
        }
    }
}
