//! Mapping externally computed polarity scores to a category, and tallying
//! categories per sender.
//!
//! The scorer itself lives outside this crate; it only has to produce one
//! `(pos, neg, neu)` triple per message, in transcript order.

use crate::rank::rank_counts;
use crate::users::SenderCount;
use chatscope_core::{AnalysisError, RecordStore, SenderFilter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity scores for one message, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
}

impl SentimentScores {
    pub fn new(pos: f64, neg: f64, neu: f64) -> Self {
        Self { pos, neg, neu }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Positive wins every tie it takes part in, then Negative. So
    /// `(0.5, 0.5, 0.5)` is Positive and `(0.3, 0.5, 0.5)` is Negative.
    pub fn classify(s: &SentimentScores) -> Self {
        if s.pos >= s.neg && s.pos >= s.neu {
            Self::Positive
        } else if s.neg >= s.pos && s.neg >= s.neu {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Scorer callback: message body in, score triple out.
pub type ScoreFn = dyn Fn(&str) -> SentimentScores;

/// Run `scorer` over every message body, keeping transcript order.
pub fn score_messages(store: &RecordStore, scorer: &ScoreFn) -> Vec<SentimentScores> {
    store.iter().map(|m| scorer(&m.body)).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    pub totals: CategoryTotals,
    /// Senders with the most positive messages, most first.
    pub positive: Vec<SenderCount>,
    pub negative: Vec<SenderCount>,
    pub neutral: Vec<SenderCount>,
}

/// Classify every message and rank senders within each category, keeping
/// the top `limit` per category (ties by first appearance).
///
/// `scores` must line up 1:1 with the whole store; the filter is applied
/// after pairing. A length mismatch fails this query only.
pub fn sentiment_tally(
    store: &RecordStore,
    scores: &[SentimentScores],
    filter: &SenderFilter,
    limit: usize,
) -> Result<SentimentTally, AnalysisError> {
    if scores.len() != store.len() {
        tracing::warn!(
            scores = scores.len(),
            messages = store.len(),
            "sentiment scores do not line up with messages"
        );
        return Err(AnalysisError::ScoreAlignmentMismatch {
            scores: scores.len(),
            messages: store.len(),
        });
    }

    let classified: Vec<(&str, Sentiment)> = store
        .iter()
        .zip(scores)
        .filter(|(m, _)| filter.matches(&m.sender))
        .map(|(m, s)| (m.sender.as_str(), Sentiment::classify(s)))
        .collect();

    let mut totals = CategoryTotals::default();
    for (_, sentiment) in &classified {
        match sentiment {
            Sentiment::Positive => totals.positive += 1,
            Sentiment::Negative => totals.negative += 1,
            Sentiment::Neutral => totals.neutral += 1,
        }
    }

    let top_for = |category: Sentiment| -> Vec<SenderCount> {
        rank_counts(
            classified
                .iter()
                .filter(|(_, s)| *s == category)
                .map(|(sender, _)| *sender),
        )
        .into_iter()
        .take(limit)
        .map(|(sender, messages)| SenderCount {
            sender: sender.to_string(),
            messages,
        })
        .collect()
    };

    Ok(SentimentTally {
        totals,
        positive: top_for(Sentiment::Positive),
        negative: top_for(Sentiment::Negative),
        neutral: top_for(Sentiment::Neutral),
    })
}
