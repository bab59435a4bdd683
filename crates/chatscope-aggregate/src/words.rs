use crate::rank::rank_counts;
use crate::stats::is_media;
use anyhow::Context;
use chatscope_core::{AnalysisConfig, RecordStore, SenderFilter};
use serde::Serialize;
use std::collections::HashSet;

/// Built-in stop words: common English function words plus the romanized
/// Hindi/Urdu fillers that dominate mixed-language group chats.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    // English
    "a", "about", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "but", "by", "can", "could", "did", "do", "does", "don't",
    "for", "from", "had", "has", "have", "he", "her", "here", "him", "his", "how", "i", "i'm",
    "if", "in", "is", "it", "it's", "its", "just", "me", "my", "no", "not", "now", "of", "ok",
    "okay", "on", "or", "our", "out", "so", "she", "should", "than", "that", "the", "their",
    "them", "then", "there", "they", "this", "to", "too", "up", "us", "was", "we", "were",
    "what", "when", "where", "which", "who", "why", "will", "with", "would", "you", "your",
    // Hinglish
    "aur", "bhi", "ha", "haan", "hai", "hain", "ho", "hu", "hun", "kar", "karo", "ke", "ki",
    "kya", "ko", "koi", "mai", "main", "me", "mein", "na", "nahi", "pe", "se", "tha", "toh",
    "tu", "tum", "wo", "ye",
];

/// Lowercase words excluded from frequency tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn builtin() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    /// Built-in list (or `stop_words_path` when set) plus `extra_stop_words`.
    pub fn from_config(config: &AnalysisConfig) -> anyhow::Result<Self> {
        let mut stop = match &config.stop_words_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading stop words {}", path.display()))?;
                Self::from_words(content.lines())
            }
            None => Self::builtin(),
        };
        stop.words.extend(
            config
                .extra_stop_words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Ok(stop)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Frequency of every non-stop word in participant, non-media bodies,
/// most frequent first, ties by first occurrence. This is the full table a
/// word cloud is drawn from.
pub fn word_frequencies(
    store: &RecordStore,
    filter: &SenderFilter,
    stop_words: &StopWords,
    media_placeholder: &str,
) -> Vec<WordCount> {
    let words = store
        .filtered(filter)
        .filter(|m| !m.is_notification() && !is_media(&m.body, media_placeholder))
        .flat_map(|m| {
            m.body
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|w| !stop_words.contains(w));

    rank_counts(words)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// The `config.top_words` most frequent words.
pub fn most_common_words(
    store: &RecordStore,
    filter: &SenderFilter,
    stop_words: &StopWords,
    config: &AnalysisConfig,
) -> Vec<WordCount> {
    let mut words = word_frequencies(store, filter, stop_words, &config.media_placeholder);
    words.truncate(config.top_words);
    words
}
