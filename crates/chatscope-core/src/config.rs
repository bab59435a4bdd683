use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".chatscope.json";

/// Body text the exporter writes in place of an attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Tunables for the aggregation queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// How many words `most_common_words` returns.
    pub top_words: usize,
    /// How many senders the busiest-user ranking returns.
    pub top_busy_users: usize,
    /// How many senders each sentiment category lists.
    pub top_sentiment_users: usize,
    /// Body text (after trimming trailing whitespace) that marks a media message.
    pub media_placeholder: String,
    /// Added on top of the stop-word list.
    pub extra_stop_words: Vec<String>,
    /// File with one stop word per line; replaces the built-in list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_words_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_busy_users: 5,
            top_sentiment_users: 10,
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            extra_stop_words: Vec::new(),
            stop_words_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Read a JSON config file. A relative `stop_words_path` is resolved
    /// against the config file's directory.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if let (Some(stop), Some(dir)) = (&config.stop_words_path, path.parent()) {
            if stop.is_relative() {
                config.stop_words_path = Some(dir.join(stop));
            }
        }
        Ok(config)
    }

    /// Load `explicit` if given, else `<dir>/.chatscope.json` if it exists,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = dir.join(CONFIG_FILE_NAME);
        if implicit.exists() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}
