use anyhow::Context;
use chatscope_aggregate::{SentimentScores, StopWords};
use chatscope_core::{AnalysisConfig, RecordStore};
use chatscope_transcript::{parse_transcript_file, ParseStats};
use std::path::Path;

/// Everything one command needs: the parsed transcript plus settings.
pub struct Session {
    pub store: RecordStore,
    pub stats: ParseStats,
    pub config: AnalysisConfig,
    pub stop_words: StopWords,
}

impl Session {
    /// Parse `transcript` and load config from `config_path`, or from
    /// `.chatscope.json` in `cwd` when no path is given.
    pub fn open(transcript: &Path, config_path: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let config = AnalysisConfig::discover(config_path, cwd)?;
        let stop_words = StopWords::from_config(&config)?;
        let parsed = parse_transcript_file(transcript)?;

        if parsed.stats.is_empty_transcript() {
            tracing::warn!(
                path = %transcript.display(),
                "no timestamped messages found; every result will be empty"
            );
        }
        if parsed.stats.malformed_timestamps > 0 {
            tracing::info!(
                dropped = parsed.stats.malformed_timestamps,
                "skipped entries with unparseable timestamps"
            );
        }

        Ok(Self {
            store: parsed.store,
            stats: parsed.stats,
            config,
            stop_words,
        })
    }
}

/// Read sentiment triples as JSON lines, one `{"pos":..,"neg":..,"neu":..}`
/// object per message. Blank lines are ignored.
pub fn read_scores(path: &Path) -> anyhow::Result<Vec<SentimentScores>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading scores {}", path.display()))?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<SentimentScores>(line)
                .with_context(|| format!("{}:{}: invalid score triple", path.display(), i + 1))
        })
        .collect()
}
