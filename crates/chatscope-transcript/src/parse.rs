use crate::decode::decode_entry;
use crate::tokenize::tokenize;
use anyhow::Context;
use chatscope_core::{ParseError, RecordStore};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Timestamp boundaries found.
    pub boundaries: usize,
    /// Entries that made it into the store.
    pub messages: usize,
    /// Of `messages`, how many were group notifications.
    pub notifications: usize,
    /// Entries dropped because their timestamp did not parse.
    pub malformed_timestamps: usize,
    /// Bytes before the first boundary that were skipped.
    pub preamble_bytes: usize,
}

impl ParseStats {
    /// No boundaries at all. Not an error: every query over the resulting
    /// empty store yields zero or empty results.
    pub fn is_empty_transcript(&self) -> bool {
        self.boundaries == 0
    }
}

/// Result of parsing one transcript.
#[derive(Debug, Clone)]
pub struct ParsedTranscript {
    pub store: RecordStore,
    pub stats: ParseStats,
    /// One entry per dropped message, in transcript order.
    pub rejected: Vec<ParseError>,
}

/// Parse transcript text into a record store.
///
/// Never fails as a whole: entries with malformed timestamps are dropped
/// and reported in `rejected` and `stats`.
pub fn parse_transcript(text: &str) -> ParsedTranscript {
    let entries = tokenize(text);

    let mut stats = ParseStats {
        boundaries: entries.len(),
        preamble_bytes: entries.first().map(|e| e.offset).unwrap_or(text.len()),
        ..ParseStats::default()
    };
    let mut messages = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();

    for raw in &entries {
        match decode_entry(raw) {
            Ok(message) => {
                if message.is_notification() {
                    stats.notifications += 1;
                }
                messages.push(message);
            }
            Err(err) => {
                tracing::warn!(offset = raw.offset, error = %err, "dropping transcript entry");
                stats.malformed_timestamps += 1;
                rejected.push(err);
            }
        }
    }
    stats.messages = messages.len();

    tracing::debug!(
        boundaries = stats.boundaries,
        messages = stats.messages,
        notifications = stats.notifications,
        malformed = stats.malformed_timestamps,
        "parsed transcript"
    );

    ParsedTranscript {
        store: RecordStore::new(messages),
        stats,
        rejected,
    }
}

/// Read a UTF-8 transcript export from disk and parse it.
pub fn parse_transcript_file(path: &Path) -> anyhow::Result<ParsedTranscript> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading transcript {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("transcript {} is not valid UTF-8", path.display()))?;
    // Exports written on some platforms start with a byte-order mark.
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(parse_transcript(text))
}
