use crate::cursor::find_timestamps;

/// Undecoded `(timestamp, body)` slice pair borrowed from the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Byte offset of the timestamp in the transcript.
    pub offset: usize,
    pub timestamp_text: &'a str,
    /// Everything up to the next timestamp (or end of text), newlines included.
    pub body: &'a str,
}

/// Split a transcript into raw entries.
///
/// Text before the first timestamp is skipped. No timestamps means no
/// entries. A body runs until the next timestamp, so multi-line messages
/// stay whole.
pub fn tokenize(text: &str) -> Vec<RawEntry<'_>> {
    let bounds = find_timestamps(text);
    bounds
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            let body_end = bounds.get(i + 1).map(|&(next, _)| next).unwrap_or(text.len());
            RawEntry {
                offset: start,
                timestamp_text: &text[start..end],
                body: &text[end..body_end],
            }
        })
        .collect()
}
