use chatscope_core::{RecordStore, SenderFilter};
use serde::Serialize;

/// Headline counters for one filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    pub messages: usize,
    /// Whitespace-separated tokens across all bodies.
    pub words: usize,
    /// Bodies that are only the media placeholder.
    pub media: usize,
    /// Bodies with at least one link; a body with several links counts once.
    pub links: usize,
}

/// True if the body, minus trailing whitespace, is exactly the placeholder.
pub fn is_media(body: &str, media_placeholder: &str) -> bool {
    body.trim_end() == media_placeholder
}

/// Link heuristic: `http://`, `https://` or `www.` anywhere in the body,
/// ASCII case-insensitive. Nothing smarter.
pub fn contains_link(body: &str) -> bool {
    let lower = body.to_ascii_lowercase();
    ["http://", "https://", "www."]
        .iter()
        .any(|needle| lower.contains(needle))
}

pub fn fetch_stats(store: &RecordStore, filter: &SenderFilter, media_placeholder: &str) -> ChatStats {
    store
        .filtered(filter)
        .fold(ChatStats::default(), |mut acc, m| {
            acc.messages += 1;
            acc.words += m.body.split_whitespace().count();
            if is_media(&m.body, media_placeholder) {
                acc.media += 1;
            }
            if contains_link(&m.body) {
                acc.links += 1;
            }
            acc
        })
}
