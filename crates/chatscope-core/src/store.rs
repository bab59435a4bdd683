use crate::message::Message;
use crate::types::{Sender, SenderFilter};
use serde::Serialize;

/// Ordered, immutable collection of messages for one transcript.
///
/// Built once by the parser and only read afterwards, so a shared reference
/// can be handed to any number of concurrent queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordStore {
    messages: Vec<Message>,
}

impl RecordStore {
    /// Wrap messages in transcript order. No re-sorting happens here.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Messages passing `filter`, in transcript order.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a SenderFilter,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages
            .iter()
            .filter(move |m| filter.matches(&m.sender))
    }

    /// Distinct participant names, sorted, notifications excluded.
    pub fn participants(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for m in &self.messages {
            if let Sender::Participant(name) = &m.sender {
                if !names.iter().any(|n| n == name) {
                    names.push(name.clone());
                }
            }
        }
        names.sort();
        names
    }

    /// Concatenate every message's original slice. For a transcript with no
    /// malformed timestamps this equals the input minus any preamble.
    pub fn reconstruct(&self) -> String {
        self.messages.iter().map(Message::original_text).collect()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
