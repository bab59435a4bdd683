use crate::calendar::{serialize_timestamp, CalendarFields};
use crate::types::Sender;
use serde::Serialize;
use time::PrimitiveDateTime;

/// One decoded, calendar-enriched transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Boundary text exactly as it appeared, e.g. `"12/05/23, 9:00 AM - "`.
    pub timestamp_text: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: PrimitiveDateTime,
    pub sender: Sender,
    /// Text after the sender prefix, verbatim (trailing line break included).
    /// For notifications this is the whole entry.
    pub body: String,
    #[serde(flatten)]
    pub calendar: CalendarFields,
}

impl Message {
    pub fn new(
        timestamp_text: impl Into<String>,
        timestamp: PrimitiveDateTime,
        sender: Sender,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_text: timestamp_text.into(),
            timestamp,
            sender,
            body: body.into(),
            calendar: CalendarFields::from_timestamp(timestamp),
        }
    }

    pub fn is_notification(&self) -> bool {
        self.sender.is_notification()
    }

    /// The transcript slice this message was decoded from.
    pub fn original_text(&self) -> String {
        match &self.sender {
            Sender::Participant(name) => {
                format!("{}{}: {}", self.timestamp_text, name, self.body)
            }
            Sender::GroupNotification => format!("{}{}", self.timestamp_text, self.body),
        }
    }
}
