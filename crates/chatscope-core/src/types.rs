use serde::{Serialize, Serializer};
use std::fmt;

/// Sender value recorded for entries without a `"<name>: "` prefix
/// (joins, leaves, encryption notices, subject changes).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Filter value meaning "every sender".
pub const OVERALL: &str = "Overall";

/// Who produced a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    Participant(String),
    GroupNotification,
}

impl Sender {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Participant(name) => name,
            Self::GroupNotification => GROUP_NOTIFICATION,
        }
    }

    pub fn is_notification(&self) -> bool {
        matches!(self, Self::GroupNotification)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Restricts a query to one sender, or to nobody in particular.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SenderFilter {
    #[default]
    Overall,
    Only(String),
}

impl SenderFilter {
    /// True if a message from `sender` passes the filter.
    ///
    /// `Only("group_notification")` selects the notification entries, the
    /// same way a plain column comparison on the sender field would.
    pub fn matches(&self, sender: &Sender) -> bool {
        match self {
            Self::Overall => true,
            Self::Only(name) => sender.as_str() == name,
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Self::Overall)
    }
}

impl From<&str> for SenderFilter {
    fn from(s: &str) -> Self {
        if s == OVERALL {
            Self::Overall
        } else {
            Self::Only(s.to_string())
        }
    }
}

impl std::str::FromStr for SenderFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overall => f.write_str(OVERALL),
            Self::Only(name) => f.write_str(name),
        }
    }
}
