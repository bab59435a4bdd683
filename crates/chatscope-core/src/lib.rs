pub mod calendar;
pub mod config;
pub mod error;
pub mod message;
pub mod store;
pub mod types;

pub use calendar::CalendarFields;
pub use config::AnalysisConfig;
pub use error::{AnalysisError, ParseError};
pub use message::Message;
pub use store::RecordStore;
pub use types::*;
