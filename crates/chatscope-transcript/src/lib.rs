mod cursor;
mod decode;
mod parse;
mod tokenize;

pub use decode::{decode_entry, parse_timestamp, split_sender};
pub use parse::{parse_transcript, parse_transcript_file, ParseStats, ParsedTranscript};
pub use tokenize::{tokenize, RawEntry};
