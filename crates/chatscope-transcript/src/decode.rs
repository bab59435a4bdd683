use crate::cursor::{match_timestamp, Meridiem, TimestampParts};
use crate::tokenize::RawEntry;
use chatscope_core::{Message, ParseError, Sender};
use time::{Date, Month, PrimitiveDateTime, Time};

/// Decode one raw entry into a message.
pub fn decode_entry(raw: &RawEntry<'_>) -> Result<Message, ParseError> {
    let timestamp = parse_timestamp(raw.timestamp_text)?;
    let (sender, body) = split_sender(raw.body);
    Ok(Message::new(raw.timestamp_text, timestamp, sender, body))
}

/// Split `"<name>: <text>"` into sender and text.
///
/// The name is the shortest non-empty prefix followed by `": "`, so later
/// colons stay in the text. Bodies without such a prefix are notifications
/// and keep their full text.
///
/// A participant literally named `group_notification` stays a
/// `Participant`, but it shares the sentinel's display name, so name-based
/// filters select both.
pub fn split_sender(body: &str) -> (Sender, &str) {
    let Some(first) = body.chars().next() else {
        return (Sender::GroupNotification, body);
    };
    let skip = first.len_utf8();
    match body[skip..].find(": ") {
        Some(i) => {
            let colon = skip + i;
            (
                Sender::Participant(body[..colon].to_string()),
                &body[colon + 2..],
            )
        }
        None => (Sender::GroupNotification, body),
    }
}

/// Parse a boundary such as `"12/05/23, 9:00 AM - "` as day/month/year with
/// a 12-hour clock.
///
/// Two-digit years pivot like POSIX `%y`: `00`-`68` are 2000-2068 and
/// `69`-`99` are 1969-1999.
pub fn parse_timestamp(text: &str) -> Result<PrimitiveDateTime, ParseError> {
    let parts = match match_timestamp(text, 0) {
        Some((end, parts)) if end == text.len() => parts,
        _ => return Err(ParseError::malformed(text, "does not match d/m/y, h:mm AM/PM - ")),
    };
    to_datetime(text, parts)
}

fn to_datetime(text: &str, p: TimestampParts) -> Result<PrimitiveDateTime, ParseError> {
    let year = match p.year_digits {
        2 if p.year < 69 => 2000 + p.year as i32,
        2 => 1900 + p.year as i32,
        4 => p.year as i32,
        n => return Err(ParseError::malformed(text, format!("{n}-digit year"))),
    };
    let month = u8::try_from(p.month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| ParseError::malformed(text, format!("month {} out of range", p.month)))?;
    let day = u8::try_from(p.day)
        .map_err(|_| ParseError::malformed(text, format!("day {} out of range", p.day)))?;
    let date = Date::from_calendar_date(year, month, day)
        .map_err(|e| ParseError::malformed(text, e.to_string()))?;

    if !(1..=12).contains(&p.hour) {
        return Err(ParseError::malformed(
            text,
            format!("hour {} not on a 12-hour clock", p.hour),
        ));
    }
    let hour = (p.hour % 12) as u8 + if p.meridiem == Meridiem::Pm { 12 } else { 0 };
    let minute = u8::try_from(p.minute)
        .map_err(|_| ParseError::malformed(text, format!("minute {} out of range", p.minute)))?;
    let time = Time::from_hms(hour, minute, 0)
        .map_err(|e| ParseError::malformed(text, e.to_string()))?;

    Ok(PrimitiveDateTime::new(date, time))
}
