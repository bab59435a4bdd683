//! Hand-rolled matcher for the line-start timestamp that opens every entry:
//!
//! ```text
//! D{1,2} "/" D{1,2} "/" D{2,4} "," WS D{1,2} ":" D{2} WS [AaPp][Mm] WS "-" WS
//! ```
//!
//! Every digit run is followed by a non-digit literal, so taking the longest
//! run and failing on overflow gives the same result as a backtracking regex.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Meridiem {
    Am,
    Pm,
}

/// Numeric pieces of a matched timestamp, not yet range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimestampParts {
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub year_digits: usize,
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Consume between `min` and `max` ASCII digits, greedily.
    fn digits(&mut self, min: usize, max: usize) -> Option<(u32, usize)> {
        let bytes = self.rest().as_bytes();
        let count = bytes
            .iter()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if count < min {
            return None;
        }
        let value = bytes[..count]
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        self.pos += count;
        Some((value, count))
    }

    fn literal(&mut self, expected: u8) -> Option<()> {
        if self.rest().as_bytes().first() == Some(&expected) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    /// Exactly one whitespace character (any Unicode whitespace, so the
    /// narrow no-break space some exporters put before AM/PM is accepted).
    fn whitespace(&mut self) -> Option<()> {
        let c = self.rest().chars().next().filter(|c| c.is_whitespace())?;
        self.pos += c.len_utf8();
        Some(())
    }

    fn meridiem(&mut self) -> Option<Meridiem> {
        let bytes = self.rest().as_bytes();
        let (first, second) = (*bytes.first()?, *bytes.get(1)?);
        if !second.eq_ignore_ascii_case(&b'm') {
            return None;
        }
        let m = match first.to_ascii_lowercase() {
            b'a' => Meridiem::Am,
            b'p' => Meridiem::Pm,
            _ => return None,
        };
        self.pos += 2;
        Some(m)
    }
}

/// Try to match a timestamp starting exactly at byte `start`. Returns the
/// end offset (exclusive) and the parsed parts.
pub(crate) fn match_timestamp(text: &str, start: usize) -> Option<(usize, TimestampParts)> {
    if !text.is_char_boundary(start) {
        return None;
    }
    let mut c = Cursor { text, pos: start };
    let (day, _) = c.digits(1, 2)?;
    c.literal(b'/')?;
    let (month, _) = c.digits(1, 2)?;
    c.literal(b'/')?;
    let (year, year_digits) = c.digits(2, 4)?;
    c.literal(b',')?;
    c.whitespace()?;
    let (hour, _) = c.digits(1, 2)?;
    c.literal(b':')?;
    let (minute, _) = c.digits(2, 2)?;
    c.whitespace()?;
    let meridiem = c.meridiem()?;
    c.whitespace()?;
    c.literal(b'-')?;
    c.whitespace()?;
    Some((
        c.pos,
        TimestampParts {
            day,
            month,
            year,
            year_digits,
            hour,
            minute,
            meridiem,
        },
    ))
}

/// Leftmost, non-overlapping timestamp matches as `(start, end)` byte ranges.
pub(crate) fn find_timestamps(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        // A match can only begin on a digit, which is always a char boundary.
        if bytes[pos].is_ascii_digit() {
            if let Some((end, _)) = match_timestamp(text, pos) {
                found.push((pos, end));
                pos = end;
                continue;
            }
        }
        pos += 1;
    }
    found
}
