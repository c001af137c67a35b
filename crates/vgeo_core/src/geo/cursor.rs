//! Line cursor and token scanning over an in-memory text buffer.
//!
//! The whole file is materialized before parsing starts; the cursor is
//! just a byte offset into that immutable buffer. The two-pass face
//! assembly rewinds by saving and restoring the offset, so no re-read
//! from storage ever happens.

/// Forward cursor yielding one line at a time.
#[derive(Clone, Debug)]
pub struct LineCursor<'a> {
    buf: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor positioned at the start of the buffer.
    pub fn new(buf: &'a str) -> Self {
        Self { buf, pos: 0 }
    }

    /// Save the current position for a later [`rewind`](Self::rewind).
    pub fn checkpoint(&self) -> usize {
        self.pos
    }

    /// Restore a position previously returned by [`checkpoint`](Self::checkpoint).
    pub fn rewind(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    /// Yield the next non-blank line, without its line terminator.
    ///
    /// Returns `None` at end of buffer. Lines consisting only of
    /// whitespace are skipped; a record can never be blank in this
    /// format.
    pub fn next_line(&mut self) -> Option<&'a str> {
        while self.pos < self.buf.len() {
            let rest = &self.buf[self.pos..];
            let (line, consumed) = match rest.find('\n') {
                Some(nl) => (&rest[..nl], nl + 1),
                None => (rest, rest.len()),
            };
            self.pos += consumed;

            let line = line.strip_suffix('\r').unwrap_or(line);
            if !line.trim().is_empty() {
                return Some(line);
            }
        }
        None
    }
}

/// Skip leading ASCII whitespace, returning the rest of the input.
pub fn skip_spaces(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == ' ' || c == '\t')
}

/// Parse an unsigned decimal integer prefix.
///
/// Returns the value and the rest of the input after the digits.
/// A missing digit prefix yields `0` with the input unchanged, the
/// same contract as C's `strtoul`.
pub fn parse_u32(s: &str) -> (u32, &str) {
    let mut value: u32 = 0;
    let mut end = 0;

    for (i, b) in s.bytes().enumerate() {
        if b.is_ascii_digit() {
            value = value.saturating_mul(10).saturating_add((b - b'0') as u32);
            end = i + 1;
        } else {
            break;
        }
    }

    (value, &s[end..])
}

/// Parse an unsigned hexadecimal integer prefix (no `0x` marker).
pub fn parse_u32_hex(s: &str) -> (u32, &str) {
    let mut value: u32 = 0;
    let mut end = 0;

    for (i, b) in s.bytes().enumerate() {
        let digit = match b {
            b'0'..=b'9' => (b - b'0') as u32,
            b'a'..=b'f' => (b - b'a') as u32 + 10,
            b'A'..=b'F' => (b - b'A') as u32 + 10,
            _ => break,
        };
        value = value.saturating_mul(16).saturating_add(digit);
        end = i + 1;
    }

    (value, &s[end..])
}

/// Parse a float prefix: optional sign, digits, fraction, exponent.
///
/// Returns the value and the rest of the input. A missing numeric
/// prefix yields `0.0` with the input unchanged.
pub fn parse_f32(s: &str) -> (f32, &str) {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits = true;
        }
    }
    if !digits {
        return (0.0, s);
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    let value = s[..end].parse::<f32>().unwrap_or(0.0);
    (value, &s[end..])
}

/// Parse three whitespace-separated floats, e.g. a position or direction.
pub fn parse_vec3(s: &str) -> (glam::Vec3, &str) {
    let (x, rest) = parse_f32(skip_spaces(s));
    let (y, rest) = parse_f32(skip_spaces(rest));
    let (z, rest) = parse_f32(skip_spaces(rest));
    (glam::Vec3::new(x, y, z), rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line() {
        let mut cursor = LineCursor::new("first\nsecond\r\n\n  \nthird");
        assert_eq!(cursor.next_line(), Some("first"));
        assert_eq!(cursor.next_line(), Some("second"));
        assert_eq!(cursor.next_line(), Some("third"));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_checkpoint_rewind() {
        let mut cursor = LineCursor::new("a\nb\nc\n");
        assert_eq!(cursor.next_line(), Some("a"));

        let mark = cursor.checkpoint();
        assert_eq!(cursor.next_line(), Some("b"));
        assert_eq!(cursor.next_line(), Some("c"));
        assert_eq!(cursor.next_line(), None);

        cursor.rewind(mark);
        assert_eq!(cursor.next_line(), Some("b"));
    }

    #[test]
    fn test_parse_u32() {
        assert_eq!(parse_u32("42 rest"), (42, " rest"));
        assert_eq!(parse_u32("junk"), (0, "junk"));
        assert_eq!(parse_u32(""), (0, ""));
        // overflow saturates instead of wrapping
        assert_eq!(parse_u32("99999999999").0, u32::MAX);
    }

    #[test]
    fn test_parse_u32_hex() {
        assert_eq!(parse_u32_hex("FF0000").0, 0xFF0000);
        assert_eq!(parse_u32_hex("7f 1").0, 0x7F);
        assert_eq!(parse_u32_hex("xyz"), (0, "xyz"));
    }

    #[test]
    fn test_parse_f32() {
        assert_eq!(parse_f32("1.5 2").0, 1.5);
        assert_eq!(parse_f32("-0.25").0, -0.25);
        assert_eq!(parse_f32("3").0, 3.0);
        assert_eq!(parse_f32("1.5e2").0, 150.0);
        let (v, rest) = parse_f32("abc");
        assert_eq!(v, 0.0);
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_parse_vec3() {
        let (v, rest) = parse_vec3("1.0 2.0  3.0 tail");
        assert_eq!(v, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(rest, " tail");
    }
}
