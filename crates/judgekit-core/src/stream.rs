//! Typed token streams.
//!
//! An [`InStream`] layers token, line and number extraction over a
//! [`CharSource`]. Every problem it detects becomes an [`Outcome`] routed
//! through the stream's [`OutcomeMapping`], so the same malformed number is a
//! presentation error in the contestant's output but a jury failure in the
//! answer file.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use num_bigint::BigInt;

use crate::obs;
use crate::outcome::{Flow, Outcome, OutcomeKind, Score};
use crate::source::{is_whitespace, CharSource, SourceError};

/// Longest text of a 32-bit integer: `-2147483648`.
pub const INT_MAX_LEN: usize = 11;

/// Longest text of a 64-bit integer: `-9223372036854775808`.
pub const LONG_MAX_LEN: usize = 20;

/// Offending text in error messages is cut to this many characters.
const FOUND_PREVIEW_LEN: usize = 100;

/// What a stream holds, which decides how its errors are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamRole {
    /// Problem input given to the checker.
    Input,
    /// The contestant's output.
    Output,
    /// The jury answer.
    Answer,
    /// Test input inspected by a validator.
    RawInput,
}

impl StreamRole {
    pub fn name(&self) -> &'static str {
        match self {
            StreamRole::Input => "input",
            StreamRole::Output => "output",
            StreamRole::Answer => "answer",
            StreamRole::RawInput => "raw-input",
        }
    }

    /// Remap table a stream of this role starts with.
    ///
    /// Jury artifacts escalate contestant-style verdicts to `Fail`; the
    /// contestant's output and validator input keep them as raised.
    pub fn default_mapping(&self) -> OutcomeMapping {
        match self {
            StreamRole::Input | StreamRole::Answer => OutcomeMapping::escalate_to_fail(),
            StreamRole::Output | StreamRole::RawInput => OutcomeMapping::identity(),
        }
    }
}

impl fmt::Display for StreamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Verdict-kind remap table. Kinds without an entry map to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeMapping {
    table: HashMap<OutcomeKind, OutcomeKind>,
}

impl OutcomeMapping {
    pub fn identity() -> Self {
        Self::default()
    }

    /// `WrongAnswer` and `PresentationError` become `Fail`.
    pub fn escalate_to_fail() -> Self {
        Self::identity()
            .with(OutcomeKind::WrongAnswer, OutcomeKind::Fail)
            .with(OutcomeKind::PresentationError, OutcomeKind::Fail)
    }

    pub fn with(mut self, from: OutcomeKind, to: OutcomeKind) -> Self {
        self.insert(from, to);
        self
    }

    pub fn insert(&mut self, from: OutcomeKind, to: OutcomeKind) {
        self.table.insert(from, to);
    }

    pub fn resolve(&self, kind: OutcomeKind) -> OutcomeKind {
        self.table.get(&kind).copied().unwrap_or(kind)
    }
}

enum Origin {
    File(PathBuf),
    Reader,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::File(path) => write!(f, "{}", path.display()),
            Origin::Reader => f.write_str("<reader>"),
        }
    }
}

/// A strictly forward token stream with role-specific verdict remapping.
pub struct InStream {
    source: CharSource<Box<dyn Read>>,
    role: StreamRole,
    mapping: OutcomeMapping,
    origin: Origin,
}

impl fmt::Debug for InStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InStream")
            .field("role", &self.role)
            .field("origin", &self.origin.to_string())
            .field("offset", &self.source.offset())
            .field("closed", &self.source.is_closed())
            .finish()
    }
}

impl InStream {
    /// Open a file for reading.
    ///
    /// A missing or unreadable file is reported through the role's mapping:
    /// a presentation error for the contestant's output, a failure for jury
    /// files.
    pub fn open(path: impl AsRef<Path>, role: StreamRole) -> Flow<Self> {
        let path = path.as_ref();
        let mapping = role.default_mapping();
        let file = File::open(path).map_err(|err| {
            Outcome::new(
                mapping.resolve(OutcomeKind::PresentationError),
                format!("File not found: {}: {}", path.display(), err),
            )
        })?;
        Self::build(Box::new(file), role, mapping, Origin::File(path.to_path_buf()))
    }

    /// Read from an arbitrary byte source. Such streams cannot be reset.
    pub fn from_reader(reader: impl Read + 'static, role: StreamRole) -> Flow<Self> {
        Self::build(Box::new(reader), role, role.default_mapping(), Origin::Reader)
    }

    /// Read from in-memory text.
    pub fn from_text(text: &str, role: StreamRole) -> Flow<Self> {
        Self::from_reader(Cursor::new(text.as_bytes().to_vec()), role)
    }

    fn build(
        reader: Box<dyn Read>,
        role: StreamRole,
        mapping: OutcomeMapping,
        origin: Origin,
    ) -> Flow<Self> {
        let source = CharSource::new(reader).map_err(|err| {
            Outcome::new(
                mapping.resolve(OutcomeKind::PresentationError),
                err.to_string(),
            )
        })?;
        obs::emit_stream_opened(role.name(), &origin.to_string());
        Ok(Self {
            source,
            role,
            mapping,
            origin,
        })
    }

    /// Replace the remap table.
    pub fn with_mapping(mut self, mapping: OutcomeMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Adjust a single entry of the remap table.
    pub fn remap(&mut self, from: OutcomeKind, to: OutcomeKind) {
        self.mapping.insert(from, to);
    }

    pub fn role(&self) -> StreamRole {
        self.role
    }

    pub fn mapping(&self) -> &OutcomeMapping {
        &self.mapping
    }

    // ------------------------------------------------------------------
    // Verdicts
    // ------------------------------------------------------------------

    /// Build an outcome classified by this stream's remap table.
    pub fn outcome(&self, kind: OutcomeKind, message: impl Into<String>) -> Outcome {
        let resolved = self.mapping.resolve(kind);
        obs::emit_outcome_raised(self.role.name(), kind, resolved);
        Outcome::new(resolved, message)
    }

    /// Abort the run with a remapped verdict.
    ///
    /// This is how every stream-detected problem leaves the stream.
    pub fn quit<T>(&self, kind: OutcomeKind, message: impl Into<String>) -> Flow<T> {
        Err(self.outcome(kind, message))
    }

    /// Abort the run with a points verdict. Points are never remapped.
    pub fn quit_points<T>(&self, score: impl Into<Score>, message: impl Into<String>) -> Flow<T> {
        Err(Outcome::points(score, message))
    }

    fn format_error(&self, err: SourceError) -> Outcome {
        self.outcome(OutcomeKind::PresentationError, err.to_string())
    }

    // ------------------------------------------------------------------
    // Characters and boundaries
    // ------------------------------------------------------------------

    /// Lookahead character without consuming it.
    pub fn current_char(&self) -> Option<char> {
        self.source.current()
    }

    /// Consume and return the current character.
    pub fn next_char(&mut self) -> Flow<Option<char>> {
        self.source.advance().map_err(|err| self.format_error(err))
    }

    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    pub fn is_eoln(&self) -> bool {
        self.source.is_eoln()
    }

    /// Skip whitespace; true iff nothing but whitespace remained.
    pub fn seek_eof(&mut self) -> Flow<bool> {
        self.source.seek_eof().map_err(|err| self.format_error(err))
    }

    /// Skip in-line whitespace; true iff the line (or file) ends here.
    pub fn seek_eoln(&mut self) -> Flow<bool> {
        self.source.seek_eoln().map_err(|err| self.format_error(err))
    }

    /// Require that only whitespace remains.
    pub fn expect_eof(&mut self, message: impl Into<String>) -> Flow<()> {
        if self.seek_eof()? {
            Ok(())
        } else {
            self.quit(OutcomeKind::PresentationError, message)
        }
    }

    /// Require that only in-line whitespace remains on the current line.
    pub fn expect_eoln(&mut self, message: impl Into<String>) -> Flow<()> {
        if self.seek_eoln()? {
            Ok(())
        } else {
            self.quit(OutcomeKind::PresentationError, message)
        }
    }

    pub fn skip_line(&mut self) -> Flow<()> {
        self.source.skip_line().map_err(|err| self.format_error(err))
    }

    /// Skip any characters contained in `set`.
    pub fn skip_chars(&mut self, set: &str) -> Flow<()> {
        self.source
            .skip_while(|c| set.contains(c))
            .map(|_| ())
            .map_err(|err| self.format_error(err))
    }

    // ------------------------------------------------------------------
    // Tokens and lines
    // ------------------------------------------------------------------

    /// Next whitespace-delimited token of any length.
    pub fn next_token(&mut self) -> Flow<String> {
        self.next_token_bounded(usize::MAX, false)
    }

    /// Next whitespace-delimited token of at most `max_len` characters.
    ///
    /// Never returns an empty token: end of file or a zero bound is a
    /// presentation error.
    pub fn next_token_bounded(&mut self, max_len: usize, skip_after: bool) -> Flow<String> {
        if self.seek_eof()? {
            return self.quit(OutcomeKind::PresentationError, "Unexpected end of file");
        }
        let token = self
            .source
            .take_while(|c| !is_whitespace(c), max_len, skip_after)
            .map_err(|err| self.format_error(err))?;
        if token.is_empty() {
            return self.quit(OutcomeKind::PresentationError, "Non-empty value expected");
        }
        Ok(token)
    }

    /// Token with explicit delimiter sets: characters in `before` are skipped
    /// first, then the token runs up to the first character in `after`.
    pub fn next_token_with(&mut self, before: &str, after: &str) -> Flow<String> {
        self.skip_chars(before)?;
        if self.is_eof() {
            return self.quit(OutcomeKind::PresentationError, "Unexpected end of file");
        }
        let token = self
            .source
            .take_while(|c| !after.contains(c), usize::MAX, false)
            .map_err(|err| self.format_error(err))?;
        if token.is_empty() {
            return self.quit(OutcomeKind::PresentationError, "Non-empty value expected");
        }
        Ok(token)
    }

    /// Rest of the current line up to the first control character; the line
    /// end is consumed, `\r\n` as one unit.
    pub fn next_line(&mut self, empty_allowed: bool) -> Flow<String> {
        let line = self
            .source
            .take_line(usize::MAX, false)
            .map_err(|err| self.format_error(err))?;
        if line.is_empty() && !empty_allowed {
            return self.quit(OutcomeKind::PresentationError, "Non-empty line expected");
        }
        Ok(line)
    }

    // ------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------

    /// Next 32-bit integer.
    ///
    /// Values above `i32::MAX` that fit in `u32` are accepted and returned as
    /// their two's-complement bit pattern; `value as u32` recovers them.
    pub fn next_int(&mut self) -> Flow<i32> {
        let token = self.next_token_bounded(INT_MAX_LEN, false)?;
        match parse_signed_or_unsigned::<i32, u32>(&token, |v| v as i32) {
            Some(value) => Ok(value),
            None => self.quit(
                OutcomeKind::PresentationError,
                format!("A 32-bit signed integer expected, {} found", preview(&token)),
            ),
        }
    }

    /// Next 64-bit integer, with the same unsigned fallback as [`next_int`](Self::next_int).
    pub fn next_long(&mut self) -> Flow<i64> {
        let token = self.next_token_bounded(LONG_MAX_LEN, false)?;
        match parse_signed_or_unsigned::<i64, u64>(&token, |v| v as i64) {
            Some(value) => Ok(value),
            None => self.quit(
                OutcomeKind::PresentationError,
                format!("A 64-bit signed integer expected, {} found", preview(&token)),
            ),
        }
    }

    /// Next arbitrary-precision integer of at most `max_len` characters.
    pub fn next_big_integer(&mut self, max_len: usize) -> Flow<BigInt> {
        let token = self.next_token_bounded(max_len, false)?;
        let parsed = if is_decimal(&token) {
            BigInt::from_str(&token).ok()
        } else {
            None
        };
        match parsed {
            Some(value) => Ok(value),
            None => self.quit(
                OutcomeKind::PresentationError,
                format!("An integer expected, {} found", preview(&token)),
            ),
        }
    }

    /// Next 32-bit float. With `finite`, NaN and infinities are rejected.
    pub fn next_float(&mut self, finite: bool) -> Flow<f32> {
        let token = self.next_token()?;
        match token.parse::<f32>() {
            Ok(value) if !finite || value.is_finite() => Ok(value),
            _ => self.quit(
                OutcomeKind::PresentationError,
                format!("A float number expected, {} found", preview(&token)),
            ),
        }
    }

    /// Next 64-bit float. With `finite`, NaN and infinities are rejected.
    pub fn next_double(&mut self, finite: bool) -> Flow<f64> {
        let token = self.next_token()?;
        match token.parse::<f64>() {
            Ok(value) if !finite || value.is_finite() => Ok(value),
            _ => self.quit(
                OutcomeKind::PresentationError,
                format!("A double number expected, {} found", preview(&token)),
            ),
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Reopen a file-backed stream at its beginning.
    pub fn reset(&mut self) -> Flow<()> {
        let path = match &self.origin {
            Origin::File(path) => path.clone(),
            Origin::Reader => {
                return Outcome::fail(format!("{} stream cannot be reset", self.role)).raise()
            }
        };
        let reopened = Self::open(&path, self.role)?;
        self.source = reopened.source;
        Ok(())
    }

    /// Release the underlying reader. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.source.is_closed() {
            self.source.close();
            obs::emit_stream_closed(self.role.name());
        }
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_closed()
    }
}

/// `-?[0-9]+`
fn is_decimal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_signed_or_unsigned<S: FromStr, U: FromStr>(
    token: &str,
    reinterpret: impl FnOnce(U) -> S,
) -> Option<S> {
    if !is_decimal(token) {
        return None;
    }
    token
        .parse::<S>()
        .ok()
        .or_else(|| token.parse::<U>().ok().map(reinterpret))
}

fn preview(token: &str) -> String {
    match token.char_indices().nth(FOUND_PREVIEW_LEN) {
        Some((cut, _)) => format!("{}...", &token[..cut]),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(text: &str) -> InStream {
        InStream::from_text(text, StreamRole::Output).expect("stream")
    }

    fn answer(text: &str) -> InStream {
        InStream::from_text(text, StreamRole::Answer).expect("stream")
    }

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let mut s = output("  alpha\tbeta\r\ngamma  ");
        assert_eq!(s.next_token().unwrap(), "alpha");
        assert_eq!(s.next_token().unwrap(), "beta");
        assert_eq!(s.next_token().unwrap(), "gamma");
        assert!(s.seek_eof().unwrap());
    }

    #[test]
    fn test_token_at_eof_is_presentation_error() {
        let mut s = output("   \n");
        let err = s.next_token().unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::PresentationError);
        assert_eq!(err.message(), "Unexpected end of file");
    }

    #[test]
    fn test_zero_bound_token_is_rejected() {
        let mut s = output("x");
        let err = s.next_token_bounded(0, true).unwrap_err();
        assert_eq!(err.message(), "Non-empty value expected");
    }

    #[test]
    fn test_overlong_token_names_bound() {
        let mut s = output("123456789012");
        let err = s.next_int().unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::PresentationError);
        assert!(err.message().contains("at most 11 characters"));
    }

    #[test]
    fn test_next_int_range() {
        let mut s = output("0 -2147483648 2147483647 -0 007");
        assert_eq!(s.next_int().unwrap(), 0);
        assert_eq!(s.next_int().unwrap(), i32::MIN);
        assert_eq!(s.next_int().unwrap(), i32::MAX);
        assert_eq!(s.next_int().unwrap(), 0);
        assert_eq!(s.next_int().unwrap(), 7);
    }

    #[test]
    fn test_next_int_unsigned_fallback() {
        let mut s = output("4294967295 2147483648");
        assert_eq!(s.next_int().unwrap() as u32, u32::MAX);
        assert_eq!(s.next_int().unwrap() as u32, 2_147_483_648);
    }

    #[test]
    fn test_next_int_overflow_fails() {
        let mut s = output("4294967296");
        let err = s.next_int().unwrap_err();
        assert_eq!(
            err.message(),
            "A 32-bit signed integer expected, 4294967296 found"
        );

        let mut s = output("-2147483649");
        assert!(s.next_int().is_err());
    }

    #[test]
    fn test_next_int_grammar() {
        for bad in ["+5", "-", "1.0", "12a", "0x10", "--1"] {
            let mut s = output(bad);
            let err = s.next_int().unwrap_err();
            assert_eq!(err.kind(), OutcomeKind::PresentationError, "{}", bad);
        }
    }

    #[test]
    fn test_next_long_range() {
        let mut s = output("-9223372036854775808 9223372036854775807 18446744073709551615");
        assert_eq!(s.next_long().unwrap(), i64::MIN);
        assert_eq!(s.next_long().unwrap(), i64::MAX);
        assert_eq!(s.next_long().unwrap() as u64, u64::MAX);
    }

    #[test]
    fn test_next_long_overflow_fails() {
        let mut s = output("18446744073709551616");
        let err = s.next_long().unwrap_err();
        assert!(err.message().starts_with("A 64-bit signed integer expected"));
    }

    #[test]
    fn test_big_integer() {
        let mut s = output("-123456789012345678901234567890 12x");
        let value = s.next_big_integer(100).unwrap();
        assert_eq!(value.to_string(), "-123456789012345678901234567890");
        let err = s.next_big_integer(100).unwrap_err();
        assert_eq!(err.message(), "An integer expected, 12x found");
    }

    #[test]
    fn test_big_integer_bound() {
        let mut s = output("123456");
        let err = s.next_big_integer(5).unwrap_err();
        assert!(err.message().contains("at most 5 characters"));
    }

    #[test]
    fn test_floats() {
        let mut s = output("1.5 -2e3 .25 nan inf 1e400");
        assert_eq!(s.next_double(true).unwrap(), 1.5);
        assert_eq!(s.next_double(true).unwrap(), -2000.0);
        assert_eq!(s.next_float(true).unwrap(), 0.25);
        assert!(s.next_double(false).unwrap().is_nan());
        let err = s.next_double(true).unwrap_err();
        assert_eq!(err.message(), "A double number expected, inf found");
        let err = s.next_double(true).unwrap_err();
        assert!(err.message().contains("1e400"));
    }

    #[test]
    fn test_float_rejects_garbage() {
        let mut s = output("abc");
        let err = s.next_float(false).unwrap_err();
        assert_eq!(err.message(), "A float number expected, abc found");
    }

    #[test]
    fn test_long_found_text_is_truncated() {
        let long = "x".repeat(150);
        let mut s = output(&long);
        let err = s.next_double(false).unwrap_err();
        let expected = format!("A double number expected, {}... found", "x".repeat(100));
        assert_eq!(err.message(), expected);
    }

    #[test]
    fn test_answer_stream_escalates_to_fail() {
        let mut s = answer("abc");
        let err = s.next_int().unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::Fail);

        let err = s.quit::<()>(OutcomeKind::WrongAnswer, "bad jury").unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::Fail);

        let err = s.quit::<()>(OutcomeKind::Ok, "fine").unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::Ok);
    }

    #[test]
    fn test_input_stream_escalates_to_fail() {
        let mut s = InStream::from_text("", StreamRole::Input).unwrap();
        assert_eq!(s.next_token().unwrap_err().kind(), OutcomeKind::Fail);
    }

    #[test]
    fn test_output_stream_keeps_kind() {
        let s = output("");
        let err = s.quit::<()>(OutcomeKind::WrongAnswer, "differs").unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::WrongAnswer);
    }

    #[test]
    fn test_remap_entry() {
        let mut s = output("");
        s.remap(OutcomeKind::WrongAnswer, OutcomeKind::PresentationError);
        let err = s.quit::<()>(OutcomeKind::WrongAnswer, "x").unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::PresentationError);
    }

    #[test]
    fn test_quit_points_is_not_remapped() {
        let s = answer("");
        let err = s.quit_points::<()>(5, "partial").unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::Points);
        assert_eq!(err.comment(), "5 partial");
    }

    #[test]
    fn test_next_line() {
        let mut s = output("first line\r\n\nlast");
        assert_eq!(s.next_line(false).unwrap(), "first line");
        let err = s.next_line(false).unwrap_err();
        assert_eq!(err.message(), "Non-empty line expected");
        assert_eq!(s.next_line(true).unwrap(), "last");
        assert!(s.is_eof());
    }

    #[test]
    fn test_next_line_excludes_control_characters() {
        let mut s = output("ab\u{1}cd\u{b}ef\nnext");
        assert_eq!(s.next_line(true).unwrap(), "ab");
        assert_eq!(s.next_line(true).unwrap(), "cd");
        assert_eq!(s.next_line(true).unwrap(), "ef");
        assert_eq!(s.next_line(false).unwrap(), "next");
        assert!(s.is_eof());
    }

    #[test]
    fn test_expect_eoln_and_eof() {
        let mut s = output("1 2\n3");
        s.next_int().unwrap();
        assert!(s.expect_eoln("one per line").is_err());
        s.next_int().unwrap();
        s.expect_eoln("one per line").unwrap();
        s.skip_line().unwrap();
        s.next_int().unwrap();
        s.expect_eof("trailing data").unwrap();
    }

    #[test]
    fn test_next_token_with_custom_delimiters() {
        let mut s = output(",,a;b,c");
        assert_eq!(s.next_token_with(",", ",").unwrap(), "a;b");
        assert_eq!(s.next_token_with(",", ",").unwrap(), "c");
        assert!(s.next_token_with(",", ",").is_err());
    }

    #[test]
    fn test_char_level_access() {
        let mut s = output("ab");
        assert_eq!(s.current_char(), Some('a'));
        assert_eq!(s.next_char().unwrap(), Some('a'));
        assert_eq!(s.next_char().unwrap(), Some('b'));
        assert_eq!(s.next_char().unwrap(), None);
        assert!(s.is_eof());
    }

    #[test]
    fn test_invalid_utf8_is_format_error() {
        let mut s = InStream::from_reader(Cursor::new(vec![b'1', b' ', 0xC3]), StreamRole::Output)
            .unwrap();
        assert_eq!(s.next_int().unwrap(), 1);
        let err = s.next_token().unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::PresentationError);
        assert!(err.message().contains("invalid UTF-8"));
    }

    #[test]
    fn test_reader_stream_cannot_reset() {
        let mut s = output("1");
        assert_eq!(s.reset().unwrap_err().kind(), OutcomeKind::Fail);
    }

    #[test]
    fn test_file_stream_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "10 20").unwrap();

        let mut s = InStream::open(&path, StreamRole::Input).unwrap();
        assert_eq!(s.next_int().unwrap(), 10);
        s.reset().unwrap();
        assert_eq!(s.next_int().unwrap(), 10);
        assert_eq!(s.next_int().unwrap(), 20);
    }

    #[test]
    fn test_missing_file_classified_by_role() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = InStream::open(&path, StreamRole::Output).unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::PresentationError);
        assert!(err.message().starts_with("File not found"));

        let err = InStream::open(&path, StreamRole::Answer).unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::Fail);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut s = output("1 2");
        s.close();
        s.close();
        assert!(s.is_closed());
        assert!(s.seek_eof().unwrap());
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(120);
        let shown = preview(&text);
        assert_eq!(shown.chars().count(), 103);
        assert!(shown.ends_with("..."));
    }
}
