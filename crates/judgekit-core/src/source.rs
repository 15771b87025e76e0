//! Single-pass UTF-8 character source.
//!
//! [`CharSource`] decodes a byte stream one character at a time and keeps
//! exactly one character of lookahead. It never seeks backwards; the only way
//! to start over is to build a new source (see `InStream::reset`).

use std::io::{self, BufRead, BufReader, Read};
use thiserror::Error;

/// Failures detected while reading characters.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid UTF-8 sequence at byte {offset}")]
    InvalidUtf8 { offset: u64 },

    #[error("a value of at most {max} characters was expected")]
    TooLong { max: usize },
}

/// Result type for character-level operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Token delimiter class.
///
/// Unicode `White_Space` without the no-break spaces and NEL, plus the
/// information separators U+001C..U+001F.
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

/// Whitespace that never ends a line. Control characters, TAB among them, are
/// not in-line whitespace.
pub fn is_inline_whitespace(c: char) -> bool {
    is_whitespace(c) && !c.is_control()
}

/// The two line terminator characters.
pub fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Characters that end a line when reading or skipping whole lines.
pub fn is_line_end(c: char) -> bool {
    c.is_control()
}

/// Character cursor over a UTF-8 byte stream.
pub struct CharSource<R> {
    reader: Option<BufReader<R>>,
    current: Option<char>,
    offset: u64,
}

impl<R: Read> CharSource<R> {
    /// Wrap `inner` and load the first character.
    pub fn new(inner: R) -> SourceResult<Self> {
        let mut source = Self {
            reader: Some(BufReader::new(inner)),
            current: None,
            offset: 0,
        };
        source.current = source.decode()?;
        Ok(source)
    }

    /// Lookahead character, `None` at end of file.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Bytes decoded so far, including the lookahead character.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// End of file or one of `\r`, `\n`.
    pub fn is_eoln(&self) -> bool {
        self.current.map_or(true, is_line_break)
    }

    /// Return the current character and load the next one.
    pub fn advance(&mut self) -> SourceResult<Option<char>> {
        let previous = self.current;
        if previous.is_some() {
            self.current = self.decode()?;
        }
        Ok(previous)
    }

    /// Consume characters while `pred` holds. Reports whether anything was consumed.
    pub fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) -> SourceResult<bool> {
        let mut skipped = false;
        while let Some(c) = self.current {
            if !pred(c) {
                break;
            }
            skipped = true;
            self.advance()?;
        }
        Ok(skipped)
    }

    /// Accumulate up to `max_len` characters matching `pred`.
    ///
    /// Matching characters beyond the bound are discarded when `skip_after`
    /// is set and rejected with [`SourceError::TooLong`] otherwise.
    pub fn take_while(
        &mut self,
        mut pred: impl FnMut(char) -> bool,
        max_len: usize,
        skip_after: bool,
    ) -> SourceResult<String> {
        let mut token = String::new();
        let mut taken = 0usize;
        while taken < max_len {
            match self.current {
                Some(c) if pred(c) => {
                    token.push(c);
                    taken += 1;
                    self.advance()?;
                }
                _ => break,
            }
        }
        if self.skip_while(&mut pred)? && !skip_after {
            return Err(SourceError::TooLong { max: max_len });
        }
        Ok(token)
    }

    pub fn skip_whitespace(&mut self) -> SourceResult<bool> {
        self.skip_while(is_whitespace)
    }

    pub fn skip_inline_whitespace(&mut self) -> SourceResult<bool> {
        self.skip_while(is_inline_whitespace)
    }

    /// Skip all whitespace and report whether end of file was reached.
    pub fn seek_eof(&mut self) -> SourceResult<bool> {
        self.skip_whitespace()?;
        Ok(self.is_eof())
    }

    /// Skip in-line whitespace and report whether end of line was reached.
    pub fn seek_eoln(&mut self) -> SourceResult<bool> {
        self.skip_inline_whitespace()?;
        Ok(self.is_eoln())
    }

    /// Consume one line end: `\r\n` as a unit, otherwise a single control
    /// character.
    pub fn skip_line_end(&mut self) -> SourceResult<bool> {
        match self.current {
            Some('\r') => {
                self.advance()?;
                if self.current == Some('\n') {
                    self.advance()?;
                }
                Ok(true)
            }
            Some(c) if is_line_end(c) => {
                self.advance()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Rest of the current line up to the first control character; the line
    /// end is consumed.
    pub fn take_line(&mut self, max_len: usize, skip_after: bool) -> SourceResult<String> {
        let line = self.take_while(|c| !is_line_end(c), max_len, skip_after)?;
        self.skip_line_end()?;
        Ok(line)
    }

    /// Skip the rest of the current line including its line end.
    pub fn skip_line(&mut self) -> SourceResult<()> {
        self.skip_while(|c| !is_line_end(c))?;
        self.skip_line_end()?;
        Ok(())
    }

    /// Release the underlying reader. Further reads see end of file.
    pub fn close(&mut self) {
        self.reader = None;
        self.current = None;
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    fn decode(&mut self) -> SourceResult<Option<char>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };
        let start = self.offset;
        let mut bytes = [0u8; 4];
        if !read_byte(reader, &mut bytes[0])? {
            return Ok(None);
        }
        let width = utf8_width(bytes[0]).ok_or(SourceError::InvalidUtf8 { offset: start })?;
        for slot in bytes.iter_mut().take(width).skip(1) {
            if !read_byte(reader, slot)? {
                return Err(SourceError::InvalidUtf8 { offset: start });
            }
        }
        self.offset += width as u64;
        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(SourceError::InvalidUtf8 { offset: start })
    }
}

/// Sequence length announced by a UTF-8 lead byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn read_byte<R: BufRead>(reader: &mut R, slot: &mut u8) -> io::Result<bool> {
    let available = loop {
        match reader.fill_buf() {
            Ok(buf) => break buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    };
    let Some(byte) = available.first().copied() else {
        return Ok(false);
    };
    *slot = byte;
    reader.consume(1);
    Ok(true)
}
