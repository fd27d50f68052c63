use super::span::Span;

/// A byte cursor over tutorial source with position tracking.
///
/// Only ever stops on ASCII delimiters, so any span taken between two stops
/// lies on UTF-8 character boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|r| r.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, clamped to the end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Moves to an absolute position, clamped to the end of input.
    pub fn jump_to(&mut self, pos: usize) {
        self.i = pos.min(self.s.len());
    }

    /// True when the cursor sits at the first byte of a line.
    pub fn at_line_start(&self) -> bool {
        self.i == 0 || self.s.as_bytes().get(self.i - 1) == Some(&b'\n')
    }

    /// If the line starting at the cursor holds only whitespace, returns the
    /// position just past it (after its newline, or end of input).
    pub fn blank_line_end(&self) -> Option<usize> {
        let b = self.s.as_bytes();
        let mut j = self.i;
        while j < b.len() && matches!(b[j], b' ' | b'\t' | b'\r') {
            j += 1;
        }
        match b.get(j) {
            Some(b'\n') => Some(j + 1),
            None if j > self.i => Some(j),
            _ => None,
        }
    }

    /// Skips spaces and tabs (not newlines).
    pub fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.i += 1;
        }
    }

    /// Moves to the next newline without consuming it.
    pub fn skip_to_line_end(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.i += 1;
        }
    }

    /// Reads a run of ASCII letters, returning its span.
    pub fn read_letters(&mut self) -> Span {
        let start = self.i;
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.i += 1;
        }
        Span::new(start, self.i)
    }

    /// Reads a brace-delimited argument starting at the cursor.
    ///
    /// Braces nest and backslash escapes (`\{`, `\}`) are skipped. Returns the
    /// inner span and leaves the cursor after the closing brace. When the
    /// cursor is not on `{` or the group never closes, the cursor is restored
    /// and `None` is returned.
    pub fn read_group(&mut self) -> Option<Span> {
        self.read_delimited(b'{', b'}')
    }

    /// Reads a bracket-delimited optional argument (`[...]`) at the cursor.
    pub fn read_optional(&mut self) -> Option<Span> {
        self.read_delimited(b'[', b']')
    }

    fn read_delimited(&mut self, open: u8, close: u8) -> Option<Span> {
        if self.peek() != Some(open) {
            return None;
        }
        let saved = self.i;
        self.i += 1;
        let inner_start = self.i;
        let mut depth = 1usize;

        while let Some(b) = self.bump() {
            if b == b'\\' {
                self.bump();
            } else if b == open {
                depth += 1;
            } else if b == close {
                depth -= 1;
                if depth == 0 {
                    return Some(Span::new(inner_start, self.i - 1));
                }
            }
        }

        self.i = saved;
        None
    }

    /// Finds the next occurrence of `pat` at or after the cursor, returning
    /// its absolute position.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.s.get(self.i..)?.find(pat).map(|p| p + self.i)
    }
}
