use crate::error::WireError;

// ── TokenReader ───────────────────────────────────────────────────────────

/// Whitespace-delimited token scanner over a record stream.
///
/// Remembers the 1-based line/column where the most recent token started,
/// so errors point at the offending token rather than past it.
pub struct TokenReader<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
    tok_line: usize,
    tok_col: usize,
}

impl<'s> TokenReader<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1, tok_line: 1, tok_col: 1 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Builds a [`WireError`] pointing at the most recent token.
    pub fn error(&self, msg: impl Into<String>) -> WireError {
        WireError::new(msg, self.tok_line, self.tok_col)
    }

    /// Returns the next token, or `None` at a clean end of stream.
    pub fn next_token(&mut self) -> Option<&'s str> {
        self.skip_whitespace();
        self.tok_line = self.line;
        self.tok_col = self.col;
        let start = self.pos;
        while matches!(self.peek(), Some(c) if !c.is_whitespace()) {
            self.advance();
        }
        if start == self.pos {
            None
        } else {
            Some(&self.src[start..self.pos])
        }
    }

    /// Returns the next token; a truncated stream is an error here.
    pub fn expect_token(&mut self) -> Result<&'s str, WireError> {
        match self.next_token() {
            Some(tok) => Ok(tok),
            None => Err(self.error("unexpected end of stream")),
        }
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        let tok = self.expect_token()?;
        tok.parse::<i32>()
            .map_err(|_| self.error(format!("expected an integer, got {:?}", tok)))
    }

    pub fn read_usize(&mut self) -> Result<usize, WireError> {
        let tok = self.expect_token()?;
        tok.parse::<usize>()
            .map_err(|_| self.error(format!("expected a count, got {:?}", tok)))
    }

    /// Reads a `0`/`1` visibility flag. Anything else is an error.
    pub fn read_flag(&mut self) -> Result<bool, WireError> {
        match self.expect_token()? {
            "0" => Ok(false),
            "1" => Ok(true),
            tok => Err(self.error(format!("expected flag 0 or 1, got {:?}", tok))),
        }
    }

    /// Reads a bare word (e.g. a color label) as an owned string.
    pub fn read_word(&mut self) -> Result<String, WireError> {
        self.expect_token().map(str::to_string)
    }

    /// True when only whitespace remains.
    pub fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.src.len()
    }
}
