//! Entity string tokenizer
//!
//! Splits an entity string into whitespace-separated tokens:
//! - Bytes `<= ' '` separate tokens
//! - `"..."` is read as one token (no escapes, an unterminated quote runs to end of input)
//! - `//` starts a comment that runs to end of line
//! - Braces are only special when they stand alone; `{foo` is a single word

/// A single token pulled from the entity string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text without surrounding quotes
    pub text: &'a str,
    /// Whether the token was quoted in the source
    pub quoted: bool,
    /// 1-based line the token starts on
    pub line: usize,
}

impl<'a> Token<'a> {
    /// Check if this token opens a record
    pub fn is_open_brace(&self) -> bool {
        self.text == "{"
    }

    /// Check if this token closes a record
    pub fn is_close_brace(&self) -> bool {
        self.text == "}"
    }
}

/// Cursor over an entity string
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `src`
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0, line: 1 }
    }

    /// Current line number (1-based)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Check if the cursor has consumed the whole input
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Read the next token, advancing the cursor.
    ///
    /// Returns `None` once only whitespace and comments remain.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let bytes = self.src.as_bytes();

        loop {
            while self.pos < bytes.len() && bytes[self.pos] <= b' ' {
                if bytes[self.pos] == b'\n' {
                    self.line += 1;
                }
                self.pos += 1;
            }

            if self.pos >= bytes.len() {
                return None;
            }

            if bytes[self.pos] == b'/' && bytes.get(self.pos + 1) == Some(&b'/') {
                while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }

            break;
        }

        let line = self.line;

        if bytes[self.pos] == b'"' {
            let start = self.pos + 1;
            let mut end = start;
            while end < bytes.len() && bytes[end] != b'"' {
                if bytes[end] == b'\n' {
                    self.line += 1;
                }
                end += 1;
            }
            // Skip the closing quote if there is one
            self.pos = (end + 1).min(bytes.len());
            return Some(Token {
                text: &self.src[start..end],
                quoted: true,
                line,
            });
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos] > b' ' {
            self.pos += 1;
        }

        Some(Token {
            text: &self.src[start..self.pos],
            quoted: false,
            line,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
