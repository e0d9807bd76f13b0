//! Streaming SQL scanner.
//!
//! Converts a character stream into `(kind, literal)` tokens on demand.
//! The scanner holds at most one character of pushback and never looks
//! at more input than the current token requires, so arbitrarily large
//! dumps are lexed in constant memory.

use std::io::{self, BufReader, Read};

use super::{Token, TokenKind};

/// Errors produced while scanning.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// A single-quoted string literal reached end of input before the
    /// closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A backtick-quoted identifier reached end of input before the
    /// closing backtick.
    #[error("unterminated quoted identifier")]
    UnterminatedIdent,

    /// A `--` comment reached end of input before a newline.
    #[error("unterminated line comment")]
    UnterminatedComment,

    /// The input contained a byte sequence that is not valid UTF-8.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

/// A pull-based lexer over a character stream.
pub struct Scanner<R: Read> {
    reader: BufReader<R>,
    /// Single-character pushback slot.
    pending: Option<u8>,
}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

const fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

impl<R: Read> Scanner<R> {
    /// Creates a new scanner over the given reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            pending: None,
        }
    }

    /// Reads the next character, honoring the pushback slot.
    /// Returns `None` at end of input.
    fn read(&mut self) -> Result<Option<u8>, LexError> {
        if let Some(b) = self.pending.take() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Retracts the most recently read character. Capacity is one.
    fn unread(&mut self, b: u8) {
        debug_assert!(self.pending.is_none(), "double unread");
        self.pending = Some(b);
    }

    /// Scans the next token.
    ///
    /// After end of input every call returns an `Eof` token with the
    /// literal `"EOF"`.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] on an unterminated string literal, quoted
    /// identifier, or line comment, on invalid UTF-8, and on reader
    /// failure.
    pub fn scan(&mut self) -> Result<Token, LexError> {
        let Some(b) = self.read()? else {
            return Ok(Token::new(TokenKind::Eof, String::from("EOF")));
        };

        if is_whitespace(b) {
            return self.scan_whitespace(b);
        }
        if is_letter(b) {
            return self.scan_word(b);
        }
        if b.is_ascii_digit() {
            return self.scan_digits(b);
        }
        if b == b'\'' || b == b'`' {
            return self.scan_delimited(b);
        }
        if b == b'/' {
            match self.read()? {
                Some(b'*') => return self.scan_block_comment(),
                Some(other) => self.unread(other),
                None => {}
            }
            return Ok(Token::new(TokenKind::Illegal, String::from("/")));
        }
        if b == b'-' {
            match self.read()? {
                Some(b'-') => return self.scan_line_comment(),
                Some(other) => self.unread(other),
                None => {}
            }
            return Ok(Token::new(TokenKind::Illegal, String::from("-")));
        }

        let kind = match b {
            b',' => TokenKind::Comma,
            b'*' => TokenKind::Asterisk,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b';' => TokenKind::Semicolon,
            b'=' => TokenKind::Equal,
            _ => return self.scan_illegal(b),
        };
        Ok(Token::new(kind, (b as char).to_string()))
    }

    /// Consumes the rest of a multi-byte UTF-8 character whose lead byte
    /// matched no token class, so the `Illegal` literal carries the whole
    /// character rather than its first byte.
    fn scan_illegal(&mut self, lead: u8) -> Result<Token, LexError> {
        let len = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        let mut bytes = vec![lead];
        for _ in 1..len {
            match self.read()? {
                Some(b) if b & 0xC0 == 0x80 => bytes.push(b),
                Some(b) => {
                    self.unread(b);
                    break;
                }
                None => break,
            }
        }
        Ok(Token::new(TokenKind::Illegal, String::from_utf8(bytes)?))
    }

    /// Consumes a maximal run of whitespace characters.
    fn scan_whitespace(&mut self, first: u8) -> Result<Token, LexError> {
        let mut literal = String::new();
        literal.push(first as char);
        loop {
            match self.read()? {
                Some(b) if is_whitespace(b) => literal.push(b as char),
                Some(b) => {
                    self.unread(b);
                    break;
                }
                None => break,
            }
        }
        Ok(Token::new(TokenKind::Whitespace, literal))
    }

    /// Consumes a maximal run of letters, digits, and underscores and
    /// classifies it against the fixed keyword set. Unmatched runs are
    /// identifiers with their original case preserved.
    fn scan_word(&mut self, first: u8) -> Result<Token, LexError> {
        let mut literal = String::new();
        literal.push(first as char);
        loop {
            match self.read()? {
                Some(b) if is_letter(b) || b.is_ascii_digit() || b == b'_' => {
                    literal.push(b as char);
                }
                Some(b) => {
                    self.unread(b);
                    break;
                }
                None => break,
            }
        }
        let kind = TokenKind::keyword(&literal).unwrap_or(TokenKind::Ident);
        Ok(Token::new(kind, literal))
    }

    /// Consumes a maximal run of digits. Integers only: no sign,
    /// decimal point, or exponent.
    fn scan_digits(&mut self, first: u8) -> Result<Token, LexError> {
        let mut literal = String::new();
        literal.push(first as char);
        loop {
            match self.read()? {
                Some(b) if b.is_ascii_digit() => literal.push(b as char),
                Some(b) => {
                    self.unread(b);
                    break;
                }
                None => break,
            }
        }
        Ok(Token::new(TokenKind::Size, literal))
    }

    /// Consumes a delimited literal, excluding the delimiters.
    /// Backticks delimit quoted identifiers, single quotes delimit
    /// string literals. The body is accumulated as raw bytes and decoded
    /// once, so multi-byte UTF-8 content survives intact.
    fn scan_delimited(&mut self, delim: u8) -> Result<Token, LexError> {
        let mut bytes = Vec::new();
        loop {
            match self.read()? {
                Some(b) if b == delim => break,
                Some(b) => bytes.push(b),
                None => {
                    return Err(if delim == b'`' {
                        LexError::UnterminatedIdent
                    } else {
                        LexError::UnterminatedString
                    });
                }
            }
        }
        let kind = if delim == b'`' {
            TokenKind::Ident
        } else {
            TokenKind::String
        };
        Ok(Token::new(kind, String::from_utf8(bytes)?))
    }

    /// Consumes a block comment body up to and including `*/`.
    /// End of input before the terminator yields an `Illegal` token with
    /// an empty literal.
    fn scan_block_comment(&mut self) -> Result<Token, LexError> {
        loop {
            match self.read()? {
                None => return Ok(Token::new(TokenKind::Illegal, String::new())),
                Some(b'*') => match self.read()? {
                    Some(b'/') => break,
                    Some(other) => self.unread(other),
                    None => return Ok(Token::new(TokenKind::Illegal, String::new())),
                },
                Some(_) => {}
            }
        }
        Ok(Token::new(TokenKind::Annotation, String::new()))
    }

    /// Consumes a line comment body up to and including the newline.
    fn scan_line_comment(&mut self) -> Result<Token, LexError> {
        loop {
            match self.read()? {
                Some(b'\n') => return Ok(Token::new(TokenKind::Annotation, String::new())),
                Some(_) => {}
                None => return Err(LexError::UnterminatedComment),
            }
        }
    }
}
