//! Recursive descent parser for the schema-definition subset.

use std::io::Read;

use indexmap::IndexMap;
use tracing::debug;

use super::error::{ParseError, SchemaError};
use crate::lexer::{Scanner, Token, TokenKind};
use crate::schema::{Column, Constraint, DefaultValue, Schema, Table};

/// SQL parser over a character stream.
///
/// Wraps a [`Scanner`] with a one-token pushback buffer. A parser
/// instance is single-owner mutable state; drive each parse start to
/// finish from one logical thread of control.
pub struct Parser<R: Read> {
    scanner: Scanner<R>,
    /// Token pushed back for the next read, capacity one.
    lookahead: Option<Token>,
    /// Most recently returned token, the pushback candidate.
    previous: Option<Token>,
}

impl<R: Read> Parser<R> {
    /// Creates a new parser for the given reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            scanner: Scanner::new(reader),
            lookahead: None,
            previous: None,
        }
    }

    /// Returns the buffered token if one was pushed back, otherwise
    /// pulls the next token from the scanner.
    pub(crate) fn next_token(&mut self) -> Result<Token, ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.scanner.scan()?,
        };
        self.previous = Some(token.clone());
        Ok(token)
    }

    /// Marks the last returned token to be re-returned by the next read.
    ///
    /// Capacity is exactly one: pushing back twice without an
    /// intervening read is a caller error.
    pub(crate) fn push_back(&mut self) {
        debug_assert!(
            self.lookahead.is_none(),
            "double pushback without an intervening read"
        );
        self.lookahead = self.previous.take();
    }

    /// Reads the next token, skipping a single leading whitespace or
    /// comment token. Consecutive trivia does not occur in practice
    /// because whitespace runs and comment bodies each coalesce into one
    /// token.
    pub(crate) fn next_significant(&mut self) -> Result<Token, ParseError> {
        let token = self.next_token()?;
        if token.is_trivia() {
            return self.next_token();
        }
        Ok(token)
    }

    /// Reads the next significant token and requires an identifier.
    pub(crate) fn expect_ident(&mut self, expected: &str) -> Result<String, ParseError> {
        let token = self.next_significant()?;
        if token.kind == TokenKind::Ident {
            Ok(token.literal)
        } else {
            Err(ParseError::unexpected(token.literal, expected))
        }
    }

    /// Parses every `CREATE TABLE` in the stream into a schema.
    ///
    /// # Errors
    ///
    /// On failure the returned [`SchemaError`] carries every table
    /// parsed before the error.
    pub fn parse_schema(&mut self) -> Result<Schema, SchemaError> {
        let mut schema = Schema::new();
        loop {
            match self.parse_table() {
                Ok(Some(table)) => {
                    debug!(table = %table.name, columns = table.columns.len(), "parsed table");
                    schema.insert(table.name.clone(), table);
                }
                Ok(None) => break,
                Err(source) => {
                    return Err(SchemaError {
                        partial: schema,
                        source,
                    });
                }
            }
        }
        Ok(schema)
    }

    /// Parses one top-level statement. Returns `None` at clean end of
    /// input.
    fn parse_table(&mut self) -> Result<Option<Table>, ParseError> {
        // Preamble: skip DROP/LOCK/UNLOCK statements and bare
        // semicolons/comments until CREATE.
        loop {
            let token = self.next_significant()?;
            match token.kind {
                TokenKind::Drop | TokenKind::Lock | TokenKind::Unlock => self.skip_statement()?,
                TokenKind::Semicolon | TokenKind::Annotation => {}
                TokenKind::Create => break,
                TokenKind::Eof => return Ok(None),
                kind => {
                    return Err(ParseError::UnexpectedStatement {
                        kind,
                        literal: token.literal,
                    });
                }
            }
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::Table {
            return Err(ParseError::unexpected(token.literal, "CREATE TABLE"));
        }

        let name = self.expect_ident("table name")?;
        let mut table = Table::new(name);

        let token = self.next_significant()?;
        if token.kind != TokenKind::OpenParen {
            return Err(ParseError::unexpected(token.literal, "("));
        }

        loop {
            let token = self.next_significant()?;
            match token.kind {
                TokenKind::Ident => {
                    self.push_back();
                    let column = self.parse_column()?;
                    table.columns.insert(column.name.clone(), column);
                }
                TokenKind::Primary => {
                    self.push_back();
                    table.primary_key = self.parse_primary_key()?;
                }
                TokenKind::Unique => {
                    let (index, column) = self.parse_key_clause()?;
                    table.unique_keys.insert(index, column);
                }
                TokenKind::Key => {
                    self.push_back();
                    let (index, column) = self.parse_key_clause()?;
                    table.keys.insert(index, column);
                }
                TokenKind::Constraint => {
                    self.push_back();
                    let constraint = self.parse_constraint()?;
                    table
                        .constraints
                        .insert(constraint.local_column.clone(), constraint);
                }
                // tolerated stray separators/artifacts
                TokenKind::Comma | TokenKind::Asterisk => {}
                TokenKind::CloseParen => {
                    let token = self.next_significant()?;
                    if token.kind != TokenKind::Semicolon {
                        self.push_back();
                        table.extras = self.parse_extras()?;
                    }
                    return Ok(Some(table));
                }
                TokenKind::Semicolon => return Ok(Some(table)),
                _ => {
                    return Err(ParseError::unexpected(
                        token.literal,
                        "ident or primary or unique or key or constraint",
                    ));
                }
            }
        }
    }

    /// Skips every token up to and including the terminating semicolon.
    fn skip_statement(&mut self) -> Result<(), ParseError> {
        loop {
            let token = self.next_significant()?;
            match token.kind {
                TokenKind::Semicolon => return Ok(()),
                TokenKind::Eof => return Err(ParseError::UnexpectedEof),
                _ => {}
            }
        }
    }

    /// Parses one column definition up to a lookahead `,`, `*`, or `)`,
    /// which is pushed back for the member loop.
    fn parse_column(&mut self) -> Result<Column, ParseError> {
        let name = self.expect_ident("ident")?;
        let (type_name, size) = self.parse_type()?;
        let mut column = Column {
            name,
            type_name,
            size,
            ..Column::default()
        };

        loop {
            let token = self.next_significant()?;
            match token.kind {
                TokenKind::Default => {
                    self.push_back();
                    let value = self.parse_default()?;
                    if value == DefaultValue::Null {
                        column.nullable = true;
                    }
                    column.default = Some(value);
                }
                TokenKind::Null => column.nullable = true,
                TokenKind::Not => {
                    let token = self.next_significant()?;
                    if token.kind != TokenKind::Null {
                        return Err(ParseError::unexpected(token.literal, "NULL"));
                    }
                    column.nullable = false;
                }
                TokenKind::Comment => {
                    let token = self.next_significant()?;
                    if token.kind != TokenKind::String {
                        return Err(ParseError::unexpected(token.literal, "comment string"));
                    }
                    column.comment = token.literal;
                }
                TokenKind::AutoIncrement => column.auto_increment = true,
                TokenKind::Comma | TokenKind::Asterisk | TokenKind::CloseParen => {
                    self.push_back();
                    return Ok(column);
                }
                TokenKind::Eof => return Err(ParseError::UnexpectedEof),
                _ => {
                    return Err(ParseError::unexpected(token.literal, "column constraint"));
                }
            }
        }
    }

    /// Parses a type keyword with an optional parenthesized size.
    /// Size defaults to 0 when the parentheses are absent.
    fn parse_type(&mut self) -> Result<(String, u32), ParseError> {
        let token = self.next_significant()?;
        let Some(type_name) = token.kind.type_name() else {
            return Err(ParseError::unexpected(token.literal, "type"));
        };

        let open = self.next_significant()?;
        if open.kind != TokenKind::OpenParen {
            self.push_back();
            return Ok((type_name.to_owned(), 0));
        }

        let size = self.next_significant()?;
        let close = self.next_significant()?;
        if size.kind != TokenKind::Size || close.kind != TokenKind::CloseParen {
            let found = format!(
                "{}{}{}{}",
                token.literal, open.literal, size.literal, close.literal
            );
            return Err(ParseError::unexpected(found, "type(size)"));
        }

        Ok((type_name.to_owned(), size.literal.parse().unwrap_or(0)))
    }

    /// Parses a `DEFAULT (NULL | CURRENT_TIMESTAMP | string)` clause.
    fn parse_default(&mut self) -> Result<DefaultValue, ParseError> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Default {
            return Err(ParseError::unexpected(token.literal, "DEFAULT"));
        }

        let token = self.next_significant()?;
        match token.kind {
            TokenKind::Null => Ok(DefaultValue::Null),
            TokenKind::CurrentTimestamp => Ok(DefaultValue::CurrentTimestamp),
            TokenKind::String => Ok(DefaultValue::Literal(token.literal)),
            _ => Err(ParseError::unexpected(token.literal, "NULL or value")),
        }
    }

    /// Parses `PRIMARY KEY` followed by a parenthesized or bare
    /// identifier.
    fn parse_primary_key(&mut self) -> Result<String, ParseError> {
        let first = self.next_significant()?;
        let second = self.next_significant()?;
        if first.kind != TokenKind::Primary || second.kind != TokenKind::Key {
            let found = format!("{}{}", first.literal, second.literal);
            return Err(ParseError::unexpected(found, "PRIMARY KEY"));
        }

        let token = self.next_significant()?;
        match token.kind {
            TokenKind::OpenParen => {
                self.push_back();
                self.parse_paren_ident("ident")
            }
            TokenKind::Ident => Ok(token.literal),
            _ => Err(ParseError::unexpected(token.literal, "ident")),
        }
    }

    /// Parses a parenthesized single identifier: `( ident )`.
    fn parse_paren_ident(&mut self, expected: &str) -> Result<String, ParseError> {
        let open = self.next_significant()?;
        if open.kind != TokenKind::OpenParen {
            return Err(ParseError::unexpected(open.literal, expected));
        }

        let ident = self.next_significant()?;
        if ident.kind != TokenKind::Ident {
            return Err(ParseError::unexpected(ident.literal, expected));
        }

        let close = self.next_significant()?;
        if close.kind != TokenKind::CloseParen {
            let found = format!("{}{}", ident.literal, close.literal);
            return Err(ParseError::unexpected(found, expected));
        }

        Ok(ident.literal)
    }

    /// Parses a key clause shared by `UNIQUE` and bare `KEY`: the `KEY`
    /// keyword, an index name, then a bare or parenthesized column
    /// reference. The `UNIQUE` keyword itself is consumed by the caller.
    fn parse_key_clause(&mut self) -> Result<(String, String), ParseError> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Key {
            return Err(ParseError::unexpected(token.literal, "KEY"));
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::Ident {
            return Err(ParseError::unexpected(token.literal, "index"));
        }
        let index = token.literal;

        let token = self.next_significant()?;
        let column = match token.kind {
            TokenKind::Ident => token.literal,
            TokenKind::OpenParen => {
                self.push_back();
                self.parse_paren_ident("ident")?
            }
            _ => return Err(ParseError::unexpected(token.literal, "ident")),
        };

        Ok((index, column))
    }

    /// Parses `CONSTRAINT ident FOREIGN KEY (ident) REFERENCES ident
    /// (ident)`.
    fn parse_constraint(&mut self) -> Result<Constraint, ParseError> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Constraint {
            return Err(ParseError::unexpected(token.literal, "CONSTRAINT"));
        }

        let index = self.expect_ident("ident")?;

        let first = self.next_significant()?;
        let second = self.next_significant()?;
        if first.kind != TokenKind::Foreign || second.kind != TokenKind::Key {
            let found = format!("{}{}", first.literal, second.literal);
            return Err(ParseError::unexpected(found, "FOREIGN KEY"));
        }

        let local_column = self.parse_paren_ident("ident")?;

        let token = self.next_significant()?;
        if token.kind != TokenKind::References {
            return Err(ParseError::unexpected(token.literal, "REFERENCES"));
        }

        let referenced_table = self.expect_ident("table name")?;
        let referenced_column = self.parse_paren_ident("column name")?;

        Ok(Constraint {
            index,
            local_column,
            referenced_table,
            referenced_column,
        })
    }

    /// Parses trailing `key=value` options up to the statement
    /// terminator. A `DEFAULT` keyword before a pair is absorbed, so
    /// `DEFAULT CHARSET=utf8` yields the key `charset`. Keys are
    /// lowercased.
    fn parse_extras(&mut self) -> Result<IndexMap<String, String>, ParseError> {
        let mut extras = IndexMap::new();
        loop {
            let token = self.next_significant()?;
            if token.kind == TokenKind::Semicolon {
                self.push_back();
                break;
            }
            if token.kind != TokenKind::Default {
                self.push_back();
            }
            let (key, value) = self.parse_key_value()?;
            extras.insert(key.to_lowercase(), value);
        }
        Ok(extras)
    }

    /// Parses one `ident = value` triple. `AUTO_INCREMENT` is accepted
    /// as a key token; the value may be an identifier, string, or
    /// integer.
    fn parse_key_value(&mut self) -> Result<(String, String), ParseError> {
        let key = self.next_significant()?;
        let eq = self.next_significant()?;
        let value = self.next_significant()?;

        let key_ok = matches!(key.kind, TokenKind::Ident | TokenKind::AutoIncrement);
        let value_ok = matches!(
            value.kind,
            TokenKind::Ident | TokenKind::String | TokenKind::Size
        );
        if !key_ok || eq.kind != TokenKind::Equal || !value_ok {
            let found = format!("{}{}{}", key.literal, eq.literal, value.literal);
            return Err(ParseError::unexpected(found, "key=value"));
        }

        Ok((key.literal, value.literal))
    }
}
