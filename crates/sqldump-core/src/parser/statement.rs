//! Standalone parsers for the four data-manipulation statement grammars.
//!
//! Each entry point drives a fresh linear grammar over the shared
//! scanner/pushback machinery and fails on the first unexpected token
//! with no partial record.

use std::io::Read;

use tracing::debug;

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{DeleteStatement, InsertStatement, SelectStatement, UpdateStatement};
use crate::lexer::TokenKind;

impl<R: Read> Parser<R> {
    /// Parses `SELECT field {, field} FROM ident`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first token that does not match
    /// the grammar.
    pub fn parse_select(&mut self) -> Result<SelectStatement, ParseError> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Select {
            return Err(ParseError::unexpected(token.literal, "SELECT"));
        }

        let fields = self.parse_field_list()?;

        let token = self.next_significant()?;
        if token.kind != TokenKind::From {
            return Err(ParseError::unexpected(token.literal, "FROM"));
        }

        let table_name = self.parse_table_name()?;
        let stmt = SelectStatement { fields, table_name };
        debug!(table = %stmt.table_name, fields = stmt.fields.len(), "parsed SELECT");
        Ok(stmt)
    }

    /// Parses `INSERT INTO ident ( ident {, ident} ) VALUES ( string
    /// {, string} )`. The record's field list is the concatenation of
    /// column names and value literals in source order.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first token that does not match
    /// the grammar.
    pub fn parse_insert(&mut self) -> Result<InsertStatement, ParseError> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Insert {
            return Err(ParseError::unexpected(token.literal, "INSERT"));
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::Into {
            return Err(ParseError::unexpected(token.literal, "INTO"));
        }

        let table_name = self.parse_table_name()?;

        let token = self.next_significant()?;
        if token.kind != TokenKind::OpenParen {
            return Err(ParseError::unexpected(token.literal, "("));
        }

        let mut fields = Vec::new();
        loop {
            let token = self.next_significant()?;
            if token.kind != TokenKind::Ident {
                return Err(ParseError::unexpected(token.literal, "field"));
            }
            fields.push(token.literal);

            let token = self.next_significant()?;
            if token.kind != TokenKind::Comma {
                self.push_back();
                break;
            }
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::CloseParen {
            return Err(ParseError::unexpected(token.literal, ")"));
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::Values {
            return Err(ParseError::unexpected(token.literal, "VALUES"));
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::OpenParen {
            return Err(ParseError::unexpected(token.literal, "("));
        }

        loop {
            let token = self.next_significant()?;
            if token.kind != TokenKind::String {
                return Err(ParseError::unexpected(token.literal, "value"));
            }
            fields.push(token.literal);

            let token = self.next_significant()?;
            if token.kind != TokenKind::Comma {
                self.push_back();
                break;
            }
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::CloseParen {
            return Err(ParseError::unexpected(token.literal, ")"));
        }

        let stmt = InsertStatement { fields, table_name };
        debug!(table = %stmt.table_name, fields = stmt.fields.len(), "parsed INSERT");
        Ok(stmt)
    }

    /// Parses `DELETE field {, field} FROM ident`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first token that does not match
    /// the grammar.
    pub fn parse_delete(&mut self) -> Result<DeleteStatement, ParseError> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Delete {
            return Err(ParseError::unexpected(token.literal, "DELETE"));
        }

        let fields = self.parse_field_list()?;

        let token = self.next_significant()?;
        if token.kind != TokenKind::From {
            return Err(ParseError::unexpected(token.literal, "FROM"));
        }

        let table_name = self.parse_table_name()?;
        let stmt = DeleteStatement { fields, table_name };
        debug!(table = %stmt.table_name, fields = stmt.fields.len(), "parsed DELETE");
        Ok(stmt)
    }

    /// Parses `UPDATE ident SET ident = string {, ident = string} WHERE
    /// ident = size`.
    ///
    /// The record's fields are the flattened set-column/set-value
    /// sequence followed by the where-column name; the where-value is
    /// validated as an integer literal but not retained.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first token that does not match
    /// the grammar.
    pub fn parse_update(&mut self) -> Result<UpdateStatement, ParseError> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Update {
            return Err(ParseError::unexpected(token.literal, "UPDATE"));
        }

        let table_name = self.parse_table_name()?;

        let token = self.next_significant()?;
        if token.kind != TokenKind::Set {
            return Err(ParseError::unexpected(token.literal, "SET"));
        }

        let mut fields = Vec::new();
        loop {
            let token = self.next_significant()?;
            if token.kind != TokenKind::Ident {
                return Err(ParseError::unexpected(token.literal, "field"));
            }
            fields.push(token.literal);

            let token = self.next_significant()?;
            if token.kind != TokenKind::Equal {
                return Err(ParseError::unexpected(token.literal, "="));
            }

            let token = self.next_significant()?;
            if token.kind != TokenKind::String {
                return Err(ParseError::unexpected(token.literal, "value"));
            }
            fields.push(token.literal);

            let token = self.next_significant()?;
            if token.kind != TokenKind::Comma {
                self.push_back();
                break;
            }
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::Where {
            return Err(ParseError::unexpected(token.literal, "WHERE"));
        }

        let token = self.next_significant()?;
        if token.kind != TokenKind::Ident {
            return Err(ParseError::unexpected(token.literal, "field"));
        }
        fields.push(token.literal);

        let token = self.next_significant()?;
        if token.kind != TokenKind::Equal {
            return Err(ParseError::unexpected(token.literal, "="));
        }

        // the where-value is validated but not retained
        let token = self.next_significant()?;
        if token.kind != TokenKind::Size {
            return Err(ParseError::unexpected(token.literal, "integer"));
        }

        let stmt = UpdateStatement { fields, table_name };
        debug!(table = %stmt.table_name, fields = stmt.fields.len(), "parsed UPDATE");
        Ok(stmt)
    }

    /// Parses a comma-delimited list of fields, each an identifier or
    /// `*`.
    fn parse_field_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut fields = Vec::new();
        loop {
            let token = self.next_significant()?;
            if !matches!(token.kind, TokenKind::Ident | TokenKind::Asterisk) {
                return Err(ParseError::unexpected(token.literal, "field"));
            }
            fields.push(token.literal);

            let token = self.next_significant()?;
            if token.kind != TokenKind::Comma {
                self.push_back();
                break;
            }
        }
        Ok(fields)
    }

    /// Parses a table name identifier.
    fn parse_table_name(&mut self) -> Result<String, ParseError> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Ident {
            return Err(ParseError::unexpected(token.literal, "table name"));
        }
        Ok(token.literal)
    }
}
