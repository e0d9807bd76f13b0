#![allow(dead_code)]

use sqldump_core::{
    DeleteStatement, InsertStatement, ParseError, Parser, Schema, SchemaError, SelectStatement,
    UpdateStatement,
};

pub fn parse_schema(sql: &str) -> Schema {
    Parser::new(sql.as_bytes())
        .parse_schema()
        .unwrap_or_else(|e| panic!("Failed to parse schema: {sql}\nError: {e}"))
}

pub fn schema_err(sql: &str) -> SchemaError {
    Parser::new(sql.as_bytes())
        .parse_schema()
        .expect_err(&format!("Expected schema parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    Parser::new(sql.as_bytes())
        .parse_select()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn select_err(sql: &str) -> ParseError {
    Parser::new(sql.as_bytes())
        .parse_select()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    Parser::new(sql.as_bytes())
        .parse_insert()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn insert_err(sql: &str) -> ParseError {
    Parser::new(sql.as_bytes())
        .parse_insert()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    Parser::new(sql.as_bytes())
        .parse_delete()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn delete_err(sql: &str) -> ParseError {
    Parser::new(sql.as_bytes())
        .parse_delete()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    Parser::new(sql.as_bytes())
        .parse_update()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn update_err(sql: &str) -> ParseError {
    Parser::new(sql.as_bytes())
        .parse_update()
        .expect_err(&format!("Expected parse error for: {sql}"))
}
