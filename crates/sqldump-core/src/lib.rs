//! # sqldump-core
//!
//! A streaming lexer and recursive descent parser for mysqldump-style
//! SQL. Two grammars are supported:
//!
//! - a schema-definition subset (`CREATE TABLE` with columns, keys,
//!   foreign-key constraints, and trailing storage-engine options),
//!   accumulated into a [`Schema`];
//! - four standalone statement grammars (`SELECT`, `INSERT`, `DELETE`,
//!   `UPDATE`), each parsed independently into a flat record.
//!
//! Input is pulled character by character from any [`std::io::Read`], so
//! large dumps are parsed without buffering the whole text.
//!
//! ```rust
//! use sqldump_core::Parser;
//!
//! let sql = "CREATE TABLE `user` (`id` bigint(20) NOT NULL AUTO_INCREMENT) ENGINE=InnoDB;";
//! let schema = Parser::new(sql.as_bytes()).parse_schema().unwrap();
//! assert_eq!(schema["user"].extras["engine"], "InnoDB");
//! ```
//!
//! Statement parsing is single-shot per parser instance:
//!
//! ```rust
//! use sqldump_core::Parser;
//!
//! let stmt = Parser::new("SELECT * FROM my_table".as_bytes())
//!     .parse_select()
//!     .unwrap();
//! assert_eq!(stmt.fields, vec!["*"]);
//! assert_eq!(stmt.table_name, "my_table");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod schema;

pub use ast::{DeleteStatement, InsertStatement, SelectStatement, UpdateStatement};
pub use lexer::{LexError, Scanner, Token, TokenKind};
pub use parser::{ParseError, Parser, SchemaError};
pub use schema::{Column, Constraint, DefaultValue, Schema, Table};
