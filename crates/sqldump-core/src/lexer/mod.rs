//! SQL Scanner
//!
//! A hand-written streaming lexer that pulls characters from a reader
//! and produces tokens on demand.

mod scanner;
mod token;

pub use scanner::{LexError, Scanner};
pub use token::{Token, TokenKind};
