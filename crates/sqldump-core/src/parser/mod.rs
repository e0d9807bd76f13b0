//! SQL Parser
//!
//! A hand-written recursive descent parser with one token of lookahead.

mod error;
#[allow(clippy::module_inception)]
mod parser;
mod statement;

pub use error::{ParseError, SchemaError};
pub use parser::Parser;
