//! Flat statement records produced by the DML parsers.
//!
//! Each record is constructed once per parser invocation and never
//! mutated afterward.

/// A parsed `SELECT field {, field} FROM table` statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectStatement {
    /// Selected fields, `*` included verbatim.
    pub fields: Vec<String>,
    /// The table selected from.
    pub table_name: String,
}

/// A parsed `INSERT INTO table (cols...) VALUES (strings...)` statement.
///
/// `fields` is the concatenation of column names and value literals in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InsertStatement {
    /// Column names followed by value literals.
    pub fields: Vec<String>,
    /// The table inserted into.
    pub table_name: String,
}

/// A parsed `DELETE field {, field} FROM table` statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteStatement {
    /// Deleted fields, `*` included verbatim.
    pub fields: Vec<String>,
    /// The table deleted from.
    pub table_name: String,
}

/// A parsed `UPDATE table SET col=value {, col=value} WHERE col=int`
/// statement.
///
/// `fields` packs the alternating set-column/set-value pairs followed by
/// the where-column name. The where-value is validated as an integer
/// literal during parsing but not retained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateStatement {
    /// Set-column/set-value pairs, then the where-column name.
    pub fields: Vec<String>,
    /// The table updated.
    pub table_name: String,
}
