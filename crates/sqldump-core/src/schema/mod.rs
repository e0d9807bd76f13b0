//! Schema records built from `CREATE TABLE` statements.
//!
//! All name-keyed collections are [`IndexMap`]s so that declaration order
//! survives parsing. Re-inserting an existing name replaces the value but
//! keeps its original position: duplicate definitions in the source text
//! silently win over earlier ones, with no diagnostic.

use indexmap::IndexMap;

/// A parsed schema: table name to table, in declaration order.
pub type Schema = IndexMap<String, Table>;

/// A column's DEFAULT clause value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// `DEFAULT NULL`
    Null,
    /// `DEFAULT CURRENT_TIMESTAMP`
    CurrentTimestamp,
    /// `DEFAULT 'literal'`
    Literal(String),
}

/// A single column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Canonical lowercase type name (`"bigint"`, `"varchar"`, ...).
    pub type_name: String,
    /// Declared size, 0 when unspecified.
    pub size: u32,
    /// DEFAULT clause value, if any.
    pub default: Option<DefaultValue>,
    /// COMMENT clause text, empty when absent.
    pub comment: String,
    /// False only when a `NOT NULL` clause was seen.
    pub nullable: bool,
    /// True when an `AUTO_INCREMENT` clause was seen.
    pub auto_increment: bool,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            name: String::new(),
            type_name: String::new(),
            size: 0,
            default: None,
            comment: String::new(),
            nullable: true,
            auto_increment: false,
        }
    }
}

/// A foreign-key constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Constraint index name.
    pub index: String,
    /// Local foreign-key column name.
    pub local_column: String,
    /// Referenced table name.
    pub referenced_table: String,
    /// Referenced column name.
    pub referenced_column: String,
}

/// A parsed `CREATE TABLE` definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Columns keyed by column name, in declaration order.
    pub columns: IndexMap<String, Column>,
    /// Primary-key column name, empty when absent.
    pub primary_key: String,
    /// Unique-key index name to column name.
    pub unique_keys: IndexMap<String, String>,
    /// Secondary-key index name to column name.
    pub keys: IndexMap<String, String>,
    /// Foreign-key constraints keyed by local column name.
    pub constraints: IndexMap<String, Constraint>,
    /// Trailing storage-engine options keyed by lowercase option name
    /// (`"engine"`, `"charset"`, ...).
    pub extras: IndexMap<String, String>,
}

impl Table {
    /// Creates an empty table definition with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_defaults_to_nullable() {
        let column = Column::default();
        assert!(column.nullable);
        assert!(!column.auto_increment);
        assert_eq!(column.size, 0);
        assert_eq!(column.default, None);
    }

    #[test]
    fn test_duplicate_insert_keeps_position() {
        let mut table = Table::new("t");
        table.columns.insert(
            String::from("a"),
            Column {
                name: String::from("a"),
                type_name: String::from("int"),
                ..Column::default()
            },
        );
        table.columns.insert(
            String::from("b"),
            Column {
                name: String::from("b"),
                type_name: String::from("int"),
                ..Column::default()
            },
        );
        // redefinition replaces the value, keeps the original slot
        table.columns.insert(
            String::from("a"),
            Column {
                name: String::from("a"),
                type_name: String::from("bigint"),
                ..Column::default()
            },
        );
        let names: Vec<&String> = table.columns.keys().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(table.columns["a"].type_name, "bigint");
    }
}
