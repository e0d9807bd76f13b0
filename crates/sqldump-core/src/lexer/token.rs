//! Token types for the SQL scanner.

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Special
    /// Unrecognized character or malformed construct.
    Illegal,
    /// End of input.
    Eof,
    /// A line (`-- ...`) or block (`/* ... */`) comment.
    Annotation,
    /// A maximal run of spaces, tabs, and newlines.
    Whitespace,
    /// Single-quoted string literal.
    String,
    /// Bare or backtick-quoted identifier.
    Ident,

    // Punctuation
    /// `,`
    Comma,
    /// `*`
    Asterisk,
    /// `;`
    Semicolon,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `=`
    Equal,

    /// Unsigned integer literal, used for type sizes and WHERE values.
    Size,

    // Type keywords
    /// `BIT`
    Bit,
    /// `TINYINT`
    Tinyint,
    /// `SMALLINT`
    Smallint,
    /// `INT`
    Int,
    /// `BIGINT`
    Bigint,
    /// `FLOAT`
    Float,
    /// `DOUBLE`
    Double,
    /// `LONGTEXT`
    Longtext,
    /// `MEDIUMTEXT`
    Mediumtext,
    /// `VARCHAR`
    Varchar,
    /// `DATE`
    Date,
    /// `TIME`
    Time,
    /// `DATETIME`
    Datetime,
    /// `TIMESTAMP`
    Timestamp,

    // DDL keywords
    /// `DROP`
    Drop,
    /// `LOCK`
    Lock,
    /// `UNLOCK`
    Unlock,
    /// `TABLES`
    Tables,
    /// `WRITE`
    Write,
    /// `IF`
    If,
    /// `EXISTS`
    Exists,
    /// `CREATE`
    Create,
    /// `TABLE`
    Table,
    /// `DEFAULT`
    Default,
    /// `NOT`
    Not,
    /// `NULL`
    Null,
    /// `COMMENT`
    Comment,
    /// `KEY`
    Key,
    /// `UNIQUE`
    Unique,
    /// `CONSTRAINT`
    Constraint,
    /// `PRIMARY`
    Primary,
    /// `FOREIGN`
    Foreign,
    /// `REFERENCES`
    References,
    /// `AUTO_INCREMENT`
    AutoIncrement,
    /// `CURRENT_TIMESTAMP`
    CurrentTimestamp,

    // DML keywords
    /// `SELECT`
    Select,
    /// `FROM`
    From,
    /// `INSERT`
    Insert,
    /// `INTO`
    Into,
    /// `VALUES`
    Values,
    /// `DELETE`
    Delete,
    /// `UPDATE`
    Update,
    /// `SET`
    Set,
    /// `WHERE`
    Where,
}

impl TokenKind {
    /// Attempts to match a scanned word against the fixed keyword set
    /// (case-insensitive).
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "BIT" => Some(Self::Bit),
            "TINYINT" => Some(Self::Tinyint),
            "SMALLINT" => Some(Self::Smallint),
            "INT" => Some(Self::Int),
            "BIGINT" => Some(Self::Bigint),
            "FLOAT" => Some(Self::Float),
            "DOUBLE" => Some(Self::Double),
            "LONGTEXT" => Some(Self::Longtext),
            "MEDIUMTEXT" => Some(Self::Mediumtext),
            "VARCHAR" => Some(Self::Varchar),
            "DATE" => Some(Self::Date),
            "TIME" => Some(Self::Time),
            "DATETIME" => Some(Self::Datetime),
            "TIMESTAMP" => Some(Self::Timestamp),
            "DROP" => Some(Self::Drop),
            "LOCK" => Some(Self::Lock),
            "UNLOCK" => Some(Self::Unlock),
            "TABLES" => Some(Self::Tables),
            "WRITE" => Some(Self::Write),
            "IF" => Some(Self::If),
            "EXISTS" => Some(Self::Exists),
            "CREATE" => Some(Self::Create),
            "TABLE" => Some(Self::Table),
            "DEFAULT" => Some(Self::Default),
            "NOT" => Some(Self::Not),
            "NULL" => Some(Self::Null),
            "COMMENT" => Some(Self::Comment),
            "KEY" => Some(Self::Key),
            "UNIQUE" => Some(Self::Unique),
            "CONSTRAINT" => Some(Self::Constraint),
            "PRIMARY" => Some(Self::Primary),
            "FOREIGN" => Some(Self::Foreign),
            "REFERENCES" => Some(Self::References),
            "AUTO_INCREMENT" => Some(Self::AutoIncrement),
            "CURRENT_TIMESTAMP" => Some(Self::CurrentTimestamp),
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "DELETE" => Some(Self::Delete),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "WHERE" => Some(Self::Where),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name for a type keyword, or `None`
    /// for every other kind.
    #[must_use]
    pub const fn type_name(self) -> Option<&'static str> {
        match self {
            Self::Bit => Some("bit"),
            Self::Tinyint => Some("tinyint"),
            Self::Smallint => Some("smallint"),
            Self::Int => Some("int"),
            Self::Bigint => Some("bigint"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            Self::Longtext => Some("longtext"),
            Self::Mediumtext => Some("mediumtext"),
            Self::Varchar => Some("varchar"),
            Self::Date => Some("date"),
            Self::Time => Some("time"),
            Self::Datetime => Some("datetime"),
            Self::Timestamp => Some("timestamp"),
            _ => None,
        }
    }

    /// Returns true if this kind is a column type keyword.
    #[must_use]
    pub const fn is_type(self) -> bool {
        self.type_name().is_some()
    }
}

/// A classified lexical unit paired with its exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source substring the token was scanned from.
    pub literal: String,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, literal: String) -> Self {
        Self { kind, literal }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this token carries no grammar content
    /// (whitespace or comment).
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("SELECT"), Some(TokenKind::Select));
        assert_eq!(TokenKind::keyword("select"), Some(TokenKind::Select));
        assert_eq!(TokenKind::keyword("SeLeCt"), Some(TokenKind::Select));
        assert_eq!(TokenKind::keyword("AUTO_INCREMENT"), Some(TokenKind::AutoIncrement));
        assert_eq!(TokenKind::keyword("not_a_keyword"), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(TokenKind::Bit.type_name(), Some("bit"));
        assert_eq!(TokenKind::Varchar.type_name(), Some("varchar"));
        assert_eq!(TokenKind::Timestamp.type_name(), Some("timestamp"));
        assert_eq!(TokenKind::Select.type_name(), None);
        assert_eq!(TokenKind::Ident.type_name(), None);
    }

    #[test]
    fn test_is_type_covers_whole_range() {
        for kind in [
            TokenKind::Bit,
            TokenKind::Tinyint,
            TokenKind::Smallint,
            TokenKind::Int,
            TokenKind::Bigint,
            TokenKind::Float,
            TokenKind::Double,
            TokenKind::Longtext,
            TokenKind::Mediumtext,
            TokenKind::Varchar,
            TokenKind::Date,
            TokenKind::Time,
            TokenKind::Datetime,
            TokenKind::Timestamp,
        ] {
            assert!(kind.is_type());
        }
        assert!(!TokenKind::Size.is_type());
    }

    #[test]
    fn test_token_is_trivia() {
        let ws = Token::new(TokenKind::Whitespace, String::from("  "));
        let comment = Token::new(TokenKind::Annotation, String::new());
        let ident = Token::new(TokenKind::Ident, String::from("user"));
        assert!(ws.is_trivia());
        assert!(comment.is_trivia());
        assert!(!ident.is_trivia());
    }
}
