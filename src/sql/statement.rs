//! Recognition of single-line `INSERT INTO <table> VALUES(...);` statements.

/// Prefix every candidate line must start with.
pub const INSERT_PREFIX: &str = "INSERT INTO";

/// Keyword and opening parenthesis following the table name.
const VALUES_OPEN: &str = " VALUES(";

/// Terminator of the value list.
const VALUES_CLOSE: &str = ");";

/// An `INSERT` statement split into its table name and raw value list.
///
/// The value list is borrowed from the line and still has to be tokenized
/// with [`parse_values`](super::parse_values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    /// Table name.
    pub table: &'a str,
    /// Everything between `VALUES(` and the last `);` of the line.
    pub values: &'a str,
}

/// Check if a character can appear in a table name.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Match a line against `INSERT INTO <table> VALUES(<values>);`.
///
/// The table name is one or more word characters. The value list extends to
/// the *last* `);` on the line, anything after it is ignored. Lines that do
/// not start with [`INSERT_PREFIX`] are rejected before any further work.
///
/// Returns `None` for any line that does not have this shape.
///
/// # Example
///
/// ```
/// use strain_dump_extract::sql::parse_statement;
///
/// let statement = parse_statement("INSERT INTO breeders VALUES(1,'Dutch Passion');").unwrap();
/// assert_eq!(statement.table, "breeders");
/// assert_eq!(statement.values, "1,'Dutch Passion'");
///
/// assert!(parse_statement("CREATE TABLE breeders (id INTEGER);").is_none());
/// ```
#[must_use]
pub fn parse_statement(line: &str) -> Option<Statement<'_>> {
    let rest = line.strip_prefix(INSERT_PREFIX)?.strip_prefix(' ')?;

    let name_len: usize = rest
        .chars()
        .take_while(|&c| is_word_char(c))
        .map(char::len_utf8)
        .sum();
    if name_len == 0 {
        return None;
    }
    let (table, rest) = rest.split_at(name_len);

    let rest = rest.strip_prefix(VALUES_OPEN)?;
    let end = rest.rfind(VALUES_CLOSE)?;

    Some(Statement {
        table,
        values: &rest[..end],
    })
}
