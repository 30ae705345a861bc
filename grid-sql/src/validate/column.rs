//! Column name validation.

/// Longest accepted column name (Postgres truncates identifiers at 63).
const MAX_COLUMN_NAME_LEN: usize = 63;

/// Check that a column name is safe to splice into clause text.
///
/// A safe name starts with an ASCII letter or underscore, continues with
/// ASCII letters, digits, or underscores, and is 1-63 characters long.
/// Everything else (quotes, dots, spaces, unicode lookalikes) is rejected,
/// which rules out injection through configured column names.
///
/// # Examples
///
/// ```
/// use grid_sql::is_valid_column_name;
///
/// assert!(is_valid_column_name("ipAddress"));
/// assert!(is_valid_column_name("users_id"));
/// assert!(is_valid_column_name("_hidden"));
///
/// assert!(!is_valid_column_name(""));
/// assert!(!is_valid_column_name("1st"));
/// assert!(!is_valid_column_name("users.id"));
/// assert!(!is_valid_column_name("name; DROP TABLE users"));
/// ```
#[inline]
#[must_use]
pub fn is_valid_column_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_COLUMN_NAME_LEN {
        return false;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
