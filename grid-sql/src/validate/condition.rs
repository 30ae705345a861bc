//! Static condition fragment validation.

/// Longest accepted condition fragment.
const MAX_CONDITION_LEN: usize = 1000;

/// Keywords that have no business inside a WHERE fragment. Matched as whole
/// words, so identifiers like `last_updated` or `order_total` pass.
const DENIED_KEYWORDS: &[&str] = &[
    // statements and clause heads
    "select",
    "insert",
    "update",
    "delete",
    "drop",
    "truncate",
    "alter",
    "create",
    "grant",
    "revoke",
    "exec",
    "execute",
    "union",
    "into",
    "from",
    "where",
    "having",
    "group",
    "order",
    "limit",
    "offset",
    "returning",
    // timing and DoS helpers
    "sleep",
    "benchmark",
    "waitfor",
    "pg_sleep",
    // file access
    "load_file",
];

/// Check a caller-supplied static condition fragment, e.g. `usersId = :uid`.
///
/// This is a safety net against sloppy configuration, not a security
/// boundary: static conditions come from code, never from the client. It
/// rejects comments, statement terminators, backticks, standalone SQL
/// keywords, system catalog references, and hex escapes.
///
/// # Examples
///
/// ```
/// use grid_sql::is_valid_condition;
///
/// assert!(is_valid_condition("usersId = :uid"));
/// assert!(is_valid_condition("status <> :skip OR retries > :max"));
///
/// assert!(!is_valid_condition("1=1; DROP TABLE users"));
/// assert!(!is_valid_condition("id = :id -- comment"));
/// ```
#[must_use]
pub fn is_valid_condition(fragment: &str) -> bool {
    if fragment.trim().is_empty() || fragment.len() > MAX_CONDITION_LEN {
        return false;
    }

    if fragment.contains("--")
        || fragment.contains("/*")
        || fragment.contains("*/")
        || fragment.contains(';')
        || fragment.contains('`')
    {
        return false;
    }

    let lower = fragment.to_ascii_lowercase();

    if DENIED_KEYWORDS.iter().any(|kw| has_word(&lower, kw)) {
        return false;
    }

    // System catalog and encoding escapes
    if lower.contains("pg_")
        || lower.contains("sqlite_")
        || lower.contains("information_schema")
        || lower.contains("sys.")
        || lower.contains("0x")
        || lower.contains("\\x")
    {
        return false;
    }

    true
}

/// Whole-word match: `update` is found in `set update flag` but not in
/// `last_updated`.
fn has_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .any(|token| token == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_comparisons() {
        assert!(is_valid_condition("usersId = :uid"));
        assert!(is_valid_condition("type = :kind"));
        assert!(is_valid_condition("retries >= :min AND retries <= :max"));
        assert!(is_valid_condition("(a = :a OR b = :b)"));
        assert!(is_valid_condition("deletedAt IS NULL"));
    }

    #[test]
    fn test_accepts_keywords_inside_identifiers() {
        assert!(is_valid_condition("last_updated > :since"));
        assert!(is_valid_condition("order_total = :total"));
        assert!(is_valid_condition("selected_items = :n"));
        assert!(is_valid_condition("from_date <= :cutoff"));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(!is_valid_condition(""));
        assert!(!is_valid_condition("   "));
        let long = "a = :a AND ".repeat(120);
        assert!(!is_valid_condition(&long));
    }

    #[test]
    fn test_rejects_comments_and_terminators() {
        assert!(!is_valid_condition("id = :id -- comment"));
        assert!(!is_valid_condition("id = :id /* c */"));
        assert!(!is_valid_condition("id = :id;"));
        assert!(!is_valid_condition("`id` = :id"));
    }

    #[test]
    fn test_rejects_standalone_keywords() {
        assert!(!is_valid_condition("1=1; DROP TABLE users"));
        assert!(!is_valid_condition("id IN (SELECT id FROM admins)"));
        assert!(!is_valid_condition("1 UNION ALL 2"));
        assert!(!is_valid_condition("x = :x ORDER BY 1"));
        assert!(!is_valid_condition("DeLeTe from users"));
    }

    #[test]
    fn test_rejects_timing_helpers() {
        assert!(!is_valid_condition("SLEEP(5) = 0"));
        assert!(!is_valid_condition("pg_sleep(5)"));
        assert!(!is_valid_condition("BENCHMARK(1000, 1)"));
    }

    #[test]
    fn test_rejects_catalog_and_hex() {
        assert!(!is_valid_condition("sqlite_master = :x"));
        assert!(!is_valid_condition("information_schema.tables = :x"));
        assert!(!is_valid_condition("sys.tables = :x"));
        assert!(!is_valid_condition("id = 0x27"));
        assert!(!is_valid_condition("id = \\x27"));
    }
}
