//! Substring-matching helpers shared by the SQL and in-memory filter paths.

/// Escape character used in every `LIKE ... ESCAPE` clause we emit.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` metacharacters (`%`, `_` and the escape character itself)
/// so user input is matched literally.
///
/// # Examples
///
/// ```
/// use portal_core::search::escape_like;
/// assert_eq!(escape_like("100%"), "100\\%");
/// assert_eq!(escape_like("a_b"), "a\\_b");
/// assert_eq!(escape_like("plain"), "plain");
/// ```
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%needle%` pattern with the needle escaped.
pub fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(needle))
}

/// Lowercase one character at a time, the way PostgreSQL's `LOWER()` does.
///
/// Unlike [`str::to_lowercase`] this has no context-sensitive rules, so a
/// final capital sigma folds to `σ` wherever it appears.
pub fn fold_case(input: &str) -> String {
    input.chars().flat_map(char::to_lowercase).collect()
}

/// Substring test with optional case folding.
///
/// An empty needle matches every haystack.
pub fn contains(haystack: &str, needle: &str, ignore_case: bool) -> bool {
    if ignore_case {
        fold_case(haystack).contains(&fold_case(needle))
    } else {
        haystack.contains(needle)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
