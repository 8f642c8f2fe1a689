//! The wildcard pattern syntax behind the search field.

/// Turn a free-text query into a search pattern.
///
/// Queries already containing a `*` are taken verbatim — the user opted into
/// writing wildcards themselves. Anything else is split on whitespace and
/// every term is wrapped in wildcards, so plain queries behave as "contains
/// all terms as substrings".
///
/// An empty (or whitespace-only) query yields `"**"`, which matches every
/// game. That is intentional: an untouched search field leaves the full
/// catalog browsable.
///
/// # Examples
///
/// ```
/// use playtime_adjust::search_pattern;
///
/// assert_eq!(search_pattern("dark souls"), "*dark* *souls*");
/// assert_eq!(search_pattern("dark*"), "dark*");
/// assert_eq!(search_pattern(""), "**");
/// ```
pub fn search_pattern(query: &str) -> String {
    if query.contains('*') {
        return query.to_string();
    }

    let wrapped: Vec<String> = query
        .split_whitespace()
        .map(|term| format!("*{term}*"))
        .collect();

    if wrapped.is_empty() {
        "**".to_string()
    } else {
        wrapped.join(" ")
    }
}

/// Match a single-term wildcard pattern against a token. `*` matches any
/// (possibly empty) sequence; everything else is literal.
pub(crate) fn wildcard_match(pattern: &str, token: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    if parts.len() == 1 {
        return pattern == token;
    }

    let last = parts.len() - 1;
    let mut pos = 0;
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 {
            if !token.starts_with(part) {
                return false;
            }
            pos = part.len();
        } else if i == last {
            return token.len() >= pos + part.len() && token[pos..].ends_with(part);
        } else {
            match token[pos..].find(part) {
                Some(found) => pos += found + part.len(),
                None => return false,
            }
        }
    }
    true
}
