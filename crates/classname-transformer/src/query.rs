//! Resource query parsing.

/// Extracts the value of `name` from a loader resource query.
///
/// A parameter matches when it is introduced by `?` or `&` and followed by
/// `=`, `&`, `#` or the end of the query. Returns `None` when the parameter is
/// absent and `Some("")` when it has no value. `+` decodes to a space; no
/// percent-decoding is performed.
///
/// ```
/// use classname_transformer::query_param;
///
/// assert_eq!(query_param("prefix", "?prefix=ui&debug"), Some("ui".to_string()));
/// assert_eq!(query_param("debug", "?prefix=ui&debug"), Some(String::new()));
/// assert_eq!(query_param("other", "?prefix=ui"), None);
/// ```
pub fn query_param(name: &str, query: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    for (idx, c) in query.char_indices() {
        if c != '?' && c != '&' {
            continue;
        }
        let Some(rest) = query[idx + 1..].strip_prefix(name) else {
            continue;
        };
        match rest.chars().next() {
            None | Some('&') | Some('#') => return Some(String::new()),
            Some('=') => {
                let value = &rest[1..];
                let end = value.find(['&', '#']).unwrap_or(value.len());
                return Some(value[..end].replace('+', " "));
            }
            Some(_) => {}
        }
    }

    None
}
