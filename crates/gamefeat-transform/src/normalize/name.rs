//! Feature column naming.

/// Lowercase snake-casing for display-style field names.
///
/// Every maximal run of characters outside `[A-Za-z0-9_]` collapses to a
/// single underscore; leading and trailing underscores are stripped from
/// the result. Pure, total and idempotent.
pub fn feature_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}
