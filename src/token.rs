//! Type-token parsing.
//!
//! A type token is the raw `type` string of a field: an optional leading `[`
//! marking an array, then a possibly dotted name such as
//! `io.apibuilder.spec.v0.models.service`.

use std::sync::OnceLock;

use regex::Regex;

/// Sentinel type token for ISO 8601 date-times.
pub const ISO_DATE_TIME: &str = "date-iso8601";

fn version_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"v[0-9]+").expect("valid version pattern"))
}

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid non-word pattern"))
}

/// Extract the bare type name from a token.
///
/// Strips one leading `[` and everything from the first `]` on.
/// Returns `None` when nothing is left.
///
/// ```
/// use apidoc_resolver::bare_name;
///
/// assert_eq!(bare_name("[user]"), Some("user"));
/// assert_eq!(bare_name("user"), Some("user"));
/// assert_eq!(bare_name(""), None);
/// ```
pub fn bare_name(token: &str) -> Option<&str> {
    let rest = token.strip_prefix('[').unwrap_or(token);
    let name = match rest.find(']') {
        Some(end) => &rest[..end],
        None => rest,
    };
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// True if the token denotes an array of its bare type.
pub fn is_array(token: &str) -> bool {
    token.starts_with('[')
}

/// True if the token is the ISO 8601 date-time sentinel, [`ISO_DATE_TIME`].
pub fn is_iso_date_time(token: &str) -> bool {
    token == ISO_DATE_TIME
}

/// Shorten a qualified type name for display.
///
/// Prefix segments are cut to their first letter, except segments holding
/// a version (`v0`, `v12`, `v1beta`) which are kept whole. The segment just
/// before the type name is the kind marker (`models`, `enums`) and is dropped.
///
/// ```
/// use apidoc_resolver::simplify_name;
///
/// assert_eq!(simplify_name("io.apibuilder.spec.v0.models.service"), "i.a.s.v0.service");
/// assert_eq!(simplify_name("user"), "user");
/// ```
pub fn simplify_name(name: &str) -> String {
    let segments: Vec<&str> = name.split('.').collect();
    let (last, prefix) = match segments.split_last() {
        Some((last, prefix)) if !prefix.is_empty() => (*last, prefix),
        _ => return name.to_string(),
    };

    let kept = &prefix[..prefix.len() - 1];
    if kept.is_empty() {
        return last.to_string();
    }

    let mut simplified = kept
        .iter()
        .map(|segment| abbreviate(segment))
        .collect::<Vec<_>>()
        .join(".");
    simplified.push('.');
    simplified.push_str(last);
    simplified
}

fn abbreviate(segment: &str) -> &str {
    if version_marker().is_match(segment) {
        return segment;
    }
    match segment.char_indices().find(|(_, c)| c.is_ascii_alphabetic()) {
        Some((idx, c)) => &segment[..idx + c.len_utf8()],
        None => segment,
    }
}

/// Remove every non-word character from an operation path.
///
/// `/users/:id` becomes `usersid`; this is the form used in `/p/` nav
/// segments and in operation matching.
pub fn clean_path(path: &str) -> String {
    non_word().replace_all(path, "").into_owned()
}
