//! Input classification and link normalization.
//!
//! Two independent grammars decide validity and are combined with OR:
//! - [`matches_full_url`]: permissive URL shape with optional `http(s)://`
//!   scheme and path. A best-effort filter, not a security boundary.
//! - [`matches_strict_domain`]: bare domain with RFC-shaped labels.
//!
//! Everything here is pure and total: malformed input yields `false`, never an error.

mod full_url;
mod strict_domain;

pub use full_url::matches_full_url;
pub use strict_domain::matches_strict_domain;

/// Scheme prefixed by [`normalize`] when the input has none.
pub const DEFAULT_SCHEME: &str = "https://";

const KNOWN_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Returns true if `input` is a valid URL or host name under either grammar.
///
/// Callers trim the input and skip empty strings before calling; an empty
/// string still classifies as `false`.
pub fn classify(input: &str) -> bool {
    matches_full_url(input) || matches_strict_domain(input)
}

/// Returns true if `input` starts with `http://` or `https://`, ignoring ASCII case.
pub fn has_scheme(input: &str) -> bool {
    KNOWN_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Returns an absolute link for `input`: unchanged if it already carries an
/// http(s) scheme, otherwise prefixed with [`DEFAULT_SCHEME`].
///
/// Does not validate. Idempotent.
///
/// # Examples
///
/// - `normalize("example.com")` → `"https://example.com"`
/// - `normalize("HTTP://Example.com")` → `"HTTP://Example.com"`
pub fn normalize(input: &str) -> String {
    if has_scheme(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    }
}
