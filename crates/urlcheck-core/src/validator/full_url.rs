//! Permissive full-URL grammar: optional http(s) scheme, host, TLD, optional path.

use regex::Regex;
use std::sync::LazyLock;

/// Host is `[0-9a-z_.-]+`, TLD is 2-6 letters/dots, path is any run of
/// `[/\w .-]`. Case-insensitive over the whole input. Does not reject
/// leading/trailing hyphens or consecutive dots in the host.
static FULL_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^(?:https?://)?[0-9a-z_.-]+\.[a-z.]{2,6}[/0-9a-z_ .-]*/?$")
        .expect("full-URL pattern is valid")
});

/// Returns true if `input` matches the permissive full-URL grammar end to end.
pub fn matches_full_url(input: &str) -> bool {
    FULL_URL.is_match(input)
}
