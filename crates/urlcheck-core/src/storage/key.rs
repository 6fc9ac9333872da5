//! Mapping of storage keys to Linux-safe file names.

/// Suffix for files written by [`super::FileStore`].
const FILE_SUFFIX: &str = ".json";

/// Longest file name Linux accepts (NAME_MAX), suffix included.
const NAME_MAX: usize = 255;

/// Derives the file name used to store `key`, or `None` if nothing usable remains.
///
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing dots and underscores
/// - Limits length so the name with its `.json` suffix fits in 255 bytes
pub fn file_name_for_key(key: &str) -> Option<String> {
    let mut out = String::with_capacity(key.len() + FILE_SUFFIX.len());
    let mut prev_underscore = false;

    for c in key.chars() {
        let unsafe_char = c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace();
        let replacement = if unsafe_char { '_' } else { c };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        return None;
    }

    let mut take = trimmed.len().min(NAME_MAX - FILE_SUFFIX.len());
    while !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    Some(format!("{}{}", &trimmed[..take], FILE_SUFFIX))
}
