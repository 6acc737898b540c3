//! Upload filename rules
//!
//! Two checks run on every uploaded filename:
//! - the extension after the last `.` must be on the allow-list (case-sensitive)
//! - the name is reduced to a safe, single path component before it touches disk

/// True when `filename` contains a `.` and the text after the last one is in `allowed`.
///
/// Matching is case-sensitive: `photo.PNG` is rejected when only `png` is allowed.
pub fn has_allowed_extension<S: AsRef<str>>(filename: &str, allowed: &[S]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, extension)) => allowed.iter().any(|a| a.as_ref() == extension),
        None => false,
    }
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Path separators become spaces, whitespace runs collapse into `_`, anything
/// outside `[A-Za-z0-9_.-]` is dropped, and leading/trailing `.` and `_` are
/// stripped. Returns `None` when nothing usable remains.
pub fn secure_filename(filename: &str) -> Option<String> {
    let spaced: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
