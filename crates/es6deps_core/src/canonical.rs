use crate::constants::{CURRENT_DIR, PARENT_DIR, SEPARATOR};

/// Normalizes a textual path without consulting the filesystem.
///
/// Every segment followed by a separator is interpreted: `.` is dropped and
/// `..` cancels the preceding name segment. A `..` with nothing to cancel
/// (start of a relative path, directly after the root, or after another
/// `..`) is kept. The final segment is always kept verbatim.
///
/// ```
/// use es6deps_core::canonical;
///
/// assert_eq!(canonical("a/b/../../c"), "c");
/// assert_eq!(canonical("./a/./b"), "a/b");
/// assert_eq!(canonical("../a"), "../a");
/// ```
pub fn canonical(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let mut parts = path.split(SEPARATOR).peekable();

    while let Some(segment) = parts.next() {
        if parts.peek().is_none() {
            segments.push(segment);
            break;
        }
        match segment {
            CURRENT_DIR => {}
            PARENT_DIR if segments.last().is_some_and(|s| is_name(s)) => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    segments.join(&SEPARATOR.to_string())
}

/// Joins two path fragments with exactly one separator between them.
pub fn join(prefix: &str, rest: &str) -> String {
    let dir = prefix.trim_end_matches(SEPARATOR);
    let name = rest.trim_start_matches(SEPARATOR);
    format!("{dir}{SEPARATOR}{name}")
}

// Only a real name can be cancelled by a following `..`.
fn is_name(segment: &str) -> bool {
    !segment.is_empty() && segment != PARENT_DIR
}
