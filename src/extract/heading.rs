//! Line-shape heuristic for section headings in flattened PDF text.
//!
//! This is a heuristic, not a document-structure parser. It recognizes the
//! common "INTRODUCTION" / "3 Results" / "2.1 Setup" shapes and will happily
//! misclassify running headers, all-caps author lines, or numeric table rows.

/// Headings are short; anything at or above this many characters is body text.
pub const MAX_HEADING_CHARS: usize = 100;

/// Returns true if `line` looks like a section heading.
///
/// A line qualifies when it is shorter than [`MAX_HEADING_CHARS`] and
/// either all of its cased letters are uppercase (at least one is required)
/// or it starts with an ASCII digit.
#[must_use]
pub fn is_heading(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || line.chars().count() >= MAX_HEADING_CHARS {
        return false;
    }

    let starts_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());
    starts_with_digit || is_all_uppercase(line)
}

fn is_all_uppercase(line: &str) -> bool {
    let mut has_upper = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        has_upper |= c.is_uppercase();
    }
    has_upper
}
