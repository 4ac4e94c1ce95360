//! Whitespace normalization for extracted text.

/// How much whitespace to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Collapse every whitespace run to one space, then trim.
    Full,
    /// Trim the ends only.
    Simple,
}

pub fn sanitize(text: &str, mode: Mode) -> String {
    match mode {
        Mode::Full => text.split_whitespace().collect::<Vec<_>>().join(" "),
        Mode::Simple => text.trim().to_string(),
    }
}
