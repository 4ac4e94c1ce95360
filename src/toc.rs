//! Table-of-contents links for function headings.

/// Link to a function's section: `` [`name`](#name) ``.
///
/// Function names are `\w+`, so the raw name is used as the anchor.
pub fn render_toc_link(name: &str) -> String {
    format!("[`{name}`](#{name})")
}

/// Generate a TOC list item.
pub fn render_toc_item(name: &str) -> String {
    format!("- {}", render_toc_link(name))
}
