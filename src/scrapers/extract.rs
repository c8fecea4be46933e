//! HTML to plain text extraction.
//!
//! [`extract_text`] parses a document, skips every subtree rooted at a
//! boilerplate element, joins the remaining text nodes with newlines, and
//! then normalizes the result line by line. The output is dense and
//! whitespace-normalized; nothing is summarized or deduplicated.

use itertools::Itertools;
use scraper::{Html, Node};

/// Elements whose whole subtree is dropped before text is collected.
pub const EXCLUDED_ELEMENTS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "noscript", "aside", "iframe", "menu",
];

/// Extract normalized visible text from raw HTML.
///
/// Malformed markup never fails; the parser recovers and whatever text it
/// finds is returned. Calling this twice on the same input yields identical
/// output.
///
/// # Examples
///
/// ```ignore
/// let text = extract_text("<body><script>x</script><p>Hello</p></body>");
/// assert_eq!(text, "Hello");
/// ```
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut pieces: Vec<&str> = Vec::new();

    // Depth-first, document order; explicit stack so deep markup can't blow the call stack.
    let mut stack = vec![document.tree.root()];
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(element) if is_excluded(element.name()) => continue,
            Node::Text(text) => pieces.push(&**text),
            _ => {}
        }
        stack.extend(node.children().rev());
    }

    normalize_lines(&pieces.join("\n"))
}

fn is_excluded(name: &str) -> bool {
    EXCLUDED_ELEMENTS
        .iter()
        .any(|excluded| name.eq_ignore_ascii_case(excluded))
}

/// Trim every line (whitespace and U+001F) and drop the blank ones,
/// rejoining with `\n`.
///
/// Line boundaries are the usual Unicode set: `\n`, `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL, and the line and paragraph
/// separators.
pub fn normalize_lines(text: &str) -> String {
    text.split(is_line_boundary)
        .map(|line| line.trim_matches(is_strippable))
        .filter(|line| !line.is_empty())
        .join("\n")
}

/// Whitespace plus the unit separator, which also counts as blank padding.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || c == '\u{1f}'
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
