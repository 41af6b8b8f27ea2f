//! Line classifier.
//!
//! Maps a single line of text to a [`Category`] using line-local
//! heuristics only: no lookahead, no backtracking, no regex. All
//! predicates are pure byte-level scans over the stripped line.
//!
//! Several heuristics overlap (a line can look like both a list item
//! and a table row), so classification runs an ordered rule table and
//! the first match wins. The order is load-bearing: reordering it
//! changes which label an ambiguous line gets.

use memchr::memchr;

/// The category assigned to a single input line.
///
/// The first five variants are "special": a run of consecutive special
/// lines is buffered and rendered as one block. `Header` and `Blank`
/// are distinct labels but behave like `Normal` for buffering purposes
/// (headers render immediately, blank lines pass through as bare
/// newlines).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A line opening or closing a fenced code block (```` ``` ````).
    /// Whether it opens or closes is tracked by the accumulator, not here.
    CodeFenceDelimiter,
    /// An unordered (`* `, `- `, `+ `) or ordered (`1. `, `2) `) list item.
    ListItem,
    /// A blockquote line (`>` after leading whitespace).
    Blockquote,
    /// Any line containing a `|`. Deliberately over-broad: prose with a
    /// literal pipe is misclassified, and that is the intended behavior.
    TableRow,
    /// Exactly `---`, `***`, or `___` after trimming both ends.
    HorizontalRule,
    /// An ATX heading line (`#` after leading whitespace).
    Header,
    /// A line that is exactly a line terminator.
    Blank,
    /// Anything else.
    Normal,
}

impl Category {
    /// Whether lines of this category are buffered into a special block.
    #[inline]
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Category::CodeFenceDelimiter
                | Category::ListItem
                | Category::Blockquote
                | Category::TableRow
                | Category::HorizontalRule
        )
    }
}

/// The classification rules, in precedence order. First match wins.
///
/// Kept as an explicit table rather than a chain of early returns so the
/// tie-break order is visible in one place.
const RULES: &[(fn(&str) -> bool, Category)] = &[
    (is_code_fence, Category::CodeFenceDelimiter),
    (is_list_item, Category::ListItem),
    (is_blockquote, Category::Blockquote),
    (is_table_row, Category::TableRow),
    (is_horizontal_rule, Category::HorizontalRule),
    (is_header, Category::Header),
    (is_blank, Category::Blank),
];

/// Classify a single line.
///
/// Total over all inputs: every line maps to exactly one [`Category`].
/// The line is expected to carry its original terminator, but the
/// classifier does not require one.
///
/// # Example
/// ```
/// use markpipe::classify::{classify, Category};
///
/// assert_eq!(classify("- item\n"), Category::ListItem);
/// assert_eq!(classify("# Title\n"), Category::Header);
/// assert!(!classify("# Title\n").is_special());
/// ```
pub fn classify(line: &str) -> Category {
    for (pred, category) in RULES {
        if pred(line) {
            return *category;
        }
    }
    Category::Normal
}

/// Line starts a code fence after leading whitespace.
#[inline]
fn is_code_fence(line: &str) -> bool {
    line.trim_start().as_bytes().starts_with(b"```")
}

/// Line starts with an unordered list marker or an ordered-list prefix
/// ("digits, then `.` or `)`, then whitespace").
fn is_list_item(line: &str) -> bool {
    let stripped = line.trim_start().as_bytes();
    if stripped.len() >= 2
        && matches!(stripped[0], b'*' | b'-' | b'+')
        && stripped[1] == b' '
    {
        return true;
    }
    is_ordered_marker(stripped)
}

/// Ordered-list prefix scan: one or more ASCII digits, one of `.` or
/// `)`, then at least one whitespace byte. The terminator counts as
/// whitespace, so a bare `"1.\n"` qualifies.
#[inline]
fn is_ordered_marker(stripped: &[u8]) -> bool {
    let digits = stripped.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    if !matches!(stripped.get(digits), Some(&b'.') | Some(&b')')) {
        return false;
    }
    matches!(stripped.get(digits + 1), Some(b) if b.is_ascii_whitespace())
}

#[inline]
fn is_blockquote(line: &str) -> bool {
    line.trim_start().starts_with('>')
}

/// Any pipe anywhere makes a table row. The markdown separator row
/// (`|---|---|`) is covered by the same scan.
#[inline]
fn is_table_row(line: &str) -> bool {
    memchr(b'|', line.as_bytes()).is_some()
}

#[inline]
fn is_horizontal_rule(line: &str) -> bool {
    matches!(line.trim(), "---" | "***" | "___")
}

#[inline]
fn is_header(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[inline]
fn is_blank(line: &str) -> bool {
    line == "\n" || line == "\r\n"
}
