//! Property tests for the line classifier.

use markpipe::{classify, Category};
use proptest::prelude::*;

proptest! {
    /// `classify` is total: no input panics, and every line gets a label.
    #[test]
    fn classify_never_panics(line in ".*") {
        let _ = classify(&line);
    }

    /// Headers render immediately; they must never be marked special.
    #[test]
    fn header_lines_are_never_special(body in "[a-zA-Z0-9 ]*") {
        let line = format!("# {body}\n");
        prop_assert!(!classify(&line).is_special());
    }

    /// Inserting a pipe into otherwise plain prose makes it a table row.
    #[test]
    fn pipe_in_plain_prose_is_a_table_row(
        left in "[a-zA-Z0-9 .)*+>#-]*",
        right in "[a-zA-Z0-9 ]*",
    ) {
        // Avoid prefixes owned by higher-precedence rules.
        prop_assume!(!looks_like_higher_rule(&left));
        let line = format!("{left}|{right}\n");
        prop_assert_eq!(classify(&line), Category::TableRow);
    }

    /// Blockquote lines are special regardless of their content.
    #[test]
    fn blockquote_prefix_is_special(body in "[a-zA-Z0-9 |#]*") {
        let line = format!("> {body}\n");
        prop_assert_eq!(classify(&line), Category::Blockquote);
    }

    /// Fence delimiters win over everything that follows them.
    #[test]
    fn fence_prefix_wins(rest in ".*") {
        prop_assume!(!rest.contains('\n'));
        let line = format!("```{rest}\n");
        prop_assert_eq!(classify(&line), Category::CodeFenceDelimiter);
    }
}

/// True when the stripped line would be claimed by a rule that precedes
/// the table-row check (fence, list, blockquote).
fn looks_like_higher_rule(left: &str) -> bool {
    let stripped = left.trim_start();
    if stripped.starts_with("```") || stripped.starts_with('>') {
        return true;
    }
    if stripped.starts_with("* ") || stripped.starts_with("- ") || stripped.starts_with("+ ") {
        return true;
    }
    let bytes = stripped.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    digits > 0
        && matches!(bytes.get(digits), Some(&b'.') | Some(&b')'))
        && matches!(bytes.get(digits + 1), Some(b) if b.is_ascii_whitespace())
}
