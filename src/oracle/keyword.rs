//! Keyword-count equivalence
//!
//! A coarse structural oracle for comparing a program against its transformed
//! form: strip `//` comments, split both texts into word tokens, and require
//! identical counts for a fixed set of significant keywords. The check is
//! order-insensitive; two structurally different programs with matching
//! counts are accepted, an understood limitation of not needing a parser.

use std::collections::HashMap;

/// Keywords whose occurrence counts must agree for two blobs to be judged
/// equivalent. A keyword absent from a blob counts as zero.
pub const SIGNIFICANT_KEYWORDS: [&str; 8] = [
    "function", "native", "int", "double", "string", "print", "for", "while",
];

/// Remove `//` line comments: everything from the marker to the end of that
/// line, on each line independently.
pub fn strip_line_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for line in input.split_inclusive('\n') {
        match line.find("//") {
            Some(pos) => {
                out.push_str(&line[..pos]);
                if line.ends_with('\n') {
                    out.push('\n');
                }
            }
            None => out.push_str(line),
        }
    }
    out
}

/// Split into word tokens: maximal runs of ASCII letters, digits, and `_`.
/// Everything else is a separator.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
}

fn token_counts(input: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokenize(input) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Judge two text blobs structurally equivalent by keyword frequency.
///
/// Pure function of its inputs: comments are stripped, both blobs are
/// tokenized, and the counts of the [`SIGNIFICANT_KEYWORDS`] must all match.
/// The comparison short-circuits on the first disagreeing keyword.
pub fn keywords_equivalent(left: &str, right: &str) -> bool {
    let left = strip_line_comments(left);
    let right = strip_line_comments(right);
    let left_counts = token_counts(&left);
    let right_counts = token_counts(&right);

    SIGNIFICANT_KEYWORDS.iter().all(|kw| {
        left_counts.get(kw).copied().unwrap_or(0) == right_counts.get(kw).copied().unwrap_or(0)
    })
}
