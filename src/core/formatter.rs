//! Positional placeholder substitution.
//!
//! Templates reference values with `$1`, `$2`, ... (1-based). Placeholders that
//! point outside the supplied values are left untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Capture group 1: the ASCII decimal index after `$`
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([0-9]+)").unwrap());

/// Returns true if `text` contains at least one `$<digits>` placeholder.
pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}

/// Counts non-overlapping placeholders, scanning left to right.
pub fn count_placeholders(text: &str) -> usize {
    PLACEHOLDER.find_iter(text).count()
}

/// Replaces each `$N` with `values[N - 1]`.
///
/// Replacements are inserted verbatim and never rescanned. `$0`, indices past
/// the end of `values` and digit runs too large to index anything are kept as-is.
pub fn format<S: AsRef<str>>(text: &str, values: &[S]) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            let index = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1));
            match index.and_then(|i| values.get(i)) {
                Some(value) => value.as_ref().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
