//! Utility functions and helpers.

pub mod format;
pub mod http;

use std::cmp::Ordering;

/// Compare two strings the way a UI collator orders them.
///
/// Letters compare case-insensitively first, with whitespace and punctuation
/// before digits and digits before letters. Ties break lowercase-first, then
/// by code point, so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(collation_key)
        .cmp(b.chars().map(collation_key))
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}

fn collation_key(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// `"1 section"` / `"3 sections"`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sorts_first() {
        assert_eq!(locale_cmp("", "A"), Ordering::Less);
        assert_eq!(locale_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn case_insensitive_with_lowercase_first() {
        assert_eq!(locale_cmp("a", "B"), Ordering::Less);
        assert_eq!(locale_cmp("B", "a"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
    }

    #[test]
    fn digits_before_letters() {
        let mut sections = vec!["H1", "02", "A", "01", "h2", "-1"];
        sections.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(sections, vec!["-1", "01", "02", "A", "H1", "h2"]);
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "course", "courses"), "1 course");
        assert_eq!(pluralize(0, "course", "courses"), "0 courses");
    }
}
