//! Filter choices derived from the loaded collection.

use std::collections::BTreeSet;

use crate::models::{CourseSection, FilterChoices};

/// Distinct term descriptions and subjects, each sorted.
///
/// Sections with a missing or empty value contribute nothing to that list.
pub fn derive_filter_choices<'a, I>(sections: I) -> FilterChoices
where
    I: IntoIterator<Item = &'a CourseSection>,
{
    let mut terms = BTreeSet::new();
    let mut subjects = BTreeSet::new();

    for section in sections {
        if let Some(term) = section.term_desc.as_deref().filter(|t| !t.is_empty()) {
            terms.insert(term);
        }
        if let Some(subject) = section.subject.as_deref().filter(|s| !s.is_empty()) {
            subjects.insert(subject);
        }
    }

    FilterChoices {
        terms: terms.into_iter().map(String::from).collect(),
        subjects: subjects.into_iter().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(term: Option<&str>, subject: Option<&str>) -> CourseSection {
        CourseSection {
            term_desc: term.map(String::from),
            subject: subject.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_filter_choices() {
        let all = vec![
            section(Some("Spring 2026"), Some("MATH")),
            section(Some("Fall 2025"), Some("CS")),
            section(Some("Spring 2026"), Some("CS")),
            section(None, Some("ART")),
            section(Some(""), None),
        ];

        let choices = derive_filter_choices(&all);
        assert_eq!(choices.terms, vec!["Fall 2025", "Spring 2026"]);
        assert_eq!(choices.subjects, vec!["ART", "CS", "MATH"]);
    }

    #[test]
    fn test_natural_ordering_is_bytewise() {
        let all = vec![section(None, Some("art")), section(None, Some("BIO"))];
        assert_eq!(derive_filter_choices(&all).subjects, vec!["BIO", "art"]);
    }
}
