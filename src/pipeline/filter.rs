// src/pipeline/filter.rs

//! Client-side filtering of the loaded sections.

use crate::models::{CourseSection, FilterQuery};

/// Sections matching every active axis of `query`, in input order.
///
/// The text axis is a case-insensitive substring match against title,
/// subject, course number, instructor and CRN (any one suffices). Term and
/// subject require exact equality.
pub fn apply_filters<'a>(sections: &'a [CourseSection], query: &FilterQuery) -> Vec<&'a CourseSection> {
    let text = query.search_text();
    let term = query.term();
    let subject = query.subject();

    sections
        .iter()
        .filter(|s| text.as_deref().is_none_or(|t| matches_text(s, t)))
        .filter(|s| term.is_none_or(|t| s.term_desc.as_deref() == Some(t)))
        .filter(|s| subject.is_none_or(|sub| s.subject.as_deref() == Some(sub)))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_text(section: &CourseSection, needle: &str) -> bool {
    [
        &section.title,
        &section.subject,
        &section.course_number,
        &section.instructor_name,
        &section.crn,
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}
