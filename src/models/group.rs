// src/models/group.rs

//! Course groups derived from a set of sections.

use serde::Serialize;

use crate::models::CourseSection;

/// Grouping key: the (subject, course number) pair, absent parts as "".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey<'a> {
    pub subject: &'a str,
    pub course_number: &'a str,
}

impl<'a> GroupKey<'a> {
    pub fn of(section: &'a CourseSection) -> Self {
        Self {
            subject: section.subject.as_deref().unwrap_or(""),
            course_number: section.course_number.as_deref().unwrap_or(""),
        }
    }
}

/// All sections of one course, as a view into the loaded snapshot.
///
/// Descriptive fields come from the first section seen for the key.
#[derive(Debug, Clone, Serialize)]
pub struct CourseGroup<'a> {
    pub subject: Option<&'a str>,
    pub course_number: Option<&'a str>,
    pub title: Option<&'a str>,
    pub term_desc: Option<&'a str>,
    pub sections: Vec<&'a CourseSection>,
}

impl<'a> CourseGroup<'a> {
    pub(crate) fn start(first: &'a CourseSection) -> Self {
        Self {
            subject: first.subject.as_deref(),
            course_number: first.course_number.as_deref(),
            title: first.title.as_deref(),
            term_desc: first.term_desc.as_deref(),
            sections: Vec::new(),
        }
    }

    pub fn key(&self) -> GroupKey<'a> {
        GroupKey {
            subject: self.subject.unwrap_or(""),
            course_number: self.course_number.unwrap_or(""),
        }
    }

    /// Number of sections currently open.
    pub fn open_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_open()).count()
    }

    /// Distinct instructor names in section order, "TBA" for unassigned.
    pub fn instructors(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = Vec::new();
        for section in &self.sections {
            let name = section
                .instructor_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or("TBA");
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
