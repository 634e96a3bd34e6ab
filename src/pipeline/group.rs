// src/pipeline/group.rs

//! Grouping sections into courses.

use std::collections::HashMap;

use crate::models::{CourseGroup, CourseSection, GroupKey};
use crate::utils::locale_cmp;

/// Partition sections into courses keyed by (subject, course number).
///
/// Groups come out in first-seen order. Title and term of a group are taken
/// from its first section. Sections inside a group are sorted by their
/// section code, a missing code comparing as "".
pub fn group_by_course<'a, I>(sections: I) -> Vec<CourseGroup<'a>>
where
    I: IntoIterator<Item = &'a CourseSection>,
{
    let mut positions: HashMap<GroupKey<'a>, usize> = HashMap::new();
    let mut groups: Vec<CourseGroup<'a>> = Vec::new();

    for section in sections {
        let index = *positions.entry(GroupKey::of(section)).or_insert_with(|| {
            groups.push(CourseGroup::start(section));
            groups.len() - 1
        });
        groups[index].sections.push(section);
    }

    for group in &mut groups {
        group.sections.sort_by(|a, b| {
            locale_cmp(
                a.section.as_deref().unwrap_or(""),
                b.section.as_deref().unwrap_or(""),
            )
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::numbered;

    fn section(subject: &str, number: &str, code: Option<&str>, crn: &str) -> CourseSection {
        CourseSection {
            crn: Some(crn.into()),
            subject: Some(subject.into()),
            course_number: Some(number.into()),
            section: code.map(String::from),
            title: Some(format!("{subject} {number} ({crn})")),
            term_desc: Some(format!("Term of {crn}")),
            ..Default::default()
        }
    }

    #[test]
    fn groups_in_first_seen_order() {
        let all = vec![
            section("MATH", "180", Some("02"), "1"),
            section("CS", "101", Some("01"), "2"),
            section("MATH", "180", Some("01"), "3"),
        ];
        let groups = group_by_course(&all);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].subject, Some("MATH"));
        assert_eq!(groups[1].subject, Some("CS"));
        let crns: Vec<_> = groups[0]
            .sections
            .iter()
            .filter_map(|s| s.crn.as_deref())
            .collect();
        assert_eq!(crns, vec!["3", "1"]);
    }

    #[test]
    fn descriptive_fields_come_from_first_section() {
        let all = vec![
            section("MATH", "180", Some("02"), "1"),
            section("MATH", "180", Some("01"), "2"),
        ];
        let groups = group_by_course(&all);
        assert_eq!(groups[0].title, Some("MATH 180 (1)"));
        assert_eq!(groups[0].term_desc, Some("Term of 1"));
    }

    #[test]
    fn empty_and_missing_section_sort_first() {
        let all = vec![
            section("ART", "10", Some("A"), "1"),
            section("ART", "10", Some(""), "2"),
            section("ART", "10", None, "3"),
            section("ART", "10", Some("a"), "4"),
        ];
        let groups = group_by_course(&all);
        let crns: Vec<_> = groups[0]
            .sections
            .iter()
            .filter_map(|s| s.crn.as_deref())
            .collect();
        // stable sort keeps "" before None, as in input order
        assert_eq!(crns, vec!["2", "3", "4", "1"]);
    }

    #[test]
    fn missing_key_parts_group_together() {
        let all = vec![CourseSection::default(), CourseSection::default()];
        let groups = group_by_course(&all);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sections.len(), 2);
        assert_eq!(groups[0].subject, None);
    }

    #[test]
    fn delimiter_in_subject_does_not_collide() {
        let all = vec![section("A_", "B", None, "1"), section("A", "_B", None, "2")];
        assert_eq!(group_by_course(&all).len(), 2);
    }

    #[test]
    fn flattening_groups_preserves_the_multiset() {
        let all: Vec<_> = (0..240).map(numbered).collect();
        let groups = group_by_course(&all);

        let mut flattened: Vec<_> = groups
            .iter()
            .flat_map(|g| g.sections.iter().map(|s| s.crn.clone()))
            .collect();
        let mut input: Vec<_> = all.iter().map(|s| s.crn.clone()).collect();
        flattened.sort();
        input.sort();
        assert_eq!(flattened, input);

        for group in &groups {
            assert!(group.sections.iter().all(|s| GroupKey::of(s) == group.key()));
        }
    }
}
