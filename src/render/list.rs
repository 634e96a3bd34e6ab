// src/render/list.rs

//! Course list view.

use std::fmt::Write;

use crate::app::ViewSummary;
use crate::models::{CourseGroup, CourseSection, FilterChoices};
use crate::utils::format::{NOT_AVAILABLE, format_time, resolve_credits};
use crate::utils::pluralize;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `"12 courses (30 sections)"`
pub fn render_summary(summary: &ViewSummary) -> String {
    format!(
        "{} ({})",
        pluralize(summary.courses, "course", "courses"),
        pluralize(summary.sections, "section", "sections")
    )
}

/// Render grouped results, marking the section whose CRN is `selected`.
pub fn render_groups(groups: &[CourseGroup<'_>], selected: Option<&str>) -> String {
    if groups.is_empty() {
        return "No courses found\n".to_string();
    }

    let mut out = String::new();
    for group in groups {
        render_group(&mut out, group, selected);
    }
    out
}

fn render_group(out: &mut String, group: &CourseGroup<'_>, selected: Option<&str>) {
    let total = group.sections.len();
    let open = group.open_count();

    let _ = writeln!(out, "{}", "═".repeat(60));
    let _ = writeln!(
        out,
        "{}  [{}/{} Open]",
        non_empty(group.title).unwrap_or(NOT_AVAILABLE),
        open,
        total
    );
    let _ = writeln!(
        out,
        "{} {}",
        group.subject.unwrap_or(""),
        group.course_number.unwrap_or("")
    );
    if let Some(credits) = group.sections.first().and_then(|s| resolve_credits(s)) {
        let _ = writeln!(out, "Credits: {}", credits.label());
    }
    let _ = writeln!(
        out,
        "Term: {} | Instructors: {} | {}",
        non_empty(group.term_desc).unwrap_or(NOT_AVAILABLE),
        instructor_summary(&group.instructors()),
        pluralize(total, "section", "sections")
    );

    for section in &group.sections {
        render_section_row(out, section, selected);
    }
}

fn render_section_row(out: &mut String, section: &CourseSection, selected: Option<&str>) {
    let is_selected = selected.is_some() && section.crn.as_deref() == selected;
    let marker = if is_selected { ">" } else { " " };
    let status = if section.is_open() { "Open" } else { "Closed" };

    let _ = writeln!(
        out,
        "  {} Section {:<6} CRN: {:<8} {}",
        marker,
        non_empty(section.section.as_deref()).unwrap_or(NOT_AVAILABLE),
        non_empty(section.crn.as_deref()).unwrap_or(NOT_AVAILABLE),
        status
    );

    let mut details = vec![
        non_empty(section.instructor_name.as_deref())
            .unwrap_or("TBA")
            .to_string(),
    ];
    if let Some(days) = section.meeting_days.as_deref().filter(|d| !d.is_empty()) {
        details.push(days.to_string());
    }
    if section.meeting_time_start.as_deref().is_some_and(|t| !t.is_empty()) {
        details.push(format_time(section.meeting_time_start.as_deref()));
    }
    if let Some(campus) = section.campus.as_deref().filter(|c| !c.is_empty()) {
        details.push(campus.to_string());
    }
    if let Some(seats) = section.seats_available {
        details.push(format!("{seats} available"));
    }
    if section.is_reserved() {
        details.push("For disability students".to_string());
    }
    let _ = writeln!(out, "      {}", details.join(" | "));
}

/// Up to two names joined, otherwise `"first and N others"`.
pub fn instructor_summary(names: &[&str]) -> String {
    match names {
        [] => "TBA".to_string(),
        [only] => only.to_string(),
        [a, b] => format!("{a}, {b}"),
        [first, rest @ ..] => format!("{first} and {} others", rest.len()),
    }
}

/// Term and subject lists offered as filters.
pub fn render_choices(choices: &FilterChoices) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Terms ({}):", choices.terms.len());
    for term in &choices.terms {
        let _ = writeln!(out, "  {term}");
    }
    let _ = writeln!(out, "Subjects ({}):", choices.subjects.len());
    let _ = writeln!(out, "  {}", choices.subjects.join(", "));
    out
}
