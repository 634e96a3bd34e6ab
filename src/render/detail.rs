// src/render/detail.rs

//! Detail view for a single section.

use std::fmt::Write;

use crate::models::CourseSection;
use crate::utils::format::{
    NOT_AVAILABLE, format_date, format_time, format_timestamp, resolve_credits,
};

fn or_na(value: &Option<String>) -> &str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "─".repeat(title.chars().count().max(20)));
}

fn item(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "  {label:<22}{value}");
}

/// Render every known field of a section, grouped into sections.
pub fn render_detail(section: &CourseSection) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", or_na(&section.title));
    let _ = writeln!(out, "{}", "═".repeat(60));
    item(
        &mut out,
        "Course Code",
        format!("{} {}", or_na(&section.subject), or_na(&section.course_number)),
    );
    item(&mut out, "Section", or_na(&section.section));
    item(&mut out, "CRN", or_na(&section.crn));
    item(&mut out, "Term", or_na(&section.term_desc));

    heading(&mut out, "Enrollment Statistics");
    if section.is_reserved() {
        let _ = writeln!(
            out,
            "  ! This course may be restricted for disability students or special programs."
        );
    }
    item(&mut out, "Enrolled", section.current_enrollment.unwrap_or(0));
    item(&mut out, "Available", section.seats_available.unwrap_or(0));
    item(&mut out, "Capacity", section.max_enrollment.unwrap_or(0));
    item(&mut out, "Full", format!("{}%", section.enrollment_percent()));
    if let Some(capacity) = section.waitlist_capacity.filter(|c| *c != 0) {
        item(&mut out, "Waitlist Capacity", capacity);
        item(&mut out, "Waitlist Count", section.waitlist_count.unwrap_or(0));
    }

    heading(&mut out, "Instructor Information");
    item(
        &mut out,
        "Instructor Name",
        present(&section.instructor_name).unwrap_or("TBA"),
    );
    if let Some(email) = present(&section.instructor_email) {
        item(&mut out, "Email", email);
    }

    heading(&mut out, "Course Details");
    let credits = resolve_credits(section)
        .map(|c| c.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    item(&mut out, "Credits", credits);
    item(&mut out, "Schedule Type", or_na(&section.schedule_type));
    item(
        &mut out,
        "Instructional Method",
        or_na(&section.instructional_method),
    );
    item(&mut out, "Campus", or_na(&section.campus));
    item(
        &mut out,
        "Status",
        if section.is_open() { "Open" } else { "Closed" },
    );

    let days = present(&section.meeting_days);
    let start = present(&section.meeting_time_start);
    if days.is_some() || start.is_some() {
        heading(&mut out, "Meeting Information");
        if let Some(days) = days {
            item(&mut out, "Days", days);
        }
        if start.is_some() {
            item(&mut out, "Start Time", format_time(start));
        }
        if let Some(end) = present(&section.meeting_time_end) {
            item(&mut out, "End Time", format_time(Some(end)));
        }
        if let Some(building) = present(&section.meeting_building) {
            item(&mut out, "Building", building);
        }
        if let Some(room) = present(&section.meeting_room) {
            item(&mut out, "Room", room);
        }
    }

    let start_date = present(&section.start_date);
    let end_date = present(&section.end_date);
    if start_date.is_some() || end_date.is_some() {
        heading(&mut out, "Dates");
        if start_date.is_some() {
            item(&mut out, "Start Date", format_date(start_date));
        }
        if end_date.is_some() {
            item(&mut out, "End Date", format_date(end_date));
        }
    }

    if let Some(updated) = section.updated_at {
        let _ = writeln!(out);
        item(&mut out, "Last Updated", format_timestamp(updated));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_section() -> CourseSection {
        CourseSection {
            crn: Some("40123".into()),
            subject: Some("CSCI".into()),
            course_number: Some("140".into()),
            section: Some("01".into()),
            title: Some("Data Structures".into()),
            term_desc: Some("Spring 2026".into()),
            credits_high: Some(4.0),
            instructor_name: Some("Grace Hopper".into()),
            instructor_email: Some("ghopper@example.edu".into()),
            meeting_days: Some("T,R".into()),
            meeting_time_start: Some("0930".into()),
            meeting_time_end: Some("1045".into()),
            meeting_building: Some("61".into()),
            meeting_room: Some("2002".into()),
            campus: Some("Main".into()),
            schedule_type: Some("Lecture".into()),
            open_section: Some(true),
            seats_available: Some(13),
            max_enrollment: Some(40),
            current_enrollment: Some(27),
            waitlist_capacity: Some(10),
            waitlist_count: Some(2),
            start_date: Some("20260210".into()),
            end_date: Some("2026-06-05".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_full_detail() {
        let text = render_detail(&full_section());

        assert!(text.starts_with("Data Structures\n"));
        assert!(text.contains("Course Code           CSCI 140"));
        assert!(text.contains("Full                  68%"));
        assert!(text.contains("Waitlist Count        2"));
        assert!(text.contains("Email                 ghopper@example.edu"));
        assert!(text.contains("Credits               4"));
        assert!(text.contains("Instructional Method  N/A"));
        assert!(text.contains("Start Time            9:30 AM"));
        assert!(text.contains("End Time              10:45 AM"));
        assert!(text.contains("Start Date            February 10, 2026"));
        assert!(text.contains("End Date              2026-06-05"));
        assert!(!text.contains("restricted"));
        assert!(!text.contains("Last Updated"));
    }

    #[test]
    fn test_render_sparse_detail() {
        let section = CourseSection {
            seats_available: Some(9999),
            credits_high: Some(0.0),
            ..Default::default()
        };
        let text = render_detail(&section);

        assert!(text.starts_with("N/A\n"));
        assert!(text.contains("restricted for disability students"));
        assert!(text.contains("Instructor Name       TBA"));
        assert!(text.contains("Credits               not publicly displayed"));
        assert!(text.contains("Full                  0%"));
        assert!(text.contains("Status                Closed"));
        assert!(!text.contains("Waitlist"));
        assert!(!text.contains("Meeting Information"));
        assert!(!text.contains("Dates"));
    }
}
