// src/app.rs

//! Application state for browsing a loaded catalog.
//!
//! [`Catalog`] owns the immutable snapshot plus the user's current query and
//! selection. Everything shown is recomputed from that state on demand.

use crate::models::{CourseGroup, CourseSection, FilterChoices, FilterQuery};
use crate::pipeline::{apply_filters, derive_filter_choices, group_by_course};

/// Course and section counts for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSummary {
    pub courses: usize,
    pub sections: usize,
}

/// Loaded sections with the current filter and selection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<CourseSection>,
    choices: FilterChoices,
    query: FilterQuery,
    selected_crn: Option<String>,
}

impl Catalog {
    pub fn new(sections: Vec<CourseSection>) -> Self {
        let choices = derive_filter_choices(&sections);
        Self {
            sections,
            choices,
            query: FilterQuery::default(),
            selected_crn: None,
        }
    }

    pub fn sections(&self) -> &[CourseSection] {
        &self.sections
    }

    pub fn choices(&self) -> &FilterChoices {
        &self.choices
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: FilterQuery) {
        self.query = query;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.query.text = Some(text.into());
    }

    pub fn set_term(&mut self, term_desc: Option<String>) {
        self.query.term_desc = term_desc;
    }

    pub fn set_subject(&mut self, subject: Option<String>) {
        self.query.subject = subject;
    }

    pub fn clear_filters(&mut self) {
        self.query = FilterQuery::default();
    }

    /// Sections passing the current query, in store order.
    pub fn filtered(&self) -> Vec<&CourseSection> {
        apply_filters(&self.sections, &self.query)
    }

    /// Current view grouped by course.
    pub fn groups(&self) -> Vec<CourseGroup<'_>> {
        group_by_course(self.filtered())
    }

    pub fn summary(&self) -> ViewSummary {
        let filtered = self.filtered();
        ViewSummary {
            courses: group_by_course(filtered.iter().copied()).len(),
            sections: filtered.len(),
        }
    }

    /// Select a section by CRN among the currently visible sections.
    ///
    /// Returns the section, or `None` (leaving the selection unchanged) when
    /// no visible section has that CRN.
    pub fn select(&mut self, crn: &str) -> Option<&CourseSection> {
        let crn = crn.trim();
        if !self.filtered().iter().any(|s| s.crn.as_deref() == Some(crn)) {
            return None;
        }
        self.selected_crn = Some(crn.to_string());
        self.selected()
    }

    pub fn clear_selection(&mut self) {
        self.selected_crn = None;
    }

    pub fn selected_crn(&self) -> Option<&str> {
        self.selected_crn.as_deref()
    }

    /// The selected section, looked up in the full snapshot.
    pub fn selected(&self) -> Option<&CourseSection> {
        let crn = self.selected_crn.as_deref()?;
        self.find(crn)
    }

    /// First section in the snapshot with this CRN.
    pub fn find(&self, crn: &str) -> Option<&CourseSection> {
        self.sections
            .iter()
            .find(|s| s.crn.as_deref() == Some(crn.trim()))
    }
}

/// One line of input in interactive browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Replace the free-text search (empty clears it)
    Search(String),
    /// Set or clear the term filter
    Term(Option<String>),
    /// Set or clear the subject filter
    Subject(Option<String>),
    /// Clear all filters
    Clear,
    /// Show details for a CRN
    Select(String),
    /// Close the details view
    Close,
    /// List term and subject choices
    Filters,
    Help,
    Quit,
    /// A `:` command that was not understood
    Unknown(String),
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return Self::Search(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        let arg_opt = (!arg.is_empty()).then(|| arg.to_string());

        match name.to_ascii_lowercase().as_str() {
            "term" | "t" => Self::Term(arg_opt),
            "subject" | "s" => Self::Subject(arg_opt),
            "clear" | "c" => Self::Clear,
            "select" | "show" => match arg_opt {
                Some(crn) => Self::Select(crn),
                None => Self::Unknown(line.to_string()),
            },
            "close" => Self::Close,
            "filters" | "f" => Self::Filters,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }

    /// Apply a state-changing command. Returns `false` for commands that
    /// only affect what is printed.
    pub fn apply(&self, catalog: &mut Catalog) -> bool {
        match self {
            Self::Search(text) => catalog.set_text(text.clone()),
            Self::Term(term) => catalog.set_term(term.clone()),
            Self::Subject(subject) => catalog.set_subject(subject.clone()),
            Self::Clear => catalog.clear_filters(),
            Self::Select(crn) => return catalog.select(crn).is_some(),
            Self::Close => catalog.clear_selection(),
            Self::Filters | Self::Help | Self::Quit | Self::Unknown(_) => return false,
        }
        true
    }
}

/// Help text for interactive browsing.
pub const BROWSE_HELP: &str = "\
Type text to search by title, subject, course number, instructor or CRN.
  :term <term>        filter by term (no argument clears)
  :subject <subject>  filter by subject (no argument clears)
  :clear              clear all filters
  :select <crn>       show section details
  :close              close the details view
  :filters            list available terms and subjects
  :quit               leave";
