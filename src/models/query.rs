// src/models/query.rs

//! Filter query and the filter choices offered to the user.

use serde::{Deserialize, Serialize};

/// A user's filter selection. Empty strings count as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Free-text search over title, subject, course number, instructor, CRN
    #[serde(default)]
    pub text: Option<String>,

    /// Exact term description
    #[serde(default)]
    pub term_desc: Option<String>,

    /// Exact subject code
    #[serde(default)]
    pub subject: Option<String>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_term(mut self, term_desc: impl Into<String>) -> Self {
        self.term_desc = Some(term_desc.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Normalised search text: trimmed, lowercased, `None` when blank.
    pub fn search_text(&self) -> Option<String> {
        active(&self.text).map(|t| t.trim().to_lowercase())
    }

    pub fn term(&self) -> Option<&str> {
        active(&self.term_desc)
    }

    pub fn subject(&self) -> Option<&str> {
        active(&self.subject)
    }

    /// True when no axis filters anything.
    pub fn is_empty(&self) -> bool {
        self.search_text().is_none() && self.term().is_none() && self.subject().is_none()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Distinct values available for the term and subject filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterChoices {
    pub terms: Vec<String>,
    pub subjects: Vec<String>,
}
