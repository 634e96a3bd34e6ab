//! Plain-text presentation of the catalog.
//!
//! - `render_groups` / `render_summary`: the course list
//! - `render_detail`: one selected section
//! - `render_choices`: available term and subject filters

mod detail;
mod list;

pub use detail::render_detail;
pub use list::{instructor_summary, render_choices, render_groups, render_summary};
