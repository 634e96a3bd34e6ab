//! Pipeline entry points for catalog operations.
//!
//! - `run_load` / `run_probe`: talk to the store at startup
//! - `apply_filters`: narrow the loaded sections to a query
//! - `group_by_course`: fold sections into course groups
//! - `derive_filter_choices`: collect the term and subject lists

pub mod filter;
pub mod group;
pub mod index;
pub mod load;

pub use filter::apply_filters;
pub use group::group_by_course;
pub use index::derive_filter_choices;
pub use load::{run_load, run_probe};
