//! Service layer for the catalog application.
//!
//! This module contains the business logic for:
//! - Remote store access (`CourseSource`, `PostgrestSource`)
//! - Full-collection paging (`CourseFetcher`)

mod fetcher;
pub mod source;

#[cfg(test)]
pub(crate) use fetcher::testing;
pub use fetcher::{CourseFetcher, DEFAULT_PAGE_SIZE};
pub use source::{CATALOG_ORDER, CourseSource, PageRange, PostgrestSource, ProbeReport, SortKey};
