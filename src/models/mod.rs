// src/models/mod.rs

//! Domain models for the catalog application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod group;
mod query;
mod section;

// Re-export all public types
pub use config::{Config, ENV_API_KEY, ENV_STORE_URL, HttpConfig, StoreConfig};
pub use group::{CourseGroup, GroupKey};
pub use query::{FilterChoices, FilterQuery};
pub use section::{CourseSection, RESERVED_SEAT_THRESHOLD};
