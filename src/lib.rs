// src/lib.rs

//! Course Catalog Library
//!
//! Loads course sections from a hosted PostgREST store, then filters, groups
//! and renders them for browsing.

pub mod app;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod services;
pub mod utils;
