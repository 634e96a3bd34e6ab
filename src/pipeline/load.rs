// src/pipeline/load.rs

//! Startup load: fetch the whole catalog and build the browsing state.

use chrono::Utc;

use crate::app::Catalog;
use crate::error::Result;
use crate::services::{CourseFetcher, CourseSource, ProbeReport};

/// Fetch every section from `source` and build a [`Catalog`].
///
/// Progress is logged after each page. A failed page aborts the load.
pub async fn run_load<S: CourseSource>(source: S, page_size: usize) -> Result<Catalog> {
    let start_time = Utc::now();
    log::info!("Loading courses...");

    let fetcher = CourseFetcher::new(source, page_size);
    let sections = fetcher
        .fetch_all_with_progress(|loaded| log::info!("Loading courses... ({loaded} loaded)"))
        .await
        .inspect_err(|e| log::error!("Error loading courses: {e}"))?;

    let catalog = Catalog::new(sections);
    let elapsed = Utc::now() - start_time;
    log::info!(
        "Loaded {} sections ({} terms, {} subjects) in {}ms",
        catalog.sections().len(),
        catalog.choices().terms.len(),
        catalog.choices().subjects.len(),
        elapsed.num_milliseconds()
    );

    Ok(catalog)
}

/// Check the store is reachable and report how many rows it holds.
pub async fn run_probe<S: CourseSource>(source: &S) -> Result<ProbeReport> {
    log::info!("Testing connection...");
    let report = source
        .probe()
        .await
        .inspect_err(|e| log::error!("Connection error: {e}"))?;

    match report.total {
        Some(total) => log::info!("Connected. Total courses in database: {total}"),
        None => log::info!("Connected. The store did not report a row count."),
    }
    if let Some(sample) = &report.sample {
        log::debug!("Sample: {sample:?}");
    }
    Ok(report)
}
