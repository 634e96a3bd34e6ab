// src/services/fetcher.rs

//! Full-collection fetcher.
//!
//! Pages through the store with offset/limit windows, one request at a time.
//! A page shorter than the page size (or empty) ends the walk. Any failed
//! page fails the whole fetch; nothing is retried and no partial result is
//! returned.

use std::pin::pin;

use futures::stream::{self, Stream, TryStreamExt};

use crate::error::Result;
use crate::models::CourseSection;
use crate::services::source::{CourseSource, PageRange};

/// Default rows per request; matches the usual server-side cap.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Service for loading every course section from a [`CourseSource`].
pub struct CourseFetcher<S> {
    source: S,
    page_size: usize,
}

impl<S: CourseSource> CourseFetcher<S> {
    /// Create a fetcher. A page size of 0 is treated as 1.
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Stream of pages in store order. Each page is requested only after the
    /// previous one has arrived.
    pub fn pages(&self) -> impl Stream<Item = Result<Vec<CourseSection>>> + '_ {
        stream::try_unfold(Some(0), move |offset| self.next_page(offset))
    }

    async fn next_page(
        &self,
        offset: Option<usize>,
    ) -> Result<Option<(Vec<CourseSection>, Option<usize>)>> {
        let Some(offset) = offset else {
            return Ok(None);
        };

        let range = PageRange::new(offset, self.page_size);
        log::debug!("Requesting rows {}-{}", range.offset, range.end());
        let page = self.source.fetch_page(range).await?;
        if page.is_empty() {
            return Ok(None);
        }

        let next = (page.len() >= self.page_size).then_some(offset + self.page_size);
        Ok(Some((page, next)))
    }

    /// Fetch every section, reporting the running total after each page.
    pub async fn fetch_all_with_progress<F>(&self, mut on_progress: F) -> Result<Vec<CourseSection>>
    where
        F: FnMut(usize),
    {
        let mut sections = Vec::new();
        let mut pages = pin!(self.pages());
        while let Some(page) = pages.try_next().await? {
            sections.extend(page);
            on_progress(sections.len());
        }
        Ok(sections)
    }

    /// Fetch every section.
    pub async fn fetch_all(&self) -> Result<Vec<CourseSection>> {
        self.fetch_all_with_progress(|_| {}).await
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::testing::MemorySource;
    use super::*;

    #[tokio::test]
    async fn fetches_two_pages_for_1500_rows() {
        let fetcher = CourseFetcher::new(MemorySource::with_rows(1500), 1000);
        let sections = fetcher.fetch_all().await.unwrap();

        assert_eq!(sections.len(), 1500);
        let crns: HashSet<_> = sections.iter().map(|s| s.crn.clone()).collect();
        assert_eq!(crns.len(), 1500);
        assert_eq!(fetcher.source().ranges(), vec![(0, 999), (1000, 1999)]);
    }

    #[tokio::test]
    async fn exact_multiple_needs_a_trailing_empty_page() {
        let fetcher = CourseFetcher::new(MemorySource::with_rows(2000), 1000);
        let sections = fetcher.fetch_all().await.unwrap();

        assert_eq!(sections.len(), 2000);
        assert_eq!(
            fetcher.source().ranges(),
            vec![(0, 999), (1000, 1999), (2000, 2999)]
        );
    }

    #[tokio::test]
    async fn empty_store_issues_one_request() {
        let fetcher = CourseFetcher::new(MemorySource::with_rows(0), 1000);
        assert!(fetcher.fetch_all().await.unwrap().is_empty());
        assert_eq!(fetcher.source().ranges(), vec![(0, 999)]);
    }

    #[tokio::test]
    async fn preserves_store_order() {
        let fetcher = CourseFetcher::new(MemorySource::with_rows(25), 10);
        let sections = fetcher.fetch_all().await.unwrap();
        let expected: Vec<_> = (0..25).map(|i| Some(format!("{}", 10000 + i))).collect();
        let actual: Vec<_> = sections.into_iter().map(|s| s.crn).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn failed_page_aborts_without_partial_result() {
        let source = MemorySource::with_rows(2500).failing_at(1000);
        let fetcher = CourseFetcher::new(source, 1000);

        let err = fetcher.fetch_all().await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(fetcher.source().ranges(), vec![(0, 999), (1000, 1999)]);
    }

    #[tokio::test]
    async fn server_cap_below_page_size_ends_the_walk() {
        let source = MemorySource::with_rows(1500).capped_at(500);
        let fetcher = CourseFetcher::new(source, 1000);

        let sections = fetcher.fetch_all().await.unwrap();
        assert_eq!(sections.len(), 500);
        assert_eq!(fetcher.source().ranges(), vec![(0, 999)]);
    }

    #[tokio::test]
    async fn reports_progress_after_each_page() {
        let fetcher = CourseFetcher::new(MemorySource::with_rows(2300), 1000);
        let mut seen = Vec::new();
        fetcher
            .fetch_all_with_progress(|loaded| seen.push(loaded))
            .await
            .unwrap();
        assert_eq!(seen, vec![1000, 2000, 2300]);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let fetcher = CourseFetcher::new(MemorySource::with_rows(0), 0);
        assert_eq!(fetcher.page_size(), 1);
    }
}
