// src/search.rs
//! Search view controller: one fetch per submission, client-side paging.

use anyhow::Result;
use tracing::{debug, error, info};

use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::pagination::{page_count, page_slice};
use crate::types::{PaginationInfo, PersonResult, SearchResponse};
use crate::Phase;

/// Message shown on the search page when a fetch fails; the underlying
/// error is logged rather than rendered.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch search results. Please try again.";

pub struct SearchController {
    page_size: usize,
    fetch_limit: usize,
    query: String,
    results: Vec<PersonResult>,
    pagination: Option<PaginationInfo>,
    current_page: usize,
    phase: Phase,
    error: Option<String>,
    generation: u64,
}

impl SearchController {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            fetch_limit: config.fetch_limit,
            query: String::new(),
            results: Vec::new(),
            pagination: None,
            current_page: 1,
            phase: Phase::Idle,
            error: None,
            generation: 0,
        }
    }

    /// Start a new search. Empty queries are rejected locally, before any
    /// network call, and leave the current state untouched.
    pub fn begin_search(&mut self, query: &str) -> Result<u64> {
        let query = query.trim();
        if query.is_empty() {
            anyhow::bail!("Search query must not be empty");
        }

        self.query = query.to_string();
        self.current_page = 1;
        self.error = None;
        self.phase = Phase::Loading;
        self.generation += 1;
        Ok(self.generation)
    }

    /// Apply a completed fetch. A stale generation token means a newer
    /// search began while this one was in flight; its result is discarded.
    pub fn finish_search(&mut self, generation: u64, outcome: Result<SearchResponse, ApiError>) {
        if generation != self.generation {
            debug!(
                "Discarding stale search response (generation {} < {})",
                generation, self.generation
            );
            return;
        }

        match outcome {
            Ok(response) => {
                let mut results = response.results;
                results.truncate(self.fetch_limit);
                info!("Search for {:?} returned {} results", self.query, results.len());

                self.pagination = Some(PaginationInfo::derive(
                    results.len(),
                    self.current_page,
                    self.page_size,
                ));
                self.results = results;
                self.phase = Phase::Loaded;
                self.error = None;
            }
            Err(err) => {
                error!("Search for {:?} failed: {}", self.query, err);
                self.results.clear();
                self.pagination = None;
                self.phase = Phase::Failed;
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Validate, fetch once (up to the configured limit), apply.
    pub async fn run_search(&mut self, client: &ApiClient, query: &str) -> Result<()> {
        let generation = self.begin_search(query)?;
        let outcome = client.search_people(self.query.as_str(), self.fetch_limit).await;
        self.finish_search(generation, outcome);
        Ok(())
    }

    /// Move to another page of the already-fetched results. Never refetches.
    /// Returns whether the visible page changed (the caller's cue for its
    /// scroll-to-top side effect).
    pub fn set_page(&mut self, page: usize) -> bool {
        let pages = page_count(self.results.len(), self.page_size);
        if pages == 0 {
            return false;
        }
        let clamped = page.clamp(1, pages);
        if clamped == self.current_page {
            return false;
        }

        self.current_page = clamped;
        if let Some(info) = self.pagination.as_mut() {
            info.current_page = clamped;
        }
        true
    }

    /// Pure slice of the stored results for the current page.
    pub fn current_page_results(&self) -> &[PersonResult] {
        page_slice(&self.results, self.current_page, self.page_size)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Completed search with zero hits; rendered as a notice, not an error.
    pub fn is_empty_result(&self) -> bool {
        self.phase == Phase::Loaded && self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(n: usize) -> PersonResult {
        PersonResult {
            id: format!("id-{}", n),
            name: format!("Person {}", n),
            professional_headline: None,
            picture: None,
            username: format!("person{}", n),
        }
    }

    fn response(count: usize) -> SearchResponse {
        SearchResponse {
            results: (0..count).map(person).collect(),
            pagination: None,
        }
    }

    fn controller() -> SearchController {
        SearchController::new(&AppConfig::default())
    }

    #[test]
    fn empty_query_is_rejected_locally() {
        let mut ctrl = controller();
        assert!(ctrl.begin_search("").is_err());
        assert!(ctrl.begin_search("   ").is_err());
        assert_eq!(ctrl.phase(), Phase::Idle);
    }

    #[test]
    fn successful_search_derives_pagination() {
        let mut ctrl = controller();
        let generation = ctrl.begin_search("ada").unwrap();
        assert_eq!(ctrl.phase(), Phase::Loading);

        ctrl.finish_search(generation, Ok(response(100)));

        assert_eq!(ctrl.phase(), Phase::Loaded);
        let info = ctrl.pagination().unwrap();
        assert_eq!(info.total, 5);
        assert_eq!(info.total_results, 100);
        assert_eq!(info.current_page, 1);
        assert_eq!(ctrl.current_page_results().len(), 21);
    }

    #[test]
    fn failed_search_clears_results_and_sets_banner() {
        let mut ctrl = controller();
        let generation = ctrl.begin_search("ada").unwrap();
        ctrl.finish_search(generation, Ok(response(10)));

        let generation = ctrl.begin_search("bad").unwrap();
        ctrl.finish_search(
            generation,
            Err(ApiError::Status {
                status: 500,
                message: "boom".into(),
            }),
        );

        assert_eq!(ctrl.phase(), Phase::Failed);
        assert_eq!(ctrl.error(), Some(SEARCH_FAILED_MESSAGE));
        assert!(ctrl.current_page_results().is_empty());
        assert!(ctrl.pagination().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut ctrl = controller();
        let old = ctrl.begin_search("first").unwrap();
        let new = ctrl.begin_search("second").unwrap();
        assert!(new > old);

        // The older request resolves after the newer one began.
        ctrl.finish_search(old, Ok(response(50)));
        assert_eq!(ctrl.phase(), Phase::Loading);
        assert!(ctrl.current_page_results().is_empty());

        ctrl.finish_search(new, Ok(response(3)));
        assert_eq!(ctrl.phase(), Phase::Loaded);
        assert_eq!(ctrl.current_page_results().len(), 3);
    }

    #[test]
    fn page_change_slices_without_refetching() {
        let mut ctrl = controller();
        let generation = ctrl.begin_search("ada").unwrap();
        ctrl.finish_search(generation, Ok(response(100)));

        assert!(ctrl.set_page(5));
        assert_eq!(ctrl.current_page_results().len(), 100 - 4 * 21);
        assert_eq!(ctrl.current_page_results()[0].id, "id-84");
        assert_eq!(ctrl.pagination().unwrap().current_page, 5);

        // Same page twice: identical view, reported as unchanged.
        assert!(!ctrl.set_page(5));
        assert_eq!(ctrl.current_page_results().len(), 100 - 4 * 21);
    }

    #[test]
    fn page_change_clamps_to_valid_range() {
        let mut ctrl = controller();
        let generation = ctrl.begin_search("ada").unwrap();
        ctrl.finish_search(generation, Ok(response(30)));

        assert!(ctrl.set_page(99));
        assert_eq!(ctrl.current_page(), 2);
        assert!(ctrl.set_page(0));
        assert_eq!(ctrl.current_page(), 1);
    }

    #[test]
    fn results_are_capped_at_the_fetch_limit() {
        let mut ctrl = controller();
        let generation = ctrl.begin_search("ada").unwrap();
        ctrl.finish_search(generation, Ok(response(140)));

        assert_eq!(ctrl.pagination().unwrap().total_results, 100);
    }

    #[test]
    fn zero_results_is_an_empty_state_not_an_error() {
        let mut ctrl = controller();
        let generation = ctrl.begin_search("nobody").unwrap();
        ctrl.finish_search(generation, Ok(response(0)));

        assert!(ctrl.is_empty_result());
        assert!(ctrl.error().is_none());
        assert!(!ctrl.set_page(2));
    }
}
