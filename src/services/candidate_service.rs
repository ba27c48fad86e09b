//! Candidate service - Handles candidate-related business logic.
//!
//! Identifiers arrive as raw strings; anything that does not parse is
//! reported as not found, the same as an id with no record.

use async_trait::async_trait;
use std::sync::Arc;

use super::report;
use crate::domain::{parse_candidate_id, Candidate, CandidateInput, CandidateSearch, CANDIDATE};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

/// Candidate service trait for dependency injection.
#[async_trait]
pub trait CandidateService: Send + Sync {
    /// Create a candidate; `created_at` is set here
    async fn create(&self, input: CandidateInput) -> AppResult<Candidate>;

    /// Filtered, paginated listing
    async fn search(&self, search: CandidateSearch) -> AppResult<Paginated<Candidate>>;

    /// Get candidate by ID
    async fn get(&self, id: &str) -> AppResult<Candidate>;

    /// Replace the mutable fields and return the stored result
    async fn update(&self, id: &str, input: CandidateInput) -> AppResult<Candidate>;

    /// Delete candidate by ID
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Every candidate as CSV
    async fn export(&self) -> AppResult<Vec<u8>>;
}

/// Concrete implementation of CandidateService using Unit of Work.
pub struct CandidateManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CandidateManager<U> {
    /// Create new candidate service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CandidateService for CandidateManager<U> {
    async fn create(&self, input: CandidateInput) -> AppResult<Candidate> {
        input.check()?;

        let candidate = self.uow.candidates().insert(input).await?;
        tracing::info!(candidate_id = %candidate.id, "Created candidate profile");
        Ok(candidate)
    }

    async fn search(&self, search: CandidateSearch) -> AppResult<Paginated<Candidate>> {
        let params = PaginationParams::new(search.page, search.per_page)?;
        let repo = self.uow.candidates();

        let total_count = repo.count(&search.query).await?;
        let items = repo
            .search(&search.query, params.offset(), params.limit())
            .await?;

        Ok(Paginated::new(items, params, total_count))
    }

    async fn get(&self, id: &str) -> AppResult<Candidate> {
        let id = parse_candidate_id(id)?;
        self.uow
            .candidates()
            .find_by_id(id)
            .await?
            .ok_or_not_found(CANDIDATE)
    }

    async fn update(&self, id: &str, input: CandidateInput) -> AppResult<Candidate> {
        input.check()?;
        let id = parse_candidate_id(id)?;
        let repo = self.uow.candidates();

        if !repo.update(id, input).await? {
            return Err(AppError::NotFound(CANDIDATE));
        }

        // Answer with what the store holds, not with the request
        let candidate = repo.find_by_id(id).await?.ok_or_not_found(CANDIDATE)?;
        tracing::info!(candidate_id = %candidate.id, "Updated candidate profile");
        Ok(candidate)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_candidate_id(id)?;

        if !self.uow.candidates().delete(id).await? {
            return Err(AppError::NotFound(CANDIDATE));
        }

        tracing::info!(candidate_id = %id, "Deleted candidate profile");
        Ok(())
    }

    async fn export(&self) -> AppResult<Vec<u8>> {
        let candidates = self.uow.candidates().list_all().await?;
        report::write_csv(&candidates).map_err(|e| {
            tracing::error!("Error generating CSV report: {}", e);
            e
        })
    }
}
