//! Candidate handlers.
//!
//! Every route here sits behind the authentication middleware.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{Candidate, CandidateInput, CandidateSearch};
use crate::errors::AppResult;
use crate::types::{CsvAttachment, MessageResponse, Paginated};

/// One page of the candidate listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CandidateListResponse {
    pub candidates: Vec<Candidate>,
    /// Matches across all pages
    pub total_count: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl From<Paginated<Candidate>> for CandidateListResponse {
    fn from(page: Paginated<Candidate>) -> Self {
        Self {
            candidates: page.items,
            total_count: page.total_count,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

/// Create candidate routes
pub fn candidate_routes() -> Router<AppState> {
    Router::new()
        .route("/candidates", post(create_candidate))
        .route(
            "/candidates/:id",
            get(get_candidate)
                .put(update_candidate)
                .delete(delete_candidate),
        )
        .route("/all-candidates", get(list_candidates))
        .route("/generate-report", get(generate_report))
}

/// Create a candidate
#[utoipa::path(
    post,
    path = "/candidates",
    tag = "Candidates",
    request_body = CandidateInput,
    responses(
        (status = 201, description = "Candidate created", body = Candidate),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_candidate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CandidateInput>,
) -> AppResult<(StatusCode, Json<Candidate>)> {
    let candidate = state.candidate_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// Search candidates with pagination
#[utoipa::path(
    get,
    path = "/all-candidates",
    tag = "Candidates",
    params(CandidateSearch),
    responses(
        (status = 200, description = "Page of candidates", body = CandidateListResponse),
        (status = 400, description = "Invalid paging parameters"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_candidates(
    State(state): State<AppState>,
    ValidatedQuery(search): ValidatedQuery<CandidateSearch>,
) -> AppResult<Json<CandidateListResponse>> {
    let page = state.candidate_service.search(search).await?;
    Ok(Json(page.into()))
}

/// Get a candidate by ID
#[utoipa::path(
    get,
    path = "/candidates/{id}",
    tag = "Candidates",
    params(("id" = String, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Candidate found", body = Candidate),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Candidate not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Candidate>> {
    let candidate = state.candidate_service.get(&id).await?;
    Ok(Json(candidate))
}

/// Replace a candidate's fields
#[utoipa::path(
    put,
    path = "/candidates/{id}",
    tag = "Candidates",
    params(("id" = String, Path, description = "Candidate ID")),
    request_body = CandidateInput,
    responses(
        (status = 201, description = "Candidate updated", body = Candidate),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Candidate not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CandidateInput>,
) -> AppResult<(StatusCode, Json<Candidate>)> {
    let candidate = state.candidate_service.update(&id, payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// Delete a candidate
#[utoipa::path(
    delete,
    path = "/candidates/{id}",
    tag = "Candidates",
    params(("id" = String, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Candidate deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Candidate not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<MessageResponse> {
    state.candidate_service.delete(&id).await?;
    Ok(MessageResponse::new("Candidate deleted successfully"))
}

/// Download every candidate as CSV
#[utoipa::path(
    get,
    path = "/generate-report",
    tag = "Candidates",
    responses(
        (status = 200, description = "CSV report", content_type = "text/csv", body = String),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn generate_report(State(state): State<AppState>) -> AppResult<CsvAttachment> {
    let csv = state.candidate_service.export().await?;
    Ok(CsvAttachment(csv))
}
