//! CSV export of the candidate collection.

use serde::Serialize;

use crate::domain::Candidate;
use crate::errors::{AppError, AppResult};

/// One CSV row; field order is the header order.
#[derive(Serialize)]
struct CandidateRow<'a> {
    id: String,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    created_at: String,
}

impl<'a> From<&'a Candidate> for CandidateRow<'a> {
    fn from(candidate: &'a Candidate) -> Self {
        Self {
            id: candidate.id.to_string(),
            first_name: &candidate.first_name,
            last_name: &candidate.last_name,
            email: &candidate.email,
            created_at: candidate.created_at.to_rfc3339(),
        }
    }
}

const HEADER: [&str; 5] = ["id", "first_name", "last_name", "email", "created_at"];

/// Render candidates as CSV with a header row, in the order given.
///
/// The header is written even when there are no rows.
pub fn write_csv(candidates: &[Candidate]) -> AppResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(report_error)?;
    for candidate in candidates {
        writer
            .serialize(CandidateRow::from(candidate))
            .map_err(report_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV report flush failed: {}", e)))
}

fn report_error(e: csv::Error) -> AppError {
    AppError::internal(format!("CSV report generation failed: {}", e))
}
