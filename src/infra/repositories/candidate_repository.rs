//! Candidate repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use super::entities::candidate::{self, ActiveModel, Entity as CandidateEntity};
use crate::domain::{Candidate, CandidateInput};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Candidate repository trait for dependency injection.
///
/// Listing methods return rows in insertion order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Insert a candidate; the store assigns the id
    async fn insert(&self, input: CandidateInput) -> AppResult<Candidate>;

    /// Find candidate by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Candidate>>;

    /// One page of candidates matching `query`
    async fn search(&self, query: &str, offset: u64, limit: u64) -> AppResult<Vec<Candidate>>;

    /// Number of candidates matching `query`
    async fn count(&self, query: &str) -> AppResult<u64>;

    /// Replace the mutable fields; returns false when no row matched
    async fn update(&self, id: Uuid, input: CandidateInput) -> AppResult<bool>;

    /// Delete by ID; returns false when no row matched
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Every candidate
    async fn list_all(&self) -> AppResult<Vec<Candidate>>;
}

/// Concrete implementation of CandidateRepository
pub struct CandidateStore {
    db: DatabaseConnection,
}

impl CandidateStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn matching(query: &str) -> Select<CandidateEntity> {
        CandidateEntity::find().filter(search_condition(query))
    }
}

/// Case-insensitive substring match on first name, last name or email.
/// An empty query matches every row.
///
/// Both sides go through the backend's `LOWER`, so folding is the same for
/// the column and the pattern whatever the backend's Unicode support.
fn search_condition(query: &str) -> Condition {
    if query.is_empty() {
        return Condition::all();
    }

    let pattern = format!("%{}%", escape_like(query));
    [
        candidate::Column::FirstName,
        candidate::Column::LastName,
        candidate::Column::Email,
    ]
    .into_iter()
    .fold(Condition::any(), |condition, column| {
        condition.add(Expr::cust_with_exprs(
            "LOWER($1) LIKE LOWER($2) ESCAPE '!'",
            [Expr::col(column).into(), Expr::val(pattern.clone()).into()],
        ))
    })
}

/// Search text is literal: LIKE wildcards typed by the user are escaped
/// with `!`.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '!' | '%' | '_') {
            escaped.push('!');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl CandidateRepository for CandidateStore {
    async fn insert(&self, input: CandidateInput) -> AppResult<Candidate> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Candidate::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Candidate>> {
        let result = CandidateEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Candidate::from))
    }

    async fn search(&self, query: &str, offset: u64, limit: u64) -> AppResult<Vec<Candidate>> {
        let models = Self::matching(query)
            .order_by_asc(candidate::Column::CreatedAt)
            .order_by_asc(candidate::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Candidate::from).collect())
    }

    async fn count(&self, query: &str) -> AppResult<u64> {
        Self::matching(query)
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, id: Uuid, input: CandidateInput) -> AppResult<bool> {
        // Single statement: the three fields change together, created_at untouched
        let result = CandidateEntity::update_many()
            .col_expr(candidate::Column::FirstName, Expr::value(input.first_name))
            .col_expr(candidate::Column::LastName, Expr::value(input.last_name))
            .col_expr(candidate::Column::Email, Expr::value(input.email))
            .filter(candidate::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = CandidateEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn list_all(&self) -> AppResult<Vec<Candidate>> {
        let models = CandidateEntity::find()
            .order_by_asc(candidate::Column::CreatedAt)
            .order_by_asc(candidate::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Candidate::from).collect())
    }
}
