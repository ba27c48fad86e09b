//! Candidate service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::{always, eq};
use uuid::Uuid;

use candidate_api::domain::{Candidate, CandidateInput, CandidateSearch};
use candidate_api::errors::AppError;
use candidate_api::infra::{
    CandidateRepository, MockCandidateRepository, MockUserRepository, UnitOfWork, UserRepository,
};
use candidate_api::services::{CandidateManager, CandidateService};

fn create_test_candidate(id: Uuid) -> Candidate {
    Candidate {
        id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        created_at: Utc::now(),
    }
}

/// Test mock for UnitOfWork that wraps a MockCandidateRepository
struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
    candidate_repo: Arc<MockCandidateRepository>,
}

impl TestUnitOfWork {
    fn new(candidate_repo: MockCandidateRepository) -> Self {
        Self {
            user_repo: Arc::new(MockUserRepository::new()),
            candidate_repo: Arc::new(candidate_repo),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn candidates(&self) -> Arc<dyn CandidateRepository> {
        self.candidate_repo.clone()
    }
}

fn service(repo: MockCandidateRepository) -> CandidateManager<TestUnitOfWork> {
    CandidateManager::new(Arc::new(TestUnitOfWork::new(repo)))
}

#[tokio::test]
async fn test_create_candidate_success() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_insert().times(1).returning(|input| {
        Ok(Candidate {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            created_at: Utc::now(),
        })
    });

    let candidate = service(repo)
        .create(CandidateInput::new("Ada", "Lovelace", "ada@example.com"))
        .await
        .unwrap();

    assert_eq!(candidate.first_name, "Ada");
    assert_eq!(candidate.email, "ada@example.com");
}

#[tokio::test]
async fn test_create_candidate_missing_field() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_insert().times(0);

    let result = service(repo)
        .create(CandidateInput::new("Ada", "", "ada@example.com"))
        .await;

    match result.unwrap_err() {
        AppError::Validation(message) => assert!(message.contains("last_name")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_translates_page_to_offset() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_count()
        .with(eq("love"))
        .returning(|_| Ok(25));
    repo.expect_search()
        .with(eq("love"), eq(20u64), eq(10u64))
        .returning(|_, _, _| {
            Ok((0..5)
                .map(|_| create_test_candidate(Uuid::new_v4()))
                .collect())
        });

    let page = service(repo)
        .search(CandidateSearch {
            query: "love".to_string(),
            page: 3,
            per_page: 10,
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total_count, 25);
    assert_eq!(page.page, 3);
    assert_eq!(page.total_pages, 3);
}

#[tokio::test]
async fn test_search_rejects_zero_page() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_count().times(0);
    repo.expect_search().times(0);

    let result = service(repo)
        .search(CandidateSearch {
            page: 0,
            ..CandidateSearch::default()
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_get_candidate_success() {
    let id = Uuid::new_v4();

    let mut repo = MockCandidateRepository::new();
    repo.expect_find_by_id()
        .with(eq(id))
        .returning(|id| Ok(Some(create_test_candidate(id))));

    let candidate = service(repo).get(&id.to_string()).await.unwrap();
    assert_eq!(candidate.id, id);
}

#[tokio::test]
async fn test_get_candidate_not_found() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(repo).get(&Uuid::new_v4().to_string()).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
}

#[tokio::test]
async fn test_malformed_id_is_not_found_without_store_access() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_update().times(0);
    repo.expect_delete().times(0);
    let service = service(repo);

    assert!(matches!(
        service.get("not-an-id").await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        service
            .update("not-an-id", CandidateInput::new("A", "B", "c@d.e"))
            .await
            .unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        service.delete("not-an-id").await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_update_returns_stored_record() {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let mut repo = MockCandidateRepository::new();
    repo.expect_update()
        .with(eq(id), always())
        .times(1)
        .returning(|_, _| Ok(true));
    repo.expect_find_by_id().with(eq(id)).returning(move |id| {
        Ok(Some(Candidate {
            id,
            first_name: "Augusta".to_string(),
            last_name: "King".to_string(),
            email: "ada@example.com".to_string(),
            created_at,
        }))
    });

    let updated = service(repo)
        .update(
            &id.to_string(),
            CandidateInput::new("Augusta", "King", "ada@example.com"),
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.created_at, created_at);
}

#[tokio::test]
async fn test_update_missing_candidate() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_update().returning(|_, _| Ok(false));
    repo.expect_find_by_id().times(0);

    let result = service(repo)
        .update(
            &Uuid::new_v4().to_string(),
            CandidateInput::new("Ada", "Lovelace", "ada@example.com"),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_candidate() {
    let id = Uuid::new_v4();

    let mut repo = MockCandidateRepository::new();
    repo.expect_delete().with(eq(id)).times(1).returning(|_| Ok(true));
    assert!(service(repo).delete(&id.to_string()).await.is_ok());

    let mut repo = MockCandidateRepository::new();
    repo.expect_delete().returning(|_| Ok(false));
    assert!(matches!(
        service(repo).delete(&id.to_string()).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_export_writes_header_and_rows() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_list_all().returning(|| {
        Ok(vec![
            create_test_candidate(Uuid::new_v4()),
            create_test_candidate(Uuid::new_v4()),
        ])
    });

    let csv = String::from_utf8(service(repo).export().await.unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,first_name,last_name,email,created_at");
    assert!(lines[1].contains("Ada,Lovelace,ada@example.com"));
}

#[tokio::test]
async fn test_export_empty_store_is_header_only() {
    let mut repo = MockCandidateRepository::new();
    repo.expect_list_all().returning(|| Ok(Vec::new()));

    let csv = String::from_utf8(service(repo).export().await.unwrap()).unwrap();
    assert_eq!(csv.trim_end(), "id,first_name,last_name,email,created_at");
}
