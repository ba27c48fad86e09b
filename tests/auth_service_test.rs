//! Auth service unit tests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use mockall::predicate::eq;
use uuid::Uuid;

use candidate_api::domain::{Password, User};
use candidate_api::errors::AppError;
use candidate_api::infra::{
    CandidateRepository, MockCandidateRepository, MockUserRepository, UnitOfWork, UserRepository,
};
use candidate_api::services::{AuthService, Authenticator, TokenIssuer};

const TEST_SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

fn create_test_user(username: &str, password: &str) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        created_at: Utc::now(),
    }
}

/// Test mock for UnitOfWork that wraps a MockUserRepository
struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
    candidate_repo: Arc<MockCandidateRepository>,
}

impl TestUnitOfWork {
    fn new(user_repo: MockUserRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            candidate_repo: Arc::new(MockCandidateRepository::new()),
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

fn service(repo: MockUserRepository) -> Authenticator<TestUnitOfWork> {
    Authenticator::new(
        Arc::new(TestUnitOfWork::new(repo)),
        TokenIssuer::new(TEST_SECRET, Duration::minutes(15)),
    )
}

#[tokio::test]
async fn test_register_stores_hashed_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .with(eq("alice"))
        .returning(|_| Ok(None));
    repo.expect_create()
        .times(1)
        .returning(|username, password_hash| {
            Ok(User {
                id: Uuid::new_v4(),
                username,
                password_hash,
                created_at: Utc::now(),
            })
        });

    let user = service(repo)
        .register("alice".to_string(), "s3cret".to_string())
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_ne!(user.password_hash, "s3cret");
    assert!(Password::from_hash(user.password_hash).verify("s3cret"));
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(|name| Ok(Some(create_test_user(name, "whatever"))));
    repo.expect_create().times(0);

    let result = service(repo)
        .register("alice".to_string(), "s3cret".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_register_rejects_empty_fields() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));
    repo.expect_create().times(0);
    let service = service(repo);

    let empty_name = service.register(String::new(), "s3cret".to_string()).await;
    assert!(matches!(empty_name.unwrap_err(), AppError::Validation(_)));

    let empty_password = service.register("alice".to_string(), String::new()).await;
    assert!(matches!(empty_password.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_login_issues_token_bound_to_user_id() {
    let user = create_test_user("alice", "s3cret");
    let expected_identity = user.id.to_string();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .with(eq("alice"))
        .returning(move |_| Ok(Some(user.clone())));

    let service = service(repo);
    let authorized = service
        .login("alice".to_string(), "s3cret".to_string())
        .await
        .unwrap();

    assert_eq!(authorized.username, "alice");
    assert_eq!(authorized.token_type, "Bearer");
    assert_eq!(authorized.expires_in, 15 * 60);
    assert_eq!(
        service.authenticate(&authorized.access_token).unwrap(),
        expected_identity
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let user = create_test_user("alice", "s3cret");

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(user.clone())));

    let result = service(repo)
        .login("alice".to_string(), "wrong".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_user_looks_like_wrong_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let result = service(repo)
        .login("nobody".to_string(), "s3cret".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[test]
fn test_authenticate_rejects_garbage() {
    let service = service(MockUserRepository::new());
    assert!(matches!(
        service.authenticate("not-a-token").unwrap_err(),
        AppError::Unauthorized
    ));
}

#[test]
fn test_authenticate_rejects_token_from_other_key() {
    let other = TokenIssuer::new(
        b"another-secret-key-that-is-32-bytes-long",
        Duration::minutes(15),
    );
    let issued = other.issue("someone").unwrap();

    let service = service(MockUserRepository::new());
    assert!(matches!(
        service.authenticate(&issued.token).unwrap_err(),
        AppError::Unauthorized
    ));
}
