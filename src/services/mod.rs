//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and reach repositories through the Unit of Work.

mod auth_service;
mod candidate_service;
pub mod container;
pub mod report;
mod token;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use candidate_service::{CandidateManager, CandidateService};
pub use token::{Claims, IssuedToken, TokenIssuer};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
