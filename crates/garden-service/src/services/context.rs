//! Service context - dependency container for services
//!
//! Holds the repositories and supporting services every business operation
//! needs. Repositories are trait objects so tests can inject in-memory
//! implementations.

use std::sync::Arc;

use garden_common::auth::PasswordService;
use garden_core::traits::{LeaderboardRepository, UserRepository};
use garden_db::{PgLeaderboardRepository, PgPool, PgUserRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    leaderboard_repo: Arc<dyn LeaderboardRepository>,
    password_service: Arc<PasswordService>,
}

impl ServiceContext {
    /// Create a new ServiceContext from explicit dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        leaderboard_repo: Arc<dyn LeaderboardRepository>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            user_repo,
            leaderboard_repo,
            password_service,
        }
    }

    /// Wire the context against a live PostgreSQL pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgLeaderboardRepository::new(pool)),
            Arc::new(PasswordService::new()),
        )
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the leaderboard repository
    pub fn leaderboard_repo(&self) -> &dyn LeaderboardRepository {
        self.leaderboard_repo.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }
}

/// Builder for ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    leaderboard_repo: Option<Arc<dyn LeaderboardRepository>>,
    password_service: Option<Arc<PasswordService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn leaderboard_repo(mut self, repo: Arc<dyn LeaderboardRepository>) -> Self {
        self.leaderboard_repo = Some(repo);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.leaderboard_repo.ok_or_else(|| {
                super::error::ServiceError::validation("leaderboard_repo is required")
            })?,
            self.password_service.unwrap_or_default(),
        ))
    }
}
