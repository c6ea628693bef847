//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method that mutates state executes
//! as one statement (or one transaction) on the backing store; that is
//! the commit boundary the services rely on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{UserProfile, UserRole, UserWithProfile};
use crate::error::DomainError;
use crate::value_objects::{PageRequest, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Fields for inserting a new user with its profile
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Fields rewritten by the soft-delete anonymization, applied atomically
#[derive(Debug, Clone)]
pub struct AnonymizeUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user by ID, profile eagerly joined
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<UserWithProfile>>;

    /// Find an active user by username, profile eagerly joined
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<UserWithProfile>>;

    /// Check if a username is taken (soft-deleted rows included)
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an email is taken (soft-deleted rows included)
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a user and its profile, returning the hydrated pair
    async fn create(&self, new_user: NewUser, profile: UserProfile) -> RepoResult<UserWithProfile>;

    /// Persist profile mutations (points, grade, attendance date, counters)
    async fn update_profile(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Batch fetch active users by id set; result order is NOT guaranteed
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<UserWithProfile>>;

    /// Top `n` active users by points descending, ties by user id ascending
    async fn find_top_by_points(&self, n: i64) -> RepoResult<Vec<UserWithProfile>>;

    /// Page of active users by points descending plus the active-user total
    async fn find_page_by_points(
        &self,
        page: PageRequest,
    ) -> RepoResult<(Vec<UserWithProfile>, i64)>;

    /// Anonymize PII, clear the profile picture, set the withdrawn grade,
    /// and stamp `deleted_at`, all in one transaction
    async fn anonymize(&self, target: AnonymizeUser) -> RepoResult<()>;
}

// ============================================================================
// Leaderboard Repository
// ============================================================================

/// One grouped-count row: a feedback author and their count in the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorCount {
    pub user_id: UserId,
    pub count: i64,
}

#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Top `n` authors by feedback submitted since `since`,
    /// ordered count descending then user id ascending
    async fn top_feedback_authors(
        &self,
        since: DateTime<Utc>,
        n: i64,
    ) -> RepoResult<Vec<AuthorCount>>;

    /// Page of authors by feedback submitted since `since`, plus the
    /// distinct-author total for pagination (the grouped row count is not
    /// the totals input)
    async fn feedback_authors_page(
        &self,
        since: DateTime<Utc>,
        page: PageRequest,
    ) -> RepoResult<(Vec<AuthorCount>, i64)>;

    /// Top `n` authors by adopted feedback since `since`
    async fn top_adopted_authors(
        &self,
        since: DateTime<Utc>,
        n: i64,
    ) -> RepoResult<Vec<AuthorCount>>;

    /// Page of authors by adopted feedback since `since`, plus the
    /// distinct-author total
    async fn adopted_authors_page(
        &self,
        since: DateTime<Utc>,
        page: PageRequest,
    ) -> RepoResult<(Vec<AuthorCount>, i64)>;
}
