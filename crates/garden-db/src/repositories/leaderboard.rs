//! PostgreSQL implementation of LeaderboardRepository
//!
//! All queries group feedback rows by author inside a time window. The
//! pagination total is COUNT(DISTINCT user_id), not the grouped row count
//! of one page.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use garden_core::traits::{AuthorCount, LeaderboardRepository, RepoResult};
use garden_core::value_objects::PageRequest;

use crate::mappers::author_count;
use crate::models::AuthorCountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LeaderboardRepository
#[derive(Clone)]
pub struct PgLeaderboardRepository {
    pool: PgPool,
}

impl PgLeaderboardRepository {
    /// Create a new PgLeaderboardRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn top_authors(
        &self,
        since: DateTime<Utc>,
        n: i64,
        adopted_only: bool,
    ) -> RepoResult<Vec<AuthorCount>> {
        let adopted_filter = if adopted_only { "AND adopted = TRUE" } else { "" };

        let rows = sqlx::query_as::<_, AuthorCountModel>(&format!(
            r"
            SELECT user_id, COUNT(*) AS count
            FROM feedback
            WHERE created_at >= $1 {adopted_filter}
            GROUP BY user_id
            ORDER BY count DESC, user_id ASC
            LIMIT $2
            ",
        ))
        .bind(since)
        .bind(n)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(author_count).collect())
    }

    async fn authors_page(
        &self,
        since: DateTime<Utc>,
        page: PageRequest,
        adopted_only: bool,
    ) -> RepoResult<(Vec<AuthorCount>, i64)> {
        let adopted_filter = if adopted_only { "AND adopted = TRUE" } else { "" };

        let rows = sqlx::query_as::<_, AuthorCountModel>(&format!(
            r"
            SELECT user_id, COUNT(*) AS count
            FROM feedback
            WHERE created_at >= $1 {adopted_filter}
            GROUP BY user_id
            ORDER BY count DESC, user_id ASC
            LIMIT $2 OFFSET $3
            ",
        ))
        .bind(since)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            r"
            SELECT COUNT(DISTINCT user_id)
            FROM feedback
            WHERE created_at >= $1 {adopted_filter}
            ",
        ))
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(author_count).collect(), total))
    }
}

#[async_trait]
impl LeaderboardRepository for PgLeaderboardRepository {
    #[instrument(skip(self))]
    async fn top_feedback_authors(
        &self,
        since: DateTime<Utc>,
        n: i64,
    ) -> RepoResult<Vec<AuthorCount>> {
        self.top_authors(since, n, false).await
    }

    #[instrument(skip(self))]
    async fn feedback_authors_page(
        &self,
        since: DateTime<Utc>,
        page: PageRequest,
    ) -> RepoResult<(Vec<AuthorCount>, i64)> {
        self.authors_page(since, page, false).await
    }

    #[instrument(skip(self))]
    async fn top_adopted_authors(
        &self,
        since: DateTime<Utc>,
        n: i64,
    ) -> RepoResult<Vec<AuthorCount>> {
        self.top_authors(since, n, true).await
    }

    #[instrument(skip(self))]
    async fn adopted_authors_page(
        &self,
        since: DateTime<Utc>,
        page: PageRequest,
    ) -> RepoResult<(Vec<AuthorCount>, i64)> {
        self.authors_page(since, page, true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgLeaderboardRepository>();
    }
}
