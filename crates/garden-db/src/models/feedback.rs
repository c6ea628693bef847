//! Feedback aggregation models

use sqlx::FromRow;

/// Grouped-count row from the windowed leaderboard queries
#[derive(Debug, Clone, Copy, FromRow)]
pub struct AuthorCountModel {
    pub user_id: i64,
    pub count: i64,
}
