//! User database model
//!
//! Users and profiles share an identity key and are always hydrated
//! together, so the row model covers the `users` / `user_profiles` join.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Joined row from `users` and `user_profiles`
#[derive(Debug, Clone, FromRow)]
pub struct UserWithProfileModel {
    pub user_id: i64,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub user_picture: Option<String>,
    pub points: i32,
    pub grade: String,
    pub last_attendance_date: Option<NaiveDate>,
    pub adopted_feedback_count: i64,
}

impl UserWithProfileModel {
    /// Check if the user row is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
