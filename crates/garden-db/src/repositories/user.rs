//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use garden_core::entities::{UserProfile, UserWithProfile};
use garden_core::error::DomainError;
use garden_core::traits::{AnonymizeUser, NewUser, RepoResult, UserRepository};
use garden_core::value_objects::{Grade, PageRequest, UserId};

use crate::mappers::user_with_profile;
use crate::models::UserWithProfileModel;

use super::error::{map_db_error, map_unique_violation, profile_missing, user_not_found};

/// Select list for the `users` / `user_profiles` join
const USER_PROFILE_COLUMNS: &str = r"
    u.user_id, u.user_name, u.email, u.role, u.created_at, u.deleted_at,
    p.user_picture, p.points, p.grade, p.last_attendance_date, p.adopted_feedback_count
";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_signup_conflict(e: sqlx::Error) -> DomainError {
        map_unique_violation(e, |constraint| match constraint {
            Some(name) if name.contains("email") => DomainError::EmailAlreadyExists,
            _ => DomainError::UsernameAlreadyExists,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<UserWithProfile>> {
        let result = sqlx::query_as::<_, UserWithProfileModel>(&format!(
            r"
            SELECT {USER_PROFILE_COLUMNS}
            FROM users u
            JOIN user_profiles p ON p.user_id = u.user_id
            WHERE u.user_id = $1 AND u.deleted_at IS NULL
            ",
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(user_with_profile).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<UserWithProfile>> {
        let result = sqlx::query_as::<_, UserWithProfileModel>(&format!(
            r"
            SELECT {USER_PROFILE_COLUMNS}
            FROM users u
            JOIN user_profiles p ON p.user_id = u.user_id
            WHERE u.user_name = $1 AND u.deleted_at IS NULL
            ",
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(user_with_profile).transpose()
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        // Soft-deleted rows included on purpose: their usernames were
        // rewritten at deletion, so any remaining match still blocks signup
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE user_name = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    async fn create(&self, new_user: NewUser, profile: UserProfile) -> RepoResult<UserWithProfile> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, (i64, chrono::DateTime<chrono::Utc>)>(
            r"
            INSERT INTO users (user_name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING user_id, created_at
            ",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(Self::map_signup_conflict)?;

        let (user_id, created_at) = row;

        sqlx::query(
            r"
            INSERT INTO user_profiles
                (user_id, user_picture, points, grade, last_attendance_date, adopted_feedback_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(user_id)
        .bind(&profile.picture)
        .bind(profile.points)
        .bind(profile.grade.label())
        .bind(profile.last_attendance_date)
        .bind(profile.adopted_feedback_count)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let id = UserId::new(user_id);
        Ok(UserWithProfile {
            user: garden_core::entities::User {
                id,
                username: new_user.username,
                email: new_user.email,
                role: new_user.role,
                created_at,
                deleted_at: None,
            },
            profile: UserProfile { user_id: id, ..profile },
        })
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn update_profile(&self, profile: &UserProfile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_profiles
            SET user_picture = $2, points = $3, grade = $4,
                last_attendance_date = $5, adopted_feedback_count = $6
            WHERE user_id = $1
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.picture)
        .bind(profile.points)
        .bind(profile.grade.label())
        .bind(profile.last_attendance_date)
        .bind(profile.adopted_feedback_count)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_missing(profile.user_id));
        }

        Ok(())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<UserWithProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, UserWithProfileModel>(&format!(
            r"
            SELECT {USER_PROFILE_COLUMNS}
            FROM users u
            JOIN user_profiles p ON p.user_id = u.user_id
            WHERE u.user_id = ANY($1) AND u.deleted_at IS NULL
            ",
        ))
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(user_with_profile).collect()
    }

    #[instrument(skip(self))]
    async fn find_top_by_points(&self, n: i64) -> RepoResult<Vec<UserWithProfile>> {
        let results = sqlx::query_as::<_, UserWithProfileModel>(&format!(
            r"
            SELECT {USER_PROFILE_COLUMNS}
            FROM users u
            JOIN user_profiles p ON p.user_id = u.user_id
            WHERE u.deleted_at IS NULL
            ORDER BY p.points DESC, u.user_id ASC
            LIMIT $1
            ",
        ))
        .bind(n)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(user_with_profile).collect()
    }

    #[instrument(skip(self))]
    async fn find_page_by_points(
        &self,
        page: PageRequest,
    ) -> RepoResult<(Vec<UserWithProfile>, i64)> {
        let results = sqlx::query_as::<_, UserWithProfileModel>(&format!(
            r"
            SELECT {USER_PROFILE_COLUMNS}
            FROM users u
            JOIN user_profiles p ON p.user_id = u.user_id
            WHERE u.deleted_at IS NULL
            ORDER BY p.points DESC, u.user_id ASC
            LIMIT $1 OFFSET $2
            ",
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE deleted_at IS NULL
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let users: RepoResult<Vec<_>> = results.into_iter().map(user_with_profile).collect();
        Ok((users?, total))
    }

    #[instrument(skip(self, target), fields(user_id = %target.id))]
    async fn anonymize(&self, target: AnonymizeUser) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE users
            SET user_name = $2, email = $3, password_hash = $4, deleted_at = NOW()
            WHERE user_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(target.id.into_inner())
        .bind(&target.username)
        .bind(&target.email)
        .bind(&target.password_hash)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(target.id));
        }

        sqlx::query(
            r"
            UPDATE user_profiles
            SET user_picture = NULL, grade = $2
            WHERE user_id = $1
            ",
        )
        .bind(target.id.into_inner())
        .bind(Grade::Withdrawn.label())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
