//! User entity and its one-to-one profile

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Grade, UserId};

/// Initial point balance granted at signup
pub const SIGNUP_POINTS: i32 = 1_000;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Stable label used for the `role` column
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse a stored label back into a role
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// User account identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if the account has been soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the account holds the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Anonymized username for a soft-deleted account, derived from the
    /// immutable id so it can never collide with a live signup
    #[must_use]
    pub fn anonymized_username(id: UserId) -> String {
        format!("deleted_user_{id}")
    }

    /// Anonymized email placeholder on a reserved, unguessable domain
    #[must_use]
    pub fn anonymized_email(id: UserId) -> String {
        format!("{id}@deleted.invalid")
    }
}

/// Per-user profile, shared identity key with [`User`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub picture: Option<String>,
    pub points: i32,
    pub grade: Grade,
    pub last_attendance_date: Option<NaiveDate>,
    pub adopted_feedback_count: i64,
}

impl UserProfile {
    /// Fresh profile for a new signup: 1000 points and the matching grade
    #[must_use]
    pub fn new_signup(user_id: UserId) -> Self {
        Self {
            user_id,
            picture: None,
            points: SIGNUP_POINTS,
            grade: Grade::for_points(SIGNUP_POINTS),
            last_attendance_date: None,
            adopted_feedback_count: 0,
        }
    }

    /// Check the stored grade against the points function
    ///
    /// The withdrawn sentinel is exempt; it is terminal and never derived
    /// from points.
    #[must_use]
    pub fn grade_is_consistent(&self) -> bool {
        self.grade.is_withdrawn() || self.grade == Grade::for_points(self.points)
    }
}

/// A user hydrated together with its profile, as returned by lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithProfile {
    pub user: User,
    pub profile: UserProfile,
}

impl UserWithProfile {
    #[inline]
    pub fn id(&self) -> UserId {
        self.user.id
    }
}
