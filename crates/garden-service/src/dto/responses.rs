//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output. User ids are
//! serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use garden_core::entities::UserWithProfile;

/// Public user profile (safe for other users to see)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub picture: Option<String>,
    pub points: i32,
    pub grade: &'static str,
    pub adopted_feedback_count: i64,
}

impl From<&UserWithProfile> for UserResponse {
    fn from(uwp: &UserWithProfile) -> Self {
        Self {
            id: uwp.user.id.to_string(),
            username: uwp.user.username.clone(),
            picture: uwp.profile.picture.clone(),
            points: uwp.profile.points,
            grade: uwp.profile.grade.label(),
            adopted_feedback_count: uwp.profile.adopted_feedback_count,
        }
    }
}

/// Full profile for the authenticated account owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: &'static str,
    pub picture: Option<String>,
    pub points: i32,
    pub grade: &'static str,
    pub last_attendance_date: Option<chrono::NaiveDate>,
    pub adopted_feedback_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&UserWithProfile> for CurrentUserResponse {
    fn from(uwp: &UserWithProfile) -> Self {
        Self {
            id: uwp.user.id.to_string(),
            username: uwp.user.username.clone(),
            email: uwp.user.email.clone(),
            role: uwp.user.role.as_str(),
            picture: uwp.profile.picture.clone(),
            points: uwp.profile.points,
            grade: uwp.profile.grade.label(),
            last_attendance_date: uwp.profile.last_attendance_date,
            adopted_feedback_count: uwp.profile.adopted_feedback_count,
            created_at: uwp.user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::entities::{User, UserProfile, UserRole};
    use garden_core::value_objects::UserId;

    fn sample() -> UserWithProfile {
        let id = UserId::new(42);
        UserWithProfile {
            user: User {
                id,
                username: "gardener".to_string(),
                email: "gardener@example.com".to_string(),
                role: UserRole::User,
                created_at: Utc::now(),
                deleted_at: None,
            },
            profile: UserProfile::new_signup(id),
        }
    }

    #[test]
    fn test_public_response_has_no_email() {
        let response = UserResponse::from(&sample());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["grade"], "seed");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_current_user_response_is_complete() {
        let response = CurrentUserResponse::from(&sample());
        assert_eq!(response.email, "gardener@example.com");
        assert_eq!(response.role, "USER");
        assert_eq!(response.points, 1000);
    }
}
