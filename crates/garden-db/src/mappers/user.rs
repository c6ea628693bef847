//! User row → entity mapper

use garden_core::entities::{User, UserProfile, UserRole, UserWithProfile};
use garden_core::error::DomainError;
use garden_core::traits::RepoResult;
use garden_core::value_objects::{Grade, UserId};

use crate::models::UserWithProfileModel;

/// Convert a joined user/profile row into the hydrated entity pair
pub fn user_with_profile(model: UserWithProfileModel) -> RepoResult<UserWithProfile> {
    let id = UserId::new(model.user_id);

    let role = UserRole::from_label(&model.role).ok_or_else(|| {
        DomainError::InternalError(format!("unknown role label '{}' for user {id}", model.role))
    })?;

    let grade = Grade::from_label(&model.grade).ok_or_else(|| {
        DomainError::InternalError(format!("unknown grade label '{}' for user {id}", model.grade))
    })?;

    Ok(UserWithProfile {
        user: User {
            id,
            username: model.user_name,
            email: model.email,
            role,
            created_at: model.created_at,
            deleted_at: model.deleted_at,
        },
        profile: UserProfile {
            user_id: id,
            picture: model.user_picture,
            points: model.points,
            grade,
            last_attendance_date: model.last_attendance_date,
            adopted_feedback_count: model.adopted_feedback_count,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_model() -> UserWithProfileModel {
        UserWithProfileModel {
            user_id: 7,
            user_name: "gardener".to_string(),
            email: "gardener@example.com".to_string(),
            role: "USER".to_string(),
            created_at: Utc::now(),
            deleted_at: None,
            user_picture: None,
            points: 1000,
            grade: "seed".to_string(),
            last_attendance_date: None,
            adopted_feedback_count: 0,
        }
    }

    #[test]
    fn test_maps_valid_row() {
        let mapped = user_with_profile(test_model()).unwrap();
        assert_eq!(mapped.user.id, UserId::new(7));
        assert_eq!(mapped.user.role, UserRole::User);
        assert_eq!(mapped.profile.grade, Grade::Seed);
        assert_eq!(mapped.profile.points, 1000);
    }

    #[test]
    fn test_unknown_role_is_integrity_error() {
        let mut model = test_model();
        model.role = "ROOT".to_string();
        let err = user_with_profile(model).unwrap_err();
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_unknown_grade_is_integrity_error() {
        let mut model = test_model();
        model.grade = "platinum".to_string();
        assert!(user_with_profile(model).is_err());
    }
}
