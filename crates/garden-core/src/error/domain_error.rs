//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{LeaderboardMetric, MetricParseError, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("User not found: {0}")]
    UserNotFoundByName(String),

    // =========================================================================
    // Invalid Argument Errors
    // =========================================================================
    #[error("Unsupported sort metric '{requested}', supported: {supported}")]
    UnsupportedMetric {
        requested: String,
        supported: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Illegal State Errors
    // =========================================================================
    #[error("Profile missing for user {0}")]
    ProfileMissing(UserId),

    #[error("Admin accounts cannot delete themselves; ask another admin")]
    AdminSelfDeletion,

    #[error("Admins cannot target their own account for deletion")]
    SelfDeletionByAdmin,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Build an unsupported-metric error that names the supported set
    #[must_use]
    pub fn unsupported_metric(requested: impl Into<String>) -> Self {
        Self::UnsupportedMetric {
            requested: requested.into(),
            supported: LeaderboardMetric::supported(),
        }
    }

    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) | Self::UserNotFoundByName(_) => "UNKNOWN_USER",
            Self::UnsupportedMetric { .. } => "UNSUPPORTED_METRIC",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ProfileMissing(_) => "PROFILE_MISSING",
            Self::AdminSelfDeletion => "ADMIN_SELF_DELETION",
            Self::SelfDeletionByAdmin => "SELF_DELETION_BY_ADMIN",
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::UserNotFoundByName(_))
    }

    /// Check if this is an invalid-argument error
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::UnsupportedMetric { .. } | Self::ValidationError(_))
    }

    /// Check if this is an illegal-state error (data integrity or lifecycle rule)
    #[must_use]
    pub fn is_illegal_state(&self) -> bool {
        matches!(
            self,
            Self::ProfileMissing(_) | Self::AdminSelfDeletion | Self::SelfDeletionByAdmin
        )
    }

    /// Check if this is an authorization error
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingPermission(_))
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::EmailAlreadyExists)
    }
}

impl From<MetricParseError> for DomainError {
    fn from(err: MetricParseError) -> Self {
        Self::unsupported_metric(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(UserId::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::MissingPermission("DELETE_USER".to_string());
        assert_eq!(err.code(), "MISSING_PERMISSIONS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(UserId::new(1)).is_not_found());
        assert!(DomainError::UserNotFoundByName("bob".to_string()).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_illegal_state() {
        assert!(DomainError::AdminSelfDeletion.is_illegal_state());
        assert!(DomainError::ProfileMissing(UserId::new(1)).is_illegal_state());
        assert!(!DomainError::UsernameAlreadyExists.is_illegal_state());
    }

    #[test]
    fn test_unsupported_metric_lists_supported_set() {
        let err = DomainError::unsupported_metric("likes");
        assert!(err.is_invalid_argument());
        let msg = err.to_string();
        assert!(msg.contains("likes"));
        assert!(msg.contains("points"));
        assert!(msg.contains("weeklyfeedback"));
        assert!(msg.contains("weeklyadopted"));
    }

    #[test]
    fn test_metric_parse_error_conversion() {
        let parse_err = "bogus".parse::<LeaderboardMetric>().unwrap_err();
        let err: DomainError = parse_err.into();
        assert_eq!(err.code(), "UNSUPPORTED_METRIC");
    }
}
