//! Points ledger service
//!
//! Single entry point for every point mutation. Grade recomputation lives
//! here so no caller can award points without keeping the grade in step.

use garden_core::entities::{UserProfile, UserWithProfile};
use garden_core::error::DomainError;
use garden_core::value_objects::{Grade, UserId};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Points ledger service
pub struct PointsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PointsService<'a> {
    /// Create a new PointsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a point award to an in-memory profile without persisting
    ///
    /// Returns `true` when the profile changed. Non-positive deltas are
    /// logged and ignored, never an error. The grade is rewritten only
    /// when the recomputed value differs from the stored one.
    pub fn apply(profile: &mut UserProfile, delta: i32, reason: &str) -> bool {
        if delta <= 0 {
            warn!(
                user_id = %profile.user_id,
                delta,
                reason,
                "Ignoring non-positive point award"
            );
            return false;
        }

        profile.points = profile.points.saturating_add(delta);
        info!(
            user_id = %profile.user_id,
            delta,
            total = profile.points,
            reason,
            "Points awarded"
        );

        let next = Grade::for_points(profile.points);
        if next != profile.grade {
            info!(
                user_id = %profile.user_id,
                from = profile.grade.label(),
                to = next.label(),
                "Grade changed"
            );
            profile.grade = next;
        }

        true
    }

    /// Award points to a user and persist the updated profile
    ///
    /// A non-positive delta leaves the stored profile untouched and returns
    /// the account unchanged.
    #[instrument(skip(self))]
    pub async fn add_points(
        &self,
        user_id: UserId,
        delta: i32,
        reason: &str,
    ) -> ServiceResult<UserWithProfile> {
        let mut uwp = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if Self::apply(&mut uwp.profile, delta, reason) {
            self.ctx.user_repo().update_profile(&uwp.profile).await?;
        }

        Ok(uwp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_points(points: i32) -> UserProfile {
        UserProfile {
            points,
            grade: Grade::for_points(points),
            ..UserProfile::new_signup(UserId::new(1))
        }
    }

    #[test]
    fn test_non_positive_delta_is_ignored() {
        let mut profile = profile_with_points(1_000);
        assert!(!PointsService::apply(&mut profile, 0, "test"));
        assert!(!PointsService::apply(&mut profile, -50, "test"));
        assert_eq!(profile.points, 1_000);
        assert_eq!(profile.grade, Grade::Seed);
    }

    #[test]
    fn test_award_crossing_boundary_promotes() {
        let mut profile = profile_with_points(1_999);
        assert!(PointsService::apply(&mut profile, 1, "test"));
        assert_eq!(profile.points, 2_000);
        assert_eq!(profile.grade, Grade::Leaf);
    }

    #[test]
    fn test_award_below_boundary_keeps_grade() {
        let mut profile = profile_with_points(1_000);
        assert!(PointsService::apply(&mut profile, 500, "test"));
        assert_eq!(profile.points, 1_500);
        assert_eq!(profile.grade, Grade::Seed);
    }

    #[test]
    fn test_overflow_saturates() {
        let mut profile = profile_with_points(i32::MAX - 10);
        assert!(PointsService::apply(&mut profile, 100, "test"));
        assert_eq!(profile.points, i32::MAX);
        assert_eq!(profile.grade, Grade::Sage);
    }
}
