//! Adoption reward service
//!
//! Grants the fixed bonus when a post author adopts a feedback. Not
//! idempotent per adoption event: invoking it twice for the same event
//! double-awards, so the caller owns single invocation.

use garden_core::error::DomainError;
use garden_core::value_objects::UserId;
use tracing::{info, instrument};

use crate::dto::CurrentUserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::points::PointsService;

/// Fixed points granted to the author of an adopted feedback
pub const ADOPTION_POINTS: i32 = 100;

/// Adoption reward service
pub struct AdoptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdoptionService<'a> {
    /// Create a new AdoptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reward the feedback author for an adoption event
    #[instrument(skip(self))]
    pub async fn on_feedback_adopted(
        &self,
        author_id: UserId,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut uwp = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;

        PointsService::apply(&mut uwp.profile, ADOPTION_POINTS, "feedback adoption");
        uwp.profile.adopted_feedback_count += 1;
        self.ctx.user_repo().update_profile(&uwp.profile).await?;

        info!(
            user_id = %author_id,
            adopted_total = uwp.profile.adopted_feedback_count,
            "Adoption reward granted"
        );
        Ok(CurrentUserResponse::from(&uwp))
    }
}
