//! Leaderboard service
//!
//! Three ranking metrics over the same response shape. The windowed
//! metrics run in two phases: an ordered grouped-count query, then a batch
//! user fetch re-projected into the count order via an id map. Authors
//! whose account was soft deleted between the two phases simply drop out
//! of the page.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use garden_core::entities::UserWithProfile;
use garden_core::traits::AuthorCount;
use garden_core::value_objects::{LeaderboardMetric, Page, PageRequest, UserId};
use tracing::instrument;

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Length of the rolling window for the weekly metrics, in days
const WINDOW_DAYS: i64 = 7;

/// Leaderboard service
pub struct LeaderboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaderboardService<'a> {
    /// Create a new LeaderboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Top `n` users for a metric given by name
    #[instrument(skip(self))]
    pub async fn top(&self, metric: &str, n: i64) -> ServiceResult<Vec<UserResponse>> {
        let metric: LeaderboardMetric = metric.parse().map_err(garden_core::DomainError::from)?;
        let since = Utc::now() - Duration::days(WINDOW_DAYS);

        let users = match metric {
            LeaderboardMetric::Points => self.ctx.user_repo().find_top_by_points(n).await?,
            LeaderboardMetric::WeeklyFeedback => {
                let counts = self
                    .ctx
                    .leaderboard_repo()
                    .top_feedback_authors(since, n)
                    .await?;
                self.hydrate(&counts).await?
            }
            LeaderboardMetric::WeeklyAdopted => {
                let counts = self
                    .ctx
                    .leaderboard_repo()
                    .top_adopted_authors(since, n)
                    .await?;
                self.hydrate(&counts).await?
            }
        };

        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// One page of users for a metric given by name
    #[instrument(skip(self))]
    pub async fn page(
        &self,
        metric: &str,
        request: PageRequest,
    ) -> ServiceResult<Page<UserResponse>> {
        let metric: LeaderboardMetric = metric.parse().map_err(garden_core::DomainError::from)?;
        let since = Utc::now() - Duration::days(WINDOW_DAYS);

        let (users, total) = match metric {
            LeaderboardMetric::Points => {
                self.ctx.user_repo().find_page_by_points(request).await?
            }
            LeaderboardMetric::WeeklyFeedback => {
                let (counts, total) = self
                    .ctx
                    .leaderboard_repo()
                    .feedback_authors_page(since, request)
                    .await?;
                (self.hydrate(&counts).await?, total)
            }
            LeaderboardMetric::WeeklyAdopted => {
                let (counts, total) = self
                    .ctx
                    .leaderboard_repo()
                    .adopted_authors_page(since, request)
                    .await?;
                (self.hydrate(&counts).await?, total)
            }
        };

        let page = Page::new(users, request, total);
        Ok(page.map(|uwp| UserResponse::from(&uwp)))
    }

    /// Resolve ordered count rows into user entities, preserving the
    /// count-query order
    async fn hydrate(&self, counts: &[AuthorCount]) -> ServiceResult<Vec<UserWithProfile>> {
        if counts.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<UserId> = counts.iter().map(|c| c.user_id).collect();
        let fetched = self.ctx.user_repo().find_by_ids(&ids).await?;

        let mut by_id: HashMap<UserId, UserWithProfile> =
            fetched.into_iter().map(|uwp| (uwp.id(), uwp)).collect();

        Ok(counts
            .iter()
            .filter_map(|c| by_id.remove(&c.user_id))
            .collect())
    }
}
