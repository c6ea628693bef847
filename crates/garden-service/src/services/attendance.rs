//! Daily attendance service
//!
//! One fixed bonus per server-local calendar day. The stored
//! `last_attendance_date` is the only dedup key; concurrent same-day
//! submissions are only separated by storage-level isolation.

use chrono::Local;
use garden_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::CurrentUserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::points::PointsService;

/// Fixed points granted for the first attendance of a day
pub const ATTENDANCE_POINTS: i32 = 50;

/// Outcome of an attendance submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceOutcome {
    /// First check-in today, bonus granted
    Credited(CurrentUserResponse),
    /// Already checked in today, nothing changed
    AlreadyCredited(CurrentUserResponse),
}

impl AttendanceOutcome {
    /// Whether this submission granted the bonus
    pub fn credited(&self) -> bool {
        matches!(self, Self::Credited(_))
    }

    /// The account state after the submission
    pub fn user(&self) -> &CurrentUserResponse {
        match self {
            Self::Credited(user) | Self::AlreadyCredited(user) => user,
        }
    }
}

/// Daily attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record today's attendance for the named user
    #[instrument(skip(self))]
    pub async fn record_attendance(&self, username: &str) -> ServiceResult<AttendanceOutcome> {
        let mut uwp = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFoundByName(username.to_string()))?;

        let today = Local::now().date_naive();
        if uwp.profile.last_attendance_date == Some(today) {
            info!(user_id = %uwp.id(), "Attendance already credited today");
            return Ok(AttendanceOutcome::AlreadyCredited(CurrentUserResponse::from(&uwp)));
        }

        PointsService::apply(&mut uwp.profile, ATTENDANCE_POINTS, "daily attendance");
        uwp.profile.last_attendance_date = Some(today);
        self.ctx.user_repo().update_profile(&uwp.profile).await?;

        info!(user_id = %uwp.id(), %today, "Attendance credited");
        Ok(AttendanceOutcome::Credited(CurrentUserResponse::from(&uwp)))
    }
}
