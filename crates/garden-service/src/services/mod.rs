//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod account;
pub mod adoption;
pub mod attendance;
pub mod context;
pub mod error;
pub mod leaderboard;
pub mod points;

// Re-export all services for convenience
pub use account::AccountService;
pub use adoption::AdoptionService;
pub use attendance::{AttendanceOutcome, AttendanceService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use leaderboard::LeaderboardService;
pub use points::PointsService;
