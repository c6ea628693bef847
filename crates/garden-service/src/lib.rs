//! # garden-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services are thin structs borrowing a [`services::ServiceContext`]; all
//! state lives behind the repository traits so tests can swap in in-memory
//! implementations.

pub mod dto;
pub mod services;

pub use services::{
    AccountService, AdoptionService, AttendanceOutcome, AttendanceService, LeaderboardService,
    PointsService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
