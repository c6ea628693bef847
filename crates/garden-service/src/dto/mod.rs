//! Data transfer objects for service inputs and outputs
//!
//! Request DTOs carry validation for external input; response DTOs
//! serialize domain entities without leaking internal fields.

pub mod requests;
pub mod responses;

pub use requests::SignUpRequest;
pub use responses::{CurrentUserResponse, UserResponse};
