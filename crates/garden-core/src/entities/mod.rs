//! Domain entities - core business objects

mod feedback;
mod user;

pub use feedback::Feedback;
pub use user::{User, UserProfile, UserRole, UserWithProfile, SIGNUP_POINTS};
