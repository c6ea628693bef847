//! Model to entity mappers
//!
//! Conversions from database rows (garden-db models) to domain entities
//! (garden-core). Label columns (`role`, `grade`) are validated on the way
//! out; an unknown label is a data-integrity error, not a silent default.

mod feedback;
mod user;

pub use feedback::author_count;
pub use user::user_with_profile;
