//! Database models - SQLx-compatible structs for PostgreSQL tables

mod feedback;
mod user;

pub use feedback::AuthorCountModel;
pub use user::UserWithProfileModel;
