//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in garden-core.

mod error;
mod leaderboard;
mod user;

pub use leaderboard::PgLeaderboardRepository;
pub use user::PgUserRepository;
