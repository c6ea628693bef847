//! Repository traits (ports) for the domain layer

mod repositories;

pub use repositories::{
    AnonymizeUser, AuthorCount, LeaderboardRepository, NewUser, RepoResult, UserRepository,
};
