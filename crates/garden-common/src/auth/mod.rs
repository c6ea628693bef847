//! Credential utilities

mod password;

pub use password::{generate_unusable_secret, hash_password, verify_password, PasswordService};
