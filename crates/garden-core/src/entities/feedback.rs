//! Feedback entity - counting source for the weekly leaderboard metrics

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Feedback left on a post by a user
///
/// Full feedback CRUD lives outside this core; rows are read here only to
/// aggregate weekly submission and adoption counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: i64,
    pub post_id: i64,
    pub user_id: UserId,
    pub rating: f64,
    pub adopted: bool,
    pub likes_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    /// Check whether this feedback counts toward a window starting at `since`
    #[inline]
    pub fn in_window(&self, since: DateTime<Utc>) -> bool {
        self.created_at >= since
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_in_window() {
        let now = Utc::now();
        let feedback = Feedback {
            id: 1,
            post_id: 10,
            user_id: UserId::new(5),
            rating: 4.5,
            adopted: false,
            likes_count: 0,
            created_at: now - Duration::days(3),
            updated_at: now - Duration::days(3),
        };
        assert!(feedback.in_window(now - Duration::days(7)));
        assert!(!feedback.in_window(now - Duration::days(1)));
    }
}
