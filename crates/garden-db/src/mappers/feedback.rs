//! Feedback row → projection mappers

use garden_core::traits::AuthorCount;
use garden_core::value_objects::UserId;

use crate::models::AuthorCountModel;

/// Convert a grouped-count row into the domain projection
pub fn author_count(model: AuthorCountModel) -> AuthorCount {
    AuthorCount {
        user_id: UserId::new(model.user_id),
        count: model.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_count_row() {
        let mapped = author_count(AuthorCountModel {
            user_id: 3,
            count: 12,
        });
        assert_eq!(mapped.user_id, UserId::new(3));
        assert_eq!(mapped.count, 12);
    }
}
