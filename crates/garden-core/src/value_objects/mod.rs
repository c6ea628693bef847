//! Value objects - immutable types that represent domain concepts

mod grade;
mod metric;
mod page;
mod user_id;

pub use grade::Grade;
pub use metric::{LeaderboardMetric, MetricParseError};
pub use page::{Page, PageRequest};
pub use user_id::UserId;
