//! Leaderboard metric - one of three independently defined ranking functions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranking function selector for leaderboard queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardMetric {
    /// Lifetime cumulative points
    Points,
    /// Feedback submitted in the trailing 7-day window
    WeeklyFeedback,
    /// Adopted feedback in the trailing 7-day window
    WeeklyAdopted,
}

impl LeaderboardMetric {
    /// All supported metrics, in documentation order
    pub const ALL: [Self; 3] = [Self::Points, Self::WeeklyFeedback, Self::WeeklyAdopted];

    /// Query-string name of the metric
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::WeeklyFeedback => "weeklyfeedback",
            Self::WeeklyAdopted => "weeklyadopted",
        }
    }

    /// Comma-separated list of supported metric names, for error messages
    #[must_use]
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LeaderboardMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a metric from a query string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported sort metric: {0}")]
pub struct MetricParseError(pub String);

impl FromStr for LeaderboardMetric {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "points" => Ok(Self::Points),
            "weeklyfeedback" => Ok(Self::WeeklyFeedback),
            "weeklyadopted" => Ok(Self::WeeklyAdopted),
            _ => Err(MetricParseError(s.to_string())),
        }
    }
}
