//! Grade - tier label derived from a user's cumulative points
//!
//! The stored `grade` column is denormalized; `Grade::for_points` is the
//! single source of truth and must be re-asserted after every point
//! mutation. `Withdrawn` is a terminal sentinel set on account deletion
//! and is never produced by the points function.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Point threshold for the Leaf grade
pub const LEAF_THRESHOLD: i32 = 2_000;
/// Point threshold for the Tree grade
pub const TREE_THRESHOLD: i32 = 5_000;
/// Point threshold for the Sage grade
pub const SAGE_THRESHOLD: i32 = 10_000;

/// User grade tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Below 2000 points
    Seed,
    /// 2000 to 4999 points
    Leaf,
    /// 5000 to 9999 points
    Tree,
    /// 10000 points and above
    Sage,
    /// Terminal label for soft-deleted accounts, not ranking-eligible
    Withdrawn,
}

impl Grade {
    /// Compute the grade for a point total
    ///
    /// Pure step function; monotone non-decreasing in `points`.
    #[must_use]
    pub const fn for_points(points: i32) -> Self {
        if points >= SAGE_THRESHOLD {
            Self::Sage
        } else if points >= TREE_THRESHOLD {
            Self::Tree
        } else if points >= LEAF_THRESHOLD {
            Self::Leaf
        } else {
            Self::Seed
        }
    }

    /// Stable label used for the denormalized `grade` column
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Leaf => "leaf",
            Self::Tree => "tree",
            Self::Sage => "sage",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Parse a stored label back into a grade
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "seed" => Some(Self::Seed),
            "leaf" => Some(Self::Leaf),
            "tree" => Some(Self::Tree),
            "sage" => Some(Self::Sage),
            "withdrawn" => Some(Self::Withdrawn),
            _ => None,
        }
    }

    /// Check if this grade is the terminal withdrawn sentinel
    #[inline]
    #[must_use]
    pub const fn is_withdrawn(&self) -> bool {
        matches!(self, Self::Withdrawn)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
