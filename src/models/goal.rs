//! Planner goal reference
//!
//! Goals are owned by the planner module; the finance engine only sees them
//! through the auto-tracking bridge, which turns progress on `financial`
//! goals into synthetic transactions. Goals are not persisted here.

use serde::{Deserialize, Serialize};

use super::ids::GoalId;

/// Category label the bridge accepts for auto-tracking
pub const FINANCIAL_GOAL_CATEGORY: &str = "financial";

/// A read-only view of a planner goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRef {
    pub id: GoalId,
    pub title: String,
    pub current: f64,
    pub target: f64,
    pub unit: String,
    pub category: String,
}

impl GoalRef {
    /// Whether this goal participates in finance auto-tracking
    pub fn is_financial(&self) -> bool {
        self.category.eq_ignore_ascii_case(FINANCIAL_GOAL_CATEGORY)
    }
}
