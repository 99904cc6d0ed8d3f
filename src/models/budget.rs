//! Budget model and cadence windows
//!
//! A budget is a spending limit for one category, evaluated over a repeating
//! calendar window. The `spent` figure is never stored on the budget; it is a
//! derived aggregate computed from the transaction log (see
//! [`crate::store::LedgerStore::budget_status`]).

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// How often a budget window repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Cadence {
    /// Parse a cadence from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            "quarterly" | "quarter" => Some(Self::Quarterly),
            "yearly" | "year" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// The calendar window containing `date`
    ///
    /// Weekly windows run ISO Monday through Sunday; the others align to
    /// calendar month/quarter/year boundaries.
    pub fn window_containing(&self, date: NaiveDate) -> PeriodWindow {
        match self {
            Self::Weekly => {
                let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
                PeriodWindow {
                    start,
                    end: start + Duration::days(6),
                }
            }
            Self::Monthly => {
                let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                    .unwrap_or(date);
                PeriodWindow {
                    start,
                    end: end_of_month(date.year(), date.month()),
                }
            }
            Self::Quarterly => {
                let quarter_start_month = ((date.month() - 1) / 3) * 3 + 1;
                let start = NaiveDate::from_ymd_opt(date.year(), quarter_start_month, 1)
                    .unwrap_or(date);
                PeriodWindow {
                    start,
                    end: end_of_month(date.year(), quarter_start_month + 2),
                }
            }
            Self::Yearly => PeriodWindow {
                start: NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
                end: NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
            },
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Last day of the given month
fn end_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|d| d - Duration::days(1))
        .unwrap_or(NaiveDate::MAX)
}

/// An inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Check if a date falls within this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A category spending limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Budget name
    pub name: String,

    /// Spending limit per window
    pub limit: Money,

    /// Category whose expenses count against this budget
    pub category: String,

    /// Window cadence
    pub cadence: Cadence,

    /// Display color
    #[serde(default)]
    pub color: String,
}

impl Budget {
    /// Create a new budget
    pub fn new(
        name: impl Into<String>,
        limit: Money,
        category: impl Into<String>,
        cadence: Cadence,
    ) -> Self {
        Self {
            id: BudgetId::new(),
            name: name.into(),
            limit,
            category: category.into(),
            cadence,
            color: String::new(),
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit(self.limit));
        }
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        Ok(())
    }
}

/// Derived budget health for a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    /// Sum of matching expenses in the current window
    pub spent: Money,
    /// Limit minus spent; negative when over budget
    pub remaining: Money,
    /// Percentage of the limit used, 0-100+, saturated at 0 for a zero limit
    pub pct_used: u32,
}

impl BudgetStatus {
    /// Compute status from a limit and a spent total
    pub fn compute(limit: Money, spent: Money) -> Self {
        let pct_used = if limit.is_positive() {
            ((spent.cents().max(0) * 100) / limit.cents()) as u32
        } else {
            0
        };
        Self {
            spent,
            remaining: limit - spent,
            pct_used,
        }
    }

    /// True when spending meets or exceeds the limit
    pub fn is_exhausted(&self) -> bool {
        !self.remaining.is_positive()
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    EmptyCategory,
    NegativeLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name cannot be empty"),
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NegativeLimit(limit) => {
                write!(f, "Budget limit cannot be negative, got {}", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_weekly_window_is_iso_week() {
        // 2025-06-18 is a Wednesday
        let window = Cadence::Weekly.window_containing(d(2025, 6, 18));
        assert_eq!(window.start, d(2025, 6, 16)); // Monday
        assert_eq!(window.end, d(2025, 6, 22)); // Sunday
        assert_eq!(window.start.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_monthly_window() {
        let window = Cadence::Monthly.window_containing(d(2025, 2, 14));
        assert_eq!(window.start, d(2025, 2, 1));
        assert_eq!(window.end, d(2025, 2, 28));
    }

    #[test]
    fn test_monthly_window_december() {
        let window = Cadence::Monthly.window_containing(d(2024, 12, 25));
        assert_eq!(window.end, d(2024, 12, 31));
    }

    #[test]
    fn test_quarterly_window() {
        let window = Cadence::Quarterly.window_containing(d(2025, 5, 10));
        assert_eq!(window.start, d(2025, 4, 1));
        assert_eq!(window.end, d(2025, 6, 30));
    }

    #[test]
    fn test_yearly_window() {
        let window = Cadence::Yearly.window_containing(d(2025, 7, 4));
        assert_eq!(window.start, d(2025, 1, 1));
        assert_eq!(window.end, d(2025, 12, 31));
    }

    #[test]
    fn test_window_contains() {
        let window = Cadence::Monthly.window_containing(d(2025, 1, 15));
        assert!(window.contains(d(2025, 1, 1)));
        assert!(window.contains(d(2025, 1, 31)));
        assert!(!window.contains(d(2025, 2, 1)));
    }

    #[test]
    fn test_status_compute() {
        let status = BudgetStatus::compute(Money::from_cents(10000), Money::from_cents(2500));
        assert_eq!(status.remaining.cents(), 7500);
        assert_eq!(status.pct_used, 25);
        assert!(!status.is_exhausted());

        let over = BudgetStatus::compute(Money::from_cents(10000), Money::from_cents(12000));
        assert_eq!(over.remaining.cents(), -2000);
        assert_eq!(over.pct_used, 120);
        assert!(over.is_exhausted());
    }

    #[test]
    fn test_status_zero_limit() {
        let status = BudgetStatus::compute(Money::zero(), Money::from_cents(500));
        assert_eq!(status.pct_used, 0);
    }

    #[test]
    fn test_validation() {
        let budget = Budget::new("Food", Money::from_cents(30000), "groceries", Cadence::Monthly);
        assert!(budget.validate().is_ok());

        let empty = Budget::new("", Money::zero(), "groceries", Cadence::Weekly);
        assert_eq!(empty.validate(), Err(BudgetValidationError::EmptyName));

        let negative = Budget::new("X", Money::from_cents(-1), "groceries", Cadence::Weekly);
        assert!(matches!(
            negative.validate(),
            Err(BudgetValidationError::NegativeLimit(_))
        ));
    }

    #[test]
    fn test_cadence_parse() {
        assert_eq!(Cadence::parse("monthly"), Some(Cadence::Monthly));
        assert_eq!(Cadence::parse("Quarter"), Some(Cadence::Quarterly));
        assert_eq!(Cadence::parse("daily"), None);
    }
}
