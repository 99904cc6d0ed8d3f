//! Core data models for the ledger engine
//!
//! This module contains the data structures of the finance domain: accounts,
//! transactions, budgets, debts, and the planner goal reference type.

pub mod account;
pub mod budget;
pub mod currency;
pub mod debt;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use budget::{Budget, BudgetStatus, Cadence, PeriodWindow};
pub use currency::{CurrencyCode, BASE_CURRENCY, SUPPORTED_CURRENCIES};
pub use debt::{Debt, DebtDirection};
pub use goal::{GoalRef, FINANCIAL_GOAL_CATEGORY};
pub use ids::{AccountId, BudgetId, DebtId, GoalId, TransactionId};
pub use money::Money;
pub use transaction::{
    GoalEvent, Posting, Transaction, TransactionKind, TransactionSource,
};
