//! Transaction model
//!
//! A transaction is the unit of the ledger log and the source of truth for
//! every derived aggregate. Each transaction decomposes into one or two
//! signed postings: income credits its account, an expense debits it, and a
//! transfer debits the source and credits the destination for the same
//! amount, netting to zero across the pair.
//!
//! Synthetic transactions (goal auto-tracking, debt settlement) carry their
//! origin in [`TransactionSource`] — a first-class tag, not description text —
//! which is what makes repeated domain events idempotent.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::CurrencyCode;
use super::ids::{AccountId, DebtId, GoalId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// Planner event kinds that may drive synthetic transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalEvent {
    GoalProgress,
    GoalCompleted,
}

impl fmt::Display for GoalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoalProgress => write!(f, "goal-progress"),
            Self::GoalCompleted => write!(f, "goal-completed"),
        }
    }
}

/// Origin of a transaction
///
/// Closed tagged variant; `(goal_id, event)` is the idempotency key for
/// goal-driven postings, `debt_id` the one for settlements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum TransactionSource {
    #[default]
    Manual,
    Goal {
        goal_id: GoalId,
        event: GoalEvent,
    },
    DebtSettlement {
        debt_id: DebtId,
    },
}

/// A single signed amount applied to one account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub account_id: AccountId,
    pub amount: Money,
}

/// A posted transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Direction
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Magnitude; always strictly positive, sign comes from the postings
    pub amount: Money,

    /// Currency of the amount
    pub currency: CurrencyCode,

    /// Free-form category label used by budgets
    #[serde(default)]
    pub category: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// The account debited (expense/transfer) or credited (income)
    pub account_id: AccountId,

    /// Destination account; present only for transfers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_to: Option<AccountId>,

    /// Transaction date
    pub date: NaiveDate,

    /// Optional time of day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,

    /// What produced this transaction
    #[serde(default)]
    pub source: TransactionSource,

    /// Insertion timestamp; also the tie-breaker for date ordering
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a non-transfer transaction
    pub fn new(
        kind: TransactionKind,
        account_id: AccountId,
        amount: Money,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            currency,
            category: String::new(),
            description: String::new(),
            account_id,
            transfer_to: None,
            date,
            time: None,
            source: TransactionSource::Manual,
            created_at: Utc::now(),
        }
    }

    /// Create a transfer between two accounts
    pub fn transfer(
        from: AccountId,
        to: AccountId,
        amount: Money,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Self {
        let mut txn = Self::new(TransactionKind::Transfer, from, amount, currency, date);
        txn.transfer_to = Some(to);
        txn
    }

    /// Decompose into signed postings
    ///
    /// Income credits the account, an expense debits it, and a transfer
    /// yields a debit/credit pair netting to zero.
    pub fn postings(&self) -> Vec<Posting> {
        match self.kind {
            TransactionKind::Income => vec![Posting {
                account_id: self.account_id,
                amount: self.amount,
            }],
            TransactionKind::Expense => vec![Posting {
                account_id: self.account_id,
                amount: -self.amount,
            }],
            TransactionKind::Transfer => {
                let mut postings = vec![Posting {
                    account_id: self.account_id,
                    amount: -self.amount,
                }];
                if let Some(to) = self.transfer_to {
                    postings.push(Posting {
                        account_id: to,
                        amount: self.amount,
                    });
                }
                postings
            }
        }
    }

    /// The `(goal, event)` idempotency tag, when goal-driven
    pub fn goal_tag(&self) -> Option<(GoalId, GoalEvent)> {
        match self.source {
            TransactionSource::Goal { goal_id, event } => Some((goal_id, event)),
            _ => None,
        }
    }

    /// The debt this transaction settles, when settlement-driven
    pub fn settles_debt(&self) -> Option<DebtId> {
        match self.source {
            TransactionSource::DebtSettlement { debt_id } => Some(debt_id),
            _ => None,
        }
    }

    /// True when any posting touches the given account
    pub fn touches_account(&self, account_id: AccountId) -> bool {
        self.account_id == account_id || self.transfer_to == Some(account_id)
    }

    /// Validate the transaction structure
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        match self.kind {
            TransactionKind::Transfer => match self.transfer_to {
                None => Err(TransactionValidationError::TransferWithoutDestination),
                Some(to) if to == self.account_id => {
                    Err(TransactionValidationError::SelfTransfer)
                }
                Some(_) => Ok(()),
            },
            _ => {
                if self.transfer_to.is_some() {
                    Err(TransactionValidationError::DestinationOnNonTransfer)
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    TransferWithoutDestination,
    SelfTransfer,
    DestinationOnNonTransfer,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::TransferWithoutDestination => {
                write!(f, "Transfer requires a destination account")
            }
            Self::SelfTransfer => write!(f, "Cannot transfer to the same account"),
            Self::DestinationOnNonTransfer => {
                write!(f, "Only transfers may carry a destination account")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
